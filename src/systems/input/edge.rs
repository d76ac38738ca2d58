/// Turns a held button into a single trigger on the press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RisingEdge {
    previously_pressed: bool,
}

impl RisingEdge {
    /// True only on the frame the button goes from released to pressed.
    pub fn update(&mut self, pressed: bool) -> bool {
        let triggered = pressed && !self.previously_pressed;
        self.previously_pressed = pressed;
        triggered
    }

    pub fn is_held(&self) -> bool {
        self.previously_pressed
    }
}
