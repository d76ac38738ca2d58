use bevy::prelude::*;

use crate::components::{Helicopter, KinematicState};

/// Presentation sink: copies the simulated pose onto the entity's render
/// transform. Entities without a `Transform` (no model loaded yet) are skipped,
/// and scale is left to whoever set up the model.
pub fn presentation_system(
    mut query: Query<(&KinematicState, &mut Transform), (With<Helicopter>, Changed<KinematicState>)>,
) {
    for (state, mut transform) in query.iter_mut() {
        sync_transform(state, &mut transform);
    }
}

pub fn sync_transform(state: &KinematicState, transform: &mut Transform) {
    let pose = state.to_transform();
    transform.translation = pose.translation;
    transform.rotation = pose.rotation;
}
