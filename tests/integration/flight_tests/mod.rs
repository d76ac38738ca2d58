mod input;
mod plugin;
mod scenario;
