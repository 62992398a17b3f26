mod events;
mod input_state;
mod mouse_click;
mod mouse_hover;
mod render;
mod state;

// Re-export public types
pub use input_state::InputState;
pub use state::App;
