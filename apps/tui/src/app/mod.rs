// App module for the grand strategy explorer
// Holds terminal-side state and routes key presses into the core reducer

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, CardFilter};
