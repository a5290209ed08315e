pub mod events;
pub mod focus;

pub use events::{EventHandled, HoverTracker, InteractionEvent};
pub use focus::{FocusChange, FocusState};
