//! Terminal setup and teardown for the interactive UI.

mod setup;

pub use setup::{enter_tui_mode, leave_tui_mode, setup_panic_hook, Tui};
