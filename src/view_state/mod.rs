//! Per-screen view state.
//!
//! ```text
//!   begin()            resolve(v)
//! ──────────▶ Loading ────────────▶ Ready(v)
//!               │
//!               │ fail(e)
//!               ▼
//!            Error(e)
//! ```
//!
//! `begin()` is the only way back to `Loading`, and it starts a new cycle.
//!
//! - [`ViewState`]: the tagged snapshot the renderer reads
//! - [`ViewStateStore`]: the owned, observable holder a controller mutates

mod state;
mod store;

pub use state::ViewState;
pub use store::ViewStateStore;
