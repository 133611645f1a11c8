//! Records served by the directory API and the payloads built from them.

mod post;
mod profile;
mod user;

pub use post::PostRecord;
pub use profile::Profile;
pub use user::{Address, Company, Geo, InvalidUserId, UserId, UserRecord};
