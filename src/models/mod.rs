pub mod group;
pub mod lease;
pub mod user;

pub use group::WorkingGroup;
pub use lease::LeaseRecord;
pub use user::{Profile, User};
