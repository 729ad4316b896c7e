pub mod kind;
pub mod presence;
pub mod user;

pub use kind::ChartKind;
pub use presence::{PresenceData, PresenceEntry, UserPresence};
pub use user::{User, UserDirectory, UserId};
