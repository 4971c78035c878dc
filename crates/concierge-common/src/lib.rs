pub mod errors;
pub mod id;

pub use errors::{ConciergeError, ConfigError};
pub use id::{new_id, SessionId};

/// Default character budget for the local conversation history.
pub const DEFAULT_HISTORY_MAX_LENGTH: usize = 3000;
