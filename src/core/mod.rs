pub mod error;
pub mod types;

pub use error::{PurgeError, Result};
pub use types::{Anchor, CellPos, GridId, Observer};
