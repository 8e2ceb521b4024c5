//! Value objects - immutable types that represent domain concepts

mod guid;
mod record_id;

pub use guid::{Guid, GuidParseError};
pub use record_id::{RecordId, RecordIdParseError};
