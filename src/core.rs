pub mod error;
pub mod id;

pub use error::{BuildError, BuildErrorKind, CapacityError, NoPathError, OutOfRangeError};
pub use id::NodeId;
