pub mod algo;
pub mod core;
pub mod store;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{algo::ShortestPaths, core::id::NodeId, store::GraphStore};
}
