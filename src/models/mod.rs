pub mod common;
pub mod topic;
pub mod source;
pub mod note;
pub mod insight;
pub mod collection;

pub use common::*;
pub use topic::*;
pub use source::*;
pub use note::*;
pub use insight::*;
pub use collection::*;
