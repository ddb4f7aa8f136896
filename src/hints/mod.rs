pub mod compose;
pub mod labels;

pub use compose::*;
pub use labels::*;
