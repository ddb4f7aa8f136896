pub mod flash;
pub mod link;
pub mod pattern;
pub mod types;
pub mod visible;

pub use flash::*;
pub use link::*;
pub use pattern::*;
pub use types::*;
pub use visible::*;
