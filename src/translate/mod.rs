pub mod interface;
pub mod pipeline;

pub use interface::*;
pub use pipeline::*;
