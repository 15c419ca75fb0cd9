pub mod bridge;
pub mod main;
pub mod pipeline;
pub mod server;

pub use bridge::*;
pub use main::*;
pub use pipeline::*;
pub use server::*;
