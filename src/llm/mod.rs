pub mod bridge;
pub mod endpoint_factory;
pub mod endpoint_interface;
pub mod error;
pub mod generic_json_endpoint;
pub mod openai_chat_endpoint;
pub mod prompt;

pub use bridge::*;
pub use endpoint_factory::*;
pub use endpoint_interface::*;
pub use error::*;
pub use prompt::*;
