//! Web front end that translates a text through one LLM call and grades the
//! translation through a second one.

pub mod config_manager;
pub mod handlers;
pub mod llm;
pub mod routes;
pub mod state;
pub mod translate;
pub mod views;
