//! photogen-server: photo description service
//!
//! Accepts an uploaded photo, asks a multimodal completion API for a
//! description and tags, and persists the result. Also exposes plain CRUD
//! over the stored photos and generations.

pub mod completion;
pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{CompletionConfig, DatabaseConfig};
pub use http::{run_server, AppState, ServerConfig};
