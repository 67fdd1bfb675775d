//! Transfer objects and request values
//!
//! These are the shapes accepted and returned at the HTTP boundary. Database
//! records live in `db::repos`; conversions go record -> `*Out`.

pub mod generation;
pub mod length;
pub mod log;
pub mod pagination;
pub mod photo;
pub mod validation;

pub use generation::{GenerationCreate, GenerationOut, GenerationPatch, GenerationResponse};
pub use length::Length;
pub use log::{LogCreate, LogLevel, LogOut};
pub use pagination::{Pagination, PaginationParams};
pub use photo::{PhotoCreate, PhotoOut};
pub use validation::ValidationError;
