//! Tech News Hub core library
//!
//! Article types, the error type and the storage port shared by both
//! article services. No web framework or database driver lives here.

pub mod error;
pub mod ports;
pub mod types;

pub use error::{ArticleError, Result};
pub use ports::{ArticleStore, Draft};
pub use types::*;
