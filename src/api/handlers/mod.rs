//! HTTP request handlers.
//!
//! Each handler module corresponds to one route family.

pub mod download_count;
pub mod migration;
pub mod redirect;
pub mod root;

pub use download_count::download_count_handler;
pub use migration::{migration_anchor_handler, migration_handler};
pub use redirect::{error_docs_anchor_handler, error_docs_handler};
pub use root::root_handler;
