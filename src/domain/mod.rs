//! Domain layer: the path-to-documentation mapping tables.
//!
//! Pure lookups and string construction; no I/O. Everything here is
//! deterministic: same input, same output.

mod docs_map;

pub use docs_map::{DocsMap, Kind};
