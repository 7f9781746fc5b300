//! JSON host harness for deps-decor.
//!
//! Reads a buffer, its dependency occurrences and their resolved version
//! lists from stdin and writes the rendered decorations to stdout. Manifest
//! parsing and registry lookups stay with whoever produces the request.

pub mod protocol;

pub use protocol::{DecorateRequest, DecorateResponse, ItemRequest, decorate, run};
