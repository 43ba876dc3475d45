//! Export core modules shared across the CLI and WASM wrappers.

#[cfg(feature = "excel")]
pub mod excel_core;
