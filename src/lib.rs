//! Ten-pin bowling scorekeeper (workspace facade crate).
//!
//! The scoring rules live in dedicated crates under `crates/`; this package
//! re-exports them as `tenpin::{core,term,types}` and adds the binary's run
//! configuration.

pub mod config;

pub use tenpin_core as core;
pub use tenpin_term as term;
pub use tenpin_types as types;
