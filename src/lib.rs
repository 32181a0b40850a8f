//! Eureka (workspace facade crate).
//!
//! The binary and integration tests import everything through
//! `tui_eureka::{core,input,term,types}`; the implementation lives in
//! dedicated crates under `crates/`.

pub use tui_eureka_core as core;
pub use tui_eureka_input as input;
pub use tui_eureka_term as term;
pub use tui_eureka_types as types;
