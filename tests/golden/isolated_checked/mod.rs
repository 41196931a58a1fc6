//! Generated by glreg-gen 0.1.0
//!
//! Original copyright from the registry:
//! Test registry.
#![allow(
    dead_code,
    non_snake_case,
    non_upper_case_globals,
    unused_imports,
    unused_mut,
    clippy::missing_safety_doc,
    clippy::too_many_arguments
)]
