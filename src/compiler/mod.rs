//! Code generation module for the compiler.
//!
//! Consumes a completed Program. The backend is not written yet, so the
//! only entry point reports an explicit "not implemented" error.

pub mod compiler;
