//! Error types and error handling for the front end.
//!
//! This module defines the error type shared by every stage. It includes:
//!
//! - Error structures with source position information
//! - Hard lexing failures and recoverable parse diagnostics
//! - The aggregate build failure raised once any diagnostic was recorded
//! - Helpful error messages and suggestions

pub mod errors;
