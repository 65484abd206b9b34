//! Code generation entry point.
//!
//! No backend exists yet. `compile` accepts a finished Program and always
//! reports that code generation is not implemented; nothing is written.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Compiles `program` into `output`, returning the path of the artifact.
pub fn compile(program: &Program, output: &Path) -> Result<PathBuf, Error> {
    warn!(
        "code generation requested for {} declaration(s) -> {}",
        program.body.len(),
        output.display()
    );

    Err(Error::new(
        ErrorImpl::NotImplementedError {
            feature: String::from("code generation"),
        },
        Position::null(),
    ))
}
