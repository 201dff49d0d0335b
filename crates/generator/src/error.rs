use std::fmt::Debug;
use std::path::PathBuf;
use thiserror::Error;

use crate::table::{MAX_BIND_COUNT, MAX_EXEC_COUNT};

/// Problems with an arity table, either built in code or parsed from text.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("Table error: exec-time argument count {0} is outside 1..={max}", max = MAX_EXEC_COUNT)]
    ExecCountOutOfRange(usize),
    #[error(
        "Table error: bind-time argument count {bind} for exec-time count {exec} is outside 0..={max}",
        max = MAX_BIND_COUNT
    )]
    BindCountOutOfRange { exec: usize, bind: usize },
    #[error("Table error: duplicate entry for exec-time count {0}")]
    DuplicateExecCount(usize),
    #[error("Table error: malformed entry '{0}', expected '<exec>:<bind>,<bind>,...'")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error(transparent)]
    InvalidTable(#[from] TableError),
    #[error("Generator error: emitted tokens do not form a valid file: {0}")]
    Syntax(#[from] syn::Error),
    #[error("Output error: cannot derive a crate name from package directory '{}'", .0.display())]
    NoPackageName(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
