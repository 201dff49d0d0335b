//! Where the generated source goes.
//!
//! With no flags the source goes to stdout. `-o PATH` writes a file instead
//! and `-o -` names stdout explicitly. `-p DIR` writes a standalone crate;
//! given alone it replaces stdout, given with `-o` both are written.

use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use common::Config;
use tracing::info;

use crate::error::{GeneratorError, Result};
use crate::scaffold::{write_output, write_project};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
    Package { dir: PathBuf, name: String },
}

/// Resolve the command line into the list of places to write, crate first.
pub fn output_targets(config: &Config) -> Result<Vec<OutputTarget>> {
    let mut targets = Vec::new();

    if let Some(dir) = config.package_dir() {
        let name = resolve_package_name(config, &dir)?;
        targets.push(OutputTarget::Package { dir, name });
    }

    if let Some(path) = config.output_path() {
        targets.push(OutputTarget::File(path.to_path_buf()));
    } else if config.output.is_some() || targets.is_empty() {
        targets.push(OutputTarget::Stdout);
    }

    Ok(targets)
}

/// `.`, `..` and `/` have no last component; fall back to the directory's
/// canonical name, which fails for the filesystem root.
fn resolve_package_name(config: &Config, dir: &Path) -> Result<String> {
    if let Some(name) = config.package_name() {
        return Ok(name);
    }
    dir.canonicalize()
        .ok()
        .as_deref()
        .and_then(Path::file_name)
        .and_then(OsStr::to_str)
        .filter(|s| !s.is_empty())
        .map(|s| s.replace('-', "_"))
        .ok_or_else(|| GeneratorError::NoPackageName(dir.to_path_buf()))
}

pub fn write_targets(targets: &[OutputTarget], source: &str) -> Result<()> {
    for target in targets {
        match target {
            OutputTarget::Stdout => io::stdout().lock().write_all(source.as_bytes())?,
            OutputTarget::File(path) => {
                write_output(path, source)?;
                info!("Wrote callbacks to '{}'", path.display());
            }
            OutputTarget::Package { dir, name } => {
                write_project(dir, name, source)?;
                info!("Wrote crate '{}' at '{}'", name, dir.display());
            }
        }
    }
    Ok(())
}
