//! Command line argument parsing for the callback generator tools.

use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

/// Command line arguments for the callback generator
#[derive(Parser, Debug, Clone, Default)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Write the generated source to PATH. If <PATH> is `-`, or the flag is omitted without --package, stdout is used.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<String>,

    /// Write a standalone crate (Cargo.toml + src/lib.rs) into DIR
    #[arg(short = 'p', long = "package", value_name = "DIR")]
    pub package_dir: Option<String>,

    /// Override the arity table, e.g. "1:0,1,2,3;2:0,1" (exec-time count : bind-time counts)
    #[arg(short = 't', long, value_name = "TABLE")]
    pub table: Option<String>,

    /// Print the generated symbols in emission order instead of the source
    #[arg(long, action = ArgAction::SetTrue)]
    pub list: bool,
}

impl Config {
    pub fn output_to_stdout(&self) -> bool {
        matches!(self.output.as_deref(), None | Some("-"))
    }

    /// Output file, or `None` when writing to stdout.
    pub fn output_path(&self) -> Option<&Path> {
        if self.output_to_stdout() {
            None
        } else {
            self.output.as_deref().map(Path::new)
        }
    }

    pub fn package_dir(&self) -> Option<PathBuf> {
        self.package_dir.as_ref().map(PathBuf::from)
    }

    /// Crate name for `--package`, taken from the last path component.
    pub fn package_name(&self) -> Option<String> {
        self.package_dir()?
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|s| !s.is_empty())
            .map(|s| s.replace('-', "_"))
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn list_only(&self) -> bool {
        self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("gen-callbacks").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn no_arguments_means_stdout_and_default_table() {
        let c = parse(&[]);
        assert!(c.output_to_stdout());
        assert_eq!(c.output_path(), None);
        assert_eq!(c.table(), None);
        assert!(c.package_dir().is_none());
        assert!(!c.list_only());
    }

    #[test]
    fn dash_output_is_stdout() {
        let c = parse(&["-o", "-"]);
        assert!(c.output_to_stdout());

        let c = parse(&["--output", "gen/callback.rs"]);
        assert!(!c.output_to_stdout());
        assert_eq!(c.output_path(), Some(Path::new("gen/callback.rs")));
    }

    #[test]
    fn package_name_from_dir() {
        let c = parse(&["-p", "out/my-callbacks"]);
        assert_eq!(c.package_dir(), Some(PathBuf::from("out/my-callbacks")));
        assert_eq!(c.package_name().as_deref(), Some("my_callbacks"));
    }

    #[test]
    fn table_and_list_flags() {
        let c = parse(&["--table", "1:0,1", "--list"]);
        assert_eq!(c.table(), Some("1:0,1"));
        assert!(c.list_only());
    }
}
