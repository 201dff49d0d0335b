use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use std::fs;
use std::io;
use std::path::Path;
use syn::{parse2, File};
use toml_edit::DocumentMut;

use crate::error::Result;

/// Module every generated item lives in.
pub const NAMESPACE: &str = "callback";

pub(crate) const HEADER: &str = "\
// callback.rs
// Callback types, these are similar to closures but can take arguments at
// exec time.
//
// THIS FILE IS AUTOGENERATED!
// Please edit the arity table & rerun gen-callbacks if you need to add more
// types.

";

pub(crate) const FOOTER: &str = "// end of generated callbacks\n";

// =========================================================================
// Source rendering
// =========================================================================

/// Wrap the generated items in the namespace module and print them.
///
/// Re-parsing the assembled tokens as a `syn::File` is what lets
/// `prettyplease` lay them out; a failure here means an emitter produced
/// tokens that are not a Rust item.
pub(crate) fn render_file(body: TokenStream) -> Result<String> {
    let namespace = format_ident!("{}", NAMESPACE);
    let file_ts = quote! {
        #[allow(clippy::type_complexity)]
        pub mod #namespace {
            #body
        }
    };

    let ast: File = parse2(file_ts)?;
    Ok(format!("{HEADER}{}{FOOTER}", prettyplease::unparse(&ast)))
}

// =========================================================================
// Output files
// =========================================================================

/// Write a UTF-8 text file, creating parent directories if necessary.
pub fn write_output(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}

/// Render the Cargo.toml of a standalone crate holding the generated source.
pub fn render_cargo_toml(package_name: &str) -> String {
    let mut doc = DocumentMut::new();

    doc["package"]["name"] = package_name.into();
    doc["package"]["version"] = "0.1.0".into();
    doc["package"]["edition"] = "2021".into();

    // Make generated crate standalone even inside another workspace
    doc["workspace"] = toml_edit::table();

    doc["lib"]["path"] = "src/lib.rs".into();

    doc.to_string()
}

/// Create `dir` as a crate: Cargo.toml plus a src/lib.rs re-exporting the
/// generated namespace at the crate root.
pub fn write_project(dir: &Path, package_name: &str, source: &str) -> io::Result<()> {
    fs::create_dir_all(dir.join("src"))?;
    write_output(&dir.join("Cargo.toml"), &render_cargo_toml(package_name))?;

    let lib_rs = format!("{source}\npub use self::{NAMESPACE}::*;\n");
    write_output(&dir.join("src").join("lib.rs"), &lib_rs)
}
