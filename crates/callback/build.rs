use std::env;
use std::path::PathBuf;

use generator::{write_output, ArityTable, Generator};

fn main() {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("cargo sets OUT_DIR"));
    let source = Generator::new(ArityTable::default())
        .render()
        .expect("callback source renders");
    write_output(&out_dir.join("callback.rs"), &source).expect("write generated callbacks");

    println!("cargo:rerun-if-changed=build.rs");
}
