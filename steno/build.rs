//! Installs `steno.x` into the linker search path.
//!
//! Embedded binaries pass `-T steno.x` (after their memory script) so the
//! interned-text sections end up in the artifact without being loaded into
//! device memory.

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=steno.x");

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set for build scripts"));
    fs::copy("steno.x", out_dir.join("steno.x")).expect("failed to install steno.x");
    println!("cargo:rustc-link-search={}", out_dir.display());
}
