// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Build script for the `sdl3-ffi` crate.
//!
//! This script generates `constants.rs` containing the crate root and the
//! optional SDL3 library directory given at build time through `SDL3_LIB_DIR`.
//! These values are used by the configuration module and by tests to locate
//! the shared library and fixture files.

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=SDL3_LIB_DIR");

    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("failed to get current directory"));
    let lib_dir = match env::var("SDL3_LIB_DIR") {
        Ok(dir) if !dir.is_empty() => format!("Some({dir:?})"),
        _ => "None".to_string(),
    };

    let out_path = PathBuf::from(env::var("OUT_DIR").expect("failed to get output directory"))
        .join("constants.rs");

    let data = format!(
        "pub const SDL3_FFI_CRATE_ROOT: &str = {:?};\n\
        pub const SDL3_LIB_DIR: Option<&str> = {};\n",
        manifest_dir.to_string_lossy(),
        lib_dir
    );
    std::fs::write(out_path, data).expect("Unable to write file");
}
