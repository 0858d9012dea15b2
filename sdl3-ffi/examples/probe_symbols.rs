// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Checks which registered SDL3 symbols a library exports.
//!
//! ```text
//! cargo run --example probe_symbols -- --library /opt/sdl3/lib/libSDL3.so.0 --group x11
//! ```

mod common;

use std::process::ExitCode;

use clap::Parser;
use sdl3_ffi::{LoadConfig, NativeLibrary, OptionalGroup, Platform, Sdl, SymbolRegistry};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Opts {
    /// Path of the SDL3 shared library. Defaults to the platform's file name.
    #[arg(long, env = "SDL3_LIBRARY_PATH")]
    library: Option<String>,

    /// Platform whose symbol group is registered.
    #[arg(long)]
    platform: Option<Platform>,

    /// Optional symbol groups to register (x11, gdk).
    #[arg(long = "group")]
    groups: Vec<OptionalGroup>,

    /// Also bind the registry and print the library's version.
    #[arg(long)]
    bind: bool,
}

fn main() -> Result<ExitCode, sdl3_ffi::Error> {
    common::setup_logging();
    let opts = Opts::parse();

    let mut config = LoadConfig::new();
    if let Some(path) = opts.library {
        config = config.with_library_path(path);
    }
    if let Some(platform) = opts.platform {
        config = config.with_platform(platform);
    }
    for group in opts.groups {
        config = config.with_optional_group(group);
    }

    let registry = SymbolRegistry::for_target(config.platform(), &config.optional_groups)?;
    let library = NativeLibrary::open(config.library_path())?;
    info!(
        "Probing {} symbols from groups {:?} in {}",
        registry.len(),
        registry.groups(),
        library.path().display()
    );

    let missing = registry.missing_in(&library);
    for entry in &missing {
        println!("missing {} [{}] {}", entry.name(), entry.group(), entry.signature());
    }
    println!(
        "{} of {} symbols exported",
        registry.len() - missing.len(),
        registry.len()
    );
    if !missing.is_empty() {
        return Ok(ExitCode::FAILURE);
    }

    if opts.bind {
        let sdl = Sdl::with_registry(library, registry, config.platform())?;
        match sdl.version() {
            Ok(version) => println!("SDL {version} ({})", sdl.revision()?),
            Err(e) => error!("Failed to query the version: {e}"),
        }
    }
    Ok(ExitCode::SUCCESS)
}
