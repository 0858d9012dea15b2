// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Prints the computed layout of every bound struct as JSON.
//!
//! ```text
//! cargo run --example dump_layouts -- --name SDL_PathInfo --leaves
//! ```

mod common;

use clap::Parser;
use sdl3_ffi::{LayoutReport, layouts, validate_layouts};
use tracing::info;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Opts {
    /// Only print the layouts with these native names.
    #[arg(long = "name")]
    names: Vec<String>,

    /// Print flattened scalar leaves instead of top-level fields.
    #[arg(long)]
    leaves: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::setup_logging();
    let opts = Opts::parse();

    validate_layouts()?;
    let selected: Vec<_> = layouts()
        .into_iter()
        .filter(|layout| opts.names.is_empty() || opts.names.iter().any(|n| n == layout.name()))
        .collect();
    info!("Dumping {} layouts", selected.len());

    if opts.leaves {
        let leaves: Vec<_> = selected
            .iter()
            .map(|layout| {
                serde_json::json!({
                    "name": layout.name(),
                    "leaves": layout
                        .leaves()
                        .iter()
                        .map(|leaf| serde_json::json!({
                            "path": leaf.path,
                            "type": leaf.ty.c_name(),
                            "offset": leaf.offset,
                        }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&leaves)?);
    } else {
        let reports: Vec<LayoutReport> = selected.iter().map(|layout| layout.report()).collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}
