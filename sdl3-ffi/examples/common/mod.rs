// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Helpers shared by the `probe_symbols` and `dump_layouts` examples.

/// Installs a stderr tracing subscriber so that stdout carries only the
/// example's report.
///
/// The level defaults to INFO; `RUST_LOG` overrides it (for instance
/// `RUST_LOG=sdl3_ffi=debug` to see every bound symbol).
pub fn setup_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
}
