// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! # sdl3-ffi-sys: Raw declarations for the SDL3 C ABI
//!
//! This crate is the generated tier of the SDL3 bindings. It contains data only:
//!
//! - [`NativeType`], the tag set used to describe struct fields and call signatures
//! - `#[repr(C)]` mirrors of the SDL3 structs the bindings marshal (`Rect`, `PathInfo`, ...)
//! - Constant and enum tables (`SDL_INIT_VIDEO`, `SDL_PATHTYPE_FILE`, ...)
//! - Static symbol groups: exported function names paired with their signatures
//!
//! ## Usage
//!
//! **Most users should NOT use this crate directly.** Use the [`sdl3-ffi`] crate
//! instead, which provides:
//! - Runtime loading of the SDL3 shared library
//! - A layout-driven struct codec with bounds checking
//! - Signature-checked typed callables
//!
//! The `#[repr(C)]` mirrors are laid out by the Rust compiler with C rules, which
//! makes them the reference the codec layouts are checked against.
//!
//! [`sdl3-ffi`]: https://docs.rs/sdl3-ffi

#![allow(non_upper_case_globals)]
#![allow(non_snake_case)]

pub mod consts;
pub mod structs;
pub mod symbols;
mod types;

pub use consts::*;
pub use structs::*;
pub use symbols::{SymbolDecl, SymbolGroup};
pub use types::NativeType;
