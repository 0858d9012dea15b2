// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! # sdl3-ffi - runtime-bound SDL3 bindings
//!
//! Safe access to the SDL3 C library, loaded at run time, with every struct
//! that crosses the boundary marshaled through explicit layout descriptors.
//!
//! ## Overview
//!
//! The raw declarations (type tags, `#[repr(C)]` mirrors, constants, symbol
//! groups) live in [`sdl3_ffi_sys`]. This crate adds:
//!
//! - **Layouts** ([`Layout`]): ordered, named, typed fields with C offsets,
//!   computed once when the descriptor is built
//! - **Codec** ([`decode`], [`encode`]): bounds-checked conversion between byte
//!   buffers and [`Record`]s, in native byte order
//! - **Symbol registry** ([`SymbolRegistry`]): exported name to call signature,
//!   assembled for one [`Platform`] plus optional groups
//! - **Binder** ([`NativeLibrary`], [`bind`], [`Callable`]): symbol resolution
//!   and signature-checked typed callables
//! - **Typed wrappers** ([`structs`]): Rust structs with `read_*`/`write_*`
//!   pairs, pointer fields carried as [`OpaquePtr`]/[`FnPtr`]
//! - **[`Sdl`]**: the loaded library with the whole registry bound
//!
//! ## Architecture
//!
//! ```text
//! ┌────────┐      ┌──────────────┐      ┌──────────┐
//! │ Layout │ ───► │    Codec     │ ◄─── │ Wrappers │
//! └────────┘      └──────────────┘      └────┬─────┘
//!                                            │
//! ┌──────────┐    ┌────────────────┐    ┌────▼────┐
//! │ Platform │ ─► │ SymbolRegistry │ ─► │   Sdl   │ ─► Callable ─► TypedCallable<F>
//! └──────────┘    └────────────────┘    └─────────┘
//! ```
//!
//! ## Examples
//!
//! ### Decoding a struct by descriptor
//!
//! ```
//! use sdl3_ffi::{Layout, NativeType, Record, decode, encode};
//!
//! # fn main() -> Result<(), sdl3_ffi::Error> {
//! let layout = Layout::builder("SDL_PathInfo")
//!     .field("type", NativeType::U32)
//!     .field("size", NativeType::U64)
//!     .field("create_time", NativeType::I64)
//!     .build()?;
//! assert_eq!(layout.size(), 24);
//!
//! let mut buffer = [0u8; 24];
//! let record = Record::new()
//!     .with("type", 1u32)
//!     .with("size", 100u64)
//!     .with("create_time", -5i64);
//! encode(&layout, &record, &mut buffer)?;
//! assert_eq!(decode(&layout, &buffer)?, record);
//! # Ok(())
//! # }
//! ```
//!
//! ### Calling into the library
//!
//! ```no_run
//! use sdl3_ffi::{LoadConfig, Sdl, structs::Rect};
//!
//! # fn main() -> Result<(), sdl3_ffi::Error> {
//! let sdl = Sdl::load(&LoadConfig::from_env()?)?;
//! if !sdl.init(sdl3_ffi::sys::SDL_INIT_VIDEO)? {
//!     eprintln!("SDL_Init failed: {}", sdl.last_error()?);
//! }
//!
//! let get_primary = sdl.function::<unsafe extern "C" fn() -> u32>("SDL_GetPrimaryDisplay")?;
//! let display = unsafe { (*get_primary)() };
//! let bounds: Option<Rect> = sdl.display_bounds(display)?;
//! println!("{bounds:?}");
//! sdl.quit()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! - [`Sdl`], [`Callable`] and [`SymbolRegistry`] are immutable after load and
//!   `Send + Sync`
//! - [`OpaquePtr`] and [`FnPtr`] are `Send + Sync`; they are never dereferenced
//!   on the Rust side
//! - SDL's own thread-affinity rules (main-thread-only calls) are not checked

mod codec;
mod error;
mod layout;
mod library;
mod platform;
mod pointer;
mod registry;
mod sdl;
mod thread;
mod value;
mod wrapper;

pub mod config;
pub mod structs;

pub use codec::{AlignedBuffer, decode, decode_at, encode, encode_at, encode_to_buffer};
pub use config::LoadConfig;
pub use error::{Error, ErrorKind, Result};
pub use layout::{FieldLayout, FieldReport, FieldType, Layout, LayoutBuilder, LayoutReport, LeafField};
pub use library::{Callable, NativeArg, NativeFn, NativeLibrary, NativeReturn, TypedCallable, bind};
pub use platform::{OptionalGroup, Platform};
pub use pointer::{FnPtr, OpaquePtr};
pub use registry::{RegistryBuilder, Signature, SymbolEntry, SymbolRegistry};
pub use sdl::{LocaleName, Sdl, Version};
pub use sdl3_ffi_sys::{self as sys, NativeType};
pub use structs::{layouts, validate_layouts};
pub use thread::ThreadRuntimeHooks;
pub use value::{Record, Value, ValueKind};
pub use wrapper::{FieldValue, NativeStruct};
