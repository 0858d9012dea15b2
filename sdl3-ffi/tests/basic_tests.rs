// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Basic integration tests for symbol binding and typed invocation.
//!
//! The binder does not depend on SDL itself, so these tests bind a small
//! registry of C runtime functions from `libc.so.6`. An SDL3 smoke test runs
//! only when the library can be found.
//!
//! # Test Coverage
//!
//! - Symbol resolution and its determinism
//! - Signature checking of typed callables
//! - Resolution errors (missing symbol, unregistered name)
//! - Struct marshaling through a real native call
//!
//! # Requirements
//!
//! - Linux with glibc for the libc tests
//! - SDL3 reachable through `SDL3_LIBRARY_PATH` or the loader path for the
//!   smoke test (skipped otherwise)

#![cfg(target_os = "linux")]

use std::{
    ffi::{c_char, c_void},
    sync::Arc,
};

use sdl3_ffi::{
    Error, ErrorKind, LoadConfig, NativeLibrary, NativeStruct, NativeType, OpaquePtr, Platform, Sdl,
    Signature, SymbolRegistry, bind,
    structs::{Rect, read_rect},
    sys::{SymbolDecl, SymbolGroup},
};
use tracing::info;

/// Ensures logging is initialized only once across all tests.
static LOG_ONCE: std::sync::Once = std::sync::Once::new();

static LIBC: SymbolGroup = SymbolGroup {
    name: "libc",
    symbols: &[
        SymbolDecl {
            name: "abs",
            params: &[NativeType::I32],
            result: NativeType::I32,
        },
        SymbolDecl {
            name: "labs",
            params: &[NativeType::I64],
            result: NativeType::I64,
        },
        SymbolDecl {
            name: "strlen",
            params: &[NativeType::Pointer],
            result: NativeType::USize,
        },
        SymbolDecl {
            name: "memcpy",
            params: &[NativeType::Pointer, NativeType::Pointer, NativeType::USize],
            result: NativeType::Pointer,
        },
    ],
};

static MISSING: SymbolGroup = SymbolGroup {
    name: "missing",
    symbols: &[SymbolDecl {
        name: "sdl3_ffi_no_such_symbol",
        params: &[],
        result: NativeType::Void,
    }],
};

/// Initializes logging and opens the C runtime library.
fn setup_test() -> Arc<NativeLibrary> {
    // Initialize logging once (respects RUST_LOG environment variable)
    LOG_ONCE.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::builder()
                    .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                    .from_env_lossy(),
            )
            .init();
    });

    NativeLibrary::open("libc.so.6").unwrap()
}

fn libc_sdl(library: Arc<NativeLibrary>) -> Sdl {
    let registry = SymbolRegistry::builder().group(&LIBC).build().unwrap();
    Sdl::with_registry(library, registry, Platform::Linux).unwrap()
}

#[test]
fn binding_is_deterministic() {
    let library = setup_test();
    let signature = Signature::new(vec![NativeType::I32], NativeType::I32);
    let first = bind(&library, "abs", &signature).unwrap();
    let second = bind(&library, "abs", &signature).unwrap();
    assert_eq!(first.address(), second.address());
    assert!(library.has_symbol("abs"));
    assert!(!library.has_symbol("sdl3_ffi_no_such_symbol"));
}

#[test]
fn typed_callables_call_through() {
    let sdl = libc_sdl(setup_test());

    let abs = sdl.function::<unsafe extern "C" fn(i32) -> i32>("abs").unwrap();
    assert_eq!(unsafe { (*abs)(-42) }, 42);

    let labs = sdl.function::<unsafe extern "C" fn(i64) -> i64>("labs").unwrap();
    assert_eq!(unsafe { (*labs)(i64::MIN + 1) }, i64::MAX);

    let strlen = sdl
        .function::<unsafe extern "C" fn(*const c_char) -> usize>("strlen")
        .unwrap();
    assert_eq!(unsafe { (*strlen)(c"sdl3-ffi".as_ptr()) }, 8);
}

#[test]
fn signature_mismatch_is_a_resolution_error() {
    let sdl = libc_sdl(setup_test());
    let err = sdl
        .function::<unsafe extern "C" fn(u32) -> i32>("abs")
        .err()
        .unwrap();
    assert!(matches!(
        &err,
        Error::SignatureMismatch { symbol, registered, requested }
            if symbol == "abs" && registered == "(Sint32) -> Sint32" && requested == "(Uint32) -> Sint32"
    ));
    assert_eq!(err.kind(), ErrorKind::Resolution);

    let err = sdl
        .function::<unsafe extern "C" fn(i32)>("abs")
        .err()
        .unwrap();
    assert!(matches!(err, Error::SignatureMismatch { .. }));
}

#[test]
fn unregistered_names_are_rejected() {
    let sdl = libc_sdl(setup_test());
    // Exported by libc but not part of the registry.
    let err = sdl.callable("strcmp").err().unwrap();
    assert!(matches!(err, Error::NotRegistered(ref name) if name == "strcmp"));
    assert_eq!(err.kind(), ErrorKind::Resolution);
}

#[test]
fn missing_symbols_fail_the_whole_load() {
    let library = setup_test();
    let registry = SymbolRegistry::builder()
        .group(&LIBC)
        .group(&MISSING)
        .build()
        .unwrap();

    let missing = registry.missing_in(&library);
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].name(), "sdl3_ffi_no_such_symbol");

    let err = Sdl::with_registry(library, registry, Platform::Linux)
        .err()
        .unwrap();
    assert!(matches!(
        err,
        Error::SymbolNotFound { ref symbol, source: Some(_) } if symbol == "sdl3_ffi_no_such_symbol"
    ));
    assert_eq!(err.kind(), ErrorKind::Resolution);
}

#[test]
fn structs_cross_a_native_call() {
    let sdl = libc_sdl(setup_test());
    let memcpy = sdl
        .function::<unsafe extern "C" fn(OpaquePtr, OpaquePtr, usize) -> OpaquePtr>("memcpy")
        .unwrap();

    let rect = Rect {
        x: -1,
        y: 2,
        w: 640,
        h: 480,
    };
    let source = rect.to_buffer().unwrap();
    let mut target = vec![0u8; source.len()];
    let returned = unsafe {
        (*memcpy)(
            OpaquePtr::from_ptr(target.as_mut_ptr()),
            OpaquePtr::from_const(source.as_ptr()),
            source.len(),
        )
    };
    assert_eq!(returned.as_ptr::<u8>(), target.as_mut_ptr());
    assert_eq!(read_rect(&target).unwrap(), rect);
}

#[test]
fn libraries_outlive_dropped_handles() {
    let library = setup_test();
    let signature = Signature::new(vec![NativeType::I32], NativeType::I32);
    let abs = bind(&library, "abs", &signature)
        .unwrap()
        .typed::<unsafe extern "C" fn(i32) -> i32>()
        .unwrap();
    drop(library);
    assert_eq!(unsafe { (*abs)(-7) }, 7);
}

#[test]
fn missing_library_is_a_loading_error() {
    setup_test();
    let err = NativeLibrary::open("libsdl3_ffi_does_not_exist.so").err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Loading);
}

/// Loads the real SDL3 library when available and checks a few wrappers.
#[test]
fn sdl3_smoke_test() {
    setup_test();
    let config = LoadConfig::from_env().unwrap();
    let sdl = match Sdl::load(&config) {
        Ok(sdl) => sdl,
        Err(Error::LibLoading(error)) => {
            info!("SDL3 not available, skipping: {error}");
            return;
        }
        Err(error) => panic!("SDL3 found but could not be bound: {error}"),
    };

    let version = sdl.version().unwrap();
    info!("Loaded SDL {version} ({})", sdl.revision().unwrap());
    assert_eq!(version.major, 3);
    assert_eq!(sdl.platform_name().unwrap(), "Linux");
    assert!(sdl.logical_cpu_cores().unwrap() >= 1);

    let info = sdl
        .path_info(sdl3_ffi::config::crate_root().to_str().unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(info.path_type(), sdl3_ffi::structs::PathType::Directory);
    assert!(sdl.path_info("/sdl3-ffi/does/not/exist").unwrap().is_none());
    assert!(!sdl.last_error().unwrap().is_empty());

    let mut counter = sdl3_ffi::structs::AtomicInt { value: 40 };
    assert_eq!(sdl.add_atomic_int(&mut counter, 2).unwrap(), 40);
    assert_eq!(counter.value, 42);
    assert_eq!(sdl.set_atomic_int(&mut counter, 7).unwrap(), 42);
    assert_eq!(sdl.get_atomic_int(&mut counter).unwrap(), 7);

    unsafe extern "C" fn thread_main(data: *mut c_void) -> i32 {
        let value = unsafe { *data.cast::<i32>() };
        value * 2
    }
    let mut input = 21i32;
    let thread = sdl
        .create_thread(
            thread_main,
            "sdl3-ffi-test",
            OpaquePtr::from_ptr(&mut input as *mut i32),
        )
        .unwrap()
        .unwrap();
    assert_eq!(sdl.wait_thread(thread).unwrap(), 42);
}
