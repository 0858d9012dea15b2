// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Smoke tests over the raw declarations.

use std::collections::HashSet;

use sdl3_ffi_sys::{NativeType, symbols};

/// Verifies that the mirrors are usable and laid out with C rules.
#[test]
fn there_are_repr_c_mirrors() {
    let info = sdl3_ffi_sys::PathInfo {
        type_: sdl3_ffi_sys::SDL_PATHTYPE_FILE,
        size: 100,
        ..Default::default()
    };

    println!("path_info: {:?}", info);
    assert_eq!(std::mem::size_of::<sdl3_ffi_sys::Rect>(), 16);
    assert_eq!(std::mem::size_of::<sdl3_ffi_sys::Color>(), 4);
    assert_eq!(std::mem::size_of::<sdl3_ffi_sys::MessageBoxColorScheme>(), 15);
    assert_eq!(std::mem::offset_of!(sdl3_ffi_sys::HapticDirection, dir), 4);
}

#[test]
fn symbol_names_are_unique_across_all_groups() {
    let mut seen = HashSet::new();
    let platform_groups = [
        &symbols::WINDOWS,
        &symbols::LINUX,
        &symbols::MACOS,
        &symbols::IOS,
        &symbols::ANDROID,
        &symbols::X11,
        &symbols::GDK,
    ];
    for group in symbols::CORE_GROUPS.iter().chain(platform_groups.iter()) {
        for decl in group.symbols {
            assert!(
                seen.insert(decl.name),
                "{} declared twice (group {})",
                decl.name,
                group.name
            );
        }
    }
}

#[test]
fn void_only_appears_as_a_result() {
    for group in symbols::CORE_GROUPS {
        for decl in group.symbols {
            assert!(
                !decl.params.contains(&NativeType::Void),
                "{} has a void parameter",
                decl.name
            );
        }
    }
}

#[test]
fn type_tags_report_c_sizes() {
    assert_eq!(NativeType::Bool.size(), 1);
    assert_eq!(NativeType::U16.size(), 2);
    assert_eq!(NativeType::F64.size(), 8);
    assert_eq!(
        NativeType::Pointer.size(),
        std::mem::size_of::<*const std::ffi::c_void>()
    );
    assert_eq!(NativeType::Void.size(), 0);
    assert_eq!(NativeType::U32.to_string(), "Uint32");
    assert!(NativeType::FunctionPointer.is_pointer());
    assert!(!NativeType::USize.is_pointer());
}
