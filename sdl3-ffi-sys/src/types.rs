// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Type tags shared by struct layouts and call signatures.

use core::ffi::c_void;
use core::mem::{align_of, size_of};

/// A C ABI type as seen across the FFI boundary.
///
/// `Void` is only meaningful as a function result. `Pointer` covers every data
/// pointer (`T *`, `const char *`, opaque handles) and `FunctionPointer` every
/// callback, both carried as platform-pointer-width integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum NativeType {
    Void,
    Bool,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    USize,
    ISize,
    Pointer,
    FunctionPointer,
}

impl NativeType {
    /// Size in bytes of a value of this type. `Void` has size 0.
    pub const fn size(self) -> usize {
        match self {
            NativeType::Void => 0,
            NativeType::Bool => size_of::<bool>(),
            NativeType::U8 | NativeType::I8 => 1,
            NativeType::U16 | NativeType::I16 => 2,
            NativeType::U32 | NativeType::I32 | NativeType::F32 => 4,
            NativeType::U64 | NativeType::I64 | NativeType::F64 => 8,
            NativeType::USize | NativeType::ISize => size_of::<usize>(),
            NativeType::Pointer | NativeType::FunctionPointer => size_of::<*const c_void>(),
        }
    }

    /// Alignment the C compiler applies to this type inside a struct.
    ///
    /// Equal to [`Self::size`] on every 64-bit target; 32-bit x86 places
    /// 8-byte scalars on 4-byte boundaries.
    pub const fn align(self) -> usize {
        match self {
            NativeType::Void => 1,
            NativeType::Bool => align_of::<bool>(),
            NativeType::U8 | NativeType::I8 => 1,
            NativeType::U16 | NativeType::I16 => 2,
            NativeType::U32 | NativeType::I32 => 4,
            NativeType::F32 => align_of::<f32>(),
            NativeType::U64 | NativeType::I64 => align_of::<u64>(),
            NativeType::F64 => align_of::<f64>(),
            NativeType::USize | NativeType::ISize => align_of::<usize>(),
            NativeType::Pointer | NativeType::FunctionPointer => align_of::<*const c_void>(),
        }
    }

    /// Returns `true` for the tags whose values are addresses.
    pub const fn is_pointer(self) -> bool {
        matches!(self, NativeType::Pointer | NativeType::FunctionPointer)
    }

    /// C spelling of the type, as it appears in the SDL3 headers.
    pub const fn c_name(self) -> &'static str {
        match self {
            NativeType::Void => "void",
            NativeType::Bool => "bool",
            NativeType::U8 => "Uint8",
            NativeType::U16 => "Uint16",
            NativeType::U32 => "Uint32",
            NativeType::U64 => "Uint64",
            NativeType::I8 => "Sint8",
            NativeType::I16 => "Sint16",
            NativeType::I32 => "Sint32",
            NativeType::I64 => "Sint64",
            NativeType::F32 => "float",
            NativeType::F64 => "double",
            NativeType::USize => "size_t",
            NativeType::ISize => "ptrdiff_t",
            NativeType::Pointer => "void *",
            NativeType::FunctionPointer => "SDL_FunctionPointer",
        }
    }
}

impl core::fmt::Display for NativeType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.c_name())
    }
}
