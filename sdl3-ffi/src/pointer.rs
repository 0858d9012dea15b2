// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Opaque handles for pointer-sized struct fields and arguments.
//!
//! Host code stores and forwards these values but never inspects or
//! dereferences them. Conversion to and from the raw addresses carried by
//! [`crate::Value::Pointer`] is reserved to the typed struct wrappers.

use std::{ffi::c_void, fmt};

use crate::library::NativeFn;

/// A data pointer owned by the native side (`SDL_Window *`, `const char *`, ...).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpaquePtr(*mut c_void);

// Safety: the handle is never dereferenced on the Rust side; whether the
// pointee may be used from another thread is the native library's contract.
unsafe impl Send for OpaquePtr {}
unsafe impl Sync for OpaquePtr {}

impl OpaquePtr {
    pub const fn null() -> Self {
        Self(std::ptr::null_mut())
    }

    pub fn from_ptr<T>(ptr: *mut T) -> Self {
        Self(ptr.cast())
    }

    pub fn from_const<T>(ptr: *const T) -> Self {
        Self(ptr.cast_mut().cast())
    }

    pub fn as_ptr<T>(self) -> *mut T {
        self.0.cast()
    }

    pub fn is_null(self) -> bool {
        self.0.is_null()
    }

    pub(crate) fn from_address(address: u64) -> Self {
        Self(std::ptr::with_exposed_provenance_mut(address as usize))
    }

    pub(crate) fn address(self) -> u64 {
        self.0.expose_provenance() as u64
    }
}

impl Default for OpaquePtr {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Debug for OpaquePtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpaquePtr({:p})", self.0)
    }
}

/// A native function pointer (`SDL_FunctionPointer`, callbacks).
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FnPtr(*const c_void);

unsafe impl Send for FnPtr {}
unsafe impl Sync for FnPtr {}

impl FnPtr {
    pub const fn null() -> Self {
        Self(std::ptr::null())
    }

    /// Wraps any `extern "C"` function whose signature is describable with
    /// native type tags.
    pub fn new<F: NativeFn>(function: F) -> Self {
        Self(function.address())
    }

    pub fn is_null(self) -> bool {
        self.0.is_null()
    }

    pub fn as_ptr(self) -> *const c_void {
        self.0
    }

    pub(crate) fn from_address(address: u64) -> Self {
        Self(std::ptr::with_exposed_provenance(address as usize))
    }

    pub(crate) fn address(self) -> u64 {
        self.0.expose_provenance() as u64
    }
}

impl Default for FnPtr {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Debug for FnPtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FnPtr({:p})", self.0)
    }
}
