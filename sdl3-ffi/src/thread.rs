// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! C runtime thread hooks handed to `SDL_CreateThreadRuntime`.
//!
//! On MSVC Windows targets SDL must start threads through the CRT so that the
//! CRT's per-thread state is set up; everywhere else both hooks are null.

use crate::FnPtr;

/// The `pfnBeginThread`/`pfnEndThread` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadRuntimeHooks {
    pub begin: FnPtr,
    pub end: FnPtr,
}

#[cfg(all(windows, target_env = "msvc"))]
mod crt {
    use std::ffi::c_void;

    unsafe extern "C" {
        pub fn _beginthreadex(
            security: *mut c_void,
            stack_size: u32,
            start_address: *mut c_void,
            arglist: *mut c_void,
            initflag: u32,
            thrdaddr: *mut u32,
        ) -> usize;
        pub fn _endthreadex(retval: u32);
    }
}

impl ThreadRuntimeHooks {
    /// Hooks matching the C runtime this crate is linked against.
    #[cfg(all(windows, target_env = "msvc"))]
    pub fn current() -> Self {
        type BeginThread = unsafe extern "C" fn(
            *mut std::ffi::c_void,
            u32,
            *mut std::ffi::c_void,
            *mut std::ffi::c_void,
            u32,
            *mut u32,
        ) -> usize;
        type EndThread = unsafe extern "C" fn(u32);

        Self {
            begin: FnPtr::new(crt::_beginthreadex as BeginThread),
            end: FnPtr::new(crt::_endthreadex as EndThread),
        }
    }

    /// Hooks matching the C runtime this crate is linked against.
    #[cfg(not(all(windows, target_env = "msvc")))]
    pub fn current() -> Self {
        Self::none()
    }

    pub const fn none() -> Self {
        Self {
            begin: FnPtr::null(),
            end: FnPtr::null(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(all(windows, target_env = "msvc")))]
    #[test]
    fn hooks_are_null_outside_msvc() {
        let hooks = ThreadRuntimeHooks::current();
        assert!(hooks.begin.is_null());
        assert!(hooks.end.is_null());
    }

    #[cfg(all(windows, target_env = "msvc"))]
    #[test]
    fn hooks_point_at_the_crt() {
        let hooks = ThreadRuntimeHooks::current();
        assert!(!hooks.begin.is_null());
        assert!(!hooks.end.is_null());
    }
}
