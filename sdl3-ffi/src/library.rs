// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Dynamic loading of the native library and binding of its symbols.
//!
//! [`bind`] resolves one exported function to a [`Callable`]. Calling it
//! requires naming a concrete `unsafe extern "C" fn` type; the tags derived
//! from that type must equal the registered [`Signature`] exactly, otherwise
//! [`Callable::typed`] fails with [`Error::SignatureMismatch`].
//!
//! ```no_run
//! use sdl3_ffi::{NativeLibrary, NativeType, Signature, bind};
//!
//! # fn main() -> Result<(), sdl3_ffi::Error> {
//! let library = NativeLibrary::open("libSDL3.so.0")?;
//! let signature = Signature::new(&[] as &[NativeType], NativeType::I32);
//! let get_version = bind(&library, "SDL_GetVersion", &signature)?
//!     .typed::<unsafe extern "C" fn() -> i32>()?;
//! let version = unsafe { get_version.get()() };
//! println!("SDL {version}");
//! # Ok(())
//! # }
//! ```

use std::{
    ffi::{OsStr, c_void},
    mem::ManuallyDrop,
    ops::Deref,
    path::{Path, PathBuf},
    sync::Arc,
};

use sdl3_ffi_sys::NativeType;
use tracing::{debug, error, info};

use crate::{Error, FnPtr, OpaquePtr, Result, registry::Signature};

/// A value that can be passed by value across the C ABI.
pub trait NativeArg: Copy {
    const TYPE: NativeType;
}

/// A value that can be returned across the C ABI, including `()` for `void`.
pub trait NativeReturn {
    const TYPE: NativeType;
}

macro_rules! native_scalars {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl NativeArg for $ty {
                const TYPE: NativeType = NativeType::$tag;
            }

            impl NativeReturn for $ty {
                const TYPE: NativeType = NativeType::$tag;
            }
        )*
    };
}

native_scalars! {
    bool => Bool,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    usize => USize,
    isize => ISize,
    OpaquePtr => Pointer,
    FnPtr => FunctionPointer,
}

impl<T> NativeArg for *mut T {
    const TYPE: NativeType = NativeType::Pointer;
}

impl<T> NativeArg for *const T {
    const TYPE: NativeType = NativeType::Pointer;
}

impl<T> NativeReturn for *mut T {
    const TYPE: NativeType = NativeType::Pointer;
}

impl<T> NativeReturn for *const T {
    const TYPE: NativeType = NativeType::Pointer;
}

impl NativeReturn for () {
    const TYPE: NativeType = NativeType::Void;
}

/// An `extern "C"` function pointer type whose signature is known statically.
///
/// # Safety
///
/// Implementors must be plain function pointers of the same size as a data
/// pointer, so that [`Self::from_address`] may reinterpret a symbol address.
pub unsafe trait NativeFn: Copy {
    fn params() -> Vec<NativeType>;
    fn result() -> NativeType;
    fn address(self) -> *const c_void;

    /// Reinterprets a resolved symbol address as this function type.
    ///
    /// # Safety
    ///
    /// `address` must point to a function with exactly this signature.
    unsafe fn from_address(address: *const c_void) -> Self;
}

macro_rules! native_fns {
    ($($arg:ident),*) => {
        native_fns!(@impl [unsafe extern "C" fn] $($arg),*);
        native_fns!(@impl [extern "C" fn] $($arg),*);
    };
    (@impl [$($fn_ty:tt)*] $($arg:ident),*) => {
        unsafe impl<Ret: NativeReturn, $($arg: NativeArg),*> NativeFn for $($fn_ty)*($($arg),*) -> Ret {
            fn params() -> Vec<NativeType> {
                vec![$($arg::TYPE),*]
            }

            fn result() -> NativeType {
                Ret::TYPE
            }

            fn address(self) -> *const c_void {
                self as *const c_void
            }

            unsafe fn from_address(address: *const c_void) -> Self {
                unsafe { std::mem::transmute_copy::<*const c_void, Self>(&address) }
            }
        }
    };
}

native_fns!();
native_fns!(A);
native_fns!(A, B);
native_fns!(A, B, C);
native_fns!(A, B, C, D);
native_fns!(A, B, C, D, E);
native_fns!(A, B, C, D, E, F);
native_fns!(A, B, C, D, E, F, G);
native_fns!(A, B, C, D, E, F, G, H);

/// An opened native shared library.
pub struct NativeLibrary {
    library: ManuallyDrop<libloading::Library>,
    path: PathBuf,
}

impl NativeLibrary {
    /// Opens a shared library by file name or path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LibLoading`] if the library cannot be found or loaded.
    pub fn open(path: impl AsRef<OsStr>) -> Result<Arc<Self>> {
        let path = PathBuf::from(path.as_ref());
        // Safety: running the library's initializers is inherent to loading it.
        let library = unsafe { libloading::Library::new(&path) }?;
        info!(path = %path.display(), "Opened native library");
        Ok(Arc::new(Self {
            library: ManuallyDrop::new(library),
            path,
        }))
    }

    /// The path or name the library was opened with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if the library exports `name`.
    pub fn has_symbol(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    fn resolve(&self, name: &str) -> Result<*const c_void> {
        // Safety: the symbol is only read as an address, never called here.
        let symbol = unsafe { self.library.get::<*const c_void>(name.as_bytes()) }.map_err(
            |source| Error::SymbolNotFound {
                symbol: name.to_string(),
                source: Some(source),
            },
        )?;
        let address = *symbol;
        if address.is_null() {
            return Err(Error::SymbolNotFound {
                symbol: name.to_string(),
                source: None,
            });
        }
        Ok(address)
    }
}

impl Drop for NativeLibrary {
    fn drop(&mut self) {
        debug!(path = %self.path.display(), "Closing native library");
        // Safety: the field is never used again.
        let library = unsafe { ManuallyDrop::take(&mut self.library) };
        if let Err(e) = library.close() {
            error!(path = %self.path.display(), "Failed to close native library: {e}");
        }
    }
}

impl std::fmt::Debug for NativeLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeLibrary")
            .field("path", &self.path)
            .finish()
    }
}

/// Resolves `name` in `library` and pairs it with `signature`.
///
/// # Errors
///
/// - [`Error::InvalidSignature`] if the signature has a `void` parameter
/// - [`Error::SymbolNotFound`] if the library does not export `name`
pub fn bind(library: &Arc<NativeLibrary>, name: &str, signature: &Signature) -> Result<Callable> {
    signature.validate(name)?;
    let address = library.resolve(name)?;
    debug!(symbol = name, signature = %signature, "Bound native symbol");
    Ok(Callable {
        name: name.to_string(),
        signature: signature.clone(),
        address,
        library: library.clone(),
    })
}

/// A resolved native function, not yet given a Rust type.
///
/// Keeps the library loaded for as long as it, or any [`TypedCallable`]
/// derived from it, is alive.
#[derive(Clone)]
pub struct Callable {
    name: String,
    signature: Signature,
    address: *const c_void,
    library: Arc<NativeLibrary>,
}

// Safety: the address refers to immutable code in a library kept alive by `library`.
unsafe impl Send for Callable {}
unsafe impl Sync for Callable {}

impl Callable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn address(&self) -> *const c_void {
        self.address
    }

    /// Gives the callable a Rust function type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SignatureMismatch`] if the tags of `F` differ from the
    /// registered signature in any position.
    pub fn typed<F: NativeFn>(&self) -> Result<TypedCallable<F>> {
        let requested = Signature::of::<F>();
        if requested != self.signature {
            return Err(Error::SignatureMismatch {
                symbol: self.name.clone(),
                registered: self.signature.to_string(),
                requested: requested.to_string(),
            });
        }
        Ok(TypedCallable {
            // Safety: the tags of `F` match the declared signature of the symbol.
            function: unsafe { F::from_address(self.address) },
            _library: self.library.clone(),
        })
    }
}

impl std::fmt::Debug for Callable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callable")
            .field("name", &self.name)
            .field("signature", &self.signature.to_string())
            .field("address", &self.address)
            .finish()
    }
}

/// A native function with a checked Rust type.
///
/// Dereferences to the function pointer; calling it is `unsafe` because the
/// native function's own contract (valid pointers, thread affinity) is not
/// checked here.
pub struct TypedCallable<F> {
    function: F,
    _library: Arc<NativeLibrary>,
}

impl<F: NativeFn> TypedCallable<F> {
    pub fn get(&self) -> F {
        self.function
    }
}

impl<F> Deref for TypedCallable<F> {
    type Target = F;

    fn deref(&self) -> &F {
        &self.function
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::c_char;

    use super::*;

    #[test]
    fn function_types_map_to_tags() {
        type GetPathInfo = unsafe extern "C" fn(*const c_char, *mut c_void) -> bool;
        assert_eq!(
            GetPathInfo::params(),
            [NativeType::Pointer, NativeType::Pointer]
        );
        assert_eq!(GetPathInfo::result(), NativeType::Bool);

        type Quit = unsafe extern "C" fn();
        assert!(Quit::params().is_empty());
        assert_eq!(Quit::result(), NativeType::Void);

        type CreateThread =
            unsafe extern "C" fn(FnPtr, *const c_char, OpaquePtr, FnPtr, FnPtr) -> OpaquePtr;
        assert_eq!(
            CreateThread::params(),
            [
                NativeType::FunctionPointer,
                NativeType::Pointer,
                NativeType::Pointer,
                NativeType::FunctionPointer,
                NativeType::FunctionPointer
            ]
        );
    }

    #[test]
    fn address_round_trips_through_from_address() {
        extern "C" fn double(value: i32) -> i32 {
            value * 2
        }
        let f: extern "C" fn(i32) -> i32 = double;
        let back = unsafe { <extern "C" fn(i32) -> i32>::from_address(f.address()) };
        assert_eq!(back(21), 42);
    }
}
