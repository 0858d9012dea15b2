// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! The loaded SDL3 library and its bound functions.
//!
//! [`Sdl`] is the main entry point: it opens the shared library, binds every
//! symbol of the registry selected for the target platform, and offers typed
//! access to the bound functions plus wrappers for a few common calls.

use std::{
    collections::HashMap,
    ffi::{CStr, CString, c_char, c_void},
    fmt,
    sync::Arc,
};

use sdl3_ffi_sys as sys;
use serde::Serialize;
use tracing::info;

use crate::{
    Error, FnPtr, OpaquePtr, Result,
    codec::AlignedBuffer,
    config::LoadConfig,
    library::{Callable, NativeFn, NativeLibrary, TypedCallable, bind},
    platform::Platform,
    registry::SymbolRegistry,
    structs::{AtomicInt, AtomicU32, DateTime, DisplayMode, Locale, PathInfo, Rect, validate_layouts},
    thread::ThreadRuntimeHooks,
    wrapper::NativeStruct,
};

/// An SDL version number as reported by `SDL_GetVersion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Version {
    pub major: i32,
    pub minor: i32,
    pub micro: i32,
}

impl Version {
    /// The version of the headers these bindings were written against.
    pub const HEADERS: Version = Version {
        major: sys::SDL_MAJOR_VERSION,
        minor: sys::SDL_MINOR_VERSION,
        micro: sys::SDL_MICRO_VERSION,
    };

    /// Splits the packed `major * 1000000 + minor * 1000 + micro` form.
    pub const fn from_number(number: i32) -> Self {
        Self {
            major: number / 1_000_000,
            minor: (number / 1_000) % 1_000,
            micro: number % 1_000,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// One entry of [`Sdl::preferred_locales`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleName {
    pub language: String,
    pub country: Option<String>,
}

/// Internal shared state of a loaded library.
///
/// Immutable after construction, so [`Sdl`] handles can be cloned and shared
/// across threads.
pub(crate) struct SdlContext {
    library: Arc<NativeLibrary>,
    registry: SymbolRegistry,
    platform: Platform,
    callables: HashMap<&'static str, Callable>,
}

/// A loaded SDL3 library with every registered symbol bound.
///
/// Native failures are not turned into [`Error`]: wrappers return SDL's own
/// `bool`/`Option` result and the message is available from
/// [`Sdl::last_error`].
///
/// # Examples
///
/// ```no_run
/// use sdl3_ffi::{LoadConfig, Sdl};
///
/// # fn main() -> Result<(), sdl3_ffi::Error> {
/// let sdl = Sdl::load(&LoadConfig::from_env()?)?;
/// println!("SDL {} on {}", sdl.version()?, sdl.platform_name()?);
///
/// if let Some(info) = sdl.path_info("/tmp")? {
///     println!("{:?}, {} bytes", info.path_type(), info.size);
/// } else {
///     println!("SDL_GetPathInfo failed: {}", sdl.last_error()?);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Sdl {
    context: Arc<SdlContext>,
}

impl Sdl {
    /// Opens the library and binds the registry selected by `config`.
    ///
    /// Struct layouts are validated first, so schema errors surface here
    /// rather than on first use.
    ///
    /// # Errors
    ///
    /// - A schema error if a layout or registry entry is malformed
    /// - [`Error::LibLoading`] if the library cannot be opened
    /// - [`Error::SymbolNotFound`] if a registered symbol is not exported
    pub fn load(config: &LoadConfig) -> Result<Self> {
        validate_layouts()?;
        let platform = config.platform();
        let registry = SymbolRegistry::for_target(platform, &config.optional_groups)?;
        let library = NativeLibrary::open(config.library_path())?;
        Self::with_registry(library, registry, platform)
    }

    /// Binds every entry of `registry` in an already opened library.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SymbolNotFound`] for the first entry the library does
    /// not export.
    pub fn with_registry(
        library: Arc<NativeLibrary>,
        registry: SymbolRegistry,
        platform: Platform,
    ) -> Result<Self> {
        let mut callables = HashMap::with_capacity(registry.len());
        for entry in registry.iter() {
            callables.insert(entry.name(), bind(&library, entry.name(), entry.signature())?);
        }
        info!(
            library = %library.path().display(),
            %platform,
            symbols = callables.len(),
            groups = ?registry.groups(),
            "Bound native library"
        );
        Ok(Self {
            context: Arc::new(SdlContext {
                library,
                registry,
                platform,
                callables,
            }),
        })
    }

    pub fn library(&self) -> &Arc<NativeLibrary> {
        &self.context.library
    }

    pub fn registry(&self) -> &SymbolRegistry {
        &self.context.registry
    }

    pub fn platform(&self) -> Platform {
        self.context.platform
    }

    /// The bound callable for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRegistered`] if `name` is not in the registry.
    pub fn callable(&self, name: &str) -> Result<&Callable> {
        self.context
            .callables
            .get(name)
            .ok_or_else(|| Error::NotRegistered(name.to_string()))
    }

    /// The bound function `name` as the function type `F`.
    ///
    /// # Errors
    ///
    /// - [`Error::NotRegistered`] if `name` is not in the registry
    /// - [`Error::SignatureMismatch`] if `F` differs from the registered signature
    pub fn function<F: NativeFn>(&self, name: &str) -> Result<TypedCallable<F>> {
        self.callable(name)?.typed::<F>()
    }

    /// Version of the loaded library.
    pub fn version(&self) -> Result<Version> {
        let get_version = self.function::<unsafe extern "C" fn() -> i32>("SDL_GetVersion")?;
        Ok(Version::from_number(unsafe { (*get_version)() }))
    }

    /// Source revision the library was built from.
    pub fn revision(&self) -> Result<String> {
        let get_revision =
            self.function::<unsafe extern "C" fn() -> *const c_char>("SDL_GetRevision")?;
        Ok(unsafe { native_string((*get_revision)()) }.unwrap_or_default())
    }

    /// Platform name as SDL reports it (`"Linux"`, `"Windows"`, ...).
    pub fn platform_name(&self) -> Result<String> {
        let get_platform =
            self.function::<unsafe extern "C" fn() -> *const c_char>("SDL_GetPlatform")?;
        Ok(unsafe { native_string((*get_platform)()) }.unwrap_or_default())
    }

    /// Message of the last error SDL reported on this thread.
    pub fn last_error(&self) -> Result<String> {
        let get_error = self.function::<unsafe extern "C" fn() -> *const c_char>("SDL_GetError")?;
        Ok(unsafe { native_string((*get_error)()) }.unwrap_or_default())
    }

    pub fn clear_error(&self) -> Result<bool> {
        let clear_error = self.function::<unsafe extern "C" fn() -> bool>("SDL_ClearError")?;
        Ok(unsafe { (*clear_error)() })
    }

    /// Initializes the subsystems in `flags` (`SDL_INIT_*`).
    pub fn init(&self, flags: u32) -> Result<bool> {
        let init = self.function::<unsafe extern "C" fn(u32) -> bool>("SDL_Init")?;
        Ok(unsafe { (*init)(flags) })
    }

    pub fn quit(&self) -> Result<()> {
        let quit = self.function::<unsafe extern "C" fn()>("SDL_Quit")?;
        unsafe { (*quit)() };
        Ok(())
    }

    /// The subset of `flags` that is initialized; all initialized subsystems
    /// if `flags` is 0.
    pub fn was_init(&self, flags: u32) -> Result<u32> {
        let was_init = self.function::<unsafe extern "C" fn(u32) -> u32>("SDL_WasInit")?;
        Ok(unsafe { (*was_init)(flags) })
    }

    /// Milliseconds since library initialization.
    pub fn ticks(&self) -> Result<u64> {
        let get_ticks = self.function::<unsafe extern "C" fn() -> u64>("SDL_GetTicks")?;
        Ok(unsafe { (*get_ticks)() })
    }

    pub fn logical_cpu_cores(&self) -> Result<i32> {
        let get_cores = self.function::<unsafe extern "C" fn() -> i32>("SDL_GetNumLogicalCPUCores")?;
        Ok(unsafe { (*get_cores)() })
    }

    /// System RAM in MiB.
    pub fn system_ram(&self) -> Result<i32> {
        let get_ram = self.function::<unsafe extern "C" fn() -> i32>("SDL_GetSystemRAM")?;
        Ok(unsafe { (*get_ram)() })
    }

    /// Current wall clock time in nanoseconds since the Unix epoch.
    pub fn current_time(&self) -> Result<Option<i64>> {
        let get_time = self.function::<unsafe extern "C" fn(*mut i64) -> bool>("SDL_GetCurrentTime")?;
        let mut ticks = 0i64;
        Ok(unsafe { (*get_time)(&mut ticks) }.then_some(ticks))
    }

    /// Breaks `time` (nanoseconds since the epoch) into calendar fields.
    pub fn date_time(&self, time: i64, local_time: bool) -> Result<Option<DateTime>> {
        let to_date_time = self
            .function::<unsafe extern "C" fn(i64, *mut c_void, bool) -> bool>("SDL_TimeToDateTime")?;
        out_struct(|out| unsafe { (*to_date_time)(time, out, local_time) })
    }

    /// Queries a filesystem entry; `None` if it does not exist or cannot be read.
    pub fn path_info(&self, path: &str) -> Result<Option<PathInfo>> {
        let get_path_info = self
            .function::<unsafe extern "C" fn(*const c_char, *mut c_void) -> bool>("SDL_GetPathInfo")?;
        let path = CString::new(path)?;
        out_struct(|out| unsafe { (*get_path_info)(path.as_ptr(), out) })
    }

    /// Directory the application was run from, owned by SDL.
    pub fn base_path(&self) -> Result<Option<String>> {
        let get_base_path =
            self.function::<unsafe extern "C" fn() -> *const c_char>("SDL_GetBasePath")?;
        Ok(unsafe { native_string((*get_base_path)()) })
    }

    /// Desktop area of a display.
    pub fn display_bounds(&self, display_id: u32) -> Result<Option<Rect>> {
        let get_bounds = self
            .function::<unsafe extern "C" fn(u32, *mut c_void) -> bool>("SDL_GetDisplayBounds")?;
        out_struct(|out| unsafe { (*get_bounds)(display_id, out) })
    }

    /// Current mode of a display, read from memory owned by SDL.
    pub fn current_display_mode(&self, display_id: u32) -> Result<Option<DisplayMode>> {
        let get_mode = self
            .function::<unsafe extern "C" fn(u32) -> *const c_void>("SDL_GetCurrentDisplayMode")?;
        let mode = unsafe { (*get_mode)(display_id) };
        if mode.is_null() {
            return Ok(None);
        }
        // Safety: SDL returns a pointer to a complete SDL_DisplayMode.
        let bytes = unsafe { native_bytes(mode, DisplayMode::layout().size()) };
        DisplayMode::read(bytes).map(Some)
    }

    /// The user's preferred locales, most preferred first.
    pub fn preferred_locales(&self) -> Result<Vec<LocaleName>> {
        let get_locales = self.function::<unsafe extern "C" fn(*mut i32) -> *mut *const c_void>(
            "SDL_GetPreferredLocales",
        )?;
        let free = self.function::<unsafe extern "C" fn(*mut c_void)>("SDL_free")?;

        let mut count = 0i32;
        let list = unsafe { (*get_locales)(&mut count) };
        if list.is_null() {
            return Ok(Vec::new());
        }
        let count = usize::try_from(count).unwrap_or_default();
        let size = Locale::layout().size();
        let locales = (0..count)
            .map(|i| {
                // Safety: SDL returns `count` valid entries in one allocation.
                let locale = Locale::read(unsafe { native_bytes(*list.add(i), size) })?;
                let language = unsafe { native_string(locale.language.as_ptr()) };
                let country = unsafe { native_string(locale.country.as_ptr()) };
                Ok(LocaleName {
                    language: language.unwrap_or_default(),
                    country,
                })
            })
            .collect::<Result<Vec<_>>>();
        unsafe { (*free)(list.cast()) };
        locales
    }

    /// Atomically adds `delta`, returning the previous value.
    pub fn add_atomic_int(&self, atomic: &mut AtomicInt, delta: i32) -> Result<i32> {
        let add = self.function::<unsafe extern "C" fn(*mut c_void, i32) -> i32>("SDL_AddAtomicInt")?;
        in_out_struct(atomic, |ptr| unsafe { (*add)(ptr, delta) })
    }

    pub fn get_atomic_int(&self, atomic: &mut AtomicInt) -> Result<i32> {
        let get = self.function::<unsafe extern "C" fn(*mut c_void) -> i32>("SDL_GetAtomicInt")?;
        in_out_struct(atomic, |ptr| unsafe { (*get)(ptr) })
    }

    /// Atomically stores `value`, returning the previous value.
    pub fn set_atomic_int(&self, atomic: &mut AtomicInt, value: i32) -> Result<i32> {
        let set = self.function::<unsafe extern "C" fn(*mut c_void, i32) -> i32>("SDL_SetAtomicInt")?;
        in_out_struct(atomic, |ptr| unsafe { (*set)(ptr, value) })
    }

    pub fn compare_and_swap_atomic_int(
        &self,
        atomic: &mut AtomicInt,
        old_value: i32,
        new_value: i32,
    ) -> Result<bool> {
        let cas = self.function::<unsafe extern "C" fn(*mut c_void, i32, i32) -> bool>(
            "SDL_CompareAndSwapAtomicInt",
        )?;
        in_out_struct(atomic, |ptr| unsafe { (*cas)(ptr, old_value, new_value) })
    }

    /// Atomically stores `value`, returning the previous value.
    pub fn set_atomic_u32(&self, atomic: &mut AtomicU32, value: u32) -> Result<u32> {
        let set = self.function::<unsafe extern "C" fn(*mut c_void, u32) -> u32>("SDL_SetAtomicU32")?;
        in_out_struct(atomic, |ptr| unsafe { (*set)(ptr, value) })
    }

    pub fn get_atomic_u32(&self, atomic: &mut AtomicU32) -> Result<u32> {
        let get = self.function::<unsafe extern "C" fn(*mut c_void) -> u32>("SDL_GetAtomicU32")?;
        in_out_struct(atomic, |ptr| unsafe { (*get)(ptr) })
    }

    /// Starts a native thread running `function(data)`.
    ///
    /// The C runtime hooks come from [`ThreadRuntimeHooks::current`]. Returns
    /// `None` if SDL could not create the thread.
    pub fn create_thread(
        &self,
        function: sys::ThreadFunction,
        name: &str,
        data: OpaquePtr,
    ) -> Result<Option<OpaquePtr>> {
        type CreateThreadRuntime =
            unsafe extern "C" fn(FnPtr, *const c_char, OpaquePtr, FnPtr, FnPtr) -> OpaquePtr;
        let create = self.function::<CreateThreadRuntime>("SDL_CreateThreadRuntime")?;
        let name = CString::new(name)?;
        let hooks = ThreadRuntimeHooks::current();
        let thread =
            unsafe { (*create)(FnPtr::new(function), name.as_ptr(), data, hooks.begin, hooks.end) };
        Ok((!thread.is_null()).then_some(thread))
    }

    /// Waits for a thread from [`Self::create_thread`] and returns its exit status.
    pub fn wait_thread(&self, thread: OpaquePtr) -> Result<i32> {
        let wait = self.function::<unsafe extern "C" fn(OpaquePtr, *mut i32)>("SDL_WaitThread")?;
        let mut status = 0i32;
        unsafe { (*wait)(thread, &mut status) };
        Ok(status)
    }

    pub fn current_thread_id(&self) -> Result<u64> {
        let get_id = self.function::<unsafe extern "C" fn() -> u64>("SDL_GetCurrentThreadID")?;
        Ok(unsafe { (*get_id)() })
    }

    /// Sets the priority of a thread through RealtimeKit or `setpriority`.
    #[cfg(target_os = "linux")]
    pub fn set_linux_thread_priority(&self, thread_id: i64, priority: i32) -> Result<bool> {
        let set_priority = self
            .function::<unsafe extern "C" fn(i64, i32) -> bool>("SDL_SetLinuxThreadPriority")?;
        Ok(unsafe { (*set_priority)(thread_id, priority) })
    }
}

impl fmt::Debug for Sdl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sdl")
            .field("library", &self.context.library.path())
            .field("platform", &self.context.platform)
            .field("symbols", &self.context.callables.len())
            .finish()
    }
}

/// Runs `call` with a zeroed struct buffer as out-parameter and decodes it if
/// the call reports success.
fn out_struct<T: NativeStruct>(call: impl FnOnce(*mut c_void) -> bool) -> Result<Option<T>> {
    let mut buffer = AlignedBuffer::for_layout(T::layout());
    if !call(buffer.as_mut_ptr()) {
        return Ok(None);
    }
    T::read(&buffer).map(Some)
}

/// Encodes `value`, passes it to `call` by pointer, and decodes it back.
fn in_out_struct<T: NativeStruct, R>(value: &mut T, call: impl FnOnce(*mut c_void) -> R) -> Result<R> {
    let mut buffer = value.to_buffer()?;
    let result = call(buffer.as_mut_ptr());
    *value = T::read(&buffer)?;
    Ok(result)
}

/// Copies a NUL-terminated string owned by the library.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string.
unsafe fn native_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

/// Borrows `len` bytes of library-owned memory.
///
/// # Safety
///
/// `ptr` must point to at least `len` readable bytes that outlive the borrow.
unsafe fn native_bytes<'a>(ptr: *const c_void, len: usize) -> &'a [u8] {
    unsafe { std::slice::from_raw_parts(ptr.cast::<u8>(), len) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_numbers_unpack() {
        let version = Version::from_number(3_002_010);
        assert_eq!(
            version,
            Version {
                major: 3,
                minor: 2,
                micro: 10
            }
        );
        assert_eq!(version.to_string(), "3.2.10");
        assert!(version > Version::HEADERS);
    }

    #[test]
    fn out_struct_decodes_only_on_success() {
        let rect = out_struct::<Rect>(|out| {
            unsafe { out.cast::<i32>().add(2).write(640) };
            true
        })
        .unwrap();
        assert_eq!(rect.map(|rect| rect.w), Some(640));
        assert_eq!(out_struct::<Rect>(|_| false).unwrap(), None);
    }

    #[test]
    fn in_out_struct_sees_native_writes() {
        let mut atomic = AtomicInt { value: 41 };
        let previous = in_out_struct(&mut atomic, |ptr| {
            let slot = ptr.cast::<i32>();
            unsafe {
                let old = slot.read();
                slot.write(old + 1);
                old
            }
        })
        .unwrap();
        assert_eq!(previous, 41);
        assert_eq!(atomic.value, 42);
    }

    #[test]
    fn native_string_handles_null() {
        assert_eq!(unsafe { native_string(std::ptr::null()) }, None);
        let text = c"Linux";
        assert_eq!(unsafe { native_string(text.as_ptr()) }.as_deref(), Some("Linux"));
    }
}
