// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Exported SDL3 functions and their call signatures, grouped by header.
//!
//! Groups in [`CORE_GROUPS`] are exported by every SDL3 build. The remaining
//! groups only exist for one target platform or when an optional backend was
//! compiled into the library, and must not be bound otherwise.

use crate::NativeType;

/// One exported function: symbol name, parameter tags in order, result tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolDecl {
    pub name: &'static str,
    pub params: &'static [NativeType],
    pub result: NativeType,
}

/// A named set of declarations that is either bound as a whole or not at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolGroup {
    pub name: &'static str,
    pub symbols: &'static [SymbolDecl],
}

macro_rules! symbol_group {
    ($group:ident = $label:literal { $($name:ident ( $($param:ident),* ) -> $result:ident;)* }) => {
        pub static $group: SymbolGroup = SymbolGroup {
            name: $label,
            symbols: &[$(
                SymbolDecl {
                    name: stringify!($name),
                    params: &[$(NativeType::$param),*],
                    result: NativeType::$result,
                },
            )*],
        };
    };
}

symbol_group!(INIT = "init" {
    SDL_Init(U32) -> Bool;
    SDL_InitSubSystem(U32) -> Bool;
    SDL_QuitSubSystem(U32) -> Void;
    SDL_WasInit(U32) -> U32;
    SDL_Quit() -> Void;
});

symbol_group!(VERSION = "version" {
    SDL_GetVersion() -> I32;
    SDL_GetRevision() -> Pointer;
});

symbol_group!(ERROR = "error" {
    SDL_GetError() -> Pointer;
    SDL_ClearError() -> Bool;
    SDL_OutOfMemory() -> Bool;
});

symbol_group!(PLATFORM = "platform" {
    SDL_GetPlatform() -> Pointer;
    SDL_GetNumLogicalCPUCores() -> I32;
    SDL_GetCPUCacheLineSize() -> I32;
    SDL_GetSystemRAM() -> I32;
    SDL_HasSSE2() -> Bool;
    SDL_HasAVX2() -> Bool;
    SDL_HasNEON() -> Bool;
});

symbol_group!(STDINC = "stdinc" {
    SDL_malloc(USize) -> Pointer;
    SDL_calloc(USize, USize) -> Pointer;
    SDL_free(Pointer) -> Void;
});

symbol_group!(TIMER = "timer" {
    SDL_GetTicks() -> U64;
    SDL_GetTicksNS() -> U64;
    SDL_GetPerformanceCounter() -> U64;
    SDL_GetPerformanceFrequency() -> U64;
    SDL_Delay(U32) -> Void;
    SDL_DelayNS(U64) -> Void;
});

symbol_group!(TIME = "time" {
    SDL_GetCurrentTime(Pointer) -> Bool;
    SDL_TimeToDateTime(I64, Pointer, Bool) -> Bool;
    SDL_DateTimeToTime(Pointer, Pointer) -> Bool;
    SDL_GetDaysInMonth(I32, I32) -> I32;
});

symbol_group!(ATOMIC = "atomic" {
    SDL_CompareAndSwapAtomicInt(Pointer, I32, I32) -> Bool;
    SDL_SetAtomicInt(Pointer, I32) -> I32;
    SDL_GetAtomicInt(Pointer) -> I32;
    SDL_AddAtomicInt(Pointer, I32) -> I32;
    SDL_CompareAndSwapAtomicU32(Pointer, U32, U32) -> Bool;
    SDL_SetAtomicU32(Pointer, U32) -> U32;
    SDL_GetAtomicU32(Pointer) -> U32;
    SDL_MemoryBarrierReleaseFunction() -> Void;
    SDL_MemoryBarrierAcquireFunction() -> Void;
});

symbol_group!(THREAD = "thread" {
    SDL_CreateThreadRuntime(FunctionPointer, Pointer, Pointer, FunctionPointer, FunctionPointer) -> Pointer;
    SDL_GetThreadName(Pointer) -> Pointer;
    SDL_GetCurrentThreadID() -> U64;
    SDL_GetThreadID(Pointer) -> U64;
    SDL_SetCurrentThreadPriority(I32) -> Bool;
    SDL_WaitThread(Pointer, Pointer) -> Void;
    SDL_DetachThread(Pointer) -> Void;
});

symbol_group!(MUTEX = "mutex" {
    SDL_CreateMutex() -> Pointer;
    SDL_LockMutex(Pointer) -> Void;
    SDL_TryLockMutex(Pointer) -> Bool;
    SDL_UnlockMutex(Pointer) -> Void;
    SDL_DestroyMutex(Pointer) -> Void;
});

symbol_group!(FILESYSTEM = "filesystem" {
    SDL_GetBasePath() -> Pointer;
    SDL_GetPrefPath(Pointer, Pointer) -> Pointer;
    SDL_GetCurrentDirectory() -> Pointer;
    SDL_GetPathInfo(Pointer, Pointer) -> Bool;
    SDL_CreateDirectory(Pointer) -> Bool;
    SDL_RemovePath(Pointer) -> Bool;
    SDL_RenamePath(Pointer, Pointer) -> Bool;
});

symbol_group!(IOSTREAM = "iostream" {
    SDL_IOFromFile(Pointer, Pointer) -> Pointer;
    SDL_IOFromMem(Pointer, USize) -> Pointer;
    SDL_OpenIO(Pointer, Pointer) -> Pointer;
    SDL_CloseIO(Pointer) -> Bool;
    SDL_GetIOSize(Pointer) -> I64;
    SDL_SeekIO(Pointer, I64, I32) -> I64;
    SDL_ReadIO(Pointer, Pointer, USize) -> USize;
    SDL_WriteIO(Pointer, Pointer, USize) -> USize;
});

symbol_group!(VIDEO = "video" {
    SDL_GetPrimaryDisplay() -> U32;
    SDL_GetDisplays(Pointer) -> Pointer;
    SDL_GetDisplayBounds(U32, Pointer) -> Bool;
    SDL_GetCurrentDisplayMode(U32) -> Pointer;
    SDL_CreateWindow(Pointer, I32, I32, U64) -> Pointer;
    SDL_DestroyWindow(Pointer) -> Void;
    SDL_GetWindowSize(Pointer, Pointer, Pointer) -> Bool;
    SDL_SetWindowTitle(Pointer, Pointer) -> Bool;
    SDL_ShowWindow(Pointer) -> Bool;
});

symbol_group!(RENDER = "render" {
    SDL_CreateRenderer(Pointer, Pointer) -> Pointer;
    SDL_DestroyRenderer(Pointer) -> Void;
    SDL_SetRenderDrawColor(Pointer, U8, U8, U8, U8) -> Bool;
    SDL_RenderClear(Pointer) -> Bool;
    SDL_RenderFillRect(Pointer, Pointer) -> Bool;
    SDL_RenderGeometry(Pointer, Pointer, Pointer, I32, Pointer, I32) -> Bool;
    SDL_RenderPresent(Pointer) -> Bool;
});

symbol_group!(GPU = "gpu" {
    SDL_CreateGPUDevice(U32, Bool, Pointer) -> Pointer;
    SDL_DestroyGPUDevice(Pointer) -> Void;
    SDL_SetGPUViewport(Pointer, Pointer) -> Void;
});

symbol_group!(AUDIO = "audio" {
    SDL_GetNumAudioDrivers() -> I32;
    SDL_GetAudioDriver(I32) -> Pointer;
    SDL_GetAudioDeviceFormat(U32, Pointer, Pointer) -> Bool;
    SDL_OpenAudioDeviceStream(U32, Pointer, FunctionPointer, Pointer) -> Pointer;
    SDL_PutAudioStreamData(Pointer, Pointer, I32) -> Bool;
    SDL_DestroyAudioStream(Pointer) -> Void;
});

symbol_group!(CAMERA = "camera" {
    SDL_GetCameras(Pointer) -> Pointer;
    SDL_GetCameraSupportedFormats(U32, Pointer) -> Pointer;
    SDL_OpenCamera(U32, Pointer) -> Pointer;
    SDL_CloseCamera(Pointer) -> Void;
});

symbol_group!(EVENTS = "events" {
    SDL_PumpEvents() -> Void;
    SDL_PollEvent(Pointer) -> Bool;
    SDL_PushEvent(Pointer) -> Bool;
    SDL_RegisterEvents(I32) -> U32;
});

symbol_group!(TOUCH = "touch" {
    SDL_GetTouchDevices(Pointer) -> Pointer;
    SDL_GetTouchFingers(U64, Pointer) -> Pointer;
});

symbol_group!(JOYSTICK = "joystick" {
    SDL_GetJoysticks(Pointer) -> Pointer;
    SDL_AttachVirtualJoystick(Pointer) -> U32;
    SDL_DetachVirtualJoystick(U32) -> Bool;
});

symbol_group!(HAPTIC = "haptic" {
    SDL_GetHaptics(Pointer) -> Pointer;
    SDL_OpenHaptic(U32) -> Pointer;
    SDL_CloseHaptic(Pointer) -> Void;
    SDL_CreateHapticEffect(Pointer, Pointer) -> I32;
    SDL_RunHapticEffect(Pointer, I32, U32) -> Bool;
    SDL_DestroyHapticEffect(Pointer, I32) -> Void;
    SDL_HapticRumbleSupported(Pointer) -> Bool;
    SDL_PlayHapticRumble(Pointer, F32, U32) -> Bool;
});

symbol_group!(SENSOR = "sensor" {
    SDL_GetSensors(Pointer) -> Pointer;
    SDL_OpenSensor(U32) -> Pointer;
    SDL_GetSensorType(Pointer) -> I32;
    SDL_GetSensorData(Pointer, Pointer, I32) -> Bool;
    SDL_CloseSensor(Pointer) -> Void;
});

symbol_group!(LOCALE = "locale" {
    SDL_GetPreferredLocales(Pointer) -> Pointer;
});

symbol_group!(MESSAGEBOX = "messagebox" {
    SDL_ShowMessageBox(Pointer, Pointer) -> Bool;
    SDL_ShowSimpleMessageBox(U32, Pointer, Pointer, Pointer) -> Bool;
});

symbol_group!(DIALOG = "dialog" {
    SDL_ShowOpenFileDialog(FunctionPointer, Pointer, Pointer, Pointer, I32, Pointer, Bool) -> Void;
    SDL_ShowSaveFileDialog(FunctionPointer, Pointer, Pointer, Pointer, I32, Pointer) -> Void;
});

/// Groups exported by every SDL3 build.
pub static CORE_GROUPS: &[&SymbolGroup] = &[
    &INIT,
    &VERSION,
    &ERROR,
    &PLATFORM,
    &STDINC,
    &TIMER,
    &TIME,
    &ATOMIC,
    &THREAD,
    &MUTEX,
    &FILESYSTEM,
    &IOSTREAM,
    &VIDEO,
    &RENDER,
    &GPU,
    &AUDIO,
    &CAMERA,
    &EVENTS,
    &TOUCH,
    &JOYSTICK,
    &HAPTIC,
    &SENSOR,
    &LOCALE,
    &MESSAGEBOX,
    &DIALOG,
];

symbol_group!(WINDOWS = "windows" {
    SDL_SetWindowsMessageHook(FunctionPointer, Pointer) -> Void;
    SDL_GetDirect3D9AdapterIndex(U32) -> I32;
    SDL_GetDXGIOutputInfo(U32, Pointer, Pointer) -> Bool;
    SDL_RegisterApp(Pointer, U32, Pointer) -> Bool;
    SDL_UnregisterApp() -> Void;
});

symbol_group!(LINUX = "linux" {
    SDL_SetLinuxThreadPriority(I64, I32) -> Bool;
    SDL_SetLinuxThreadPriorityAndPolicy(I64, I32, I32) -> Bool;
});

symbol_group!(MACOS = "macos" {
    SDL_Metal_CreateView(Pointer) -> Pointer;
    SDL_Metal_DestroyView(Pointer) -> Void;
    SDL_Metal_GetLayer(Pointer) -> Pointer;
});

symbol_group!(IOS = "ios" {
    SDL_SetiOSAnimationCallback(Pointer, I32, FunctionPointer, Pointer) -> Bool;
    SDL_SetiOSEventPump(Bool) -> Void;
    SDL_OnApplicationDidChangeStatusBarOrientation() -> Void;
});

symbol_group!(ANDROID = "android" {
    SDL_GetAndroidSDKVersion() -> I32;
    SDL_IsChromebook() -> Bool;
    SDL_IsDeXMode() -> Bool;
    SDL_SendAndroidBackButton() -> Void;
    SDL_GetAndroidJNIEnv() -> Pointer;
    SDL_GetAndroidActivity() -> Pointer;
    SDL_GetAndroidInternalStoragePath() -> Pointer;
});

symbol_group!(X11 = "x11" {
    SDL_SetX11EventHook(FunctionPointer, Pointer) -> Void;
});

symbol_group!(GDK = "gdk" {
    SDL_GetGDKTaskQueue(Pointer) -> Bool;
    SDL_GetGDKDefaultUser(Pointer) -> Bool;
});
