// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! `#[repr(C)]` mirrors of SDL3 structs.
//!
//! Type names drop the `SDL_` prefix; fields keep the header spelling, with a
//! trailing underscore where the C name is a Rust keyword (`type_`, `mod_`).

use core::ffi::{c_char, c_int, c_void};

pub type DisplayID = u32;
pub type WindowID = u32;
pub type KeyboardID = u32;
pub type MouseID = u32;
pub type FingerID = u64;
pub type Time = i64;
pub type PixelFormat = u32;
pub type Colorspace = u32;
pub type AudioFormat = u32;
pub type PathType = u32;
pub type Scancode = u32;
pub type Keycode = u32;
pub type Keymod = u16;
pub type SensorType = c_int;
pub type MessageBoxButtonFlags = u32;
pub type MouseButtonFlags = u32;
pub type IOWhence = c_int;
pub type IOStatus = c_int;

pub const MESSAGEBOX_COLOR_COUNT: usize = 5;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: c_int,
    pub y: c_int,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FPoint {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: c_int,
    pub y: c_int,
    pub w: c_int,
    pub h: c_int,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: FPoint,
    pub color: FColor,
    pub tex_coord: FPoint,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GUID {
    pub data: [u8; 16],
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PathInfo {
    pub type_: PathType,
    pub size: u64,
    pub create_time: Time,
    pub modify_time: Time,
    pub access_time: Time,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateTime {
    pub year: c_int,
    pub month: c_int,
    pub day: c_int,
    pub hour: c_int,
    pub minute: c_int,
    pub second: c_int,
    pub nanosecond: c_int,
    pub day_of_week: c_int,
    pub utc_offset: c_int,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AudioSpec {
    pub format: AudioFormat,
    pub channels: c_int,
    pub freq: c_int,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMode {
    pub displayID: DisplayID,
    pub format: PixelFormat,
    pub w: c_int,
    pub h: c_int,
    pub pixel_density: f32,
    pub refresh_rate: f32,
    pub refresh_rate_numerator: c_int,
    pub refresh_rate_denominator: c_int,
    pub internal: *mut c_void,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CameraSpec {
    pub format: PixelFormat,
    pub colorspace: Colorspace,
    pub width: c_int,
    pub height: c_int,
    pub framerate_numerator: c_int,
    pub framerate_denominator: c_int,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Finger {
    pub id: FingerID,
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub language: *const c_char,
    pub country: *const c_char,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogFileFilter {
    pub name: *const c_char,
    pub pattern: *const c_char,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HapticDirection {
    pub type_: u8,
    pub dir: [i32; 3],
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HapticConstant {
    pub type_: u16,
    pub direction: HapticDirection,
    pub length: u32,
    pub delay: u16,
    pub button: u16,
    pub interval: u16,
    pub level: i16,
    pub attack_length: u16,
    pub attack_level: u16,
    pub fade_length: u16,
    pub fade_level: u16,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MessageBoxColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MessageBoxColorScheme {
    pub colors: [MessageBoxColor; MESSAGEBOX_COLOR_COUNT],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageBoxButtonData {
    pub flags: MessageBoxButtonFlags,
    pub buttonID: c_int,
    pub text: *const c_char,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VirtualJoystickTouchpadDesc {
    pub nfingers: u16,
    pub padding: [u16; 3],
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct VirtualJoystickSensorDesc {
    pub type_: SensorType,
    pub rate: f32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AtomicInt {
    pub value: c_int,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AtomicU32 {
    pub value: u32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CommonEvent {
    pub type_: u32,
    pub reserved: u32,
    pub timestamp: u64,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub type_: u32,
    pub reserved: u32,
    pub timestamp: u64,
    pub windowID: WindowID,
    pub which: KeyboardID,
    pub scancode: Scancode,
    pub key: Keycode,
    pub mod_: Keymod,
    pub raw: u16,
    pub down: bool,
    pub repeat: bool,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MouseMotionEvent {
    pub type_: u32,
    pub reserved: u32,
    pub timestamp: u64,
    pub windowID: WindowID,
    pub which: MouseID,
    pub state: MouseButtonFlags,
    pub x: f32,
    pub y: f32,
    pub xrel: f32,
    pub yrel: f32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct IOStreamInterface {
    pub version: u32,
    pub size: Option<unsafe extern "C" fn(userdata: *mut c_void) -> i64>,
    pub seek:
        Option<unsafe extern "C" fn(userdata: *mut c_void, offset: i64, whence: IOWhence) -> i64>,
    pub read: Option<
        unsafe extern "C" fn(
            userdata: *mut c_void,
            ptr: *mut c_void,
            size: usize,
            status: *mut IOStatus,
        ) -> usize,
    >,
    pub write: Option<
        unsafe extern "C" fn(
            userdata: *mut c_void,
            ptr: *const c_void,
            size: usize,
            status: *mut IOStatus,
        ) -> usize,
    >,
    pub flush: Option<unsafe extern "C" fn(userdata: *mut c_void, status: *mut IOStatus) -> bool>,
    pub close: Option<unsafe extern "C" fn(userdata: *mut c_void) -> bool>,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GPUViewport {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

/// Thread entry point accepted by `SDL_CreateThreadRuntime`.
pub type ThreadFunction = unsafe extern "C" fn(data: *mut c_void) -> c_int;
