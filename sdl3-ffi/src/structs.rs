// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Typed mirrors of the SDL3 structs the bindings marshal.
//!
//! Every struct comes with a `read_*`/`write_*` pair operating on byte
//! buffers, plus the [`NativeStruct`] methods (`read_at`, `write_at`,
//! `to_buffer`). Pointer fields are [`OpaquePtr`]/[`FnPtr`] handles.

use std::{fmt, str::FromStr};

use sdl3_ffi_sys as sys;
use uuid::Uuid;

use crate::{
    Error, FnPtr, OpaquePtr, Result,
    layout::Layout,
    wrapper::{NativeStruct, native_struct},
};

native_struct! {
    pub struct Point = "SDL_Point", read_point, write_point {
        pub x: i32,
        pub y: i32,
    }
}

native_struct! {
    pub struct FPoint = "SDL_FPoint", read_fpoint, write_fpoint {
        pub x: f32,
        pub y: f32,
    }
}

native_struct! {
    pub struct Rect = "SDL_Rect", read_rect, write_rect {
        pub x: i32,
        pub y: i32,
        pub w: i32,
        pub h: i32,
    }
}

native_struct! {
    pub struct FRect = "SDL_FRect", read_frect, write_frect {
        pub x: f32,
        pub y: f32,
        pub w: f32,
        pub h: f32,
    }
}

native_struct! {
    pub struct Color = "SDL_Color", read_color, write_color {
        pub r: u8,
        pub g: u8,
        pub b: u8,
        pub a: u8,
    }
}

native_struct! {
    pub struct FColor = "SDL_FColor", read_fcolor, write_fcolor {
        pub r: f32,
        pub g: f32,
        pub b: f32,
        pub a: f32,
    }
}

native_struct! {
    /// A vertex for `SDL_RenderGeometry`.
    pub struct Vertex = "SDL_Vertex", read_vertex, write_vertex {
        pub position: FPoint,
        pub color: FColor,
        pub tex_coord: FPoint,
    }
}

native_struct! {
    /// Joystick and controller identifier.
    pub struct Guid = "SDL_GUID", read_guid, write_guid {
        pub data: [u8; 16],
    }
}

impl Guid {
    pub fn to_uuid(&self) -> Uuid {
        Uuid::from_bytes(self.data)
    }
}

impl From<Uuid> for Guid {
    fn from(value: Uuid) -> Self {
        Self {
            data: value.into_bytes(),
        }
    }
}

/// 32 lowercase hex digits, the form `SDL_GUIDToString` produces.
impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uuid().simple())
    }
}

impl FromStr for Guid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::try_parse(s)
            .map(Guid::from)
            .map_err(|e| Error::Other(format!("Invalid GUID {s}: {e}")))
    }
}

/// Kind of filesystem entry reported in [`PathInfo::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    None,
    File,
    Directory,
    Other,
}

impl From<u32> for PathType {
    fn from(value: u32) -> Self {
        match value {
            sys::SDL_PATHTYPE_FILE => PathType::File,
            sys::SDL_PATHTYPE_DIRECTORY => PathType::Directory,
            sys::SDL_PATHTYPE_OTHER => PathType::Other,
            _ => PathType::None,
        }
    }
}

native_struct! {
    /// Result of `SDL_GetPathInfo`. Times are nanoseconds since the Unix epoch.
    pub struct PathInfo = "SDL_PathInfo", read_path_info, write_path_info {
        pub kind as "type": u32,
        pub size: u64,
        pub create_time: i64,
        pub modify_time: i64,
        pub access_time: i64,
    }
}

impl PathInfo {
    pub fn path_type(&self) -> PathType {
        PathType::from(self.kind)
    }
}

native_struct! {
    pub struct DateTime = "SDL_DateTime", read_date_time, write_date_time {
        pub year: i32,
        pub month: i32,
        pub day: i32,
        pub hour: i32,
        pub minute: i32,
        pub second: i32,
        pub nanosecond: i32,
        pub day_of_week: i32,
        /// Seconds east of UTC.
        pub utc_offset: i32,
    }
}

native_struct! {
    pub struct AudioSpec = "SDL_AudioSpec", read_audio_spec, write_audio_spec {
        pub format: u32,
        pub channels: i32,
        pub freq: i32,
    }
}

native_struct! {
    pub struct DisplayMode = "SDL_DisplayMode", read_display_mode, write_display_mode {
        pub display_id as "displayID": u32,
        pub format: u32,
        pub w: i32,
        pub h: i32,
        pub pixel_density: f32,
        pub refresh_rate: f32,
        pub refresh_rate_numerator: i32,
        pub refresh_rate_denominator: i32,
        /// Private to SDL.
        pub internal: OpaquePtr,
    }
}

native_struct! {
    pub struct CameraSpec = "SDL_CameraSpec", read_camera_spec, write_camera_spec {
        pub format: u32,
        pub colorspace: u32,
        pub width: i32,
        pub height: i32,
        pub framerate_numerator: i32,
        pub framerate_denominator: i32,
    }
}

native_struct! {
    pub struct Finger = "SDL_Finger", read_finger, write_finger {
        pub id: u64,
        pub x: f32,
        pub y: f32,
        pub pressure: f32,
    }
}

native_struct! {
    /// `language` and `country` point to strings owned by SDL.
    pub struct Locale = "SDL_Locale", read_locale, write_locale {
        pub language: OpaquePtr,
        pub country: OpaquePtr,
    }
}

native_struct! {
    pub struct DialogFileFilter = "SDL_DialogFileFilter", read_dialog_file_filter, write_dialog_file_filter {
        pub name: OpaquePtr,
        pub pattern: OpaquePtr,
    }
}

native_struct! {
    pub struct HapticDirection = "SDL_HapticDirection", read_haptic_direction, write_haptic_direction {
        pub kind as "type": u8,
        pub dir: [i32; 3],
    }
}

native_struct! {
    pub struct HapticConstant = "SDL_HapticConstant", read_haptic_constant, write_haptic_constant {
        pub kind as "type": u16,
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
}

native_struct! {
    pub struct MessageBoxColor = "SDL_MessageBoxColor", read_message_box_color, write_message_box_color {
        pub r: u8,
        pub g: u8,
        pub b: u8,
    }
}

native_struct! {
    pub struct MessageBoxColorScheme = "SDL_MessageBoxColorScheme", read_message_box_color_scheme, write_message_box_color_scheme {
        pub colors: [MessageBoxColor; sys::MESSAGEBOX_COLOR_COUNT],
    }
}

native_struct! {
    pub struct MessageBoxButtonData = "SDL_MessageBoxButtonData", read_message_box_button_data, write_message_box_button_data {
        pub flags: u32,
        pub button_id as "buttonID": i32,
        pub text: OpaquePtr,
    }
}

native_struct! {
    pub struct VirtualJoystickTouchpadDesc = "SDL_VirtualJoystickTouchpadDesc", read_virtual_joystick_touchpad_desc, write_virtual_joystick_touchpad_desc {
        pub nfingers: u16,
        pub padding: [u16; 3],
    }
}

native_struct! {
    pub struct VirtualJoystickSensorDesc = "SDL_VirtualJoystickSensorDesc", read_virtual_joystick_sensor_desc, write_virtual_joystick_sensor_desc {
        pub kind as "type": i32,
        pub rate: f32,
    }
}

native_struct! {
    pub struct AtomicInt = "SDL_AtomicInt", read_atomic_int, write_atomic_int {
        pub value: i32,
    }
}

native_struct! {
    pub struct AtomicU32 = "SDL_AtomicU32", read_atomic_u32, write_atomic_u32 {
        pub value: u32,
    }
}

native_struct! {
    /// Fields shared by every event.
    pub struct CommonEvent = "SDL_CommonEvent", read_common_event, write_common_event {
        pub kind as "type": u32,
        pub reserved: u32,
        /// Nanoseconds, from `SDL_GetTicksNS`.
        pub timestamp: u64,
    }
}

native_struct! {
    pub struct KeyboardEvent = "SDL_KeyboardEvent", read_keyboard_event, write_keyboard_event {
        pub kind as "type": u32,
        pub reserved: u32,
        pub timestamp: u64,
        pub window_id as "windowID": u32,
        pub which: u32,
        pub scancode: u32,
        pub key: u32,
        pub modifiers as "mod": u16,
        pub raw: u16,
        pub down: bool,
        pub repeat: bool,
    }
}

native_struct! {
    pub struct MouseMotionEvent = "SDL_MouseMotionEvent", read_mouse_motion_event, write_mouse_motion_event {
        pub kind as "type": u32,
        pub reserved: u32,
        pub timestamp: u64,
        pub window_id as "windowID": u32,
        pub which: u32,
        pub state: u32,
        pub x: f32,
        pub y: f32,
        pub xrel: f32,
        pub yrel: f32,
    }
}

native_struct! {
    /// Callback table for `SDL_OpenIO`. Unused callbacks are null.
    pub struct IoStreamInterface = "SDL_IOStreamInterface", read_io_stream_interface, write_io_stream_interface {
        pub version: u32,
        pub size: FnPtr,
        pub seek: FnPtr,
        pub read: FnPtr,
        pub write: FnPtr,
        pub flush: FnPtr,
        pub close: FnPtr,
    }
}

native_struct! {
    pub struct GpuViewport = "SDL_GPUViewport", read_gpu_viewport, write_gpu_viewport {
        pub x: f32,
        pub y: f32,
        pub w: f32,
        pub h: f32,
        pub min_depth: f32,
        pub max_depth: f32,
    }
}

macro_rules! bound_structs {
    ($($name:ident),* $(,)?) => {
        /// Builds every struct layout through the fallible path.
        ///
        /// # Errors
        ///
        /// Returns the first schema error found.
        pub fn validate_layouts() -> Result<()> {
            $(<$name as NativeStruct>::build_layout()?;)*
            Ok(())
        }

        /// Layout descriptors of every bound struct, in declaration order.
        pub fn layouts() -> Vec<&'static Layout> {
            vec![$(<$name as NativeStruct>::layout()),*]
        }
    };
}

bound_structs!(
    Point,
    FPoint,
    Rect,
    FRect,
    Color,
    FColor,
    Vertex,
    Guid,
    PathInfo,
    DateTime,
    AudioSpec,
    DisplayMode,
    CameraSpec,
    Finger,
    Locale,
    DialogFileFilter,
    HapticDirection,
    HapticConstant,
    MessageBoxColor,
    MessageBoxColorScheme,
    MessageBoxButtonData,
    VirtualJoystickTouchpadDesc,
    VirtualJoystickSensorDesc,
    AtomicInt,
    AtomicU32,
    CommonEvent,
    KeyboardEvent,
    MouseMotionEvent,
    IoStreamInterface,
    GpuViewport,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    #[test]
    fn every_layout_validates() {
        validate_layouts().unwrap();
        let layouts = layouts();
        assert_eq!(layouts.len(), 30);
        assert!(layouts.iter().all(|layout| layout.name().starts_with("SDL_")));
    }

    #[test]
    fn path_info_zero_buffer() {
        let buffer = [0u8; 40];
        let info = read_path_info(&buffer).unwrap();
        assert_eq!(info, PathInfo::default());
        assert_eq!(info.path_type(), PathType::None);
    }

    #[test]
    fn nested_vertex_round_trip() {
        let vertex = Vertex {
            position: FPoint { x: 1.5, y: -2.0 },
            color: FColor {
                r: 1.0,
                g: 0.5,
                b: 0.25,
                a: 1.0,
            },
            tex_coord: FPoint { x: 0.0, y: 1.0 },
        };
        let mut buffer = [0u8; 32];
        write_vertex(&vertex, &mut buffer).unwrap();
        assert_eq!(read_vertex(&buffer).unwrap(), vertex);
        assert_eq!(&buffer[8..12], &1.0f32.to_ne_bytes());
    }

    #[test]
    fn pointer_fields_round_trip() {
        let language = c"en";
        let locale = Locale {
            language: OpaquePtr::from_const(language.as_ptr()),
            country: OpaquePtr::null(),
        };
        let buffer = locale.to_buffer().unwrap();
        let back = read_locale(&buffer).unwrap();
        assert_eq!(back, locale);
        assert_eq!(back.language.as_ptr::<std::ffi::c_char>().cast_const(), language.as_ptr());
        assert!(back.country.is_null());
    }

    #[test]
    fn keyboard_event_uses_native_names() {
        let layout = KeyboardEvent::layout();
        assert_eq!(layout.offset_of("windowID"), Some(16));
        assert_eq!(layout.offset_of("mod"), Some(32));
        assert_eq!(layout.offset_of("down"), Some(36));
        assert_eq!(layout.size(), 40);

        let event = KeyboardEvent {
            kind: sys::SDL_EVENT_KEY_DOWN,
            timestamp: 12,
            key: 'a' as u32,
            down: true,
            ..Default::default()
        };
        let record = event.to_record();
        assert_eq!(record.get("type").and_then(|v| v.as_u32()), Some(sys::SDL_EVENT_KEY_DOWN));
        let buffer = codec::encode_to_buffer(layout, &record).unwrap();
        assert_eq!(read_keyboard_event(&buffer).unwrap(), event);
    }

    #[test]
    fn haptic_constant_nests_direction() {
        let effect = HapticConstant {
            kind: sys::SDL_HAPTIC_CONSTANT,
            direction: HapticDirection {
                kind: sys::SDL_HAPTIC_CARTESIAN,
                dir: [1, 0, 0],
            },
            length: 5000,
            level: 0x6000,
            ..Default::default()
        };
        let mut buffer = vec![0u8; HapticConstant::layout().size()];
        write_haptic_constant(&effect, &mut buffer).unwrap();
        assert_eq!(HapticConstant::layout().offset_of("direction"), Some(4));
        assert_eq!(read_haptic_constant(&buffer).unwrap(), effect);
    }

    #[test]
    fn message_box_scheme_array_of_structs() {
        let layout = MessageBoxColorScheme::layout();
        assert_eq!(layout.size(), 15);
        let mut scheme = MessageBoxColorScheme::default();
        scheme.colors[4] = MessageBoxColor { r: 1, g: 2, b: 3 };
        let mut buffer = [0u8; 15];
        write_message_box_color_scheme(&scheme, &mut buffer).unwrap();
        assert_eq!(&buffer[12..], &[1, 2, 3]);
    }

    #[test]
    fn guid_string_form() {
        let guid = Guid {
            data: [
                0x03, 0x00, 0x00, 0x00, 0x5e, 0x04, 0x00, 0x00, 0x8e, 0x02, 0x00, 0x00, 0x14,
                0x01, 0x00, 0x00,
            ],
        };
        let text = guid.to_string();
        assert_eq!(text, "030000005e0400008e02000014010000");
        assert_eq!(text.parse::<Guid>().unwrap(), guid);
        assert!("not-a-guid".parse::<Guid>().is_err());
    }

    #[test]
    fn read_at_offset_in_array() {
        let rects = [
            Rect { x: 1, y: 2, w: 3, h: 4 },
            Rect { x: 5, y: 6, w: 7, h: 8 },
        ];
        let mut buffer = vec![0u8; 32];
        for (i, rect) in rects.iter().enumerate() {
            rect.write_at(&mut buffer, i * Rect::layout().size()).unwrap();
        }
        assert_eq!(Rect::read_at(&buffer, 16).unwrap(), rects[1]);
        assert!(Rect::read_at(&buffer, 20).is_err());
    }
}
