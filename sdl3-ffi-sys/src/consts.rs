// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Constant and enum value tables from the SDL3 headers.

use core::ffi::c_int;

// SDL_init.h
pub const SDL_INIT_AUDIO: u32 = 0x0000_0010;
pub const SDL_INIT_VIDEO: u32 = 0x0000_0020;
pub const SDL_INIT_JOYSTICK: u32 = 0x0000_0200;
pub const SDL_INIT_HAPTIC: u32 = 0x0000_1000;
pub const SDL_INIT_GAMEPAD: u32 = 0x0000_2000;
pub const SDL_INIT_EVENTS: u32 = 0x0000_4000;
pub const SDL_INIT_SENSOR: u32 = 0x0000_8000;
pub const SDL_INIT_CAMERA: u32 = 0x0001_0000;

// SDL_filesystem.h
pub const SDL_PATHTYPE_NONE: u32 = 0;
pub const SDL_PATHTYPE_FILE: u32 = 1;
pub const SDL_PATHTYPE_DIRECTORY: u32 = 2;
pub const SDL_PATHTYPE_OTHER: u32 = 3;

// SDL_audio.h
pub const SDL_AUDIO_UNKNOWN: u32 = 0x0000;
pub const SDL_AUDIO_U8: u32 = 0x0008;
pub const SDL_AUDIO_S8: u32 = 0x8008;
pub const SDL_AUDIO_S16LE: u32 = 0x8010;
pub const SDL_AUDIO_S16BE: u32 = 0x9010;
pub const SDL_AUDIO_S32LE: u32 = 0x8020;
pub const SDL_AUDIO_S32BE: u32 = 0x9020;
pub const SDL_AUDIO_F32LE: u32 = 0x8120;
pub const SDL_AUDIO_F32BE: u32 = 0x9120;
pub const SDL_AUDIO_DEVICE_DEFAULT_PLAYBACK: u32 = 0xFFFF_FFFF;
pub const SDL_AUDIO_DEVICE_DEFAULT_RECORDING: u32 = 0xFFFF_FFFE;

// SDL_haptic.h
pub const SDL_HAPTIC_CONSTANT: u16 = 1 << 0;
pub const SDL_HAPTIC_SINE: u16 = 1 << 1;
pub const SDL_HAPTIC_SQUARE: u16 = 1 << 2;
pub const SDL_HAPTIC_TRIANGLE: u16 = 1 << 3;
pub const SDL_HAPTIC_SAWTOOTHUP: u16 = 1 << 4;
pub const SDL_HAPTIC_SAWTOOTHDOWN: u16 = 1 << 5;
pub const SDL_HAPTIC_RAMP: u16 = 1 << 6;
pub const SDL_HAPTIC_SPRING: u16 = 1 << 7;
pub const SDL_HAPTIC_DAMPER: u16 = 1 << 8;
pub const SDL_HAPTIC_INERTIA: u16 = 1 << 9;
pub const SDL_HAPTIC_FRICTION: u16 = 1 << 10;
pub const SDL_HAPTIC_LEFTRIGHT: u16 = 1 << 11;
pub const SDL_HAPTIC_CUSTOM: u16 = 1 << 15;
pub const SDL_HAPTIC_POLAR: u8 = 0;
pub const SDL_HAPTIC_CARTESIAN: u8 = 1;
pub const SDL_HAPTIC_SPHERICAL: u8 = 2;
pub const SDL_HAPTIC_STEERING_AXIS: u8 = 3;
pub const SDL_HAPTIC_INFINITY: u32 = 4_294_967_295;

// SDL_sensor.h
pub const SDL_SENSOR_INVALID: c_int = -1;
pub const SDL_SENSOR_UNKNOWN: c_int = 0;
pub const SDL_SENSOR_ACCEL: c_int = 1;
pub const SDL_SENSOR_GYRO: c_int = 2;
pub const SDL_SENSOR_ACCEL_L: c_int = 3;
pub const SDL_SENSOR_GYRO_L: c_int = 4;
pub const SDL_SENSOR_ACCEL_R: c_int = 5;
pub const SDL_SENSOR_GYRO_R: c_int = 6;

// SDL_messagebox.h
pub const SDL_MESSAGEBOX_ERROR: u32 = 0x0000_0010;
pub const SDL_MESSAGEBOX_WARNING: u32 = 0x0000_0020;
pub const SDL_MESSAGEBOX_INFORMATION: u32 = 0x0000_0040;
pub const SDL_MESSAGEBOX_BUTTON_RETURNKEY_DEFAULT: u32 = 0x0000_0001;
pub const SDL_MESSAGEBOX_BUTTON_ESCAPEKEY_DEFAULT: u32 = 0x0000_0002;

// SDL_events.h
pub const SDL_EVENT_QUIT: u32 = 0x100;
pub const SDL_EVENT_KEY_DOWN: u32 = 0x300;
pub const SDL_EVENT_KEY_UP: u32 = 0x301;
pub const SDL_EVENT_MOUSE_MOTION: u32 = 0x400;
pub const SDL_EVENT_MOUSE_BUTTON_DOWN: u32 = 0x401;
pub const SDL_EVENT_MOUSE_BUTTON_UP: u32 = 0x402;
pub const SDL_EVENT_USER: u32 = 0x8000;

// SDL_thread.h
pub const SDL_THREAD_PRIORITY_LOW: c_int = 0;
pub const SDL_THREAD_PRIORITY_NORMAL: c_int = 1;
pub const SDL_THREAD_PRIORITY_HIGH: c_int = 2;
pub const SDL_THREAD_PRIORITY_TIME_CRITICAL: c_int = 3;

// SDL_iostream.h
pub const SDL_IO_SEEK_SET: c_int = 0;
pub const SDL_IO_SEEK_CUR: c_int = 1;
pub const SDL_IO_SEEK_END: c_int = 2;
pub const SDL_IO_STATUS_READY: c_int = 0;
pub const SDL_IO_STATUS_ERROR: c_int = 1;
pub const SDL_IO_STATUS_EOF: c_int = 2;

// SDL_video.h
pub const SDL_WINDOW_FULLSCREEN: u64 = 0x0000_0000_0000_0001;
pub const SDL_WINDOW_OPENGL: u64 = 0x0000_0000_0000_0002;
pub const SDL_WINDOW_HIDDEN: u64 = 0x0000_0000_0000_0008;
pub const SDL_WINDOW_RESIZABLE: u64 = 0x0000_0000_0000_0020;
pub const SDL_WINDOW_HIGH_PIXEL_DENSITY: u64 = 0x0000_0000_0000_2000;
pub const SDL_WINDOW_VULKAN: u64 = 0x0000_0000_1000_0000;
pub const SDL_WINDOW_METAL: u64 = 0x0000_0000_2000_0000;

// SDL_version.h
pub const SDL_MAJOR_VERSION: c_int = 3;
pub const SDL_MINOR_VERSION: c_int = 2;
pub const SDL_MICRO_VERSION: c_int = 0;
