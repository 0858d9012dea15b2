// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Target platforms and the symbol groups they select.
//!
//! The platform is fixed once at load; its group is merged with the core
//! groups and any requested [`OptionalGroup`]s into the symbol registry.

use std::{fmt, str::FromStr};

use sdl3_ffi_sys::{SymbolGroup, symbols};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Target platform of the loaded library. Each variant carries the symbol
/// group that only exists on that platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
    Ios,
    Android,
    /// Any other target; only the core groups are bound.
    Other,
}

impl Platform {
    /// The platform this crate was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else {
            Platform::Other
        }
    }

    /// Platform-only symbols, bound in addition to the core groups.
    pub fn symbols(self) -> Option<&'static SymbolGroup> {
        match self {
            Platform::Windows => Some(&symbols::WINDOWS),
            Platform::Linux => Some(&symbols::LINUX),
            Platform::MacOs => Some(&symbols::MACOS),
            Platform::Ios => Some(&symbols::IOS),
            Platform::Android => Some(&symbols::ANDROID),
            Platform::Other => None,
        }
    }

    /// File name of the SDL3 shared library on this platform.
    pub fn library_file_name(self) -> &'static str {
        match self {
            Platform::Windows => "SDL3.dll",
            Platform::MacOs | Platform::Ios => "libSDL3.0.dylib",
            Platform::Linux | Platform::Android | Platform::Other => "libSDL3.so.0",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            "macos" => Ok(Platform::MacOs),
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            "other" => Ok(Platform::Other),
            other => Err(Error::Other(format!("Unknown platform: {other}"))),
        }
    }
}

/// Symbol groups that depend on how the library was built rather than on the
/// platform, and are bound only on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionalGroup {
    /// X11 video backend (`SDL_SetX11EventHook`).
    X11,
    /// Microsoft GDK runtime.
    Gdk,
}

impl OptionalGroup {
    pub fn symbols(self) -> &'static SymbolGroup {
        match self {
            OptionalGroup::X11 => &symbols::X11,
            OptionalGroup::Gdk => &symbols::GDK,
        }
    }
}

impl FromStr for OptionalGroup {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x11" => Ok(OptionalGroup::X11),
            "gdk" => Ok(OptionalGroup::Gdk),
            other => Err(Error::Other(format!("Unknown symbol group: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Linux".parse::<Platform>().ok(), Some(Platform::Linux));
        assert_eq!("MACOS".parse::<Platform>().ok(), Some(Platform::MacOs));
        assert_eq!("x11".parse::<OptionalGroup>().ok(), Some(OptionalGroup::X11));
        assert!("beos".parse::<Platform>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for platform in [
            Platform::Windows,
            Platform::Linux,
            Platform::MacOs,
            Platform::Ios,
            Platform::Android,
            Platform::Other,
        ] {
            assert_eq!(platform.to_string().parse::<Platform>().ok(), Some(platform));
        }
    }

    #[test]
    fn only_other_has_no_platform_group() {
        assert!(Platform::Other.symbols().is_none());
        assert_eq!(
            Platform::Linux.symbols().map(|group| group.name),
            Some("linux")
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn current_matches_build_target() {
        assert_eq!(Platform::current(), Platform::Linux);
    }
}
