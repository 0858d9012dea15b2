// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Load-time configuration and path resolution for the SDL3 library.
//!
//! The build script records the crate root and an optional `SDL3_LIB_DIR`;
//! [`LoadConfig`] selects the library file, the target platform and the
//! optional symbol groups, either built in code, deserialized, or read from
//! the environment.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    Error, Result,
    platform::{OptionalGroup, Platform},
};

// Build script generates constants.rs with SDL3_FFI_CRATE_ROOT and SDL3_LIB_DIR
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

/// Environment variable overriding the library path.
pub const LIBRARY_PATH_ENV: &str = "SDL3_LIBRARY_PATH";
/// Environment variable overriding the target platform.
pub const PLATFORM_ENV: &str = "SDL3_PLATFORM";
/// Environment variable listing optional symbol groups, comma separated.
pub const OPTIONAL_GROUPS_ENV: &str = "SDL3_OPTIONAL_GROUPS";

/// Returns the path of the SDL3 shared library for `platform`.
///
/// Without a build-time `SDL3_LIB_DIR` this is only the file name, leaving the
/// search to the system loader.
///
/// # Examples
///
/// ```no_run
/// use sdl3_ffi::{NativeLibrary, Platform, config::default_library_path};
///
/// # fn main() -> Result<(), sdl3_ffi::Error> {
/// let library = NativeLibrary::open(default_library_path(Platform::current()))?;
/// # Ok(())
/// # }
/// ```
pub fn default_library_path(platform: Platform) -> PathBuf {
    let file_name = platform.library_file_name();
    match SDL3_LIB_DIR {
        Some(dir) => Path::new(dir).join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Returns the root directory of this crate, used by tests to locate fixtures.
pub fn crate_root() -> PathBuf {
    PathBuf::from(SDL3_FFI_CRATE_ROOT)
}

/// Options for [`crate::Sdl::load`].
///
/// Every field is optional; the defaults load the platform's SDL3 library for
/// the compile target with only the core and platform symbol groups.
///
/// ```
/// use sdl3_ffi::{LoadConfig, OptionalGroup, Platform};
///
/// let config = LoadConfig::new()
///     .with_library_path("/opt/sdl3/lib/libSDL3.so.0")
///     .with_optional_group(OptionalGroup::X11);
/// assert_eq!(config.platform(), Platform::current());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadConfig {
    pub library_path: Option<PathBuf>,
    pub platform: Option<Platform>,
    pub optional_groups: Vec<OptionalGroup>,
}

impl LoadConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads [`LIBRARY_PATH_ENV`], [`PLATFORM_ENV`] and [`OPTIONAL_GROUPS_ENV`].
    ///
    /// Unset or empty variables leave the default in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Other`] for an unknown platform or group name.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();
        if let Some(path) = non_empty_var(LIBRARY_PATH_ENV) {
            config.library_path = Some(PathBuf::from(path));
        }
        if let Some(platform) = non_empty_var(PLATFORM_ENV) {
            config.platform = Some(platform.parse()?);
        }
        if let Some(groups) = non_empty_var(OPTIONAL_GROUPS_ENV) {
            config.optional_groups = parse_groups(&groups)?;
        }
        Ok(config)
    }

    pub fn with_library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.library_path = Some(path.into());
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn with_optional_group(mut self, group: OptionalGroup) -> Self {
        if !self.optional_groups.contains(&group) {
            self.optional_groups.push(group);
        }
        self
    }

    /// The configured platform, or the compile target's.
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }

    /// The configured library path, or [`default_library_path`].
    pub fn library_path(&self) -> PathBuf {
        self.library_path
            .clone()
            .unwrap_or_else(|| default_library_path(self.platform()))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_groups(list: &str) -> Result<Vec<OptionalGroup>> {
    let mut groups = Vec::new();
    for name in list.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        let group: OptionalGroup = name.parse()?;
        if !groups.contains(&group) {
            groups.push(group);
        }
    }
    Ok(groups)
}

impl std::str::FromStr for LoadConfig {
    type Err = Error;

    /// Parses a JSON object such as
    /// `{"library_path": "libSDL3.so.0", "optional_groups": ["x11"]}`.
    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::Other(format!("Invalid load config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_uses_platform_file_name() {
        let path = default_library_path(Platform::Windows);
        assert!(path.ends_with("SDL3.dll"));
        let path = default_library_path(Platform::Linux);
        assert!(path.ends_with("libSDL3.so.0"));
    }

    #[test]
    fn explicit_path_wins() {
        let config = LoadConfig::new()
            .with_platform(Platform::MacOs)
            .with_library_path("/tmp/libSDL3.so");
        assert_eq!(config.library_path(), PathBuf::from("/tmp/libSDL3.so"));
        assert_eq!(config.platform(), Platform::MacOs);
    }

    #[test]
    fn optional_groups_are_deduplicated() {
        let config = LoadConfig::new()
            .with_optional_group(OptionalGroup::X11)
            .with_optional_group(OptionalGroup::X11);
        assert_eq!(config.optional_groups, [OptionalGroup::X11]);
        assert_eq!(
            parse_groups(" x11, gdk ,x11,").unwrap(),
            [OptionalGroup::X11, OptionalGroup::Gdk]
        );
        assert!(parse_groups("wayland").is_err());
    }

    #[test]
    fn deserializes_from_json() {
        let config: LoadConfig =
            r#"{"platform": "linux", "optional_groups": ["x11"]}"#.parse().unwrap();
        assert_eq!(config.platform, Some(Platform::Linux));
        assert_eq!(config.optional_groups, [OptionalGroup::X11]);
        assert_eq!(config.library_path, None);
        assert!(r#"{"library": "x"}"#.parse::<LoadConfig>().is_err());
    }

    #[test]
    fn crate_root_holds_manifest() {
        assert!(crate_root().join("Cargo.toml").exists());
    }
}
