// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! The immutable map from exported symbol name to call signature.
//!
//! A [`SymbolRegistry`] is assembled once, from the core groups plus whatever
//! the selected [`Platform`] and optional groups contribute, and is then only
//! read. Every entry is validated during assembly.

use std::{borrow::Cow, collections::HashMap, fmt};

use sdl3_ffi_sys::{NativeType, SymbolDecl, SymbolGroup, symbols::CORE_GROUPS};
use tracing::warn;

use crate::{
    Error, Result,
    error::format_signature,
    library::{NativeFn, NativeLibrary},
    platform::{OptionalGroup, Platform},
};

/// Parameter tags in order plus the result tag of a native function.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    params: Cow<'static, [NativeType]>,
    result: NativeType,
}

impl Signature {
    pub fn new(params: impl Into<Cow<'static, [NativeType]>>, result: NativeType) -> Self {
        Self {
            params: params.into(),
            result,
        }
    }

    /// The signature described by an `extern "C"` function type.
    pub fn of<F: NativeFn>() -> Self {
        Self::new(F::params(), F::result())
    }

    pub fn params(&self) -> &[NativeType] {
        &self.params
    }

    pub fn result(&self) -> NativeType {
        self.result
    }

    pub(crate) fn validate(&self, symbol: &str) -> Result<()> {
        if let Some(position) = self.params.iter().position(|tag| *tag == NativeType::Void) {
            return Err(Error::invalid_signature(
                symbol,
                format!("parameter {position} is void"),
            ));
        }
        Ok(())
    }
}

impl From<&SymbolDecl> for Signature {
    fn from(decl: &SymbolDecl) -> Self {
        Self::new(decl.params, decl.result)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_signature(&self.params, self.result))
    }
}

/// One registered function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    name: &'static str,
    group: &'static str,
    signature: Signature,
}

impl SymbolEntry {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Label of the group the entry came from.
    pub fn group(&self) -> &'static str {
        self.group
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}

/// Symbol name to signature, unique by name and immutable once built.
#[derive(Debug, Clone)]
pub struct SymbolRegistry {
    entries: Vec<SymbolEntry>,
    index: HashMap<&'static str, usize>,
    groups: Vec<&'static str>,
}

impl SymbolRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Core groups, the group carried by `platform`, and the requested
    /// optional groups.
    ///
    /// # Errors
    ///
    /// Returns a schema error if any entry is malformed or a symbol is declared
    /// twice.
    pub fn for_target(platform: Platform, optional: &[OptionalGroup]) -> Result<Self> {
        let mut builder = Self::builder().groups(CORE_GROUPS.iter().copied());
        if let Some(group) = platform.symbols() {
            builder = builder.group(group);
        }
        for group in optional {
            builder = builder.group(group.symbols());
        }
        builder.build()
    }

    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Entries in group order, then declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.entries.iter()
    }

    /// Labels of the groups merged into this registry.
    pub fn groups(&self) -> &[&'static str] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that `library` does not export.
    pub fn missing_in(&self, library: &NativeLibrary) -> Vec<&SymbolEntry> {
        self.entries
            .iter()
            .filter(|entry| {
                let present = library.has_symbol(entry.name);
                if !present {
                    warn!(symbol = entry.name, group = entry.group, "Symbol not exported");
                }
                !present
            })
            .collect()
    }
}

/// Collects groups for a [`SymbolRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    groups: Vec<&'static SymbolGroup>,
}

impl RegistryBuilder {
    pub fn group(mut self, group: &'static SymbolGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn groups(mut self, groups: impl IntoIterator<Item = &'static SymbolGroup>) -> Self {
        self.groups.extend(groups);
        self
    }

    pub fn build(self) -> Result<SymbolRegistry> {
        let capacity = self.groups.iter().map(|group| group.symbols.len()).sum();
        let mut entries = Vec::with_capacity(capacity);
        let mut index = HashMap::with_capacity(capacity);
        let mut groups = Vec::with_capacity(self.groups.len());

        for group in self.groups {
            groups.push(group.name);
            for decl in group.symbols {
                if decl.name.is_empty() {
                    return Err(Error::invalid_signature(
                        group.name,
                        "symbol with an empty name",
                    ));
                }
                let signature = Signature::from(decl);
                signature.validate(decl.name)?;
                if index.insert(decl.name, entries.len()).is_some() {
                    return Err(Error::DuplicateSymbol(decl.name.to_string()));
                }
                entries.push(SymbolEntry {
                    name: decl.name,
                    group: group.name,
                    signature,
                });
            }
        }

        Ok(SymbolRegistry {
            entries,
            index,
            groups,
        })
    }
}

#[cfg(test)]
mod tests {
    use sdl3_ffi_sys::symbols;

    use super::*;
    use crate::ErrorKind;

    static DUPLICATE: SymbolGroup = SymbolGroup {
        name: "duplicate",
        symbols: &[SymbolDecl {
            name: "SDL_GetVersion",
            params: &[],
            result: NativeType::I32,
        }],
    };

    static VOID_PARAM: SymbolGroup = SymbolGroup {
        name: "void_param",
        symbols: &[SymbolDecl {
            name: "SDL_Broken",
            params: &[NativeType::U32, NativeType::Void],
            result: NativeType::Void,
        }],
    };

    static UNNAMED: SymbolGroup = SymbolGroup {
        name: "unnamed",
        symbols: &[SymbolDecl {
            name: "",
            params: &[],
            result: NativeType::Void,
        }],
    };

    #[test]
    fn platform_group_is_merged_with_core() {
        let registry = SymbolRegistry::for_target(Platform::Linux, &[]).unwrap();
        assert!(registry.contains("SDL_Init"));
        assert!(registry.contains("SDL_SetLinuxThreadPriority"));
        assert!(!registry.contains("SDL_RegisterApp"));
        assert!(!registry.contains("SDL_SetX11EventHook"));
        assert_eq!(registry.groups().last(), Some(&"linux"));
    }

    #[test]
    fn optional_groups_only_when_requested() {
        let registry = SymbolRegistry::for_target(Platform::Other, &[OptionalGroup::X11]).unwrap();
        assert!(registry.contains("SDL_SetX11EventHook"));
        assert!(!registry.contains("SDL_SetLinuxThreadPriority"));
        assert_eq!(registry.get("SDL_SetX11EventHook").map(SymbolEntry::group), Some("x11"));
    }

    #[test]
    fn entries_carry_declared_signatures() {
        let registry = SymbolRegistry::for_target(Platform::Other, &[]).unwrap();
        let entry = registry.get("SDL_GetPathInfo").unwrap();
        assert_eq!(
            entry.signature().params(),
            [NativeType::Pointer, NativeType::Pointer]
        );
        assert_eq!(entry.signature().result(), NativeType::Bool);
        assert_eq!(entry.signature().to_string(), "(void *, void *) -> bool");
    }

    #[test]
    fn duplicate_symbols_are_rejected() {
        let err = SymbolRegistry::builder()
            .group(&symbols::VERSION)
            .group(&DUPLICATE)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateSymbol(ref name) if name == "SDL_GetVersion"));
        assert_eq!(err.kind(), ErrorKind::Schema);
    }

    #[test]
    fn void_parameters_are_rejected() {
        let err = SymbolRegistry::builder().group(&VOID_PARAM).build().unwrap_err();
        assert!(matches!(err, Error::InvalidSignature { ref symbol, .. } if symbol == "SDL_Broken"));
    }

    #[test]
    fn empty_names_are_rejected() {
        let err = SymbolRegistry::builder().group(&UNNAMED).build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
    }

    #[test]
    fn every_platform_assembles() {
        for platform in [
            Platform::Windows,
            Platform::Linux,
            Platform::MacOs,
            Platform::Ios,
            Platform::Android,
            Platform::Other,
        ] {
            let registry =
                SymbolRegistry::for_target(platform, &[OptionalGroup::X11, OptionalGroup::Gdk])
                    .unwrap();
            assert!(!registry.is_empty());
            assert_eq!(registry.len(), registry.iter().count());
        }
    }
}
