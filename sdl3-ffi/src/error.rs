// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for the binding layer.
//!
//! Only failures of the binding layer itself are represented here. Errors
//! reported by SDL (a `false` or null return plus `SDL_GetError`) are returned
//! to the caller as ordinary values and never converted into [`Error`].

use sdl3_ffi_sys::NativeType;

use crate::value::ValueKind;

/// Convenience result type using [`Error`] as the error variant.
pub type Result<T> = core::result::Result<T, Error>;

/// Broad classification of an [`Error`], one per remediation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A layout or signature declaration is malformed. Fix the declaration.
    Schema,
    /// A buffer or value does not fit the layout. Fix the calling code.
    Marshaling,
    /// A symbol could not be bound. Rebuild or reinstall the native library,
    /// or select the right platform/optional groups.
    Resolution,
    /// The native library could not be opened.
    Loading,
}

/// Errors that can occur in the binding layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A layout descriptor was rejected at construction.
    #[error("Invalid layout {layout}: {reason}")]
    InvalidLayout { layout: String, reason: String },

    /// A call signature was rejected at registry construction.
    #[error("Invalid signature for {symbol}: {reason}")]
    InvalidSignature { symbol: String, reason: String },

    /// Two registry entries share one symbol name.
    #[error("Symbol {0} is declared more than once")]
    DuplicateSymbol(String),

    /// The buffer cannot hold the layout at the requested offset.
    #[error(
        "Buffer too short for {layout}: need {needed} bytes at offset {offset}, have {available}"
    )]
    OutOfBounds {
        layout: String,
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A record given to `encode` lacks a field declared by the layout.
    #[error("Missing field {field} in value for {layout}")]
    MissingField { layout: String, field: String },

    /// A record given to `encode` carries a field the layout does not declare.
    #[error("Unexpected field {field} in value for {layout}")]
    UnexpectedField { layout: String, field: String },

    /// A field value is of a different kind than the layout declares.
    #[error("Field {field} of {layout} expects {expected:?}, found {found:?}")]
    TypeMismatch {
        layout: String,
        field: String,
        expected: ValueKind,
        found: ValueKind,
    },

    /// A value does not fit the width of its field on this target (a
    /// pointer-sized field on a 32-bit target).
    #[error("Value of field {field} in {layout} does not fit {ty}")]
    ValueOutOfRange {
        layout: String,
        field: String,
        ty: NativeType,
    },

    /// An array value has a different length than the layout declares.
    #[error("Field {field} of {layout} expects {expected} elements, found {found}")]
    ArrayLength {
        layout: String,
        field: String,
        expected: usize,
        found: usize,
    },

    /// The loaded library does not export a symbol.
    #[error("Symbol {symbol} not found in native library")]
    SymbolNotFound {
        symbol: String,
        #[source]
        source: Option<libloading::Error>,
    },

    /// The symbol is not part of the registry selected at load time.
    #[error("Symbol {0} is not registered for this platform")]
    NotRegistered(String),

    /// The Rust function type does not match the registered signature.
    #[error("Signature mismatch for {symbol}: registered {registered}, requested {requested}")]
    SignatureMismatch {
        symbol: String,
        registered: String,
        requested: String,
    },

    /// A generic error for failures not covered by the other variants.
    #[error("Other error: {0}")]
    Other(String),

    /// Failed to convert a Rust string to a C-compatible null-terminated string.
    #[error("Null string: {0}")]
    NulString(#[from] std::ffi::NulError),

    /// Failed to open the native library.
    #[error("Loading library: {0}")]
    LibLoading(#[from] libloading::Error),
}

impl Error {
    /// Returns the remediation class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidLayout { .. } | Error::InvalidSignature { .. } | Error::DuplicateSymbol(_) => {
                ErrorKind::Schema
            }
            Error::OutOfBounds { .. }
            | Error::MissingField { .. }
            | Error::UnexpectedField { .. }
            | Error::TypeMismatch { .. }
            | Error::ArrayLength { .. }
            | Error::ValueOutOfRange { .. }
            | Error::NulString(_) => ErrorKind::Marshaling,
            Error::SymbolNotFound { .. }
            | Error::NotRegistered(_)
            | Error::SignatureMismatch { .. } => ErrorKind::Resolution,
            Error::LibLoading(_) | Error::Other(_) => ErrorKind::Loading,
        }
    }

    pub(crate) fn invalid_layout(layout: &str, reason: impl Into<String>) -> Self {
        Error::InvalidLayout {
            layout: layout.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_signature(symbol: &str, reason: impl Into<String>) -> Self {
        Error::InvalidSignature {
            symbol: symbol.to_string(),
            reason: reason.into(),
        }
    }
}

/// Formats a signature as `(Uint32, void *) -> bool`.
pub(crate) fn format_signature(params: &[NativeType], result: NativeType) -> String {
    let params: Vec<&str> = params.iter().map(|tag| tag.c_name()).collect();
    format!("({}) -> {}", params.join(", "), result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_separate_marshaling_from_resolution() {
        let bounds = Error::OutOfBounds {
            layout: "SDL_Rect".to_string(),
            offset: 0,
            needed: 16,
            available: 8,
        };
        let missing = Error::NotRegistered("SDL_Foo".to_string());
        assert_eq!(bounds.kind(), ErrorKind::Marshaling);
        assert_eq!(missing.kind(), ErrorKind::Resolution);
        let narrow = Error::ValueOutOfRange {
            layout: "SDL_IOStreamInterface".to_string(),
            field: "size".to_string(),
            ty: NativeType::FunctionPointer,
        };
        assert_eq!(narrow.kind(), ErrorKind::Marshaling);
        assert_eq!(
            Error::invalid_layout("SDL_Rect", "empty").kind(),
            ErrorKind::Schema
        );
    }

    #[test]
    fn signatures_use_c_spelling() {
        assert_eq!(
            format_signature(&[NativeType::U32, NativeType::Pointer], NativeType::Bool),
            "(Uint32, void *) -> bool"
        );
        assert_eq!(format_signature(&[], NativeType::Void), "() -> void");
    }
}
