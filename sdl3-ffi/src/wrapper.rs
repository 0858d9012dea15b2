// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Conversion between typed Rust structs and codec records.
//!
//! [`FieldValue`] maps one Rust field type to its [`FieldType`] and to and from
//! a [`Value`]. [`NativeStruct`] is implemented by the `native_struct!` macro
//! for every bound SDL struct and exposes the read/write pairs.

use crate::{
    Error, FnPtr, OpaquePtr, Result,
    codec::{self, AlignedBuffer},
    layout::{FieldType, Layout},
    value::{Record, Value, ValueKind},
};
use sdl3_ffi_sys::NativeType;

/// A Rust type that can occupy a field of a native struct.
pub trait FieldValue: Sized {
    fn field_type() -> FieldType;
    fn from_value(value: &Value) -> Option<Self>;
    fn to_value(&self) -> Value;

    /// Converts `value`, reporting why it does not fit field `field` of
    /// `layout`.
    fn from_field(value: &Value, layout: &str, field: &str) -> Result<Self> {
        Self::from_value(value).ok_or_else(|| Error::TypeMismatch {
            layout: layout.to_string(),
            field: field.to_string(),
            expected: expected_kind(&Self::field_type()),
            found: value.kind(),
        })
    }
}

macro_rules! scalar_fields {
    ($($ty:ty => $tag:ident, $variant:ident;)*) => {
        $(
            impl FieldValue for $ty {
                fn field_type() -> FieldType {
                    FieldType::Scalar(NativeType::$tag)
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(inner) => Some(*inner),
                        _ => None,
                    }
                }

                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }
            }
        )*
    };
}

scalar_fields! {
    bool => Bool, Bool;
    u8 => U8, U8;
    u16 => U16, U16;
    u32 => U32, U32;
    u64 => U64, U64;
    i8 => I8, I8;
    i16 => I16, I16;
    i32 => I32, I32;
    i64 => I64, I64;
    f32 => F32, F32;
    f64 => F64, F64;
}

impl FieldValue for usize {
    fn field_type() -> FieldType {
        FieldType::Scalar(NativeType::USize)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_usize().and_then(|raw| usize::try_from(raw).ok())
    }

    fn to_value(&self) -> Value {
        Value::USize(*self as u64)
    }
}

impl FieldValue for isize {
    fn field_type() -> FieldType {
        FieldType::Scalar(NativeType::ISize)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_isize().and_then(|raw| isize::try_from(raw).ok())
    }

    fn to_value(&self) -> Value {
        Value::ISize(*self as i64)
    }
}

impl FieldValue for OpaquePtr {
    fn field_type() -> FieldType {
        FieldType::Scalar(NativeType::Pointer)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_address().map(OpaquePtr::from_address)
    }

    fn to_value(&self) -> Value {
        Value::Pointer(self.address())
    }
}

impl FieldValue for FnPtr {
    fn field_type() -> FieldType {
        FieldType::Scalar(NativeType::FunctionPointer)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_address().map(FnPtr::from_address)
    }

    fn to_value(&self) -> Value {
        Value::Pointer(self.address())
    }
}

impl<T: FieldValue, const N: usize> FieldValue for [T; N] {
    fn field_type() -> FieldType {
        FieldType::array(T::field_type(), N)
    }

    fn from_value(value: &Value) -> Option<Self> {
        let items = value.as_array()?;
        if items.len() != N {
            return None;
        }
        let items = items
            .iter()
            .map(T::from_value)
            .collect::<Option<Vec<T>>>()?;
        items.try_into().ok()
    }

    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(T::to_value).collect())
    }

    fn from_field(value: &Value, layout: &str, field: &str) -> Result<Self> {
        let Some(items) = value.as_array() else {
            return Err(Error::TypeMismatch {
                layout: layout.to_string(),
                field: field.to_string(),
                expected: ValueKind::Array,
                found: value.kind(),
            });
        };
        if items.len() != N {
            return Err(Error::ArrayLength {
                layout: layout.to_string(),
                field: field.to_string(),
                expected: N,
                found: items.len(),
            });
        }
        let items = items
            .iter()
            .enumerate()
            .map(|(index, item)| T::from_field(item, layout, &format!("{field}[{index}]")))
            .collect::<Result<Vec<T>>>()?;
        items.try_into().map_err(|items: Vec<T>| Error::ArrayLength {
            layout: layout.to_string(),
            field: field.to_string(),
            expected: N,
            found: items.len(),
        })
    }
}

/// A Rust mirror of one SDL struct, marshaled through its layout descriptor.
pub trait NativeStruct: FieldValue {
    /// C name of the struct, e.g. `SDL_Rect`.
    const NAME: &'static str;

    /// Builds the layout descriptor, reporting schema errors.
    fn build_layout() -> Result<Layout>;

    /// The cached layout descriptor.
    ///
    /// # Panics
    ///
    /// If the descriptor is malformed. [`crate::validate_layouts`] reports the
    /// same condition as an error and is run by [`crate::Sdl::load`].
    fn layout() -> &'static Layout;

    fn from_record(record: &Record) -> Result<Self>;

    fn to_record(&self) -> Record;

    fn read(buffer: &[u8]) -> Result<Self> {
        Self::read_at(buffer, 0)
    }

    fn read_at(buffer: &[u8], offset: usize) -> Result<Self> {
        Self::from_record(&codec::decode_at(Self::layout(), buffer, offset)?)
    }

    fn write(&self, buffer: &mut [u8]) -> Result<()> {
        self.write_at(buffer, 0)
    }

    fn write_at(&self, buffer: &mut [u8], offset: usize) -> Result<()> {
        codec::encode_at(Self::layout(), &self.to_record(), buffer, offset)
    }

    /// Encodes into a fresh buffer suitable for passing to the library.
    fn to_buffer(&self) -> Result<AlignedBuffer> {
        codec::encode_to_buffer(Self::layout(), &self.to_record())
    }
}

fn expected_kind(ty: &FieldType) -> ValueKind {
    match ty {
        FieldType::Scalar(tag) => ValueKind::of_scalar(*tag),
        FieldType::Struct(_) => ValueKind::Struct,
        FieldType::Array(..) => ValueKind::Array,
    }
}

/// Extracts and converts one field of `record`.
#[doc(hidden)]
pub fn take<T: FieldValue>(record: &Record, layout: &str, field: &str) -> Result<T> {
    let value = record.get(field).ok_or_else(|| Error::MissingField {
        layout: layout.to_string(),
        field: field.to_string(),
    })?;
    T::from_field(value, layout, field)
}

macro_rules! native_name {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $native:literal) => {
        $native
    };
}

/// Declares a bound SDL struct: the Rust type, its [`NativeStruct`] and
/// [`FieldValue`] impls, and the free `read_*`/`write_*` functions.
///
/// Fields whose C name differs from the Rust one are written
/// `pub kind as "type": u32`.
macro_rules! native_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $native:literal, $read:ident, $write:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident $(as $cname:literal)? : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl $crate::wrapper::FieldValue for $name {
            fn field_type() -> $crate::layout::FieldType {
                $crate::layout::FieldType::Struct(
                    <Self as $crate::wrapper::NativeStruct>::layout().clone(),
                )
            }

            fn from_value(value: &$crate::value::Value) -> Option<Self> {
                value
                    .as_record()
                    .and_then(|record| {
                        <Self as $crate::wrapper::NativeStruct>::from_record(record).ok()
                    })
            }

            fn to_value(&self) -> $crate::value::Value {
                $crate::value::Value::Struct(
                    <Self as $crate::wrapper::NativeStruct>::to_record(self),
                )
            }

            fn from_field(
                value: &$crate::value::Value,
                layout: &str,
                field: &str,
            ) -> $crate::Result<Self> {
                match value.as_record() {
                    Some(record) => <Self as $crate::wrapper::NativeStruct>::from_record(record),
                    None => Err($crate::Error::TypeMismatch {
                        layout: layout.to_string(),
                        field: field.to_string(),
                        expected: $crate::value::ValueKind::Struct,
                        found: value.kind(),
                    }),
                }
            }
        }

        impl $crate::wrapper::NativeStruct for $name {
            const NAME: &'static str = $native;

            fn build_layout() -> $crate::Result<$crate::layout::Layout> {
                $crate::layout::Layout::builder($native)
                    $(
                        .field(
                            $crate::wrapper::native_name!($field $(, $cname)?),
                            <$ty as $crate::wrapper::FieldValue>::field_type(),
                        )
                    )*
                    .build()
            }

            fn layout() -> &'static $crate::layout::Layout {
                static LAYOUT: std::sync::LazyLock<$crate::layout::Layout> =
                    std::sync::LazyLock::new(|| {
                        <$name as $crate::wrapper::NativeStruct>::build_layout()
                            .expect(concat!("invalid layout for ", $native))
                    });
                &LAYOUT
            }

            fn from_record(record: &$crate::value::Record) -> $crate::Result<Self> {
                Ok(Self {
                    $(
                        $field: $crate::wrapper::take(
                            record,
                            $native,
                            $crate::wrapper::native_name!($field $(, $cname)?),
                        )?,
                    )*
                })
            }

            fn to_record(&self) -> $crate::value::Record {
                $crate::value::Record::new()
                    $(
                        .with(
                            $crate::wrapper::native_name!($field $(, $cname)?),
                            $crate::wrapper::FieldValue::to_value(&self.$field),
                        )
                    )*
            }
        }

        #[doc = concat!("Decodes an `", $native, "` at the start of `buffer`.")]
        pub fn $read(buffer: &[u8]) -> $crate::Result<$name> {
            <$name as $crate::wrapper::NativeStruct>::read(buffer)
        }

        #[doc = concat!("Encodes an `", $native, "` at the start of `buffer`.")]
        pub fn $write(value: &$name, buffer: &mut [u8]) -> $crate::Result<()> {
            <$name as $crate::wrapper::NativeStruct>::write(value, buffer)
        }
    };
}

pub(crate) use native_name;
pub(crate) use native_struct;
