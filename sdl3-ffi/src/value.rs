// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Decoded records: the codec's structured view of a struct instance.

use sdl3_ffi_sys::NativeType;

/// One decoded field value.
///
/// Pointer-sized fields are carried as raw addresses in [`Value::Pointer`]; the
/// codec never turns them into pointers.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    USize(u64),
    ISize(i64),
    /// Address held by a pointer or function pointer field.
    Pointer(u64),
    Struct(Record),
    Array(Vec<Value>),
}

/// The variant of a [`Value`], used in type mismatch reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    USize,
    ISize,
    Pointer,
    Struct,
    Array,
}

impl ValueKind {
    /// Kind the codec produces for a scalar field of type `tag`.
    pub(crate) fn of_scalar(tag: NativeType) -> ValueKind {
        match tag {
            NativeType::Bool => ValueKind::Bool,
            NativeType::U8 => ValueKind::U8,
            NativeType::U16 => ValueKind::U16,
            NativeType::U32 => ValueKind::U32,
            NativeType::U64 => ValueKind::U64,
            NativeType::I8 => ValueKind::I8,
            NativeType::I16 => ValueKind::I16,
            NativeType::I32 => ValueKind::I32,
            NativeType::I64 => ValueKind::I64,
            NativeType::F32 => ValueKind::F32,
            NativeType::F64 => ValueKind::F64,
            NativeType::USize => ValueKind::USize,
            NativeType::ISize => ValueKind::ISize,
            // Void is rejected when a layout is built.
            NativeType::Pointer | NativeType::FunctionPointer | NativeType::Void => {
                ValueKind::Pointer
            }
        }
    }
}

macro_rules! value_accessors {
    ($($variant:ident => $method:ident: $ty:ty;)*) => {
        impl Value {
            $(
                pub fn $method(&self) -> Option<$ty> {
                    match self {
                        Value::$variant(value) => Some(*value),
                        _ => None,
                    }
                }
            )*
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

value_accessors! {
    Bool => as_bool: bool;
    U8 => as_u8: u8;
    U16 => as_u16: u16;
    U32 => as_u32: u32;
    U64 => as_u64: u64;
    I8 => as_i8: i8;
    I16 => as_i16: i16;
    I32 => as_i32: i32;
    I64 => as_i64: i64;
    F32 => as_f32: f32;
    F64 => as_f64: f64;
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::U8(_) => ValueKind::U8,
            Value::U16(_) => ValueKind::U16,
            Value::U32(_) => ValueKind::U32,
            Value::U64(_) => ValueKind::U64,
            Value::I8(_) => ValueKind::I8,
            Value::I16(_) => ValueKind::I16,
            Value::I32(_) => ValueKind::I32,
            Value::I64(_) => ValueKind::I64,
            Value::F32(_) => ValueKind::F32,
            Value::F64(_) => ValueKind::F64,
            Value::USize(_) => ValueKind::USize,
            Value::ISize(_) => ValueKind::ISize,
            Value::Pointer(_) => ValueKind::Pointer,
            Value::Struct(_) => ValueKind::Struct,
            Value::Array(_) => ValueKind::Array,
        }
    }

    pub fn as_usize(&self) -> Option<u64> {
        match self {
            Value::USize(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_isize(&self) -> Option<i64> {
        match self {
            Value::ISize(value) => Some(*value),
            _ => None,
        }
    }

    /// Raw address of a pointer field.
    pub fn as_address(&self) -> Option<u64> {
        match self {
            Value::Pointer(address) => Some(*address),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Struct(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Struct(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

/// Field values of one struct instance, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Builder-style [`Self::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a field, replacing an existing value of the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (N, Value)>>(iter: T) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let mut record = Record::new().with("a", 1u32).with("b", 2u32);
        record.insert("a", 3u32);
        let names: Vec<_> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(record.get("a").and_then(Value::as_u32), Some(3));
    }

    #[test]
    fn accessors_reject_other_variants() {
        let value = Value::from(-5i64);
        assert_eq!(value.as_i64(), Some(-5));
        assert_eq!(value.as_u64(), None);
        assert_eq!(value.kind(), ValueKind::I64);
        assert_eq!(Value::Pointer(0x1000).as_address(), Some(0x1000));
        assert_eq!(Value::Pointer(0x1000).as_u64(), None);
    }
}
