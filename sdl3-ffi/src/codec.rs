// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Struct codec: converts between byte buffers and [`Record`]s.
//!
//! Both directions walk the field table computed once by [`Layout`], so a
//! field is always read from the same offset it is written to. Scalars use
//! the platform's native byte order. Pointer fields are copied as raw
//! addresses and never dereferenced.

use std::{
    ffi::c_void,
    ops::{Deref, DerefMut},
};

use sdl3_ffi_sys::NativeType;

use crate::{
    Error, Result,
    layout::{FieldType, Layout},
    value::{Record, Value, ValueKind},
};

/// Decodes one struct instance from the start of `buffer`.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] if `buffer` is shorter than `layout.size()`.
pub fn decode(layout: &Layout, buffer: &[u8]) -> Result<Record> {
    decode_at(layout, buffer, 0)
}

/// Decodes one struct instance starting `offset` bytes into `buffer`.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] if fewer than `layout.size()` bytes are
/// available after `offset`.
pub fn decode_at(layout: &Layout, buffer: &[u8], offset: usize) -> Result<Record> {
    let end = check_bounds(layout, buffer.len(), offset)?;
    Ok(read_struct(layout, &buffer[offset..end]))
}

/// Encodes `value` into the start of `buffer`.
///
/// # Errors
///
/// See [`encode_at`].
pub fn encode(layout: &Layout, value: &Record, buffer: &mut [u8]) -> Result<()> {
    encode_at(layout, value, buffer, 0)
}

/// Encodes `value` starting `offset` bytes into `buffer`.
///
/// Only bytes covered by declared fields are written; padding keeps its
/// previous contents. On error `buffer` is left unchanged.
///
/// # Errors
///
/// - [`Error::OutOfBounds`] if the buffer is too short
/// - [`Error::MissingField`] / [`Error::UnexpectedField`] if the record's
///   field names differ from the layout's
/// - [`Error::TypeMismatch`] / [`Error::ArrayLength`] if a value has the wrong shape
pub fn encode_at(layout: &Layout, value: &Record, buffer: &mut [u8], offset: usize) -> Result<()> {
    let end = check_bounds(layout, buffer.len(), offset)?;
    let target = &mut buffer[offset..end];
    let mut scratch = target.to_vec();
    write_struct(layout, value, &mut scratch)?;
    target.copy_from_slice(&scratch);
    Ok(())
}

/// Encodes `value` into a fresh zeroed buffer of exactly `layout.size()` bytes.
pub fn encode_to_buffer(layout: &Layout, value: &Record) -> Result<AlignedBuffer> {
    let mut buffer = AlignedBuffer::for_layout(layout);
    write_struct(layout, value, buffer.as_bytes_mut())?;
    Ok(buffer)
}

fn check_bounds(layout: &Layout, available: usize, offset: usize) -> Result<usize> {
    match offset.checked_add(layout.size()) {
        Some(end) if end <= available => Ok(end),
        _ => Err(Error::OutOfBounds {
            layout: layout.name().to_string(),
            offset,
            needed: layout.size(),
            available,
        }),
    }
}

// `bytes` is exactly `layout.size()` long from here on.
fn read_struct(layout: &Layout, bytes: &[u8]) -> Record {
    let mut record = Record::with_capacity(layout.fields().len());
    for field in layout.fields() {
        let range = field.offset()..field.offset() + field.size();
        record.insert(field.name(), read_field(field.ty(), &bytes[range]));
    }
    record
}

fn read_field(ty: &FieldType, bytes: &[u8]) -> Value {
    match ty {
        FieldType::Scalar(tag) => read_scalar(*tag, bytes),
        FieldType::Struct(layout) => Value::Struct(read_struct(layout, bytes)),
        FieldType::Array(element, len) => {
            let stride = element.size();
            Value::Array(
                (0..*len)
                    .map(|index| read_field(element, &bytes[index * stride..(index + 1) * stride]))
                    .collect(),
            )
        }
    }
}

fn bytes_of<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[..N]);
    out
}

fn read_unsigned(bytes: &[u8]) -> u64 {
    match bytes.len() {
        4 => u32::from_ne_bytes(bytes_of(bytes)) as u64,
        2 => u16::from_ne_bytes(bytes_of(bytes)) as u64,
        _ => u64::from_ne_bytes(bytes_of(bytes)),
    }
}

fn read_signed(bytes: &[u8]) -> i64 {
    match bytes.len() {
        4 => i32::from_ne_bytes(bytes_of(bytes)) as i64,
        2 => i16::from_ne_bytes(bytes_of(bytes)) as i64,
        _ => i64::from_ne_bytes(bytes_of(bytes)),
    }
}

fn read_scalar(tag: NativeType, bytes: &[u8]) -> Value {
    match tag {
        NativeType::Bool => Value::Bool(bytes[0] != 0),
        NativeType::U8 => Value::U8(bytes[0]),
        NativeType::I8 => Value::I8(bytes[0] as i8),
        NativeType::U16 => Value::U16(u16::from_ne_bytes(bytes_of(bytes))),
        NativeType::I16 => Value::I16(i16::from_ne_bytes(bytes_of(bytes))),
        NativeType::U32 => Value::U32(u32::from_ne_bytes(bytes_of(bytes))),
        NativeType::I32 => Value::I32(i32::from_ne_bytes(bytes_of(bytes))),
        NativeType::U64 => Value::U64(u64::from_ne_bytes(bytes_of(bytes))),
        NativeType::I64 => Value::I64(i64::from_ne_bytes(bytes_of(bytes))),
        NativeType::F32 => Value::F32(f32::from_ne_bytes(bytes_of(bytes))),
        NativeType::F64 => Value::F64(f64::from_ne_bytes(bytes_of(bytes))),
        NativeType::USize => Value::USize(read_unsigned(bytes)),
        NativeType::ISize => Value::ISize(read_signed(bytes)),
        // Void never reaches the codec, layouts reject it.
        NativeType::Pointer | NativeType::FunctionPointer | NativeType::Void => {
            Value::Pointer(read_unsigned(bytes))
        }
    }
}

fn write_struct(layout: &Layout, record: &Record, bytes: &mut [u8]) -> Result<()> {
    if let Some((name, _)) = record.iter().find(|(name, _)| layout.field(name).is_none()) {
        return Err(Error::UnexpectedField {
            layout: layout.name().to_string(),
            field: name.to_string(),
        });
    }

    for field in layout.fields() {
        let value = record.get(field.name()).ok_or_else(|| Error::MissingField {
            layout: layout.name().to_string(),
            field: field.name().to_string(),
        })?;
        let range = field.offset()..field.offset() + field.size();
        write_field(layout, field.name(), field.ty(), value, &mut bytes[range])?;
    }
    Ok(())
}

fn write_field(
    layout: &Layout,
    path: &str,
    ty: &FieldType,
    value: &Value,
    bytes: &mut [u8],
) -> Result<()> {
    let mismatch = |expected: ValueKind| Error::TypeMismatch {
        layout: layout.name().to_string(),
        field: path.to_string(),
        expected,
        found: value.kind(),
    };

    match (ty, value) {
        (FieldType::Scalar(tag), value) => {
            write_scalar(*tag, value, bytes).map_err(|fault| match fault {
                ScalarFault::Kind => mismatch(ValueKind::of_scalar(*tag)),
                ScalarFault::Range => Error::ValueOutOfRange {
                    layout: layout.name().to_string(),
                    field: path.to_string(),
                    ty: *tag,
                },
            })
        }
        (FieldType::Struct(nested), Value::Struct(record)) => write_struct(nested, record, bytes),
        (FieldType::Array(element, len), Value::Array(items)) => {
            if items.len() != *len {
                return Err(Error::ArrayLength {
                    layout: layout.name().to_string(),
                    field: path.to_string(),
                    expected: *len,
                    found: items.len(),
                });
            }
            let stride = element.size();
            for (index, item) in items.iter().enumerate() {
                write_field(
                    layout,
                    &format!("{path}[{index}]"),
                    element,
                    item,
                    &mut bytes[index * stride..(index + 1) * stride],
                )?;
            }
            Ok(())
        }
        (FieldType::Struct(_), _) => Err(mismatch(ValueKind::Struct)),
        (FieldType::Array(..), _) => Err(mismatch(ValueKind::Array)),
    }
}

enum ScalarFault {
    Kind,
    Range,
}

fn write_unsigned(value: u64, bytes: &mut [u8]) -> core::result::Result<(), ScalarFault> {
    match bytes.len() {
        4 => {
            let narrow = u32::try_from(value).map_err(|_| ScalarFault::Range)?;
            bytes.copy_from_slice(&narrow.to_ne_bytes());
        }
        _ => bytes.copy_from_slice(&value.to_ne_bytes()),
    }
    Ok(())
}

fn write_signed(value: i64, bytes: &mut [u8]) -> core::result::Result<(), ScalarFault> {
    match bytes.len() {
        4 => {
            let narrow = i32::try_from(value).map_err(|_| ScalarFault::Range)?;
            bytes.copy_from_slice(&narrow.to_ne_bytes());
        }
        _ => bytes.copy_from_slice(&value.to_ne_bytes()),
    }
    Ok(())
}

fn write_scalar(
    tag: NativeType,
    value: &Value,
    bytes: &mut [u8],
) -> core::result::Result<(), ScalarFault> {
    match (tag, value) {
        (NativeType::Bool, Value::Bool(v)) => bytes[0] = u8::from(*v),
        (NativeType::U8, Value::U8(v)) => bytes[0] = *v,
        (NativeType::I8, Value::I8(v)) => bytes.copy_from_slice(&v.to_ne_bytes()),
        (NativeType::U16, Value::U16(v)) => bytes.copy_from_slice(&v.to_ne_bytes()),
        (NativeType::I16, Value::I16(v)) => bytes.copy_from_slice(&v.to_ne_bytes()),
        (NativeType::U32, Value::U32(v)) => bytes.copy_from_slice(&v.to_ne_bytes()),
        (NativeType::I32, Value::I32(v)) => bytes.copy_from_slice(&v.to_ne_bytes()),
        (NativeType::U64, Value::U64(v)) => bytes.copy_from_slice(&v.to_ne_bytes()),
        (NativeType::I64, Value::I64(v)) => bytes.copy_from_slice(&v.to_ne_bytes()),
        (NativeType::F32, Value::F32(v)) => bytes.copy_from_slice(&v.to_ne_bytes()),
        (NativeType::F64, Value::F64(v)) => bytes.copy_from_slice(&v.to_ne_bytes()),
        (NativeType::USize, Value::USize(v)) => write_unsigned(*v, bytes)?,
        (NativeType::ISize, Value::ISize(v)) => write_signed(*v, bytes)?,
        (NativeType::Pointer | NativeType::FunctionPointer, Value::Pointer(v)) => {
            write_unsigned(*v, bytes)?
        }
        _ => return Err(ScalarFault::Kind),
    }
    Ok(())
}

/// Zero-initialized byte buffer whose first byte is 8-byte aligned.
///
/// Buffers handed to SDL must satisfy the struct's alignment; a `Vec<u8>`
/// only guarantees 1.
#[derive(Clone, PartialEq, Eq)]
pub struct AlignedBuffer {
    words: Vec<u64>,
    len: usize,
}

impl AlignedBuffer {
    pub fn zeroed(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(8)],
            len,
        }
    }

    /// A zeroed buffer of exactly `layout.size()` bytes.
    pub fn for_layout(layout: &Layout) -> Self {
        Self::zeroed(layout.size())
    }

    /// A zeroed buffer for `count` consecutive instances of `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] if the total size overflows `usize`.
    pub fn for_array(layout: &Layout, count: usize) -> Result<Self> {
        let len = layout.size().checked_mul(count).ok_or_else(|| {
            Error::invalid_layout(layout.name(), format!("array of {count} overflows usize"))
        })?;
        Ok(Self::zeroed(len))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &bytemuck::cast_slice::<u64, u8>(&self.words)[..self.len]
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut bytemuck::cast_slice_mut::<u64, u8>(&mut self.words)[..self.len]
    }

    /// Pointer to the first byte, for passing to native functions.
    pub fn as_ptr(&self) -> *const c_void {
        self.words.as_ptr().cast()
    }

    /// Mutable pointer to the first byte, for native out-parameters.
    pub fn as_mut_ptr(&mut self) -> *mut c_void {
        self.words.as_mut_ptr().cast()
    }
}

impl Deref for AlignedBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl DerefMut for AlignedBuffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}

impl std::fmt::Debug for AlignedBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedBuffer")
            .field("len", &self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_info_head() -> Layout {
        Layout::builder("PathInfoHead")
            .field("type", NativeType::U32)
            .field("size", NativeType::U64)
            .field("create_time", NativeType::I64)
            .build()
            .unwrap()
    }

    fn haptic_direction() -> Layout {
        Layout::builder("SDL_HapticDirection")
            .field("type", NativeType::U8)
            .field("dir", FieldType::array(NativeType::I32, 3))
            .build()
            .unwrap()
    }

    #[test]
    fn zero_bytes_decode_to_zero_values() {
        let layout = path_info_head();
        let record = decode(&layout, &[0u8; 24]).unwrap();
        assert_eq!(record.get("type"), Some(&Value::U32(0)));
        assert_eq!(record.get("size"), Some(&Value::U64(0)));
        assert_eq!(record.get("create_time"), Some(&Value::I64(0)));
    }

    #[test]
    fn encode_then_decode_reproduces_record() {
        let layout = path_info_head();
        let record = Record::new()
            .with("type", 1u32)
            .with("size", 100u64)
            .with("create_time", -5i64);
        let buffer = encode_to_buffer(&layout, &record).unwrap();
        assert_eq!(buffer.len(), layout.size());
        assert_eq!(decode(&layout, &buffer).unwrap(), record);
    }

    #[test]
    fn scalars_use_native_byte_order() {
        let layout = Layout::builder("Word")
            .field("value", NativeType::U32)
            .build()
            .unwrap();
        let record = decode(&layout, &0x0102_0304u32.to_ne_bytes()).unwrap();
        assert_eq!(record.get("value"), Some(&Value::U32(0x0102_0304)));
    }

    #[test]
    fn short_buffers_are_rejected() {
        let layout = path_info_head();
        let short = vec![0u8; layout.size() - 1];
        let err = decode(&layout, &short).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { needed, available, .. } if needed == layout.size() && available == layout.size() - 1));

        let mut buffer = vec![0u8; layout.size()];
        let err = decode_at(&layout, &buffer, 1).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { offset: 1, .. }));

        let record = decode(&layout, &buffer).unwrap();
        let err = encode_at(&layout, &record, &mut buffer, 8).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { .. }));

        assert!(decode_at(&layout, &buffer, usize::MAX).is_err());
    }

    #[test]
    fn decode_at_offset_reads_second_instance() {
        let layout = haptic_direction();
        let first = Record::new()
            .with("type", 1u8)
            .with("dir", vec![Value::I32(1), Value::I32(2), Value::I32(3)]);
        let second = Record::new()
            .with("type", 2u8)
            .with("dir", vec![Value::I32(-1), Value::I32(-2), Value::I32(-3)]);
        let mut buffer = AlignedBuffer::for_array(&layout, 2).unwrap();
        encode_at(&layout, &first, &mut buffer, 0).unwrap();
        encode_at(&layout, &second, &mut buffer, layout.size()).unwrap();
        assert_eq!(decode_at(&layout, &buffer, layout.size()).unwrap(), second);
        assert_eq!(decode(&layout, &buffer).unwrap(), first);
    }

    #[test]
    fn array_elements_are_packed_at_element_stride() {
        let layout = haptic_direction();
        let record = Record::new()
            .with("type", 2u8)
            .with("dir", vec![Value::I32(10), Value::I32(-20), Value::I32(30)]);
        let buffer = encode_to_buffer(&layout, &record).unwrap();
        assert_eq!(buffer[0], 2);
        assert_eq!(&buffer[4..8], &10i32.to_ne_bytes());
        assert_eq!(&buffer[8..12], &(-20i32).to_ne_bytes());
        assert_eq!(&buffer[12..16], &30i32.to_ne_bytes());
    }

    #[test]
    fn padding_is_left_untouched() {
        let layout = haptic_direction();
        let record = Record::new()
            .with("type", 0u8)
            .with("dir", vec![Value::I32(0), Value::I32(0), Value::I32(0)]);
        let mut buffer = vec![0xAAu8; layout.size()];
        encode(&layout, &record, &mut buffer).unwrap();
        assert_eq!(&buffer[1..4], &[0xAA, 0xAA, 0xAA]);
        assert_eq!(buffer[0], 0);
    }

    #[test]
    fn malformed_records_fail_without_writing() {
        let layout = path_info_head();
        let mut buffer = vec![0x55u8; layout.size()];

        let missing = Record::new().with("type", 1u32).with("size", 1u64);
        let err = encode(&layout, &missing, &mut buffer).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field, .. } if field == "create_time"));

        let extra = Record::new()
            .with("type", 1u32)
            .with("size", 1u64)
            .with("create_time", 1i64)
            .with("modify_time", 1i64);
        let err = encode(&layout, &extra, &mut buffer).unwrap_err();
        assert!(matches!(err, Error::UnexpectedField { ref field, .. } if field == "modify_time"));

        let wrong_kind = Record::new()
            .with("type", 1i32)
            .with("size", 1u64)
            .with("create_time", 1i64);
        let err = encode(&layout, &wrong_kind, &mut buffer).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch {
                expected: ValueKind::U32,
                found: ValueKind::I32,
                ..
            }
        ));

        assert!(buffer.iter().all(|byte| *byte == 0x55));
    }

    #[test]
    fn array_length_must_match() {
        let layout = haptic_direction();
        let record = Record::new()
            .with("type", 0u8)
            .with("dir", vec![Value::I32(0), Value::I32(0)]);
        let err = encode_to_buffer(&layout, &record).unwrap_err();
        assert!(matches!(
            err,
            Error::ArrayLength {
                expected: 3,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn nested_records_round_trip() {
        let point = Layout::builder("SDL_FPoint")
            .field("x", NativeType::F32)
            .field("y", NativeType::F32)
            .build()
            .unwrap();
        let segment = Layout::builder("Segment")
            .field("visible", NativeType::Bool)
            .field("ends", FieldType::array(&point, 2))
            .field("owner", NativeType::Pointer)
            .build()
            .unwrap();
        let end = |x: f32, y: f32| Value::Struct(Record::new().with("x", x).with("y", y));
        let record = Record::new()
            .with("visible", true)
            .with("ends", vec![end(0.5, -1.0), end(3.25, 8.0)])
            .with("owner", Value::Pointer(0xdead_b000));
        let buffer = encode_to_buffer(&segment, &record).unwrap();
        assert_eq!(segment.offset_of("ends"), Some(4));
        assert_eq!(decode(&segment, &buffer).unwrap(), record);
    }

    #[test]
    fn struct_field_rejects_scalar_value() {
        let inner = Layout::builder("Inner")
            .field("a", NativeType::U8)
            .build()
            .unwrap();
        let outer = Layout::builder("Outer")
            .field("inner", &inner)
            .build()
            .unwrap();
        let err = encode_to_buffer(&outer, &Record::new().with("inner", 1u8)).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch {
                expected: ValueKind::Struct,
                ..
            }
        ));
    }

    #[test]
    fn nonzero_bool_bytes_decode_as_true() {
        let layout = Layout::builder("Flag")
            .field("on", NativeType::Bool)
            .build()
            .unwrap();
        assert_eq!(
            decode(&layout, &[7u8]).unwrap().get("on"),
            Some(&Value::Bool(true))
        );
    }

    #[test]
    fn aligned_buffer_is_word_aligned() {
        let buffer = AlignedBuffer::zeroed(13);
        assert_eq!(buffer.len(), 13);
        assert_eq!(buffer.as_ptr() as usize % 8, 0);
        assert!(buffer.iter().all(|byte| *byte == 0));
    }

    #[test]
    fn oversized_array_buffer_is_an_error() {
        let layout = path_info_head();
        assert!(matches!(
            AlignedBuffer::for_array(&layout, usize::MAX / 2),
            Err(Error::InvalidLayout { .. })
        ));
        assert_eq!(AlignedBuffer::for_array(&layout, 3).unwrap().len(), layout.size() * 3);
    }

    #[test]
    fn large_layout_on_short_buffer_is_out_of_bounds() {
        let layout = Layout::builder("Large")
            .field("items", FieldType::array(NativeType::U16, 1usize << (usize::BITS - 2)))
            .build()
            .unwrap();
        assert!(matches!(
            decode(&layout, &[]),
            Err(Error::OutOfBounds { available: 0, .. })
        ));
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn wide_value_in_pointer_sized_field_is_out_of_range() {
        let layout = Layout::builder("Sized")
            .field("len", NativeType::USize)
            .build()
            .unwrap();
        let err = encode_to_buffer(&layout, &Record::new().with("len", Value::USize(u64::MAX)))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ValueOutOfRange { ref field, ty: NativeType::USize, .. } if field == "len"
        ));
        assert_eq!(err.kind(), crate::ErrorKind::Marshaling);
    }
}
