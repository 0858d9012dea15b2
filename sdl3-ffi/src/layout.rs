// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! Layout descriptors for native structs.
//!
//! A [`Layout`] is built once from an ordered list of named fields. Offsets,
//! sizes and alignments are computed at construction with the C struct rules
//! (each field starts at the next multiple of its alignment, the struct size is
//! rounded up to the largest field alignment) and never change afterwards.
//!
//! ```
//! use sdl3_ffi::{Layout, NativeType};
//!
//! # fn main() -> Result<(), sdl3_ffi::Error> {
//! let layout = Layout::builder("Pair")
//!     .field("tag", NativeType::U16)
//!     .field("value", NativeType::U32)
//!     .build()?;
//! assert_eq!(layout.offset_of("value"), Some(4));
//! assert_eq!(layout.size(), 8);
//! # Ok(())
//! # }
//! ```

use std::{collections::HashSet, fmt, sync::Arc};

use sdl3_ffi_sys::NativeType;
use serde::Serialize;

use crate::{Error, Result};

/// Type of one struct field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// A scalar or pointer-sized value.
    Scalar(NativeType),
    /// A nested struct, embedded by value.
    Struct(Layout),
    /// `N` consecutive elements of one type, without inter-element padding.
    Array(Box<FieldType>, usize),
}

impl FieldType {
    /// Shorthand for [`FieldType::Array`].
    pub fn array(element: impl Into<FieldType>, len: usize) -> Self {
        FieldType::Array(Box::new(element.into()), len)
    }

    /// Size in bytes, including trailing padding for nested structs.
    ///
    /// Saturates at `usize::MAX` for an array too large to address; such a
    /// type is rejected when a layout is built.
    pub fn size(&self) -> usize {
        self.checked_size().unwrap_or(usize::MAX)
    }

    /// Size in bytes, or `None` if it overflows `usize`.
    pub fn checked_size(&self) -> Option<usize> {
        match self {
            FieldType::Scalar(tag) => Some(tag.size()),
            FieldType::Struct(layout) => Some(layout.size()),
            FieldType::Array(element, len) => element.checked_size()?.checked_mul(*len),
        }
    }

    /// Alignment requirement of the field's first byte.
    pub fn align(&self) -> usize {
        match self {
            FieldType::Scalar(tag) => tag.align(),
            FieldType::Struct(layout) => layout.align(),
            FieldType::Array(element, _) => element.align(),
        }
    }

    fn validate(&self, layout: &str, field: &str) -> Result<()> {
        match self {
            FieldType::Scalar(NativeType::Void) => Err(Error::invalid_layout(
                layout,
                format!("field {field} has unsupported type void"),
            )),
            FieldType::Scalar(_) | FieldType::Struct(_) => Ok(()),
            FieldType::Array(_, 0) => Err(Error::invalid_layout(
                layout,
                format!("field {field} is a zero-length array"),
            )),
            FieldType::Array(element, _) => {
                element.validate(layout, field)?;
                if self.checked_size().is_none() {
                    return Err(overflow(layout, field));
                }
                Ok(())
            }
        }
    }
}

fn overflow(layout: &str, field: &str) -> Error {
    Error::invalid_layout(layout, format!("field {field} overflows usize"))
}

impl From<NativeType> for FieldType {
    fn from(value: NativeType) -> Self {
        FieldType::Scalar(value)
    }
}

impl From<Layout> for FieldType {
    fn from(value: Layout) -> Self {
        FieldType::Struct(value)
    }
}

impl From<&Layout> for FieldType {
    fn from(value: &Layout) -> Self {
        FieldType::Struct(value.clone())
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Scalar(tag) => write!(f, "{tag}"),
            FieldType::Struct(layout) => f.write_str(layout.name()),
            FieldType::Array(element, len) => write!(f, "{element}[{len}]"),
        }
    }
}

/// A field with its computed placement.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldLayout {
    name: String,
    ty: FieldType,
    offset: usize,
}

impl FieldLayout {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &FieldType {
        &self.ty
    }

    /// Byte offset from the start of the enclosing struct.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn size(&self) -> usize {
        self.ty.size()
    }

    pub fn align(&self) -> usize {
        self.ty.align()
    }
}

/// A scalar reached by descending through nested structs and arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafField {
    /// Dotted path, with array indices: `direction.dir[2]`.
    pub path: String,
    pub ty: NativeType,
    /// Byte offset from the start of the outermost struct.
    pub offset: usize,
}

struct LayoutInner {
    name: String,
    fields: Vec<FieldLayout>,
    size: usize,
    align: usize,
}

/// Immutable description of a native struct's binary shape.
///
/// Cloning is cheap; clones share the computed field table.
#[derive(Clone)]
pub struct Layout(Arc<LayoutInner>);

impl Layout {
    /// Starts a new layout for the struct called `name`.
    pub fn builder(name: impl Into<String>) -> LayoutBuilder {
        LayoutBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// The native struct name, e.g. `SDL_Rect`.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Total size, including trailing padding up to [`Self::align`].
    pub fn size(&self) -> usize {
        self.0.size
    }

    /// Largest alignment among the fields.
    pub fn align(&self) -> usize {
        self.0.align
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldLayout] {
        &self.0.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldLayout> {
        self.0.fields.iter().find(|field| field.name == name)
    }

    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.field(name).map(FieldLayout::offset)
    }

    /// Flattens the layout into its scalar leaves with absolute offsets.
    pub fn leaves(&self) -> Vec<LeafField> {
        let mut leaves = Vec::new();
        for field in self.fields() {
            collect_leaves(&field.ty, field.name.clone(), field.offset, &mut leaves);
        }
        leaves
    }

    /// Serializable summary of the layout.
    pub fn report(&self) -> LayoutReport {
        LayoutReport {
            name: self.name().to_string(),
            size: self.size(),
            align: self.align(),
            fields: self
                .fields()
                .iter()
                .map(|field| FieldReport {
                    name: field.name.clone(),
                    ty: field.ty.to_string(),
                    offset: field.offset,
                    size: field.size(),
                    align: field.align(),
                })
                .collect(),
        }
    }
}

fn collect_leaves(ty: &FieldType, path: String, offset: usize, out: &mut Vec<LeafField>) {
    match ty {
        FieldType::Scalar(tag) => out.push(LeafField {
            path,
            ty: *tag,
            offset,
        }),
        FieldType::Struct(layout) => {
            for field in layout.fields() {
                collect_leaves(
                    &field.ty,
                    format!("{path}.{}", field.name),
                    offset + field.offset,
                    out,
                );
            }
        }
        FieldType::Array(element, len) => {
            let stride = element.size();
            for index in 0..*len {
                collect_leaves(
                    element,
                    format!("{path}[{index}]"),
                    offset + index * stride,
                    out,
                );
            }
        }
    }
}

impl PartialEq for Layout {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || (self.0.name == other.0.name && self.0.fields == other.0.fields)
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("name", &self.0.name)
            .field("size", &self.0.size)
            .field("align", &self.0.align)
            .field("fields", &self.0.fields.len())
            .finish()
    }
}

/// Collects fields in declaration order; see [`Layout::builder`].
#[derive(Debug, Clone)]
pub struct LayoutBuilder {
    name: String,
    fields: Vec<(String, FieldType)>,
}

impl LayoutBuilder {
    /// Appends a field. Order of calls is the native declaration order.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<FieldType>) -> Self {
        self.fields.push((name.into(), ty.into()));
        self
    }

    /// Validates the fields and computes their placement.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] if the struct has no fields, a field
    /// name is empty or repeated, a field is typed `void`, an array has no
    /// elements, or the struct size does not fit in `usize`.
    pub fn build(self) -> Result<Layout> {
        if self.fields.is_empty() {
            return Err(Error::invalid_layout(&self.name, "struct has no fields"));
        }

        let mut names = HashSet::new();
        let mut fields = Vec::with_capacity(self.fields.len());
        let mut cursor = 0usize;
        let mut align = 1usize;
        for (name, ty) in self.fields {
            if name.is_empty() {
                return Err(Error::invalid_layout(&self.name, "field with empty name"));
            }
            if !names.insert(name.clone()) {
                return Err(Error::invalid_layout(
                    &self.name,
                    format!("field {name} declared twice"),
                ));
            }
            ty.validate(&self.name, &name)?;

            let field_align = ty.align();
            let offset = cursor
                .checked_next_multiple_of(field_align)
                .ok_or_else(|| overflow(&self.name, &name))?;
            cursor = offset
                .checked_add(ty.size())
                .ok_or_else(|| overflow(&self.name, &name))?;
            align = align.max(field_align);
            fields.push(FieldLayout { name, ty, offset });
        }

        let size = cursor.checked_next_multiple_of(align).ok_or_else(|| {
            Error::invalid_layout(&self.name, "trailing padding overflows usize")
        })?;
        Ok(Layout(Arc::new(LayoutInner {
            name: self.name,
            fields,
            size,
            align,
        })))
    }
}

/// Serializable view of a [`Layout`], as produced by [`Layout::report`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutReport {
    pub name: String,
    pub size: usize,
    pub align: usize,
    pub fields: Vec<FieldReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub offset: usize,
    pub size: usize,
    pub align: usize,
}
