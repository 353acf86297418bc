// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Closed classification of [`Handler`] parameters.
//!
//! Every parameter of a [`Handler`] is described by exactly one
//! [`ParameterKind`], assigned once when the [`Handler`] is registered. The
//! converter only ever switches on this enumeration.
//!
//! [`Handler`]: crate::Handler

use std::{borrow::Cow, fmt};

use sealed::sealed;

use crate::{
    argument::{DocStringRef, TableRef},
    convert::Value,
};

/// Declared shape of a single [`Handler`] parameter.
///
/// [`Handler`]: crate::Handler
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ParameterKind {
    /// Signed 8-bit integer.
    Int8,

    /// Signed 16-bit integer.
    Int16,

    /// Signed 32-bit integer.
    Int32,

    /// Signed 64-bit integer.
    Int64,

    /// Single precision floating point number.
    Float32,

    /// Double precision floating point number.
    Float64,

    /// Plain text.
    Text,

    /// Raw bytes of a text argument.
    ByteSequence,

    /// Reference to a step's [`DataTable`], possibly absent.
    ///
    /// [`DataTable`]: crate::DataTable
    TableRef,

    /// Reference to a step's [`DocString`], possibly absent.
    ///
    /// [`DocString`]: crate::DocString
    DocStringRef,

    /// Any shape outside of the supported set (booleans, maps, sequences
    /// other than bytes, references to scalars, by-value composites).
    ///
    /// Holds a human-readable name of the declared shape.
    Unsupported(Cow<'static, str>),
}

impl ParameterKind {
    /// Creates an [`Unsupported`] kind for the given declared `shape`.
    ///
    /// [`Unsupported`]: ParameterKind::Unsupported
    #[must_use]
    pub fn unsupported(shape: impl Into<Cow<'static, str>>) -> Self {
        Self::Unsupported(shape.into())
    }

    /// Indicates whether arguments can ever be converted into this kind.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }

    /// Indicates whether this kind accepts only [`RawArgument::Text`].
    ///
    /// [`RawArgument::Text`]: crate::RawArgument::Text
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Float32
                | Self::Float64
                | Self::Text
                | Self::ByteSequence,
        )
    }

    /// Indicates whether this kind is passed through by reference.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::TableRef | Self::DocStringRef)
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int8 => "i8",
            Self::Int16 => "i16",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
            Self::Text => "text",
            Self::ByteSequence => "bytes",
            Self::TableRef => "table",
            Self::DocStringRef => "docstring",
            Self::Unsupported(shape) => &**shape,
        };
        f.write_str(name)
    }
}

/// Rust type which may be declared as a parameter of a typed [`Handler`].
///
/// Sealed: the set of implementors is exactly the supported
/// [`ParameterKind`]s.
///
/// [`Handler`]: crate::Handler
#[sealed]
pub trait Parameter: Sized {
    /// [`ParameterKind`] this type is registered with.
    const KIND: ParameterKind;

    /// Extracts this type out of a converted [`Value`].
    ///
    /// # Errors
    ///
    /// Gives the [`Value`] back if it holds another kind.
    fn from_value(value: Value) -> Result<Self, Value>;
}

macro_rules! impl_parameter {
    ($($ty:ty => $kind:ident($variant:ident)),* $(,)?) => {$(
        #[sealed]
        impl Parameter for $ty {
            const KIND: ParameterKind = ParameterKind::$kind;

            fn from_value(value: Value) -> Result<Self, Value> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(other),
                }
            }
        }
    )*};
}

impl_parameter! {
    i8 => Int8(I8),
    i16 => Int16(I16),
    i32 => Int32(I32),
    i64 => Int64(I64),
    f32 => Float32(F32),
    f64 => Float64(F64),
    String => Text(Text),
    Vec<u8> => ByteSequence(Bytes),
    TableRef => TableRef(Table),
    DocStringRef => DocStringRef(DocString),
}
