// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversion of [`RawArgument`]s into typed [`Value`]s.
//!
//! Conversion is a pure function of the declared [`ParameterKind`]s and the
//! supplied [`RawArgument`]s:
//! 1. the argument count is checked before anything else;
//! 2. positions are converted left to right;
//! 3. the first failing position terminates conversion.

use std::{fmt, str::FromStr};

use crate::{
    argument::{DocStringRef, RawArgument, TableRef},
    error::{ArgumentError, ArgumentResult},
    parameter::{Parameter, ParameterKind},
};

/// Converted argument, ready to be passed to a handler.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// [`ParameterKind::Int8`].
    I8(i8),

    /// [`ParameterKind::Int16`].
    I16(i16),

    /// [`ParameterKind::Int32`].
    I32(i32),

    /// [`ParameterKind::Int64`].
    I64(i64),

    /// [`ParameterKind::Float32`].
    F32(f32),

    /// [`ParameterKind::Float64`].
    F64(f64),

    /// [`ParameterKind::Text`].
    Text(String),

    /// [`ParameterKind::ByteSequence`].
    Bytes(Vec<u8>),

    /// [`ParameterKind::TableRef`].
    Table(TableRef),

    /// [`ParameterKind::DocStringRef`].
    DocString(DocStringRef),
}

impl Value {
    /// Returns the [`ParameterKind`] this [`Value`] has been converted into.
    #[must_use]
    pub const fn kind(&self) -> ParameterKind {
        match self {
            Self::I8(_) => ParameterKind::Int8,
            Self::I16(_) => ParameterKind::Int16,
            Self::I32(_) => ParameterKind::Int32,
            Self::I64(_) => ParameterKind::Int64,
            Self::F32(_) => ParameterKind::Float32,
            Self::F64(_) => ParameterKind::Float64,
            Self::Text(_) => ParameterKind::Text,
            Self::Bytes(_) => ParameterKind::ByteSequence,
            Self::Table(_) => ParameterKind::TableRef,
            Self::DocString(_) => ParameterKind::DocStringRef,
        }
    }

    /// Extracts a [`Parameter`] out of this [`Value`].
    ///
    /// # Errors
    ///
    /// Gives this [`Value`] back if it holds another kind.
    pub fn extract<P: Parameter>(self) -> Result<P, Self> {
        P::from_value(self)
    }
}

/// Converts `args` into [`Value`]s of the declared `kinds`.
///
/// # Errors
///
/// - [`ArgumentError::ArgumentCountMismatch`] if lengths differ, regardless
///   of the values;
/// - otherwise the error of the leftmost position failing [`convert_one()`].
pub fn convert(
    kinds: &[ParameterKind],
    args: &[RawArgument],
) -> ArgumentResult<Vec<Value>> {
    if kinds.len() != args.len() {
        let err = ArgumentError::count_mismatch(kinds.len(), args.len());
        tracing::debug!(%err, "argument count mismatch");
        return Err(err);
    }

    kinds
        .iter()
        .zip(args)
        .enumerate()
        .map(|(position, (kind, arg))| convert_one(position, kind, arg))
        .collect()
}

/// Converts a single `arg` at the given `position` into the declared `kind`.
///
/// # Errors
///
/// - [`ArgumentError::UnsupportedArgumentType`] if `kind` is
///   [`ParameterKind::Unsupported`], whatever `arg` is;
/// - [`ArgumentError::ConversionFailure`] if `arg` has the wrong tag for
///   `kind`, or its text cannot be parsed into `kind`.
pub fn convert_one(
    position: usize,
    kind: &ParameterKind,
    arg: &RawArgument,
) -> ArgumentResult<Value> {
    let value = match (kind, arg) {
        (ParameterKind::Unsupported(shape), _) => {
            Err(ArgumentError::unsupported(position, &**shape))
        }

        (ParameterKind::Int8, RawArgument::Text(s)) => {
            parse(position, kind, s).map(Value::I8)
        }
        (ParameterKind::Int16, RawArgument::Text(s)) => {
            parse(position, kind, s).map(Value::I16)
        }
        (ParameterKind::Int32, RawArgument::Text(s)) => {
            parse(position, kind, s).map(Value::I32)
        }
        (ParameterKind::Int64, RawArgument::Text(s)) => {
            parse(position, kind, s).map(Value::I64)
        }
        (ParameterKind::Float32, RawArgument::Text(s)) => {
            parse_float(position, kind, s, f32::is_infinite).map(Value::F32)
        }
        (ParameterKind::Float64, RawArgument::Text(s)) => {
            parse_float(position, kind, s, f64::is_infinite).map(Value::F64)
        }
        (ParameterKind::Text, RawArgument::Text(s)) => Ok(Value::Text(s.clone())),
        (ParameterKind::ByteSequence, RawArgument::Text(s)) => {
            Ok(Value::Bytes(s.as_bytes().to_vec()))
        }

        (ParameterKind::TableRef, RawArgument::Table(table)) => {
            Ok(Value::Table(table.clone()))
        }
        (ParameterKind::DocStringRef, RawArgument::DocString(doc)) => {
            Ok(Value::DocString(doc.clone()))
        }

        (_, arg) => {
            Err(ArgumentError::mismatched_tag(position, kind.clone(), arg.tag()))
        }
    };

    match &value {
        Ok(_) => tracing::trace!(position, %kind, "argument converted"),
        Err(err) => tracing::debug!(position, %kind, %err, "argument rejected"),
    }
    value
}

/// Parses `text` as a base-10 number of the declared `kind`.
fn parse<T>(position: usize, kind: &ParameterKind, text: &str) -> ArgumentResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    text.parse()
        .map_err(|e| ArgumentError::unparsable(position, kind.clone(), text, e))
}

/// Parses `text` as a floating point number of the declared `kind`.
///
/// [`FromStr`] saturates out of range literals to infinity, so any infinity
/// not spelled out explicitly is an overflow.
fn parse_float<T>(
    position: usize,
    kind: &ParameterKind,
    text: &str,
    is_infinite: impl FnOnce(T) -> bool,
) -> ArgumentResult<T>
where
    T: Copy + FromStr,
    T::Err: fmt::Display,
{
    let value = parse::<T>(position, kind, text)?;
    if is_infinite(value) && !is_infinity_literal(text) {
        return Err(ArgumentError::unparsable(
            position,
            kind.clone(),
            text,
            "value out of range",
        ));
    }
    Ok(value)
}

/// Checks whether `text` spells out an infinity (`inf`, `-Infinity`, etc.).
fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text
        .strip_prefix(['+', '-'])
        .unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf")
        || unsigned.eq_ignore_ascii_case("infinity")
}
