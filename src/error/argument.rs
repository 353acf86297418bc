// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors of converting raw step arguments.
//!
//! Any of these terminates a step attempt before its handler is called.

use std::fmt;

use derive_more::with_trait::{Display, Error};

use crate::{argument::ArgumentTag, parameter::ParameterKind};

/// Failure to convert raw step arguments into handler parameters.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum ArgumentError {
    /// Number of raw arguments differs from the number of parameters.
    #[display(
        "argument count mismatch: expected {expected} arguments, matched \
         {actual} from step"
    )]
    ArgumentCountMismatch {
        /// Number of declared parameters.
        expected: usize,

        /// Number of supplied raw arguments.
        actual: usize,
    },

    /// Declared parameter shape can never be converted into.
    #[display(
        "unsupported argument type: the argument {position} type {shape} is \
         not supported"
    )]
    UnsupportedArgumentType {
        /// Zero-based position of the parameter.
        position: usize,

        /// Name of the declared shape.
        #[error(not(source))]
        shape: String,
    },

    /// Raw argument cannot be converted into a supported parameter.
    #[display("cannot convert argument {position}: {reason}")]
    ConversionFailure {
        /// Zero-based position of the parameter.
        position: usize,

        /// Declared [`ParameterKind`] of the parameter.
        #[error(not(source))]
        kind: ParameterKind,

        /// What made the conversion fail.
        #[error(not(source))]
        reason: String,
    },
}

/// Result type alias for argument conversion.
pub type ArgumentResult<T> = Result<T, ArgumentError>;

impl ArgumentError {
    /// Creates a new [`ArgumentError::ArgumentCountMismatch`].
    #[must_use]
    pub const fn count_mismatch(expected: usize, actual: usize) -> Self {
        Self::ArgumentCountMismatch { expected, actual }
    }

    /// Creates a new [`ArgumentError::UnsupportedArgumentType`].
    #[must_use]
    pub fn unsupported(position: usize, shape: impl Into<String>) -> Self {
        Self::UnsupportedArgumentType { position, shape: shape.into() }
    }

    /// Creates a new [`ArgumentError::ConversionFailure`] caused by a raw
    /// argument of the wrong [`ArgumentTag`].
    #[must_use]
    pub fn mismatched_tag(
        position: usize,
        kind: ParameterKind,
        tag: ArgumentTag,
    ) -> Self {
        let reason = format!("{tag} to {kind}");
        Self::ConversionFailure { position, kind, reason }
    }

    /// Creates a new [`ArgumentError::ConversionFailure`] caused by a text
    /// that cannot be parsed.
    #[must_use]
    pub fn unparsable(
        position: usize,
        kind: ParameterKind,
        text: &str,
        cause: impl fmt::Display,
    ) -> Self {
        let reason = format!("{text:?} to {kind}: {cause}");
        Self::ConversionFailure { position, kind, reason }
    }

    /// Returns the zero-based parameter position this error relates to.
    ///
    /// [`None`] for [`ArgumentError::ArgumentCountMismatch`].
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::ArgumentCountMismatch { .. } => None,
            Self::UnsupportedArgumentType { position, .. }
            | Self::ConversionFailure { position, .. } => Some(*position),
        }
    }

    /// Returns true if this is an [`ArgumentError::ArgumentCountMismatch`].
    #[must_use]
    pub const fn is_count_mismatch(&self) -> bool {
        matches!(self, Self::ArgumentCountMismatch { .. })
    }

    /// Returns true if this is an [`ArgumentError::UnsupportedArgumentType`].
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedArgumentType { .. })
    }

    /// Returns true if this is an [`ArgumentError::ConversionFailure`].
    #[must_use]
    pub const fn is_conversion_failure(&self) -> bool {
        matches!(self, Self::ConversionFailure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_mismatch_message() {
        let err = ArgumentError::count_mismatch(2, 1);
        assert!(err.is_count_mismatch());
        assert_eq!(err.position(), None);
        assert_eq!(
            err.to_string(),
            "argument count mismatch: expected 2 arguments, matched 1 from step",
        );
    }

    #[test]
    fn unsupported_message() {
        let err = ArgumentError::unsupported(0, "bool");
        assert!(err.is_unsupported());
        assert_eq!(err.position(), Some(0));
        assert_eq!(
            err.to_string(),
            "unsupported argument type: the argument 0 type bool is not supported",
        );
    }

    #[test]
    fn conversion_failure_messages() {
        let err = ArgumentError::mismatched_tag(
            1,
            ParameterKind::TableRef,
            ArgumentTag::Text,
        );
        assert!(err.is_conversion_failure());
        assert_eq!(err.to_string(), "cannot convert argument 1: text to table");

        let err = ArgumentError::unparsable(
            3,
            ParameterKind::Int8,
            "300",
            "number too large",
        );
        assert_eq!(err.position(), Some(3));
        assert_eq!(
            err.to_string(),
            "cannot convert argument 3: \"300\" to i8: number too large",
        );
    }

    #[test]
    fn is_error_trait() {
        let err = ArgumentError::count_mismatch(0, 1);
        let _: &dyn std::error::Error = &err;
    }
}
