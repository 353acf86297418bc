// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Step attempt error types.
//!
//! This module defines the failures a single step attempt may end with:
//! argument errors detected before the handler is called, failures reported
//! by the handler itself, and panics of the handler.

use std::{any::Any, borrow::Cow, fmt};

use derive_more::with_trait::{Display, Error};

use super::ArgumentError;

/// Failure of a single step attempt.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum StepError {
    /// Raw arguments couldn't be converted, so the handler wasn't called.
    #[display("{_0}")]
    Argument(ArgumentError),

    /// Handler returned an error. Displays as the handler's message verbatim.
    #[display("{_0}")]
    HandlerReportedFailure(#[error(not(source))] String),

    /// Handler panicked.
    #[display("step panicked: {message}")]
    Panic {
        /// The panic message.
        #[error(not(source))]
        message: String,
    },
}

/// Result type alias for step attempts.
pub type StepResult<T> = Result<T, StepError>;

impl StepError {
    /// Creates a new [`StepError::HandlerReportedFailure`].
    #[must_use]
    pub fn handler(message: impl Into<String>) -> Self {
        Self::HandlerReportedFailure(message.into())
    }

    /// Creates a new [`StepError::Panic`].
    #[must_use]
    pub fn panic(message: impl Into<String>) -> Self {
        Self::Panic { message: message.into() }
    }

    /// Creates a new [`StepError::Panic`] out of a [`catch_unwind()`] payload.
    ///
    /// [`catch_unwind()`]: std::panic::catch_unwind
    #[must_use]
    pub fn from_panic_payload(payload: &(dyn Any + Send)) -> Self {
        Self::panic(coerce_panic_payload(payload))
    }

    /// Returns the [`ErrorKind`] of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Argument(ArgumentError::ArgumentCountMismatch { .. }) => {
                ErrorKind::ArgumentCountMismatch
            }
            Self::Argument(ArgumentError::UnsupportedArgumentType {
                ..
            }) => ErrorKind::UnsupportedArgumentType,
            Self::Argument(ArgumentError::ConversionFailure { .. }) => {
                ErrorKind::ConversionFailure
            }
            Self::HandlerReportedFailure(_) => ErrorKind::HandlerReportedFailure,
            Self::Panic { .. } => ErrorKind::Panic,
        }
    }

    /// Returns the [`ArgumentError`] if the handler wasn't called.
    #[must_use]
    pub const fn argument_error(&self) -> Option<&ArgumentError> {
        match self {
            Self::Argument(err) => Some(err),
            Self::HandlerReportedFailure(_) | Self::Panic { .. } => None,
        }
    }

    /// Indicates whether the handler has been called.
    #[must_use]
    pub const fn is_handler_invoked(&self) -> bool {
        !matches!(self, Self::Argument(_))
    }

    /// Returns true if this is a panic error.
    #[must_use]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panic { .. })
    }
}

impl From<ArgumentError> for StepError {
    fn from(err: ArgumentError) -> Self {
        Self::Argument(err)
    }
}

/// Stable discriminant of a [`StepError`].
///
/// Lets an executor tell argument problems of a step definition apart from
/// genuine assertion failures without inspecting messages.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// [`ArgumentError::ArgumentCountMismatch`].
    ArgumentCountMismatch,

    /// [`ArgumentError::UnsupportedArgumentType`].
    UnsupportedArgumentType,

    /// [`ArgumentError::ConversionFailure`].
    ConversionFailure,

    /// [`StepError::HandlerReportedFailure`].
    HandlerReportedFailure,

    /// [`StepError::Panic`].
    Panic,
}

impl ErrorKind {
    /// Indicates whether the error was detected before the handler was
    /// called.
    #[must_use]
    pub const fn is_argument_error(self) -> bool {
        matches!(
            self,
            Self::ArgumentCountMismatch
                | Self::UnsupportedArgumentType
                | Self::ConversionFailure,
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ArgumentCountMismatch => "argument count mismatch",
            Self::UnsupportedArgumentType => "unsupported argument type",
            Self::ConversionFailure => "conversion failure",
            Self::HandlerReportedFailure => "handler reported failure",
            Self::Panic => "panic",
        })
    }
}

/// Coerces a panic payload into a readable message.
#[must_use]
pub fn coerce_panic_payload(payload: &(dyn Any + Send)) -> Cow<'static, str> {
    payload
        .downcast_ref::<String>()
        .map(|s| Cow::Owned(s.clone()))
        .or_else(|| payload.downcast_ref::<&str>().map(|s| Cow::Owned((*s).to_owned())))
        .unwrap_or(Cow::Borrowed("(Could not resolve panic payload)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_failure_displays_verbatim() {
        let message = "  expected 5 cucumbers,\n got 3 \u{1F952}  ";
        let err = StepError::handler(message);
        assert_eq!(err.to_string(), message);
        assert_eq!(err.kind(), ErrorKind::HandlerReportedFailure);
        assert!(err.is_handler_invoked());
    }

    #[test]
    fn argument_errors_keep_kind() {
        let err = StepError::from(ArgumentError::count_mismatch(2, 1));
        assert_eq!(err.kind(), ErrorKind::ArgumentCountMismatch);
        assert!(err.kind().is_argument_error());
        assert!(!err.is_handler_invoked());
        assert_eq!(
            err.to_string(),
            ArgumentError::count_mismatch(2, 1).to_string(),
        );

        let err = StepError::from(ArgumentError::unsupported(0, "bool"));
        assert_eq!(err.kind(), ErrorKind::UnsupportedArgumentType);
        assert!(err.argument_error().is_some());
    }

    #[test]
    fn argument_error_is_source() {
        use std::error::Error as _;

        let err = StepError::from(ArgumentError::count_mismatch(1, 0));
        assert!(err.source().is_some());
        assert!(StepError::handler("boom").source().is_none());
    }

    #[test]
    fn coerces_panic_payloads() {
        let owned: Box<dyn Any + Send> = Box::new("owned".to_owned());
        assert_eq!(coerce_panic_payload(owned.as_ref()), "owned");

        let borrowed: Box<dyn Any + Send> = Box::new("borrowed");
        assert_eq!(coerce_panic_payload(borrowed.as_ref()), "borrowed");

        let opaque: Box<dyn Any + Send> = Box::new(42_i32);
        assert_eq!(
            coerce_panic_payload(opaque.as_ref()),
            "(Could not resolve panic payload)",
        );

        let err = StepError::from_panic_payload(borrowed.as_ref());
        assert!(err.is_panic());
        assert_eq!(err.to_string(), "step panicked: borrowed");
    }
}
