// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Classification of what a handler returned.

use std::fmt;

use derive_more::with_trait::{Display, Error};

use crate::error::{ErrorKind, StepError};

/// Result of a single step attempt.
///
/// There is no intermediate state: either the handler has been called and
/// reported no problem, or the attempt failed before or inside the handler.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StepOutcome {
    /// Handler has been called and reported no problem.
    Passed,

    /// Step attempt failed.
    Failed(StepError),
}

impl StepOutcome {
    /// Indicates whether the step passed.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Indicates whether the step failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns the [`StepError`] of a failed step.
    #[must_use]
    pub const fn error(&self) -> Option<&StepError> {
        match self {
            Self::Passed => None,
            Self::Failed(err) => Some(err),
        }
    }

    /// Returns the [`ErrorKind`] of a failed step.
    #[must_use]
    pub const fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Passed => None,
            Self::Failed(err) => Some(err.kind()),
        }
    }

    /// Returns the human-readable message of a failed step.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    /// Converts this [`StepOutcome`] into a [`Result`].
    ///
    /// # Errors
    ///
    /// If the step failed.
    pub fn into_result(self) -> Result<(), StepError> {
        match self {
            Self::Passed => Ok(()),
            Self::Failed(err) => Err(err),
        }
    }
}

impl From<Result<(), StepError>> for StepOutcome {
    fn from(res: Result<(), StepError>) -> Self {
        res.map_or_else(Self::Failed, |()| Self::Passed)
    }
}

/// Failure explicitly reported by a handler.
///
/// Carries the message exactly as the handler produced it.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
#[display("{message}")]
pub struct HandlerFailure {
    #[error(not(source))]
    message: String,
}

impl HandlerFailure {
    /// Creates a new [`HandlerFailure`] with the given `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Returns the message of this [`HandlerFailure`].
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes this [`HandlerFailure`] returning its message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Return type of a handler that can be normalized into pass/fail.
///
/// Implemented for `()`, which always passes, and for [`Result<(), E>`]
/// where the [`Display`] of `E` becomes the failure message verbatim.
///
/// [`Display`]: fmt::Display
pub trait StepReturn {
    /// Normalizes this return value.
    ///
    /// # Errors
    ///
    /// If the handler reported a problem.
    fn into_step_result(self) -> Result<(), HandlerFailure>;
}

impl StepReturn for () {
    fn into_step_result(self) -> Result<(), HandlerFailure> {
        Ok(())
    }
}

impl<E: fmt::Display> StepReturn for Result<(), E> {
    fn into_step_result(self) -> Result<(), HandlerFailure> {
        self.map_err(|e| HandlerFailure::new(e.to_string()))
    }
}

/// Classifies a handler's normalized return value into a [`StepOutcome`].
#[must_use]
pub fn classify(returned: Result<(), HandlerFailure>) -> StepOutcome {
    match returned {
        Ok(()) => StepOutcome::Passed,
        Err(failure) => {
            tracing::debug!(error = failure.message(), "handler reported failure");
            StepOutcome::Failed(StepError::HandlerReportedFailure(
                failure.into_message(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArgumentError;

    #[test]
    fn unit_passes() {
        assert_eq!(classify(().into_step_result()), StepOutcome::Passed);
    }

    #[test]
    fn ok_passes() {
        let ret: Result<(), &str> = Ok(());
        assert!(classify(ret.into_step_result()).is_passed());
    }

    #[test]
    fn err_keeps_message_verbatim() {
        let message = "expected \"5\"\n\tgot: \"3\" ";
        let ret: Result<(), String> = Err(message.to_owned());
        let outcome = classify(ret.into_step_result());

        assert!(outcome.is_failed());
        assert_eq!(outcome.message().as_deref(), Some(message));
        assert_eq!(
            outcome.error_kind(),
            Some(ErrorKind::HandlerReportedFailure),
        );
    }

    #[test]
    fn custom_errors_use_display() {
        #[derive(Debug)]
        struct NotEnough(u8);

        impl fmt::Display for NotEnough {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "only {} cucumbers", self.0)
            }
        }

        let ret: Result<(), NotEnough> = Err(NotEnough(3));
        assert_eq!(
            classify(ret.into_step_result()).message().as_deref(),
            Some("only 3 cucumbers"),
        );
    }

    #[test]
    fn converts_to_and_from_result() {
        assert_eq!(
            StepOutcome::from(Ok::<_, StepError>(())),
            StepOutcome::Passed,
        );

        let err = StepError::from(ArgumentError::count_mismatch(1, 0));
        let outcome = StepOutcome::from(Err::<(), _>(err.clone()));
        assert_eq!(outcome.error(), Some(&err));
        assert_eq!(outcome.into_result(), Err(err));
        assert_eq!(StepOutcome::Passed.into_result(), Ok(()));
        assert_eq!(StepOutcome::Passed.message(), None);
    }
}
