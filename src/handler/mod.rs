// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Step handler descriptors and their invocation.

mod into_handler;
pub mod location;

use std::{
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

use derive_more::with_trait::Debug;

use crate::{
    argument::RawArgument,
    config::{Config, PanicPolicy},
    convert::{Value, convert},
    error::StepError,
    outcome::{HandlerFailure, StepOutcome, classify},
    parameter::ParameterKind,
};

pub use self::{
    into_handler::{ErasedFn, IntoHandler},
    location::Location,
};

/// Step handler along with the [`ParameterKind`]s it declares.
///
/// Immutable once built and cheap to [`Clone`], so may be shared between
/// threads and invoked concurrently with distinct arguments.
#[derive(Clone, Debug)]
pub struct Handler {
    /// Declared [`ParameterKind`]s in parameter order.
    kinds: Vec<ParameterKind>,

    /// Erased function receiving converted [`Value`]s in parameter order.
    #[debug(skip)]
    call: Arc<ErasedFn>,

    /// [`Location`] of this [`Handler`] definition.
    location: Option<Location>,
}

impl Handler {
    /// Creates a new [`Handler`] out of the declared `kinds` and an already
    /// erased function.
    ///
    /// The function receives exactly one [`Value`] per declared kind, in the
    /// declared order. Only this constructor is able to declare a
    /// [`ParameterKind::Unsupported`] parameter, for which every invocation
    /// fails without calling the function.
    #[must_use]
    pub fn new<F>(kinds: impl IntoIterator<Item = ParameterKind>, f: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<(), HandlerFailure> + Send + Sync + 'static,
    {
        Self {
            kinds: kinds.into_iter().collect(),
            call: Arc::new(f),
            location: None,
        }
    }

    /// Creates a new [`Handler`] out of a typed function.
    ///
    /// ```rust
    /// # use cucumber_invoke::{Handler, RawArgument};
    /// #
    /// let handler = Handler::from_fn(|count: i32, what: String| {
    ///     if count == 5 && what == "cucumbers" {
    ///         Ok(())
    ///     } else {
    ///         Err(format!("expected 5 cucumbers, got {count} {what}"))
    ///     }
    /// });
    ///
    /// let outcome =
    ///     handler.invoke(&[RawArgument::text("5"), RawArgument::text("cucumbers")]);
    /// assert!(outcome.is_passed());
    /// ```
    #[must_use]
    pub fn from_fn<Args, F: IntoHandler<Args>>(f: F) -> Self {
        Self { kinds: F::kinds(), call: f.into_erased(), location: None }
    }

    /// Attaches the [`Location`] of this [`Handler`] definition.
    #[must_use]
    pub const fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Returns the declared [`ParameterKind`]s in parameter order.
    #[must_use]
    pub fn kinds(&self) -> &[ParameterKind] {
        &self.kinds
    }

    /// Returns the number of declared parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.kinds.len()
    }

    /// Returns the [`Location`] of this [`Handler`] definition, if known.
    #[must_use]
    pub const fn location(&self) -> Option<Location> {
        self.location
    }

    /// Returns the `path:line` of this [`Handler`] definition, as used for a
    /// `match.location` of Cucumber JSON reports.
    #[must_use]
    pub fn match_location(&self) -> Option<String> {
        self.location.as_ref().map(Location::to_match_location)
    }

    /// Invokes this [`Handler`] with the default [`Config`].
    ///
    /// See [`Handler::invoke_with()`] for details.
    #[must_use]
    pub fn invoke(&self, args: &[RawArgument]) -> StepOutcome {
        self.invoke_with(&Config::default(), args)
    }

    /// Converts `args` into the declared parameters and invokes this
    /// [`Handler`] exactly once with them.
    ///
    /// If any argument fails to convert, the function is never called and
    /// the first failure is returned. A panic of the function is reported as
    /// [`StepError::Panic`] unless the [`Config::panic_policy`] is
    /// [`PanicPolicy::Propagate`].
    #[must_use]
    pub fn invoke_with(&self, config: &Config, args: &[RawArgument]) -> StepOutcome {
        let span = tracing::debug_span!("step", params = self.kinds.len());
        let _entered = span.enter();

        let values = match convert(&self.kinds, args) {
            Ok(values) => values,
            Err(err) => return StepOutcome::Failed(err.into()),
        };

        match config.panic_policy {
            PanicPolicy::Propagate => classify((self.call)(values)),
            PanicPolicy::Capture => {
                match panic::catch_unwind(AssertUnwindSafe(|| (self.call)(values)))
                {
                    Ok(returned) => classify(returned),
                    Err(payload) => {
                        let err = StepError::from_panic_payload(&*payload);
                        tracing::debug!(error = %err, "handler panicked");
                        StepOutcome::Failed(err)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::error::ErrorKind;

    fn counting<F>(f: F) -> (Handler, Arc<AtomicUsize>)
    where
        F: Fn(Vec<Value>) -> Result<(), HandlerFailure> + Send + Sync + 'static,
    {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let handler = Handler::new([ParameterKind::Int32], move |values| {
            _ = counter.fetch_add(1, Ordering::SeqCst);
            f(values)
        });
        (handler, calls)
    }

    #[test]
    fn declares_kinds_of_typed_fn() {
        let handler = Handler::from_fn(|_: i8, _: f64, _: String, _: Vec<u8>| {});
        assert_eq!(
            handler.kinds(),
            [
                ParameterKind::Int8,
                ParameterKind::Float64,
                ParameterKind::Text,
                ParameterKind::ByteSequence,
            ],
        );
        assert_eq!(handler.arity(), 4);
        assert_eq!(Handler::from_fn(|| {}).arity(), 0);
    }

    #[test]
    fn calls_once_with_converted_values() {
        let (handler, calls) = counting(|values| {
            assert_eq!(values, [Value::I32(-7)]);
            Ok(())
        });

        assert!(handler.invoke(&[RawArgument::text("-7")]).is_passed());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn never_calls_on_conversion_failure() {
        let (handler, calls) = counting(|_| Ok(()));

        let outcome = handler.invoke(&[RawArgument::text("seven")]);
        assert_eq!(outcome.error_kind(), Some(ErrorKind::ConversionFailure));

        let outcome = handler.invoke(&[]);
        assert_eq!(outcome.error_kind(), Some(ErrorKind::ArgumentCountMismatch));

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn captures_panics() {
        let handler = Handler::from_fn(|n: i32| {
            if n > 3 {
                panic!("too many cucumbers: {n}");
            }
        });

        assert!(handler.invoke(&[RawArgument::text("3")]).is_passed());

        let outcome = handler.invoke(&[RawArgument::text("4")]);
        assert_eq!(outcome.error_kind(), Some(ErrorKind::Panic));
        assert_eq!(
            outcome.message().as_deref(),
            Some("step panicked: too many cucumbers: 4"),
        );
    }

    #[test]
    fn propagates_panics_when_configured() {
        let handler = Handler::from_fn(|| -> Result<(), String> {
            panic!("boom");
        });
        let config = Config::default().panic_policy(PanicPolicy::Propagate);

        let res = panic::catch_unwind(AssertUnwindSafe(|| {
            handler.invoke_with(&config, &[])
        }));
        assert!(res.is_err());
    }

    #[test]
    fn renders_match_location() {
        let handler = Handler::from_fn(|| {});
        assert_eq!(handler.match_location(), None);

        let handler =
            handler.with_location(Location::new("tests/steps.rs", 12, 5));
        assert_eq!(handler.match_location().as_deref(), Some("tests/steps.rs:12"));
    }

    #[test]
    fn is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<Handler>();
    }
}
