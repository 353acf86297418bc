// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Typed invocation of [Cucumber] step handlers.
//!
//! Once an executor has matched a step's text against a step definition, it
//! holds a [`Handler`] and an ordered list of [`RawArgument`]s: the regex
//! captures as text, followed by the step's data table or doc string, if
//! any. This crate converts those arguments into the parameters the handler
//! declares, calls the handler exactly once and classifies what it returned
//! into a [`StepOutcome`].
//!
//! ```rust
//! use cucumber_invoke::{ErrorKind, Handler, RawArgument};
//!
//! let eat = Handler::from_fn(|count: i32| {
//!     if count <= 12 {
//!         Ok(())
//!     } else {
//!         Err(format!("cannot eat {count} cucumbers"))
//!     }
//! });
//!
//! assert!(eat.invoke(&[RawArgument::text("5")]).is_passed());
//!
//! let outcome = eat.invoke(&[RawArgument::text("20")]);
//! assert_eq!(outcome.message().as_deref(), Some("cannot eat 20 cucumbers"));
//!
//! let outcome = eat.invoke(&[RawArgument::text("five")]);
//! assert_eq!(outcome.error_kind(), Some(ErrorKind::ConversionFailure));
//! ```
//!
//! With the `output-json` feature (enabled by default), executed features
//! may be written as a [Cucumber JSON][1] report via [`report::Json`].
//!
//! [Cucumber]: https://cucumber.io
//! [1]: https://github.com/cucumber/cucumber-json-schema

#![forbid(non_ascii_idents, unsafe_code)]
#![warn(
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::pedantic,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::str_to_string,
    clippy::todo,
    clippy::unwrap_used,
    missing_docs,
    unreachable_pub
)]
#![cfg_attr(
    test,
    allow(clippy::expect_used, clippy::unwrap_used, clippy::str_to_string)
)]

pub mod argument;
pub mod config;
pub mod convert;
pub mod error;
pub mod handler;
pub mod outcome;
pub mod parameter;
#[cfg(feature = "output-json")]
pub mod report;

#[doc(inline)]
pub use self::{
    argument::{
        ArgumentTag, DataTable, DocString, DocStringRef, RawArgument, TableRef,
    },
    config::{Cli, Config, PanicPolicy},
    convert::{Value, convert, convert_one},
    error::{ArgumentError, ErrorKind, StepError},
    handler::{Handler, IntoHandler, Location},
    outcome::{HandlerFailure, StepOutcome, StepReturn, classify},
    parameter::{Parameter, ParameterKind},
};
