// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types of this crate, organized by responsibility.
//!
//! - [`argument`] - conversion of raw arguments into handler parameters
//! - [`step`] - failures of a whole step attempt
//! - [`report`] - writing of Cucumber JSON reports

pub mod argument;
#[cfg(feature = "output-json")]
pub mod report;
pub mod step;

pub use self::{
    argument::{ArgumentError, ArgumentResult},
    step::{ErrorKind, StepError, StepResult, coerce_panic_payload},
};
#[cfg(feature = "output-json")]
pub use self::report::{ReportError, ReportResult};
