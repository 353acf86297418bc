// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [Cucumber JSON format][1] report of executed features.
//!
//! An executor collects [`FeatureReport`]s while running, with each
//! [`StepResult`] made out of the [`StepOutcome`] of the invoked [`Handler`],
//! and hands them to a [`Json`] writer once finished.
//!
//! [`Handler`]: crate::Handler
//! [`StepOutcome`]: crate::StepOutcome
//! [1]: https://github.com/cucumber/cucumber-json-schema

pub mod element;
pub mod feature;
pub mod input;
pub mod types;
pub mod writer;

#[doc(inline)]
pub use self::{
    element::Element,
    feature::Feature,
    input::{ExampleRow, FeatureReport, ScenarioReport, StepReport, StepResult},
    types::{Comment, Status, Tag},
    writer::{Json, build},
};
