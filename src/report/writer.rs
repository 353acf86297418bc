// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Core JSON writer implementation.

use std::io;

use itertools::Itertools as _;
use serde::Serialize as _;
use serde_json::ser::PrettyFormatter;

use crate::error::ReportResult;

use super::{feature::Feature, input::FeatureReport};

/// [Cucumber JSON format][1] writer outputting JSON to an [`io::Write`]
/// implementor.
///
/// [1]: https://github.com/cucumber/cucumber-json-schema
#[derive(Clone, Debug)]
pub struct Json<Out: io::Write> {
    /// [`io::Write`] implementor to output [JSON][1] into.
    ///
    /// [1]: https://github.com/cucumber/cucumber-json-schema
    output: Out,
}

impl<Out: io::Write> Json<Out> {
    /// Creates a new [`Json`] writer outputting [JSON][1] into the given
    /// `output`.
    ///
    /// [1]: https://github.com/cucumber/cucumber-json-schema
    #[must_use]
    pub const fn new(output: Out) -> Self {
        Self { output }
    }

    /// Writes the given `features` as a single [JSON][1] document, indented
    /// with 4 spaces and followed by a newline.
    ///
    /// # Errors
    ///
    /// If serializing or writing into the output fails.
    ///
    /// [1]: https://github.com/cucumber/cucumber-json-schema
    pub fn write(&mut self, features: &[FeatureReport]) -> ReportResult<()> {
        let features = build(features);
        tracing::debug!(features = features.len(), "writing Cucumber JSON");

        let mut ser = serde_json::Serializer::with_formatter(
            &mut self.output,
            PrettyFormatter::with_indent(b"    "),
        );
        features.serialize(&mut ser)?;

        self.output.write_all(b"\n")?;
        self.output.flush()?;
        Ok(())
    }

    /// Returns the underlying output.
    #[must_use]
    pub fn into_inner(self) -> Out {
        self.output
    }
}

/// Builds [`Serialize`]able [`Feature`]s out of the given `features`,
/// ordered by their names.
///
/// [`Serialize`]: serde::Serialize
#[must_use]
pub fn build(features: &[FeatureReport]) -> Vec<Feature> {
    features
        .iter()
        .sorted_by(|a, b| a.name.cmp(&b.name))
        .map(Feature::new)
        .collect()
}
