// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Executed features as an executor hands them over for reporting.

use std::time::Duration;

use crate::{
    argument::{DataTable, DocString},
    outcome::StepOutcome,
};

use super::types::{Comment, Status, Tag};

/// Executed feature.
#[derive(Clone, Debug, Default)]
pub struct FeatureReport {
    /// Path of the `.feature` file.
    pub uri: String,

    /// `Feature` keyword as written in the file.
    pub keyword: String,

    /// Name of the feature.
    pub name: String,

    /// Free-form description of the feature.
    pub description: String,

    /// Line of the feature keyword.
    pub line: usize,

    /// Tags of the feature.
    pub tags: Vec<Tag>,

    /// Comments of the whole `.feature` file.
    pub comments: Vec<Comment>,

    /// Executed scenarios, one per outline row for scenario outlines.
    pub scenarios: Vec<ScenarioReport>,
}

/// Executed scenario, or a single row of a scenario outline.
#[derive(Clone, Debug, Default)]
pub struct ScenarioReport {
    /// `Scenario` keyword as written in the file.
    pub keyword: String,

    /// Name of the scenario, with outline placeholders already substituted.
    pub name: String,

    /// Free-form description of the scenario.
    pub description: String,

    /// Line of the scenario keyword.
    pub line: usize,

    /// Tags of the scenario.
    pub tags: Vec<Tag>,

    /// Examples row this scenario has been expanded from, if it's an outline.
    pub example: Option<ExampleRow>,

    /// Executed steps.
    pub steps: Vec<StepReport>,
}

/// Row of a scenario outline's `Examples` table.
#[derive(Clone, Debug, Default)]
pub struct ExampleRow {
    /// Name of the `Examples` block.
    pub name: String,

    /// Zero-based index of the row in the table body, header excluded.
    pub index: usize,

    /// Line of the row.
    pub line: usize,

    /// Tags of the `Examples` block.
    pub tags: Vec<Tag>,
}

/// Executed step.
#[derive(Clone, Debug)]
pub struct StepReport {
    /// Step keyword including its trailing space, like `Given `.
    pub keyword: String,

    /// Step text, with outline placeholders already substituted.
    pub text: String,

    /// Line of the step.
    pub line: usize,

    /// Doc string argument along with the line it starts at.
    pub docstring: Option<(DocString, usize)>,

    /// Data table argument.
    pub table: Option<DataTable>,

    /// `path:line` of the matched handler definition, if any matched.
    pub location: Option<String>,

    /// Result of the step.
    pub result: StepResult,
}

impl StepReport {
    /// Creates a new [`StepReport`] without arguments and matched location.
    #[must_use]
    pub fn new(
        keyword: impl Into<String>,
        text: impl Into<String>,
        line: usize,
        result: StepResult,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            text: text.into(),
            line,
            docstring: None,
            table: None,
            location: None,
            result,
        }
    }

    /// Attaches a doc string argument starting at the given `line`.
    #[must_use]
    pub fn with_docstring(mut self, docstring: DocString, line: usize) -> Self {
        self.docstring = Some((docstring, line));
        self
    }

    /// Attaches a data table argument.
    #[must_use]
    pub fn with_table(mut self, table: DataTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Attaches the `path:line` of the matched handler definition.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Result of a single step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StepResult {
    /// [`Status`] of the step.
    pub status: Status,

    /// Failure message, if the step failed.
    pub error_message: Option<String>,

    /// Time the step took.
    pub duration: Option<Duration>,
}

impl StepResult {
    /// Creates a [`StepResult`] out of a [`StepOutcome`] of an invoked
    /// handler.
    #[must_use]
    pub fn from_outcome(outcome: &StepOutcome, duration: Option<Duration>) -> Self {
        Self {
            status: if outcome.is_passed() {
                Status::Passed
            } else {
                Status::Failed
            },
            error_message: outcome.message(),
            duration,
        }
    }

    /// Result of a step no handler matched.
    #[must_use]
    pub const fn undefined() -> Self {
        Self::unrun(Status::Undefined)
    }

    /// Result of a step whose handler is still pending.
    #[must_use]
    pub const fn pending() -> Self {
        Self::unrun(Status::Pending)
    }

    /// Result of a step skipped after a previous one didn't pass.
    #[must_use]
    pub const fn skipped() -> Self {
        Self::unrun(Status::Skipped)
    }

    /// Result of a step more than one handler matched.
    #[must_use]
    pub fn ambiguous(message: impl Into<String>) -> Self {
        Self {
            status: Status::Ambiguous,
            error_message: Some(message.into()),
            duration: None,
        }
    }

    const fn unrun(status: Status) -> Self {
        Self { status, error_message: None, duration: None }
    }
}
