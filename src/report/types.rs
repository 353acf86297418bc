// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Basic serializable types for Cucumber JSON format output.

use derive_more::with_trait::Display;
use serde::Serialize;

use crate::argument::DataTable;

/// Possible statuses of a reported step.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Handler has been called and reported no problem.
    #[display("passed")]
    Passed,

    /// Step attempt failed.
    #[display("failed")]
    Failed,

    /// Step hasn't been run, because a previous one didn't pass.
    #[display("skipped")]
    Skipped,

    /// No handler matches the step text.
    #[display("undefined")]
    Undefined,

    /// Handler reported its implementation as pending.
    #[display("pending")]
    Pending,

    /// More than one handler matches the step text.
    #[display("ambiguous")]
    Ambiguous,
}

impl Status {
    /// Indicates whether a step of this [`Status`] has been actually run, so
    /// its duration is meaningful.
    #[must_use]
    pub const fn is_timed(self) -> bool {
        !matches!(self, Self::Undefined | Self::Pending | Self::Skipped)
    }
}

/// [`Serialize`]able tag of a feature or a scenario.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Tag {
    /// Name of this [`Tag`], including its `@`.
    pub name: String,

    /// Line number of this [`Tag`] in a `.feature` file.
    pub line: usize,
}

impl Tag {
    /// Creates a new [`Tag`].
    #[must_use]
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self { name: name.into(), line }
    }
}

/// [`Serialize`]able comment of a feature file.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Comment {
    /// Text of this [`Comment`].
    pub value: String,

    /// Line number of this [`Comment`] in a `.feature` file.
    pub line: usize,
}

impl Comment {
    /// Creates a new [`Comment`].
    #[must_use]
    pub fn new(value: impl Into<String>, line: usize) -> Self {
        Self { value: value.into(), line }
    }
}

/// [`Serialize`]able doc string of a step.
#[derive(Clone, Debug, Serialize)]
pub struct DocString {
    /// Content of the doc string.
    pub value: String,

    /// Media type of the doc string, empty if none.
    pub content_type: String,

    /// Line number of the doc string in a `.feature` file.
    pub line: usize,
}

/// [`Serialize`]able row of a step's data table.
#[derive(Clone, Debug, Serialize)]
pub struct DataTableRow {
    /// Cell values of this row.
    pub cells: Vec<String>,
}

impl DataTableRow {
    /// Converts every row of the given [`DataTable`], header included.
    pub fn from_table(table: &DataTable) -> Vec<Self> {
        table.raw().iter().map(|cells| Self { cells: cells.clone() }).collect()
    }
}

/// [`Serialize`]able definition a step matched.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Match {
    /// `path:line` of the matched definition.
    pub location: String,
}

/// [`Serialize`]able result of running a step.
#[derive(Clone, Debug, Serialize)]
pub struct RunResult {
    /// [`Status`] of this running result.
    pub status: Status,

    /// Error message of a failed step (if any).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Execution time in nanoseconds, like `cucumber-jvm` reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

/// [`Serialize`]able step.
#[derive(Clone, Debug, Serialize)]
pub struct Step {
    /// Keyword of this [`Step`], including its trailing space.
    pub keyword: String,

    /// Text of this [`Step`].
    pub name: String,

    /// Line number of this [`Step`] in a `.feature` file.
    pub line: usize,

    /// [`DocString`] argument of this [`Step`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_string: Option<DocString>,

    /// Definition this [`Step`] matched.
    pub r#match: Match,

    /// [`RunResult`] of this [`Step`].
    pub result: RunResult,

    /// Data table argument of this [`Step`].
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<DataTableRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serialization() {
        for (status, expected) in [
            (Status::Passed, "\"passed\""),
            (Status::Failed, "\"failed\""),
            (Status::Skipped, "\"skipped\""),
            (Status::Undefined, "\"undefined\""),
            (Status::Pending, "\"pending\""),
            (Status::Ambiguous, "\"ambiguous\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), expected);
            assert_eq!(format!("\"{status}\""), expected);
        }
    }

    #[test]
    fn run_result_omits_absent_fields() {
        let result = RunResult {
            status: Status::Undefined,
            error_message: None,
            duration: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({"status": "undefined"}));
    }

    #[test]
    fn step_serializes_match_keyword() {
        let step = Step {
            keyword: "Given ".into(),
            name: "there are 5 cucumbers".into(),
            line: 4,
            doc_string: None,
            r#match: Match { location: "steps.rs:10".into() },
            result: RunResult {
                status: Status::Passed,
                error_message: None,
                duration: Some(1000),
            },
            rows: vec![],
        };

        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["match"]["location"], "steps.rs:10");
        assert_eq!(json["result"]["duration"], 1000);
        assert!(json.get("rows").is_none());
        assert!(json.get("doc_string").is_none());
    }

    #[test]
    fn table_rows_keep_header() {
        let table = DataTable::from(vec![vec!["name", "age"], vec!["Bob", "3"]]);
        let rows = DataTableRow::from_table(&table);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells, ["name", "age"]);
    }
}
