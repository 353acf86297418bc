// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Scenario elements of Cucumber JSON format.

use serde::Serialize;

use super::{
    feature::cuke_id,
    input::{ScenarioReport, StepReport},
    types::{DataTableRow, DocString, Match, RunResult, Status, Step, Tag},
};

/// [`Serialize`]able scenario, or a single row of a scenario outline.
#[derive(Clone, Debug, Serialize)]
pub struct Element {
    /// Identifier of this [`Element`]: `feature;scenario`, followed by
    /// `;examples;row` for outline rows. Doesn't have to be unique.
    pub id: String,

    /// Scenario keyword.
    pub keyword: String,

    /// Scenario name.
    pub name: String,

    /// Scenario description.
    pub description: String,

    /// Line of the scenario, or of the examples row for outline rows.
    pub line: usize,

    /// Type of this [`Element`]. Always `scenario`.
    pub r#type: &'static str,

    /// Feature tags, followed by scenario and examples tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    /// [`Step`]s of the scenario.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

impl Element {
    /// Creates a new [`Element`] of the given feature.
    pub fn new(
        feature_id: &str,
        feature_uri: &str,
        feature_tags: &[Tag],
        scenario: &ScenarioReport,
    ) -> Self {
        let mut id = format!("{feature_id};{}", cuke_id(&scenario.name));
        let mut line = scenario.line;
        let mut tags = feature_tags.to_vec();
        tags.extend(scenario.tags.iter().cloned());

        if let Some(example) = &scenario.example {
            id = format!("{id};{};{}", cuke_id(&example.name), example.index + 2);
            line = example.line;
            tags.extend(example.tags.iter().cloned());
        }

        let row_line = scenario.example.as_ref().map(|ex| ex.line);
        Self {
            id,
            keyword: scenario.keyword.clone(),
            name: scenario.name.clone(),
            description: scenario.description.clone(),
            line,
            r#type: "scenario",
            tags,
            steps: scenario
                .steps
                .iter()
                .map(|s| step(feature_uri, row_line, s))
                .collect(),
        }
    }
}

/// Converts a [`StepReport`] into a [`Step`].
///
/// Steps of outline rows are reported at the row's line. Undefined and
/// pending steps are matched to their own `uri:line`.
fn step(uri: &str, row_line: Option<usize>, report: &StepReport) -> Step {
    let status = report.result.status;
    let location = if matches!(status, Status::Undefined | Status::Pending) {
        format!("{uri}:{}", report.line)
    } else {
        report.location.clone().unwrap_or_default()
    };

    Step {
        keyword: report.keyword.clone(),
        name: report.text.clone(),
        line: row_line.unwrap_or(report.line),
        doc_string: report.docstring.as_ref().map(|(doc, line)| DocString {
            value: doc.content().to_owned(),
            content_type: doc.content_type().unwrap_or_default().to_owned(),
            line: *line,
        }),
        r#match: Match { location },
        result: RunResult {
            status,
            error_message: report.result.error_message.clone(),
            duration: report
                .result
                .duration
                .filter(|_| status.is_timed())
                .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)),
        },
        rows: report
            .table
            .as_ref()
            .map(DataTableRow::from_table)
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        argument,
        report::input::{ExampleRow, StepResult},
    };

    fn scenario() -> ScenarioReport {
        ScenarioReport {
            keyword: "Scenario".into(),
            name: "Eating cucumbers".into(),
            line: 5,
            tags: vec![Tag::new("@slow", 4)],
            ..ScenarioReport::default()
        }
    }

    #[test]
    fn plain_scenario() {
        let el = Element::new("eat", "eat.feature", &[Tag::new("@fruit", 1)], &scenario());

        assert_eq!(el.id, "eat;eating-cucumbers");
        assert_eq!(el.line, 5);
        assert_eq!(el.tags, [Tag::new("@fruit", 1), Tag::new("@slow", 4)]);
    }

    #[test]
    fn outline_row() {
        let mut sc = scenario();
        sc.example = Some(ExampleRow {
            name: "Some Amounts".into(),
            index: 1,
            line: 12,
            tags: vec![Tag::new("@row", 9)],
        });
        sc.steps = vec![StepReport::new(
            "Given ",
            "there are 5 cucumbers",
            6,
            StepResult::skipped(),
        )];

        let el = Element::new("eat", "eat.feature", &[], &sc);

        assert_eq!(el.id, "eat;eating-cucumbers;some-amounts;3");
        assert_eq!(el.line, 12);
        assert_eq!(el.tags, [Tag::new("@slow", 4), Tag::new("@row", 9)]);
        assert_eq!(el.steps[0].line, 12);
    }

    #[test]
    fn undefined_step_matches_itself() {
        let report = StepReport::new("Then ", "nothing", 7, StepResult::undefined())
            .with_location("ignored.rs:1");

        let st = step("eat.feature", None, &report);
        assert_eq!(st.r#match.location, "eat.feature:7");
        assert_eq!(st.result.duration, None);
    }

    #[test]
    fn run_step_keeps_duration_and_arguments() {
        let report = StepReport::new(
            "Given ",
            "a doc",
            3,
            StepResult::from_outcome(
                &crate::StepOutcome::Passed,
                Some(Duration::from_micros(2)),
            ),
        )
        .with_location("steps.rs:20")
        .with_docstring(
            argument::DocString::new("hello").with_content_type(" json "),
            4,
        );

        let st = step("doc.feature", None, &report);
        assert_eq!(st.r#match.location, "steps.rs:20");
        assert_eq!(st.result.duration, Some(2000));

        let doc = st.doc_string.unwrap();
        assert_eq!(doc.value, "hello");
        assert_eq!(doc.content_type, "json");
        assert_eq!(doc.line, 4);
    }
}
