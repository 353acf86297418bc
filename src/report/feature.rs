// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Feature structure of Cucumber JSON format.

use serde::Serialize;

use super::{
    element::Element,
    input::FeatureReport,
    types::{Comment, Tag},
};

/// [`Serialize`]able feature.
#[derive(Clone, Debug, Serialize)]
pub struct Feature {
    /// Path of the `.feature` file.
    pub uri: String,

    /// Identifier of this [`Feature`], derived from its name.
    pub id: String,

    /// Feature keyword.
    pub keyword: String,

    /// Feature name.
    pub name: String,

    /// Feature description.
    pub description: String,

    /// Line of the feature keyword.
    pub line: usize,

    /// Comments of the `.feature` file, trimmed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,

    /// Feature tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    /// [`Element`]s of this [`Feature`] in execution order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<Element>,
}

impl Feature {
    /// Creates a new [`Feature`] out of the given [`FeatureReport`].
    pub fn new(feature: &FeatureReport) -> Self {
        let id = cuke_id(&feature.name);
        let elements = feature
            .scenarios
            .iter()
            .map(|sc| Element::new(&id, &feature.uri, &feature.tags, sc))
            .collect();

        Self {
            uri: feature.uri.clone(),
            id,
            keyword: feature.keyword.clone(),
            name: feature.name.clone(),
            description: feature.description.clone(),
            line: feature.line,
            comments: feature
                .comments
                .iter()
                .map(|c| Comment::new(c.value.trim(), c.line))
                .collect(),
            tags: feature.tags.clone(),
            elements,
        }
    }
}

/// Makes an identifier out of a feature, scenario or examples `name`.
///
/// Only lower-cases and replaces spaces with `-`, so other punctuation
/// survives as is.
pub(crate) fn cuke_id(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::input::ScenarioReport;

    #[test]
    fn ids_keep_punctuation() {
        assert_eq!(cuke_id("Eat Cucumbers"), "eat-cucumbers");
        assert_eq!(cuke_id("Tom's  big day!"), "tom's--big-day!");
        assert_eq!(cuke_id(""), "");
    }

    #[test]
    fn trims_comments_and_omits_empty_collections() {
        let feature = Feature::new(&FeatureReport {
            uri: "features/eat.feature".into(),
            keyword: "Feature".into(),
            name: "Eat Cucumbers".into(),
            line: 2,
            comments: vec![Comment::new("  # language: en \n", 1)],
            ..FeatureReport::default()
        });

        assert_eq!(feature.id, "eat-cucumbers");
        assert_eq!(feature.comments, [Comment::new("# language: en", 1)]);

        let json = serde_json::to_value(&feature).unwrap();
        assert!(json.get("tags").is_none());
        assert!(json.get("elements").is_none());
        assert_eq!(json["description"], "");
    }

    #[test]
    fn elements_inherit_feature_tags() {
        let feature = Feature::new(&FeatureReport {
            name: "Eat".into(),
            tags: vec![Tag::new("@wip", 1)],
            scenarios: vec![ScenarioReport {
                name: "first".into(),
                ..ScenarioReport::default()
            }],
            ..FeatureReport::default()
        });

        assert_eq!(feature.elements[0].id, "eat;first");
        assert_eq!(feature.elements[0].tags, [Tag::new("@wip", 1)]);
    }
}
