// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Multi-line text block attached to a step.

use derive_more::with_trait::Display;

/// Multi-line text block of a step, with an optional media type.
///
/// ```rust
/// use cucumber_invoke::DocString;
///
/// let doc = DocString::new("{\"a\": 1}").with_content_type(" json ");
/// assert_eq!(doc.content_type(), Some("json"));
/// assert_eq!(doc.to_string(), "{\"a\": 1}");
/// ```
#[derive(Clone, Debug, Default, Display, Eq, PartialEq)]
#[display("{content}")]
pub struct DocString {
    content: String,
    content_type: Option<String>,
}

impl DocString {
    /// Creates a new [`DocString`] without a media type.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into(), content_type: None }
    }

    /// Sets the media type of this [`DocString`].
    ///
    /// Surrounding whitespace is trimmed, and a blank value clears it.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl AsRef<str>) -> Self {
        let trimmed = content_type.as_ref().trim();
        self.content_type = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        self
    }

    /// Returns the content of this [`DocString`].
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the media type of this [`DocString`], if any.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

impl From<&str> for DocString {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for DocString {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}
