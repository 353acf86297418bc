// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Raw, unconverted step arguments.
//!
//! - [`RawArgument`]: a value extracted by a step matcher
//! - [`DataTable`]: tabular argument attached to a step
//! - [`DocString`]: multi-line text block attached to a step

pub mod data_table;
pub mod docstring;

use std::{fmt, sync::Arc};

pub use self::{data_table::DataTable, docstring::DocString};

/// Possibly absent reference to a step's [`DataTable`].
pub type TableRef = Option<Arc<DataTable>>;

/// Possibly absent reference to a step's [`DocString`].
pub type DocStringRef = Option<Arc<DocString>>;

/// Unconverted argument of a matched step.
///
/// Composite arguments are shared via [`Arc`], so passing them through to a
/// handler never copies the underlying data.
#[derive(Clone, Debug, PartialEq)]
pub enum RawArgument {
    /// Text captured from a step's text.
    Text(String),

    /// [`DataTable`] attached to a step, or [`None`] if the step has none.
    Table(TableRef),

    /// [`DocString`] attached to a step, or [`None`] if the step has none.
    DocString(DocStringRef),
}

impl RawArgument {
    /// Creates a [`RawArgument::Text`].
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates a [`RawArgument::Table`] holding the given [`DataTable`].
    #[must_use]
    pub fn table(table: impl Into<DataTable>) -> Self {
        Self::Table(Some(Arc::new(table.into())))
    }

    /// Creates a [`RawArgument::DocString`] holding the given [`DocString`].
    #[must_use]
    pub fn docstring(docstring: impl Into<DocString>) -> Self {
        Self::DocString(Some(Arc::new(docstring.into())))
    }

    /// Creates an absent [`RawArgument::Table`].
    #[must_use]
    pub const fn no_table() -> Self {
        Self::Table(None)
    }

    /// Creates an absent [`RawArgument::DocString`].
    #[must_use]
    pub const fn no_docstring() -> Self {
        Self::DocString(None)
    }

    /// Returns the [`ArgumentTag`] of this [`RawArgument`].
    #[must_use]
    pub const fn tag(&self) -> ArgumentTag {
        match self {
            Self::Text(_) => ArgumentTag::Text,
            Self::Table(_) => ArgumentTag::Table,
            Self::DocString(_) => ArgumentTag::DocString,
        }
    }

    /// Returns the text of a [`RawArgument::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Table(_) | Self::DocString(_) => None,
        }
    }
}

impl From<&str> for RawArgument {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for RawArgument {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DataTable> for RawArgument {
    fn from(table: DataTable) -> Self {
        Self::table(table)
    }
}

impl From<DocString> for RawArgument {
    fn from(docstring: DocString) -> Self {
        Self::docstring(docstring)
    }
}

/// Discriminant of a [`RawArgument`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ArgumentTag {
    /// [`RawArgument::Text`].
    Text,

    /// [`RawArgument::Table`].
    Table,

    /// [`RawArgument::DocString`].
    DocString,
}

impl fmt::Display for ArgumentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Table => "table",
            Self::DocString => "docstring",
        })
    }
}
