// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Source location of a step handler definition.

use derive_more::with_trait::{Debug, Display};

/// Location of a [`Handler`] definition in source code.
///
/// [`Handler`]: super::Handler
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[display("{path}:{line}:{column}")]
pub struct Location {
    /// Path to the file where the handler is defined.
    pub path: &'static str,

    /// Line of the file where the handler is defined.
    pub line: u32,

    /// Column of the file where the handler is defined.
    pub column: u32,
}

impl Location {
    /// Creates a new [`Location`] with the given `path`, `line` and `column`.
    #[must_use]
    pub const fn new(path: &'static str, line: u32, column: u32) -> Self {
        Self { path, line, column }
    }

    /// Captures the [`Location`] of the caller.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let loc = std::panic::Location::caller();
        Self::new(loc.file(), loc.line(), loc.column())
    }

    /// Renders this [`Location`] as `path:line`, the way Cucumber JSON
    /// reports expect a `match.location`.
    #[must_use]
    pub fn to_match_location(&self) -> String {
        format!("{}:{}", self.path, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_full_position() {
        let loc = Location::new("tests/steps.rs", 42, 10);
        assert_eq!(loc.to_string(), "tests/steps.rs:42:10");
        assert_eq!(loc.to_match_location(), "tests/steps.rs:42");
    }

    #[test]
    fn captures_caller() {
        let (loc, line) = (Location::caller(), line!());
        assert_eq!(loc.path, file!());
        assert_eq!(loc.line, line);
    }

    #[test]
    fn orders_by_path_then_line() {
        const FIRST: Location = Location::new("a.rs", 2, 1);

        assert!(FIRST < Location::new("b.rs", 1, 1));
        assert!(FIRST < Location::new("a.rs", 3, 1));
        assert!(FIRST > Location::new("a.rs", 1, 9));
    }
}
