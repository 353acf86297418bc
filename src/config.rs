// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Invocation policy and its CLI options.

use std::str::FromStr;

use smart_default::SmartDefault;

/// Configuration of [`Handler::invoke_with()`].
///
/// [`Handler::invoke_with()`]: crate::Handler::invoke_with
#[derive(Clone, Copy, Debug, Eq, PartialEq, SmartDefault)]
pub struct Config {
    /// What to do when a handler panics.
    #[default(PanicPolicy::Capture)]
    pub panic_policy: PanicPolicy,
}

impl Config {
    /// Sets the [`PanicPolicy`] of this [`Config`].
    #[must_use]
    pub const fn panic_policy(mut self, policy: PanicPolicy) -> Self {
        self.panic_policy = policy;
        self
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self { panic_policy: cli.panics }
    }
}

/// CLI options of step invocation.
///
/// Meant to be flattened into a test runner's own CLI.
#[derive(Clone, Copy, Debug, SmartDefault, clap::Args)]
#[group(skip)]
pub struct Cli {
    /// Policy for panicking step handlers.
    ///
    /// `capture` reports a panic as a failed step, `propagate` resumes
    /// unwinding into the test runner.
    #[arg(
        long,
        value_name = "capture|propagate",
        default_value = "capture",
        global = true
    )]
    #[default(PanicPolicy::Capture)]
    pub panics: PanicPolicy,
}

/// Policy of handling a panic inside a step handler.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PanicPolicy {
    /// Report the panic as [`StepError::Panic`].
    ///
    /// [`StepError::Panic`]: crate::StepError::Panic
    Capture,

    /// Resume unwinding into the caller.
    Propagate,
}

impl FromStr for PanicPolicy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "capture" => Ok(Self::Capture),
            "propagate" => Ok(Self::Propagate),
            _ => Err("possible options: capture, propagate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Opts {
        #[command(flatten)]
        invoke: Cli,
    }

    #[test]
    fn captures_by_default() {
        assert_eq!(Config::default().panic_policy, PanicPolicy::Capture);
        assert_eq!(Cli::default().panics, PanicPolicy::Capture);
    }

    #[test]
    fn parses_policy() {
        assert_eq!("Propagate".parse::<PanicPolicy>(), Ok(PanicPolicy::Propagate));
        assert_eq!("capture".parse::<PanicPolicy>(), Ok(PanicPolicy::Capture));
        assert!("abort".parse::<PanicPolicy>().is_err());
    }

    #[test]
    fn flattens_into_runner_cli() {
        let opts = Opts::try_parse_from(["runner"]).unwrap();
        assert_eq!(Config::from(&opts.invoke), Config::default());

        let opts =
            Opts::try_parse_from(["runner", "--panics", "propagate"]).unwrap();
        assert_eq!(
            Config::from(&opts.invoke),
            Config::default().panic_policy(PanicPolicy::Propagate),
        );

        assert!(Opts::try_parse_from(["runner", "--panics", "abort"]).is_err());
    }
}
