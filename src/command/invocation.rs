// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Script lines and argument extraction

use std::fmt;

use crate::config::constants::COMMAND_PREFIX;

/// One command line from a performance script
///
/// Owned by the host's playback engine; the command tracer only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    text: String,
    line: usize,
}

impl CommandInvocation {
    /// Create an invocation from its text and source line number
    pub fn new(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            line,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Text following `prefix`, with surrounding whitespace trimmed
    ///
    /// When the text does not start with `prefix`, as many characters as the
    /// prefix has are dropped instead, matching the playback engine's own
    /// positional extraction. Text shorter than the prefix yields `""`.
    ///
    /// ```rust
    /// use perfspan::CommandInvocation;
    ///
    /// let invocation = CommandInvocation::new("%openFile src/Main.kt WARMUP", 3);
    /// assert_eq!(invocation.argument("%openFile"), "src/Main.kt WARMUP");
    /// ```
    pub fn argument(&self, prefix: &str) -> &str {
        let rest = match self.text.strip_prefix(prefix) {
            Some(rest) => rest,
            None => {
                let skip = prefix.chars().count();
                match self.text.char_indices().nth(skip) {
                    Some((offset, _)) => &self.text[offset..],
                    None => "",
                }
            }
        };
        rest.trim()
    }
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.line, self.text)
    }
}

/// Recognized prefix for a command name (`%` followed by the name)
///
/// ```rust
/// assert_eq!(perfspan::command_prefix("typing"), "%typing");
/// ```
pub fn command_prefix(name: &str) -> String {
    format!("{COMMAND_PREFIX}{name}")
}
