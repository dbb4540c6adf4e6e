/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 */
//! Replaces emoji aliases (`:pizza:`) with the emoji they stand for (`🍕`).
//!
//! The text is scanned once from left to right by a small state machine:
//! Outside of an alias, every character is copied. A `:` starts collecting a candidate alias,
//! which ends with the next `:`. If the candidate is unknown, that closing `:` immediately starts
//! the next candidate, so `::pizza:` still finds `:pizza:`.
//! Aliases never contain whitespace, so whitespace aborts a candidate.

use rayon::prelude::*;

use crate::tables::alias_table::AliasTable;

const ALIAS_DELIMITER: char = ':';

/// The state of the alias scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    /// Not inside of an alias
    Outside,
    /// A `:` has been read; holds everything read since then
    Collecting(String),
}

impl Default for ScanState {
    fn default() -> Self {
        ScanState::Outside
    }
}

/// Performs one transition of the scanner and writes everything that is final to `output`.
/// # Examples
/// ```
/// use emoji_alias::AliasTable;
/// use emoji_alias::parser::{step, ScanState};
///
/// let table: AliasTable = vec![(":pizza:", "🍕")].into_iter().collect();
/// let mut output = String::new();
///
/// let state = step(ScanState::Collecting(String::from("burger")), ':', &table, &mut output);
///
/// // The unknown candidate is written out and the `:` starts a new one
/// assert_eq!(output, ":burger");
/// assert_eq!(state, ScanState::Collecting(String::new()));
/// ```
pub fn step(state: ScanState, codepoint: char, table: &AliasTable, output: &mut String) -> ScanState {
    match state {
        ScanState::Outside if codepoint == ALIAS_DELIMITER => ScanState::Collecting(String::new()),
        ScanState::Outside => {
            output.push(codepoint);
            ScanState::Outside
        }
        ScanState::Collecting(candidate) if codepoint.is_whitespace() => {
            output.push(ALIAS_DELIMITER);
            output.push_str(&candidate);
            output.push(codepoint);
            ScanState::Outside
        }
        ScanState::Collecting(candidate) if codepoint == ALIAS_DELIMITER => {
            let alias = format!("{delim}{}{delim}", candidate, delim = ALIAS_DELIMITER);
            match table.find(&alias) {
                Some(code) => {
                    trace!("Replacing {} with {}", alias, code);
                    output.push_str(&code);
                    ScanState::Outside
                }
                None => {
                    output.push(ALIAS_DELIMITER);
                    output.push_str(&candidate);
                    ScanState::Collecting(String::new())
                }
            }
        }
        ScanState::Collecting(mut candidate) => {
            candidate.push(codepoint);
            ScanState::Collecting(candidate)
        }
    }
}

/// Writes out whatever is left once the input has ended
pub fn finish(state: ScanState, output: &mut String) {
    if let ScanState::Collecting(candidate) = state {
        output.push(ALIAS_DELIMITER);
        output.push_str(&candidate);
    }
}

/// Replaces all aliases in the input that are known to the table with their emoji.
///
/// Unknown aliases stay as they are; this never fails.
/// # Examples
/// ```
/// use emoji_alias::{AliasTable, parse};
///
/// let table: AliasTable = vec![(":pizza:", "🍕")].into_iter().collect();
///
/// assert_eq!(parse(&table, "I like :pizza:!"), "I like 🍕!");
/// assert_eq!(parse(&table, "::pizza::"), ":🍕:");
/// assert_eq!(parse(&table, ":flag-gb:"), "🇬🇧");
/// assert_eq!(parse(&table, ":notarealalias:"), ":notarealalias:");
/// assert_eq!(parse(&table, "10:30 :pizza time"), "10:30 :pizza time");
/// ```
pub fn parse(table: &AliasTable, input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let state = input.chars()
        .fold(ScanState::Outside, |state, codepoint| step(state, codepoint, table, &mut output));
    finish(state, &mut output);
    output
}

/// Parses many independent texts in parallel
pub fn parse_all<S>(table: &AliasTable, inputs: &[S]) -> Vec<String>
    where S: AsRef<str> + Sync {
    inputs.par_iter()
        .map(|input| parse(table, input.as_ref()))
        .collect()
}
