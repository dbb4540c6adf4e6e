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
//! Replaces emojis with their aliases.
//!
//! A single emoji may consist of several codepoints (flags, skin tones, ZWJ sequences, ...),
//! so a plain lookup per codepoint is not enough. Instead, codepoints are accumulated until they
//! match an entry in the reverse mapping. On a match, the longest run of emoji codepoints starting
//! at the same place that is still known to the table is used instead, so `👍🏽` becomes the alias
//! for the whole sequence and not the alias of `👍` followed by a stray skin tone.
//!
//! All offsets are byte offsets into the UTF-8 input.

use rayon::prelude::*;

use crate::emojis::codepoint_key::is_emoji_range;
use crate::tables::alias_table::AliasTable;

/// Replaces all emojis in the input that are known to the reverse mapping with their alias.
///
/// If multiple aliases share the same code, the one that won the reverse mapping is used.
/// Unknown emojis and everything else stay as they are; this never fails.
/// # Examples
/// ```
/// use emoji_alias::{AliasTable, deparse};
///
/// let table: AliasTable = vec![
///     (":+1:", "👍"),
///     (":+1::skin-tone-3:", "👍🏽"),
///     (":flag-gb:", "🇬🇧"),
/// ].into_iter().collect();
///
/// assert_eq!(deparse(&table, "Looks good 👍"), "Looks good :+1:");
/// assert_eq!(deparse(&table, "👍🏽👍"), ":+1::skin-tone-3::+1:");
/// assert_eq!(deparse(&table, "Tea in 🇬🇧?"), "Tea in :flag-gb:?");
/// assert_eq!(deparse(&table, "🦄 and text"), "🦄 and text");
/// ```
pub fn deparse(table: &AliasTable, input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    // Start of codepoints that are known to be part of an emoji, but didn't match yet
    let mut pending: Option<usize> = None;
    let mut position = 0;

    while let Some(codepoint) = input[position..].chars().next() {
        let run_start = pending.unwrap_or(position);
        let run_end = position + codepoint.len_utf8();

        if let Some(alias) = table.find_reverse(&input[run_start..run_end]) {
            let window = truncate(&input[run_start..], table.longest_code_len());
            let (alias, end) = match longest_match(table, normalized_span(window)) {
                Some((longest, length)) if run_start + length >= run_end =>
                    (longest, run_start + length),
                _ => (alias, run_end),
            };
            trace!("Replacing {} with {}", &input[run_start..end], alias);
            output.push_str(alias);
            pending = None;
            position = end;
        } else if is_emoji_range(codepoint) {
            pending = Some(run_start);
            position = run_end;
        } else {
            output.push_str(&input[run_start..run_end]);
            pending = None;
            position = run_end;
        }
    }

    if let Some(run_start) = pending {
        output.push_str(&input[run_start..]);
    }
    output
}

/// Deparses many independent texts in parallel
pub fn deparse_all<S>(table: &AliasTable, inputs: &[S]) -> Vec<String>
    where S: AsRef<str> + Sync {
    inputs.par_iter()
        .map(|input| deparse(table, input.as_ref()))
        .collect()
}

/// The longest prefix that only consists of emoji codepoints.
/// # Examples
/// ```
/// use emoji_alias::deparser::normalized_span;
///
/// assert_eq!(normalized_span("🇬🇧 and more"), "🇬🇧");
/// assert_eq!(normalized_span("text"), "");
/// ```
pub fn normalized_span(input: &str) -> &str {
    let end = input.char_indices()
        .find(|(_, codepoint)| !is_emoji_range(*codepoint))
        .map(|(index, _)| index)
        .unwrap_or_else(|| input.len());
    &input[..end]
}

/// Finds the longest prefix of `span` that has an alias.
///
/// Returns the alias and the length of the matched prefix in bytes.
pub fn longest_match<'t>(table: &'t AliasTable, span: &str) -> Option<(&'t str, usize)> {
    let mut end = span.len();
    while end > 0 {
        if let Some(alias) = table.find_reverse(&span[..end]) {
            return Some((alias, end));
        }
        end = span[..end].char_indices()
            .next_back()
            .map(|(index, _)| index)
            .unwrap_or(0);
    }
    None
}

/// Cuts the text to at most `max_len` bytes, without splitting a codepoint
fn truncate(text: &str, max_len: usize) -> &str {
    if text.len() <= max_len {
        return text;
    }
    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
