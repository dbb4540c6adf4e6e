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
//! Codepoint keys are the canonical, human readable form of a codepoint sequence:
//! Every codepoint as upper case hexadecimal number, joined by `-`.
//!
//! They are also used as a (rather crude) classification: Every codepoint whose key has at least
//! four digits (i.e. `>= U+1000`) is considered to be part of an emoji.

use itertools::Itertools;
use regex::Regex;

/// The smallest length of a key that is considered to be part of an emoji
const EMOJI_KEY_LENGTH: usize = 4;

/// Builds the key for a sequence of codepoints.
/// # Examples
/// ```
/// use emoji_alias::emojis::codepoint_key::codepoint_key;
///
/// assert_eq!(codepoint_key(vec!['\u{1f1ec}', '\u{1f1e7}']), "1F1EC-1F1E7");
/// assert_eq!(codepoint_key("a".chars()), "61");
/// assert_eq!(codepoint_key(vec![]), "");
/// ```
pub fn codepoint_key<I>(codepoints: I) -> String
    where I: IntoIterator<Item = char> {
    codepoints.into_iter()
        .map(|codepoint| format!("{:X}", codepoint as u32))
        .join("-")
}

/// Builds the key for every codepoint in the given string.
/// # Example
/// ```
/// use emoji_alias::emojis::codepoint_key::str_key;
///
/// assert_eq!(str_key("👍🏽"), "1F44D-1F3FD");
/// ```
pub fn str_key(code: &str) -> String {
    codepoint_key(code.chars())
}

/// Checks whether a single codepoint is in the range that is considered to belong to an emoji
/// # Examples
/// ```
/// use emoji_alias::emojis::codepoint_key::is_emoji_range;
///
/// assert!(is_emoji_range('🍕'));
/// assert!(is_emoji_range('\u{200d}'));
/// assert!(!is_emoji_range('a'));
/// assert!(!is_emoji_range('ä'));
/// ```
pub fn is_emoji_range(codepoint: char) -> bool {
    codepoint_key(Some(codepoint)).len() >= EMOJI_KEY_LENGTH
}

/// Converts a key back into the emoji text it describes.
///
/// Besides `-`, the codepoints may also be separated by `_` or spaces and may carry a `U+` prefix.
/// Returns `None` if the key has any other shape or if any codepoint is not a valid Unicode
/// scalar value.
/// # Examples
/// ```
/// use emoji_alias::emojis::codepoint_key::code_from_key;
///
/// assert_eq!(code_from_key("1F355").unwrap(), "🍕");
/// assert_eq!(code_from_key("1f1ec_1f1e7").unwrap(), "🇬🇧");
/// assert_eq!(code_from_key("U+1F44D U+1F3FD").unwrap(), "👍🏽");
/// assert_eq!(code_from_key("D800"), None);
/// assert_eq!(code_from_key("1F355 pizza"), None);
/// assert_eq!(code_from_key("  "), None);
/// ```
pub fn code_from_key(key: &str) -> Option<String> {
    lazy_static! {
        static ref HEX_SEQUENCE: Regex = Regex::new(r"[a-fA-F0-9]+").unwrap();
        static ref KEY: Regex = Regex::new(
            r"^\s*([uU]\+)?[a-fA-F0-9]{1,8}([-_ ]+([uU]\+)?[a-fA-F0-9]{1,8})*\s*$"
        ).unwrap();
    }

    if !KEY.is_match(key) {
        return None;
    }

    let code: Option<String> = HEX_SEQUENCE.find_iter(key)
        .map(|sequence| u32::from_str_radix(sequence.as_str(), 16).ok())
        .map(|codepoint| codepoint.and_then(char::from_u32))
        .collect();
    code.filter(|code| !code.is_empty())
}
