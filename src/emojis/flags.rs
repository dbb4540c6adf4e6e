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
//! Country flags are not stored in any alias table; they are derived from their
//! ISO 3166-1 code instead: each letter is mapped to its regional indicator symbol.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fmt;
use std::ops::RangeInclusive;

/// `'a' as u32 + FLAG_OFFSET` is `U+1F1E6 REGIONAL INDICATOR SYMBOL LETTER A`
const FLAG_OFFSET: u32 = 0x1f185;
const REGIONAL_INDICATORS: RangeInclusive<u32> = 0x1f1e6..=0x1f1ff;

const FLAG_ALIAS_PREFIX: &str = ":flag-";
const FLAG_ALIAS_SUFFIX: &str = ":";

/// An error that can occur while deriving a flag
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum FlagError {
    /// The input was not exactly two ASCII letters
    NotACountryCode(String),
}

impl Display for FlagError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FlagError::NotACountryCode(code) => write!(f, "not a two-letter country code: {:?}", code),
        }
    }
}

impl Error for FlagError {}

/// Derives the flag emoji for a two-letter country code (case-insensitive).
/// # Examples
/// ```
/// use emoji_alias::emojis::flags::regional_indicator_pair;
///
/// assert_eq!(regional_indicator_pair("gb").unwrap(), "\u{1f1ec}\u{1f1e7}");
/// assert_eq!(regional_indicator_pair("DE").unwrap(), "🇩🇪");
/// assert!(regional_indicator_pair("deu").is_err());
/// assert!(regional_indicator_pair("d1").is_err());
/// ```
pub fn regional_indicator_pair(country_code: &str) -> Result<String, FlagError> {
    if !is_country_code(country_code) {
        return Err(FlagError::NotACountryCode(country_code.to_owned()));
    }
    let flag: Option<String> = country_code.chars()
        .map(|letter| letter.to_ascii_lowercase() as u32 + FLAG_OFFSET)
        .map(char::from_u32)
        .collect();
    // Every lower case ASCII letter lands in the regional indicator block
    flag.ok_or_else(|| FlagError::NotACountryCode(country_code.to_owned()))
}

/// Returns the country code of a `:flag-XX:` alias.
///
/// The whole alias has to match, there's no searching inside of longer strings.
/// # Examples
/// ```
/// use emoji_alias::emojis::flags::flag_alias_country;
///
/// assert_eq!(flag_alias_country(":flag-de:"), Some("de"));
/// assert_eq!(flag_alias_country(":flag-DE:"), Some("DE"));
/// assert_eq!(flag_alias_country(":flag-deu:"), None);
/// assert_eq!(flag_alias_country("x:flag-de:"), None);
/// assert_eq!(flag_alias_country(":flag-de"), None);
/// ```
pub fn flag_alias_country(alias: &str) -> Option<&str> {
    alias.strip_prefix(FLAG_ALIAS_PREFIX)
        .and_then(|rest| rest.strip_suffix(FLAG_ALIAS_SUFFIX))
        .filter(|country_code| is_country_code(country_code))
}

/// Resolves a `:flag-XX:` alias to its flag emoji
pub fn flag_from_alias(alias: &str) -> Option<String> {
    flag_alias_country(alias)
        .and_then(|country_code| regional_indicator_pair(country_code).ok())
}

/// The inverse of [regional_indicator_pair]: Returns the (upper case) country code if the given
/// code consists of exactly two regional indicators.
/// # Examples
/// ```
/// use emoji_alias::emojis::flags::country_code_of;
///
/// assert_eq!(country_code_of("🇩🇪").unwrap(), "DE");
/// assert_eq!(country_code_of("🍕"), None);
/// assert_eq!(country_code_of("🇩"), None);
/// ```
pub fn country_code_of(code: &str) -> Option<String> {
    let codepoints: Vec<u32> = code.chars().map(|codepoint| codepoint as u32).collect();
    if codepoints.len() == 2
        && codepoints.iter().all(|codepoint| REGIONAL_INDICATORS.contains(codepoint)) {
        let country: String = codepoints.iter()
            .map(|codepoint| codepoint - FLAG_OFFSET)
            // We're in the ASCII range now
            .map(|codepoint| codepoint as u8 as char)
            .collect();
        Some(country.to_uppercase())
    } else {
        None
    }
}

fn is_country_code(country_code: &str) -> bool {
    country_code.len() == 2 && country_code.chars().all(|letter| letter.is_ascii_alphabetic())
}
