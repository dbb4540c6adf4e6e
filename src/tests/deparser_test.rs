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

use crate::deparser::{deparse, deparse_all, longest_match, normalized_span};
use crate::parser::parse;
use crate::tables::alias_table::AliasTable;

fn table() -> AliasTable {
    vec![
        (":pizza:", "🍕"),
        (":+1:", "👍"),
        (":thumbsup:", "👍"),
        (":+1::skin-tone-4:", "👍🏾"),
        (":woman:", "👩"),
        (":woman_technologist:", "👩‍💻"),
        (":regional_indicator_g:", "🇬"),
        (":flag-gb:", "🇬🇧"),
        (":heart:", "❤️"),
        (":copyright:", "©"),
    ].into_iter().collect()
}

#[test]
fn test_deparse_single_emojis() {
    let table = table();
    assert_eq!(deparse(&table, "🍕"), ":pizza:");
    assert_eq!(deparse(&table, "I like 🍕!"), "I like :pizza:!");
    assert_eq!(deparse(&table, "🍕🍕"), ":pizza::pizza:");
    assert_eq!(deparse(&table, "❤️"), ":heart:");
}

#[test]
fn test_deparse_without_emojis() {
    let table = table();
    for text in &["", "text", "Größe: 10:30", "tabs\tand\nnewlines", ":pizza:"] {
        assert_eq!(deparse(&table, text), *text);
    }
}

#[test]
fn test_longest_match_wins() {
    let table = table();
    assert_eq!(deparse(&table, "🇬🇧"), ":flag-gb:");
    assert_eq!(deparse(&table, "🇬"), ":regional_indicator_g:");
    assert_eq!(deparse(&table, "👍🏾"), ":+1::skin-tone-4:");
    assert_eq!(deparse(&table, "👩‍💻 and 👩"), ":woman_technologist: and :woman:");
}

#[test]
fn test_shared_codes() {
    let table = table();
    // :thumbsup: has been inserted after :+1:
    assert_eq!(deparse(&table, "👍"), ":thumbsup:");
    assert_eq!(parse(&table, ":+1:"), "👍");
}

#[test]
fn test_unknown_emojis() {
    let table = table();
    assert_eq!(deparse(&table, "🦄"), "🦄");
    assert_eq!(deparse(&table, "🦄 🍕"), "🦄 :pizza:");
    // The pending run keeps growing until something that is not an emoji ends it
    assert_eq!(deparse(&table, "🦄🍕"), "🦄🍕");
    assert_eq!(deparse(&table, "a🦄b"), "a🦄b");
    // A skin tone without a base stays as it is
    assert_eq!(deparse(&table, "🏾"), "🏾");
}

#[test]
fn test_non_emoji_codes() {
    let table = table();
    // Codes below U+1000 are only matched on their own
    assert_eq!(deparse(&table, "© 2021"), ":copyright: 2021");
}

#[test]
fn test_spans() {
    let table = table();
    assert_eq!(normalized_span("👩‍💻!"), "👩‍💻");
    assert_eq!(normalized_span("🍕"), "🍕");
    assert_eq!(normalized_span(""), "");

    assert_eq!(longest_match(&table, "👩‍💻"), Some((":woman_technologist:", "👩‍💻".len())));
    assert_eq!(longest_match(&table, "👩‍🦰"), Some((":woman:", "👩".len())));
    assert_eq!(longest_match(&table, "🦄"), None);
    assert_eq!(longest_match(&table, ""), None);
}

#[test]
fn test_round_trip() {
    let table = table();
    for alias in &[":pizza:", ":woman_technologist:", ":flag-gb:", ":+1::skin-tone-4:", ":heart:"] {
        assert_eq!(deparse(&table, &parse(&table, alias)), *alias);
    }
    let text = "Dinner: :pizza: in :flag-gb: :heart:";
    assert_eq!(deparse(&table, &parse(&table, text)), text);
}

#[test]
fn test_deparse_all() {
    let table = table();
    let lines = vec![String::from("🍕"), String::from("🇬🇧🍕")];
    assert_eq!(deparse_all(&table, &lines), vec![":pizza:", ":flag-gb::pizza:"]);
}

#[test]
fn test_long_emoji_runs() {
    let table = table();
    // 👩‍💻 is the longest code in the table
    assert_eq!(table.longest_code_len(), "👩‍💻".len());

    let pizzas = "🍕".repeat(5000);
    assert_eq!(deparse(&table, &pizzas), ":pizza:".repeat(5000));

    let mixed = "👩‍💻👍🏾🇬🇧".repeat(2000);
    assert_eq!(deparse(&table, &mixed), ":woman_technologist::+1::skin-tone-4::flag-gb:".repeat(2000));
}
