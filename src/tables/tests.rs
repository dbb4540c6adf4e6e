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

use crate::tables::alias_table::{AliasMap, AliasTable};
use crate::tables::errors::AliasTableError;

fn table() -> AliasTable {
    vec![
        (":pizza:", "🍕"),
        (":+1:", "👍"),
        (":thumbsup:", "👍"),
    ].into_iter().collect()
}

#[test]
fn test_find() {
    let table = table();
    assert_eq!(table.find(":pizza:").unwrap(), "🍕");
    assert_eq!(table.find("pizza"), None);
    assert_eq!(table.find(":flag-us:").unwrap(), "🇺🇸");
    assert!(table.exists(":+1:"));
    assert!(table.exists(":flag-gb:"));
    assert!(!table.exists(":flag-gbr:"));
    assert!(!table.exists(""));
}

#[test]
fn test_find_reverse() {
    let table = table();
    assert_eq!(table.find_reverse("🍕"), Some(":pizza:"));
    assert_eq!(table.find_reverse("👍"), Some(":thumbsup:"));
    // Flags are only derived in one direction
    assert_eq!(table.find_reverse("🇺🇸"), None);
}

#[test]
fn test_maps() {
    let table = table();
    assert_eq!(table.map().len(), 3);
    assert_eq!(table.reversed_map().len(), 2);
    assert_eq!(table.map().keys().collect::<Vec<_>>(), vec![":pizza:", ":+1:", ":thumbsup:"]);
    assert_eq!(table.reversed_map().get("👍").unwrap(), ":thumbsup:");
}

#[test]
fn test_last_alias_wins() {
    let mut aliases = AliasMap::new();
    aliases.insert(String::from(":thumbsup:"), String::from("👍"));
    aliases.insert(String::from(":+1:"), String::from("👍"));

    let table = AliasTable::from_map(aliases);
    assert_eq!(table.find_reverse("👍"), Some(":+1:"));
}

#[test]
fn test_append_alias() {
    let mut table = table();
    table.append_alias(":taco:", "🌮").unwrap();

    assert_eq!(table.find(":taco:").unwrap(), "🌮");
    assert_eq!(table.len(), 4);
    // The reverse mapping is not updated until it is rebuilt
    assert_eq!(table.find_reverse("🌮"), None);
    table.rebuild_reverse();
    assert_eq!(table.find_reverse("🌮"), Some(":taco:"));
}

#[test]
fn test_append_conflict() {
    let mut table = table();
    table.append_alias(":taco:", "🌮").unwrap();
    let before = table.clone();

    let result = table.append_alias(":taco:", "🌯");
    assert_eq!(result, Err(AliasTableError::AliasConflict {
        alias: String::from(":taco:"),
        existing_code: String::from("🌮"),
    }));
    assert_eq!(table, before);
    assert_eq!(result.unwrap_err().to_string(), r#"emoji already exists: ":taco:" => "🌮""#);
}

#[test]
fn test_append_invalid() {
    let mut table = table();
    let before = table.clone();

    assert_eq!(table.append_alias(" bad :alias", "🙃"),
               Err(AliasTableError::InvalidAliasFormat(String::from(" bad :alias"))));
    assert_eq!(table.append_alias(":tab\t:", "🙃"),
               Err(AliasTableError::InvalidAliasFormat(String::from(":tab\t:"))));
    assert_eq!(table.append_alias(":nbsp\u{a0}:", "🙃"),
               Err(AliasTableError::InvalidAliasFormat(String::from(":nbsp\u{a0}:"))));
    assert_eq!(table, before);
}

#[test]
fn test_conflict_before_format() {
    let mut table: AliasTable = vec![(":a b:", "🅰")].into_iter().collect();
    assert!(matches!(table.append_alias(":a b:", "🅱"), Err(AliasTableError::AliasConflict { .. })));
}

#[test]
fn test_extend_preserve_own() {
    let mut table = table();
    let other: AliasTable = vec![(":pizza:", "🍔"), (":taco:", "🌮")].into_iter().collect();

    let rejected = table.extend_preserve_own(other);
    assert_eq!(rejected.len(), 1);
    assert_eq!(table.find(":pizza:").unwrap(), "🍕");
    assert_eq!(table.find(":taco:").unwrap(), "🌮");
}

#[test]
fn test_empty_table() {
    let table = AliasTable::new();
    assert!(table.is_empty());
    assert_eq!(table.parse(":pizza: 🍕"), ":pizza: 🍕");
    assert_eq!(table.deparse(":pizza: 🍕"), ":pizza: 🍕");
    assert_eq!(table.parse(":flag-gb:"), "🇬🇧");
}
