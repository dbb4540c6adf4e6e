/*
 * Copyright 2019 Constantin A. <emoji.builder@c1710.de>
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
 */
//! The lookup table between aliases and emoji codes.
//!
//! The table consists of two mappings:
//! - the primary mapping from aliases (`:pizza:`) to codes (`🍕`)
//! - the reverse mapping from codes to aliases, which is derived from the primary mapping
//!
//! Multiple aliases may share a code (`:+1:` and `:thumbsup:`), so the reverse mapping can only
//! hold one of them. It holds the alias that comes *last* in the insertion order of the primary
//! mapping.

use std::borrow::Cow;
use std::iter::FromIterator;

use indexmap::IndexMap;

use crate::deparser;
use crate::emojis::flags::flag_from_alias;
use crate::parser;
use crate::tables::errors::AliasTableError;

/// Maps aliases to codes, or codes to aliases
pub type AliasMap = IndexMap<String, String>;

/// A bidirectional lookup table for emoji aliases.
///
/// The table is meant to be built once and then shared for reading.
/// [AliasTable::append_alias] is the only modification and needs `&mut self`, so the borrow checker
/// already rules out modifications during lookups.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AliasTable {
    aliases: AliasMap,
    reversed: AliasMap,
    /// Length in bytes of the longest code in the reverse mapping
    longest_code: usize,
}

impl AliasTable {
    /// Creates a new, empty alias table
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from an existing alias map and derives the reverse mapping from it.
    /// # Example
    /// ```
    /// use emoji_alias::tables::alias_table::{AliasMap, AliasTable};
    ///
    /// let mut aliases = AliasMap::new();
    /// aliases.insert(String::from(":+1:"), String::from("👍"));
    /// aliases.insert(String::from(":thumbsup:"), String::from("👍"));
    ///
    /// let table = AliasTable::from_map(aliases);
    ///
    /// // The last alias for a code wins
    /// assert_eq!(table.find_reverse("👍"), Some(":thumbsup:"));
    /// ```
    pub fn from_map(aliases: AliasMap) -> Self {
        let mut table = Self {
            aliases,
            reversed: AliasMap::new(),
            longest_code: 0,
        };
        table.rebuild_reverse();
        table
    }

    /// Returns the code for an alias.
    ///
    /// If the alias is not in the table, it might still be a `:flag-XX:` alias, in which case
    /// the flag is derived from the country code.
    /// # Examples
    /// ```
    /// use emoji_alias::AliasTable;
    ///
    /// let table: AliasTable = vec![(":pizza:", "🍕")].into_iter().collect();
    ///
    /// assert_eq!(table.find(":pizza:").unwrap(), "🍕");
    /// assert_eq!(table.find(":flag-gb:").unwrap(), "🇬🇧");
    /// assert_eq!(table.find(":burger:"), None);
    /// ```
    pub fn find(&self, alias: &str) -> Option<Cow<'_, str>> {
        if let Some(code) = self.aliases.get(alias) {
            return Some(Cow::Borrowed(code.as_str()));
        }
        flag_from_alias(alias).map(Cow::Owned)
    }

    /// Checks whether [AliasTable::find] would succeed
    pub fn exists(&self, alias: &str) -> bool {
        self.find(alias).is_some()
    }

    /// Returns the alias for a code.
    ///
    /// Only the reverse mapping is used, so flags are only found if they've been added to the
    /// table explicitly.
    pub fn find_reverse(&self, code: &str) -> Option<&str> {
        self.reversed.get(code).map(String::as_str)
    }

    /// Adds a new alias to the table.
    ///
    /// **Note:** Only the primary mapping is changed. If the new alias should also be found by
    /// [AliasTable::find_reverse] (and therefore be used when deparsing),
    /// call [AliasTable::rebuild_reverse] afterwards.
    /// # Examples
    /// ```
    /// use emoji_alias::{AliasTable, AliasTableError};
    ///
    /// let mut table = AliasTable::new();
    /// table.append_alias(":pizza:", "🍕").unwrap();
    ///
    /// assert_eq!(table.append_alias(":pizza:", "🍔"), Err(AliasTableError::AliasConflict {
    ///     alias: String::from(":pizza:"),
    ///     existing_code: String::from("🍕"),
    /// }));
    /// assert_eq!(table.append_alias(":hot dog:", "🌭"),
    ///            Err(AliasTableError::InvalidAliasFormat(String::from(":hot dog:"))));
    ///
    /// assert_eq!(table.find(":pizza:").unwrap(), "🍕");
    /// assert_eq!(table.find_reverse("🍕"), None);
    /// table.rebuild_reverse();
    /// assert_eq!(table.find_reverse("🍕"), Some(":pizza:"));
    /// ```
    pub fn append_alias<A, C>(&mut self, alias: A, code: C) -> Result<(), AliasTableError>
        where A: Into<String>, C: Into<String> {
        let alias = alias.into();
        if let Some(existing_code) = self.aliases.get(&alias) {
            return Err(AliasTableError::AliasConflict {
                existing_code: existing_code.clone(),
                alias,
            });
        }
        if alias.chars().any(char::is_whitespace) {
            return Err(AliasTableError::InvalidAliasFormat(alias));
        }
        self.aliases.insert(alias, code.into());
        Ok(())
    }

    /// Appends all aliases of another table, keeping the own code for aliases that exist in both.
    ///
    /// Like [AliasTable::append_alias] this only changes the primary mapping.
    /// The rejected aliases are returned.
    pub fn extend_preserve_own(&mut self, other: AliasTable) -> Vec<AliasTableError> {
        other.aliases.into_iter()
            .filter_map(|(alias, code)| self.append_alias(alias, code).err())
            .collect()
    }

    /// Derives the reverse mapping from the primary mapping again.
    ///
    /// The aliases are processed in insertion order, so for shared codes the alias that has been
    /// inserted last wins.
    pub fn rebuild_reverse(&mut self) {
        let mut reversed = AliasMap::with_capacity(self.aliases.len());
        for (alias, code) in &self.aliases {
            reversed.insert(code.clone(), alias.clone());
        }
        debug!("Rebuilt reverse mapping: {} aliases, {} codes", self.aliases.len(), reversed.len());
        self.longest_code = reversed.keys().map(String::len).max().unwrap_or(0);
        self.reversed = reversed;
    }

    /// The length (in bytes) of the longest code that [AliasTable::find_reverse] can find.
    /// No longer text can ever have an alias.
    pub fn longest_code_len(&self) -> usize {
        self.longest_code
    }

    /// The primary mapping (alias → code)
    pub fn map(&self) -> &AliasMap {
        &self.aliases
    }

    /// The reverse mapping (code → alias)
    pub fn reversed_map(&self) -> &AliasMap {
        &self.reversed
    }

    /// The number of aliases in the table
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Replaces all known aliases in the text with their emoji. See [parser::parse]
    pub fn parse(&self, input: &str) -> String {
        parser::parse(self, input)
    }

    /// Replaces all known emojis in the text with their alias. See [deparser::deparse]
    pub fn deparse(&self, input: &str) -> String {
        deparser::deparse(self, input)
    }
}

impl<A, C> FromIterator<(A, C)> for AliasTable
    where A: Into<String>, C: Into<String> {
    /// Collects the aliases into a table.
    ///
    /// Unlike [AliasTable::append_alias], no checks are performed here: A duplicate alias
    /// replaces the code of the earlier one.
    fn from_iter<T: IntoIterator<Item = (A, C)>>(iter: T) -> Self {
        let aliases = iter.into_iter()
            .map(|(alias, code)| (alias.into(), code.into()))
            .collect();
        Self::from_map(aliases)
    }
}
