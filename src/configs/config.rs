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

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::loadable::{deserialize, normalize_paths, Format, Loadable, LoadingError, ResultAnyway};
use crate::tables::alias_table::{AliasMap, AliasTable};

/// Describes how an [AliasTable] is assembled.
///
/// ```json
/// {
///     "tables": ["gemoji.json", "slack.csv"],
///     "aliases": {":party:": "🥳"}
/// }
/// ```
/// If an alias occurs in multiple tables, the first one wins. `aliases` are added last.
/// Relative table paths are relative to the config file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct AliasConfig {
    #[serde(default)]
    pub tables: Vec<PathBuf>,
    #[serde(default)]
    pub aliases: AliasMap,
}

impl AliasConfig {
    fn normalize_paths(&mut self, root_dir: &Path) {
        normalize_paths(&mut self.tables, root_dir);
    }

    /// Loads all tables and combines them.
    ///
    /// Even if some of the tables couldn't be loaded, the table built from the remaining ones is
    /// returned (alongside the errors). Conflicting aliases are only logged.
    pub fn build_table(&self) -> ResultAnyway<AliasTable, LoadingError> {
        let mut table = AliasTable::new();
        let mut errors = Vec::new();

        for path in &self.tables {
            match AliasTable::from_file(path) {
                Ok(loaded) => table.extend_preserve_own(loaded).iter()
                    .for_each(|err| warn!("{:?}: {}", path, err)),
                Err(err) => {
                    error!("Couldn't load {:?}: {}", path, err);
                    errors.push(err);
                }
            }
        }
        for (alias, code) in &self.aliases {
            if let Err(err) = table.append_alias(alias.as_str(), code.as_str()) {
                warn!("Skipping configured alias: {}", err);
            }
        }
        table.rebuild_reverse();

        if errors.is_empty() {
            Ok(table)
        } else {
            Err((table, errors.into()))
        }
    }
}

impl Loadable for AliasConfig {
    fn from_file(file: &Path) -> Result<Self, LoadingError> {
        let reader = std::fs::File::open(file)?;
        let reader = std::io::BufReader::new(reader);
        let mut config = Self::from_reader_with_format(reader, Format::for_file(file))?;
        if let Some(parent) = file.parent() {
            config.normalize_paths(parent);
        }
        Ok(config)
    }

    fn from_reader_with_format<R>(reader: R, format: Format) -> Result<Self, LoadingError>
        where R: Read {
        deserialize(reader, format)
    }
}
