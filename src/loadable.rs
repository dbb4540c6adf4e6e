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
//! Loading alias tables (and configs) from files.
//!
//! Supported formats:
//! - JSON and YAML: an object that maps aliases to the emoji itself, e.g. `{":pizza:": "🍕"}`
//! - CSV: one alias per line, followed by its codepoints, e.g. `:pizza:,1F355`.
//!   Lines starting with `#` are ignored.
//!
//! Entries are added with [AliasTable::append_alias]; rejected entries are logged and skipped.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::emojis::codepoint_key::code_from_key;
use crate::tables::alias_table::{AliasMap, AliasTable};

/// The format that is assumed if the file extension doesn't tell
pub const DEFAULT_EXTENSION: &str = "json";

/// The file formats that can be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Csv,
}

impl Format {
    pub fn for_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            "csv" => Some(Format::Csv),
            _ => None
        }
    }

    /// Determines the format of a file by its extension, falling back to [DEFAULT_EXTENSION]
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use emoji_alias::loadable::Format;
    ///
    /// assert_eq!(Format::for_file(Path::new("aliases.YML")), Format::Yaml);
    /// assert_eq!(Format::for_file(Path::new("aliases")), Format::Json);
    /// ```
    pub fn for_file(file: &Path) -> Self {
        file.extension()
            .and_then(|extension| Self::for_extension(extension.to_string_lossy().as_ref()))
            .unwrap_or_else(|| {
                warn!("No appropriate format found for {:?}. Assuming {}", file, DEFAULT_EXTENSION);
                Self::default()
            })
    }
}

impl Default for Format {
    fn default() -> Self {
        Format::Json
    }
}

/// Something that can be loaded from a file in one of the supported [Format]s
pub trait Loadable: Sized {
    fn from_file(file: &Path) -> Result<Self, LoadingError> {
        let reader = File::open(file)?;
        let reader = BufReader::new(reader);
        Self::from_reader_with_format(reader, Format::for_file(file))
    }

    fn from_reader<R>(reader: R) -> Result<Self, LoadingError>
        where R: Read {
        Self::from_reader_with_format(reader, Format::default())
    }

    fn from_reader_with_format<R>(reader: R, format: Format) -> Result<Self, LoadingError>
        where R: Read;
}

/// Deserializes anything that is JSON or YAML
pub fn deserialize<R, T>(reader: R, format: Format) -> Result<T, LoadingError>
    where R: Read, T: DeserializeOwned {
    match format {
        Format::Json => serde_json::from_reader(reader)
            .map_err(|err| LoadingError::Serde(Box::new(err))),
        Format::Yaml => serde_yaml::from_reader(reader)
            .map_err(|err| LoadingError::Serde(Box::new(err))),
        Format::Csv => Err(LoadingError::UnsupportedFormat(format)),
    }
}

impl Loadable for AliasTable {
    /// Loads an alias table. The reverse mapping is built once all entries have been added.
    /// # Example
    /// ```
    /// use emoji_alias::AliasTable;
    /// use emoji_alias::loadable::{Format, Loadable};
    ///
    /// let csv = "# alias,codepoints\n:pizza:,1F355\n:flag-gb:,1F1EC-1F1E7\n";
    /// let table = AliasTable::from_reader_with_format(csv.as_bytes(), Format::Csv).unwrap();
    ///
    /// assert_eq!(table.find(":pizza:").unwrap(), "🍕");
    /// assert_eq!(table.find_reverse("🇬🇧"), Some(":flag-gb:"));
    /// ```
    fn from_reader_with_format<R>(reader: R, format: Format) -> Result<Self, LoadingError>
        where R: Read {
        let entries = match format {
            Format::Csv => csv_entries(reader)?,
            Format::Json | Format::Yaml => deserialize::<R, AliasMap>(reader, format)?
                .into_iter()
                .collect(),
        };

        let mut table = AliasTable::new();
        for (alias, code) in entries {
            if let Err(err) = table.append_alias(alias, code) {
                warn!("Skipping alias: {}", err);
            }
        }
        table.rebuild_reverse();
        debug!("Loaded {} aliases ({:?})", table.len(), format);
        Ok(table)
    }
}

fn csv_entries<R>(reader: R) -> Result<Vec<(String, String)>, LoadingError>
    where R: Read {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() < 2 {
            warn!("Malformed record: {:?}", record);
            continue;
        }
        let alias = record[0].trim();
        match code_from_key(&record[1]) {
            Some(code) => entries.push((alias.to_owned(), code)),
            None => warn!("Malformed codepoints for {}: {:?}", alias, &record[1]),
        }
    }
    Ok(entries)
}

#[derive(Debug)]
pub enum LoadingError {
    Io(std::io::Error),
    Serde(Box<dyn Error>),
    Csv(csv::Error),
    /// The format can't be used for this kind of file
    UnsupportedFormat(Format),
    Multiple(Vec<LoadingError>),
}

impl Display for LoadingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LoadingError::Io(err) => Display::fmt(err, f),
            LoadingError::Serde(err) => Display::fmt(err, f),
            LoadingError::Csv(err) => Display::fmt(err, f),
            LoadingError::UnsupportedFormat(format) => write!(f, "unsupported format: {:?}", format),
            LoadingError::Multiple(errors) => {
                write!(f, "{} errors", errors.len())?;
                for err in errors {
                    write!(f, "; {}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl Error for LoadingError {}

impl From<std::io::Error> for LoadingError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for LoadingError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<Vec<LoadingError>> for LoadingError {
    fn from(mut errors: Vec<LoadingError>) -> Self {
        if errors.len() == 1 {
            if let Some(err) = errors.pop() {
                return err;
            }
        }
        Self::Multiple(errors)
    }
}

/// A result that carries a (possibly incomplete) value even if something went wrong
pub type ResultAnyway<T, E> = Result<T, (T, E)>;

/// Makes relative paths relative to `root_dir` instead of the working directory
pub fn normalize_paths(target_paths: &mut Vec<PathBuf>, root_dir: &Path) {
    target_paths.iter_mut()
        .for_each(|path| normalize_path(path, root_dir));
}

fn normalize_path(target_path: &mut PathBuf, root_dir: &Path) {
    if !target_path.has_root() {
        *target_path = root_dir.join(&target_path);
    }
}
