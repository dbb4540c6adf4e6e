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
//! Translation between emoji aliases (`:pizza:`) and the emojis themselves (🍕).
//!
//! The central type is [tables::alias_table::AliasTable] which is built once (e.g. with
//! [loadable::Loadable]) and then used by [parser::parse] and [deparser::deparse].

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// Helpers for single codepoints and flags
pub mod emojis;
/// The alias table and its errors
pub mod tables;
/// Replaces `:alias:`es with emojis
pub mod parser;
/// Replaces emojis with their `:alias:`
pub mod deparser;
/// Loading alias tables from JSON, YAML or CSV files
pub mod loadable;
pub mod configs;

pub use crate::deparser::deparse;
pub use crate::parser::parse;
pub use crate::tables::alias_table::AliasTable;
pub use crate::tables::errors::AliasTableError;

#[cfg(test)]
mod tests;
