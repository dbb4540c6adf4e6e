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

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fmt;

/// An error that occurs when modifying an [AliasTable](crate::tables::alias_table::AliasTable).
///
/// In both cases the table has not been changed.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AliasTableError {
    /// The alias is already in the table. The code it's currently mapped to is included
    AliasConflict {
        alias: String,
        existing_code: String,
    },
    /// The alias contains whitespace and could therefore never be parsed
    InvalidAliasFormat(String),
}

impl Display for AliasTableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AliasTableError::AliasConflict { alias, existing_code } =>
                write!(f, "emoji already exists: {:?} => {:?}", alias, existing_code),
            AliasTableError::InvalidAliasFormat(alias) =>
                write!(f, "emoji alias is not valid: {:?}", alias),
        }
    }
}

impl Error for AliasTableError {}
