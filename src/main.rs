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

use std::io::{stdin, BufRead};
use std::path::Path;
use std::process::exit;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{error, info};

use emoji_alias::configs::config::AliasConfig;
use emoji_alias::deparser::deparse_all;
use emoji_alias::emojis::flags::{country_code_of, regional_indicator_pair};
use emoji_alias::loadable::Loadable;
use emoji_alias::parser::parse_all;
use emoji_alias::AliasTable;

fn main() {
    env_logger::init();

    let matches = App::new("emoji_alias")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Constantin A. <emoji.builder@c1710.de>")
        .about("Translates between :aliases: and emojis")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(Arg::with_name("tables")
            .short("t")
            .long("table")
            .value_name("FILE")
            .help("An alias table (JSON, YAML or CSV)")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1))
        .arg(Arg::with_name("config")
            .short("c")
            .long("config")
            .value_name("FILE")
            .help("A config file listing the alias tables to use")
            .takes_value(true))
        .subcommand(SubCommand::with_name("parse")
            .about("Replaces :aliases: with emojis")
            .arg(Arg::with_name("text")
                .help("The text to translate. Reads from stdin if omitted")
                .multiple(true)))
        .subcommand(SubCommand::with_name("deparse")
            .about("Replaces emojis with their :alias:")
            .arg(Arg::with_name("text")
                .help("The text to translate. Reads from stdin if omitted")
                .multiple(true)))
        .subcommand(SubCommand::with_name("find")
            .about("Looks up the emoji for an alias")
            .arg(Arg::with_name("alias").required(true)))
        .subcommand(SubCommand::with_name("reverse")
            .about("Looks up the alias for an emoji")
            .arg(Arg::with_name("code").required(true)))
        .subcommand(SubCommand::with_name("flag")
            .about("Converts between country codes and flags")
            .arg(Arg::with_name("country").required(true)))
        .get_matches();

    match matches.subcommand() {
        ("parse", Some(sub_matches)) => {
            let table = load_table(&matches);
            translate(sub_matches, |lines| parse_all(&table, lines));
        }
        ("deparse", Some(sub_matches)) => {
            let table = load_table(&matches);
            translate(sub_matches, |lines| deparse_all(&table, lines));
        }
        ("find", Some(sub_matches)) => {
            let table = load_table(&matches);
            let alias = sub_matches.value_of("alias").unwrap_or_default();
            match table.find(alias) {
                Some(code) => println!("{}", code),
                None => fail(&format!("Unknown alias: {}", alias)),
            }
        }
        ("reverse", Some(sub_matches)) => {
            let table = load_table(&matches);
            let code = sub_matches.value_of("code").unwrap_or_default();
            match table.find_reverse(code) {
                Some(alias) => println!("{}", alias),
                None => fail(&format!("Unknown emoji: {}", code)),
            }
        }
        ("flag", Some(sub_matches)) => {
            let country = sub_matches.value_of("country").unwrap_or_default();
            match country_code_of(country) {
                Some(country_code) => println!("{}", country_code),
                None => match regional_indicator_pair(country) {
                    Ok(flag) => println!("{}", flag),
                    Err(err) => fail(&err.to_string()),
                }
            }
        }
        _ => unreachable!("A sub command is required"),
    }
}

/// Combines the config and all tables given on the command line
fn load_table(matches: &ArgMatches) -> AliasTable {
    let mut config = match matches.value_of("config") {
        Some(path) => match AliasConfig::from_file(Path::new(path)) {
            Ok(config) => config,
            Err(err) => fail(&format!("Couldn't load config {}: {}", path, err)),
        },
        None => AliasConfig::default(),
    };
    if let Some(tables) = matches.values_of("tables") {
        config.tables.extend(tables.map(Into::into));
    }
    if config.tables.is_empty() && config.aliases.is_empty() {
        fail("No alias table given (use --table or --config)");
    }

    let table = match config.build_table() {
        Ok(table) => table,
        // Some aliases are better than none
        Err((table, _)) if !table.is_empty() => table,
        Err((_, err)) => fail(&format!("Couldn't load any alias table: {}", err)),
    };
    info!("Using {} aliases", table.len());
    table
}

fn translate<F>(matches: &ArgMatches, translation: F)
    where F: Fn(&[String]) -> Vec<String> {
    let lines: Vec<String> = match matches.values_of("text") {
        Some(text) => vec![text.collect::<Vec<_>>().join(" ")],
        None => stdin().lock().lines()
            .filter_map(|line| line.map_err(|err| error!("{}", err)).ok())
            .collect(),
    };
    translation(&lines).iter()
        .for_each(|line| println!("{}", line));
}

fn fail(message: &str) -> ! {
    error!("{}", message);
    eprintln!("{}", message);
    exit(1)
}
