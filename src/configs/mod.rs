/// Which alias tables to load and how to combine them
pub mod config;
