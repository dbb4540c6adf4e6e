/// The bidirectional alias table
pub mod alias_table;
pub mod errors;
#[cfg(test)]
mod tests;
