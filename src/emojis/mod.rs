//! Codepoint-level helpers that don't need an alias table

/// Canonical `1F1EC-1F1E7`-style keys for codepoint sequences
pub mod codepoint_key;
/// Regional indicator flags like 🇬🇧
pub mod flags;
