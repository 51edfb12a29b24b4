use console::style;
use std::fmt::Display;

/// Green bold: success checkmarks, acknowledgements
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// White bold: card titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: rules, secondary text
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Bold: emphasised field values
pub fn strong<D: Display>(text: D) -> String {
    style(text).bold().to_string()
}

/// Cyan bold: bullets, clause ids
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Yellow: pending edits, warnings
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Red bold: failure notifications
pub fn failure<D: Display>(text: D) -> String {
    style(text).red().bold().to_string()
}
