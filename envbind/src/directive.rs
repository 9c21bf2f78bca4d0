//! Parsing of `"<variable>[,<default>]"` field directives

/// A parsed field directive.
///
/// Only the first comma separates the variable name from the default
/// literal; any later comma is part of the default. Neither part is trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    variable: &'a str,
    default: &'a str,
}

impl<'a> Directive<'a> {
    /// Parse a raw directive.
    ///
    /// Returns `None` for an empty directive, which marks the field as unbound.
    pub fn parse(raw: &'a str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        let (variable, default) = raw.split_once(',').unwrap_or((raw, ""));
        Some(Self { variable, default })
    }

    /// Name of the environment variable to read.
    pub fn variable(&self) -> &'a str {
        self.variable
    }

    /// Fallback literal; empty when the directive has no comma.
    pub fn default_literal(&self) -> &'a str {
        self.default
    }
}
