//! Identifier to package symbol name conversion.
//!
//! Callers name icons the way they appear in markup (`"shopping-cart"`). The
//! icon package exports them as PascalCase symbols with an `Icon` suffix
//! (`ShoppingCartIcon`).

use super::alias;

/// Suffix appended to every package symbol name.
pub const SYMBOL_SUFFIX: &str = "Icon";

/// Separator between words in an identifier.
pub const SEGMENT_SEPARATOR: char = '-';

/// An identifier expressed in the icon package's symbol convention.
///
/// # Examples
///
/// ```
/// use mui_icon::{resolve_name, to_symbol_name};
///
/// assert_eq!(to_symbol_name("shopping-cart").as_str(), "ShoppingCartIcon");
/// assert_eq!(resolve_name("github").as_str(), "GitHubIcon");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedName(String);

impl ResolvedName {
    /// Wrap an already-formatted symbol name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the symbol name as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResolvedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mechanically convert an identifier into a symbol name.
///
/// Splits on `-`, uppercases the first character of each segment, joins the
/// segments and appends [`SYMBOL_SUFFIX`]. Empty segments contribute nothing.
pub fn to_symbol_name(identifier: &str) -> ResolvedName {
    let mut name = String::with_capacity(identifier.len() + SYMBOL_SUFFIX.len());
    for segment in identifier.split(SEGMENT_SEPARATOR) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name.push_str(SYMBOL_SUFFIX);
    ResolvedName(name)
}

/// Resolve an identifier, preferring the alias table over the mechanical form.
pub fn resolve_name(identifier: &str) -> ResolvedName {
    match alias::lookup(identifier) {
        Some(symbol) => ResolvedName::new(symbol),
        None => to_symbol_name(identifier),
    }
}
