use clinic_core::{Error, Result};

use std::fmt;

/// A table or column name that is safe to write into SQL verbatim.
///
/// The only way to build one is [`Ident::new`], which accepts plain SQL
/// identifiers (`[A-Za-z_][A-Za-z0-9_]*`). Statement builders additionally
/// check each name against the schema before constructing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident(String);

impl Ident {
    pub fn new(name: impl AsRef<str>) -> Result<Ident> {
        let name = name.as_ref();

        if is_plain(name) {
            Ok(Ident(name.to_string()))
        } else {
            Err(Error::invalid_identifier(name, "not a valid SQL identifier"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_plain(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Ident {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Ident {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
