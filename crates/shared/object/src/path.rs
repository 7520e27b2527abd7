use crate::error::AttrError;
use std::fmt;
use std::sync::Arc;

/// A validated, non-empty sequence of attribute names.
///
/// `["a", "b", "c"]` denotes `obj.a.b.c`. Segments are never empty and never
/// contain `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttrPath {
    names: Arc<[String]>,
}

impl AttrPath {
    /// Validates an ordered sequence of names.
    ///
    /// # Errors
    /// [`AttrError::InvalidPath`] if there are no names, or a name is empty or dotted.
    pub fn new<I, S>(names: I) -> Result<Self, AttrError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(AttrError::invalid_path("At least one name must be specified"));
        }
        if let Some(bad) = names.iter().find(|n| n.is_empty() || n.contains('.')) {
            return Err(AttrError::invalid_path(format!("Invalid attribute name {bad:?}")));
        }
        Ok(Self { names: names.into() })
    }

    /// Splits a dotted string (`"sub.subsub.func"`) into a path.
    ///
    /// # Errors
    /// [`AttrError::InvalidPath`] for an empty string or empty segments (`"a..b"`).
    pub fn parse_dotted(dotted: &str) -> Result<Self, AttrError> {
        if dotted.is_empty() {
            return Err(AttrError::invalid_path("At least one name must be specified"));
        }
        Self::new(dotted.split('.'))
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The final name.
    #[must_use]
    pub fn last(&self) -> &str {
        // Non-empty by construction.
        self.names.last().map_or("", String::as_str)
    }

    /// Splits into all-but-last names and the last name.
    #[must_use]
    pub fn split_last(&self) -> (&[String], &str) {
        match self.names.split_last() {
            Some((last, parent)) => (parent, last.as_str()),
            None => (&[], ""),
        }
    }
}

impl fmt::Display for AttrPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join("."))
    }
}

/// Conversion into an [`AttrPath`].
///
/// Implemented for ordered sequences of names. Bare strings are deliberately
/// rejected: a string is not a sequence of names, and `"abc"` must never be
/// read as the path `a.b.c`. Use [`AttrPath::parse_dotted`] for dotted strings.
pub trait IntoAttrPath {
    /// # Errors
    /// [`AttrError::InvalidPath`] if the input is not a usable name sequence.
    fn into_attr_path(self) -> Result<AttrPath, AttrError>;
}

impl IntoAttrPath for AttrPath {
    fn into_attr_path(self) -> Result<AttrPath, AttrError> {
        Ok(self)
    }
}

impl IntoAttrPath for &AttrPath {
    fn into_attr_path(self) -> Result<AttrPath, AttrError> {
        Ok(self.clone())
    }
}

impl IntoAttrPath for &[&str] {
    fn into_attr_path(self) -> Result<AttrPath, AttrError> {
        AttrPath::new(self.iter().copied())
    }
}

impl IntoAttrPath for &[String] {
    fn into_attr_path(self) -> Result<AttrPath, AttrError> {
        AttrPath::new(self.iter().cloned())
    }
}

impl<const N: usize> IntoAttrPath for [&str; N] {
    fn into_attr_path(self) -> Result<AttrPath, AttrError> {
        AttrPath::new(self)
    }
}

impl<const N: usize> IntoAttrPath for &[&str; N] {
    fn into_attr_path(self) -> Result<AttrPath, AttrError> {
        AttrPath::new(self.iter().copied())
    }
}

impl IntoAttrPath for Vec<&str> {
    fn into_attr_path(self) -> Result<AttrPath, AttrError> {
        AttrPath::new(self)
    }
}

impl IntoAttrPath for Vec<String> {
    fn into_attr_path(self) -> Result<AttrPath, AttrError> {
        AttrPath::new(self)
    }
}

impl IntoAttrPath for &str {
    fn into_attr_path(self) -> Result<AttrPath, AttrError> {
        Err(AttrError::invalid_path(format!(
            "Expected a sequence of names, got the string {self:?}"
        )))
    }
}

impl IntoAttrPath for String {
    fn into_attr_path(self) -> Result<AttrPath, AttrError> {
        self.as_str().into_attr_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_become_paths() {
        let path = ["a", "b", "c"].into_attr_path().unwrap();
        assert_eq!(path.len(), 3);
        assert!(!path.is_empty());
        assert_eq!(path.split_last(), (&["a".to_owned(), "b".to_owned()][..], "c"));
        assert_eq!(path.to_string(), "a.b.c");
    }

    #[test]
    fn bare_strings_are_rejected() {
        assert!(matches!("abc".into_attr_path(), Err(AttrError::InvalidPath { .. })));
        assert!(matches!(String::from("a").into_attr_path(), Err(AttrError::InvalidPath { .. })));
    }

    #[test]
    fn empty_and_dotted_names_are_rejected() {
        let empty: [&str; 0] = [];
        assert!(matches!(empty.into_attr_path(), Err(AttrError::InvalidPath { .. })));
        assert!(matches!(["a", ""].into_attr_path(), Err(AttrError::InvalidPath { .. })));
        assert!(matches!(["a.b"].into_attr_path(), Err(AttrError::InvalidPath { .. })));
    }

    #[test]
    fn dotted_strings_parse_explicitly() {
        let path = AttrPath::parse_dotted("sub.subsub.func").unwrap();
        assert_eq!(path.last(), "func");
        assert!(AttrPath::parse_dotted("").is_err());
        assert!(AttrPath::parse_dotted("a..b").is_err());
    }
}
