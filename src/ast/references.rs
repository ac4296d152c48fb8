use std::sync::LazyLock;

use regex::Regex;

use crate::error::AqlError;

/// Bare identifier: a name with no separators.
static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[_a-zA-Z][_0-9a-zA-Z]*$").expect("identifier pattern is valid")
});

/// Simple reference: an identifier or bind parameter followed by dotted
/// segments and/or `[*]` expansion segments.
static SIMPLE_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@{0,2}[_a-zA-Z][_0-9a-zA-Z]*(\.[_a-zA-Z][_0-9a-zA-Z]*|\[\*\])*$")
        .expect("reference pattern is valid")
});

/// Keyword: letters only.
static KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").expect("keyword pattern is valid"));

pub(crate) fn is_identifier(value: &str) -> bool {
    IDENTIFIER_RE.is_match(value)
}

pub(crate) fn is_simple_reference(value: &str) -> bool {
    SIMPLE_REF_RE.is_match(value)
}

/// A reference node: a name pointing at a variable, collection, attribute
/// path or bind parameter.
///
/// The name is validated once at construction and rendered verbatim
/// afterwards; references never re-cast.
#[derive(Debug, Clone, PartialEq)]
pub enum Reference {
    /// Bare identifier, e.g. `doc`
    Identifier(String),

    /// Dotted path, optionally with `[*]` expansion or a `@`/`@@` bind
    /// prefix, e.g. `doc.user.name` or `friends[*].id`
    Simple(String),
}

impl Reference {
    /// Builds an identifier reference, rejecting names with separators or
    /// other non-identifier characters.
    pub fn identifier(name: impl Into<String>) -> Result<Reference, AqlError> {
        let name = name.into();
        if is_identifier(&name) {
            Ok(Reference::Identifier(name))
        } else {
            Err(AqlError::InvalidReference(name))
        }
    }

    /// Builds a simple (dotted-path) reference.
    pub fn simple(path: impl Into<String>) -> Result<Reference, AqlError> {
        let path = path.into();
        if is_simple_reference(&path) {
            Ok(Reference::Simple(path))
        } else {
            Err(AqlError::InvalidReference(path))
        }
    }

    /// The validated name or path.
    pub fn value(&self) -> &str {
        match self {
            Reference::Identifier(name) => name,
            Reference::Simple(path) => path,
        }
    }

    pub fn to_aql(&self) -> String {
        self.value().to_string()
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value())
    }
}

/// A keyword node, e.g. `FOR` or `IN`.
///
/// Keywords accept letters only and render uppercased.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword(String);

impl Keyword {
    pub fn new(value: impl Into<String>) -> Result<Keyword, AqlError> {
        let value = value.into();
        if KEYWORD_RE.is_match(&value) {
            Ok(Keyword(value))
        } else {
            Err(AqlError::InvalidKeyword(value))
        }
    }

    /// The keyword as given, original casing preserved.
    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn to_aql(&self) -> String {
        self.0.to_uppercase()
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_aql())
    }
}

/// An escape hatch: query text emitted exactly as given, no validation, no
/// quoting. The caller vouches for its syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct RawExpression(String);

impl RawExpression {
    pub fn new(value: impl Into<String>) -> RawExpression {
        RawExpression(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn to_aql(&self) -> String {
        self.0.clone()
    }
}

impl std::fmt::Display for RawExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
