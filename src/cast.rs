//! Auto-casting and operator validation.
//!
//! The two entry points here sit between the caller's host values and the
//! node constructors. [`auto_cast`] turns an arbitrary [`Token`] into the
//! matching [`Node`]; [`operator`] admits operator tokens. Both are pure
//! functions over a closed input domain.
//!
//! # String recognition rules
//!
//! A string operand is classified by the first rule that applies:
//!
//! 1. Leading `"` → string literal; the token must be a complete
//!    JSON-encoded string and the decoded value is stored.
//! 2. Matches `^[_a-zA-Z][_0-9a-zA-Z]*$` → identifier.
//! 3. Matches `^@{0,2}[_a-zA-Z][_0-9a-zA-Z]*(\.[_a-zA-Z][_0-9a-zA-Z]*|\[\*\])*$`
//!    → simple reference (dotted path, `[*]` expansion segments and `@`/`@@`
//!    bind-parameter prefixes allowed).
//! 4. Anything else fails with [`AqlError::InvalidReference`].
//!
//! # Examples
//!
//! ```
//! use aql_build::{auto_cast, Literal, Node, Reference};
//!
//! assert_eq!(auto_cast(42.into()).unwrap(), Node::Literal(Literal::Integer(42)));
//! assert!(matches!(
//!     auto_cast("some.ref".into()).unwrap(),
//!     Node::Reference(Reference::Simple(_))
//! ));
//!
//! // Already-built nodes pass through unchanged
//! let node = Node::Literal(Literal::Boolean(true));
//! assert_eq!(auto_cast(node.clone().into()).unwrap(), node);
//! ```

use crate::ast::literals::Literal;
use crate::ast::references::{self, Reference};
use crate::ast::Node;
use crate::error::AqlError;
use crate::token::Token;

/// Validates an operator token.
///
/// Exactly the non-empty strings pass, returned verbatim: no trimming, no
/// normalization, unusual characters included. Every other shape (empty
/// string, node, number, boolean, null, list, object) fails with
/// [`AqlError::InvalidOperator`].
pub fn operator(token: Token) -> Result<String, AqlError> {
    match token {
        Token::Str(s) if !s.is_empty() => Ok(s),
        Token::Str(_) => Err(AqlError::InvalidOperator("empty string".to_string())),
        other => Err(AqlError::InvalidOperator(other.type_name().to_string())),
    }
}

/// Casts a host value into the matching node.
///
/// Type-directed and position-independent: each operand position of an
/// operation runs through this function on its own, so mixed shapes across
/// positions are fine. A token that is already a node is returned unchanged,
/// making the cast idempotent.
pub fn auto_cast(token: Token) -> Result<Node, AqlError> {
    match token {
        Token::Node(node) => Ok(node),
        Token::Int(n) => Ok(Node::Literal(Literal::Integer(n))),
        Token::Number(f) => Literal::number(f).map(Node::Literal),
        Token::Decimal(d) => Ok(Node::Literal(Literal::decimal(d))),
        Token::Str(s) => cast_string(s),
        Token::Bool(b) => Ok(Node::Literal(Literal::Boolean(b))),
        Token::Null => Ok(Node::Literal(Literal::Null)),
        Token::List(items) => {
            let nodes = items
                .into_iter()
                .map(auto_cast)
                .collect::<Result<Vec<Node>, AqlError>>()?;
            Ok(Node::Literal(Literal::List(nodes)))
        }
        Token::Object(pairs) => {
            let cast_pairs = pairs
                .into_iter()
                .map(|(key, value)| Ok((key, auto_cast(value)?)))
                .collect::<Result<Vec<(String, Node)>, AqlError>>()?;
            Ok(Node::Literal(Literal::Object(cast_pairs)))
        }
    }
}

fn cast_string(value: String) -> Result<Node, AqlError> {
    if value.starts_with('"') {
        let decoded: String = serde_json::from_str(&value)
            .map_err(|_| AqlError::InvalidString(value.clone()))?;
        return Ok(Node::Literal(Literal::Str(decoded)));
    }
    if references::is_identifier(&value) {
        return Ok(Node::Reference(Reference::Identifier(value)));
    }
    Reference::simple(value).map(Node::Reference)
}
