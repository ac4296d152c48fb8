use rust_decimal::{Decimal, prelude::FromPrimitive, prelude::ToPrimitive};

use crate::ast::Node;
use crate::error::AqlError;

/// A literal value node.
///
/// Literals own their value and never change after construction. Scalars are
/// created directly or through auto-casting; lists and objects additionally
/// auto-cast their contents element by element.
///
/// # Examples
///
/// ```
/// use aql_build::Literal;
///
/// assert_eq!(Literal::Integer(42).to_aql(), "42");
/// assert_eq!(Literal::Str("it's \"quoted\"".to_string()).to_aql(),
///            r#""it's \"quoted\"""#);
/// assert_eq!(Literal::Null.to_aql(), "null");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Integer number
    Integer(i64),

    /// Non-integer number, kept exact
    Number(Decimal),

    /// UTF-8 string (stored decoded, encoded on render)
    Str(String),

    /// Boolean
    Boolean(bool),

    /// Null
    Null,

    /// List of nodes
    List(Vec<Node>),

    /// Key/value pairs in insertion order
    Object(Vec<(String, Node)>),
}

impl Literal {
    /// Builds a numeric literal from a float.
    ///
    /// Whole numbers in `i64` range collapse to [`Literal::Integer`]; other
    /// finite values are kept exact as decimals. NaN and infinities have no
    /// query representation and fail.
    pub fn number(value: f64) -> Result<Literal, AqlError> {
        if !value.is_finite() {
            return Err(AqlError::InvalidNumber(value.to_string()));
        }
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
            return Ok(Literal::Integer(value as i64));
        }
        Decimal::from_f64(value)
            .map(Literal::Number)
            .ok_or_else(|| AqlError::InvalidNumber(value.to_string()))
    }

    /// Builds a numeric literal from an exact decimal, collapsing whole
    /// values to [`Literal::Integer`].
    pub fn decimal(value: Decimal) -> Literal {
        if value.fract().is_zero() {
            if let Some(i) = value.to_i64() {
                return Literal::Integer(i);
            }
        }
        Literal::Number(value)
    }

    /// Renders the literal to query text.
    pub fn to_aql(&self) -> String {
        match self {
            Literal::Integer(n) => n.to_string(),
            Literal::Number(d) => d.normalize().to_string(),
            // AQL string syntax matches JSON's, escaping included
            Literal::Str(s) => serde_json::Value::String(s.clone()).to_string(),
            Literal::Boolean(b) => b.to_string(),
            Literal::Null => "null".to_string(),
            Literal::List(items) => {
                let rendered: Vec<String> = items.iter().map(Node::to_aql_wrapped).collect();
                format!("[{}]", rendered.join(", "))
            }
            Literal::Object(pairs) => {
                let rendered: Vec<String> = pairs
                    .iter()
                    .map(|(key, value)| {
                        format!(
                            "{}: {}",
                            serde_json::Value::String(key.clone()),
                            value.to_aql_wrapped()
                        )
                    })
                    .collect();
                format!("{{{}}}", rendered.join(", "))
            }
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_aql())
    }
}
