use rust_decimal::Decimal;

use crate::ast::{
    Node,
    expressions::Expression,
    literals::Literal,
    operations::Operation,
    references::{Keyword, RawExpression, Reference},
    statements::{PartialStatement, Statement},
};

/// A host value offered to the builder as an operand or operator.
///
/// This is the input domain of the auto-cast dispatcher: anything a caller
/// can hand to an operation constructor is first converted into a `Token`
/// through one of the `From` impls below, then classified exactly once.
/// A value that is already a [`Node`] travels as [`Token::Node`] and passes
/// through casting untouched.
///
/// # Examples
///
/// ```
/// use aql_build::Token;
///
/// let t: Token = 42.into();
/// assert!(matches!(t, Token::Int(42)));
///
/// let t: Token = "some.ref".into();
/// assert!(matches!(t, Token::Str(_)));
///
/// let t: Token = None::<i64>.into();
/// assert!(matches!(t, Token::Null));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// An already-built node, passed through unchanged
    Node(Node),

    /// Integer number
    Int(i64),

    /// Floating-point number
    Number(f64),

    /// Exact decimal number
    Decimal(Decimal),

    /// String: identifier, dotted reference, or quoted string literal,
    /// decided by the dispatcher
    Str(String),

    /// Boolean
    Bool(bool),

    /// Null / absence sentinel
    Null,

    /// List of further tokens, each cast independently
    List(Vec<Token>),

    /// Key/value pairs, values cast independently, order preserved
    Object(Vec<(String, Token)>),
}

impl Token {
    /// Returns a human-readable name for the token's shape, used in error
    /// messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Token::Node(_) => "node",
            Token::Int(_) => "integer",
            Token::Number(_) | Token::Decimal(_) => "number",
            Token::Str(_) => "string",
            Token::Bool(_) => "boolean",
            Token::Null => "null",
            Token::List(_) => "list",
            Token::Object(_) => "object",
        }
    }
}

impl From<i64> for Token {
    fn from(n: i64) -> Self {
        Token::Int(n)
    }
}

impl From<i32> for Token {
    fn from(n: i32) -> Self {
        Token::Int(n as i64)
    }
}

impl From<u32> for Token {
    fn from(n: u32) -> Self {
        Token::Int(n as i64)
    }
}

impl From<f64> for Token {
    fn from(n: f64) -> Self {
        Token::Number(n)
    }
}

impl From<f32> for Token {
    fn from(n: f32) -> Self {
        Token::Number(n as f64)
    }
}

impl From<Decimal> for Token {
    fn from(d: Decimal) -> Self {
        Token::Decimal(d)
    }
}

impl From<bool> for Token {
    fn from(b: bool) -> Self {
        Token::Bool(b)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::Str(s.to_string())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token::Str(s)
    }
}

impl From<()> for Token {
    fn from(_: ()) -> Self {
        Token::Null
    }
}

impl<T: Into<Token>> From<Option<T>> for Token {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Token::Null,
        }
    }
}

impl<T: Into<Token>> From<Vec<T>> for Token {
    fn from(items: Vec<T>) -> Self {
        Token::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<Node> for Token {
    fn from(node: Node) -> Self {
        Token::Node(node)
    }
}

impl From<Literal> for Token {
    fn from(lit: Literal) -> Self {
        Token::Node(Node::Literal(lit))
    }
}

impl From<Reference> for Token {
    fn from(r: Reference) -> Self {
        Token::Node(Node::Reference(r))
    }
}

impl From<Keyword> for Token {
    fn from(kw: Keyword) -> Self {
        Token::Node(Node::Keyword(kw))
    }
}

impl From<RawExpression> for Token {
    fn from(raw: RawExpression) -> Self {
        Token::Node(Node::Raw(raw))
    }
}

impl From<Expression> for Token {
    fn from(expr: Expression) -> Self {
        Token::Node(Node::Expression(expr))
    }
}

impl From<Operation> for Token {
    fn from(op: Operation) -> Self {
        Token::Node(Node::Operation(op))
    }
}

impl From<Statement> for Token {
    fn from(st: Statement) -> Self {
        Token::Node(Node::Statement(st))
    }
}

impl From<PartialStatement> for Token {
    fn from(ps: PartialStatement) -> Self {
        Token::Node(Node::Partial(ps))
    }
}

/// JSON values map onto tokens structurally. A JSON string is data, not
/// query source, so it becomes a string-literal node directly rather than
/// going through the identifier/reference recognition step.
impl From<serde_json::Value> for Token {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Token::Null,
            serde_json::Value::Bool(b) => Token::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Token::Int(i)
                } else {
                    Token::Number(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Token::Node(Node::Literal(Literal::Str(s))),
            serde_json::Value::Array(items) => {
                Token::List(items.into_iter().map(Token::from).collect())
            }
            serde_json::Value::Object(map) => {
                Token::Object(map.into_iter().map(|(k, v)| (k, Token::from(v))).collect())
            }
        }
    }
}
