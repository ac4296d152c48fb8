use std::sync::LazyLock;

use regex::Regex;

use crate::ast::Node;
use crate::cast;
use crate::error::AqlError;
use crate::token::Token;

/// Function name: identifier segments joined by `::`.
static FUNCTION_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[_a-zA-Z][_0-9a-zA-Z]*(::[_a-zA-Z][_0-9a-zA-Z]*)*$")
        .expect("function name pattern is valid")
});

/// General composite expressions.
///
/// These render without parentheses when embedded as operands; their own
/// syntax already delimits them.
///
/// # Examples
///
/// ```
/// use aql_build::Expression;
///
/// let range = Expression::range(1, 10).unwrap();
/// assert_eq!(range.to_aql(), "1..10");
///
/// let call = Expression::function_call("LENGTH", vec!["friends"]).unwrap();
/// assert_eq!(call.to_aql(), "LENGTH(friends)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Inclusive integer range: `from..to`
    Range { from: Box<Node>, to: Box<Node> },

    /// Subscript access: `object[key1][key2]`
    PropertyAccess { object: Box<Node>, keys: Vec<Node> },

    /// Function invocation: `NAME(arg, ...)`
    FunctionCall { name: String, args: Vec<Node> },
}

impl Expression {
    /// Builds a range expression, auto-casting both bounds.
    pub fn range(from: impl Into<Token>, to: impl Into<Token>) -> Result<Expression, AqlError> {
        Ok(Expression::Range {
            from: Box::new(cast::auto_cast(from.into())?),
            to: Box::new(cast::auto_cast(to.into())?),
        })
    }

    /// Builds a subscript access expression, auto-casting the object and
    /// every key.
    pub fn property_access<T: Into<Token>>(
        object: impl Into<Token>,
        keys: Vec<T>,
    ) -> Result<Expression, AqlError> {
        Ok(Expression::PropertyAccess {
            object: Box::new(cast::auto_cast(object.into())?),
            keys: keys
                .into_iter()
                .map(|key| cast::auto_cast(key.into()))
                .collect::<Result<Vec<Node>, AqlError>>()?,
        })
    }

    /// Builds a function call, validating the name and auto-casting every
    /// argument.
    pub fn function_call<T: Into<Token>>(
        name: impl Into<String>,
        args: Vec<T>,
    ) -> Result<Expression, AqlError> {
        let name = name.into();
        if !FUNCTION_NAME_RE.is_match(&name) {
            return Err(AqlError::InvalidFunctionName(name));
        }
        Ok(Expression::FunctionCall {
            name,
            args: args
                .into_iter()
                .map(|arg| cast::auto_cast(arg.into()))
                .collect::<Result<Vec<Node>, AqlError>>()?,
        })
    }

    pub fn to_aql(&self) -> String {
        match self {
            Expression::Range { from, to } => {
                format!("{}..{}", from.to_aql_wrapped(), to.to_aql_wrapped())
            }
            Expression::PropertyAccess { object, keys } => {
                let subscripts: Vec<String> = keys
                    .iter()
                    .map(|key| format!("[{}]", key.to_aql()))
                    .collect();
                format!("{}{}", object.to_aql_wrapped(), subscripts.join(""))
            }
            Expression::FunctionCall { name, args } => {
                let rendered: Vec<String> = args.iter().map(Node::to_aql_wrapped).collect();
                format!("{}({})", name, rendered.join(", "))
            }
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_aql())
    }
}
