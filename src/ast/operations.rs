use crate::ast::Node;
use crate::cast;
use crate::error::AqlError;
use crate::token::Token;

/// An operator node composing auto-cast operands with validated operator
/// tokens.
///
/// Construction follows the same three steps for every arity: validate all
/// operator tokens first (failing fast on the first bad one, before any
/// operand is touched), then auto-cast each operand independently, then
/// freeze the node. Operator tokens are opaque non-empty strings reproduced
/// verbatim in the output, surrounded by single spaces.
///
/// # Examples
///
/// ```
/// use aql_build::Operation;
///
/// let op = Operation::ternary("?", ":", "x", "y", "z").unwrap();
/// assert_eq!(op.to_aql(), "x ? y : z");
///
/// let neg = Operation::unary("-", 5).unwrap();
/// assert_eq!(neg.to_aql(), "- 5");
///
/// let any = Operation::nary("or", vec![true, false, true]).unwrap();
/// assert_eq!(any.to_aql(), "true or false or true");
/// ```
///
/// Operands whose category is an operation, statement or partial statement
/// are parenthesized when rendered:
///
/// ```
/// use aql_build::Operation;
///
/// let sum = Operation::binary("+", 1, 2).unwrap();
/// let scaled = Operation::binary("*", sum, 3).unwrap();
/// assert_eq!(scaled.to_aql(), "(1 + 2) * 3");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Prefix operator applied to one operand
    Unary { op: String, value: Box<Node> },

    /// Infix operator between two operands
    Binary {
        op: String,
        left: Box<Node>,
        right: Box<Node>,
    },

    /// Two operators interleaving three operands
    Ternary {
        op1: String,
        op2: String,
        value1: Box<Node>,
        value2: Box<Node>,
        value3: Box<Node>,
    },

    /// One operator joining any number of operands
    Nary { op: String, values: Vec<Node> },
}

impl Operation {
    /// Builds a prefix unary operation: `<op> <value>`.
    pub fn unary(
        op: impl Into<Token>,
        value: impl Into<Token>,
    ) -> Result<Operation, AqlError> {
        let op = cast::operator(op.into())?;
        Ok(Operation::Unary {
            op,
            value: Box::new(cast::auto_cast(value.into())?),
        })
    }

    /// Builds an infix binary operation: `<left> <op> <right>`.
    pub fn binary(
        op: impl Into<Token>,
        left: impl Into<Token>,
        right: impl Into<Token>,
    ) -> Result<Operation, AqlError> {
        let op = cast::operator(op.into())?;
        Ok(Operation::Binary {
            op,
            left: Box::new(cast::auto_cast(left.into())?),
            right: Box::new(cast::auto_cast(right.into())?),
        })
    }

    /// Builds a ternary operation: `<value1> <op1> <value2> <op2> <value3>`.
    ///
    /// Both operators are validated before any operand is cast; the first
    /// invalid token wins.
    pub fn ternary(
        op1: impl Into<Token>,
        op2: impl Into<Token>,
        value1: impl Into<Token>,
        value2: impl Into<Token>,
        value3: impl Into<Token>,
    ) -> Result<Operation, AqlError> {
        let op1 = cast::operator(op1.into())?;
        let op2 = cast::operator(op2.into())?;
        Ok(Operation::Ternary {
            op1,
            op2,
            value1: Box::new(cast::auto_cast(value1.into())?),
            value2: Box::new(cast::auto_cast(value2.into())?),
            value3: Box::new(cast::auto_cast(value3.into())?),
        })
    }

    /// Builds an n-ary operation: operands joined by ` <op> `.
    pub fn nary<T: Into<Token>>(
        op: impl Into<Token>,
        values: Vec<T>,
    ) -> Result<Operation, AqlError> {
        let op = cast::operator(op.into())?;
        let values = values
            .into_iter()
            .map(|value| cast::auto_cast(value.into()))
            .collect::<Result<Vec<Node>, AqlError>>()?;
        Ok(Operation::Nary { op, values })
    }

    /// The validated operator tokens, in position order.
    pub fn operators(&self) -> Vec<&str> {
        match self {
            Operation::Unary { op, .. }
            | Operation::Binary { op, .. }
            | Operation::Nary { op, .. } => vec![op],
            Operation::Ternary { op1, op2, .. } => vec![op1, op2],
        }
    }

    /// The cast operand nodes, in position order.
    pub fn operands(&self) -> Vec<&Node> {
        match self {
            Operation::Unary { value, .. } => vec![value],
            Operation::Binary { left, right, .. } => vec![left, right],
            Operation::Ternary {
                value1,
                value2,
                value3,
                ..
            } => vec![value1, value2, value3],
            Operation::Nary { values, .. } => values.iter().collect(),
        }
    }

    /// Renders the operation, parenthesizing each operand whose category
    /// requires wrapping.
    pub fn to_aql(&self) -> String {
        match self {
            Operation::Unary { op, value } => {
                format!("{} {}", op, value.to_aql_wrapped())
            }
            Operation::Binary { op, left, right } => {
                format!("{} {} {}", left.to_aql_wrapped(), op, right.to_aql_wrapped())
            }
            Operation::Ternary {
                op1,
                op2,
                value1,
                value2,
                value3,
            } => format!(
                "{} {} {} {} {}",
                value1.to_aql_wrapped(),
                op1,
                value2.to_aql_wrapped(),
                op2,
                value3.to_aql_wrapped()
            ),
            Operation::Nary { op, values } => {
                let rendered: Vec<String> = values.iter().map(Node::to_aql_wrapped).collect();
                rendered.join(&format!(" {} ", op))
            }
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_aql())
    }
}
