/// Errors that can occur while constructing query nodes.
///
/// Every constructor in this crate fails synchronously: either all of its
/// inputs validate and cast, or the node is never built.
#[derive(Debug, Clone, PartialEq)]
pub enum AqlError {
    /// Operator token was not a non-empty string
    InvalidOperator(String),

    /// String does not match the identifier or dotted-reference patterns
    InvalidReference(String),

    /// Keyword contains characters other than letters
    InvalidKeyword(String),

    /// Function name does not match the `name` or `ns::name` pattern
    InvalidFunctionName(String),

    /// Number is not representable (NaN or infinite)
    InvalidNumber(String),

    /// Quoted string could not be decoded
    InvalidString(String),
}

impl std::fmt::Display for AqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AqlError::InvalidOperator(found) => {
                write!(f, "Invalid operator: expected a non-empty string, found {}", found)
            }
            AqlError::InvalidReference(value) => {
                write!(f, "Invalid reference: {} is not an identifier or dotted path", value)
            }
            AqlError::InvalidKeyword(value) => {
                write!(f, "Invalid keyword: {} must contain only letters", value)
            }
            AqlError::InvalidFunctionName(value) => {
                write!(f, "Invalid function name: {}", value)
            }
            AqlError::InvalidNumber(value) => {
                write!(f, "Invalid number: {} has no query representation", value)
            }
            AqlError::InvalidString(value) => {
                write!(f, "Invalid string literal: {}", value)
            }
        }
    }
}

impl std::error::Error for AqlError {}
