pub mod ast;
pub mod cast;
pub mod error;
pub mod token;

pub use ast::{
    Category, Expression, Keyword, Literal, Node, Operation, PartialStatement, RawExpression,
    Reference, Statement,
};
pub use cast::{auto_cast, operator};
pub use error::AqlError;
pub use token::Token;
