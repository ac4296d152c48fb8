use crate::ast::Node;
use crate::ast::references;
use crate::cast;
use crate::error::AqlError;
use crate::token::Token;

/// A complete multi-clause query fragment.
///
/// Statements matter here as operand categories: embedding one inside an
/// operation parenthesizes it, turning the fragment into a subquery.
///
/// ```
/// use aql_build::{Operation, Statement};
///
/// let sub = Statement::return_("doc").unwrap();
/// let op = Operation::binary("==", sub, 1).unwrap();
/// assert_eq!(op.to_aql(), "(RETURN doc) == 1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `RETURN <value>`
    Return { value: Box<Node> },

    /// `LET <name> = <value>`
    Let { name: String, value: Box<Node> },
}

impl Statement {
    /// Builds a `RETURN` statement, auto-casting the value.
    pub fn return_(value: impl Into<Token>) -> Result<Statement, AqlError> {
        Ok(Statement::Return {
            value: Box::new(cast::auto_cast(value.into())?),
        })
    }

    /// Builds a `LET` statement. The bound name must be a bare identifier.
    pub fn let_(name: impl Into<String>, value: impl Into<Token>) -> Result<Statement, AqlError> {
        let name = name.into();
        if !references::is_identifier(&name) {
            return Err(AqlError::InvalidReference(name));
        }
        Ok(Statement::Let {
            name,
            value: Box::new(cast::auto_cast(value.into())?),
        })
    }

    pub fn to_aql(&self) -> String {
        match self {
            Statement::Return { value } => format!("RETURN {}", value.to_aql_wrapped()),
            Statement::Let { name, value } => {
                format!("LET {} = {}", name, value.to_aql_wrapped())
            }
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_aql())
    }
}

/// An incomplete multi-clause fragment awaiting further clauses.
///
/// Like [`Statement`], partial statements parenthesize when embedded as
/// operands.
#[derive(Debug, Clone, PartialEq)]
pub enum PartialStatement {
    /// `FOR <variable> IN <expr>`
    For { variable: String, expr: Box<Node> },
}

impl PartialStatement {
    /// Builds a `FOR` clause. The loop variable must be a bare identifier.
    pub fn for_(
        variable: impl Into<String>,
        expr: impl Into<Token>,
    ) -> Result<PartialStatement, AqlError> {
        let variable = variable.into();
        if !references::is_identifier(&variable) {
            return Err(AqlError::InvalidReference(variable));
        }
        Ok(PartialStatement::For {
            variable,
            expr: Box::new(cast::auto_cast(expr.into())?),
        })
    }

    pub fn to_aql(&self) -> String {
        match self {
            PartialStatement::For { variable, expr } => {
                format!("FOR {} IN {}", variable, expr.to_aql_wrapped())
            }
        }
    }
}

impl std::fmt::Display for PartialStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_aql())
    }
}
