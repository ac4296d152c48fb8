//! # AQL Expression Builder - Abstract Syntax Tree
//!
//! This module defines the node hierarchy for programmatically built AQL
//! expressions. Callers compose typed nodes bottom-up and render the finished
//! tree into query text; nothing here parses text back.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[literals]** - Scalar and collection literal nodes
//! - **[references]** - Identifiers, dotted references, keywords, raw text
//! - **[operations]** - Unary, binary, ternary and n-ary operator nodes
//! - **[expressions]** - General composites (ranges, property access, calls)
//! - **[statements]** - Minimal statement and partial-statement fragments
//!
//! ## Quick Start
//!
//! ```
//! use aql_build::Operation;
//!
//! let op = Operation::ternary("?", ":", "x", "y", "z").unwrap();
//! assert_eq!(op.to_aql(), "x ? y : z");
//! ```
//!
//! ## Core Concepts
//!
//! ### Auto-casting
//!
//! Operand positions accept plain host values. `42` becomes an integer
//! literal, `"id"` an identifier, `"some.ref"` a dotted reference,
//! `"\"hello\""` a string literal, and an existing node passes through
//! unchanged. See [`crate::cast::auto_cast`] for the exact rules.
//!
//! ### Categories
//!
//! Every node belongs to exactly one [`Category`]. Categories, not concrete
//! kinds, decide whether an embedded operand needs parentheses: operations,
//! statements and partial statements wrap, everything else renders bare.
//!
//! ```
//! use aql_build::Operation;
//!
//! let inner = Operation::binary("+", 1, 2).unwrap();
//! let outer = Operation::ternary("?", ":", inner.clone(), inner.clone(), inner).unwrap();
//! assert_eq!(outer.to_aql(), "(1 + 2) ? (1 + 2) : (1 + 2)");
//! ```
//!
//! ### Immutability
//!
//! Nodes are value objects. Trees are built by composition, never mutated,
//! and rendering is deterministic and side-effect free.
pub mod literals;
pub mod references;
pub mod operations;
pub mod expressions;
pub mod statements;

pub use literals::Literal;
pub use references::{Keyword, RawExpression, Reference};
pub use operations::Operation;
pub use expressions::Expression;
pub use statements::{PartialStatement, Statement};

/// Coarse node classification driving parenthesization and embedding rules.
///
/// Each node belongs to exactly one category, independent of its concrete
/// kind. Upstream composite builders reuse [`Category::needs_parens`] when
/// splicing rendered fragments into larger query bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Scalar or collection literal
    Literal,
    /// Identifier or dotted-path reference
    Reference,
    /// Bare keyword, rendered uppercase
    Keyword,
    /// Verbatim query text
    RawExpression,
    /// General composite expression (range, access, call)
    Expression,
    /// Unary, binary, ternary or n-ary operator node
    Operation,
    /// Complete multi-clause fragment
    Statement,
    /// Incomplete multi-clause fragment
    PartialStatement,
}

impl Category {
    /// Whether a node of this category must be parenthesized when embedded
    /// as an operand. Bare operator, statement and partial-statement text is
    /// ambiguous inline; everything else stands on its own.
    pub fn needs_parens(self) -> bool {
        matches!(
            self,
            Category::Operation | Category::Statement | Category::PartialStatement
        )
    }
}

/// A node in an AQL expression tree.
///
/// One variant per [`Category`]; the concrete kinds live in the sub-enums.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal value
    Literal(Literal),

    /// Identifier or dotted reference
    Reference(Reference),

    /// Keyword
    Keyword(Keyword),

    /// Raw query text, emitted verbatim
    Raw(RawExpression),

    /// General composite expression
    Expression(Expression),

    /// Operator node
    Operation(Operation),

    /// Statement fragment
    Statement(Statement),

    /// Partial statement fragment
    Partial(PartialStatement),
}

impl Node {
    /// The node's category tag.
    pub fn category(&self) -> Category {
        match self {
            Node::Literal(_) => Category::Literal,
            Node::Reference(_) => Category::Reference,
            Node::Keyword(_) => Category::Keyword,
            Node::Raw(_) => Category::RawExpression,
            Node::Expression(_) => Category::Expression,
            Node::Operation(_) => Category::Operation,
            Node::Statement(_) => Category::Statement,
            Node::Partial(_) => Category::PartialStatement,
        }
    }

    /// Renders the node to query text.
    ///
    /// Pure and deterministic: no leading or trailing whitespace, no
    /// statement terminator.
    pub fn to_aql(&self) -> String {
        match self {
            Node::Literal(lit) => lit.to_aql(),
            Node::Reference(r) => r.to_aql(),
            Node::Keyword(kw) => kw.to_aql(),
            Node::Raw(raw) => raw.to_aql(),
            Node::Expression(expr) => expr.to_aql(),
            Node::Operation(op) => op.to_aql(),
            Node::Statement(st) => st.to_aql(),
            Node::Partial(ps) => ps.to_aql(),
        }
    }

    /// Renders the node for embedding as an operand, parenthesizing it when
    /// its category requires wrapping.
    pub fn to_aql_wrapped(&self) -> String {
        if self.category().needs_parens() {
            format!("({})", self.to_aql())
        } else {
            self.to_aql()
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_aql())
    }
}

impl From<Literal> for Node {
    fn from(lit: Literal) -> Self {
        Node::Literal(lit)
    }
}

impl From<Reference> for Node {
    fn from(r: Reference) -> Self {
        Node::Reference(r)
    }
}

impl From<Keyword> for Node {
    fn from(kw: Keyword) -> Self {
        Node::Keyword(kw)
    }
}

impl From<RawExpression> for Node {
    fn from(raw: RawExpression) -> Self {
        Node::Raw(raw)
    }
}

impl From<Expression> for Node {
    fn from(expr: Expression) -> Self {
        Node::Expression(expr)
    }
}

impl From<Operation> for Node {
    fn from(op: Operation) -> Self {
        Node::Operation(op)
    }
}

impl From<Statement> for Node {
    fn from(st: Statement) -> Self {
        Node::Statement(st)
    }
}

impl From<PartialStatement> for Node {
    fn from(ps: PartialStatement) -> Self {
        Node::Partial(ps)
    }
}
