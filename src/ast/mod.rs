//! AST (Abstract Syntax Tree) module
//!
//! Contains all definitions related to the AST structure:
//!
//! - expr: The expression tagged union, the parser's only output type
//! - pattern: Patterns used by match cases, catch clauses, and signatures

pub mod expr;
pub mod pattern;
