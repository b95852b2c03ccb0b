//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the single-pass recursive-descent parser that turns
//! a token stream into expressions. The grammar is partly fixed and partly
//! pluggable:
//!
//! - A fixed precedence chain (assignment → composite → conjunction →
//!   operator → message → primary) is the default path for every token
//! - Primary tokens dispatch through an extension table of independently
//!   registered prefix strategies, so the grammar can grow without touching
//!   the dispatch loop
//! - `catch` clauses and `for` loops are desugared at parse time
//!
//! Parsing is strictly left to right with bounded lookahead and no error
//! recovery: the first malformed construct aborts the current parse. Recursion
//! depth mirrors source nesting depth, so pathologically nested input can
//! exhaust the call stack; that is a documented resource limit.

pub mod block;
pub mod expr;
pub mod keywords;
pub mod lookups;
pub mod parser;
pub mod pattern;
pub mod quote;
pub mod signature;
pub mod types;
