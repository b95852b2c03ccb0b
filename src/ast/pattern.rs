use super::expr::Expr;

/// A pattern, as written in match cases, catch clauses, and function
/// signatures. Matching itself happens at runtime; the parser only builds the
/// shape.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Binds a name, optionally constrained to a type expression. The name
    /// `_` binds nothing and matches anything.
    Variable {
        name: String,
        constraint: Option<Expr>,
    },
    /// Matches a value equal to the given literal expression.
    Value(Expr),
    /// Matches a tuple element-wise. Never of size one.
    Tuple(Vec<Pattern>),
}

impl Pattern {
    pub fn wildcard() -> Self {
        Pattern::Variable {
            name: String::from("_"),
            constraint: None,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(
            self,
            Pattern::Variable { name, constraint: None } if name == "_"
        )
    }
}
