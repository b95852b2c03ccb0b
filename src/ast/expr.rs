use crate::Span;

use super::pattern::Pattern;

/// An expression node. Every node carries the span covering its full source
/// extent, unioned from the spans of its constituent tokens.
#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// The expression variants the parser constructs.
///
/// Declarations (`Class`, `Extend`, `Interface`) and `Define` are shaped here
/// but owned by the evaluator; the parser only builds them.
#[derive(Debug, Clone)]
pub enum ExprKind {
    Bool(bool),
    Int(i64),
    Str(String),
    Nothing,
    This,
    Name(String),

    /// Ordered elements, never of size one: a single-element composite is
    /// unwrapped at parse time.
    Tuple(Vec<Expr>),
    /// Ordered (field name, value) pairs.
    Record(Vec<(String, Expr)>),

    And {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Or {
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Assignment to a variable. Other assignment targets are converted into
    /// setter message sends instead.
    Assign {
        name: String,
        value: Box<Expr>,
    },
    /// Variable definition, introduced by desugaring (e.g. `for` generators).
    Define {
        name: String,
        value: Box<Expr>,
    },

    /// A selector applied to a receiver, or to no receiver for a bare send.
    /// Infix operators are bare sends whose argument is a 2-tuple.
    Message {
        receiver: Option<Box<Expr>>,
        name: String,
        arg: Option<Box<Expr>>,
    },
    /// A call with one positional argument expression and optional explicit
    /// type arguments. An empty argument list is the `Nothing` expression.
    Call {
        target: Box<Expr>,
        type_args: Vec<Expr>,
        arg: Box<Expr>,
    },

    Fn {
        signature: Box<FunctionType>,
        body: Box<Expr>,
    },
    /// Statement list with an optional attached catch expression, which is
    /// always a desugared `Match` when present.
    Block {
        body: Vec<Expr>,
        catch: Option<Box<Expr>>,
    },
    Match {
        value: Box<Expr>,
        cases: Vec<MatchCase>,
    },
    /// Conditions are ANDed as successive pre-iteration tests. Both `while`
    /// and `for` produce this node.
    Loop {
        conditions: Vec<Expr>,
        body: Box<Expr>,
    },

    /// A quoted expression literal: `{ expr }`.
    Quote(Box<Expr>),
    /// A value spliced back into a quotation: `` `expr ``.
    Unquote(Box<Expr>),

    Class {
        name: String,
        body: Box<Expr>,
    },
    Extend {
        name: String,
        body: Box<Expr>,
    },
    Interface {
        name: String,
        body: Box<Expr>,
    },
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    pub fn nothing(span: Span) -> Self {
        Expr::new(ExprKind::Nothing, span)
    }

    pub fn name(name: impl Into<String>, span: Span) -> Self {
        Expr::new(ExprKind::Name(name.into()), span)
    }

    /// Wraps the given elements as a tuple spanning all of them. Callers must
    /// never pass fewer than two elements.
    pub fn tuple(elements: Vec<Expr>) -> Self {
        let span = elements[0].span.union(&elements[elements.len() - 1].span);
        Expr::new(ExprKind::Tuple(elements), span)
    }
}

/// One (pattern, body) pair of a match expression. Order matters: the first
/// matching case wins at runtime.
#[derive(Debug, Clone)]
pub struct MatchCase {
    pub pattern: Pattern,
    pub body: Expr,
}

impl MatchCase {
    pub fn new(pattern: Pattern, body: Expr) -> Self {
        MatchCase { pattern, body }
    }
}

/// A parsed function type signature: generic parameters with constraints, the
/// parameter pattern, and the return type expression. All three parts have
/// defaults when omitted from source.
#[derive(Debug, Clone)]
pub struct FunctionType {
    pub type_params: Vec<(String, Expr)>,
    pub pattern: Pattern,
    pub return_type: Expr,
}

impl FunctionType {
    pub fn new(type_params: Vec<(String, Expr)>, pattern: Pattern, return_type: Expr) -> Self {
        FunctionType {
            type_params,
            pattern,
            return_type,
        }
    }

    /// The signature inferred for a `fn` literal with no explicit signature:
    /// expects nothing, returns Dynamic.
    pub fn nothing_to_dynamic() -> Self {
        FunctionType::new(
            Vec::new(),
            Pattern::Value(Expr::nothing(Span::null())),
            Expr::name("Dynamic", Span::null()),
        )
    }

    /// The signature inferred for a `with` block argument given without a
    /// parameter list: a single dynamic `it` parameter.
    pub fn implicit_it() -> Self {
        FunctionType::new(
            Vec::new(),
            Pattern::Variable {
                name: String::from("it"),
                constraint: None,
            },
            Expr::name("Dynamic", Span::null()),
        )
    }
}
