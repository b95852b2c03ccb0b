//! Utility macros for the parser crate.
//!
//! This module defines helper macros used to build tokens and spans, mostly
//! by tests that stand in for the external scanner:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span between two byte offsets in a file

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Span between two byte offsets within a file.
///
/// # Arguments
///
/// * `$start` - Starting byte offset
/// * `$end` - Ending byte offset
/// * `$file` - The `Rc<String>` file name shared by both positions
///
/// # Example
///
/// ```ignore
/// let span = MK_SPAN!(0, 2, file);
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr, $file:expr) => {
        Span {
            start: Position($start, std::rc::Rc::clone(&$file)),
            end: Position($end, std::rc::Rc::clone(&$file)),
        }
    };
}
