//! Template compilation errors.
//!
//! Compilation happens exactly once, while the mapper is being set up, so
//! every error here is a setup-time failure. Rendering itself is
//! infallible: an unresolved placeholder substitutes empty text instead of
//! erroring, matching the lenient policy of the template engines this
//! format originated with.

use thiserror::Error;

/// Errors raised while compiling template text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TemplateError {
    /// A placeholder opener (`{{{` or `{{`) has no matching closer before
    /// the end of the template text.
    #[error("unterminated placeholder starting at byte {offset} of the template")]
    UnterminatedPlaceholder {
        /// Byte offset of the opening marker.
        offset: usize,
    },

    /// A placeholder contains no name (empty or whitespace-only between the
    /// markers).
    #[error("empty placeholder name at byte {offset} of the template")]
    EmptyPlaceholder {
        /// Byte offset of the opening marker.
        offset: usize,
    },
}
