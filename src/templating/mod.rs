//! Placeholder templating engine for event text mapping.
//!
//! This module is the heart of the crate: it compiles template text into an
//! immutable [`PlaceholderTemplate`], synthesizes the default field-per-line
//! template from a stream schema, and renders events through an
//! [`EventRenderer`].
//!
//! # Template Syntax
//!
//! Placeholders are written in the Mustache raw style:
//!
//! ```text
//! SensorID : {{{symbol}}}/{{{volume}}}
//! ```
//!
//! - `{{{name}}}` substitutes the named attribute's text form, unescaped
//! - `{{name}}` is accepted and behaves identically (nothing is ever
//!   escaped by this engine)
//! - literal text is copied verbatim
//! - a placeholder with no binding renders as empty text
//!
//! # Compilation Model
//!
//! A mapper compiles exactly one template at setup and reuses it for every
//! record it ever renders; nothing is recompiled at send time. Malformed
//! template text (an unterminated or empty placeholder) therefore surfaces
//! as a setup-time [`TemplateError`], never as a per-record failure.

pub mod error;
pub mod renderer;
pub mod synthesizer;
pub mod template;

pub use error::TemplateError;
pub use renderer::EventRenderer;
pub use template::{PlaceholderTemplate, RenderContext};
