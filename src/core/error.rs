//! Error types for mapper setup.
//!
//! All failure cases in this crate are configuration mistakes detected while
//! constructing a mapper: a malformed payload specification, a custom
//! template referencing a field that has no text form, or an unusable group
//! delimiter. Template compilation failures fold in via `#[from]` since the
//! single compilation also happens at setup.
//!
//! # Design Philosophy
//!
//! - **Specific error types**: each variant represents one failure mode
//! - **Rich context**: variants carry the stream id (and attribute name
//!   where relevant) so multi-stream hosts can attribute the failure
//! - **Fail at setup, never per record**: once a mapper is constructed,
//!   rendering is infallible

use thiserror::Error;

use crate::templating::TemplateError;

/// The error type for mapper construction.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MapError {
    /// More than one template fragment was supplied in the payload
    /// specification. A text mapper renders exactly one template per stream.
    #[error("multiple payload templates are not supported, error at mapper of '{stream}'")]
    MultiplePayloadTemplates {
        /// Id of the output stream being configured.
        stream: String,
    },

    /// A payload specification was supplied but contains no template
    /// fragment at all.
    #[error("no template given in the payload specification of '{stream}'")]
    EmptyPayloadSpec {
        /// Id of the output stream being configured.
        stream: String,
    },

    /// A custom template references an object-typed attribute. Object values
    /// have no stable single-line text form, so they cannot appear in a
    /// custom payload.
    #[error(
        "object attribute '{attribute}' cannot be used in a payload template, \
         error at mapper of '{stream}'"
    )]
    ObjectAttributeInPayload {
        /// Id of the output stream being configured.
        stream: String,
        /// Name of the offending attribute.
        attribute: String,
    },

    /// Event grouping was enabled with an empty delimiter marker. Grouped
    /// output is only unambiguous when the delimiter is non-empty.
    #[error("event grouping requires a non-empty delimiter, error at mapper of '{stream}'")]
    EmptyGroupDelimiter {
        /// Id of the output stream being configured.
        stream: String,
    },

    /// The template text itself failed to compile.
    #[error(transparent)]
    Template(#[from] TemplateError),
}
