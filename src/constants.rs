//! Global constants used throughout the textmap codebase.
//!
//! These are the punctuation and option defaults shared between template
//! synthesis and mapper configuration. Defining them centrally keeps the
//! default template format and the configuration defaults in one place.

/// Separator emitted between fields of the default template (`,`).
///
/// The final field of a record is never followed by this separator.
pub const ATTRIBUTE_SEPARATOR: &str = ",";

/// Literal enclosure placed on both sides of string-typed values in the
/// default template (`"`).
pub const STRING_ENCLOSURE: &str = "\"";

/// Default group delimiter marker.
///
/// Deliberately a whole line of its own rather than a single character, so
/// that delimiter lines stand out from ordinary field lines.
pub const DEFAULT_EVENT_DELIMITER: &str = "~~~~~~~~~~";

/// Default line ending placed after each field separator and around group
/// delimiters. Configurable to `\r\n` for cross-platform consumers.
pub const DEFAULT_NEW_LINE: &str = "\n";

/// Opening marker of a raw placeholder.
pub const PLACEHOLDER_OPEN: &str = "{{{";

/// Closing marker of a raw placeholder.
pub const PLACEHOLDER_CLOSE: &str = "}}}";
