//! Template text synthesis.
//!
//! Builds the template text a mapper compiles at setup: either the default
//! field-per-line form derived from the attribute schema, or the
//! user-authored custom payload verbatim. Synthesized text never embeds the
//! group delimiter - grouping is assembled structurally from rendered
//! fragments, so the same template serves both grouped and ungrouped
//! output.

use crate::constants::{
    ATTRIBUTE_SEPARATOR, PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN, STRING_ENCLOSURE,
};
use crate::schema::{AttributeType, StreamSchema};

/// Build the default template text from the schema.
///
/// One field per line, in schema order: `name:` followed by the field's
/// placeholder. String-typed attributes get a literal quote on both sides
/// of the placeholder; every other type is unquoted. Fields are joined by
/// the attribute separator plus `line_ending`; the final field carries no
/// trailing separator or line ending.
///
/// For `(symbol:String, price:Float)` this produces:
///
/// ```text
/// symbol:"{{{symbol}}}",
/// price:{{{price}}}
/// ```
pub fn build_default(schema: &StreamSchema, line_ending: &str) -> String {
    let mut template = String::new();
    let mut first = true;
    for attribute in schema.attributes() {
        if !first {
            template.push_str(ATTRIBUTE_SEPARATOR);
            template.push_str(line_ending);
        }
        first = false;

        let name = attribute.name();
        template.push_str(name);
        template.push(':');
        if attribute.attribute_type() == AttributeType::String {
            template.push_str(STRING_ENCLOSURE);
            template.push_str(PLACEHOLDER_OPEN);
            template.push_str(name);
            template.push_str(PLACEHOLDER_CLOSE);
            template.push_str(STRING_ENCLOSURE);
        } else {
            template.push_str(PLACEHOLDER_OPEN);
            template.push_str(name);
            template.push_str(PLACEHOLDER_CLOSE);
        }
    }
    template
}

/// Build the custom template text from the raw payload fragment.
///
/// The authored text is used verbatim.
pub fn build_custom(raw_payload: &str) -> String {
    raw_payload.to_string()
}
