//! Compiled placeholder templates.
//!
//! A template is literal text interleaved with named placeholders written
//! in the Mustache raw style: `{{{name}}}`. The double-brace form
//! `{{name}}` is accepted as well and behaves identically - this engine
//! never escapes anything, so the "raw" and "plain" forms coincide. That is
//! deliberate: event payload fields may contain characters an HTML-escaping
//! template mode would mangle, and the triple-brace form is the contract
//! that no such mangling happens.
//!
//! Compilation is a single scan producing an immutable segment list; a
//! compiled template is reused for every record a mapper ever renders.
//! Substitution is lenient: a placeholder with no binding in the render
//! context produces empty text rather than an error.

use std::collections::HashMap;

use crate::constants::{PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};
use crate::schema::AttributeValue;

use super::error::TemplateError;

/// One compiled template segment.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Text copied verbatim into the output.
    Literal(String),
    /// A named placeholder resolved against the render context.
    Placeholder(String),
}

/// Name-to-value bindings for one render.
///
/// Borrows the attribute names and values it is built from; a context is
/// built fresh for each record and dropped after the render, so stale
/// bindings from a previous record can never leak into the next one.
#[derive(Debug, Default)]
pub struct RenderContext<'a> {
    values: HashMap<&'a str, &'a AttributeValue>,
}

impl<'a> RenderContext<'a> {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn insert(&mut self, name: &'a str, value: &'a AttributeValue) {
        self.values.insert(name, value);
    }

    /// Look up a binding by placeholder name.
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name).copied()
    }
}

/// An immutable compiled template.
///
/// Built once per mapper at setup and never recompiled at send time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderTemplate {
    segments: Vec<Segment>,
}

impl PlaceholderTemplate {
    /// Compile template text into an immutable segment list.
    ///
    /// # Errors
    ///
    /// - [`TemplateError::UnterminatedPlaceholder`] if a `{{{` or `{{`
    ///   opener has no matching closer,
    /// - [`TemplateError::EmptyPlaceholder`] if a placeholder has no name.
    ///
    /// A closing marker without an opener is ordinary literal text.
    pub fn compile(text: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = text;
        let mut offset = 0;

        while let Some(open) = rest.find("{{") {
            literal.push_str(&rest[..open]);
            let marker_offset = offset + open;
            let after_open = &rest[open..];

            let (close_marker, name_start) = if after_open.starts_with(PLACEHOLDER_OPEN) {
                (PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN.len())
            } else {
                ("}}", "{{".len())
            };

            let body = &after_open[name_start..];
            let close = body.find(close_marker).ok_or(
                TemplateError::UnterminatedPlaceholder {
                    offset: marker_offset,
                },
            )?;

            let name = body[..close].trim();
            if name.is_empty() {
                return Err(TemplateError::EmptyPlaceholder {
                    offset: marker_offset,
                });
            }

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Placeholder(name.to_string()));

            let consumed = open + name_start + close + close_marker.len();
            offset += consumed;
            rest = &rest[consumed..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        tracing::debug!(
            segments = segments.len(),
            placeholders = segments
                .iter()
                .filter(|s| matches!(s, Segment::Placeholder(_)))
                .count(),
            "compiled template"
        );

        Ok(Self { segments })
    }

    /// Substitute every placeholder from `context`, copying literal text
    /// verbatim. Unresolved placeholders produce empty text.
    pub fn render(&self, context: &RenderContext<'_>) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    if let Some(value) = context.get(name) {
                        // Display of AttributeValue is infallible.
                        let _ = write!(out, "{value}");
                    }
                }
            }
        }
        out
    }

    /// Names of all placeholders in the template, in order of appearance.
    pub fn placeholder_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(template: &str, bindings: &[(&str, AttributeValue)]) -> String {
        let compiled = PlaceholderTemplate::compile(template).unwrap();
        let mut context = RenderContext::new();
        for (name, value) in bindings {
            context.insert(name, value);
        }
        compiled.render(&context)
    }

    #[test]
    fn literal_text_passes_through_verbatim() {
        assert_eq!(render("plain text, no markers", &[]), "plain text, no markers");
    }

    #[test]
    fn triple_brace_placeholder_substitutes_raw() {
        let out = render(
            "SensorID : {{{symbol}}}/{{{volume}}}",
            &[
                ("symbol", AttributeValue::String("wso2".into())),
                ("volume", AttributeValue::Long(100)),
            ],
        );
        assert_eq!(out, "SensorID : wso2/100");
    }

    #[test]
    fn double_brace_placeholder_is_equivalent() {
        let out = render(
            "{{symbol}}",
            &[("symbol", AttributeValue::String("a&b<c>".into()))],
        );
        // No escaping of any kind.
        assert_eq!(out, "a&b<c>");
    }

    #[test]
    fn missing_binding_renders_empty() {
        assert_eq!(render("[{{{absent}}}]", &[]), "[]");
    }

    #[test]
    fn whitespace_inside_markers_is_trimmed() {
        let out = render(
            "{{{ symbol }}}",
            &[("symbol", AttributeValue::String("WSO2".into()))],
        );
        assert_eq!(out, "WSO2");
    }

    #[test]
    fn unmatched_closer_is_literal() {
        assert_eq!(render("a}}}b", &[]), "a}}}b");
    }

    #[test]
    fn unterminated_placeholder_fails_to_compile() {
        let err = PlaceholderTemplate::compile("price:{{{price").unwrap_err();
        assert_eq!(err, TemplateError::UnterminatedPlaceholder { offset: 6 });
    }

    #[test]
    fn empty_placeholder_name_fails_to_compile() {
        let err = PlaceholderTemplate::compile("x{{{ }}}y").unwrap_err();
        assert_eq!(err, TemplateError::EmptyPlaceholder { offset: 1 });
    }

    #[test]
    fn compilation_is_deterministic() {
        let text = "symbol:\"{{{symbol}}}\",\nprice:{{{price}}}";
        let a = PlaceholderTemplate::compile(text).unwrap();
        let b = PlaceholderTemplate::compile(text).unwrap();
        assert_eq!(a, b);

        let symbol = AttributeValue::String("WSO2".into());
        let price = AttributeValue::Float(55.6);
        let mut context = RenderContext::new();
        context.insert("symbol", &symbol);
        context.insert("price", &price);
        assert_eq!(a.render(&context), b.render(&context));
    }

    #[test]
    fn placeholder_names_in_order() {
        let compiled =
            PlaceholderTemplate::compile("{{{a}}} then {{{b}}} then {{{a}}}").unwrap();
        let names: Vec<_> = compiled.placeholder_names().collect();
        assert_eq!(names, vec!["a", "b", "a"]);
    }

    #[test]
    fn rebinding_a_context_key_replaces_the_value() {
        let first = AttributeValue::Long(1);
        let second = AttributeValue::Long(2);
        let mut context = RenderContext::new();
        context.insert("n", &first);
        context.insert("n", &second);
        let compiled = PlaceholderTemplate::compile("{{{n}}}").unwrap();
        assert_eq!(compiled.render(&context), "2");
    }
}
