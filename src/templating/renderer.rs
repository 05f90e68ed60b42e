//! Per-record rendering.
//!
//! [`EventRenderer`] owns the compiled template for one mapper and turns a
//! single event into its text fragment: attribute names are zipped with the
//! event's positional values into a fresh [`RenderContext`], then the
//! compiled template is substituted. The context borrows from the schema
//! and the event and lives only for the duration of one render, so no state
//! can carry over between records.

use crate::schema::{Event, StreamSchema};

use super::template::{PlaceholderTemplate, RenderContext};

/// Renders events against one compiled template.
#[derive(Debug)]
pub struct EventRenderer {
    schema: StreamSchema,
    template: PlaceholderTemplate,
}

impl EventRenderer {
    /// Create a renderer for `schema` using the given compiled template.
    pub fn new(schema: StreamSchema, template: PlaceholderTemplate) -> Self {
        Self { schema, template }
    }

    /// The schema this renderer binds values against.
    pub fn schema(&self) -> &StreamSchema {
        &self.schema
    }

    /// The compiled template.
    pub fn template(&self) -> &PlaceholderTemplate {
        &self.template
    }

    /// Render one event to its text fragment.
    ///
    /// Values are bound to attribute names by position. Equal length of
    /// schema and event is a precondition enforced upstream; if the event
    /// is shorter, the surplus attributes are simply unbound and render as
    /// empty text.
    pub fn render(&self, event: &Event) -> String {
        debug_assert_eq!(
            self.schema.attributes().len(),
            event.data().len(),
            "event value count must match the schema of '{}'",
            self.schema.id()
        );

        let mut context = RenderContext::new();
        for (attribute, value) in self.schema.attributes().iter().zip(event.data()) {
            context.insert(attribute.name(), value);
        }

        let fragment = self.template.render(&context);
        tracing::debug!(
            stream = self.schema.id(),
            bytes = fragment.len(),
            "rendered event"
        );
        fragment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Attribute, AttributeType, AttributeValue};
    use crate::templating::synthesizer;

    fn stock_schema() -> StreamSchema {
        StreamSchema::new(
            "FooStream",
            vec![
                Attribute::new("symbol", AttributeType::String),
                Attribute::new("price", AttributeType::Float),
                Attribute::new("volume", AttributeType::Long),
            ],
        )
    }

    fn default_renderer(schema: StreamSchema) -> EventRenderer {
        let text = synthesizer::build_default(&schema, "\n");
        let template = PlaceholderTemplate::compile(&text).unwrap();
        EventRenderer::new(schema, template)
    }

    #[test]
    fn renders_default_field_per_line_output() {
        let renderer = default_renderer(stock_schema());
        let event = Event::new(vec!["WSO2".into(), 55.6f32.into(), 100i64.into()]);
        assert_eq!(
            renderer.render(&event),
            "symbol:\"WSO2\",\nprice:55.6,\nvolume:100"
        );
    }

    #[test]
    fn null_values_render_as_empty_text() {
        let renderer = default_renderer(stock_schema());
        let event = Event::new(vec![AttributeValue::Null, 55.6f32.into(), 100i64.into()]);
        assert_eq!(renderer.render(&event), "symbol:\"\",\nprice:55.6,\nvolume:100");
    }

    #[test]
    fn object_values_render_as_json_in_default_template() {
        let schema = StreamSchema::new(
            "GeoStream",
            vec![
                Attribute::new("id", AttributeType::Long),
                Attribute::new("location", AttributeType::Object),
            ],
        );
        let renderer = default_renderer(schema);
        let event = Event::new(vec![
            7i64.into(),
            AttributeValue::Object(serde_json::json!({"lat": 6.9})),
        ]);
        assert_eq!(renderer.render(&event), "id:7,\nlocation:{\"lat\":6.9}");
    }

    #[test]
    fn custom_template_binds_by_name_not_position() {
        let schema = stock_schema();
        let template =
            PlaceholderTemplate::compile("SensorID : {{{symbol}}}/{{{volume}}}").unwrap();
        let renderer = EventRenderer::new(schema, template);
        let event = Event::new(vec!["wso2".into(), 1000f32.into(), 100i64.into()]);
        assert_eq!(renderer.render(&event), "SensorID : wso2/100");
    }

    #[test]
    fn default_rendered_output_resplits_to_the_original_values() {
        let renderer = default_renderer(stock_schema());
        let event = Event::new(vec!["WSO2".into(), 55.6f32.into(), 100i64.into()]);
        let rendered = renderer.render(&event);

        let values: Vec<String> = rendered
            .split(",\n")
            .map(|field| field.split_once(':').unwrap().1.trim_matches('"').to_string())
            .collect();
        assert_eq!(values, vec!["WSO2", "55.6", "100"]);
    }
}
