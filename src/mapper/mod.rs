//! The text sink mapper: configuration, template selection, and send paths.
//!
//! A [`TextSinkMapper`] is constructed once per output stream. At setup it
//! chooses between the schema-derived default template and a user-supplied
//! custom payload, compiles the chosen template exactly once, and validates
//! the configuration; every failure mode is a setup-time [`MapError`]. At
//! send time it renders records through the compiled template and hands the
//! resulting text to a [`SinkListener`].
//!
//! # Send Paths
//!
//! - Single record, ungrouped: render and publish immediately.
//! - Single record, grouped: a group of one - published without any
//!   delimiter, since there is no second record to separate.
//! - Batch, ungrouped: each present record published independently, in
//!   input order; absent (`None`) entries are skipped.
//! - Batch, grouped: all present records joined into one blob with the
//!   delimiter between consecutive records; a batch with zero present
//!   records publishes nothing.
//!
//! The compiled template is used on every path. In particular a custom
//! payload applies to single-record sends exactly as it does to batches.
//!
//! # Concurrency
//!
//! A mapper is a pure in-memory transformer with no interior mutability;
//! send paths take `&self`. Hosts that fan one stream out to several
//! threads should still use one mapper (or at least one sink) per output
//! channel, since the publish sink itself is `&mut`.

pub mod group;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EVENT_DELIMITER, DEFAULT_NEW_LINE};
use crate::core::MapError;
use crate::schema::{Event, PayloadSpec, StreamSchema};
use crate::templating::{EventRenderer, PlaceholderTemplate, synthesizer};

pub use group::{GroupAssembler, GroupDelimiter};

fn default_delimiter() -> String {
    DEFAULT_EVENT_DELIMITER.to_string()
}

fn default_new_line() -> String {
    DEFAULT_NEW_LINE.to_string()
}

/// Static mapper options, as extracted from the host's sink configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMapperConfig {
    /// Whether batches are combined into one delimiter-separated blob.
    #[serde(default)]
    pub event_grouping_enabled: bool,

    /// Delimiter marker placed on its own line between grouped records.
    /// Must be non-empty when grouping is enabled.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Line ending used between fields and around group delimiters.
    /// Typically `"\n"`, or `"\r\n"` for consumers on the other platform.
    #[serde(default = "default_new_line")]
    pub new_line: String,
}

impl Default for TextMapperConfig {
    fn default() -> Self {
        Self {
            event_grouping_enabled: false,
            delimiter: default_delimiter(),
            new_line: default_new_line(),
        }
    }
}

/// The abstract publish sink: accepts one rendered payload per call.
///
/// Implemented by the host transport. The mapper never inspects what the
/// sink does with the text.
pub trait SinkListener {
    /// Publish one rendered payload.
    fn publish(&mut self, payload: String);
}

/// Maps schema-typed events to text and publishes them.
#[derive(Debug)]
pub struct TextSinkMapper {
    renderer: EventRenderer,
    config: TextMapperConfig,
}

impl TextSinkMapper {
    /// Set up a mapper for one output stream.
    ///
    /// With `payload: None` the default field-per-line template is
    /// synthesized from the schema. With a payload specification, its
    /// single fragment is compiled as the custom template.
    ///
    /// # Errors
    ///
    /// - [`MapError::MultiplePayloadTemplates`] if the payload spec holds
    ///   more than one fragment,
    /// - [`MapError::EmptyPayloadSpec`] if it holds none,
    /// - [`MapError::ObjectAttributeInPayload`] if a custom placeholder
    ///   names an object-typed attribute,
    /// - [`MapError::EmptyGroupDelimiter`] if grouping is enabled with an
    ///   empty delimiter marker,
    /// - [`MapError::Template`] if the template text fails to compile.
    pub fn new(
        schema: StreamSchema,
        payload: Option<&PayloadSpec>,
        config: TextMapperConfig,
    ) -> crate::core::Result<Self> {
        if config.event_grouping_enabled && config.delimiter.is_empty() {
            return Err(MapError::EmptyGroupDelimiter {
                stream: schema.id().to_string(),
            });
        }

        let template = match payload {
            Some(spec) => Self::compile_custom(&schema, spec)?,
            None => {
                let text = synthesizer::build_default(&schema, &config.new_line);
                tracing::debug!(stream = schema.id(), "using default template");
                PlaceholderTemplate::compile(&text)?
            }
        };

        Ok(Self {
            renderer: EventRenderer::new(schema, template),
            config,
        })
    }

    fn compile_custom(
        schema: &StreamSchema,
        spec: &PayloadSpec,
    ) -> crate::core::Result<PlaceholderTemplate> {
        let fragment = match spec.fragments() {
            [] => {
                return Err(MapError::EmptyPayloadSpec {
                    stream: schema.id().to_string(),
                });
            }
            [fragment] => fragment,
            _ => {
                return Err(MapError::MultiplePayloadTemplates {
                    stream: schema.id().to_string(),
                });
            }
        };

        let text = synthesizer::build_custom(fragment);
        let template = PlaceholderTemplate::compile(&text)?;

        // Object values have no single-line text form a custom payload
        // could sensibly embed.
        for name in template.placeholder_names() {
            if let Some(attribute) = schema.attribute(name) {
                if !attribute.attribute_type().is_scalar() {
                    return Err(MapError::ObjectAttributeInPayload {
                        stream: schema.id().to_string(),
                        attribute: name.to_string(),
                    });
                }
            }
        }

        tracing::debug!(stream = schema.id(), "using custom payload template");
        Ok(template)
    }

    /// The stream schema this mapper was set up with.
    pub fn schema(&self) -> &StreamSchema {
        self.renderer.schema()
    }

    /// The static configuration this mapper was set up with.
    pub fn config(&self) -> &TextMapperConfig {
        &self.config
    }

    fn group_delimiter(&self) -> GroupDelimiter {
        GroupDelimiter::new(self.config.delimiter.as_str(), self.config.new_line.as_str())
    }

    /// Map one record and publish it.
    ///
    /// Grouped mode treats this as a group of one: the published blob
    /// contains no delimiter.
    pub fn map_and_send(&self, event: &Event, sink: &mut dyn SinkListener) {
        if !self.config.event_grouping_enabled {
            sink.publish(self.renderer.render(event));
            return;
        }

        let mut group = GroupAssembler::new(self.group_delimiter());
        group.append(self.renderer.render(event));
        if let Some(blob) = group.finish() {
            sink.publish(blob);
        }
    }

    /// Map a batch of records and publish them.
    ///
    /// `None` entries are skipped silently; they produce no output and do
    /// not shift delimiter placement for surrounding records. Ungrouped,
    /// each present record is published independently in input order;
    /// grouped, the whole batch becomes at most one published blob.
    pub fn map_and_send_batch(&self, events: &[Option<Event>], sink: &mut dyn SinkListener) {
        if !self.config.event_grouping_enabled {
            for event in events.iter().flatten() {
                sink.publish(self.renderer.render(event));
            }
            return;
        }

        let mut group = GroupAssembler::new(self.group_delimiter());
        for event in events.iter().flatten() {
            group.append(self.renderer.render(event));
        }
        match group.finish() {
            Some(blob) => {
                tracing::debug!(
                    stream = self.schema().id(),
                    bytes = blob.len(),
                    "publishing grouped batch"
                );
                sink.publish(blob);
            }
            None => {
                tracing::debug!(
                    stream = self.schema().id(),
                    "batch had no renderable events, skipping publish"
                );
            }
        }
    }
}
