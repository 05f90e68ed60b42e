//! textmap - schema-driven text mapping for event streams
//!
//! This crate converts structured, schema-typed records ("events") into
//! textual output, either through an auto-derived field-per-line template or
//! through a user-supplied template containing placeholders. Rendered text is
//! handed to an abstract publish sink; transports, record deserialization,
//! and persistence are explicitly out of scope.
//!
//! # Architecture Overview
//!
//! A [`mapper::TextSinkMapper`] is configured once per output stream:
//! - With no custom payload, a default template is synthesized from the
//!   stream's attribute schema, one `name:value` field per line.
//! - With a custom payload, the user-authored template text is compiled
//!   as-is.
//!
//! The chosen template is compiled exactly once at setup and reused for every
//! record the mapper ever renders. At send time each record's values are
//! bound by position to the schema's attribute names and substituted into the
//! compiled template.
//!
//! ## Key Features
//!
//! - **Default mapping**: field-per-line output derived purely from the
//!   schema, with string values quote-enclosed
//! - **Custom mapping**: Mustache-style `{{{name}}}` placeholders, raw and
//!   unescaped, with lenient missing-key substitution
//! - **Event grouping**: multiple records joined into one blob by a
//!   configurable delimiter, with no dangling trailing delimiter
//! - **Cross-platform line endings**: `\n` or `\r\n` threads through both
//!   field separation and group separation
//!
//! # Core Modules
//!
//! - [`schema`] - Attribute schemas, typed values, events, and payload specs
//! - [`templating`] - Template compilation, synthesis, and rendering
//! - [`mapper`] - The orchestrator: configuration, grouping, publish sink
//! - [`core`] - Crate error types
//!
//! # Example
//!
//! ```rust
//! use textmap::mapper::{SinkListener, TextMapperConfig, TextSinkMapper};
//! use textmap::schema::{Attribute, AttributeType, Event, StreamSchema};
//!
//! struct Captured(Vec<String>);
//! impl SinkListener for Captured {
//!     fn publish(&mut self, payload: String) {
//!         self.0.push(payload);
//!     }
//! }
//!
//! let schema = StreamSchema::new(
//!     "FooStream",
//!     vec![
//!         Attribute::new("symbol", AttributeType::String),
//!         Attribute::new("price", AttributeType::Float),
//!         Attribute::new("volume", AttributeType::Long),
//!     ],
//! );
//! let mapper = TextSinkMapper::new(schema, None, TextMapperConfig::default()).unwrap();
//!
//! let mut sink = Captured(Vec::new());
//! let event = Event::new(vec!["WSO2".into(), 55.6f32.into(), 100i64.into()]);
//! mapper.map_and_send(&event, &mut sink);
//!
//! assert_eq!(sink.0[0], "symbol:\"WSO2\",\nprice:55.6,\nvolume:100");
//! ```

// Core functionality modules
pub mod core;
pub mod mapper;
pub mod schema;
pub mod templating;

// Supporting modules
pub mod constants;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
