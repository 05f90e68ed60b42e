//! Data model for schema-typed events.
//!
//! An output stream is described by a [`StreamSchema`]: an ordered list of
//! named, typed attributes. A record ([`Event`]) carries one
//! [`AttributeValue`] per attribute, aligned by position - `data[i]`
//! corresponds to `attributes[i]`. Attribute order is significant: it
//! defines the field order of the default template and is the positional
//! key used to bind values to placeholder names at render time.
//!
//! The schema is owned by the host record framework and is read-only to
//! this crate. [`PayloadSpec`] carries the raw custom-template text already
//! extracted from the host's payload annotation; validation of its shape
//! happens in the mapper, not here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The type of a single stream attribute.
///
/// `Object` is the only non-scalar type. Object-typed attributes may appear
/// in the default template (their value renders as compact JSON) but must
/// not be referenced from a custom payload template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Int,
    Long,
    Float,
    Double,
    Bool,
    Object,
}

impl AttributeType {
    /// Whether values of this type have a plain single-line text form.
    pub fn is_scalar(self) -> bool {
        !matches!(self, Self::Object)
    }
}

/// One named, typed field of a stream schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
    #[serde(rename = "type")]
    attribute_type: AttributeType,
}

impl Attribute {
    /// Create an attribute with the given name and type.
    pub fn new(name: impl Into<String>, attribute_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attribute_type,
        }
    }

    /// The attribute's name, as referenced by template placeholders.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attribute's declared type.
    pub fn attribute_type(&self) -> AttributeType {
        self.attribute_type
    }
}

/// Ordered attribute schema of one output stream.
///
/// The stream id is carried for error reporting and logging; the attribute
/// order defines both default-template field order and the positional
/// alignment of event values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamSchema {
    id: String,
    attributes: Vec<Attribute>,
}

impl StreamSchema {
    /// Create a schema for the stream with the given id.
    pub fn new(id: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            id: id.into(),
            attributes,
        }
    }

    /// The stream id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The ordered attribute list.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name() == name)
    }
}

/// One attribute value of an event.
///
/// `Display` yields the canonical text form substituted into templates:
/// strings verbatim (quoting is the template's concern, not the value's),
/// numbers and booleans in their standard formatting, `Null` as empty text,
/// and `Object` as compact JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Null,
    String(String),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Bool(bool),
    Object(serde_json::Value),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::String(s) => f.write_str(s),
            Self::Int(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Object(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f32> for AttributeValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// One record to be rendered: values positionally aligned with the schema.
///
/// Immutable once handed to the mapper. Equal length with the schema is a
/// precondition enforced by the upstream record framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    data: Vec<AttributeValue>,
}

impl Event {
    /// Create an event from its positional values.
    pub fn new(data: Vec<AttributeValue>) -> Self {
        Self { data }
    }

    /// The positional values.
    pub fn data(&self) -> &[AttributeValue] {
        &self.data
    }
}

/// The custom payload specification extracted from the host's annotation.
///
/// Holds the raw template fragment texts as authored. A well-formed spec
/// contains exactly one fragment; the mapper rejects anything else at
/// setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadSpec {
    fragments: Vec<String>,
}

impl PayloadSpec {
    /// Create a spec from raw fragment texts.
    pub fn new(fragments: Vec<String>) -> Self {
        Self { fragments }
    }

    /// Convenience constructor for the common single-fragment case.
    pub fn single(fragment: impl Into<String>) -> Self {
        Self {
            fragments: vec![fragment.into()],
        }
    }

    /// The raw fragment texts.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }
}
