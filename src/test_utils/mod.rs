//! Test utilities shared by unit and integration tests.
//!
//! Available to integration tests through the `test-utils` cargo feature.

use crate::mapper::SinkListener;

/// A publish sink that captures every payload it receives.
#[derive(Debug, Default)]
pub struct CollectingSink {
    payloads: Vec<String>,
}

impl CollectingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The payloads published so far, in publish order.
    pub fn payloads(&self) -> &[String] {
        &self.payloads
    }
}

impl SinkListener for CollectingSink {
    fn publish(&mut self, payload: String) {
        self.payloads.push(payload);
    }
}
