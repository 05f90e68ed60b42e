//! Event grouping: delimiter configuration and fragment assembly.
//!
//! When grouping is enabled, the fragments of a batch are combined into one
//! blob with a delimiter line between consecutive records. The assembler
//! tracks fragment boundaries structurally - fragments are collected and
//! joined, rather than concatenated with trailing delimiters that would
//! have to be trimmed back off by string search. Record content that
//! happens to contain the delimiter literal therefore cannot corrupt the
//! assembly.

/// The configured group delimiter: a literal marker plus the line ending
/// that surrounds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDelimiter {
    marker: String,
    line_ending: String,
}

impl GroupDelimiter {
    /// Create a delimiter. The marker must be non-empty; the mapper
    /// validates this before construction.
    pub fn new(marker: impl Into<String>, line_ending: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            line_ending: line_ending.into(),
        }
    }

    /// The delimiter marker itself, without surrounding line endings.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// The full separator inserted between two grouped fragments: the
    /// marker on a line of its own.
    pub fn separator(&self) -> String {
        let mut sep =
            String::with_capacity(self.marker.len() + 2 * self.line_ending.len());
        sep.push_str(&self.line_ending);
        sep.push_str(&self.marker);
        sep.push_str(&self.line_ending);
        sep
    }
}

/// Accumulates rendered fragments for one grouped batch.
///
/// One assembler is used per batch: append every renderable record's
/// fragment, then [`finish`](Self::finish) once to obtain the joined blob.
#[derive(Debug)]
pub struct GroupAssembler {
    delimiter: GroupDelimiter,
    fragments: Vec<String>,
}

impl GroupAssembler {
    /// Create an empty assembler for the given delimiter.
    pub fn new(delimiter: GroupDelimiter) -> Self {
        Self {
            delimiter,
            fragments: Vec::new(),
        }
    }

    /// Append one rendered fragment.
    pub fn append(&mut self, fragment: String) {
        self.fragments.push(fragment);
    }

    /// Whether no fragment has been appended.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Join the accumulated fragments into the final blob.
    ///
    /// Returns `None` when nothing was appended - a batch with zero
    /// renderable records produces no output at all, and callers skip
    /// publishing entirely. A group of one yields the lone fragment with no
    /// delimiter; N fragments yield exactly N-1 separators and no trailing
    /// delimiter.
    pub fn finish(self) -> Option<String> {
        if self.fragments.is_empty() {
            return None;
        }
        Some(self.fragments.join(&self.delimiter.separator()))
    }
}
