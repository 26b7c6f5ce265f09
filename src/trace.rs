//! Recorded rendering-engine event traces.
//!
//! A trace is a JSON document listing, page by page, the drawing events a
//! rendering engine reported. Replaying a trace through a
//! [`Translator`](crate::translator::Translator) reproduces the page's
//! command stream without the engine.
//!
//! ```json
//! {
//!   "pages": [
//!     {
//!       "label": "i",
//!       "events": [
//!         {"op": "font_changed", "font": {"family": "Arial"}, "size": 10},
//!         {"op": "draw_string", "origin": [72, 90], "text": "Summary"},
//!         {"op": "stroke_path", "path": [[[72, 95], [540, 95]]]}
//!       ]
//!     }
//!   ]
//! }
//! ```

use crate::device::DrawEvent;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Events of one page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageTrace {
    /// Page label, if the document defines one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Events in content stream order
    #[serde(default)]
    pub events: Vec<DrawEvent>,
}

/// A recorded multi-page trace.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trace {
    /// Pages in document order
    pub pages: Vec<PageTrace>,
}

impl Trace {
    /// Read a trace from JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read a trace from a JSON file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
