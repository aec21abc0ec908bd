//! `featuredoc-parse` — scanner for the FeatureDoc dialect.
//!
//! FeatureDoc is the constrained markdown-like dialect used by embedded
//! documentation viewers: ATX headings (levels 1-3), triple-backtick code
//! fences, bold `**Label:**` feature sections accumulating bullet items,
//! `---` rules, and freeform paragraphs. This crate provides the single-pass
//! line scanner that turns source text into an ordered sequence of typed
//! display blocks, plus renderers mapping each block kind to a presentation
//! widget.
//!
//! # Quick start
//!
//! ```
//! let result = featuredoc_parse::scan("## Example\n**Field:** value\n- x\n\nDone\n");
//! assert!(result.diagnostics.is_empty());
//! assert_eq!(result.doc.blocks.len(), 3);
//! ```

pub mod classify;
pub mod error;
pub mod render_html;
pub mod render_md;
#[cfg(feature = "terminal")]
pub mod render_term;
pub mod scan;
pub mod types;

pub use error::*;
pub use scan::{ScanResult, scan};
pub use types::*;

impl FeatureDoc {
    /// Render this document back to canonical FeatureDoc source text.
    pub fn to_markdown(&self) -> String {
        render_md::to_markdown(self)
    }

    /// Render this document as an HTML fragment with `fdoc-*` CSS classes.
    pub fn to_html(&self) -> String {
        render_html::to_html(self)
    }

    /// Render this document as ANSI-colored terminal text.
    #[cfg(feature = "terminal")]
    pub fn to_terminal(&self) -> String {
        render_term::to_terminal(self)
    }
}
