use serde::{Deserialize, Serialize};

/// A scanned FeatureDoc document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureDoc {
    /// Ordered sequence of display blocks in document order.
    pub blocks: Vec<Block>,
    /// Normalised source text that was scanned.
    pub source: String,
}

/// A display block produced by the scanner.
///
/// The five kinds are a closed set; consumers are expected to match
/// exhaustively so a new kind cannot be silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Block {
    /// ATX-style heading, levels 1 through 3.
    Heading { level: u8, text: String, span: Span },
    /// Fenced code block. Interior lines verbatim (blank lines included),
    /// fence delimiters excluded.
    CodeBlock { lines: Vec<String>, span: Span },
    /// Labelled callout opened by a bold `**Label:**` line, accumulating the
    /// inline value (when non-empty) and subsequent bullet items in order.
    FeatureSection {
        label: String,
        items: Vec<String>,
        span: Span,
    },
    /// `---` divider.
    HorizontalRule { span: Span },
    /// Freeform body text, one source line.
    Paragraph { text: String, span: Span },
}

impl Block {
    /// Source location of this block.
    pub fn span(&self) -> Span {
        match self {
            Block::Heading { span, .. }
            | Block::CodeBlock { span, .. }
            | Block::FeatureSection { span, .. }
            | Block::HorizontalRule { span }
            | Block::Paragraph { span, .. } => *span,
        }
    }
}

/// Source location of a block in the original document.
///
/// A `FeatureSection` spans from its opening label line to its last
/// accumulated item line; a `CodeBlock` from opening fence to closing fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// 1-based starting line number.
    pub start_line: usize,
    /// 1-based ending line number (inclusive).
    pub end_line: usize,
}
