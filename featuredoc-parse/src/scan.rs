//! Single-pass block scanner.
//!
//! Splits the input into lines, classifies each one, and folds the
//! classifications through a small state machine that accumulates code
//! fences and feature sections and emits finished blocks in document order.
//! The scan never fails: malformed input degrades to paragraphs or dropped
//! lines, and the drops are surfaced as non-fatal diagnostics.

use crate::classify::{Classification, classify};
use crate::error::{Diagnostic, Severity};
use crate::types::{Block, FeatureDoc, Span};

/// Result of scanning a FeatureDoc.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// The scanned document.
    pub doc: FeatureDoc,
    /// Non-fatal diagnostics collected during the scan.
    pub diagnostics: Vec<Diagnostic>,
}

/// Accumulator for a feature section that has been opened but not closed yet.
#[derive(Debug, Clone)]
pub struct OpenSection {
    pub(crate) label: String,
    pub(crate) items: Vec<String>,
    pub(crate) start_line: usize, // 1-based
    pub(crate) last_line: usize,
}

impl OpenSection {
    pub(crate) fn new(label: String, items: Vec<String>, start_line: usize) -> Self {
        Self {
            label,
            items,
            start_line,
            last_line: start_line,
        }
    }

    fn into_block(self) -> Block {
        Block::FeatureSection {
            label: self.label,
            items: self.items,
            span: Span {
                start_line: self.start_line,
                end_line: self.last_line,
            },
        }
    }
}

/// Transient scanner state. A fresh value is created per scan call and
/// discarded once the block sequence is produced; identical input always
/// yields an identical result.
///
/// At most one accumulation target is active at a time: while
/// `in_code_block` is set, every line is code content regardless of shape,
/// so section lines cannot interleave with fence content.
#[derive(Debug, Clone, Default)]
pub struct ScannerState {
    pub in_code_block: bool,
    pub(crate) code_acc: Vec<String>,
    pub open_section: Option<OpenSection>,
    pub(crate) fence_open_line: usize,
}

/// Scan a FeatureDoc string into an ordered block sequence.
///
/// This function never panics. Every line classifies to something, so the
/// scan always completes; partial constructs left open at end of input
/// (an unterminated fence or section) are discarded rather than flushed,
/// with a warning diagnostic for each.
pub fn scan(input: &str) -> ScanResult {
    let mut diagnostics = Vec::new();

    // Normalise CRLF → LF.
    let normalised = input.replace("\r\n", "\n");
    let lines: Vec<&str> = normalised.split('\n').collect();

    let mut blocks: Vec<Block> = Vec::new();
    let mut state = ScannerState::default();

    for (idx, &line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        match classify(line, &state) {
            Classification::CodeContent(text) => {
                state.code_acc.push(text);
            }
            Classification::FenceToggle => {
                if state.in_code_block {
                    blocks.push(Block::CodeBlock {
                        lines: std::mem::take(&mut state.code_acc),
                        span: Span {
                            start_line: state.fence_open_line,
                            end_line: line_no,
                        },
                    });
                    state.in_code_block = false;
                } else {
                    state.in_code_block = true;
                    state.code_acc.clear();
                    state.fence_open_line = line_no;
                }
            }
            Classification::Heading { level, text } => {
                blocks.push(Block::Heading {
                    level,
                    text,
                    span: line_span(line_no),
                });
            }
            Classification::SectionOpen {
                label,
                inline_value,
            } => {
                // A new opener closes the current section first; item lists
                // are never merged across two labels.
                if let Some(open) = state.open_section.take() {
                    blocks.push(open.into_block());
                }
                let items = if inline_value.is_empty() {
                    Vec::new()
                } else {
                    vec![inline_value]
                };
                state.open_section = Some(OpenSection::new(label, items, line_no));
            }
            Classification::SectionItem(text) => {
                if let Some(open) = state.open_section.as_mut() {
                    open.items.push(text);
                    open.last_line = line_no;
                }
            }
            Classification::SectionClose => {
                if let Some(open) = state.open_section.take() {
                    blocks.push(open.into_block());
                }
            }
            Classification::HorizontalRule => {
                blocks.push(Block::HorizontalRule {
                    span: line_span(line_no),
                });
            }
            Classification::Paragraph(text) => {
                blocks.push(Block::Paragraph {
                    text,
                    span: line_span(line_no),
                });
            }
            Classification::Noop => {
                // The only non-blank lines that reach here are bold lines
                // that match no rule. The dialect drops them; flag the loss.
                if !line.trim().is_empty() {
                    diagnostics.push(Diagnostic {
                        severity: Severity::Warning,
                        message: format!(
                            "Line matches no block rule and was dropped: '{}'",
                            line.trim()
                        ),
                        span: Some(line_span(line_no)),
                        code: Some("W003".into()),
                    });
                }
            }
        }
    }

    // End of input: accumulators still open are discarded, not flushed.
    if state.in_code_block {
        diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            message: format!(
                "Unclosed code fence opened at line {}; its content was discarded",
                state.fence_open_line
            ),
            span: Some(Span {
                start_line: state.fence_open_line,
                end_line: lines.len(),
            }),
            code: Some("W001".into()),
        });
    }
    if let Some(open) = state.open_section {
        diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            message: format!(
                "Feature section '{}' opened at line {} was never closed and was discarded",
                open.label, open.start_line
            ),
            span: Some(Span {
                start_line: open.start_line,
                end_line: lines.len(),
            }),
            code: Some("W002".into()),
        });
    }

    ScanResult {
        doc: FeatureDoc {
            blocks,
            source: normalised,
        },
        diagnostics,
    }
}

fn line_span(line_no: usize) -> Span {
    Span {
        start_line: line_no,
        end_line: line_no,
    }
}
