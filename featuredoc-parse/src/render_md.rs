//! Dialect degradation renderer.
//!
//! Converts a block sequence back into FeatureDoc source text. The output is
//! canonical: an inline value is not distinguishable from a first bullet, so
//! every section item is emitted as a bullet line. Scanning the output again
//! yields the same block sequence.

use crate::types::{Block, FeatureDoc};

/// Render a `FeatureDoc` as FeatureDoc source text.
pub fn to_markdown(doc: &FeatureDoc) -> String {
    let mut parts: Vec<String> = Vec::new();

    for block in &doc.blocks {
        parts.push(render_block(block));
    }

    // The trailing newline doubles as the closing blank of a final section.
    let mut out = parts.join("\n\n");
    out.push('\n');
    out
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, text, .. } => {
            format!("{} {}", "#".repeat(*level as usize), text)
        }

        Block::CodeBlock { lines, .. } => {
            if lines.is_empty() {
                "```\n```".to_string()
            } else {
                format!("```\n{}\n```", lines.join("\n"))
            }
        }

        Block::FeatureSection { label, items, .. } => {
            let mut out = vec![format!("**{label}:**")];
            for item in items {
                out.push(format!("- {item}"));
            }
            out.join("\n")
        }

        Block::HorizontalRule { .. } => "---".to_string(),

        Block::Paragraph { text, .. } => text.clone(),
    }
}
