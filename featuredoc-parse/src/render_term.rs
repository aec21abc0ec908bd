//! ANSI terminal renderer.
//!
//! Produces colored terminal output using the `colored` crate. Each block
//! kind gets a distinctive visual treatment suitable for CLI display.

use colored::Colorize;

use crate::types::{Block, FeatureDoc};

/// Render a `FeatureDoc` as ANSI-colored terminal text.
pub fn to_terminal(doc: &FeatureDoc) -> String {
    let mut parts: Vec<String> = Vec::new();

    for block in &doc.blocks {
        parts.push(render_block(block));
    }

    parts.join("\n\n")
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, text, .. } => match level {
            1 => format!("{}", text.bold().underline()),
            2 => format!("{}", text.bold().cyan()),
            _ => format!("{}", text.bold()),
        },

        Block::CodeBlock { lines, .. } => {
            let border = format!("{}", "\u{2500}\u{2500}\u{2500}".dimmed()); // ───
            let mut out = vec![border.clone()];
            for line in lines {
                out.push(format!("  {line}"));
            }
            out.push(border);
            out.join("\n")
        }

        Block::FeatureSection { label, items, .. } => {
            let border = format!("{}", "\u{2502}".cyan()); // │
            let mut out = vec![format!("{border} {}", label.bold())];
            for item in items {
                out.push(format!("{border} {} {item}", "\u{2022}".cyan())); // •
            }
            out.join("\n")
        }

        Block::HorizontalRule { .. } => {
            format!("{}", "\u{2500}".repeat(40).dimmed())
        }

        Block::Paragraph { text, .. } => text.clone(),
    }
}
