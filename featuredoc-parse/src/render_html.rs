//! HTML fragment renderer.
//!
//! Produces semantic HTML with `fdoc-*` CSS classes, one element per block.
//! All text content is HTML-escaped. No `<html>`, `<head>`, or `<body>`
//! wrapper is added; the embedding page owns layout and styling.

use crate::types::{Block, FeatureDoc};

/// Render a `FeatureDoc` as an HTML fragment.
pub fn to_html(doc: &FeatureDoc) -> String {
    let mut parts: Vec<String> = Vec::new();

    for block in &doc.blocks {
        parts.push(render_block(block));
    }

    parts.join("\n")
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, text, .. } => {
            format!(
                "<h{level} class=\"fdoc-heading\">{}</h{level}>",
                escape_html(text)
            )
        }

        Block::CodeBlock { lines, .. } => {
            format!(
                "<pre class=\"fdoc-code\"><code>{}</code></pre>",
                escape_html(&lines.join("\n"))
            )
        }

        Block::FeatureSection { label, items, .. } => {
            let mut out = String::from("<div class=\"fdoc-section\">\n");
            out.push_str(&format!(
                "  <div class=\"fdoc-section-label\">{}</div>\n",
                escape_html(label)
            ));
            out.push_str("  <ul class=\"fdoc-section-items\">\n");
            for item in items {
                out.push_str(&format!("    <li>{}</li>\n", escape_html(item)));
            }
            out.push_str("  </ul>\n</div>");
            out
        }

        Block::HorizontalRule { .. } => "<hr class=\"fdoc-rule\">".to_string(),

        Block::Paragraph { text, .. } => {
            format!("<p class=\"fdoc-paragraph\">{}</p>", escape_html(text))
        }
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
