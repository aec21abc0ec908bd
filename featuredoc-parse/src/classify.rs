//! Line classification.
//!
//! Decides the block-level category of a single input line given the current
//! scanner state. Classification is pure with respect to the line; the state
//! is read only for precedence (everything inside an open fence is code
//! content, bullet and blank lines are section-significant only while a
//! section is open). Rules are evaluated in strict priority order and the
//! first match wins; a line that matches nothing is a `Noop`, so every line
//! classifies to something and the scan cannot fail.

use crate::scan::ScannerState;

/// The fence delimiter opening and closing a code block. A language tag may
/// follow on the opening fence; it is not parsed.
const FENCE: &str = "```";

/// Category assigned to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Verbatim interior line of an open code fence.
    CodeContent(String),
    /// A fence line; opens or closes a code block.
    FenceToggle,
    /// ATX heading, levels 1 through 3.
    Heading { level: u8, text: String },
    /// `**Label:**` opener with its trimmed inline value.
    SectionOpen { label: String, inline_value: String },
    /// Bullet line inside an open section.
    SectionItem(String),
    /// Blank line closing the open section.
    SectionClose,
    /// `---` divider.
    HorizontalRule,
    /// Freeform body text.
    Paragraph(String),
    /// Line that produces no block.
    Noop,
}

/// Classify one input line against the current scanner state.
pub fn classify(line: &str, state: &ScannerState) -> Classification {
    let trimmed = line.trim();
    let is_fence = trimmed.starts_with(FENCE);

    // An open fence swallows everything except the fence marker itself.
    if state.in_code_block && !is_fence {
        return Classification::CodeContent(line.to_string());
    }
    if is_fence {
        return Classification::FenceToggle;
    }

    if let Some(text) = line.strip_prefix("# ") {
        return Classification::Heading {
            level: 1,
            text: text.to_string(),
        };
    }
    if let Some(text) = line.strip_prefix("## ") {
        return Classification::Heading {
            level: 2,
            text: text.to_string(),
        };
    }
    if let Some(text) = line.strip_prefix("### ") {
        return Classification::Heading {
            level: 3,
            text: text.to_string(),
        };
    }

    if let Some((label, inline_value)) = section_opener(line) {
        return Classification::SectionOpen {
            label,
            inline_value,
        };
    }

    if state.open_section.is_some() {
        if let Some(item) = trimmed.strip_prefix("- ") {
            return Classification::SectionItem(item.to_string());
        }
        if trimmed.is_empty() {
            return Classification::SectionClose;
        }
    }

    if trimmed == "---" {
        return Classification::HorizontalRule;
    }

    // Paragraph text keeps the raw line; only bold-prefixed lines are
    // excluded, since a bold line that reached this point is not a valid
    // section opener.
    if !trimmed.is_empty() && !line.starts_with("**") {
        return Classification::Paragraph(line.to_string());
    }

    Classification::Noop
}

/// Match `**<label>:**<rest>` with a non-empty label.
///
/// The label ends at the first `:**` after the opening bold marker; the rest
/// of the line is the trimmed inline value.
fn section_opener(line: &str) -> Option<(String, String)> {
    let body = line.strip_prefix("**")?;
    let idx = match body.find(":**")? {
        // A match at offset 0 would make the label empty; look past it.
        0 => body[1..].find(":**").map(|i| i + 1)?,
        i => i,
    };
    let label = body[..idx].to_string();
    let inline_value = body[idx + 3..].trim().to_string();
    Some((label, inline_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{OpenSection, ScannerState};

    fn scanning() -> ScannerState {
        ScannerState::default()
    }

    fn in_code() -> ScannerState {
        ScannerState {
            in_code_block: true,
            ..ScannerState::default()
        }
    }

    fn in_section() -> ScannerState {
        ScannerState {
            open_section: Some(OpenSection::new("Endpoints".into(), vec![], 1)),
            ..ScannerState::default()
        }
    }

    #[test]
    fn heading_levels() {
        assert_eq!(
            classify("# Title", &scanning()),
            Classification::Heading {
                level: 1,
                text: "Title".into()
            }
        );
        assert_eq!(
            classify("## Sub", &scanning()),
            Classification::Heading {
                level: 2,
                text: "Sub".into()
            }
        );
        assert_eq!(
            classify("### Deep", &scanning()),
            Classification::Heading {
                level: 3,
                text: "Deep".into()
            }
        );
    }

    #[test]
    fn four_hashes_is_paragraph() {
        // Only levels 1-3 exist in the dialect.
        assert_eq!(
            classify("#### Too deep", &scanning()),
            Classification::Paragraph("#### Too deep".into())
        );
    }

    #[test]
    fn heading_requires_space() {
        assert_eq!(
            classify("#NoSpace", &scanning()),
            Classification::Paragraph("#NoSpace".into())
        );
    }

    #[test]
    fn fence_toggle_plain_and_tagged() {
        assert_eq!(classify("```", &scanning()), Classification::FenceToggle);
        assert_eq!(
            classify("```python", &scanning()),
            Classification::FenceToggle
        );
        // Indented fences count: the marker is matched on the trimmed line.
        assert_eq!(classify("  ```", &scanning()), Classification::FenceToggle);
    }

    #[test]
    fn open_fence_swallows_everything() {
        assert_eq!(
            classify("# Not a heading", &in_code()),
            Classification::CodeContent("# Not a heading".into())
        );
        assert_eq!(
            classify("---", &in_code()),
            Classification::CodeContent("---".into())
        );
        assert_eq!(classify("", &in_code()), Classification::CodeContent("".into()));
    }

    #[test]
    fn code_content_is_verbatim() {
        assert_eq!(
            classify("    indented ", &in_code()),
            Classification::CodeContent("    indented ".into())
        );
    }

    #[test]
    fn section_opener_with_inline_value() {
        assert_eq!(
            classify("**Type:** API + Model", &scanning()),
            Classification::SectionOpen {
                label: "Type".into(),
                inline_value: "API + Model".into()
            }
        );
    }

    #[test]
    fn section_opener_without_inline_value() {
        assert_eq!(
            classify("**Endpoints:**", &scanning()),
            Classification::SectionOpen {
                label: "Endpoints".into(),
                inline_value: String::new()
            }
        );
    }

    #[test]
    fn bold_without_label_pattern_is_noop() {
        assert_eq!(classify("**just bold**", &scanning()), Classification::Noop);
        assert_eq!(classify("**:**empty label", &scanning()), Classification::Noop);
        assert_eq!(classify("**", &scanning()), Classification::Noop);
    }

    #[test]
    fn indented_bold_is_paragraph() {
        // The opener is matched on the raw line, so indentation disqualifies
        // it and the bold-exclusion on paragraphs no longer applies either.
        assert_eq!(
            classify("  **Type:** x", &scanning()),
            Classification::Paragraph("  **Type:** x".into())
        );
    }

    #[test]
    fn bullet_requires_open_section() {
        assert_eq!(
            classify("- loose bullet", &scanning()),
            Classification::Paragraph("- loose bullet".into())
        );
        assert_eq!(
            classify("- item", &in_section()),
            Classification::SectionItem("item".into())
        );
        assert_eq!(
            classify("  - indented item", &in_section()),
            Classification::SectionItem("indented item".into())
        );
    }

    #[test]
    fn blank_closes_only_open_section() {
        assert_eq!(classify("", &scanning()), Classification::Noop);
        assert_eq!(classify("   ", &scanning()), Classification::Noop);
        assert_eq!(classify("", &in_section()), Classification::SectionClose);
    }

    #[test]
    fn heading_wins_over_open_section() {
        assert_eq!(
            classify("# Still a heading", &in_section()),
            Classification::Heading {
                level: 1,
                text: "Still a heading".into()
            }
        );
    }

    #[test]
    fn horizontal_rule_exact() {
        assert_eq!(classify("---", &scanning()), Classification::HorizontalRule);
        assert_eq!(
            classify("  ---  ", &scanning()),
            Classification::HorizontalRule
        );
        assert_eq!(
            classify("----", &scanning()),
            Classification::Paragraph("----".into())
        );
    }

    #[test]
    fn rule_inside_open_section_is_still_a_rule() {
        assert_eq!(
            classify("---", &in_section()),
            Classification::HorizontalRule
        );
    }
}
