//! Prompt assembly: boilerplate blocks around a composed subject

use loom_core::is_specified;

/// Which optional blocks are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockToggles {
    pub include_style: bool,
    pub include_background: bool,
    pub include_mood: bool,
    pub include_extra_modifiers: bool,
}

impl Default for BlockToggles {
    fn default() -> Self {
        Self {
            include_style: true,
            include_background: true,
            include_mood: true,
            include_extra_modifiers: true,
        }
    }
}

impl BlockToggles {
    /// A style reference image is attached: the text style and mood blocks
    /// are dropped so they don't compete with it.
    pub fn style_reference_only() -> Self {
        Self {
            include_style: false,
            include_mood: false,
            ..Self::default()
        }
    }
}

/// Ordered sections of lines.
///
/// Sections are separated by a blank line, lines inside a section by a
/// single newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptDocument {
    sections: Vec<Vec<String>>,
}

impl PromptDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section, dropping blank lines; an all-blank section is skipped
    pub fn push_section<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines
            .into_iter()
            .map(Into::into)
            .filter(|l| !l.trim().is_empty())
            .collect();
        if !lines.is_empty() {
            self.sections.push(lines);
        }
    }

    /// Append a single-line section
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.push_section([line.into()]);
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Final text: trimmed, with exactly one trailing newline
    pub fn render(&self) -> String {
        let body = self
            .sections
            .iter()
            .map(|lines| lines.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\n");
        format!("{}\n", body.trim())
    }
}

/// Everything the assembler needs, already resolved
#[derive(Debug, Clone, Default)]
pub struct AssembleInput<'a> {
    pub style: &'a str,
    pub background: &'a str,
    pub mood: &'a str,
    /// Bare artist names
    pub artists: &'a [String],
    pub subject: &'a str,
    /// Canonical aspect-ratio value, e.g. "1:1 square"
    pub aspect_ratio: &'a str,
    pub extra_modifiers: &'a str,
}

/// Style block with the artist list interpolated, if any
pub fn style_block(style: &str, artists: &[String]) -> String {
    let names: Vec<&str> = artists
        .iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .collect();
    if names.is_empty() {
        style.trim().to_string()
    } else {
        format!("{} Artist style reference: {}.", style.trim(), names.join(", "))
    }
}

/// Ratio token line ("1:1 square" -> "1:1."); `None` when unspecified
pub fn aspect_ratio_line(aspect_ratio: &str) -> Option<String> {
    if !is_specified(aspect_ratio) {
        return None;
    }
    aspect_ratio
        .split_whitespace()
        .next()
        .map(|token| format!("{}.", token))
}

/// Assemble the final prompt.
///
/// Blocks in order: style (+artists), subject, aspect ratio, background,
/// mood, extra modifiers. Empty blocks are omitted.
pub fn assemble_prompt(input: &AssembleInput<'_>, toggles: &BlockToggles) -> String {
    let mut doc = PromptDocument::new();

    if toggles.include_style {
        doc.push_line(style_block(input.style, input.artists));
    }
    doc.push_line(input.subject.trim());
    if let Some(ratio) = aspect_ratio_line(input.aspect_ratio) {
        doc.push_line(ratio);
    }
    if toggles.include_background {
        doc.push_line(input.background.trim());
    }
    if toggles.include_mood {
        doc.push_line(input.mood.trim());
    }
    if toggles.include_extra_modifiers {
        doc.push_line(input.extra_modifiers.trim());
    }

    doc.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(artists: &'a [String], ratio: &'a str, extra: &'a str) -> AssembleInput<'a> {
        AssembleInput {
            style: "cel shading.",
            background: "white background.",
            mood: "film grain.",
            artists,
            subject: "bust portrait, a pilot.",
            aspect_ratio: ratio,
            extra_modifiers: extra,
        }
    }

    #[test]
    fn test_full_block_order() {
        let artists = vec!["Haruhiko Mikimoto".to_string(), "Yoshiyuki Sadamoto".to_string()];
        let text = assemble_prompt(&input(&artists, "1:1 square", "  rain  "), &BlockToggles::default());
        assert_eq!(
            text,
            "cel shading. Artist style reference: Haruhiko Mikimoto, Yoshiyuki Sadamoto.\n\n\
bust portrait, a pilot.\n\n1:1.\n\nwhite background.\n\nfilm grain.\n\nrain\n"
        );
    }

    #[test]
    fn test_ratio_line() {
        let text = assemble_prompt(&input(&[], "1:1 square", ""), &BlockToggles::default());
        assert!(text.lines().any(|l| l == "1:1."));

        let text = assemble_prompt(&input(&[], "Unspecified", ""), &BlockToggles::default());
        assert!(!text.contains(':'));
        assert_eq!(aspect_ratio_line("16:9 widescreen").as_deref(), Some("16:9."));
        assert_eq!(aspect_ratio_line("   "), None);
    }

    #[test]
    fn test_style_reference_only() {
        let text = assemble_prompt(
            &input(&["Someone".to_string()], "Unspecified", "neon rain"),
            &BlockToggles::style_reference_only(),
        );
        assert_eq!(text, "bust portrait, a pilot.\n\nwhite background.\n\nneon rain\n");
    }

    #[test]
    fn test_blank_extra_modifiers_omitted() {
        let text = assemble_prompt(&input(&[], "Unspecified", " \n "), &BlockToggles::default());
        assert!(text.ends_with("film grain.\n"));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn test_idempotent() {
        let artists = vec!["A".to_string()];
        let a = assemble_prompt(&input(&artists, "3:4 portrait", "x"), &BlockToggles::default());
        let b = assemble_prompt(&input(&artists, "3:4 portrait", "x"), &BlockToggles::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_document_sections() {
        let mut doc = PromptDocument::new();
        doc.push_section(["line one", "", "line two"]);
        doc.push_section(Vec::<String>::new());
        doc.push_line("tail");
        assert_eq!(doc.render(), "line one\nline two\n\ntail\n");
    }
}
