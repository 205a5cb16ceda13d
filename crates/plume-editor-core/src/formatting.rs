//! Formatting actions and the delimiters they wrap the selection with.

use smol_str::SmolStr;

use crate::text::TextBuffer;
use crate::types::Selection;
use crate::wrap::wrap_selection;

/// Formatting actions available from the composer toolbar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatAction {
    Bold,
    Italic,
    Heading(u8), // 1-3
    CodeBlock,
    /// Link to the given target, captured from the user before applying.
    Link(SmolStr),
}

/// Prefix, suffix and placeholder text for one format action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delimiters {
    pub prefix: SmolStr,
    pub suffix: SmolStr,
    pub fallback: &'static str,
}

impl FormatAction {
    /// Heading levels outside 1..=3 are clamped into range.
    pub fn heading(level: u8) -> Self {
        Self::Heading(level.clamp(1, 3))
    }

    pub fn delimiters(&self) -> Delimiters {
        match self {
            FormatAction::Bold => Delimiters {
                prefix: "**".into(),
                suffix: "**".into(),
                fallback: "bold text",
            },
            FormatAction::Italic => Delimiters {
                prefix: "*".into(),
                suffix: "*".into(),
                fallback: "italic text",
            },
            FormatAction::Heading(level) => {
                let level = (*level).clamp(1, 3);
                Delimiters {
                    prefix: format!("{} ", "#".repeat(level as usize)).into(),
                    suffix: "\n".into(),
                    fallback: match level {
                        1 => "Heading 1",
                        2 => "Heading 2",
                        _ => "Heading 3",
                    },
                }
            }
            FormatAction::CodeBlock => Delimiters {
                prefix: "```\n".into(),
                suffix: "\n```".into(),
                fallback: "code",
            },
            FormatAction::Link(url) => Delimiters {
                prefix: "[".into(),
                suffix: format!("]({url})").into(),
                fallback: "link text",
            },
        }
    }

    /// Toolbar label.
    pub fn label(&self) -> &'static str {
        match self {
            FormatAction::Bold => "B",
            FormatAction::Italic => "I",
            FormatAction::Heading(level) => match (*level).clamp(1, 3) {
                1 => "H1",
                2 => "H2",
                _ => "H3",
            },
            FormatAction::CodeBlock => "</>",
            FormatAction::Link(_) => "🔗",
        }
    }
}

/// Apply a format action to the buffer, returning the selection to restore.
pub fn apply_format<B: TextBuffer>(buf: &mut B, selection: Selection, action: &FormatAction) -> Selection {
    let Delimiters {
        prefix,
        suffix,
        fallback,
    } = action.delimiters();
    tracing::debug!(?action, start = selection.start(), end = selection.end(), "applying format");
    wrap_selection(buf, selection, &prefix, &suffix, fallback)
}

/// Turn a prompt answer into a link action; blank or cancelled answers yield `None`.
pub fn link_from_prompt(answer: Option<&str>) -> Option<FormatAction> {
    let target = answer?.trim();
    if target.is_empty() {
        None
    } else {
        Some(FormatAction::Link(target.into()))
    }
}
