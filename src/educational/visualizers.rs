//! ASCII renderers for the walkthrough.
//!
//! This module turns a [`SessionView`] into terminal text: the stage
//! stepper, the token/value table, the attention highlight row, the
//! generation line, and the deep-dive panels. Widths are counted in chars
//! so accented Catalan text lines up.

use crate::core::stage::{StageCatalog, StageKind};
use crate::core::token::Token;
use crate::engine::SessionView;

use super::explanations::{InsightPanel, stage_note};

/// Width of boxed content.
const BOX_WIDTH: usize = 64;

/// Cursor shown while fragments are still arriving.
const CURSOR: char = '█';

/// Clears any ANSI color set before it.
const RESET: &str = "\x1b[0m";

fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{s}{}", " ".repeat(fill))
}

fn center(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    let left = fill / 2;
    format!("{}{s}{}", " ".repeat(left), " ".repeat(fill - left))
}

/// Greedy word wrap to `width` chars. Words longer than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                lines.push(word.drain(..width).collect());
            }
            if word.is_empty() {
                continue;
            }
            let word: String = word.into_iter().collect();
            let separator = usize::from(!line.is_empty());
            let needed = display_width(&line) + separator + display_width(&word);
            if separator == 1 && needed > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&word);
        }
        lines.push(line);
    }
    lines
}

/// Draw `text` in a box of `width` columns with an optional title.
pub fn box_text(text: &str, title: &str, width: usize) -> String {
    let width = width.max(title.chars().count() + 6).max(8);
    let content_width = width - 4;
    let mut result = Vec::new();

    if title.is_empty() {
        result.push(format!("┌{}┐", "─".repeat(width - 2)));
    } else {
        let title_part = format!(" {title} ");
        let remaining = width - 2 - display_width(&title_part);
        let left = remaining / 2;
        let right = remaining - left;
        result.push(format!(
            "┌{}{}{}┐",
            "─".repeat(left),
            title_part,
            "─".repeat(right)
        ));
    }

    for line in wrap(text, content_width) {
        result.push(format!("│ {} │", pad(&line, content_width)));
    }

    result.push(format!("└{}┘", "─".repeat(width - 2)));
    result.join("\n")
}

/// Stage stepper: every title, the current one bracketed.
///
/// ```text
/// [1 El Prompt] · 2 Tokenització · 3 El Transformer · ...
/// ```
pub fn stepper_bar(catalog: &StageCatalog, current: usize) -> String {
    catalog
        .iter()
        .map(|stage| {
            if stage.id == current {
                format!("[{} {}]", stage.id + 1, stage.title)
            } else {
                format!("{} {}", stage.id + 1, stage.title)
            }
        })
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Two-row table of token texts over their synthetic values.
///
/// ```text
/// ╭─────┬────┬───────┬────┬───────╮
/// │ Com │ es │ cuina │ un │ ou?   │
/// │  ↓  │ ↓  │   ↓   │ ↓  │  ↓    │
/// │ 812 │ 44 │ 31907 │ 7  │ 12001 │
/// ╰─────┴────┴───────┴────┴───────╯
/// ```
pub fn token_table(tokens: &[Token]) -> String {
    if tokens.is_empty() {
        return box_text("(cap token)", "", 40);
    }

    let widths: Vec<usize> = tokens
        .iter()
        .map(|t| display_width(&t.text).max(t.value.to_string().len()))
        .collect();

    let border = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}", segments.join(mid))
    };
    let row = |cells: Vec<String>| {
        let parts: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!(" {} ", pad(cell, *w)))
            .collect();
        format!("│{}│", parts.join("│"))
    };

    [
        border("╭", "┬", "╮"),
        row(tokens.iter().map(|t| t.text.clone()).collect()),
        row(widths.iter().map(|w| center("↓", *w)).collect()),
        row(tokens.iter().map(|t| t.value.to_string()).collect()),
        border("╰", "┴", "╯"),
    ]
    .join("\n")
}

/// Token row with salient tokens bracketed and the rest dimmed in parens.
pub fn salience_row(tokens: &[Token], salience: &[bool]) -> String {
    if tokens.is_empty() {
        return "(cap token)".to_string();
    }
    tokens
        .iter()
        .zip(salience.iter().chain(std::iter::repeat(&false)))
        .map(|(t, &salient)| {
            if salient {
                format!("⟦{}⟧", t.text)
            } else {
                format!("({})", t.text)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Prompt echo followed by the revealed fragments, with a cursor while playing.
pub fn generation_line(prompt: &str, revealed: &[String], playing: bool) -> String {
    let mut line = prompt.trim().to_string();
    if !revealed.is_empty() {
        line.push_str(" » ");
        line.push_str(&revealed.join(" "));
    }
    if playing {
        line.push(' ');
        line.push(CURSOR);
    }
    line
}

/// Final response box for the decoding stage.
pub fn decoded_box(text: &str) -> String {
    let arrow = "010110... ──▶";
    format!("{arrow}\n{}", box_text(&format!("\"{text}\""), "", BOX_WIDTH))
}

/// Deep-dive panel with its entries and closing quote.
pub fn insight_panel(panel: &InsightPanel) -> String {
    let mut body = Vec::new();
    for entry in panel.entries {
        body.push(format!("▸ {}", entry.title));
        body.push(entry.desc.to_string());
        body.push(String::new());
    }
    body.push(format!("“{}”", panel.quote));
    box_text(&body.join("\n"), panel.heading, BOX_WIDTH)
}

/// Full text rendering of the current stage.
pub fn render_stage(view: &SessionView<'_>, catalog: &StageCatalog) -> String {
    let stage = view.stage;
    let mut out = Vec::new();

    out.push(stepper_bar(catalog, view.stage_index));
    out.push(String::new());
    out.push(format!(
        "{}{} · {}{RESET}    [{}]",
        stage.accent.ansi(),
        stage.title,
        stage.subtitle,
        view.progress
    ));
    out.push("═".repeat(BOX_WIDTH));

    match stage.kind {
        StageKind::Prompt => {
            out.push(box_text(view.prompt, "El teu prompt", BOX_WIDTH));
            out.push(String::new());
            out.push(format!("\"{}\"", stage.body));
        }
        StageKind::Tokenization => {
            out.push(stage.body.clone());
            out.push(String::new());
            out.push(token_table(view.tokens));
        }
        StageKind::Attention => {
            out.push(stage.body.clone());
            out.push(String::new());
            out.push(salience_row(view.tokens, &view.salience));
        }
        StageKind::Inference => {
            out.push(stage.body.clone());
            out.push(String::new());
            out.push(box_text(
                &generation_line(view.prompt, view.revealed, view.is_playing),
                "",
                BOX_WIDTH,
            ));
            if view.can_start_playback {
                out.push("[g] Iniciar Inferència".to_string());
            }
        }
        StageKind::Decoding => {
            out.push(stage.body.clone());
            out.push(String::new());
            out.push(decoded_box(&view.decoded_text));
        }
    }

    if let Some(note) = stage_note(stage.kind) {
        out.push(String::new());
        out.push(box_text(note.text, note.title, BOX_WIDTH));
    }

    out.push(String::new());
    let prev = if view.can_previous { "[p] Anterior" } else { "" };
    let next = if view.can_next { "[n] Següent pas" } else { "" };
    out.push(format!("{prev:<12}    {next}").trim_end().to_string());

    out.join("\n")
}
