//! # Rendering Module
//!
//! Styled terminal output through minijinja templates, with terminal color
//! detection from `console`.
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they
//! need Unicode-aware processing. Templates handle presentation: which style a
//! cell gets and where separators go.

use super::styles::{names, LIBRIS_THEME};
use super::templates::{
    CATALOG_HTML_TEMPLATE, CATALOG_TEMPLATE, MESSAGES_TEMPLATE, SHELVES_TEMPLATE,
    TEXT_LIST_TEMPLATE,
};
use console::Term;
use libris::api::{CmdMessage, MessageLevel};
use libris::shelf::Shelf;
use libris::view::{Availability, BookBlock, CatalogView};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Widest the book details column gets before titles are truncated.
pub const DETAILS_WIDTH: usize = 32;
pub const EMPTY_CATALOG: &str = "No books in archive.";
const RULE_CHAR: &str = "─";

/// Whether styled output should be produced for stdout.
pub fn colors_enabled(no_color: bool) -> bool {
    !no_color && Term::stdout().features().colors_supported()
}

/// One terminal line of the catalog table. Cells come pre-truncated, with
/// padding kept apart so styles never cover it.
#[derive(Serialize, Default)]
struct TableLine {
    details: String,
    details_pad: String,
    details_style: &'static str,
    copy_id: String,
    copy_pad: String,
    location: String,
    location_pad: String,
    status: String,
    status_pad: String,
    status_style: &'static str,
    history: String,
}

#[derive(Serialize)]
struct BlockData {
    lines: Vec<TableLine>,
}

#[derive(Serialize)]
struct CatalogData {
    empty: bool,
    empty_message: &'static str,
    header: TableLine,
    blocks: Vec<BlockData>,
    rule: String,
}

#[derive(Serialize)]
struct HtmlData<'a> {
    empty: bool,
    books: &'a [BookBlock],
    history_limit: usize,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct TextListData<'a> {
    lines: &'a [String],
    empty_message: &'a str,
}

#[derive(Serialize)]
struct ShelfData {
    label: &'static str,
    pad: String,
    letter: String,
}

#[derive(Serialize)]
struct ShelvesData {
    shelves: Vec<ShelfData>,
}

fn render_template<T: Serialize>(
    name: &'static str,
    source: &'static str,
    data: &T,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("style", move |value: Value, style: String| -> String {
        let text = value.to_string();
        if use_color {
            LIBRIS_THEME.apply(&style, &text)
        } else {
            text
        }
    });
    env.add_template(name, source)?;
    env.get_template(name)?.render(data)
}

/// Renders the catalog as a terminal table.
pub fn render_catalog(view: &CatalogView, use_color: bool) -> String {
    let blocks = view.blocks();
    let mut header = TableLine {
        details: "Book".to_string(),
        details_style: names::HEADER,
        copy_id: "Copy".to_string(),
        location: "Location".to_string(),
        status: "Status".to_string(),
        status_style: names::HEADER,
        history: "History".to_string(),
        ..TableLine::default()
    };
    let mut block_data: Vec<BlockData> = blocks
        .iter()
        .map(|b| BlockData {
            lines: block_lines(b),
        })
        .collect();

    let widths = column_widths(
        std::iter::once(&header).chain(block_data.iter().flat_map(|b| b.lines.iter())),
    );
    pad_line(&mut header, &widths);
    for line in block_data.iter_mut().flat_map(|b| b.lines.iter_mut()) {
        pad_line(line, &widths);
    }

    let data = CatalogData {
        empty: matches!(view, CatalogView::Empty),
        empty_message: EMPTY_CATALOG,
        header,
        blocks: block_data,
        rule: RULE_CHAR.repeat(widths.total()),
    };

    render_template("catalog.tmp", CATALOG_TEMPLATE, &data, use_color)
        .map(|out| trim_line_ends(&out))
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders the catalog as an HTML table (auto-escaped).
pub fn render_catalog_html(view: &CatalogView, history_limit: usize) -> String {
    let data = HtmlData {
        empty: matches!(view, CatalogView::Empty),
        books: view.blocks(),
        history_limit,
    };
    render_template("catalog.html", CATALOG_HTML_TEMPLATE, &data, false)
        .unwrap_or_else(|e| format!("<!-- render error: {} -->\n", e))
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template("messages.tmp", MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn render_text_list(lines: &[String], empty_message: &str, use_color: bool) -> String {
    let data = TextListData {
        lines,
        empty_message,
    };
    render_template("text_list.tmp", TEXT_LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

/// The fixed shelf table: label and the letter its copy ids end in.
pub fn render_shelves(use_color: bool) -> String {
    let width = Shelf::ALL
        .iter()
        .map(|s| s.label().width())
        .max()
        .unwrap_or(0);
    let data = ShelvesData {
        shelves: Shelf::ALL
            .iter()
            .map(|s| ShelfData {
                label: s.label(),
                pad: " ".repeat(width - s.label().width()),
                letter: s.letter().to_string(),
            })
            .collect(),
    };
    render_template("shelves.tmp", SHELVES_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Lays a book out as lines: the details column runs down beside the copy
/// rows, and each copy takes one line per visible history entry.
fn block_lines(block: &BookBlock) -> Vec<TableLine> {
    let details = [
        (truncate_to_width(&block.title, DETAILS_WIDTH), names::BOOK_TITLE),
        (truncate_to_width(&block.author, DETAILS_WIDTH), names::BOOK_AUTHOR),
        (format!("ID: {}", block.id), names::BOOK_ID),
    ];

    let mut copy_lines = Vec::new();
    for row in &block.rows {
        let mut history = row.history.iter();
        copy_lines.push(TableLine {
            copy_id: row.copy_id.clone(),
            location: row.location.clone(),
            status: row.status.clone(),
            status_style: match row.availability {
                Availability::Available => names::AVAILABLE,
                Availability::Unavailable => names::UNAVAILABLE,
            },
            history: history.next().cloned().unwrap_or_default(),
            ..TableLine::default()
        });
        copy_lines.extend(history.map(|entry| TableLine {
            history: entry.clone(),
            ..TableLine::default()
        }));
    }

    let count = details.len().max(copy_lines.len());
    copy_lines.resize_with(count, TableLine::default);
    for (line, (text, style)) in copy_lines.iter_mut().zip(details) {
        line.details = text;
        line.details_style = style;
    }
    copy_lines
}

#[derive(Default)]
struct ColumnWidths {
    details: usize,
    copy_id: usize,
    location: usize,
    status: usize,
    history: usize,
}

impl ColumnWidths {
    fn total(&self) -> usize {
        self.details + self.copy_id + self.location + self.status + self.history + 2 * 4
    }
}

fn column_widths<'a>(lines: impl Iterator<Item = &'a TableLine>) -> ColumnWidths {
    lines.fold(ColumnWidths::default(), |w, line| ColumnWidths {
        details: w.details.max(line.details.width()),
        copy_id: w.copy_id.max(line.copy_id.width()),
        location: w.location.max(line.location.width()),
        status: w.status.max(line.status.width()),
        history: w.history.max(line.history.width()),
    })
}

fn pad_line(line: &mut TableLine, widths: &ColumnWidths) {
    let pad = |text: &str, width: usize| " ".repeat(width.saturating_sub(text.width()));
    line.details_pad = pad(&line.details, widths.details);
    line.copy_pad = pad(&line.copy_id, widths.copy_id);
    line.location_pad = pad(&line.location, widths.location);
    line.status_pad = pad(&line.status, widths.status);
}

fn trim_line_ends(s: &str) -> String {
    s.lines().map(|l| format!("{}\n", l.trim_end())).collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
