//! # Rendering Module
//!
//! Styled terminal output from minijinja templates and the [`SHELF_THEME`].
//! Column widths are computed here with `unicode-width`; the templates only
//! lay out the pre-padded cells and pick styles.

use super::styles::{names, Theme, SHELF_THEME};
use super::templates::{MESSAGES_TEMPLATE, TABLE_TEMPLATE, TEXT_LIST_TEMPLATE};
use console::Term;
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use shelf::api::{CmdMessage, MessageLevel};
use shelf::page::{BookRow, EmptyState, DELETE_LABEL};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a text column may get before its cells are truncated.
pub const MAX_COLUMN_WIDTH: usize = 40;

const HEADERS: [&str; 3] = ["Title", "Author", "ISBN"];

#[derive(Serialize)]
struct RowData {
    title: String,
    author: String,
    isbn: String,
    delete: String,
}

#[derive(Serialize)]
struct TableData {
    header: String,
    rule: String,
    rows: Vec<RowData>,
    empty: bool,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

pub fn colors_supported() -> bool {
    Term::stdout().features().colors_supported()
}

fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    let theme = theme.clone();
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            theme.apply(&name, &text)
        } else {
            theme.apply_plain(&name, &text)
        }
    });
    env.add_template("_inline", template)?;
    env.get_template("_inline")?.render(data)
}

/// Renders the table body and, when visible, the empty-state message.
pub fn render_page(rows: &[BookRow], empty_state: &EmptyState, use_color: bool) -> String {
    let mut widths = HEADERS.map(|h| h.width());
    for row in rows {
        let cells = row.cells();
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.width().min(MAX_COLUMN_WIDTH));
        }
    }

    let header = format!(
        "{}  {}  {}  {}",
        pad(HEADERS[0], widths[0]),
        pad(HEADERS[1], widths[1]),
        pad(HEADERS[2], widths[2]),
        " ".repeat(DELETE_LABEL.width())
    )
    .trim_end()
    .to_string();
    let rule_width = widths.iter().sum::<usize>() + 3 * 2 + DELETE_LABEL.width();

    let data = TableData {
        header,
        rule: "-".repeat(rule_width),
        rows: rows
            .iter()
            .map(|row| RowData {
                title: pad(&row.title, widths[0]),
                author: pad(&row.author, widths[1]),
                isbn: pad(&row.isbn, widths[2]),
                delete: DELETE_LABEL.to_string(),
            })
            .collect(),
        empty: empty_state.is_visible(),
        empty_message: EmptyState::MESSAGE.to_string(),
    };

    render_with_color(TABLE_TEMPLATE, &data, &SHELF_THEME, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders command messages with level-dependent styles.
pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: style_for(msg.level).to_string(),
            })
            .collect(),
    };

    render_with_color(MESSAGES_TEMPLATE, &data, &SHELF_THEME, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn render_text_list(lines: &[String], empty_message: &str, use_color: bool) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };

    render_with_color(TEXT_LIST_TEMPLATE, &data, &SHELF_THEME, use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

fn style_for(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
        MessageLevel::Error => names::ERROR,
    }
}

/// Truncates to `width` columns (with an ellipsis) and right-pads with spaces.
fn pad(s: &str, width: usize) -> String {
    let mut out = truncate_to_width(s, width);
    let fill = width.saturating_sub(out.width());
    out.push_str(&" ".repeat(fill));
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;
    use shelf::model::Book;

    fn rows(books: &[Book]) -> Vec<BookRow> {
        books.iter().map(BookRow::from_book).collect()
    }

    fn visible(visible: bool) -> EmptyState {
        let mut state = EmptyState::default();
        state.set_visible(visible);
        state
    }

    #[test]
    fn renders_one_line_per_row() {
        let output = render_page(
            &rows(&[Book::new("Dune", "Frank Herbert", "123")]),
            &visible(false),
            false,
        );
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Title"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "Dune   Frank Herbert  123   X");
        assert!(!output.contains(EmptyState::MESSAGE));
    }

    #[test]
    fn columns_line_up() {
        let output = render_page(
            &rows(&[
                Book::new("Dune", "Frank Herbert", "123"),
                Book::new("Emma", "Jane Austen", "4567"),
            ]),
            &visible(false),
            false,
        );
        let lines: Vec<&str> = output.lines().collect();
        let x_columns: Vec<usize> = lines[2..].iter().map(|l| l.rfind('X').unwrap()).collect();
        assert_eq!(x_columns[0], x_columns[1]);
    }

    #[test]
    fn empty_state_is_rendered_when_visible() {
        let output = render_page(&[], &visible(true), false);
        assert!(output.contains(EmptyState::MESSAGE));
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn long_cells_are_truncated() {
        let long = "x".repeat(MAX_COLUMN_WIDTH + 10);
        let output = render_page(&rows(&[Book::new(&long, "a", "1")]), &visible(false), false);
        assert!(output.contains('…'));
        assert!(!output.contains(&long));
    }

    #[test]
    fn messages_render_plain_without_color() {
        let output = render_messages(
            &[
                CmdMessage::success("Book added successfully!"),
                CmdMessage::error("Please fill in all fields"),
            ],
            false,
        );
        assert_eq!(output, "Book added successfully!\nPlease fill in all fields\n");
    }

    #[test]
    fn no_messages_renders_nothing() {
        assert_eq!(render_messages(&[], false), "");
    }

    #[test]
    fn text_list_falls_back_to_empty_message() {
        assert_eq!(render_text_list(&[], "Nothing.", false), "Nothing.\n");
        assert_eq!(
            render_text_list(&["a = 1".to_string()], "Nothing.", false),
            "a = 1\n"
        );
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_to_width("Dune", 10), "Dune");
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
    }
}
