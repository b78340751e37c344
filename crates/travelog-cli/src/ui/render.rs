//! Rendering primitives for CLI output.

use comfy_table::presets::NOTHING;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge};

/// Render a header line for a command.
///
/// Pretty mode: "Travelog · command (context)"
/// Plain mode: "travelog command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Travelog", styles::bold(), ctx.color);
            match context {
                Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
                None => format!("{} \u{00B7} {}", title, command),
            }
        }
        OutputMode::Plain => format!("travelog {}", command),
        OutputMode::Json => String::new(),
    }
}

pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let text = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        text
    } else {
        format!("{} {}", text, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with a dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", label, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", styled("Hint:", styles::dim(), ctx.color), text)
    } else {
        format!("hint={}", text)
    }
}

/// Summary block printed after a mutation.
///
/// Pretty mode: badge plus indented pairs
/// Plain mode: `status=ok` plus `key=value` lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        lines.extend(items.iter().map(|(k, v)| format!("  {}", kv(ctx, k, v))));
    } else {
        lines.push("status=ok".to_string());
        lines.extend(items.iter().map(|(k, v)| kv(ctx, k, v)));
    }
    lines.join("\n")
}

#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self { header }
    }
}

/// Borderless table for pretty mode, tab-separated rows otherwise.
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(ctx.width.min(u16::MAX as usize) as u16);

    let header_cells: Vec<Cell> = columns
        .iter()
        .map(|c| {
            let cell = Cell::new(c.header);
            if ctx.color {
                cell.add_attribute(Attribute::Dim)
            } else {
                cell
            }
        })
        .collect();
    table.set_header(header_cells);

    for i in 0..columns.len() {
        if let Some(column) = table.column_mut(i) {
            column.set_padding((0, 2));
        }
    }

    for row in rows {
        table.add_row(row);
    }

    table.to_string()
}

/// Print unless the command is in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() && !message.is_empty() {
        println!("{}", message);
    }
}

pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }
    lines.join("\n")
}

/// Errors go to stderr so stdout stays parseable.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            is_tty: true,
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn header_by_mode() {
        assert_eq!(header(&plain_ctx(), "list", None), "travelog list");
        let pretty = header(&pretty_ctx(), "map", Some("2 pinned"));
        assert!(pretty.starts_with("Travelog"));
        assert!(pretty.contains("map (2 pinned)"));
    }

    #[test]
    fn kv_plain_is_snake_case() {
        assert_eq!(kv(&plain_ctx(), "Entry ID", "abc"), "entry_id=abc");
        assert_eq!(kv(&pretty_ctx(), "Dates", "x"), "Dates: x");
    }

    #[test]
    fn receipt_plain_starts_with_status() {
        let out = receipt(&plain_ctx(), "Trip added", &[("Entry ID", "1234")]);
        assert_eq!(out, "status=ok\nentry_id=1234");
    }

    #[test]
    fn plain_table_is_tab_separated() {
        let rows = vec![vec!["a".to_string(), "b".to_string()]];
        let out = simple_table(&plain_ctx(), &[Column::new("A"), Column::new("B")], &rows);
        assert_eq!(out, "a\tb");
    }

    #[test]
    fn pretty_table_has_headers() {
        let rows = vec![vec!["Paris".to_string()]];
        let out = simple_table(&pretty_ctx(), &[Column::new("DESTINATION")], &rows);
        assert!(out.contains("DESTINATION"));
        assert!(out.contains("Paris"));
    }

    #[test]
    fn error_message_plain() {
        let out = error_message(&plain_ctx(), "Entry not found", Some("travelog list"));
        assert_eq!(out, "error=Entry not found\nhint=travelog list");
    }
}
