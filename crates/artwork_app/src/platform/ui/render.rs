use artwork_core::{ArtworkRowView, BrowserViewModel, BulkSelectView, PageSize, SelectionMode};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use super::constants::*;

/// Draws the whole screen. `updated_at` is the wall-clock time of the last
/// accepted page, already formatted.
pub fn render(frame: &mut Frame, view: &BrowserViewModel, updated_at: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Mode switch + selection summary
            Constraint::Min(5),    // Table
            Constraint::Length(3), // Paginator
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    frame.render_widget(toolbar(view), chunks[0]);
    render_table(frame, view, chunks[1]);
    frame.render_widget(paginator(view, updated_at), chunks[2]);
    frame.render_widget(help_bar(), chunks[3]);

    if let Some(overlay) = &view.bulk_select {
        render_bulk_select(frame, overlay);
    }
}

fn toolbar(view: &BrowserViewModel) -> Paragraph<'static> {
    let (checkbox_label, row_click_label) = match view.selection_mode {
        SelectionMode::Checkbox => ("(•) checkbox", "( ) row click"),
        SelectionMode::RowClick => ("( ) checkbox", "(•) row click"),
    };

    let mut spans = vec![
        Span::styled("Selection: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("{checkbox_label}  {row_click_label}")),
        Span::raw("   "),
        Span::styled(
            format!("Selected: {}", view.selected_ids.len()),
            Style::default().fg(Color::Green),
        ),
        Span::raw("   Rows per page: "),
    ];
    for size in PageSize::ALL {
        let style = if size == view.page_size {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {size} "), style));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {APP_TITLE} ")),
    )
}

fn render_table(frame: &mut Frame, view: &BrowserViewModel, area: Rect) {
    let mut widths = Vec::with_capacity(COLUMNS.len() + 1);
    let mut header_cells = Vec::with_capacity(COLUMNS.len() + 1);
    if view.show_checkbox_column {
        widths.push(Constraint::Length(CHECKBOX_WIDTH));
        header_cells.push(Cell::from(checkbox(view.all_rows_selected)));
    }
    for (title, percent) in COLUMNS {
        widths.push(Constraint::Percentage(percent));
        header_cells.push(Cell::from(title));
    }

    let header = Row::new(header_cells).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    let rows = view
        .rows
        .iter()
        .map(|row| table_row(row, view.show_checkbox_column));

    let title = if view.loading {
        " Artworks · loading… ".to_string()
    } else {
        format!(" Artworks · page {} of {} ", view.page_number, view.total_pages.max(1))
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(view.cursor);
    frame.render_stateful_widget(table, area, &mut state);
}

fn table_row(row: &ArtworkRowView, show_checkbox: bool) -> Row<'static> {
    let mut cells = Vec::with_capacity(COLUMNS.len() + 1);
    if show_checkbox {
        cells.push(Cell::from(checkbox(row.selected)));
    }
    cells.push(Cell::from(single_line(&row.title)));
    cells.push(Cell::from(optional_text(row.place_of_origin.as_deref())));
    cells.push(Cell::from(optional_text(row.artist_display.as_deref())));
    cells.push(Cell::from(optional_text(row.inscriptions.as_deref())));
    cells.push(Cell::from(optional_year(row.date_start)));
    cells.push(Cell::from(optional_year(row.date_end)));

    let style = if row.selected {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    Row::new(cells).style(style)
}

fn paginator(view: &BrowserViewModel, updated_at: Option<&str>) -> Paragraph<'static> {
    let enabled = Style::default().add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(Color::DarkGray);
    let back = if view.can_go_previous { enabled } else { disabled };
    let forward = if view.can_go_next { enabled } else { disabled };

    let mut spans = vec![
        Span::styled("« ‹ ", back),
        Span::raw(view.page_report.clone()),
        Span::styled(" › »", forward),
    ];
    if let Some(updated_at) = updated_at {
        spans.push(Span::styled(
            format!("   updated {updated_at}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if let Some(error) = &view.last_error {
        spans.push(Span::styled(
            format!("   ✗ {error}"),
            Style::default().fg(Color::Red),
        ));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

fn help_bar() -> Paragraph<'static> {
    let mut spans = Vec::with_capacity(KEY_HINTS.len() * 3);
    for (i, (key, action)) in KEY_HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {action}")));
    }
    Paragraph::new(Line::from(spans))
}

fn render_bulk_select(frame: &mut Frame, overlay: &BulkSelectView) {
    let area = centered_rect(OVERLAY_WIDTH, OVERLAY_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(format!(
            "Enter number of records to select (1-{})",
            overlay.max
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::raw(overlay.input.clone()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
        Line::from(""),
        Line::styled(
            "Enter select · Esc cancel",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Select Records ")
            .title_alignment(Alignment::Center),
    );
    frame.render_widget(popup, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

/// The catalog puts line breaks in artist and inscription text.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn optional_text(text: Option<&str>) -> String {
    text.map(single_line).unwrap_or_default()
}

fn optional_year(year: Option<i32>) -> String {
    year.map(|year| year.to_string()).unwrap_or_default()
}
