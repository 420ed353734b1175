use crate::tui::app::TuiApp;
use crate::tui::colors;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use unicode_width::UnicodeWidthStr;

pub fn draw(frame: &mut Frame, app: &mut TuiApp) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(3),    // Item list
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_search_bar(frame, app, chunks[0]);
    draw_list(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    // Show cursor in the search bar when focused
    if app.search_focused {
        // Border (1) + " \u{1F50D} " prefix (approx 4 display cols)
        let prefix = app.picker.raw_text()[..app.input_cursor].width() as u16;
        let cursor_x = chunks[0].x + 1 + 4 + prefix;
        let cursor_y = chunks[0].y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_search_bar(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let border_style = if app.search_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search ");

    let search_text = format!(" \u{1F50D} {}", app.picker.raw_text());
    let paragraph = Paragraph::new(search_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn draw_list(frame: &mut Frame, app: &mut TuiApp, area: Rect) {
    let border_style = if app.search_focused {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Items ");

    // Keep paging and scroll math in sync with the actual viewport
    let inner_height = area.height.saturating_sub(2) as usize;
    app.cursor.visible_rows = inner_height;

    let start = app.cursor.scroll_offset;
    let end = (start + inner_height).min(app.picker.visible_len());

    let rows: Vec<Row> = (start..end)
        .enumerate()
        .map(|(visual_idx, logical_idx)| {
            let item = app
                .picker
                .visible_item(logical_idx)
                .expect("row index within filtered view");
            let selected = app.picker.is_selected(item.id);
            let is_cursor = app.cursor.selected == Some(logical_idx);
            let bg = colors::row_bg(is_cursor, visual_idx);

            let name_cell = Cell::from(format!(" {}", item.name))
                .style(colors::name_style(selected).bg(bg));
            let marker_cell = Cell::from(colors::marker_label(selected))
                .style(colors::marker_style(selected).bg(bg));

            Row::new(vec![name_cell, marker_cell])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Fill(1), Constraint::Length(14)]).block(block);

    frame.render_widget(table, area);

    if app.picker.visible_len() == 0 {
        let msg_area = Rect::new(
            area.x + 2,
            area.y + 1,
            area.width.saturating_sub(4),
            1.min(area.height),
        );
        frame.render_widget(
            Paragraph::new("No items match the search").style(Style::default().fg(Color::DarkGray)),
            msg_area,
        );
    }
}

fn draw_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let left_text = if app.picker.has_pending_commit() {
        " \u{23F3} Filtering...".to_string()
    } else {
        format!(
            " {} of {} shown | {} selected | {}",
            app.picker.visible_len(),
            app.picker.total_len(),
            app.picker.selected_count(),
            app.status_message
        )
    };

    let right_text = " Tab:Focus  Space/Enter:Toggle  Esc:Clear  Ctrl+Q:Quit ";

    // Left-aligned counts + padding + right-aligned key hints
    let available_width = area.width as usize;
    let left_len = left_text.len();
    let right_len = right_text.len();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        format!("{:width$}", left_text, width = available_width)
    };

    let status = Paragraph::new(status_str)
        .style(Style::default().fg(Color::White).bg(colors::STATUS_BAR_BG));

    frame.render_widget(status, area);
}
