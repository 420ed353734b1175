use ratatui::style::{Color, Modifier, Style};

/// Per-row selection marker text
pub fn marker_label(selected: bool) -> &'static str {
    if selected {
        "Selected"
    } else {
        "Not selected"
    }
}

pub fn marker_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Red)
    }
}

pub fn name_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

/// Row background: highlighted cursor row, zebra striping otherwise
pub fn row_bg(is_cursor: bool, visual_idx: usize) -> Color {
    if is_cursor {
        Color::Rgb(60, 60, 80)
    } else if visual_idx % 2 == 1 {
        Color::Rgb(25, 25, 35)
    } else {
        Color::Reset
    }
}

pub const STATUS_BAR_BG: Color = Color::Rgb(0, 95, 135);
