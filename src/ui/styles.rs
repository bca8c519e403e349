use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Completed block / checklist item style
pub fn done_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Struck-through completed checklist text
pub fn done_text_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Emergency banner style
pub fn emergency_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Streak flame style when the streak is alive
pub fn streak_style() -> Style {
    Style::default()
        .fg(Color::LightRed)
        .add_modifier(Modifier::BOLD)
}

/// Streak style when there is no streak
pub fn streak_cold_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Mantra banner style
pub fn mantra_style() -> Style {
    Style::default()
        .fg(Color::LightBlue)
        .add_modifier(Modifier::ITALIC)
}

/// Heat-map cell: all three blocks done
pub fn perfect_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Heat-map cell: partial day
pub fn partial_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Heat-map cell: entry exists, nothing done
pub fn missed_style() -> Style {
    Style::default().fg(Color::Red)
}

/// Heat-map cell: no entry
pub fn untouched_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Heat-map cell: today
pub fn today_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Countdown gauge style
pub fn gauge_style() -> Style {
    Style::default().fg(Color::LightBlue).bg(Color::Black)
}
