use crate::app::AppState;
use crate::ui::styles::{
    emergency_style, hint_style, mantra_style, streak_cold_style, streak_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the header: title, date, streak flame, emergency banner, mantra
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let date = app.today.format("%a %b %d, %Y");

    let mut spans = vec![
        Span::styled(" THE PROTOCOL ", title_style()),
        Span::styled(format!(" {} ", date), hint_style()),
    ];

    let flame_style = if app.streak > 0 {
        streak_style()
    } else {
        streak_cold_style()
    };
    spans.push(Span::styled(
        format!("  🔥 {} DAY STREAK ", app.streak),
        flame_style,
    ));

    if app.emergency {
        spans.push(Span::styled("  ⚠ EMERGENCY PROTOCOL ", emergency_style()));
    }

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(
            format!(" \"{}\"", app.mantra),
            mantra_style(),
        )),
    ];

    f.render_widget(Paragraph::new(lines), area);
}
