use crate::app::AppState;
use crate::config;
use crate::domain::UiMode;
use crate::ui::{
    layout::create_modal_area,
    styles::{gauge_style, hint_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

/// Render the day changed modal (forces restart)
pub fn render_day_changed_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if app.ui_mode == UiMode::DayChanged {
        let modal_area = create_modal_area(area);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();

        lines.push(Line::raw(""));
        lines.push(Line::raw("  A new day has begun!"));
        lines.push(Line::raw(""));
        lines.push(Line::raw("  The date has changed since you started the app."));
        lines.push(Line::raw("  Please close and restart Protocol to continue."));
        lines.push(Line::raw(""));
        lines.push(Line::raw("  Your record has been saved."));
        lines.push(Line::raw(""));

        lines.push(Line::from(vec![
            Span::styled("  [q]", modal_title_style()),
            Span::raw(" Close Protocol  "),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" 🌅 Day Changed ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

/// Render the countdown modal for the active block
pub fn render_timer_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let timer = match &app.timer {
        Some(timer) => timer,
        None => return,
    };

    let modal_area = create_modal_area(area);
    f.render_widget(Clear, modal_area);

    let cfg = config::task_config(timer.task);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" ⏱ {} ", cfg.label),
            modal_title_style(),
        ))
        .style(modal_bg_style());
    let inner = block.inner(modal_area);
    f.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // rule
            Constraint::Length(3), // countdown
            Constraint::Length(1), // gauge
            Constraint::Length(1), // status
            Constraint::Min(1),    // hints
        ])
        .split(inner);

    let rule = Paragraph::new(Line::from(Span::styled(
        format!(" Rule: {}", cfg.rule),
        hint_style(),
    )));
    f.render_widget(rule, chunks[0]);

    let countdown = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(
            timer.formatted(),
            modal_title_style(),
        )),
    ])
    .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(countdown, chunks[1]);

    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(timer.progress_ratio().clamp(0.0, 1.0))
        .label("");
    f.render_widget(gauge, chunks[2]);

    let status = if timer.running {
        " EXECUTION IN PROGRESS..."
    } else if timer.remaining.is_zero() {
        " BLOCK COMPLETE."
    } else {
        " READY TO BEGIN"
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(status, hint_style()))),
        chunks[3],
    );

    let hints = Paragraph::new(Line::from(vec![
        Span::styled(" [Space]", modal_title_style()),
        Span::raw(" start/pause  "),
        Span::styled("[r]", modal_title_style()),
        Span::raw(" reset  "),
        Span::styled("[Esc]", modal_title_style()),
        Span::raw(" close "),
    ]));
    f.render_widget(hints, chunks[4]);
}
