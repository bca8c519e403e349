use crate::app::AppState;
use crate::config;
use crate::evaluator::{self, DayStatus};
use crate::store::History;
use crate::ui::styles::{
    border_style, hint_style, missed_style, partial_style, perfect_style, title_style,
    today_style, untouched_style,
};
use chrono::{Duration, NaiveDate};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the campaign heat-map: one row per month, one cell per day
pub fn render_calendar_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let months = campaign_months(config::campaign_start(), config::campaign_end());

    let lines: Vec<Line> = months
        .iter()
        .map(|(label, days)| create_month_line(label, days, app.store.history(), app.today))
        .collect();

    let title = format!(
        " The Campaign ({} — {}) ",
        config::campaign_start().format("%b %Y"),
        config::campaign_end().format("%b %Y"),
    );

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}

/// Number of month rows the pane needs (for layout sizing)
pub fn campaign_month_count() -> usize {
    campaign_months(config::campaign_start(), config::campaign_end()).len()
}

/// Group every campaign day by month, in order
fn campaign_months(start: NaiveDate, end: NaiveDate) -> Vec<(String, Vec<NaiveDate>)> {
    let mut months: Vec<(String, Vec<NaiveDate>)> = Vec::new();
    let mut day = start;

    while day <= end {
        let label = day.format("%b %y").to_string().to_uppercase();
        match months.last_mut() {
            Some((last_label, days)) if *last_label == label => days.push(day),
            _ => months.push((label, vec![day])),
        }
        day += Duration::days(1);
    }

    months
}

/// One heat-map row: month label plus a cell per day
fn create_month_line(
    label: &str,
    days: &[NaiveDate],
    history: &History,
    today: NaiveDate,
) -> Line<'static> {
    let mut spans = vec![Span::styled(format!(" {:<7}", label), hint_style())];

    for day in days {
        let status = evaluator::day_status(history, *day);
        let (glyph, style) = if *day == today && status == DayStatus::Untouched {
            ("□", today_style())
        } else {
            match status {
                DayStatus::Perfect => ("■", perfect_style()),
                DayStatus::Partial => ("■", partial_style()),
                DayStatus::Missed => ("■", missed_style()),
                DayStatus::Untouched => ("·", untouched_style()),
            }
        };
        spans.push(Span::styled(format!("{} ", glyph), style));
    }

    Line::from(spans)
}
