use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" Tab pane   "),
        Span::raw("↑/↓ select   "),
        Span::raw("1/2/3 block   "),
        Span::raw("Enter toggle   "),
        Span::raw("t timer   "),
        Span::raw("a add target   "),
        Span::raw("x delete   "),
        Span::raw("j journal   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
