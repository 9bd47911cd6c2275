use crate::ui::styles::hint_style;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" ↑/↓ select   "),
        Span::raw("Tab pane   "),
        Span::raw("Space start/pause   "),
        Span::raw("Enter focus task   "),
        Span::raw("1/2/3 mode   "),
        Span::raw("g give up   "),
        Span::raw("a add   "),
        Span::raw("A group   "),
        Span::raw("d delete   "),
        Span::raw("o done-view   "),
        Span::raw("h/m/l filter   "),
        Span::raw("s sort   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
