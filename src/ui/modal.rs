use crate::app::AppState;
use crate::persistence::TaskService;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the confirmation modal
pub fn render_confirm_modal<S: TaskService>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    if let Some(confirm) = &app.confirm {
        let modal_area = create_modal_area(area);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();
        lines.push(Line::raw(""));
        lines.push(Line::raw(format!("  {}", confirm.message())));
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("[y]", modal_title_style()),
            Span::raw(" Confirm  "),
            Span::styled("[n]", modal_title_style()),
            Span::raw(" Cancel  "),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Confirm ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
