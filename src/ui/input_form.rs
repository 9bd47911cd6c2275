use crate::app::AppState;
use crate::persistence::TaskService;
use crate::ui::{
    layout::create_form_area,
    styles::{hint_style, modal_bg_style, modal_title_style, priority_style, selected_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn field_line(label: &str, value: &str, active: bool) -> Line<'static> {
    let cursor = if active { "_" } else { "" };
    let value_span = if active {
        Span::styled(format!("{}{}", value, cursor), selected_style())
    } else {
        Span::raw(value.to_string())
    };
    Line::from(vec![Span::raw(format!("  {:<12}", label)), value_span])
}

/// Render the add task / add group form
pub fn render_input_form<S: TaskService>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    if let Some(form) = &app.input_form {
        let form_area = create_form_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, form_area);

        let (title, extra_label) = if form.for_group {
            (" New Group ", "Deadline")
        } else {
            (" New Task ", "Pomodoros")
        };

        let mut lines = Vec::new();
        lines.push(Line::raw(""));
        lines.push(field_line("Title", &form.title, form.editing_field == 0));
        lines.push(field_line("Description", &form.desc, form.editing_field == 1));
        lines.push(field_line(extra_label, &form.extra, form.editing_field == 2));
        lines.push(Line::from(vec![
            Span::raw("  Priority    "),
            Span::styled(form.priority().name().to_string(), priority_style(form.priority())),
        ]));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Tab next field   ↑/↓ priority   Enter save   Esc cancel",
            hint_style(),
        )));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, form_area);
    }
}
