use crate::app::{AppState, Pane};
use crate::domain::format_deadline;
use crate::persistence::TaskService;
use crate::ui::styles::{
    border_style, deadline_style, default_style, done_style, focused_border_style, priority_style,
    selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the task groups pane with per-group progress
pub fn render_groups_pane<S: TaskService>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    let items: Vec<ListItem> = app
        .store
        .groups
        .iter()
        .enumerate()
        .map(|(idx, group)| {
            let (completed, total) = app.store.group_progress(group.id);

            let mut spans = vec![
                Span::styled(format!(" {} ", group.priority.name()), priority_style(group.priority)),
                Span::raw(group.title.clone()),
                Span::styled(format!("  {}/{}", completed, total), done_style()),
            ];
            if !group.deadline.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", format_deadline(&group.deadline)),
                    deadline_style(),
                ));
            }

            let style = if idx == app.selected_group {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let border = if app.focus == Pane::Groups {
        focused_border_style()
    } else {
        border_style()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(" Groups ", title_style())),
    );

    f.render_widget(list, area);
}
