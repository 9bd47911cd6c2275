use crate::app::{AppState, Pane};
use crate::domain::{Task, TaskStatus};
use crate::persistence::TaskService;
use crate::ui::styles::{
    border_style, current_style, default_style, done_style, focused_border_style, hint_style,
    priority_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

fn status_badge(task: &Task) -> Span<'static> {
    match task.status {
        TaskStatus::Current => Span::styled("▶ ", current_style()),
        TaskStatus::Done => Span::styled("✔ ", done_style()),
        TaskStatus::Todo => Span::raw("· "),
    }
}

fn task_line(task: &Task) -> Line<'static> {
    let mut spans = vec![Span::raw(" "), status_badge(task)];

    if let Some(priority) = task.priority {
        spans.push(Span::styled(
            format!("{} ", priority.name()),
            priority_style(priority),
        ));
    }

    let title_span = if task.is_done() {
        Span::styled(task.title.clone(), done_style())
    } else {
        Span::raw(task.title.clone())
    };
    spans.push(title_span);

    spans.push(Span::styled(
        format!("  {}/{}", task.completed_pomodoros, task.target_pomodoros()),
        hint_style(),
    ));

    if !task.date.is_empty() {
        spans.push(Span::styled(format!("  {}", task.date), hint_style()));
    }

    Line::from(spans)
}

/// Render the tasks pane: the selected group's tasks, filtered and sorted
pub fn render_tasks_pane<S: TaskService>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    let visible = app.visible_tasks();

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let style = if idx == app.selected_task && app.focus == Pane::Tasks {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(task_line(task)).style(style)
        })
        .collect();

    let border = if app.focus == Pane::Tasks {
        focused_border_style()
    } else {
        border_style()
    };

    let title = format!(" Tasks (sort: {}) ", app.sort.name());

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}
