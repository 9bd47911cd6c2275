use crate::app::{AppState, Pane};
use crate::domain::TimerMode;
use crate::persistence::TaskService;
use crate::ui::styles::{
    border_style, break_timer_style, current_style, focused_border_style, gauge_style, hint_style,
    selected_style, timer_style, title_style,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the timer pane: mode tabs, the countdown, session progress and
/// the current task
pub fn render_timer_pane<S: TaskService>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    let border = if app.focus == Pane::Timer {
        focused_border_style()
    } else {
        border_style()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(" Timer ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Mode tabs
            Constraint::Length(3), // Countdown
            Constraint::Length(1), // Session gauge
            Constraint::Length(2), // Run state
            Constraint::Min(0),    // Current task
        ])
        .split(inner);

    // Mode tabs
    let mut tab_spans = vec![Span::raw(" ")];
    for (i, mode) in TimerMode::all().iter().enumerate() {
        let label = format!(" [{}] {} ", i + 1, mode.label());
        let style = if *mode == app.timer.mode() {
            selected_style()
        } else {
            hint_style()
        };
        tab_spans.push(Span::styled(label, style));
        tab_spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(tab_spans)), chunks[0]);

    // Countdown
    let digits_style = if app.timer.mode().is_break() {
        break_timer_style()
    } else {
        timer_style()
    };
    let countdown = Paragraph::new(Line::from(Span::styled(
        app.timer.format_remaining(),
        digits_style,
    )))
    .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(countdown, chunks[1]);

    // Session progress gauge
    let total = app.timer.duration_for(app.timer.mode()).max(1);
    let elapsed = total.saturating_sub(app.timer.remaining_secs());
    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(elapsed as f64 / total as f64)
        .label("");
    f.render_widget(gauge, chunks[2]);

    // Run state and long-break progress
    let state = if app.timer.is_running() {
        "running"
    } else if app.timer.remaining_secs() == 0 {
        "finished"
    } else {
        "paused"
    };
    let state_line = Line::from(vec![
        Span::raw(" "),
        Span::styled(state, hint_style()),
        Span::styled(
            format!(
                "   {}/{} until long break",
                app.pomodoros_since_long_break, app.settings.long_break_interval
            ),
            hint_style(),
        ),
    ]);
    f.render_widget(Paragraph::new(state_line), chunks[3]);

    // Current task
    let task_line = match app.store.current_task() {
        Some(task) => Line::from(vec![
            Span::raw(" Focus: "),
            Span::styled(task.title.clone(), current_style()),
            Span::styled(
                format!("  {}/{}", task.completed_pomodoros, task.target_pomodoros()),
                hint_style(),
            ),
        ]),
        None => Line::from(Span::styled(
            " No current task — press Enter on a task to focus it",
            hint_style(),
        )),
    };
    f.render_widget(Paragraph::new(task_line), chunks[4]);
}
