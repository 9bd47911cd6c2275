pub mod groups_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod styles;
pub mod tasks_pane;
pub mod timer_pane;

use crate::app::AppState;
use crate::persistence::TaskService;
use crate::ui::styles::error_style;
use groups_pane::render_groups_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::render_confirm_modal;
use ratatui::{text::Span, widgets::Paragraph, Frame};
use tasks_pane::render_tasks_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render<S: TaskService>(f: &mut Frame, app: &AppState<S>) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, layout.keybindings_area);

    // Render panes
    render_groups_pane(f, app, layout.groups_area);
    render_tasks_pane(f, app, layout.tasks_area);
    render_timer_pane(f, app, layout.timer_area);

    // Status line carries the last persistence error, if any
    if let Some(error) = &app.store.last_error {
        let paragraph =
            Paragraph::new(Span::styled(format!(" {}", error), error_style()));
        f.render_widget(paragraph, layout.status_area);
    }

    // Render confirmation modal if active
    if app.confirm.is_some() {
        render_confirm_modal(f, app, size);
    }

    // Render input form if active
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }
}
