use crate::app::AppState;
use crate::domain::{Priority, TimerMode, UiMode};
use crate::persistence::TaskService;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key<S: TaskService>(app: &mut AppState<S>, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Confirm => handle_confirm_mode(app, key),
        UiMode::AddingTask | UiMode::AddingGroup => handle_input_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode<S: TaskService>(app: &mut AppState<S>, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }
        KeyCode::Tab => {
            app.focus_next_pane();
            Ok(false)
        }

        // Start/pause the countdown
        KeyCode::Char(' ') => {
            app.timer.toggle_running();
            Ok(false)
        }

        // Focus the selected task
        KeyCode::Enter => {
            app.set_current_selected();
            Ok(false)
        }

        // Timer modes
        KeyCode::Char('1') => {
            app.request_mode(TimerMode::Pomodoro);
            Ok(false)
        }
        KeyCode::Char('2') => {
            app.request_mode(TimerMode::Short);
            Ok(false)
        }
        KeyCode::Char('3') => {
            app.request_mode(TimerMode::Long);
            Ok(false)
        }

        // Give up the running session
        KeyCode::Char('g') | KeyCode::Char('G') => {
            app.give_up();
            Ok(false)
        }

        // Add task / group
        KeyCode::Char('a') => {
            app.start_add_task();
            Ok(false)
        }
        KeyCode::Char('A') => {
            app.start_add_group();
            Ok(false)
        }

        // Delete the selection in the focused pane
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            app.request_delete_selected();
            Ok(false)
        }

        // Filters
        KeyCode::Char('o') | KeyCode::Char('O') => {
            app.toggle_show_done();
            Ok(false)
        }
        KeyCode::Char('h') => {
            app.toggle_priority_filter(Priority::High);
            Ok(false)
        }
        KeyCode::Char('m') => {
            app.toggle_priority_filter(Priority::Medium);
            Ok(false)
        }
        KeyCode::Char('l') => {
            app.toggle_priority_filter(Priority::Low);
            Ok(false)
        }

        // Cycle sort key
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.cycle_sort();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while the confirmation modal is open
fn handle_confirm_mode<S: TaskService>(app: &mut AppState<S>, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.confirm_accept();
            Ok(false)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.confirm_cancel();
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys while the add task / add group form is open
fn handle_input_form_mode<S: TaskService>(app: &mut AppState<S>, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.cancel_input_form();
            Ok(false)
        }
        KeyCode::Enter => {
            app.submit_input_form();
            Ok(false)
        }
        KeyCode::Tab => {
            app.input_form_toggle_field();
            Ok(false)
        }
        KeyCode::Up | KeyCode::Down => {
            app.input_form_cycle_priority();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.input_form_backspace();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.input_form_add_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}
