use crate::domain::{
    FilterOptions, NewTask, NewTaskGroup, Priority, SortKey, Task, TaskStatus, Theme, TimerMode,
    UiMode,
};
use crate::persistence::{Settings, TaskService};
use crate::store::TaskStore;
use crate::ticker;
use crate::timer::{GiveUpOutcome, SwitchOutcome, TimerEngine};
use std::time::Instant;

/// Which pane has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Groups,
    Tasks,
    Timer,
}

impl Pane {
    pub fn next(&self) -> Self {
        match self {
            Self::Groups => Self::Tasks,
            Self::Tasks => Self::Timer,
            Self::Timer => Self::Groups,
        }
    }
}

/// Pending confirmation shown in the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    GiveUp,
    SwitchMode(TimerMode),
    DeleteGroup(u64),
    DeleteTask(u64),
}

impl Confirm {
    pub fn message(&self) -> &'static str {
        match self {
            Self::GiveUp => "Give up this pomodoro? The session will not count.",
            Self::SwitchMode(_) => "Switch mode? Current progress will be discarded.",
            Self::DeleteGroup(_) => "Delete this group and all of its tasks?",
            Self::DeleteTask(_) => "Delete this task?",
        }
    }
}

/// Input form state for adding tasks and groups
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub title: String,
    pub desc: String,
    /// Target pomodoros (task form) or deadline (group form)
    pub extra: String,
    pub priority_index: usize,
    pub editing_field: usize, // 0 = title, 1 = desc, 2 = extra
    pub for_group: bool,
}

impl InputFormState {
    fn new(for_group: bool) -> Self {
        Self {
            title: String::new(),
            desc: String::new(),
            extra: String::new(),
            priority_index: 1, // Medium
            editing_field: 0,
            for_group,
        }
    }

    pub fn priority(&self) -> Priority {
        Priority::all()[self.priority_index % Priority::all().len()]
    }
}

/// Main application state: the store, the timer engine and the UI state
/// around them
pub struct AppState<S: TaskService> {
    pub store: TaskStore<S>,
    pub timer: TimerEngine,
    pub settings: Settings,
    pub ui_mode: UiMode,
    pub focus: Pane,
    pub selected_group: usize,
    pub selected_task: usize,
    pub filters: FilterOptions,
    pub sort: SortKey,
    pub confirm: Option<Confirm>,
    pub input_form: Option<InputFormState>,
    /// Pomodoros completed since the last long break (session rotation)
    pub pomodoros_since_long_break: u32,
    last_timer_tick: Instant,
}

impl<S: TaskService> AppState<S> {
    pub fn new(mut store: TaskStore<S>, settings: Settings) -> Self {
        store.fetch_task_groups();
        store.fetch_tasks();

        Self {
            store,
            timer: TimerEngine::new(settings),
            settings,
            ui_mode: UiMode::Normal,
            focus: Pane::Timer,
            selected_group: 0,
            selected_task: 0,
            filters: FilterOptions::default(),
            sort: SortKey::default(),
            confirm: None,
            input_form: None,
            pomodoros_since_long_break: 0,
            last_timer_tick: Instant::now(),
        }
    }

    /// Id of the group the task list is scoped to
    pub fn selected_group_id(&self) -> Option<u64> {
        self.store.groups.get(self.selected_group).map(|g| g.id)
    }

    /// The task list as displayed: group-scoped, filtered, sorted, with
    /// the current task pinned through the filters
    pub fn visible_tasks(&self) -> Vec<Task> {
        let Some(group_id) = self.selected_group_id() else {
            return Vec::new();
        };
        let pinned = self.store.current_task().map(|t| t.id);
        crate::domain::filtered_and_sorted_tasks(
            &self.store.tasks,
            group_id,
            self.filters,
            self.sort,
            pinned,
        )
    }

    pub fn selected_task_id(&self) -> Option<u64> {
        self.visible_tasks().get(self.selected_task).map(|t| t.id)
    }

    pub fn move_selection_up(&mut self) {
        match self.focus {
            Pane::Groups => {
                if self.selected_group > 0 {
                    self.selected_group -= 1;
                    self.selected_task = 0;
                }
            }
            Pane::Tasks => {
                if self.selected_task > 0 {
                    self.selected_task -= 1;
                }
            }
            Pane::Timer => {}
        }
    }

    pub fn move_selection_down(&mut self) {
        match self.focus {
            Pane::Groups => {
                if self.selected_group + 1 < self.store.groups.len() {
                    self.selected_group += 1;
                    self.selected_task = 0;
                }
            }
            Pane::Tasks => {
                if self.selected_task + 1 < self.visible_tasks().len() {
                    self.selected_task += 1;
                }
            }
            Pane::Timer => {}
        }
    }

    pub fn focus_next_pane(&mut self) {
        self.focus = self.focus.next();
    }

    /// Clamp selections after the collections changed
    fn clamp_selection(&mut self) {
        if self.selected_group >= self.store.groups.len() {
            self.selected_group = self.store.groups.len().saturating_sub(1);
        }
        let visible = self.visible_tasks().len();
        if self.selected_task >= visible {
            self.selected_task = visible.saturating_sub(1);
        }
    }

    /// Advance the countdown for each whole second since the last tick
    /// and consume any completion event
    pub fn on_tick(&mut self) {
        let tick = ticker::timer_tick();
        while self.last_timer_tick.elapsed() >= tick {
            self.last_timer_tick += tick;
            if let Some(completed) = self.timer.tick() {
                self.handle_session_complete(completed);
            }
        }
        if !self.timer.is_running() {
            // Nothing is counting; don't accumulate a tick backlog
            self.last_timer_tick = Instant::now();
        }
    }

    /// Session rotation: a finished pomodoro credits the current task and
    /// queues the next break; a finished long break resets the counters.
    /// The next session is queued but never auto-started.
    fn handle_session_complete(&mut self, completed: TimerMode) {
        match completed {
            TimerMode::Pomodoro => {
                self.pomodoros_since_long_break += 1;
                if let Some(id) = self.store.current_task().map(|t| t.id) {
                    self.store.increment_task_pomodoro(id);
                }
                let next = if self.pomodoros_since_long_break >= self.settings.long_break_interval {
                    TimerMode::Long
                } else {
                    TimerMode::Short
                };
                self.timer.reset_to(next);
            }
            TimerMode::Short => {
                self.timer.reset_to(TimerMode::Pomodoro);
            }
            TimerMode::Long => {
                self.pomodoros_since_long_break = 0;
                if let Some(id) = self.store.current_task().map(|t| t.id) {
                    self.store.reset_task_pomodoros_since_long_break(id);
                }
                self.timer.reset_to(TimerMode::Pomodoro);
            }
        }
        self.clamp_selection();
    }

    /// Ask for a timer mode change, opening the confirm modal when the
    /// session is dirty
    pub fn request_mode(&mut self, mode: TimerMode) {
        match self.timer.request_mode(mode) {
            SwitchOutcome::NeedsConfirmation => {
                self.confirm = Some(Confirm::SwitchMode(mode));
                self.ui_mode = UiMode::Confirm;
            }
            SwitchOutcome::Switched | SwitchOutcome::Unchanged => {}
        }
    }

    /// Ask to abandon the session; pomodoros go through the confirm modal
    pub fn give_up(&mut self) {
        match self.timer.request_give_up() {
            GiveUpOutcome::NeedsConfirmation => {
                self.confirm = Some(Confirm::GiveUp);
                self.ui_mode = UiMode::Confirm;
            }
            GiveUpOutcome::Reset => {}
        }
    }

    /// Make the selected task the current one
    pub fn set_current_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.store.set_current_task(id);
        }
    }

    /// Ask to delete the selected task or group (per focused pane)
    pub fn request_delete_selected(&mut self) {
        let confirm = match self.focus {
            Pane::Groups => self.selected_group_id().map(Confirm::DeleteGroup),
            Pane::Tasks => self.selected_task_id().map(Confirm::DeleteTask),
            Pane::Timer => None,
        };
        if let Some(confirm) = confirm {
            self.confirm = Some(confirm);
            self.ui_mode = UiMode::Confirm;
        }
    }

    /// Accept the pending confirmation
    pub fn confirm_accept(&mut self) {
        match self.confirm.take() {
            Some(Confirm::GiveUp) => self.timer.confirm_give_up(),
            Some(Confirm::SwitchMode(_)) => self.timer.confirm_switch(),
            Some(Confirm::DeleteGroup(id)) => {
                self.store.delete_task_group(id);
                self.clamp_selection();
            }
            Some(Confirm::DeleteTask(id)) => {
                self.store.delete_task(id);
                self.clamp_selection();
            }
            None => {}
        }
        self.ui_mode = UiMode::Normal;
    }

    /// Dismiss the pending confirmation, leaving everything untouched
    pub fn confirm_cancel(&mut self) {
        if let Some(Confirm::SwitchMode(_)) = self.confirm.take() {
            self.timer.cancel_switch();
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn start_add_task(&mut self) {
        if self.selected_group_id().is_some() {
            self.input_form = Some(InputFormState::new(false));
            self.ui_mode = UiMode::AddingTask;
        }
    }

    pub fn start_add_group(&mut self) {
        self.input_form = Some(InputFormState::new(true));
        self.ui_mode = UiMode::AddingGroup;
    }

    pub fn input_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.editing_field = (form.editing_field + 1) % 3;
        }
    }

    pub fn input_form_cycle_priority(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.priority_index = (form.priority_index + 1) % Priority::all().len();
        }
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => form.title.push(c),
                1 => form.desc.push(c),
                2 => form.extra.push(c),
                _ => {}
            }
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => {
                    form.title.pop();
                }
                1 => {
                    form.desc.pop();
                }
                2 => {
                    form.extra.pop();
                }
                _ => {}
            }
        }
    }

    /// Submit the input form, creating the task or group
    pub fn submit_input_form(&mut self) {
        if let Some(form) = self.input_form.take() {
            if !form.title.trim().is_empty() {
                if form.for_group {
                    self.store.add_task_group(NewTaskGroup {
                        title: form.title.trim().to_string(),
                        desc: form.desc.trim().to_string(),
                        priority: form.priority(),
                        deadline: form.extra.trim().to_string(),
                        theme: Theme::Light,
                    });
                } else if let Some(group_id) = self.selected_group_id() {
                    let pomodoros = form.extra.trim().parse::<u32>().ok().filter(|n| *n > 0);
                    let desc = Some(form.desc.trim().to_string()).filter(|d| !d.is_empty());
                    self.store.add_task(NewTask {
                        title: form.title.trim().to_string(),
                        status: TaskStatus::Todo,
                        date: String::new(),
                        priority: Some(form.priority()),
                        pomodoros,
                        desc,
                        group_id,
                    });
                }
            }
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn toggle_show_done(&mut self) {
        self.filters.show_done = !self.filters.show_done;
        self.clamp_selection();
    }

    pub fn toggle_priority_filter(&mut self, priority: Priority) {
        match priority {
            Priority::High => self.filters.high_priority = !self.filters.high_priority,
            Priority::Medium => self.filters.medium_priority = !self.filters.medium_priority,
            Priority::Low => self.filters.low_priority = !self.filters.low_priority,
        }
        self.clamp_selection();
    }

    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
    }
}
