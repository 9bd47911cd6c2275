use serde::{Deserialize, Serialize};

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Rank used by the priority sort (higher sorts first)
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Get the display name for this priority
    pub fn name(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Get all priorities as a list (cycling order for the input form)
    pub fn all() -> &'static [Priority] {
        &[Priority::High, Priority::Medium, Priority::Low]
    }
}

/// Lifecycle status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Todo,
    Current,
    Done,
}

impl TaskStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Current => "current",
            Self::Done => "done",
        }
    }
}

/// Countdown mode for the timer engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    Pomodoro,
    Short,
    Long,
}

impl TimerMode {
    /// Get the display label for this mode
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pomodoro => "Pomodoro",
            Self::Short => "Short Break",
            Self::Long => "Long Break",
        }
    }

    /// Check if this mode is a rest period
    pub fn is_break(&self) -> bool {
        matches!(self, Self::Short | Self::Long)
    }

    /// Get all modes in tab order
    pub fn all() -> &'static [TimerMode] {
        &[TimerMode::Pomodoro, TimerMode::Short, TimerMode::Long]
    }
}

/// Sort key for the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Priority,
    Deadline,
    Name,
    Pomodoros,
}

impl SortKey {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Deadline => "deadline",
            Self::Name => "name",
            Self::Pomodoros => "pomodoros",
        }
    }

    /// Next key in cycling order (for the sort hotkey)
    pub fn next(&self) -> Self {
        match self {
            Self::Priority => Self::Deadline,
            Self::Deadline => Self::Name,
            Self::Name => Self::Pomodoros,
            Self::Pomodoros => Self::Priority,
        }
    }
}

/// Card theme tag carried by task groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    Confirm,
    AddingTask,
    AddingGroup,
}
