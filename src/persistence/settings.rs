use super::files::atomic_write;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Minutes allowed for any timer duration
pub const MIN_DURATION_MINS: u32 = 1;
pub const MAX_DURATION_MINS: u32 = 120;

/// Timer settings stored in settings.json
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub pomodoro_mins: u32,
    pub short_break_mins: u32,
    pub long_break_mins: u32,
    /// Pomodoros before a long break is due
    pub long_break_interval: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pomodoro_mins: 25,
            short_break_mins: 5,
            long_break_mins: 15,
            long_break_interval: 4,
        }
    }
}

impl Settings {
    /// Clamp all durations into the allowed range
    pub fn clamped(self) -> Self {
        Self {
            pomodoro_mins: self.pomodoro_mins.clamp(MIN_DURATION_MINS, MAX_DURATION_MINS),
            short_break_mins: self
                .short_break_mins
                .clamp(MIN_DURATION_MINS, MAX_DURATION_MINS),
            long_break_mins: self
                .long_break_mins
                .clamp(MIN_DURATION_MINS, MAX_DURATION_MINS),
            long_break_interval: self.long_break_interval.max(1),
        }
    }
}

/// Load settings from settings.json, falling back to defaults when the
/// file doesn't exist
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&content)?;
    Ok(settings.clamped())
}

/// Save settings to settings.json
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    atomic_write(path, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.pomodoro_mins, 25);
        assert_eq!(settings.long_break_interval, 4);
    }

    #[test]
    fn test_save_and_load_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");

        let settings = Settings {
            pomodoro_mins: 50,
            short_break_mins: 10,
            long_break_mins: 30,
            long_break_interval: 3,
        };
        save_settings(&path, &settings).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_clamps_out_of_range_durations() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"pomodoro_mins":500,"short_break_mins":0,"long_break_mins":15,"long_break_interval":0}"#,
        )
        .unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded.pomodoro_mins, MAX_DURATION_MINS);
        assert_eq!(loaded.short_break_mins, MIN_DURATION_MINS);
        assert_eq!(loaded.long_break_interval, 1);
    }
}
