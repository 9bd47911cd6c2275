use crate::domain::{Task, TaskGroup};
use crate::persistence::{ensure_ember_dir, Settings};
use crate::report::stats::{calculate_global_stats, calculate_group_stats, calculate_priority_stats};
use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::PathBuf;

/// Format a count of minutes as "Xh Ym" or "Xm" for display
fn format_minutes(total_mins: u32) -> String {
    if total_mins < 60 {
        format!("{}m", total_mins)
    } else {
        let hours = total_mins / 60;
        let mins = total_mins % 60;
        if mins == 0 {
            format!("{}h", hours)
        } else {
            format!("{}h {}m", hours, mins)
        }
    }
}

fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Generate a markdown progress report across all groups and tasks
pub fn generate_report(
    groups: &[TaskGroup],
    tasks: &[Task],
    settings: &Settings,
    output_path: Option<PathBuf>,
) -> Result<PathBuf> {
    let report_date = Local::now().date_naive();

    let global = calculate_global_stats(tasks);
    let group_stats = calculate_group_stats(groups, tasks);
    let priority = calculate_priority_stats(tasks);

    let mut report = String::new();
    report.push_str(&format!("# Focus Report - {}\n\n", report_date));

    // Summary Section
    report.push_str("## Summary\n\n");
    report.push_str(&format!(
        "- **Tasks:** {} (Done: {})\n",
        global.total_tasks, global.done_count
    ));
    if let Some(current) = &global.current_task {
        report.push_str(&format!("- **Current Task:** {}\n", current));
    }

    let pomodoro_pct = if global.target_pomodoros > 0 {
        (global.completed_pomodoros as f64 / global.target_pomodoros as f64) * 100.0
    } else {
        0.0
    };
    report.push_str(&format!(
        "- **Pomodoros:** {} / {} planned ({})\n",
        global.completed_pomodoros,
        global.target_pomodoros,
        format_percent(pomodoro_pct)
    ));
    report.push_str(&format!(
        "- **Focus Time:** {} ({} per pomodoro)\n\n",
        format_minutes(global.completed_pomodoros * settings.pomodoro_mins),
        format_minutes(settings.pomodoro_mins)
    ));

    // Focus by Priority Section
    let total_by_priority = priority.high + priority.medium + priority.low + priority.unset;
    if total_by_priority > 0 {
        report.push_str("## Focus by Priority\n\n");
        for (name, count) in [
            ("High", priority.high),
            ("Medium", priority.medium),
            ("Low", priority.low),
            ("Unset", priority.unset),
        ] {
            if count > 0 {
                let pct = (count as f64 / total_by_priority as f64) * 100.0;
                report.push_str(&format!(
                    "- **{}:** {} pomodoros ({})\n",
                    name,
                    count,
                    format_percent(pct)
                ));
            }
        }
        report.push('\n');
    }

    // Groups Section
    if !group_stats.is_empty() {
        report.push_str("## Groups\n\n");
        for stats in &group_stats {
            report.push_str(&format!("### {}\n\n", stats.title));
            if !stats.deadline.is_empty() {
                report.push_str(&format!("- **Deadline:** {}\n", stats.deadline));
            }
            report.push_str(&format!(
                "- **Tasks:** {}/{} done\n",
                stats.done_count, stats.total_tasks
            ));
            report.push_str(&format!(
                "- **Pomodoros:** {} / {} planned\n",
                stats.completed_pomodoros, stats.target_pomodoros
            ));
            report.push_str(&format!(
                "- **Focus Time:** {}\n\n",
                format_minutes(stats.completed_pomodoros * settings.pomodoro_mins)
            ));
        }
    }

    // Tasks Breakdown Section
    if !tasks.is_empty() {
        report.push_str("## Tasks Breakdown\n\n");
        for group in groups {
            let members: Vec<&Task> = tasks.iter().filter(|t| t.group_id == group.id).collect();
            if members.is_empty() {
                continue;
            }
            report.push_str(&format!("### {}\n\n", group.title));
            for task in members {
                let mark = if task.is_done() { "x" } else { " " };
                report.push_str(&format!(
                    "- [{}] **{}** ({}/{} pomodoros)\n",
                    mark,
                    task.title,
                    task.completed_pomodoros,
                    task.target_pomodoros()
                ));
                if !task.date.is_empty() {
                    report.push_str(&format!("  - {}\n", task.date));
                }
            }
            report.push('\n');
        }
    }

    let output = if let Some(path) = output_path {
        path
    } else {
        ensure_ember_dir()?.join(format!("report-{}.md", report_date))
    };

    fs::write(&output, report)?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Priority, TaskStatus, Theme};

    fn sample_data() -> (Vec<TaskGroup>, Vec<Task>) {
        let groups = vec![TaskGroup {
            id: 1,
            title: "Thesis".to_string(),
            desc: String::new(),
            priority: Priority::High,
            deadline: "2026-09-15".to_string(),
            theme: Theme::Light,
            completed: 0,
            total: 0,
        }];
        let tasks = vec![
            Task {
                id: 1,
                title: "Outline chapter 2".to_string(),
                status: TaskStatus::Done,
                date: "Finished: 2026-08-30".to_string(),
                priority: Some(Priority::High),
                pomodoros: Some(3),
                desc: None,
                group_id: 1,
                completed_pomodoros: 3,
                pomodoros_since_long_break: 0,
            },
            Task {
                id: 2,
                title: "Draft introduction".to_string(),
                status: TaskStatus::Current,
                date: String::new(),
                priority: Some(Priority::Medium),
                pomodoros: Some(5),
                desc: None,
                group_id: 1,
                completed_pomodoros: 1,
                pomodoros_since_long_break: 1,
            },
        ];
        (groups, tasks)
    }

    #[test]
    fn test_report_contains_sections_and_totals() {
        let (groups, tasks) = sample_data();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");

        let written =
            generate_report(&groups, &tasks, &Settings::default(), Some(path.clone())).unwrap();
        assert_eq!(written, path);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("## Summary"));
        assert!(content.contains("- **Tasks:** 2 (Done: 1)"));
        assert!(content.contains("- **Current Task:** Draft introduction"));
        assert!(content.contains("- **Pomodoros:** 4 / 8 planned (50.0%)"));
        // 4 pomodoros at the default 25 minutes
        assert!(content.contains("- **Focus Time:** 1h 40m"));
        assert!(content.contains("### Thesis"));
        assert!(content.contains("- [x] **Outline chapter 2** (3/3 pomodoros)"));
        assert!(content.contains("- [ ] **Draft introduction** (1/5 pomodoros)"));
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(25), "25m");
        assert_eq!(format_minutes(60), "1h");
        assert_eq!(format_minutes(125), "2h 5m");
    }
}
