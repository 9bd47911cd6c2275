use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub groups_area: Rect,
    pub tasks_area: Rect,
    pub timer_area: Rect,
    pub status_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Main area: Groups (25%) | Tasks (40%) | Timer (35%)
/// - Bottom bar: status line (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status line
        ])
        .split(area);

    let keybindings_area = main_chunks[0];
    let status_area = main_chunks[2];

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25), // Groups pane
            Constraint::Percentage(40), // Tasks pane
            Constraint::Percentage(35), // Timer pane
        ])
        .split(main_chunks[1]);

    MainLayout {
        keybindings_area,
        groups_area: horizontal[0],
        tasks_area: horizontal[1],
        timer_area: horizontal[2],
        status_area,
    }
}

/// Create centered modal area (for confirmations)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(9),
            Constraint::Percentage(35),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

/// Create centered form area (for the add task/group form)
pub fn create_form_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(12),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = create_layout(area);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.status_area.height, 1);
        assert!(layout.groups_area.height > 0);
        assert!(layout.tasks_area.width > layout.groups_area.width);
        assert!(layout.timer_area.width > 0);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 120, 40);
        let modal = create_modal_area(area);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 9);
    }

    #[test]
    fn test_create_form_area() {
        let area = Rect::new(0, 0, 120, 40);
        let form = create_form_area(area);

        assert!(form.width < area.width);
        assert_eq!(form.height, 12);
    }
}
