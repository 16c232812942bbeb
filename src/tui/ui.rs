use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{MenuList, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, list_area] = layout.areas(frame.area());

    TitleBar::new(
        &app.category,
        &app.source_name,
        &app.status_message,
        &app.phase,
    )
    .render(frame, title_area);

    // Reading marks the current value as seen by this subscriber
    let items = tui.items.borrow_and_update();
    MenuList::new(&mut tui.menu_list, &items).render(frame, list_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::menu::FetchError;
    use crate::test_support::{buffer_lines, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn list_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
        buffer_lines(terminal.backend().buffer())
            .into_iter()
            .skip(1) // title bar
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect()
    }

    #[test]
    fn test_first_render_shows_no_rows() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let app = test_app();
        let mut tui = TuiState::new(app.items.subscribe());

        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        assert!(list_rows(&terminal).is_empty());
        let lines = buffer_lines(terminal.backend().buffer());
        assert!(lines[0].starts_with("Little Lemon · Salads (test-source) | Loading…"));
    }

    #[test]
    fn test_loaded_menu_renders_rows() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut app = test_app();
        let mut tui = TuiState::new(app.items.subscribe());
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        update(
            &mut app,
            Action::MenuLoaded(vec!["Greek Salad".into(), "Caesar Salad".into()]),
        );
        assert!(tui.items.has_changed().unwrap());
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        assert_eq!(list_rows(&terminal), vec!["Greek Salad", "Caesar Salad"]);
        assert!(!tui.items.has_changed().unwrap());
        let lines = buffer_lines(terminal.backend().buffer());
        assert!(lines[0].starts_with("Little Lemon · Salads (test-source) | 2 items"));
    }

    #[test]
    fn test_failed_menu_renders_empty_list_with_status() {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let mut app = test_app();
        let mut tui = TuiState::new(app.items.subscribe());

        update(&mut app, Action::MenuFailed("parse error: expected value".into()));
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        assert!(list_rows(&terminal).is_empty());
        let lines = buffer_lines(terminal.backend().buffer());
        assert!(lines[0].contains("Menu unavailable: parse error: expected value"));
    }

    #[test]
    fn test_http_failure_fits_on_the_title_line() {
        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        let mut app = test_app();
        let mut tui = TuiState::new(app.items.subscribe());
        let err = FetchError::Api {
            status: 502,
            message: "Bad Gateway".to_string(),
        };

        update(&mut app, Action::MenuFailed(err.to_string()));
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let lines = buffer_lines(terminal.backend().buffer());
        assert_eq!(
            lines[0].trim_end(),
            "Little Lemon · Salads (test-source) | Menu unavailable: HTTP 502: Bad Gateway"
        );
        assert!(list_rows(&terminal).is_empty());
    }
}
