use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::flow::gesture::SwipeDirection;
use crate::ui::app::App;
use crate::ui::layout::{carousel_skip_rect, splash_skip_rect};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if matches!(key.code, KeyCode::Char('q')) || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.snapshot().splash_visible {
        // Any affirmative key doubles as the skip tap while the splash is
        // up; everything else waits for the carousel.
        if matches!(
            key.code,
            KeyCode::Char('s') | KeyCode::Char(' ') | KeyCode::Enter
        ) {
            app.skip_splash();
        }
        return;
    }

    // Right arrow pulls the next page in, matching a leftward content
    // swipe. The done screen absorbs all of these in the state machine.
    match key.code {
        KeyCode::Right | KeyCode::Char('l') => app.swipe(SwipeDirection::Left),
        KeyCode::Left | KeyCode::Char('h') => app.swipe(SwipeDirection::Right),
        KeyCode::Char('s') => app.skip_carousel(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.on_mouse_down(mouse.column),
        MouseEventKind::Drag(MouseButton::Left) => app.on_mouse_drag(mouse.column),
        MouseEventKind::Up(MouseButton::Left) => {
            if app.on_mouse_up(mouse.column) {
                tap(app, Position::new(mouse.column, mouse.row));
            }
        }
        _ => {}
    }
}

/// Resolve a tap against the skip affordance of whichever screen is up.
/// Taps anywhere else are target "none" and do nothing.
fn tap(app: &mut App, position: Position) {
    let (cols, rows) = app.size();
    let area = Rect::new(0, 0, cols, rows);
    let snapshot = app.snapshot();

    if snapshot.splash_visible {
        if splash_skip_rect(area).contains(position) {
            app.skip_splash();
        }
    } else if !snapshot.pager.is_done() && carousel_skip_rect(area).contains(position) {
        app.skip_carousel();
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
