use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::ui::theme::SUBTITLE_GRAY;

/// Placeholder shown after the carousel. A label only: the actual sign-in
/// flow is out of scope.
pub struct LandingScreen;

pub const LANDING_LABEL: &str = "Sign in / Register";

impl LandingScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        Paragraph::new(LANDING_LABEL)
            .alignment(Alignment::Center)
            .style(Style::default().fg(SUBTITLE_GRAY))
    }

    pub fn content_size(&self) -> (u16, u16) {
        (LANDING_LABEL.chars().count() as u16, 1)
    }
}

impl Default for LandingScreen {
    fn default() -> Self {
        Self::new()
    }
}
