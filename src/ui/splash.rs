use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::flow::pages::ImageId;
use crate::ui::assets::{artwork, APP_NAME};
use crate::ui::theme::{SPLASH_BG, SPLASH_TEXT};

/// Full-screen splash: product logo over a tinted background, with the
/// product name underneath.
pub struct SplashScreen;

impl SplashScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .style(Style::default().bg(SPLASH_BG))
    }

    /// `(width, height)` of the rendered content, for centering.
    pub fn content_size(&self) -> (u16, u16) {
        let lines = self.lines();
        let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        (width, lines.len() as u16)
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let text_style = Style::default().fg(SPLASH_TEXT);
        let mut lines: Vec<Line<'static>> = artwork(ImageId::Logo)
            .trim_matches('\n')
            .lines()
            .map(|line| Line::styled(line, text_style))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::styled(
            APP_NAME,
            text_style.add_modifier(Modifier::BOLD),
        ));
        lines
    }
}

impl Default for SplashScreen {
    fn default() -> Self {
        Self::new()
    }
}
