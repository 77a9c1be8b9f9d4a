use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::theme::FOOTER_DIM;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line key-hint bar with the version tucked into the right edge.
pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = " s: Skip │ ←/→: Pages │ q: Quit";
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count, so the box glyphs line up.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let padding = (area.width as usize)
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(FOOTER_DIM).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left)
    }
}
