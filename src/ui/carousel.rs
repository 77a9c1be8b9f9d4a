use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::flow::pager::PAGE_COUNT;
use crate::flow::pages::PageData;
use crate::ui::assets::artwork;
use crate::ui::theme::{ACCENT_BLUE, SUBTITLE_GRAY, TITLE_GREEN};

/// Centered column for one carousel page: title, subtitle, the page
/// indicator dots and the page illustration.
pub struct CarouselPage {
    index: usize,
    page: &'static PageData,
}

impl CarouselPage {
    pub fn new(index: usize, page: &'static PageData) -> Self {
        Self { index, page }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        Paragraph::new(self.lines()).alignment(Alignment::Center)
    }

    /// `(width, height)` of the rendered content, for centering.
    pub fn content_size(&self) -> (u16, u16) {
        let lines = self.lines();
        let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        (width, lines.len() as u16)
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::styled(
            self.page.title,
            Style::default().fg(TITLE_GREEN).add_modifier(Modifier::BOLD),
        )];
        lines.push(Line::from(""));
        for subtitle_line in self.page.subtitle.lines() {
            lines.push(Line::styled(
                subtitle_line,
                Style::default().fg(SUBTITLE_GRAY),
            ));
        }
        lines.push(Line::from(""));
        lines.push(self.dots());
        lines.push(Line::from(""));
        for artwork_line in artwork(self.page.image).trim_matches('\n').lines() {
            lines.push(Line::styled(
                artwork_line,
                Style::default().fg(SUBTITLE_GRAY),
            ));
        }
        lines
    }

    /// Indicator row: the active page is a filled dot, the rest outlines.
    fn dots(&self) -> Line<'static> {
        let style = Style::default().fg(ACCENT_BLUE);
        let mut spans = Vec::with_capacity(PAGE_COUNT * 2);
        for dot_index in 0..PAGE_COUNT {
            if dot_index > 0 {
                spans.push(Span::raw(" "));
            }
            let glyph = if dot_index == self.index { "●" } else { "○" };
            spans.push(Span::styled(glyph, style));
        }
        Line::from(spans)
    }
}
