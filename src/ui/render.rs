use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::flow::pages::PageData;
use crate::ui::app::App;
use crate::ui::assets::SKIP_LABEL;
use crate::ui::carousel::CarouselPage;
use crate::ui::footer::Footer;
use crate::ui::landing::LandingScreen;
use crate::ui::layout::{
    carousel_skip_rect, centered_rect_by_size, layout_regions, splash_skip_rect,
};
use crate::ui::splash::SplashScreen;
use crate::ui::theme::{ACCENT_BLUE, SPLASH_BG, SPLASH_TEXT, TITLE_GREEN};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (body, footer_area) = layout_regions(area);
    let snapshot = app.snapshot();

    if snapshot.splash_visible {
        draw_splash(frame, area, body);
    } else if let Some((index, page)) = snapshot.pager.page_index().zip(snapshot.page) {
        draw_carousel(frame, area, body, index, page);
    } else {
        draw_landing(frame, body);
    }

    frame.render_widget(Footer::new().widget(footer_area), footer_area);
}

// Skip labels are positioned from the full frame area, the same rects the
// mouse hit-testing uses.

fn draw_splash(frame: &mut Frame<'_>, area: Rect, body: Rect) {
    frame.render_widget(Block::default().style(Style::default().bg(SPLASH_BG)), body);

    let splash = SplashScreen::new();
    let (width, height) = splash.content_size();
    frame.render_widget(splash.widget(), centered_rect_by_size(body, width, height));

    frame.render_widget(
        Paragraph::new(SKIP_LABEL).style(Style::default().fg(SPLASH_TEXT)),
        splash_skip_rect(area),
    );
}

fn draw_carousel(frame: &mut Frame<'_>, area: Rect, body: Rect, index: usize, page: &'static PageData) {
    frame.render_widget(Clear, body);

    frame.render_widget(
        Paragraph::new(SKIP_LABEL).style(Style::default().fg(ACCENT_BLUE)),
        carousel_skip_rect(area),
    );

    // Decorative plus glyph in the top-right corner.
    if body.width >= 8 && body.height >= 2 {
        let plus = Rect {
            x: body.right().saturating_sub(4),
            y: body.y + 1,
            width: 1,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new("✚").style(Style::default().fg(TITLE_GREEN)),
            plus,
        );
    }

    let carousel = CarouselPage::new(index, page);
    let (width, height) = carousel.content_size();
    frame.render_widget(
        carousel.widget(),
        centered_rect_by_size(body, width, height),
    );
}

fn draw_landing(frame: &mut Frame<'_>, body: Rect) {
    frame.render_widget(Clear, body);
    let landing = LandingScreen::new();
    let (width, height) = landing.content_size();
    frame.render_widget(
        landing.widget(),
        centered_rect_by_size(body, width, height),
    );
}
