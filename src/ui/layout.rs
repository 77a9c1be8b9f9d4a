use ratatui::layout::Rect;

use crate::ui::assets::SKIP_LABEL;

/// Main screen split: body above a one-line key-hint footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect) {
    let footer_height = 1.min(area.height);
    let body = Rect {
        height: area.height.saturating_sub(footer_height),
        ..area
    };
    let footer = Rect {
        y: area.y + body.height,
        height: footer_height,
        ..area
    };
    (body, footer)
}

/// Skip label on the splash screen, bottom-center, one row above the
/// footer. Input hit-testing and rendering both go through this.
pub fn splash_skip_rect(area: Rect) -> Rect {
    let width = (SKIP_LABEL.len() as u16).min(area.width);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(3);
    Rect {
        x,
        y,
        width,
        height: 1.min(area.height),
    }
}

/// Skip label on the carousel, top-left.
pub fn carousel_skip_rect(area: Rect) -> Rect {
    let width = (SKIP_LABEL.len() as u16).min(area.width);
    Rect {
        x: area.x + 2.min(area.width.saturating_sub(width)),
        y: area.y + 1.min(area.height.saturating_sub(1)),
        width,
        height: 1.min(area.height),
    }
}

/// Rect of `width` x `height` centered inside `area`, clamped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_takes_the_last_row() {
        let (body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(body, Rect::new(0, 0, 80, 23));
        assert_eq!(footer, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn skip_rects_stay_inside_small_areas() {
        let tiny = Rect::new(0, 0, 2, 1);
        let splash = splash_skip_rect(tiny);
        let carousel = carousel_skip_rect(tiny);
        assert!(splash.right() <= tiny.right());
        assert!(carousel.right() <= tiny.right());
    }

    #[test]
    fn centered_rect_is_clamped_to_area() {
        let area = Rect::new(0, 0, 10, 5);
        let rect = centered_rect_by_size(area, 40, 40);
        assert_eq!(rect, area);
    }
}
