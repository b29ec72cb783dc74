use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly under `anchor`, clamped to `bounds`
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16) -> Rect {
    let popup_x = anchor.x;
    let popup_y = anchor.y.saturating_add(anchor.height);
    let bottom = bounds.y.saturating_add(bounds.height);
    let right = bounds.x.saturating_add(bounds.width);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(right.saturating_sub(popup_x)),
        height: height.min(bottom.saturating_sub(popup_y)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
