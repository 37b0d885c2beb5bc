use ratatui::layout::{Constraint, Layout, Rect};

/// Rectangle of the given percentage size centred in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);

    center
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(80, 50, area);
        assert_eq!(popup.width, 80);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 10);
        assert_eq!(popup.y, 10);
    }
}
