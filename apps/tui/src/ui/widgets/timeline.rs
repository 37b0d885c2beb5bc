use crate::ui::widgets::palette::Styles;
use grand_strategy_core::TimelineEvent;
use ratatui::style::Modifier;
use ratatui::text::{Line as TextLine, Span};

/// Year marker, title and description for each event, separated by blank lines.
pub fn timeline_lines(events: &[TimelineEvent], styles: &Styles) -> Vec<TextLine<'static>> {
    let mut lines = Vec::with_capacity(events.len() * 3);

    for (i, event) in events.iter().enumerate() {
        if i > 0 {
            lines.push(TextLine::from(Span::styled("│", styles.border)));
        }
        lines.push(TextLine::from(vec![
            Span::styled("● ", styles.accent),
            Span::styled(event.year, styles.heading),
            Span::raw("  "),
            Span::styled(event.title, styles.surface.add_modifier(Modifier::BOLD)),
        ]));
        lines.push(TextLine::from(vec![
            Span::styled("│ ", styles.border),
            Span::styled(event.description, styles.muted),
        ]));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use grand_strategy_core::{ContentStore, Palette, StyleConfig};

    #[test]
    fn three_lines_per_event_minus_leading_separator() {
        let store = ContentStore::builtin();
        let events = store.profiles()[0].timeline_events;
        let styles = Styles::from_palette(&Palette::resolve(StyleConfig::default()));

        let lines = timeline_lines(events, &styles);
        assert_eq!(lines.len(), events.len() * 3 - 1);
        assert!(lines[0].to_string().contains(events[0].year));
    }
}
