use crate::app::App;
use crate::ui::widgets::palette::Styles;
use crate::ui::widgets::popup::centered_rect;
use crate::ui::widgets::radar::render_power_radar;
use crate::ui::widgets::timeline::timeline_lines;
use grand_strategy_core::shell::OverlayView;
use grand_strategy_core::{Palette, PaneView};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs, Wrap};
use ratatui::Frame;

/// Draws the detail overlay and returns the area it covers.
pub fn render_detail(
    app: &App,
    overlay: &OverlayView,
    palette: &Palette,
    f: &mut Frame<'_>,
) -> Rect {
    let styles = Styles::from_palette(palette);
    let area = centered_rect(86, 86, f.area());
    f.render_widget(Clear, area);

    let (position, total) = overlay.position;
    let block = Block::default()
        .title(Span::styled(format!(" {} ", overlay.heading), styles.heading))
        .title_bottom(TextLine::from(format!(" {position} of {total} ")).right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles.accent)
        .style(styles.surface);
    let inner = block.inner(area).inner(Margin::new(1, 0));
    f.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Tabs
            Constraint::Min(4),    // Pane
            Constraint::Length(1), // Shortcuts
        ])
        .split(inner);

    render_tabs(overlay, &styles, f, layout[0]);

    match &overlay.pane {
        PaneView::Overview { focus, chart } => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(layout[1]);

            let text = vec![
                section_title("Strategic Focus", &styles),
                TextLine::from(*focus),
                TextLine::from(""),
                section_title("Instruments of Power", &styles),
                TextLine::from(Span::styled(
                    "Diplomatic, Informational, Military, Economic",
                    styles.muted,
                )),
            ];
            f.render_widget(
                Paragraph::new(Text::from(text)).wrap(Wrap { trim: true }),
                columns[0],
            );

            render_power_radar(f, columns[1], chart, palette, app.animation_counter);
        }
        PaneView::Strategy {
            grand_strategy,
            theory,
            national_interests,
            instruments_of_power,
        } => {
            let mut text = vec![
                section_title("Grand Strategy", &styles),
                TextLine::from(*grand_strategy),
                TextLine::from(""),
                section_title("Theory", &styles),
                TextLine::from(*theory),
                TextLine::from(""),
                section_title("National Interests", &styles),
            ];
            text.extend(bullets(national_interests, &styles));
            text.push(TextLine::from(""));
            text.push(section_title("Instruments of Power", &styles));
            text.extend(bullets(instruments_of_power, &styles));

            f.render_widget(
                Paragraph::new(Text::from(text)).wrap(Wrap { trim: true }),
                layout[1],
            );
        }
        PaneView::Events {
            timeline,
            key_events,
        } => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(layout[1]);

            let mut left = vec![section_title("Timeline", &styles)];
            left.extend(timeline_lines(timeline, &styles));
            f.render_widget(
                Paragraph::new(Text::from(left)).wrap(Wrap { trim: true }),
                columns[0],
            );

            let mut right = vec![section_title("Key Events", &styles)];
            right.extend(bullets(key_events, &styles));
            f.render_widget(
                Paragraph::new(Text::from(right)).wrap(Wrap { trim: true }),
                columns[1],
            );
        }
        PaneView::Analysis {
            fas_analysis,
            quotes,
        } => {
            let mut text = vec![
                section_title("FAS Analysis", &styles),
                TextLine::from(*fas_analysis),
                TextLine::from(""),
                section_title("Notable Quotes", &styles),
            ];
            for quote in *quotes {
                text.push(TextLine::from(vec![
                    Span::styled("▌ ", styles.accent),
                    Span::styled(
                        format!("\"{quote}\""),
                        styles.surface.add_modifier(Modifier::ITALIC),
                    ),
                ]));
            }

            f.render_widget(
                Paragraph::new(Text::from(text)).wrap(Wrap { trim: true }),
                layout[1],
            );
        }
    }

    render_detail_shortcuts(&styles, f, layout[2]);
    area
}

fn render_tabs(overlay: &OverlayView, styles: &Styles, f: &mut Frame<'_>, area: Rect) {
    let titles = overlay
        .tabs
        .iter()
        .enumerate()
        .map(|(i, tab)| TextLine::from(format!("{} {}", i + 1, tab.label)))
        .collect::<Vec<_>>();
    let selected = overlay.tabs.iter().position(|tab| tab.active).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(styles.muted)
        .highlight_style(styles.heading.add_modifier(Modifier::REVERSED))
        .divider(Span::raw("|"))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(styles.border),
        );

    f.render_widget(tabs, area);
}

fn render_detail_shortcuts(styles: &Styles, f: &mut Frame<'_>, area: Rect) {
    let key = styles.accent.add_modifier(Modifier::BOLD);
    let shortcuts = TextLine::from(vec![
        Span::styled("←/→ 1-4", key),
        Span::raw(": Tabs  "),
        Span::styled("n/p", key),
        Span::raw(": Next/Previous president  "),
        Span::styled("Esc", key),
        Span::raw(": Close"),
    ]);

    f.render_widget(
        Paragraph::new(shortcuts).alignment(Alignment::Center),
        area,
    );
}

fn section_title(title: &'static str, styles: &Styles) -> TextLine<'static> {
    TextLine::from(Span::styled(title, styles.heading))
}

fn bullets(items: &[&'static str], styles: &Styles) -> Vec<TextLine<'static>> {
    items
        .iter()
        .map(|item| TextLine::from(vec![Span::styled("• ", styles.accent), Span::raw(*item)]))
        .collect()
}
