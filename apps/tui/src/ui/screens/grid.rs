use crate::app::App;
use crate::ui::widgets::palette::Styles;
use crate::ui::widgets::radar::render_mini_radar;
use grand_strategy_core::shell::CardView;
use grand_strategy_core::{Normalization, PageView};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

const CARD_HEIGHT: u16 = 7;

pub fn render_grid(app: &App, page: &PageView, f: &mut Frame<'_>) {
    let styles = Styles::from_palette(&page.palette);
    let area = f.area();
    f.render_widget(Block::default().style(styles.base), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title
            Constraint::Length(1), // Filter bar
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(3), // Status
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(area.inner(Margin::new(2, 1)));

    render_title(app, page, &styles, f, layout[0]);
    render_filter_bar(app, &styles, f, layout[1]);
    render_cards(page, &styles, f, layout[2]);
    render_status(app, &styles, f, layout[3]);
    render_shortcuts(&styles, f, layout[4]);

    if page.overlay.is_some() {
        // Background stays visible but inert while the detail view is open
        f.buffer_mut()
            .set_style(area, Style::default().add_modifier(Modifier::DIM));
    }
}

fn render_title(app: &App, page: &PageView, styles: &Styles, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.border)
        .style(styles.surface);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(12)])
        .split(inner);

    let title = Paragraph::new(Text::from(vec![
        TextLine::from(Span::styled(page.title, styles.heading)),
        TextLine::from(Span::styled(
            format!(
                "{} profiles  ·  {} theme  ·  {}",
                app.store.len(),
                if app.root.dark { "dark" } else { "light" },
                app.variant.label()
            ),
            styles.muted,
        )),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    render_mini_radar(f, chunks[1], app.animation_counter, &page.palette);
}

fn render_filter_bar(app: &App, styles: &Styles, f: &mut Frame<'_>, area: Rect) {
    let line = if app.filter.is_active() {
        let cursor = if app.filter.editing && (app.animation_counter * 2.0).sin() > 0.0 {
            "█"
        } else {
            ""
        };
        TextLine::from(vec![
            Span::styled("/", styles.accent),
            Span::raw(format!("{}{cursor}", app.filter.query)),
            Span::styled(
                format!("  ({} of {})", app.filter.visible.len(), app.store.len()),
                styles.muted,
            ),
        ])
    } else {
        TextLine::from(Span::styled("Press / to filter", styles.muted))
    };

    f.render_widget(Paragraph::new(line), area);
}

fn render_cards(page: &PageView, styles: &Styles, f: &mut Frame<'_>, area: Rect) {
    if page.cards.is_empty() {
        let paragraph = Paragraph::new("No presidents match the filter.")
            .alignment(Alignment::Center)
            .style(styles.muted);
        f.render_widget(paragraph, area);
        return;
    }

    // One row of cards when there is room, otherwise stacked
    let per_row = (area.width / 28).clamp(1, 3) as usize;
    let rows: Vec<&[CardView]> = page.cards.chunks(per_row).collect();

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            rows.iter()
                .map(|_| Constraint::Length(CARD_HEIGHT))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(area);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        #[allow(clippy::cast_possible_truncation)]
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..per_row).map(|_| Constraint::Ratio(1, per_row as u32)))
            .spacing(2)
            .split(*row_area);

        for (card, card_area) in row.iter().zip(columns.iter()) {
            render_card(card, styles, f, *card_area);
        }
    }
}

fn render_card(card: &CardView, styles: &Styles, f: &mut Frame<'_>, area: Rect) {
    let (border_type, border_style) = if card.focused {
        (BorderType::Thick, styles.heading)
    } else {
        (BorderType::Rounded, styles.border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(styles.surface);

    let paragraph = Paragraph::new(Text::from(vec![
        TextLine::from(Span::styled(card.name, styles.heading)),
        TextLine::from(Span::styled(card.years, styles.muted)),
        TextLine::from(""),
        TextLine::from(card.focus),
    ]))
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_status(app: &App, styles: &Styles, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Status ")
        .borders(Borders::ALL)
        .border_style(styles.border)
        .style(styles.surface);

    let scale = match app.normalization {
        Normalization::DomainMax(max) => format!("scale 0-{max}"),
        Normalization::RelativeToLargest => "scale relative".to_string(),
    };

    let message = if app.status_message.is_empty() {
        if app.animation_paused {
            "Animation paused".to_string()
        } else {
            scale
        }
    } else {
        app.status_message.clone()
    };

    let paragraph = Paragraph::new(Span::styled(message, styles.muted)).block(block);
    f.render_widget(paragraph, area);
}

fn render_shortcuts(styles: &Styles, f: &mut Frame<'_>, area: Rect) {
    let key = styles.accent.add_modifier(Modifier::BOLD);
    let shortcuts = TextLine::from(vec![
        Span::styled("←/→", key),
        Span::raw(": Focus  "),
        Span::styled("Enter", key),
        Span::raw(": Open  "),
        Span::styled("/", key),
        Span::raw(": Filter  "),
        Span::styled("t", key),
        Span::raw(": Theme  "),
        Span::styled("v", key),
        Span::raw(": Variant  "),
        Span::styled("F1", key),
        Span::raw(": Help  "),
        Span::styled("q", key),
        Span::raw(": Quit"),
    ]);

    f.render_widget(
        Paragraph::new(shortcuts).alignment(Alignment::Center),
        area,
    );
}
