mod animation;
mod document;
mod storage;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use animation::{AnimationClock, AnimationMode};
use document::{variant_from_location, BrowserRoot};
use grand_strategy_core::chart::{chart_cell_box, grid_ring, GRID_LEVELS};
use grand_strategy_core::shell::{CardView, OverlayView};
use grand_strategy_core::{
    Action, ChartGeometry, ContentStore, Normalization, PageVariant, PageView, Palette, PaneView,
    PresentationShell, Rgb, SideEffect, StyleConfig, Tab, ThemeController, UiState,
};
use ratzilla::event::KeyCode;
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, BorderType, Borders, Clear, Paragraph, Tabs, Wrap,
    },
    Frame, Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use storage::LocalStorage;

/// What a key press means on the web page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui(Action<'static>),
    ToggleTheme,
    CycleVariant,
    ToggleNormalization,
    TogglePause,
    LogJson,
}

fn key_command(detail_open: bool, code: &KeyCode) -> Option<Command> {
    let global = match code {
        KeyCode::Char('t') => Some(Command::ToggleTheme),
        KeyCode::Char('v') => Some(Command::CycleVariant),
        KeyCode::Char('r') => Some(Command::ToggleNormalization),
        KeyCode::Char(' ') => Some(Command::TogglePause),
        KeyCode::Char('e') => Some(Command::LogJson),
        _ => None,
    };
    if global.is_some() {
        return global;
    }

    let action = if detail_open {
        match code {
            KeyCode::Esc | KeyCode::Char('x') => Action::Close,
            KeyCode::Right | KeyCode::Tab => Action::NextTab,
            KeyCode::Left => Action::PreviousTab,
            KeyCode::Char('n') | KeyCode::PageDown => Action::Next,
            KeyCode::Char('p') | KeyCode::PageUp => Action::Previous,
            KeyCode::Char(digit @ '1'..='4') => {
                Action::SwitchTab(Tab::from_index(*digit as usize - '1' as usize)?)
            }
            _ => return None,
        }
    } else {
        match code {
            KeyCode::Left | KeyCode::Up => Action::FocusPreviousCard,
            KeyCode::Right | KeyCode::Down => Action::FocusNextCard,
            KeyCode::Enter => Action::ActivateFocused,
            _ => return None,
        }
    };

    Some(Command::Ui(action))
}

struct WebApp {
    store: ContentStore,
    ui: UiState,
    theme: ThemeController<LocalStorage>,
    root: BrowserRoot,
    variant: PageVariant,
    normalization: Normalization,
    clock: AnimationClock,
}

impl WebApp {
    fn new() -> Self {
        let theme = ThemeController::load(LocalStorage::from_window());
        let mut root = BrowserRoot::from_window();
        theme.apply(&mut root);

        let variant = variant_from_location()
            .and_then(|raw| PageVariant::parse(&raw))
            .unwrap_or_default();

        Self {
            store: ContentStore::builtin(),
            ui: UiState::new(),
            theme,
            root,
            variant,
            normalization: Normalization::default(),
            clock: AnimationClock::default(),
        }
    }

    fn run(&mut self, command: Command) {
        match command {
            Command::Ui(action) => {
                if let Some(effect) = self.ui.apply(action, &self.store) {
                    effect.apply(&mut self.root);
                    if effect == SideEffect::LockBackground {
                        self.clock.restart_reveal();
                    }
                }
            }
            Command::ToggleTheme => {
                self.theme.toggle(&mut self.root);
            }
            Command::CycleVariant => self.variant = self.variant.next(),
            Command::ToggleNormalization => {
                self.normalization = match self.normalization {
                    Normalization::DomainMax(_) => Normalization::RelativeToLargest,
                    Normalization::RelativeToLargest => Normalization::default(),
                };
            }
            Command::TogglePause => self.clock.toggle_pause(),
            Command::LogJson => match self.store.to_json_pretty() {
                Ok(json) => web_sys::console::log_1(&json.into()),
                Err(error) => {
                    let message = format!("Failed to export profiles: {error}");
                    web_sys::console::error_1(&message.into());
                }
            },
        }
    }

    fn page(&self) -> PageView {
        PresentationShell::new(StyleConfig {
            variant: self.variant,
            dark: self.root.dark,
        })
        .with_normalization(self.normalization)
        .compose(&self.store, &self.ui)
    }
}

fn main() -> io::Result<()> {
    let app = Rc::new(RefCell::new(WebApp::new()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let app = app.clone();
        move |event| {
            let mut app = app.borrow_mut();
            if let Some(command) = key_command(app.ui.is_open(), &event.code) {
                app.run(command);
            }
        }
    });

    terminal.draw_web(move |f| {
        let mut app = app.borrow_mut();
        app.clock.tick(js_sys::Date::now() / 1000.0);
        let page = app.page();
        render_page(&app, &page, f);
    });

    Ok(())
}

const fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn text_style(palette: &Palette) -> Style {
    Style::default()
        .fg(color(palette.text))
        .bg(color(palette.surface))
}

fn heading_style(palette: &Palette) -> Style {
    Style::default()
        .fg(color(palette.accent))
        .add_modifier(Modifier::BOLD)
}

fn render_page(app: &WebApp, page: &PageView, f: &mut Frame<'_>) {
    let palette = &page.palette;
    let area = f.area();

    let block = Block::default()
        .title(page.title)
        .title_style(heading_style(palette))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(palette.border)))
        .style(Style::default().fg(color(palette.text)).bg(color(palette.background)));
    let inner = block.inner(area).inner(Margin::new(1, 1));
    f.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(inner);

    let mode = if app.clock.mode == AnimationMode::Paused {
        "  ·  paused"
    } else {
        ""
    };
    let subtitle = Paragraph::new(Span::styled(
        format!(
            "{} theme  ·  {}{mode}",
            if app.root.dark { "dark" } else { "light" },
            app.variant.label()
        ),
        Style::default().fg(color(palette.muted)),
    ))
    .alignment(Alignment::Center);
    f.render_widget(subtitle, layout[0]);

    render_cards(&page.cards, palette, f, layout[1]);

    let hint = Paragraph::new(Span::styled(
        "←/→ focus · Enter open · t theme · v variant · r scale · e export · Space pause",
        Style::default().fg(color(palette.muted)),
    ))
    .alignment(Alignment::Center);
    f.render_widget(hint, layout[2]);

    if let Some(overlay) = &page.overlay {
        let percent = app.clock.overlay_percent(90);
        render_overlay(overlay, palette, percent, f, area);
    }
}

fn render_cards(cards: &[CardView], palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    if cards.is_empty() {
        return;
    }

    #[allow(clippy::cast_possible_truncation)]
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(cards.iter().map(|_| Constraint::Ratio(1, cards.len() as u32)))
        .spacing(2)
        .split(area);

    for (card, card_area) in cards.iter().zip(columns.iter()) {
        let border = if card.focused {
            Style::default()
                .fg(color(palette.accent))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color(palette.border))
        };

        let paragraph = Paragraph::new(Text::from(vec![
            TextLine::from(Span::styled(card.name, heading_style(palette))),
            TextLine::from(Span::styled(
                card.years,
                Style::default().fg(color(palette.muted)),
            )),
            TextLine::from(""),
            TextLine::from(card.focus),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(if card.focused {
                    BorderType::Thick
                } else {
                    BorderType::Rounded
                })
                .border_style(border)
                .style(text_style(palette)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

        f.render_widget(paragraph, *card_area);
    }
}

fn centered_rect(percent: u16, area: Rect) -> Rect {
    let margin = (100 - percent) / 2;
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage(margin),
        Constraint::Percentage(percent),
        Constraint::Percentage(margin),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage(margin),
        Constraint::Percentage(percent),
        Constraint::Percentage(margin),
    ])
    .areas(middle);
    center
}

fn render_overlay(
    overlay: &OverlayView,
    palette: &Palette,
    percent: u16,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let popup = centered_rect(percent, area);
    f.render_widget(Clear, popup);

    let (position, total) = overlay.position;
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", overlay.heading),
            heading_style(palette),
        ))
        .title_bottom(
            TextLine::from(format!(" {position} of {total} · Esc to close ")).right_aligned(),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color(palette.accent)))
        .style(text_style(palette));
    let inner = block.inner(popup).inner(Margin::new(1, 0));
    f.render_widget(block, popup);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(4)])
        .split(inner);

    let titles = overlay
        .tabs
        .iter()
        .map(|tab| TextLine::from(tab.label))
        .collect::<Vec<_>>();
    let selected = overlay.tabs.iter().position(|tab| tab.active).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(color(palette.muted)))
        .highlight_style(heading_style(palette).add_modifier(Modifier::REVERSED))
        .divider(Span::raw("|"))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(color(palette.border))),
        );
    f.render_widget(tabs, layout[0]);

    let heading = |title: &'static str| TextLine::from(Span::styled(title, heading_style(palette)));
    let bullet = |item: &'static str| TextLine::from(format!("• {item}"));

    let lines = match &overlay.pane {
        PaneView::Overview { focus, chart } => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(layout[1]);
            f.render_widget(
                Paragraph::new(Text::from(vec![
                    heading("Strategic Focus"),
                    TextLine::from(*focus),
                ]))
                .wrap(Wrap { trim: true }),
                columns[0],
            );
            render_chart(chart, palette, f, columns[1]);
            return;
        }
        PaneView::Strategy {
            grand_strategy,
            theory,
            national_interests,
            instruments_of_power,
        } => {
            let mut lines = vec![
                heading("Grand Strategy"),
                TextLine::from(*grand_strategy),
                TextLine::from(""),
                heading("Theory"),
                TextLine::from(*theory),
                TextLine::from(""),
                heading("National Interests"),
            ];
            lines.extend(national_interests.iter().copied().map(bullet));
            lines.push(TextLine::from(""));
            lines.push(heading("Instruments of Power"));
            lines.extend(instruments_of_power.iter().copied().map(bullet));
            lines
        }
        PaneView::Events {
            timeline,
            key_events,
        } => {
            let mut lines = vec![heading("Timeline")];
            for event in *timeline {
                lines.push(TextLine::from(vec![
                    Span::styled(format!("{} ", event.year), heading_style(palette)),
                    Span::styled(event.title, Style::default().add_modifier(Modifier::BOLD)),
                ]));
                lines.push(TextLine::from(Span::styled(
                    format!("  {}", event.description),
                    Style::default().fg(color(palette.muted)),
                )));
            }
            lines.push(TextLine::from(""));
            lines.push(heading("Key Events"));
            lines.extend(key_events.iter().copied().map(bullet));
            lines
        }
        PaneView::Analysis {
            fas_analysis,
            quotes,
        } => {
            let mut lines = vec![
                heading("FAS Analysis"),
                TextLine::from(*fas_analysis),
                TextLine::from(""),
                heading("Notable Quotes"),
            ];
            for quote in *quotes {
                lines.push(TextLine::from(Span::styled(
                    format!("\"{quote}\""),
                    Style::default().add_modifier(Modifier::ITALIC),
                )));
            }
            lines
        }
    };

    f.render_widget(
        Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true }),
        layout[1],
    );
}

fn render_chart(chart: &ChartGeometry, palette: &Palette, f: &mut Frame<'_>, area: Rect) {
    let (dx, dy, width, height) = chart_cell_box(area.width, area.height);
    let square = Rect::new(area.x + dx, area.y + dy, width, height);

    let grid = color(palette.chart_grid);
    let stroke = color(palette.chart_stroke);
    let text = color(palette.text);
    let count = chart.points.len();
    let polygon = chart.polygon(1.0);
    let spokes = chart.spokes(1.0);
    let labels = chart.spokes(1.15);

    f.render_widget(
        Canvas::default()
            .x_bounds([-1.45, 1.45])
            .y_bounds([-1.45, 1.45])
            .paint(|ctx| {
                // Chart y grows downward, canvas y upward
                let mut path = |points: &[(f64, f64)], color: Color| {
                    for pair in points.windows(2) {
                        ctx.draw(&CanvasLine {
                            x1: pair[0].0,
                            y1: -pair[0].1,
                            x2: pair[1].0,
                            y2: -pair[1].1,
                            color,
                        });
                    }
                };

                for level in GRID_LEVELS {
                    path(&grid_ring(level, 1.0, count), grid);
                }
                for spoke in &spokes {
                    path(&[(0.0, 0.0), *spoke], grid);
                }
                path(&polygon, stroke);

                for (point, (x, y)) in chart.points.iter().zip(&labels) {
                    ctx.print(
                        *x,
                        -*y,
                        Span::styled(
                            format!("{} {}", point.label, point.value),
                            Style::default().fg(text),
                        ),
                    );
                }
            }),
        square,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_keys_map_to_focus_and_open() {
        assert_eq!(
            key_command(false, &KeyCode::Right),
            Some(Command::Ui(Action::FocusNextCard))
        );
        assert_eq!(
            key_command(false, &KeyCode::Enter),
            Some(Command::Ui(Action::ActivateFocused))
        );
        assert_eq!(key_command(false, &KeyCode::Char('n')), None);
    }

    #[test]
    fn detail_keys_map_to_tabs_and_profiles() {
        assert_eq!(
            key_command(true, &KeyCode::Char('3')),
            Some(Command::Ui(Action::SwitchTab(Tab::Events)))
        );
        assert_eq!(
            key_command(true, &KeyCode::PageDown),
            Some(Command::Ui(Action::Next))
        );
        assert_eq!(
            key_command(true, &KeyCode::Esc),
            Some(Command::Ui(Action::Close))
        );
        assert_eq!(key_command(true, &KeyCode::Char('9')), None);
    }

    #[test]
    fn theme_key_works_everywhere() {
        assert_eq!(
            key_command(false, &KeyCode::Char('t')),
            Some(Command::ToggleTheme)
        );
        assert_eq!(
            key_command(true, &KeyCode::Char('t')),
            Some(Command::ToggleTheme)
        );
    }
}
