use crate::ui::widgets::palette::color;
use grand_strategy_core::chart::{chart_cell_box, grid_ring, GRID_LEVELS};
use grand_strategy_core::{ChartGeometry, Palette};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine, Points};
use ratatui::Frame;

// Canvas units. Labels need room outside the outer ring.
const CHART_RADIUS: f64 = 1.0;
const CHART_BOUND: f64 = 1.45;
const LABEL_RADIUS: f64 = 1.15;

pub fn chart_square(area: Rect) -> Rect {
    let (dx, dy, width, height) = chart_cell_box(area.width, area.height);
    Rect::new(area.x + dx, area.y + dy, width, height)
}

/// Chart geometry has y growing downward; the canvas has it growing upward.
fn to_canvas((x, y): (f64, f64)) -> (f64, f64) {
    (x, -y)
}

fn draw_path(ctx: &mut ratatui::widgets::canvas::Context<'_>, path: &[(f64, f64)], color: Color) {
    for pair in path.windows(2) {
        let (x1, y1) = to_canvas(pair[0]);
        let (x2, y2) = to_canvas(pair[1]);
        ctx.draw(&CanvasLine {
            x1,
            y1,
            x2,
            y2,
            color,
        });
    }
}

/// Four-axis instruments-of-power chart: grid rings, spokes, the data
/// outline and a label with the raw value at each axis.
pub fn render_power_radar(
    f: &mut Frame<'_>,
    area: Rect,
    chart: &ChartGeometry,
    palette: &Palette,
    animation: f64,
) {
    if area.width < 12 || area.height < 6 || chart.points.is_empty() {
        return;
    }

    let square = chart_square(area);
    let grid = color(palette.chart_grid);
    let stroke = color(palette.chart_stroke);
    let text = color(palette.text);
    let count = chart.points.len();

    let polygon = chart.polygon(CHART_RADIUS);
    let spokes = chart.spokes(CHART_RADIUS);
    let labels = chart.spokes(LABEL_RADIUS);
    let vertices: Vec<(f64, f64)> = chart
        .scaled(CHART_RADIUS)
        .into_iter()
        .map(to_canvas)
        .collect();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(color(palette.surface))
        .x_bounds([-CHART_BOUND, CHART_BOUND])
        .y_bounds([-CHART_BOUND, CHART_BOUND])
        .paint(move |ctx| {
            for level in GRID_LEVELS {
                draw_path(ctx, &grid_ring(level, CHART_RADIUS, count), grid);
            }
            for spoke in &spokes {
                draw_path(ctx, &[(0.0, 0.0), *spoke], grid);
            }

            ctx.layer();
            draw_path(ctx, &polygon, stroke);
            ctx.draw(&Points {
                coords: &vertices,
                color: stroke,
            });

            let pulse = (animation * 1.5).sin().mul_add(0.015, 0.045);
            for &(x, y) in &vertices {
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: pulse,
                    color: stroke,
                });
            }

            for (point, &label_at) in chart.points.iter().zip(&labels) {
                let (x, y) = to_canvas(label_at);
                // Shift left-hand labels so the text ends at the anchor
                #[allow(clippy::cast_precision_loss)]
                let offset = if x < -0.1 {
                    point.label.len() as f64 * CHART_BOUND * 2.0 / f64::from(square.width.max(1))
                } else {
                    0.0
                };
                ctx.print(
                    x - offset,
                    y,
                    Span::styled(
                        format!("{} {}", point.label, point.value),
                        Style::default().fg(text),
                    ),
                );
            }
        });

    f.render_widget(canvas, square);
}

/// Small radar sweep for the title bar.
pub fn render_mini_radar(f: &mut Frame<'_>, area: Rect, animation: f64, palette: &Palette) {
    if area.width < 4 || area.height < 4 {
        return;
    }

    let square = chart_square(area);
    let grid = color(palette.chart_grid);
    let accent = color(palette.accent);

    f.render_widget(
        Canvas::default()
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| {
                let radius = 0.8;

                for i in 1..=3 {
                    ctx.draw(&Circle {
                        x: 0.0,
                        y: 0.0,
                        radius: radius * (f64::from(i) / 3.0),
                        color: grid,
                    });
                }

                let angle = animation;
                let ghost_angle = angle + (std::f64::consts::PI / 18.0);
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: ghost_angle.cos() * radius * 0.92,
                    y2: ghost_angle.sin() * radius * 0.92,
                    color: grid,
                });
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: angle.cos() * radius,
                    y2: angle.sin() * radius,
                    color: accent,
                });
            }),
        square,
    );
}
