//! Map UI rendering.

use super::MapView;
use crate::projection::Bounds;
use crate::shared::ThemeColors;
use geo::{LineString, MultiLineString};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Points},
        Block, Borders, Clear, Paragraph,
    },
    Frame,
};

/// Draw the map figure and, when a marker is hovered, its tooltip.
pub fn draw_map(
    f: &mut Frame<'_>,
    view: &mut MapView,
    area: Rect,
    focused: bool,
    colors: &ThemeColors,
) {
    let border = if focused {
        colors.focus_border
    } else {
        colors.border
    };
    let block = Block::default()
        .title(format!(" {} ", view.title))
        .title_style(Style::default().fg(colors.heading).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    if view.area != Some(inner) {
        view.area = Some(inner);
        if let Some((col, row)) = view.cursor {
            if !inner.contains(ratatui::layout::Position::new(col, row)) {
                view.cursor = None;
            }
        }
    }
    view.update_hover();

    let view = &*view;
    let bounds = view.viewport.visible_bounds(inner.width, inner.height);
    // One braille dot in projected units.
    let dot = (
        bounds.width() / (f64::from(inner.width.max(1)) * 2.0),
        bounds.height() / (f64::from(inner.height.max(1)) * 4.0),
    );

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(colors.bg)
        .x_bounds([bounds.min_x, bounds.max_x])
        .y_bounds([bounds.min_y, bounds.max_y])
        .paint(|ctx| {
            // One fill dot per cell.
            let fill_step = (dot.0 * 2.0, dot.1 * 4.0);
            for layer in &view.municipalities {
                let coords = stipple(layer, &bounds, fill_step);
                ctx.draw(&Points {
                    coords: &coords,
                    color: colors.municipality_fill,
                });
            }
            for (dx, dy) in heavy_offsets(dot) {
                draw_lines(ctx, &view.country, &bounds, dx, dy, colors.country);
            }
            for layer in &view.municipalities {
                draw_lines(ctx, layer, &bounds, 0.0, 0.0, colors.municipality);
            }

            ctx.layer();

            for (rank, group) in view.groups.iter().enumerate() {
                if !group.visible {
                    continue;
                }
                let style = Style::default()
                    .fg(colors.marker(rank))
                    .add_modifier(Modifier::BOLD);
                for marker in &group.markers {
                    ctx.print(
                        marker.x,
                        marker.y,
                        Span::styled(marker.glyph.to_string(), style),
                    );
                }
            }
        });

    f.render_widget(canvas, area);

    if let Some((col, row)) = view.cursor {
        if let Some(cell) = f.buffer_mut().cell_mut((col, row)) {
            cell.set_style(
                Style::default()
                    .fg(colors.cursor)
                    .add_modifier(Modifier::REVERSED),
            );
        }
    }

    if let (Some((_, marker)), Some(cursor)) = (view.hovered_marker(), view.cursor) {
        let lines = vec![
            Line::from(vec![
                Span::styled("Name: ", Style::default().fg(colors.label)),
                Span::styled(marker.name.clone(), Style::default().fg(colors.text)),
            ]),
            Line::from(vec![
                Span::styled("POI: ", Style::default().fg(colors.label)),
                Span::styled(marker.category.clone(), Style::default().fg(colors.text)),
            ]),
        ];
        draw_tooltip(f, inner, cursor, lines, colors);
    }
}

/// Offsets of the strokes that make up the heavy country outline: the line
/// itself and copies shifted by one braille dot right and up.
fn heavy_offsets(dot: (f64, f64)) -> [(f64, f64); 3] {
    [(0.0, 0.0), (dot.0, 0.0), (0.0, dot.1)]
}

/// Sparse grid of points inside the closed rings of a layer (even-odd rule),
/// limited to `bounds`.
///
/// The grid is anchored at the projection origin, so the pattern stays put
/// while panning. Open lines are not filled.
fn stipple(lines: &MultiLineString<f64>, bounds: &Bounds, step: (f64, f64)) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    if !(step.0 > 0.0 && step.1 > 0.0) || bounds.is_empty() {
        return points;
    }
    let rings: Vec<&LineString<f64>> = lines
        .iter()
        .filter(|l| l.is_closed() && l.0.len() >= 4)
        .collect();
    if rings.is_empty() {
        return points;
    }

    let mut crossings = Vec::new();
    let mut y = (bounds.min_y / step.1).floor() * step.1 + step.1 / 2.0;
    while y <= bounds.max_y {
        crossings.clear();
        for ring in &rings {
            for segment in ring.0.windows(2) {
                let (a, b) = (segment[0], segment[1]);
                if (a.y <= y) != (b.y <= y) {
                    crossings.push(a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
        }
        crossings.sort_by(f64::total_cmp);

        for span in crossings.chunks_exact(2) {
            let end = span[1].min(bounds.max_x);
            let mut x = (span[0].max(bounds.min_x) / step.0).ceil() * step.0;
            while x <= end {
                points.push((x, y));
                x += step.0;
            }
        }
        y += step.1;
    }
    points
}

/// Draw every segment of a layer that can touch the visible extent.
fn draw_lines(
    ctx: &mut Context<'_>,
    lines: &MultiLineString<f64>,
    bounds: &Bounds,
    dx: f64,
    dy: f64,
    color: Color,
) {
    for line in lines {
        for segment in line.0.windows(2) {
            let (a, b) = (segment[0], segment[1]);
            if (a.x < bounds.min_x && b.x < bounds.min_x)
                || (a.x > bounds.max_x && b.x > bounds.max_x)
                || (a.y < bounds.min_y && b.y < bounds.min_y)
                || (a.y > bounds.max_y && b.y > bounds.max_y)
            {
                continue;
            }
            ctx.draw(&CanvasLine {
                x1: a.x + dx,
                y1: a.y + dy,
                x2: b.x + dx,
                y2: b.y + dy,
                color,
            });
        }
    }
}

fn draw_tooltip(
    f: &mut Frame<'_>,
    inner: Rect,
    cursor: (u16, u16),
    lines: Vec<Line<'_>>,
    colors: &ThemeColors,
) {
    let width = lines
        .iter()
        .map(|l| l.width() as u16)
        .max()
        .unwrap_or(0)
        .saturating_add(2)
        .min(inner.width);
    let height = (lines.len() as u16 + 2).min(inner.height);
    if width < 3 || height < 3 {
        return;
    }

    // Below-right of the cursor, flipped when it would leave the canvas.
    let right = inner.x + inner.width;
    let bottom = inner.y + inner.height;
    let x = if cursor.0 + 1 + width <= right {
        cursor.0 + 1
    } else {
        cursor.0.saturating_sub(width).max(inner.x)
    };
    let y = if cursor.1 + 1 + height <= bottom {
        cursor.1 + 1
    } else {
        cursor.1.saturating_sub(height).max(inner.y)
    };
    let area = Rect::new(x, y, width, height);

    f.render_widget(Clear, area);
    let tooltip = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.focus_border))
            .style(Style::default().bg(colors.status_bg)),
    );
    f.render_widget(tooltip, area);
}
