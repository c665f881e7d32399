//! Chart Components
//!
//! SVG bar, line and pie charts. Geometry is computed by plain functions so
//! it can be tested without a browser.

use leptos::*;
use std::f64::consts::PI;

use saeb_dashboard::view::slice_color;
use saeb_dashboard::{Action, Breakdown, MonthlyPoint, StatusDimension, TopCity};

use crate::state::use_global_state;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 240.0;
const PIE_RADIUS: f64 = 90.0;
/// Room left of the bars for city names
const LABEL_WIDTH: f64 = 140.0;

const BAR_COLOR: &str = "#3182ce";
const LINE_COLOR: &str = "#38a169";

/// Axis-aligned rectangle in SVG user units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Horizontal bars scaled to the largest value, one row per value
pub fn bar_layout(values: &[f64], width: f64, height: f64) -> Vec<Rect> {
    if values.is_empty() {
        return Vec::new();
    }

    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    let row = height / values.len() as f64;
    let gap = row * 0.2;

    values
        .iter()
        .enumerate()
        .map(|(i, value)| Rect {
            x: 0.0,
            y: i as f64 * row + gap / 2.0,
            width: if max > 0.0 { value.max(0.0) / max * width } else { 0.0 },
            height: row - gap,
        })
        .collect()
}

/// Points of a line series spread evenly across the width
pub fn line_points(values: &[f64], width: f64, height: f64) -> Vec<(f64, f64)> {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let y = if max > 0.0 {
                height - value.max(0.0) / max * height
            } else {
                height
            };
            (i as f64 * step, y)
        })
        .collect()
}

/// SVG path data for each pie slice, clockwise from twelve o'clock
///
/// A slice covering the whole pie is drawn as two half arcs. Empty slices
/// get an empty path.
pub fn pie_paths(values: &[f64], cx: f64, cy: f64, r: f64) -> Vec<String> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    let mut angle = -PI / 2.0;

    values
        .iter()
        .map(|value| {
            let fraction = if total > 0.0 { value.max(0.0) / total } else { 0.0 };

            if fraction <= 0.0 {
                return String::new();
            }
            if fraction >= 0.9999 {
                angle += fraction * 2.0 * PI;
                return format!(
                    "M {} {} A {r} {r} 0 1 1 {} {} A {r} {r} 0 1 1 {} {} Z",
                    cx - r,
                    cy,
                    cx + r,
                    cy,
                    cx - r,
                    cy,
                    r = r
                );
            }

            let start = angle;
            let end = angle + fraction * 2.0 * PI;
            angle = end;

            let large_arc = if fraction > 0.5 { 1 } else { 0 };
            format!(
                "M {} {} L {:.3} {:.3} A {r} {r} 0 {} 1 {:.3} {:.3} Z",
                cx,
                cy,
                cx + r * start.cos(),
                cy + r * start.sin(),
                large_arc,
                cx + r * end.cos(),
                cy + r * end.sin(),
                r = r
            )
        })
        .collect()
}

/// Top cities by CIN production
#[component]
pub fn BarChart(cities: Vec<TopCity>) -> impl IntoView {
    let values: Vec<f64> = cities.iter().map(|c| c.total_quantidade).collect();
    let bars = bar_layout(&values, CHART_WIDTH - LABEL_WIDTH, CHART_HEIGHT);

    view! {
        <svg viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT) class="bar-chart">
            {bars
                .into_iter()
                .zip(cities)
                .map(|(bar, city)| {
                    let label_y = bar.y + bar.height / 2.0 + 4.0;
                    view! {
                        <g>
                            <text x={LABEL_WIDTH - 6.0} y=label_y font-size="11" text-anchor="end">
                                {city.nome_municipio}
                            </text>
                            <rect
                                x={LABEL_WIDTH + bar.x}
                                y=bar.y
                                width=bar.width
                                height=bar.height
                                fill=BAR_COLOR
                            />
                        </g>
                    }
                })
                .collect_view()}
        </svg>
    }
}

/// Monthly CIN production
#[component]
pub fn LineChart(points: Vec<MonthlyPoint>) -> impl IntoView {
    let values: Vec<f64> = points.iter().map(|p| p.quantidade).collect();
    let coords = line_points(&values, CHART_WIDTH, CHART_HEIGHT);
    let polyline = coords
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ");

    view! {
        <svg
            viewBox=format!("-10 -10 {} {}", CHART_WIDTH + 20.0, CHART_HEIGHT + 34.0)
            class="line-chart"
        >
            <polyline points=polyline fill="none" stroke=LINE_COLOR stroke-width="2" />
            {coords
                .into_iter()
                .zip(points)
                .map(|((x, y), point)| {
                    view! {
                        <circle cx=x cy=y r="3" fill=LINE_COLOR />
                        <text x=x y={CHART_HEIGHT + 18.0} font-size="10" text-anchor="middle">
                            {point.month_year}
                        </text>
                    }
                })
                .collect_view()}
        </svg>
    }
}

/// One tier of the status pie cascade
///
/// Clicking a slice selects it; double-clicking the pie asks for the next
/// tier.
#[component]
pub fn PieChart(breakdown: Breakdown) -> impl IntoView {
    let state = use_global_state();
    let tier: StatusDimension = breakdown.dimension;
    let size = PIE_RADIUS * 2.0;

    let values: Vec<f64> = breakdown
        .buckets
        .iter()
        .map(|b| b.percentage.value())
        .collect();
    let paths = pie_paths(&values, PIE_RADIUS, PIE_RADIUS, PIE_RADIUS);

    view! {
        <div class="pie">
            <svg
                viewBox=format!("0 0 {} {}", size, size)
                width=size
                height=size
                on:dblclick=move |_| state.dispatch(Action::RevealNext { from: tier })
            >
                {paths
                    .into_iter()
                    .enumerate()
                    .map(|(slot, d)| {
                        view! {
                            <path
                                d=d
                                fill=slice_color(slot)
                                on:click=move |_| state.dispatch(Action::SelectSlice { tier, slot })
                            />
                        }
                    })
                    .collect_view()}
            </svg>
            <ul class="legend">
                {breakdown
                    .buckets
                    .iter()
                    .enumerate()
                    .map(|(slot, bucket)| {
                        view! {
                            <li style=format!("color: {}", slice_color(slot))>
                                {format!("{}: {}", bucket.label, bucket.percentage)}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_scale_to_max() {
        let bars = bar_layout(&[100.0, 50.0], 200.0, 100.0);

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].width, 200.0);
        assert_eq!(bars[1].width, 100.0);
        assert_eq!(bars[0].y, 5.0);
        assert_eq!(bars[1].y, 55.0);
        assert!(bars[0].y + bars[0].height < bars[1].y);
    }

    #[test]
    fn test_bars_all_zero() {
        let bars = bar_layout(&[0.0, 0.0], 200.0, 100.0);
        assert!(bars.iter().all(|b| b.width == 0.0));
        assert!(bar_layout(&[], 200.0, 100.0).is_empty());
    }

    #[test]
    fn test_line_points() {
        let points = line_points(&[200.0, 400.0, 100.0], 100.0, 80.0);
        assert_eq!(points, vec![(0.0, 40.0), (50.0, 0.0), (100.0, 60.0)]);

        assert_eq!(line_points(&[5.0], 100.0, 80.0), vec![(0.0, 0.0)]);
    }

    #[test]
    fn test_pie_halves() {
        let paths = pie_paths(&[50.0, 50.0], 100.0, 100.0, 100.0);

        assert_eq!(paths.len(), 2);
        // First slice runs from twelve to six o'clock
        assert!(paths[0].starts_with("M 100 100 L 100.000 0.000"));
        assert!(paths[0].ends_with("0 0 1 100.000 200.000 Z"));
    }

    #[test]
    fn test_pie_large_arc_flag() {
        let paths = pie_paths(&[75.0, 25.0], 0.0, 0.0, 10.0);
        assert!(paths[0].contains(" 0 1 1 "));
        assert!(paths[1].contains(" 0 0 1 "));
    }

    #[test]
    fn test_pie_full_and_empty_slices() {
        let paths = pie_paths(&[100.0, 0.0], 50.0, 50.0, 50.0);
        assert!(paths[0].starts_with("M 0 50 A 50 50"));
        assert!(paths[1].is_empty());

        let paths = pie_paths(&[0.0, 0.0], 50.0, 50.0, 50.0);
        assert!(paths.iter().all(|p| p.is_empty()));
    }

    #[test]
    fn test_sliver_after_near_full_slice_starts_where_it_ends() {
        let paths = pie_paths(&[99.995, 0.005], 100.0, 100.0, 100.0);
        assert!(paths[0].starts_with("M 0 100 A 100 100"));
        // Just left of twelve o'clock, closing the circle
        assert!(
            paths[1].starts_with("M 100 100 L 99.969 0.000"),
            "{}",
            paths[1]
        );
        assert!(paths[1].ends_with("100.000 0.000 Z"), "{}", paths[1]);
    }
}
