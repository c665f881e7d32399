//! Text rendering
//!
//! Renders [`DashboardState`] for a terminal. A section shows one of three
//! things: a loading line, its generic error message, or its content. Never
//! a mix of them.

use super::card::DashboardCard;
use super::pie::PieCascade;
use super::state::DashboardState;
use crate::sections::{FetchStatus, PieBreakdowns, SectionKind, WeeklyOverview};
use crate::stats::{CityStat, MonthlyPoint, TopCity};

/// Brand block shown in the header
pub const BRAND_LINES: [&str; 3] = ["SAEB", "SAC", "DOS"];

/// Municipalities covered by the program
pub const MUNICIPALITY_TOTAL: u32 = 343;

pub const LOADING_TEXT: &str = "Loading...";

/// Rendering knobs
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Width in characters of the longest chart bar
    pub bar_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { bar_width: 40 }
    }
}

/// Render the whole dashboard
pub fn render_dashboard(state: &DashboardState, options: &RenderOptions) -> String {
    let blocks = [
        render_header(),
        render_cards(&state.cards),
        render_weekly(&state.weekly, options),
        render_pies(&state.pies, &state.cascade, options),
    ];

    blocks
        .iter()
        .filter(|block| !block.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_header() -> String {
    let mut lines: Vec<String> = BRAND_LINES.iter().map(|l| l.to_string()).collect();
    lines.push(format!("{} Municipios", MUNICIPALITY_TOTAL));
    lines.join("\n")
}

/// Body of a section according to its status
fn section<T>(
    kind: SectionKind,
    status: &FetchStatus<T>,
    body: impl FnOnce(&T) -> String,
) -> String {
    match status {
        FetchStatus::Idle => String::new(),
        FetchStatus::Loading => LOADING_TEXT.to_string(),
        FetchStatus::Failed(_) => kind.failure_message().to_string(),
        FetchStatus::Loaded(data) => body(data),
    }
}

pub fn render_cards(status: &FetchStatus<Vec<DashboardCard>>) -> String {
    section(SectionKind::Cards, status, |cards| {
        let mut lines = Vec::new();
        for card in cards {
            let marker = if card.expanded { "▾" } else { "▸" };
            lines.push(format!("{} {:<24} {}", marker, card.title(), card.percentage()));
            if let Some(cities) = card.visible_cities() {
                lines.extend(city_lines(cities, "    "));
            }
        }
        lines.join("\n")
    })
}

pub fn render_weekly(status: &FetchStatus<WeeklyOverview>, options: &RenderOptions) -> String {
    section(SectionKind::Weekly, status, |overview| {
        let mut lines = vec!["Visitas da Semana".to_string()];
        lines.extend(city_lines(&overview.schedule.visits, "  "));

        lines.push(String::new());
        lines.push("Cidades com maior produção de CINs".to_string());
        lines.extend(top_city_lines(&overview.top_cities, options));

        lines.push(String::new());
        lines.push("Instalações da Semana".to_string());
        lines.extend(city_lines(&overview.schedule.installations, "  "));

        lines.push(String::new());
        lines.push("Produção CIN em todo lugar".to_string());
        lines.extend(monthly_lines(&overview.monthly, options));

        lines.join("\n")
    })
}

pub fn render_pies(
    status: &FetchStatus<PieBreakdowns>,
    cascade: &PieCascade,
    options: &RenderOptions,
) -> String {
    section(SectionKind::Pies, status, |data| {
        let mut lines = vec!["Status das Visitas".to_string()];
        let selection = cascade.selection();

        for tier in cascade.visible_tiers() {
            let breakdown = data.get(tier);
            lines.push(format!("[{}] {}", tier.ordinal(), tier));

            for (slot, bucket) in breakdown.buckets.iter().enumerate() {
                let filled = scaled(bucket.percentage.value(), 100.0, options.bar_width / 2);
                lines.push(format!(
                    "    {} {:<16} {:>7}  {}",
                    slot,
                    bucket.label,
                    bucket.percentage.to_string(),
                    "●".repeat(filled)
                ));
            }

            if let Some(sel) = selection.filter(|s| s.tier == tier) {
                if let Some(bucket) = breakdown.bucket(sel.slot) {
                    lines.extend(city_lines(&bucket.cities, "      "));
                }
            }
        }
        lines.join("\n")
    })
}

fn city_lines(cities: &[CityStat], indent: &str) -> Vec<String> {
    cities
        .iter()
        .map(|city| format!("{}- {}", indent, city.nome_municipio))
        .collect()
}

fn top_city_lines(cities: &[TopCity], options: &RenderOptions) -> Vec<String> {
    let max = cities.iter().map(|c| c.total_quantidade).fold(0.0, f64::max);
    let name_width = cities
        .iter()
        .map(|c| c.nome_municipio.chars().count())
        .max()
        .unwrap_or(0);

    cities
        .iter()
        .map(|city| {
            format!(
                "  {:<width$} {} {}",
                city.nome_municipio,
                "█".repeat(scaled(city.total_quantidade, max, options.bar_width)),
                city.total_quantidade,
                width = name_width
            )
        })
        .collect()
}

fn monthly_lines(points: &[MonthlyPoint], options: &RenderOptions) -> Vec<String> {
    let max = points.iter().map(|p| p.quantidade).fold(0.0, f64::max);

    points
        .iter()
        .map(|point| {
            format!(
                "  {:<8} {} {}",
                point.month_year,
                "▪".repeat(scaled(point.quantidade, max, options.bar_width)),
                point.quantidade
            )
        })
        .collect()
}

/// Bar length for `value` on a `0..=max` scale
fn scaled(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 || !value.is_finite() {
        return 0;
    }
    ((value / max).min(1.0) * width as f64).round() as usize
}
