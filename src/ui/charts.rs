use std::f64::consts::TAU;

use eframe::egui::{Color32, RichText, ScrollArea, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Legend, Line, Plot, PlotPoint,
    PlotPoints, Points, Polygon, Text,
};

use crate::color::{heat_color, kind_color};
use crate::data::aggregate::Kpis;
use crate::data::model::{Genre, Kind};
use crate::state::AppState;

const CHART_HEIGHT: f32 = 260.0;

/// Accent colour for the single-series bar and line charts.
const ACCENT: Color32 = Color32::from_rgb(100, 160, 230);

// ---------------------------------------------------------------------------
// Central panel – KPI row plus the eight charts
// ---------------------------------------------------------------------------

/// Render the KPI row and all charts for the current filtered view.
///
/// Everything here reads from the cached [`crate::data::aggregate::Summary`];
/// with zero matching rows every chart simply comes out empty.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Movies & Series Catalog Dashboard");
            ui.add_space(4.0);

            kpi_row(ui, &state.summary.kpis);
            ui.separator();

            ui.columns(2, |cols: &mut [Ui]| {
                titles_by_year(&mut cols[0], state);
                kind_share(&mut cols[1], state);
            });
            ui.columns(2, |cols: &mut [Ui]| {
                top_genres(&mut cols[0], state);
                titles_by_country(&mut cols[1], state);
            });
            ui.columns(2, |cols: &mut [Ui]| {
                duration_scatter(&mut cols[0], state);
                duration_spread(&mut cols[1], state);
            });
            ui.columns(2, |cols: &mut [Ui]| {
                titles_trend(&mut cols[0], state);
                genre_year_heatmap(&mut cols[1], state);
            });
        });
}

// ---------------------------------------------------------------------------
// KPI row
// ---------------------------------------------------------------------------

fn kpi_row(ui: &mut Ui, kpis: &Kpis) {
    ui.columns(4, |cols: &mut [Ui]| {
        metric(&mut cols[0], "Total Titles", kpis.total);
        metric(&mut cols[1], "Movies", kpis.movies);
        metric(&mut cols[2], "TV Shows", kpis.tv_shows);
        metric(&mut cols[3], "Unique Genres", kpis.unique_genres);
    });
}

fn metric(ui: &mut Ui, label: &str, value: usize) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(label);
        ui.label(RichText::new(value.to_string()).size(28.0).strong());
    });
}

// ---------------------------------------------------------------------------
// Shared plot scaffolding
// ---------------------------------------------------------------------------

/// A dashboard chart: fixed height, no pan/zoom interaction.
fn chart(id: &str) -> Plot<'static> {
    Plot::new(id.to_owned())
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
}

/// Axis formatter that only labels whole numbers, for index-based axes.
fn index_labels(labels: Vec<String>) -> impl Fn(GridMark, &std::ops::RangeInclusive<f64>) -> String {
    move |mark, _range| {
        let rounded = mark.value.round();
        if (mark.value - rounded).abs() > 0.05 || rounded < 0.0 {
            return String::new();
        }
        labels
            .get(rounded as usize)
            .cloned()
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// 1. Bar – titles by release year
// ---------------------------------------------------------------------------

fn titles_by_year(ui: &mut Ui, state: &AppState) {
    ui.strong("Titles by Release Year");

    let bars: Vec<Bar> = state
        .summary
        .count_by_year
        .iter()
        .map(|(&year, &count)| Bar::new(year as f64, count as f64).width(0.7))
        .collect();

    chart("titles_by_year")
        .x_axis_label("Release year")
        .y_axis_label("Titles")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(ACCENT).name("Titles"));
        });
}

// ---------------------------------------------------------------------------
// 2. Pie – movies vs TV shows
// ---------------------------------------------------------------------------

fn kind_share(ui: &mut Ui, state: &AppState) {
    ui.strong("Movies vs TV Shows");

    let kpis = &state.summary.kpis;
    let slices = [
        (Kind::Movie, kpis.movies),
        (Kind::TvShow, kpis.tv_shows),
    ];

    chart("kind_share")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            let mut start = 0.0_f64;
            for (kind, count) in slices {
                if count == 0 {
                    continue;
                }
                let fraction = count as f64 / kpis.total as f64;
                let end = start + fraction * TAU;
                let color = kind_color(kind);
                plot_ui.polygon(
                    pie_sector(start, end)
                        .fill_color(color.gamma_multiply(0.85))
                        .stroke(Stroke::new(1.0, color))
                        .name(format!("{kind} ({count})")),
                );
                start = end;
            }
        });
}

/// A unit-circle sector from `start` to `end` radians, centered on origin.
fn pie_sector(start: f64, end: f64) -> Polygon<'static> {
    const STEPS: usize = 64;
    let mut points = vec![[0.0, 0.0]];
    for i in 0..=STEPS {
        let angle = start + (end - start) * i as f64 / STEPS as f64;
        points.push([angle.cos(), angle.sin()]);
    }
    Polygon::new(PlotPoints::from(points))
}

// ---------------------------------------------------------------------------
// 3. Horizontal bar – genre counts
// ---------------------------------------------------------------------------

fn top_genres(ui: &mut Ui, state: &AppState) {
    ui.strong("Top Genres");

    let genres: Vec<Genre> = state.summary.count_by_genre.keys().copied().collect();
    let bars: Vec<Bar> = genres
        .iter()
        .enumerate()
        .map(|(i, &genre)| {
            let count = state.summary.count_by_genre[&genre];
            Bar::new(i as f64, count as f64)
                .width(0.6)
                .fill(state.genre_colors.color_for(genre))
                .name(genre.label())
        })
        .collect();

    let labels: Vec<String> = genres.iter().map(|g| g.label().to_string()).collect();

    chart("top_genres")
        .x_axis_label("Titles")
        .y_axis_formatter(index_labels(labels))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

// ---------------------------------------------------------------------------
// 4. Bar – titles by country
// ---------------------------------------------------------------------------

fn titles_by_country(ui: &mut Ui, state: &AppState) {
    ui.strong("Titles by Country");

    let countries: Vec<_> = state.summary.count_by_country.keys().copied().collect();
    let bars: Vec<Bar> = countries
        .iter()
        .enumerate()
        .map(|(i, &country)| {
            let count = state.summary.count_by_country[&country];
            Bar::new(i as f64, count as f64)
                .width(0.6)
                .fill(state.country_colors.color_for(country))
                .name(country.label())
        })
        .collect();

    let labels: Vec<String> = countries.iter().map(|c| c.label().to_string()).collect();

    chart("titles_by_country")
        .y_axis_label("Titles")
        .x_axis_formatter(index_labels(labels))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// 5. Scatter – duration vs year, colored by kind
// ---------------------------------------------------------------------------

fn duration_scatter(ui: &mut Ui, state: &AppState) {
    ui.strong("Duration Trend Over Years");

    chart("duration_scatter")
        .x_axis_label("Release year")
        .y_axis_label("Duration (min)")
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for kind in Kind::ALL {
                let points: PlotPoints = state
                    .summary
                    .scatter
                    .iter()
                    .filter(|&&(_, _, k)| k == kind)
                    .map(|&(year, duration, _)| [year as f64, duration as f64])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .radius(2.5)
                        .color(kind_color(kind))
                        .name(kind.label()),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// 6. Box plot – duration spread per kind
// ---------------------------------------------------------------------------

fn duration_spread(ui: &mut Ui, state: &AppState) {
    ui.strong("Duration Spread by Type");

    let mut elems = Vec::new();
    for (i, kind) in Kind::ALL.iter().enumerate() {
        let Some(durations) = state.summary.durations_by_kind.get(kind) else {
            continue;
        };
        let color = kind_color(*kind);
        elems.push(
            BoxElem::new(i as f64, box_spread(durations))
                .name(kind.label())
                .box_width(0.5)
                .fill(color.gamma_multiply(0.4))
                .stroke(Stroke::new(1.5, color)),
        );
    }

    let labels: Vec<String> = Kind::ALL.iter().map(|k| k.label().to_string()).collect();

    chart("duration_spread")
        .y_axis_label("Duration (min)")
        .x_axis_formatter(index_labels(labels))
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(elems));
        });
}

/// Five-number summary of a non-empty duration set.
fn box_spread(durations: &[u32]) -> BoxSpread {
    let mut sorted: Vec<f64> = durations.iter().map(|&d| f64::from(d)).collect();
    sorted.sort_by(f64::total_cmp);

    BoxSpread::new(
        sorted[0],
        quantile(&sorted, 0.25),
        quantile(&sorted, 0.5),
        quantile(&sorted, 0.75),
        sorted[sorted.len() - 1],
    )
}

/// Linear-interpolated quantile over an ascending-sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

// ---------------------------------------------------------------------------
// 7. Line – titles-per-year trend
// ---------------------------------------------------------------------------

fn titles_trend(ui: &mut Ui, state: &AppState) {
    ui.strong("Trend of Titles Over Time");

    let points: PlotPoints = state
        .summary
        .count_by_year
        .iter()
        .map(|(&year, &count)| [year as f64, count as f64])
        .collect();

    chart("titles_trend")
        .x_axis_label("Release year")
        .y_axis_label("Titles")
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).color(ACCENT).width(2.0).name("Titles"));
        });
}

// ---------------------------------------------------------------------------
// 8. Heatmap – genre × year
// ---------------------------------------------------------------------------

fn genre_year_heatmap(ui: &mut Ui, state: &AppState) {
    ui.strong("Genre vs Year");

    let matrix = &state.summary.matrix;
    let max = matrix.max_count().max(1) as f32;
    let labels: Vec<String> = matrix.genres.iter().map(|g| g.label().to_string()).collect();

    chart("genre_year_heatmap")
        .x_axis_label("Release year")
        .show_grid(false)
        .y_axis_formatter(index_labels(labels))
        .show(ui, |plot_ui| {
            for (row, counts) in matrix.counts.iter().enumerate() {
                for (col, &count) in counts.iter().enumerate() {
                    let x = matrix.years[col] as f64;
                    let y = row as f64;
                    let color = heat_color(count as f32 / max);

                    plot_ui.polygon(
                        cell(x, y)
                            .fill_color(color)
                            .stroke(Stroke::NONE)
                            .name(format!("{}, {}: {count}", matrix.genres[row], matrix.years[col])),
                    );
                    if count > 0 {
                        plot_ui.text(
                            Text::new(PlotPoint::new(x, y), count.to_string())
                                .color(Color32::WHITE),
                        );
                    }
                }
            }
        });
}

/// A unit heatmap cell centered on `(x, y)`.
fn cell(x: f64, y: f64) -> Polygon<'static> {
    let points = vec![
        [x - 0.5, y - 0.5],
        [x + 0.5, y - 0.5],
        [x + 0.5, y + 0.5],
        [x - 0.5, y + 0.5],
    ];
    Polygon::new(PlotPoints::from(points))
}
