use crate::mutations::{Mutation, MutationReport};
use crate::seq::Seq;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// encode the template SVG file at compile time as a string literal
const TEMPLATE_SVG: &str = include_str!("plot_template.svg");

const TITLE: &str = "Real-time mutation monitoring";

const MIN_WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 380.0;
const PLOT_LEFT: f64 = 110.0;
const RIGHT_MARGIN: f64 = 30.0;
const POINT_SPACING: f64 = 12.0;
const MAX_TICKS: usize = 25;

const PLOT_TOP: f64 = 50.0;
const PLOT_BOTTOM: f64 = 320.0;
const REFERENCE_Y: f64 = 120.0;
const SAMPLE_Y: f64 = 260.0;

#[derive(Serialize)]
struct Point {
    x: f64,
    symbol: char,
}

#[derive(Serialize)]
struct Tick {
    x: f64,
    pos: usize,
}

#[derive(Serialize)]
struct MutationMark {
    x: f64,
    reference: char,
    sample: char,
}

#[derive(Serialize)]
struct PlotContext {
    title: &'static str,
    width: f64,
    height: f64,
    title_x: f64,
    plot_left: f64,
    plot_right: f64,
    plot_top: f64,
    plot_bottom: f64,
    tick_label_y: f64,
    x_label_y: f64,
    row_label_x: f64,
    reference_y: f64,
    sample_y: f64,
    annotation_y: f64,
    legend_x: f64,
    legend_y: f64,
    legend_marker_x: f64,
    legend_text_x: f64,
    legend_row1_y: f64,
    legend_row2_y: f64,
    ticks: Vec<Tick>,
    reference: Vec<Point>,
    sample: Vec<Point>,
    mutations: Vec<MutationMark>,
}

impl PlotContext {
    fn new(reference: &Seq, sample: &Seq, report: &MutationReport) -> Self {
        let n = reference.len().max(sample.len()).max(1);

        let width = MIN_WIDTH.max(PLOT_LEFT + RIGHT_MARGIN + POINT_SPACING * n as f64);
        let plot_right = width - RIGHT_MARGIN;
        let step = (plot_right - PLOT_LEFT) / n as f64;
        let x = |pos: usize| PLOT_LEFT + step * (pos as f64 + 0.5);

        let points = |s: &Seq| {
            s.iter()
                .enumerate()
                .map(|(pos, base)| Point {
                    x: x(pos),
                    symbol: base.as_char(),
                })
                .collect::<Vec<_>>()
        };

        let tick_every = n.div_ceil(MAX_TICKS);
        let ticks = (0..n)
            .step_by(tick_every)
            .map(|pos| Tick { x: x(pos), pos })
            .collect();

        // a mutation is only ever reported inside the overlap of both sequences
        let mutations = report
            .mutations
            .iter()
            .filter(|m| m.pos < reference.len() && m.pos < sample.len())
            .map(|&Mutation { pos, reference, sample }| MutationMark {
                x: x(pos),
                reference,
                sample,
            })
            .collect();

        let legend_x = plot_right - 106.0;
        let legend_y = PLOT_TOP + 6.0;

        PlotContext {
            title: TITLE,
            width,
            height: HEIGHT,
            title_x: width / 2.0,
            plot_left: PLOT_LEFT,
            plot_right,
            plot_top: PLOT_TOP,
            plot_bottom: PLOT_BOTTOM,
            tick_label_y: PLOT_BOTTOM + 16.0,
            x_label_y: PLOT_BOTTOM + 42.0,
            row_label_x: PLOT_LEFT - 8.0,
            reference_y: REFERENCE_Y,
            sample_y: SAMPLE_Y,
            annotation_y: (REFERENCE_Y + SAMPLE_Y) / 2.0,
            legend_x,
            legend_y,
            legend_marker_x: legend_x + 14.0,
            legend_text_x: legend_x + 26.0,
            legend_row1_y: legend_y + 13.0,
            legend_row2_y: legend_y + 29.0,
            ticks,
            reference: points(reference),
            sample: points(sample),
            mutations,
        }
    }
}

/// Renders the comparison between `reference` and `sample` as an SVG document.
///
/// The reference is drawn as the upper row of points and the sample as the lower row. Every
/// mutation is joined between the rows by a dashed red line labelled with the substitution.
pub fn render_svg(
    writer: &mut impl Write,
    reference: &Seq,
    sample: &Seq,
    report: &MutationReport,
) -> Result<()> {
    let context = PlotContext::new(reference, sample, report);
    let data = serde_json::to_value(&context).context("Could not serialize plot")?;

    let reg = handlebars::Handlebars::new();
    reg.render_template_to_write(TEMPLATE_SVG, &data, writer)?;

    Ok(())
}

/// Renders the plot to `output`, replacing whatever was there.
pub fn save_svg(
    output: &Path,
    reference: &Seq,
    sample: &Seq,
    report: &MutationReport,
) -> Result<()> {
    let file = File::create(output)
        .with_context(|| format!("Unable to create image file {}", output.display()))?;
    let mut writer = BufWriter::new(file);

    render_svg(&mut writer, reference, sample, report)?;
    writer.flush()?;

    debug!("Wrote plot to {}", output.display());
    Ok(())
}

/// Draws a terminal-friendly version of the plot: the reference, a marker row with `|` under
/// each mutation, and the sample.
///
/// ```text
/// Reference  A T G C
///                  |
/// Sample     A T G G
/// ```
pub fn render_track(reference: &Seq, sample: &Seq, report: &MutationReport) -> String {
    let row = |s: &Seq| {
        s.iter()
            .map(|n| n.as_char().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };

    let width = reference.len().max(sample.len());
    let mut markers = vec![' '; width];
    for m in report.mutations.iter() {
        markers[m.pos] = '|';
    }
    let markers = markers
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{:<11}{}\n{:<11}{}\n{:<11}{}",
        "Reference",
        row(reference),
        "",
        markers.trim_end(),
        "Sample",
        row(sample)
    )
    .lines()
    .map(str::trim_end)
    .collect::<Vec<_>>()
    .join("\n")
}
