// File: crates/demo/src/main.rs
// Summary: Demo loads (or synthesizes) a category/year/value CSV, renders the
// animated chart pipeline to PNG/SVG frames, and exercises the render worker.

use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use kinetic_core::bridge::{ChartCanvas, RenderWorker, WorkerMessage};
use kinetic_core::chart::{AnimatedChart, ChartOptions};
use kinetic_core::interp::FrameInterpolator;
use kinetic_core::render::{CanvasRenderer, RenderOptions};
use kinetic_core::series::{Sample, Series};
use kinetic_core::snapshot::SnapshotKind;
use kinetic_core::svg;
use kinetic_core::timer::run_default;
use kinetic_core::types::DURATION_MS;
use kinetic_core::Snapshot;

fn main() -> Result<()> {
    let data = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            let data = load_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Loaded {} categories from {}", data.len(), path.display());
            data
        }
        None => {
            let data = synthetic_dataset();
            println!("No input file given; using a synthetic {}-category dataset", data.len());
            data
        }
    };

    if data.is_empty() {
        anyhow::bail!("no series loaded; check headers/delimiter");
    }

    let opts = ChartOptions::default();
    let mut chart = AnimatedChart::new(data.clone(), opts);
    let render_opts = RenderOptions::default();
    let renderer = CanvasRenderer::new(render_opts.clone());
    let out_dir = PathBuf::from("target/out");

    // 1) Full line chart, PNG and SVG.
    let (_, lines) = chart.transition_lines();
    let scales = *chart.scales();
    let out_png = out_dir.join("lines.png");
    renderer.render_to_png(Some(&scales), Some(&lines), None, &out_png)?;
    println!("Wrote {}", out_png.display());
    let out_svg = out_dir.join("lines.svg");
    svg::write_svg(Some(&lines), None, &render_opts, &out_svg)?;
    println!("Wrote {}", out_svg.display());

    // 2) Simulated hover: pick the sample nearest to the surface center and
    //    animate the cross-section markers in, writing each frame.
    let (cx, cy) = (opts.width as f32 / 2.0, opts.height as f32 / 2.0);
    let picked = chart.pick(cx, cy).context("empty chart")?;
    println!(
        "Hover at ({cx:.0}, {cy:.0}) picks {} / {} = {}",
        picked.category, picked.year, picked.value
    );
    let year = picked.year;

    let (previous, next) = chart.transition_points(year);
    let interp = FrameInterpolator::new(previous, next.clone());
    let mut frame_no = 0usize;
    run_default(DURATION_MS, |frame| {
        let blended = interp.at(frame.progress);
        let path = out_dir.join(format!("hover_{frame_no:02}.png"));
        match renderer.render_to_png(Some(&scales), Some(&lines), Some(&blended), &path) {
            Ok(()) => println!("Wrote {} (t={:.2})", path.display(), frame.progress),
            Err(e) => eprintln!("frame render failed: {e}"),
        }
        frame_no += 1;
        ControlFlow::Continue(())
    });

    // 3) Click-to-isolate: restrict to the hovered category and re-render.
    chart.toggle_isolated(cx, cy);
    if let Some(cat) = chart.isolated() {
        println!("Isolated category: {cat}");
    }
    let (_, isolated_lines) = chart.transition_lines();
    let out_iso = out_dir.join("isolated.png");
    renderer.render_to_png(Some(chart.scales()), Some(&isolated_lines), None, &out_iso)?;
    println!("Wrote {}", out_iso.display());

    // 4) Off-main-thread rendering: hand the canvas to a worker and relay the
    //    same transitions as messages.
    let worker = RenderWorker::spawn(data, render_opts, DURATION_MS);
    let canvas = ChartCanvas::new(opts.width, opts.height)?;
    worker.send(WorkerMessage::Attach(canvas.transfer_control()));
    worker.send(WorkerMessage::Lines {
        previous: Snapshot::empty(SnapshotKind::Series),
        next: lines,
    });
    worker.send(WorkerMessage::Pointer { x: cx, y: cy });
    std::thread::sleep(Duration::from_millis(DURATION_MS * 4));
    println!("Render worker painted {} frames", worker.frames_drawn());
    drop(worker);

    Ok(())
}

/// Load `category,year,value` rows (header required, any order). Rows with an
/// empty value column become missing samples and are filtered before scaling.
fn load_csv(path: &Path) -> Result<Vec<Series>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {headers:?}");
    let col = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("missing '{name}' column"))
    };
    let c_cat = col("category")?;
    let c_year = col("year")?;
    let c_value = col("value")?;

    // Group rows by category, keeping first-appearance order within a series.
    let mut order: Vec<String> = Vec::new();
    let mut by_cat: std::collections::HashMap<String, Vec<Sample>> =
        std::collections::HashMap::new();
    for record in rdr.records() {
        let record = record?;
        let cat = record.get(c_cat).unwrap_or("").trim().to_string();
        if cat.is_empty() {
            continue;
        }
        let year: i32 = record
            .get(c_year)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| format!("bad year in row {record:?}"))?;
        let value = record.get(c_value).unwrap_or("").trim();
        let sample = if value.is_empty() {
            Sample::missing(year)
        } else {
            Sample::new(year, value.parse().with_context(|| format!("bad value in row {record:?}"))?)
        };
        if !by_cat.contains_key(&cat) {
            order.push(cat.clone());
        }
        by_cat.entry(cat).or_default().push(sample);
    }

    Ok(order
        .into_iter()
        .map(|cat| {
            let samples = by_cat.remove(&cat).unwrap_or_default();
            Series::new(cat, samples)
        })
        .collect())
}

/// Deterministic stand-in for the hobby-popularity survey: smooth waves with
/// per-category drift over 1960-2019.
fn synthetic_dataset() -> Vec<Series> {
    let hobbies = [
        "archery", "baking", "chess", "gardening", "knitting", "origami", "sailing", "woodwork",
    ];
    hobbies
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let pairs = (1960..=2019)
                .map(|year| {
                    let t = (year - 1960) as f64;
                    let wave = ((t * 0.15) + i as f64).sin() * 8.0;
                    let drift = t * (0.2 + i as f64 * 0.05);
                    (year, 20.0 + i as f64 * 10.0 + wave + drift)
                })
                .collect();
            Series::from_pairs(*name, pairs)
        })
        .collect()
}
