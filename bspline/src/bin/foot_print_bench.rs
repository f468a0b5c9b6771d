use bspline::{OpenCubicBSpline, Vec2};
use std::time::Instant;

fn build_wave(segments: usize, interval: f64) -> Option<OpenCubicBSpline> {
    let controls: Vec<Vec2> = (0..segments + 3)
        .map(|i| Vec2::new(i as f64 * 4.0, if i % 2 == 0 { 0.0 } else { 6.0 }))
        .collect();
    OpenCubicBSpline::from_controls(controls, interval).ok()
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len()-1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut segments = 50usize;
    let mut queries = 2000usize;
    let mut interval = 0.001f64;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--segments=") { if let Ok(v)=val.parse() { segments=v; } }
        else if let Some(val)=a.strip_prefix("--queries=") { if let Ok(v)=val.parse() { queries=v; } }
        else if let Some(val)=a.strip_prefix("--interval=") { if let Ok(v)=val.parse() { interval=v; } }
        else if let Some(val)=a.strip_prefix("--assert-ms=") { if let Ok(v)=val.parse() { assert_ms=Some(v); } }
    }

    let curve = match build_wave(segments.max(1), interval) {
        Some(c) => c,
        None => { eprintln!("invalid curve setup: segments={} interval={}", segments, interval); std::process::exit(2); }
    };
    let width = curve.controls().len() as f64 * 4.0;

    // Query points sweep the curve's bounding box
    let mut times_ms: Vec<f64> = Vec::with_capacity(queries);
    let start_all = Instant::now();
    let mut residual_sum = 0.0;
    for k in 0..queries {
        let x = (k % 97) as f64 / 97.0 * width;
        let y = ((k / 97) % 13) as f64 * 0.5 - 0.5;
        let t0 = Instant::now();
        if let Ok((_, d)) = curve.find_foot_print(Vec2::new(x, y)) { residual_sum += d; }
        let dt = t0.elapsed().as_secs_f64() * 1000.0;
        times_ms.push(dt);
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    times_ms.sort_by(|a,b| a.total_cmp(b));
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    let p99 = percentile(&times_ms, 0.99);
    let mean_res = if queries > 0 { residual_sum / queries as f64 } else { 0.0 };
    println!("segments={} samples={} queries={} mean_residual={:.4} total_ms={:.3} median_ms={:.4} p90_ms={:.4} p99_ms={:.4}", curve.segment_count(), curve.samples().len(), queries, mean_res, dur_all, med, p90, p99);
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}
