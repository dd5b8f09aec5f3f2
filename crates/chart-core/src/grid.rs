// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers: evenly spaced values, "nice" tick steps and tick labels.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round `span / target` to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span.abs() / target.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions on multiples of a nice step, all inside `[min, max]`.
/// Returns roughly `target` ticks; empty for an empty or non-finite range.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Vec::new();
    }
    let step = nice_step(max - min, target);
    let first = (min / step - 1e-9).ceil();
    let last = (max / step + 1e-9).floor();
    if last < first {
        return Vec::new();
    }
    let n = (last - first).round() as usize + 1;
    let ticks = if n == 1 { vec![first * step] } else { linspace(first * step, last * step, n) };
    // snap values like 1e-17 back to zero so the label reads "0"
    ticks
        .into_iter()
        .map(|v| if v.abs() < step * 1e-9 { 0.0 } else { v })
        .collect()
}

/// Fewest decimals that print every multiple of `step` exactly.
pub fn tick_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    for d in 0..12 {
        let scaled = step * 10f64.powi(d as i32);
        if (scaled - scaled.round()).abs() < 1e-6 * scaled.abs().max(1.0) {
            return d;
        }
    }
    12
}

pub fn format_tick(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Labels for a tick sequence produced by [`nice_ticks`].
pub fn tick_labels(ticks: &[f64]) -> Vec<String> {
    let decimals = match ticks {
        [a, b, ..] => tick_decimals(b - a),
        [only] => tick_decimals(only.abs()).min(6),
        [] => 0,
    };
    ticks.iter().map(|&v| format_tick(v, decimals)).collect()
}
