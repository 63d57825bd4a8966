//! Piecewise-linear interpolation with clamped ends, plus the easing curve
//! used by timed transitions.

/// Map `input` through the curve defined by `breakpoints` → `outputs`.
///
/// `breakpoints` must be non-decreasing and the same length as `outputs`.
/// Inputs outside the breakpoint range hold the nearest boundary output;
/// nothing is extrapolated.
pub fn interpolate(input: f64, breakpoints: &[f64], outputs: &[f64]) -> f64 {
    debug_assert_eq!(breakpoints.len(), outputs.len());
    let n = breakpoints.len().min(outputs.len());
    if n == 0 {
        return 0.0;
    }
    if input <= breakpoints[0] {
        return outputs[0];
    }
    if input >= breakpoints[n - 1] {
        return outputs[n - 1];
    }

    // First segment whose right edge is at or past the input.
    let seg = (1..n).find(|&i| input <= breakpoints[i]).unwrap_or(n - 1);
    let (x0, x1) = (breakpoints[seg - 1], breakpoints[seg]);
    let (y0, y1) = (outputs[seg - 1], outputs[seg]);
    let span = x1 - x0;
    if span <= 0.0 {
        return y1;
    }
    y0 + (y1 - y0) * ((input - x0) / span)
}

/// Quadratic ease-in-out on `t ∈ [0, 1]`.
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
