/// Linear interpolation of y at x on the segment (x0, y0) - (x1, y1).
/// The end points are returned exactly and a zero-width segment returns y0.
pub fn interpolate_linear(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    if x == x0 {
        return y0;
    }
    if x == x1 {
        return y1;
    }
    let dx = x1 - x0;
    if dx.abs() <= std::f64::EPSILON {
        return y0;
    }
    let ratio = (x - x0) / dx;
    y0 + ratio * (y1 - y0)
}

/// Snap a value to the nearest multiple of `1 / steps_per_unit`.
/// Halfway values go to the even multiple.
pub fn round_to_step(value: f64, steps_per_unit: f64) -> f64 {
    (value * steps_per_unit).round_ties_even() / steps_per_unit
}
