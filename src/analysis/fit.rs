//! Smooth presentation curves fitted over discrete spectra.
//!
//! The fit is a display aid layered over the stem plot; the spectrum data
//! itself is never resampled.

/// Fewest knots for which any fit curve is drawn.
pub const MIN_FIT_BINS: usize = 4;
/// Knot count at which the fit switches from quadratic to cubic spline.
pub const SPLINE_FIT_BINS: usize = 10;
/// Densification factor of the fitted curve relative to the knot count.
const FIT_DENSITY: usize = 5;

/// Densified smooth curve through the `(x, y)` knots.
///
/// Natural cubic spline for [`SPLINE_FIT_BINS`] knots or more, piecewise
/// quadratic below that, `None` below [`MIN_FIT_BINS`]. Knots must be
/// strictly increasing in `x`.
pub fn fit_curve(xs: &[f64], ys: &[f64]) -> Option<Vec<[f64; 2]>> {
    let n = xs.len().min(ys.len());
    if n < MIN_FIT_BINS {
        return None;
    }
    let xs = &xs[..n];
    let ys = &ys[..n];

    let dense = n * FIT_DENSITY;
    let start = xs[0];
    let step = (xs[n - 1] - start) / (dense - 1) as f64;

    let curve = if n >= SPLINE_FIT_BINS {
        let second = spline_second_derivatives(xs, ys);
        (0..dense)
            .map(|i| {
                let x = start + step * i as f64;
                [x, eval_spline(xs, ys, &second, x)]
            })
            .collect()
    } else {
        (0..dense)
            .map(|i| {
                let x = start + step * i as f64;
                [x, eval_quadratic(xs, ys, x)]
            })
            .collect()
    };
    Some(curve)
}

/// Second derivatives of the natural cubic spline through the knots.
///
/// Solves the interior tridiagonal system with the Thomas algorithm; both
/// boundary values stay zero.
fn spline_second_derivatives(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut second = vec![0.0; n];
    if n < 3 {
        return second;
    }

    let mut diag = vec![0.0; n];
    let mut upper = vec![0.0; n];
    let mut rhs = vec![0.0; n];
    for i in 1..n - 1 {
        let h_prev = xs[i] - xs[i - 1];
        let h_next = xs[i + 1] - xs[i];
        diag[i] = 2.0 * (h_prev + h_next);
        upper[i] = h_next;
        rhs[i] = 6.0 * ((ys[i + 1] - ys[i]) / h_next - (ys[i] - ys[i - 1]) / h_prev);
    }
    for i in 2..n - 1 {
        let lower = xs[i] - xs[i - 1];
        let factor = lower / diag[i - 1];
        diag[i] -= factor * upper[i - 1];
        rhs[i] -= factor * rhs[i - 1];
    }
    for i in (1..n - 1).rev() {
        second[i] = (rhs[i] - upper[i] * second[i + 1]) / diag[i];
    }
    second
}

fn eval_spline(xs: &[f64], ys: &[f64], second: &[f64], x: f64) -> f64 {
    let i = segment_index(xs, x);
    let h = xs[i + 1] - xs[i];
    let a = (xs[i + 1] - x) / h;
    let b = (x - xs[i]) / h;
    a * ys[i]
        + b * ys[i + 1]
        + ((a * a * a - a) * second[i] + (b * b * b - b) * second[i + 1]) * h * h / 6.0
}

/// Lagrange quadratic through a three-knot window around the active segment.
fn eval_quadratic(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let segment = segment_index(xs, x);
    let start = segment.saturating_sub(1).min(xs.len() - 3);
    let (x0, x1, x2) = (xs[start], xs[start + 1], xs[start + 2]);
    let (y0, y1, y2) = (ys[start], ys[start + 1], ys[start + 2]);
    let l0 = (x - x1) * (x - x2) / ((x0 - x1) * (x0 - x2));
    let l1 = (x - x0) * (x - x2) / ((x1 - x0) * (x1 - x2));
    let l2 = (x - x0) * (x - x1) / ((x2 - x0) * (x2 - x1));
    y0 * l0 + y1 * l1 + y2 * l2
}

/// Index of the knot segment containing `x`, clamped to valid segments.
fn segment_index(xs: &[f64], x: f64) -> usize {
    let last_segment = xs.len() - 2;
    match xs.binary_search_by(|probe| probe.total_cmp(&x)) {
        Ok(i) => i.min(last_segment),
        Err(i) => i.saturating_sub(1).min(last_segment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_few_knots_produce_no_curve() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 1.0, 0.0];
        assert!(fit_curve(&xs, &ys).is_none());
        assert!(fit_curve(&[], &[]).is_none());
    }

    #[test]
    fn curve_is_five_times_denser_than_the_knots() {
        let xs: Vec<f64> = (0..12).map(|i| i as f64).collect();
        let ys = vec![1.0; 12];
        let curve = fit_curve(&xs, &ys).unwrap();
        assert_eq!(curve.len(), 60);
        assert_eq!(curve[0][0], 0.0);
        assert!((curve[59][0] - 11.0).abs() < 1e-12);
    }

    #[test]
    fn quadratic_fit_reproduces_a_parabola() {
        // Five knots select the quadratic branch; y = x^2 is reproduced
        // exactly everywhere, not just at the knots.
        let xs: Vec<f64> = (0..5).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();
        let curve = fit_curve(&xs, &ys).unwrap();
        for [x, y] in curve {
            assert!((y - x * x).abs() < 1e-9, "mismatch at x={x}");
        }
    }

    #[test]
    fn spline_fit_reproduces_a_line() {
        let xs: Vec<f64> = (0..15).map(|i| i as f64 * 0.5).collect();
        let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x + 1.0).collect();
        let curve = fit_curve(&xs, &ys).unwrap();
        for [x, y] in curve {
            assert!((y - (2.0 * x + 1.0)).abs() < 1e-9, "mismatch at x={x}");
        }
    }

    #[test]
    fn spline_fit_passes_through_the_knots() {
        let xs: Vec<f64> = (0..11).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs.iter().map(|x| (x * 0.7).sin()).collect();
        let second = spline_second_derivatives(&xs, &ys);
        for (i, &x) in xs.iter().enumerate() {
            let y = eval_spline(&xs, &ys, &second, x);
            assert!((y - ys[i]).abs() < 1e-9, "mismatch at knot {i}");
        }
    }
}
