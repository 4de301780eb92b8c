//! Spline primitives used by the smoothing engine.

/// Natural cubic spline over strictly increasing abscissae.
#[derive(Debug, Clone, PartialEq)]
pub struct Spline1D {
    xs: Vec<f64>,
    ys: Vec<f64>,
    // Second derivative at each knot, natural boundary (zero at the ends).
    second: Vec<f64>,
}

impl Spline1D {
    /// Fits a natural cubic spline through `(xs[i], ys[i])`.
    ///
    /// Returns `None` when the geometry is unusable: fewer than two knots,
    /// non-finite values, or abscissae that are not strictly increasing.
    /// Callers treat `None` as "leave the trace unsmoothed".
    #[must_use]
    pub fn fit(xs: &[f64], ys: &[f64]) -> Option<Self> {
        let n = xs.len();
        if n < 2 || ys.len() != n {
            return None;
        }
        for i in 0..n {
            if !xs[i].is_finite() || !ys[i].is_finite() {
                return None;
            }
            if i > 0 && xs[i] <= xs[i - 1] {
                return None;
            }
        }

        let mut second = vec![0.0_f64; n];
        if n > 2 {
            // Tridiagonal solve for interior second derivatives.
            let mut scratch = vec![0.0_f64; n];
            for i in 1..n - 1 {
                let h_prev = xs[i] - xs[i - 1];
                let h_next = xs[i + 1] - xs[i];
                let sig = h_prev / (xs[i + 1] - xs[i - 1]);
                let denom = sig * second[i - 1] + 2.0;
                if denom == 0.0 || !denom.is_finite() {
                    return None;
                }
                second[i] = (sig - 1.0) / denom;
                let slope_next = (ys[i + 1] - ys[i]) / h_next;
                let slope_prev = (ys[i] - ys[i - 1]) / h_prev;
                scratch[i] = (6.0 * (slope_next - slope_prev) / (xs[i + 1] - xs[i - 1])
                    - sig * scratch[i - 1])
                    / denom;
            }
            second[n - 1] = 0.0;
            for i in (1..n - 1).rev() {
                second[i] = second[i] * second[i + 1] + scratch[i];
            }
            second[0] = 0.0;
            if second.iter().any(|v| !v.is_finite()) {
                return None;
            }
        }

        Some(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            second,
        })
    }

    /// Evaluates the spline at `x`, clamped to the knot range.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[n - 1] {
            return self.ys[n - 1];
        }

        let hi = self.xs.partition_point(|&knot| knot < x).min(n - 1);
        let lo = hi - 1;
        let h = self.xs[hi] - self.xs[lo];
        let a = (self.xs[hi] - x) / h;
        let b = (x - self.xs[lo]) / h;
        a * self.ys[lo]
            + b * self.ys[hi]
            + ((a * a * a - a) * self.second[lo] + (b * b * b - b) * self.second[hi]) * (h * h)
                / 6.0
    }

    #[must_use]
    pub fn knot_count(&self) -> usize {
        self.xs.len()
    }
}

/// Uniform Catmull-Rom basis through `p1`..`p2` with neighbors `p0`, `p3`,
/// evaluated at local parameter `t` in `0..=1`.
#[must_use]
pub fn catmull_rom(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (p2 - p0) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (3.0 * p1 - p0 - 3.0 * p2 + p3) * t3)
}
