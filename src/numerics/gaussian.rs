#[derive(Clone, Copy, PartialEq, Debug)]
/// An unnormalized Gaussian centered on the origin, peaking at `amplitude`.
pub struct Gaussian {
    pub amplitude: f64,
    pub σ: f64,
}

impl Gaussian {
    /// # Preconditions
    /// `σ` must be nonzero. This is not checked: a zero width divides by zero, so
    /// [`Self::evaluate`] is NaN at the origin and [`Self::evaluate_derivative`] is NaN
    /// everywhere.
    #[must_use]
    pub fn new(amplitude: f64, σ: f64) -> Self {
        Self { amplitude, σ }
    }

    #[must_use]
    #[inline]
    /// `A exp(-x² / 2σ²)`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.amplitude * (-x * x / (2. * self.σ * self.σ)).exp()
    }

    #[must_use]
    #[inline]
    /// First derivative with respect to `x`, _i.e._ `-(x / σ²) G(x)`.
    pub fn evaluate_derivative(&self, x: f64) -> f64 {
        -(x / (self.σ * self.σ)) * self.evaluate(x)
    }
}

#[cfg(test)]
mod tests {
    use super::Gaussian;
    use crate::numerics;

    const G: Gaussian = Gaussian {
        amplitude: 5.,
        σ: 2.,
    };

    #[test]
    fn peak_and_one_sigma() {
        approx::assert_abs_diff_eq!(G.evaluate(0.), 5.);
        approx::assert_abs_diff_eq!(G.evaluate_derivative(0.), 0.);
        approx::assert_abs_diff_eq!(G.evaluate(2.), 3.0327, epsilon = 1e-4);
        approx::assert_abs_diff_eq!(G.evaluate_derivative(2.), -1.5163, epsilon = 1e-4);
    }

    #[test]
    fn symmetry() {
        for x in numerics::linspace(-10., 10., 1000) {
            assert!(G.evaluate(x) >= 0.);
            approx::assert_relative_eq!(G.evaluate(x), G.evaluate(-x));
            approx::assert_relative_eq!(G.evaluate_derivative(x), -G.evaluate_derivative(-x));
        }
    }

    #[test]
    fn derivative_matches_finite_difference() {
        const H: f64 = 1e-6;
        for x in [-3.5, -1., 0.25, 2., 4.] {
            let central = (G.evaluate(x + H) - G.evaluate(x - H)) / (2. * H);
            approx::assert_abs_diff_eq!(G.evaluate_derivative(x), central, epsilon = 1e-6);
        }
    }

    #[test]
    fn zero_width_is_undefined() {
        let g = Gaussian::new(5., 0.);
        assert!(g.evaluate(0.).is_nan());
        assert!(g.evaluate_derivative(0.).is_nan());
        for x in [-2., 0.5, 7.] {
            approx::assert_abs_diff_eq!(g.evaluate(x), 0.);
            assert!(g.evaluate_derivative(x).is_nan());
        }
    }
}
