pub mod taps;

use std::fmt;
use std::rc::Rc;

use tracing::{info, warn};

use crate::numerics::{self, gaussian::Gaussian, sampled::SampledFunction};

#[derive(Clone, Copy, PartialEq, Debug)]
/// Parameters of an asymmetric kernel and the grid it is sampled over.
pub struct KernelConfig {
    /// Peak height of the Gaussian component.
    pub amplitude: f64,
    /// Width of the Gaussian component. Must be nonzero.
    pub σ: f64,
    /// Weight of the derivative component.
    pub η: f64,
    pub lower: f64,
    pub upper: f64,
    /// Number of grid points, inclusive of both bounds.
    pub samples: usize,
}

#[derive(Clone, Copy, PartialEq, Debug)]
/// A Gaussian skewed by blending in its own first derivative: `K(x) = G(x) + η G'(x)`.
pub struct AsymmetricKernel {
    pub gaussian: Gaussian,
    pub η: f64,
}

#[derive(Clone, PartialEq, Debug)]
/// The Gaussian, its derivative, and the combined kernel, all sampled over one shared grid.
pub struct KernelProfile {
    pub gaussian: SampledFunction,
    pub derivative: SampledFunction,
    pub kernel: SampledFunction,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            amplitude: 5.0,
            σ: 2.0,
            η: 1.4,
            lower: -10.,
            upper: 10.,
            samples: 1000,
        }
    }
}

impl fmt::Display for KernelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A = {:.2}, σ = {:.2}, η = {:.2}, x ∈ [{}, {}] ({} samples)",
            self.amplitude, self.σ, self.η, self.lower, self.upper, self.samples
        )
    }
}

impl KernelConfig {
    #[must_use]
    pub fn kernel(&self) -> AsymmetricKernel {
        AsymmetricKernel {
            gaussian: Gaussian::new(self.amplitude, self.σ),
            η: self.η,
        }
    }

    #[must_use]
    pub fn grid(&self) -> Rc<[f64]> {
        numerics::linspace(self.lower, self.upper, self.samples).collect()
    }

    /// Report, without correcting, parameters for which the sampled profile is degenerate.
    fn warn_on_degenerate(&self) {
        if self.σ == 0. {
            warn!(sigma = self.σ, "zero kernel width; sampled values will be NaN");
        }
        if self.samples < 2 {
            warn!(samples = self.samples, "grid has fewer than two points");
        }
    }
}

impl AsymmetricKernel {
    #[must_use]
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.gaussian.evaluate(x) + self.η * self.gaussian.evaluate_derivative(x)
    }
}

impl KernelProfile {
    #[must_use]
    /// Sample all three components over the grid described by `config`.
    ///
    /// A zero `σ` is passed through as-is and yields NaN samples; see [`Gaussian::new`].
    pub fn evaluate(config: &KernelConfig) -> Self {
        info!(%config, "evaluating asymmetric kernel");
        config.warn_on_degenerate();

        let grid = config.grid();
        let kernel = config.kernel();
        let gaussian = kernel.gaussian;
        Self {
            gaussian: SampledFunction::from_fn(&grid, |x| gaussian.evaluate(x)),
            derivative: SampledFunction::from_fn(&grid, |x| gaussian.evaluate_derivative(x)),
            kernel: SampledFunction::from_fn(&grid, |x| kernel.evaluate(x)),
        }
    }

    #[must_use]
    pub fn grid(&self) -> &[f64] {
        self.kernel.domain()
    }
}
