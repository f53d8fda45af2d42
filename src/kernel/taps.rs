use std::ops::RangeInclusive;

use crate::kernel::AsymmetricKernel;
use crate::numerics::gaussian::Gaussian;

#[derive(Clone, PartialEq, Debug)]
/// An [`AsymmetricKernel`] sampled at integer offsets `-radius..=radius`, suitable for use as a
/// discrete convolution filter.
pub struct KernelTaps {
    pub radius: usize,
    pub gaussian: Vec<f64>,
    pub derivative: Vec<f64>,
    pub kernel: Vec<f64>,
}

impl KernelTaps {
    /// Number of standard deviations covered on either side of the center tap.
    pub const DEFAULT_CUTOFF_FACTOR: f64 = 5.;
    /// Upper bound on the radius, reached when `σ` or the cutoff is huge or infinite.
    pub const MAX_RADIUS: usize = 1 << 16;

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    /// Sample `kernel` out to `cutoff_factor` standard deviations.
    ///
    /// If `normalized`, the Gaussian taps are rescaled to sum to the amplitude, and the derivative
    /// taps are taken from the rescaled Gaussian. Otherwise both are sampled directly.
    ///
    /// The radius is `ceil(|σ| * cutoff_factor)`, clamped to [`Self::MAX_RADIUS`]. A NaN product
    /// yields a single center tap.
    pub fn sample(kernel: &AsymmetricKernel, cutoff_factor: f64, normalized: bool) -> Self {
        let Gaussian { amplitude, σ } = kernel.gaussian;
        #[allow(clippy::cast_precision_loss)]
        let radius = (σ.abs() * cutoff_factor)
            .ceil()
            .min(Self::MAX_RADIUS as f64) as usize;

        let mut taps = Self {
            radius,
            gaussian: vec![],
            derivative: vec![],
            kernel: vec![],
        };

        let shape = Gaussian::new(1., σ);
        taps.gaussian = taps.positions().map(|x| shape.evaluate(x)).collect();
        let scale = if normalized {
            amplitude / taps.gaussian.iter().sum::<f64>()
        } else {
            amplitude
        };
        for g in &mut taps.gaussian {
            *g *= scale;
        }

        taps.derivative = taps
            .positions()
            .zip(&taps.gaussian)
            .map(|(x, &g)| -(x / (σ * σ)) * g)
            .collect();
        taps.kernel = taps
            .gaussian
            .iter()
            .zip(&taps.derivative)
            .map(|(&g, &dg)| g + kernel.η * dg)
            .collect();
        taps
    }

    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn offsets(&self) -> RangeInclusive<isize> {
        let radius = self.radius as isize;
        -radius..=radius
    }

    #[allow(clippy::cast_precision_loss)]
    fn positions(&self) -> impl Iterator<Item = f64> {
        self.offsets().map(|i| i as f64)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.kernel.len()
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.kernel.iter().sum()
    }
}
