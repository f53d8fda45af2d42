use std::rc::Rc;

#[derive(Clone, PartialEq, Debug)]
/// A function sampled over an ordered grid. Functions evaluated over the same grid share its
/// storage.
pub struct SampledFunction {
    domain: Rc<[f64]>,
    values: Vec<f64>,
}

impl SampledFunction {
    #[must_use]
    pub fn from_fn(domain: &Rc<[f64]>, f: impl Fn(f64) -> f64) -> Self {
        Self {
            values: domain.iter().map(|&x| f(x)).collect(),
            domain: Rc::clone(domain),
        }
    }

    #[must_use]
    pub fn domain(&self) -> &[f64] {
        &self.domain
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `[x, f(x)]` pairs, in grid order.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.domain()
            .iter()
            .zip(self.values())
            .map(|(&x, &y)| [x, y])
    }

    #[must_use]
    /// Location of the largest sample, ignoring NaNs. `None` if no sample is a number.
    pub fn argmax(&self) -> Option<f64> {
        self.points()
            .filter(|[_, y]| !y.is_nan())
            .max_by(|[_, a], [_, b]| a.total_cmp(b))
            .map(|[x, _]| x)
    }

    #[must_use]
    /// Location of the smallest sample, ignoring NaNs. `None` if no sample is a number.
    pub fn argmin(&self) -> Option<f64> {
        self.points()
            .filter(|[_, y]| !y.is_nan())
            .min_by(|[_, a], [_, b]| a.total_cmp(b))
            .map(|[x, _]| x)
    }
}
