pub mod gaussian;
pub mod sampled;

#[allow(clippy::cast_precision_loss)]
/// `count` evenly spaced values over `lower..=upper`, inclusive of both bounds.
///
/// The final value is exactly `upper`. A `count` of zero yields nothing, and a `count` of one
/// yields the single point `lower`.
pub fn linspace(lower: f64, upper: f64, count: usize) -> impl ExactSizeIterator<Item = f64> {
    let step = if count > 1 {
        (upper - lower) / (count - 1) as f64
    } else {
        0.
    };
    (0..count).map(move |i| {
        if count > 1 && i == count - 1 {
            upper
        } else {
            lower + i as f64 * step
        }
    })
}
