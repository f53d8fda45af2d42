use eframe::egui::plot::{HLine, Line, LineStyle};
use eframe::epaint::Color32;
use itertools::Itertools;

use crate::numerics::sampled::SampledFunction;

/// How one sampled function is drawn on the kernel plot.
pub(super) struct Trace {
    pub name: &'static str,
    pub color: Color32,
    pub style: LineStyle,
}

pub(super) const GAUSSIAN: Trace = Trace {
    name: "Symmetric Gaussian",
    color: Color32::BLUE,
    style: LineStyle::Dashed { length: 10. },
};

pub(super) const DERIVATIVE: Trace = Trace {
    name: "Gaussian Derivative",
    color: Color32::GREEN,
    style: LineStyle::Dotted { spacing: 6. },
};

pub(super) const KERNEL: Trace = Trace {
    name: "Asymmetric Gaussian Kernel",
    color: Color32::RED,
    style: LineStyle::Solid,
};

impl Trace {
    pub(super) fn line(&self, samples: &SampledFunction) -> Line {
        Line::new(samples.points().collect_vec())
            .name(self.name)
            .color(self.color)
            .style(self.style)
            .width(2.)
    }
}

/// Thin dashed line along `y = 0`.
pub(super) fn zero_reference() -> HLine {
    HLine::new(0.)
        .color(Color32::BLACK)
        .style(LineStyle::dashed_dense())
        .width(0.5)
}

#[cfg(test)]
mod tests {
    use eframe::egui::plot::LineStyle;
    use eframe::epaint::Color32;

    use super::{DERIVATIVE, GAUSSIAN, KERNEL};

    #[test]
    fn trace_labels_and_styles() {
        let names = [GAUSSIAN.name, DERIVATIVE.name, KERNEL.name];
        assert_eq!(
            names,
            [
                "Symmetric Gaussian",
                "Gaussian Derivative",
                "Asymmetric Gaussian Kernel"
            ]
        );
        assert_eq!(
            [GAUSSIAN.color, DERIVATIVE.color, KERNEL.color],
            [Color32::BLUE, Color32::GREEN, Color32::RED]
        );
        assert!(matches!(GAUSSIAN.style, LineStyle::Dashed { .. }));
        assert!(matches!(DERIVATIVE.style, LineStyle::Dotted { .. }));
        assert!(matches!(KERNEL.style, LineStyle::Solid));
    }
}
