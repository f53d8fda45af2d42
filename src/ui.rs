mod traces;

use eframe::egui::plot::{Corner, Legend, Plot};
use eframe::egui::{Align, CentralPanel, Context, Layout, SidePanel, TextStyle, Ui, Visuals};
use egui_extras::{Column, TableBuilder};
use tracing::debug;

use crate::kernel::taps::KernelTaps;
use crate::kernel::{KernelConfig, KernelProfile};

const TITLE: &str = "Asymmetric Gaussian Kernel";
const X_LABEL: &str = "x";
const Y_LABEL: &str = "Kernel Value";

/// Shows an integer-valued number without decimals.
fn format_value(x: f64) -> String {
    if approx::relative_eq!(x, x.round()) {
        format!("{x:.0}")
    } else {
        format!("{x:.3}")
    }
}

fn format_location(x: Option<f64>) -> String {
    x.map_or_else(|| "undefined".to_owned(), format_value)
}

pub struct KernelViewer {
    config: KernelConfig,
    profile: KernelProfile,
    taps: KernelTaps,
}

impl KernelViewer {
    #[must_use]
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(Visuals::light());
        Self::with_config(KernelConfig::default())
    }

    fn with_config(config: KernelConfig) -> Self {
        let profile = KernelProfile::evaluate(&config);
        let taps = KernelTaps::sample(&config.kernel(), KernelTaps::DEFAULT_CUTOFF_FACTOR, true);
        debug!(
            samples = profile.grid().len(),
            peak = ?profile.kernel.argmax(),
            trough = ?profile.kernel.argmin(),
            taps = taps.len(),
            "kernel profile ready"
        );
        Self {
            config,
            profile,
            taps,
        }
    }

    fn readout_rows(&self) -> [(&'static str, String); 10] {
        let config = &self.config;
        [
            ("Amplitude (A)", format_value(config.amplitude)),
            ("Width (σ)", format_value(config.σ)),
            ("Asymmetry (η)", format_value(config.η)),
            (
                "Domain",
                format!(
                    "[{}, {}]",
                    format_value(config.lower),
                    format_value(config.upper)
                ),
            ),
            ("Samples", self.profile.kernel.len().to_string()),
            ("Kernel peak at", format_location(self.profile.kernel.argmax())),
            ("Kernel trough at", format_location(self.profile.kernel.argmin())),
            ("Tap radius", self.taps.radius.to_string()),
            ("Tap count", self.taps.len().to_string()),
            ("Tap sum", format_value(self.taps.sum())),
        ]
    }

    fn readout(&self, ui: &mut Ui) {
        ui.heading("Parameters");
        ui.separator();

        let row_height = ui.text_style_height(&TextStyle::Body) + ui.spacing().item_spacing.y;
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .column(Column::auto())
            .column(Column::remainder())
            .body(|mut body| {
                for (label, value) in self.readout_rows() {
                    body.row(row_height, |mut row| {
                        row.col(|ui| {
                            ui.label(label);
                        });
                        row.col(|ui| {
                            ui.monospace(value);
                        });
                    });
                }
            });

        ui.separator();
        ui.label(format!(
            "Taps are sampled at integer offsets out to {} σ and normalized to sum to A.",
            format_value(KernelTaps::DEFAULT_CUTOFF_FACTOR)
        ));
    }

    fn kernel_plot(&self, ui: &mut Ui) {
        ui.vertical_centered(|ui| ui.heading(TITLE));
        ui.label(Y_LABEL);

        let caption_height = ui.text_style_height(&TextStyle::Body) + ui.spacing().item_spacing.y;
        let plot_height = ui.available_height() - caption_height;
        let plot = Plot::new("kernel_plot")
            .legend(Legend::default().position(Corner::RightTop))
            .label_formatter(|name, value| {
                let prefix = if name.is_empty() {
                    String::new()
                } else {
                    format!("{name}\n")
                };
                format!("{prefix}{X_LABEL} = {:.3}\n{Y_LABEL} = {:.3}", value.x, value.y)
            })
            .height(plot_height);
        plot.show(ui, |plot_ui| {
            plot_ui.line(traces::GAUSSIAN.line(&self.profile.gaussian));
            plot_ui.line(traces::DERIVATIVE.line(&self.profile.derivative));
            plot_ui.line(traces::KERNEL.line(&self.profile.kernel));
            plot_ui.hline(traces::zero_reference());
        });
        ui.vertical_centered(|ui| ui.label(X_LABEL));
    }
}

impl eframe::App for KernelViewer {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        SidePanel::right("readout")
            .min_width(ctx.available_rect().width() * 0.2)
            .resizable(false)
            .show(ctx, |ui| self.readout(ui));

        CentralPanel::default().show(ctx, |ui| self.kernel_plot(ui));
    }
}

#[cfg(test)]
mod tests {
    use super::{format_location, format_value, KernelViewer};
    use crate::kernel::KernelConfig;

    #[test]
    fn value_formatting() {
        assert_eq!(format_value(1000.), "1000");
        assert_eq!(format_value(-10.), "-10");
        assert_eq!(format_value(1.4), "1.400");
        assert_eq!(format_location(None), "undefined");
        assert_eq!(format_location(Some(-1.0310)), "-1.031");
    }

    #[test]
    fn readout_reflects_config() {
        let viewer = KernelViewer::with_config(KernelConfig::default());
        let rows = viewer.readout_rows();
        assert_eq!(rows[0], ("Amplitude (A)", "5".to_owned()));
        assert_eq!(rows[2], ("Asymmetry (η)", "1.400".to_owned()));
        assert_eq!(rows[3], ("Domain", "[-10, 10]".to_owned()));
        assert_eq!(rows[4], ("Samples", "1000".to_owned()));
        assert_eq!(rows[8], ("Tap count", "21".to_owned()));
        assert_eq!(rows[9].0, "Tap sum");
        assert!(rows[9].1.starts_with('5'));
    }

    #[test]
    fn degenerate_width_is_shown_not_fixed() {
        let viewer = KernelViewer::with_config(KernelConfig {
            σ: 0.,
            ..KernelConfig::default()
        });
        assert!(viewer.profile.kernel.values().iter().all(|k| k.is_nan()));
        let rows = viewer.readout_rows();
        assert_eq!(rows[5].1, "undefined");
        assert_eq!(rows[6].1, "undefined");
    }
}
