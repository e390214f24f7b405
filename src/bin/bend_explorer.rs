//! Bend Explorer
//!
//! Draws a right-angle bend next to three quarter-circle alternatives and
//! labels the length of every edge. Two sliders set the trace length and width.

use egui::{Align2, Color32};
use egui_plot::{uniform_grid_spacer, Line, LineStyle, Plot, PlotPoint, PlotPoints, PlotUi, Text};
use tracebend::bend::paths::PathFamily;
use tracebend::bend::{
    BendExplorer, BendPath, Curve, ViewFrame, TRACE_LENGTH_RANGE, TRACE_WIDTH_RANGE,
};

#[derive(Default)]
struct ExplorerApp {
    explorer: BendExplorer,
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("sliders").show(ctx, |ui| {
            ui.add_space(8.0);
            let mut length = self.explorer.trace_length();
            let slider = egui::Slider::new(&mut length, TRACE_LENGTH_RANGE)
                .step_by(1.0)
                .text("Trace Length (mils)");
            if ui.add(slider).changed() {
                self.explorer.set_trace_length(length);
            }

            let mut width = self.explorer.trace_width();
            let slider = egui::Slider::new(&mut width, TRACE_WIDTH_RANGE)
                .step_by(1.0)
                .text("Trace Width (mils)");
            if ui.add(slider).changed() {
                self.explorer.set_trace_width(width);
            }
            ui.add_space(8.0);
        });

        let views = *self.explorer.views();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(3, |columns| {
                let view = &views.combined;
                columns[0].heading("Plot 1: Combined Traces");
                show_bend_plot(&mut columns[0], "combined", &view.frame, |plot_ui| {
                    draw_family(plot_ui, &view.arcs, Color32::BLUE, LineStyle::dotted_dense());
                    draw_family(plot_ui, &view.corners, Color32::RED, LineStyle::dashed_loose());
                    annotate(plot_ui, &view.frame, [0.05, 0.95], view.right_angle_label(), Color32::RED);
                    annotate(plot_ui, &view.frame, [0.55, 0.95], view.circular_label(), Color32::BLUE);
                });

                let view = &views.diagonal;
                columns[1].heading("Plot 2: R = (L·√2)/2");
                show_bend_plot(&mut columns[1], "diagonal", &view.frame, |plot_ui| {
                    draw_family(plot_ui, &view.corners, Color32::RED, LineStyle::dashed_loose());
                    draw_family(plot_ui, &view.arcs, Color32::GREEN, LineStyle::dotted_dense());
                    annotate(plot_ui, &view.frame, [0.05, 0.90], view.right_angle_label(), Color32::RED);
                    annotate(plot_ui, &view.frame, [0.55, 0.90], view.circular_label(), Color32::GREEN);
                });

                let view = &views.matched;
                columns[2].heading("Plot 3: R = (2/π)(L – W)");
                show_bend_plot(&mut columns[2], "matched", &view.frame, |plot_ui| {
                    draw_family(plot_ui, &view.corners, Color32::RED, LineStyle::dashed_loose());
                    for segment in view.arc.segments() {
                        plot_ui.line(Line::new(plot_points(&segment)).color(Color32::GREEN).width(2.0));
                    }
                    annotate(plot_ui, &view.frame, [0.05, 0.95], view.right_angle_label(), Color32::RED);
                    annotate(plot_ui, &view.frame, [0.05, 0.75], view.quarter_label(), Color32::GREEN);
                });
            });
        });
    }
}

fn show_bend_plot(ui: &mut egui::Ui, id: &str, frame: &ViewFrame, add_contents: impl FnOnce(&mut PlotUi)) {
    let step = frame.grid_step;
    Plot::new(id)
        .data_aspect(1.0)
        .include_x(0.0)
        .include_y(0.0)
        .include_x(frame.limit)
        .include_y(frame.limit)
        .x_grid_spacer(uniform_grid_spacer(move |_| [step, step * 5.0, step * 10.0]))
        .y_grid_spacer(uniform_grid_spacer(move |_| [step, step * 5.0, step * 10.0]))
        .x_axis_label("x (mils)")
        .y_axis_label("y (mils)")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, add_contents);
}

fn plot_points(curve: &Curve) -> PlotPoints {
    curve.points().collect()
}

/// Draws the centerline in `center_style` and both edges as thin solid lines.
fn draw_family<P: BendPath>(
    plot_ui: &mut PlotUi,
    family: &PathFamily<P>,
    color: Color32,
    center_style: LineStyle,
) {
    for segment in family.center.segments() {
        plot_ui.line(
            Line::new(plot_points(&segment))
                .color(color)
                .width(2.0)
                .style(center_style),
        );
    }
    for edge in [&family.inner, &family.outer] {
        for segment in edge.segments() {
            plot_ui.line(Line::new(plot_points(&segment)).color(color).width(1.0));
        }
    }
}

/// Places `label` at a fraction of the frame, top-left aligned.
fn annotate(plot_ui: &mut PlotUi, frame: &ViewFrame, at: [f64; 2], label: String, color: Color32) {
    let position = PlotPoint::new(at[0] * frame.limit, at[1] * frame.limit);
    plot_ui.text(Text::new(position, label).color(color).anchor(Align2::LEFT_TOP));
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 620.0])
            .with_title("Trace Bend Explorer"),
        ..Default::default()
    };

    eframe::run_native(
        "Trace Bend Explorer",
        native_options,
        Box::new(|_cc| Ok(Box::new(ExplorerApp::default()))),
    )
}
