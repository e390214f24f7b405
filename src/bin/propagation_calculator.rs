//! Propagation Time Calculator
//!
//! Compares the signal delay of a straight trace with a circular-arc bend and
//! a right-angle bend of the same centerline length.

use tracebend::{FormInput, LengthUnit};

#[derive(Default)]
struct CalculatorApp {
    form: FormInput,
    output: String,
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Grid::new("inputs")
                .num_columns(3)
                .spacing([5.0, 3.0])
                .show(ui, |ui| {
                    ui.label("Enter L:");
                    ui.add(egui::TextEdit::singleline(&mut self.form.length).desired_width(120.0));
                    unit_selector(ui, "length_unit", &mut self.form.length_unit);
                    ui.end_row();

                    ui.label("Enter W:");
                    ui.add(egui::TextEdit::singleline(&mut self.form.width).desired_width(120.0));
                    unit_selector(ui, "width_unit", &mut self.form.width_unit);
                    ui.end_row();

                    ui.label("Dielectric Constant (Er):");
                    ui.add(egui::TextEdit::singleline(&mut self.form.dielectric).desired_width(120.0));
                    ui.end_row();
                });

            ui.add_space(8.0);
            if ui.button("Compute").clicked() {
                self.output = self.form.evaluate();
            }
            ui.add_space(8.0);

            // read-only view of the report
            let mut text = self.output.as_str();
            ui.add(
                egui::TextEdit::multiline(&mut text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY)
                    .desired_rows(25),
            );
        });
    }
}

fn unit_selector(ui: &mut egui::Ui, id: &str, selected: &mut String) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected.clone())
        .width(80.0)
        .show_ui(ui, |ui| {
            for unit in LengthUnit::ALL {
                ui.selectable_value(selected, unit.to_string(), unit.label());
            }
        });
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 640.0])
            .with_resizable(false)
            .with_title("Propagation Time Calculator (Bend-Delay)"),
        ..Default::default()
    };

    eframe::run_native(
        "Propagation Time Calculator",
        native_options,
        Box::new(|_cc| Ok(Box::new(CalculatorApp::default()))),
    )
}
