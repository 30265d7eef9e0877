use crate::app::core::{Event, State, Status};
use crate::config::Config;
use crate::image_source::interface::InputMethod;
use crate::pipeline::error::FailureKind;
use crate::result_presenter::chart::ConfidenceChart;
use crate::result_presenter::present::PresentedResult;
use crate::result_presenter::tier::ConfidenceTier;
use egui::{Align2, Color32, FontId, RichText, Stroke};

const SKY_BLUE: Color32 = Color32::from_rgb(135, 206, 235);

/// Draws the whole window and returns the events the user produced this frame.
pub fn render(
    ctx: &egui::Context,
    config: &Config,
    state: &State,
    preview: Option<&egui::TextureHandle>,
) -> Vec<Event> {
    let mut events = Vec::new();

    egui::SidePanel::left("usage")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, render_usage);

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading(config.window_title.as_str());
            ui.label("Upload an image or take a photo and the AI will tell you what it shows.");
            ui.separator();

            render_input_method(ui, state, &mut events);
            ui.add_space(8.0);
            render_input(ui, state, &mut events);

            ui.separator();
            render_status(ui, state, preview);
        });
    });

    events
}

fn render_usage(ui: &mut egui::Ui) {
    ui.heading("ℹ How to use");
    ui.label("1. Upload an image or take a photo with the camera.");
    ui.label("2. You can also load an image from a web URL.");
    ui.label("3. The AI analyzes the object in the image and shows the result.");
    ui.separator();
    ui.label(RichText::new("Higher confidence means a more reliable result.").italics());
}

fn render_input_method(ui: &mut egui::Ui, state: &State, events: &mut Vec<Event>) {
    let enabled = !state.status.is_busy();

    ui.horizontal(|ui| {
        ui.label("Image input:");
        for input_method in InputMethod::ALL {
            let selected = state.input_method == input_method;
            let response = ui.add_enabled(
                enabled,
                egui::RadioButton::new(selected, input_method.label()),
            );
            if response.clicked() && !selected {
                events.push(Event::InputMethodSelected(input_method));
            }
        }
    });
}

fn render_input(ui: &mut egui::Ui, state: &State, events: &mut Vec<Event>) {
    let enabled = !state.status.is_busy();

    match state.input_method {
        InputMethod::Upload => {
            ui.label("Drop a PNG or JPEG file onto this window, or enter its path.");
            ui.horizontal(|ui| {
                let mut path = state.upload_path_draft.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut path).hint_text("/path/to/image.jpg"),
                );
                let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if response.changed() {
                    events.push(Event::UploadPathEdited(path));
                }
                if ui.add_enabled(enabled, egui::Button::new("Open")).clicked() || entered {
                    events.push(Event::UploadPathSubmitted);
                }
            });
        }
        InputMethod::Camera => {
            ui.label("Place the subject in the center of the frame and take a photo.");
            if ui
                .add_enabled(enabled, egui::Button::new("📷 Capture"))
                .clicked()
            {
                events.push(Event::CaptureRequested);
            }
        }
        InputMethod::Url => {
            ui.horizontal(|ui| {
                ui.label("Image URL:");
                let mut url = state.url_draft.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut url).hint_text("https://example.com/image.jpg"),
                );
                let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if response.changed() {
                    events.push(Event::UrlEdited(url));
                }
                if ui.add_enabled(enabled, egui::Button::new("Fetch")).clicked() || entered {
                    events.push(Event::UrlSubmitted);
                }
            });
        }
    }
}

fn render_status(ui: &mut egui::Ui, state: &State, preview: Option<&egui::TextureHandle>) {
    match &state.status {
        Status::Idle => {}
        Status::ReadingUpload => busy(ui, "Reading file..."),
        Status::Capturing => busy(ui, "Capturing photo..."),
        Status::Processing { .. } => busy(ui, "Analyzing image..."),
        Status::Done { report } => {
            if let Some(texture) = preview {
                ui.add(
                    egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                        .max_width(ui.available_width().min(512.0)),
                );
                ui.small("Acquired image");
            }
            ui.separator();
            render_result(ui, &report.result);
        }
        Status::Failed { kind, message } => {
            notice(
                ui,
                Color32::from_rgb(248, 215, 218),
                format!("❌ {}: {}", failure_title(*kind), message),
            );
        }
    }
}

fn busy(ui: &mut egui::Ui, text: &str) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(text);
    });
}

fn failure_title(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::Upload => "Upload failed",
        FailureKind::Camera => "Camera failed",
        FailureKind::Fetch => "Enter a valid image URL",
        FailureKind::Decode => "Not a readable image",
        FailureKind::Inference => "Classification failed",
        FailureKind::Internal => "Internal error",
    }
}

fn notice(ui: &mut egui::Ui, fill: Color32, text: String) {
    egui::Frame::none()
        .fill(fill)
        .rounding(4.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).color(Color32::BLACK).strong());
        });
}

fn render_result(ui: &mut egui::Ui, result: &PresentedResult) {
    ui.heading("🔍 Prediction");

    let (fill, icon) = match result.tier {
        ConfidenceTier::High => (Color32::from_rgb(212, 237, 218), "✔"),
        ConfidenceTier::Medium => (Color32::from_rgb(255, 243, 205), "⚠"),
        ConfidenceTier::Low => (Color32::from_rgb(248, 215, 218), "❌"),
    };
    notice(
        ui,
        fill,
        format!("{} Result: {}", icon, result.classification.label),
    );

    ui.add_space(4.0);
    ui.label(RichText::new(format!("Confidence: {}", result.confidence_text)).strong());
    ui.add_space(8.0);
    render_chart(ui, &result.chart);
}

fn render_chart(ui: &mut egui::Ui, chart: &ConfidenceChart) {
    ui.label(RichText::new(chart.title.as_str()).strong());

    let width = ui.available_width().min(500.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 72.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    let text_color = ui.visuals().text_color();
    let grid_color = ui.visuals().weak_text_color();
    let label_width = 84.0;

    let plot = egui::Rect::from_min_max(
        egui::pos2(rect.left() + label_width, rect.top() + 4.0),
        egui::pos2(rect.right() - 16.0, rect.bottom() - 22.0),
    );

    for &tick in &chart.ticks {
        let x = plot.left() + plot.width() * chart.fraction(tick);
        painter.line_segment(
            [egui::pos2(x, plot.top()), egui::pos2(x, plot.bottom())],
            Stroke::new(1.0, grid_color.gamma_multiply(0.5)),
        );
        painter.text(
            egui::pos2(x, plot.bottom() + 3.0),
            Align2::CENTER_TOP,
            tick,
            FontId::proportional(11.0),
            text_color,
        );
    }

    let bar_height = plot.height() * 0.6;
    let bar = egui::Rect::from_min_size(
        egui::pos2(plot.left(), plot.center().y - bar_height / 2.0),
        egui::vec2(plot.width() * chart.fraction(chart.value), bar_height),
    );
    painter.rect_filled(bar, 0.0, SKY_BLUE);
    painter.rect_stroke(plot, 0.0, Stroke::new(1.0, grid_color));

    painter.text(
        egui::pos2(plot.left() - 8.0, plot.center().y),
        Align2::RIGHT_CENTER,
        &chart.bar_label,
        FontId::proportional(12.0),
        text_color,
    );

    ui.allocate_ui(egui::vec2(width, 16.0), |ui| {
        ui.centered_and_justified(|ui| ui.small(chart.axis_label.as_str()));
    });
}
