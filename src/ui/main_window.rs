use crate::app::SmolApp;
use crate::config::PREVIEW_SIZE;
use crate::session::{snap, Field, ResolutionPreset, Session, SessionEvent};
use crate::ui::PreviewState;
use crate::utils::format_time;
use eframe::egui;
use std::ops::RangeInclusive;

/// Draw the window and feed whatever the user changed back into the app.
pub fn render_main_window(app: &mut SmolApp, ctx: &egui::Context) {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        render_status_bar(app, ui);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                render_preview_area(app, ui);
                ui.add_space(6.0);
                render_trim_controls(&app.session, ui, &mut events);
            });

            ui.separator();

            ui.vertical(|ui| {
                render_encode_settings(&app.session, ui, &mut events);
            });
        });

        ui.separator();

        if ui.button("Transcode").clicked() {
            events.push(SessionEvent::Transcode);
        }
    });

    app.dispatch(ctx, events);
}

fn render_status_bar(app: &SmolApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(&app.status_message);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let range = app.session.range();
            ui.label(format!(
                "Trim {} - {} ({})",
                format_time(range.start),
                format_time(range.end),
                format_time(range.length().max(0.0))
            ));
            ui.separator();
            ui.label(format!("Preview {}", format_time(app.preview.time())));
            ui.separator();
            ui.label(format!(
                "{} | {} | {} | {}",
                app.media.filename(),
                app.media.resolution_string(),
                app.media.stream_string(),
                app.media.duration_string()
            ));
        });
    });
}

fn render_preview_area(app: &SmolApp, ui: &mut egui::Ui) {
    let width = ui.available_width().min(PREVIEW_SIZE.0 as f32);
    let size = egui::vec2(width, width * PREVIEW_SIZE.1 as f32 / PREVIEW_SIZE.0 as f32);

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(size);
        ui.set_max_size(size);

        match &app.preview {
            PreviewState::Frame { texture, .. } => {
                ui.image((texture.id(), size));
            }
            PreviewState::Failed { time, message } => {
                let color = ui.visuals().error_fg_color;
                ui.centered_and_justified(|ui| {
                    ui.colored_label(
                        color,
                        format!("No preview at {}\n\n{}", format_time(*time), message),
                    );
                });
            }
        }
    });
}

fn render_trim_controls(session: &Session, ui: &mut egui::Ui, events: &mut Vec<SessionEvent>) {
    let bounds = session.bounds();

    egui::Grid::new("trim_grid")
        .num_columns(3)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.spacing_mut().slider_width = 720.0;

            ui.label("Start");
            if let Some(value) = trim_slider(ui, bounds.start_slider(), session.range().start) {
                events.push(SessionEvent::StartSlider(value));
            }
            field_edit(ui, session, Field::Start, 60.0, events);
            ui.end_row();

            ui.label("End");
            if let Some(value) = trim_slider(ui, bounds.end_slider(), session.range().end) {
                events.push(SessionEvent::EndSlider(value));
            }
            field_edit(ui, session, Field::End, 60.0, events);
            ui.end_row();
        });
}

/// Slider over a copy of `current`. Returns a new position only when the
/// user moved it by at least one step. Unstepped; the session snaps.
fn trim_slider(ui: &mut egui::Ui, range: RangeInclusive<f64>, current: f64) -> Option<f64> {
    // Typed overflow can leave the value outside the slider range.
    let mut value = current.clamp(*range.start(), *range.end());
    let response = ui.add(egui::Slider::new(&mut value, range).show_value(false));
    (response.changed() && snap(value) != snap(current)).then_some(value)
}

fn render_encode_settings(session: &Session, ui: &mut egui::Ui, events: &mut Vec<SessionEvent>) {
    egui::Grid::new("encode_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("CRF");
            field_edit(ui, session, Field::Crf, 32.0, events);
            ui.end_row();

            ui.label("Framerate");
            field_edit(ui, session, Field::Framerate, 32.0, events);
            ui.end_row();

            ui.label("Resolution");
            ui.horizontal(|ui| {
                field_edit(ui, session, Field::Width, 48.0, events);
                ui.label("x");
                field_edit(ui, session, Field::Height, 48.0, events);
            });
            ui.end_row();

            ui.label("Preset");
            let current = session.preset();
            egui::ComboBox::from_id_salt("resolution_preset")
                .selected_text(current.map(|p| p.name()).unwrap_or("Custom"))
                .show_ui(ui, |ui| {
                    for preset in ResolutionPreset::all() {
                        if ui
                            .selectable_label(current == Some(*preset), preset.name())
                            .clicked()
                        {
                            events.push(SessionEvent::SelectPreset(*preset));
                        }
                    }
                });
            ui.end_row();
        });
}

/// Text box bound to a copy of the field; the session decides what sticks.
fn field_edit(
    ui: &mut egui::Ui,
    session: &Session,
    field: Field,
    width: f32,
    events: &mut Vec<SessionEvent>,
) {
    let mut text = session.text(field).to_owned();
    let response = ui
        .add(egui::TextEdit::singleline(&mut text).desired_width(width))
        .on_hover_text(field.name());
    if response.changed() {
        events.push(SessionEvent::Edit(field, text));
    }
}
