//! Renders the header/body split and the left/right content split.

use eframe::egui;
use layout_core::{LayoutState, Orientation, SplitDirection};

pub fn show_page(ctx: &egui::Context, state: &LayoutState) {
    egui::CentralPanel::default()
        .frame(egui::Frame::default())
        .show(ctx, |ui| {
            let available = ui.available_size();
            match state.page_split_direction {
                SplitDirection::Vertical => {
                    let height = available.y * state.header_body.first_fraction();
                    top_panel(panel_id("header", state), height, state.split_disabled)
                        .show_inside(ui, |ui| header(ui, state));
                }
                SplitDirection::Horizontal => {
                    let width = available.x * state.header_body.first_fraction();
                    left_panel(panel_id("header", state), width, state.split_disabled)
                        .show_inside(ui, |ui| header(ui, state));
                }
            }
            egui::CentralPanel::default().show_inside(ui, |ui| content(ui, state));
        });
}

fn content(ui: &mut egui::Ui, state: &LayoutState) {
    let available = ui.available_size();
    let fraction = state.left_right.first_fraction();
    match state.content_split_direction {
        SplitDirection::Horizontal => {
            left_panel(
                panel_id("left", state),
                available.x * fraction,
                state.split_disabled,
            )
            .show_inside(ui, |ui| child(ui, "Left", state.left_child_size_in_percent()));
        }
        SplitDirection::Vertical => {
            top_panel(
                panel_id("left", state),
                available.y * fraction,
                state.split_disabled,
            )
            .show_inside(ui, |ui| child(ui, "Left", state.left_child_size_in_percent()));
        }
    }
    egui::CentralPanel::default()
        .show_inside(ui, |ui| child(ui, "Right", state.right_child_size_in_percent()));
}

fn header(ui: &mut egui::Ui, state: &LayoutState) {
    ui.heading("Split layout");
    ui.label(status_line(state));
}

fn child(ui: &mut egui::Ui, name: &str, percent: u8) {
    ui.centered_and_justified(|ui| {
        ui.label(format!("{name} ({percent}%)"));
    });
}

fn status_line(state: &LayoutState) -> String {
    let orientation = match state.orientation() {
        Orientation::Landscape => "landscape",
        Orientation::Portrait => "portrait",
    };
    format!(
        "{orientation}: header {}% / body {}%, left {}% / right {}%",
        state.header_size_in_percent(),
        state.body_size_in_percent(),
        state.left_child_size_in_percent(),
        state.right_child_size_in_percent(),
    )
}

// Keyed by orientation so a flip starts again from the preset size.
fn panel_id(name: &'static str, state: &LayoutState) -> egui::Id {
    egui::Id::new((name, state.orientation()))
}

fn top_panel(id: egui::Id, height: f32, locked: bool) -> egui::TopBottomPanel {
    let panel = egui::TopBottomPanel::top(id).resizable(!locked);
    if locked {
        panel.exact_height(height)
    } else {
        panel.default_height(height)
    }
}

fn left_panel(id: egui::Id, width: f32, locked: bool) -> egui::SidePanel {
    let panel = egui::SidePanel::left(id).resizable(!locked);
    if locked {
        panel.exact_width(width)
    } else {
        panel.default_width(width)
    }
}

#[cfg(test)]
mod tests {
    use super::status_line;
    use layout_core::{compute_layout, Viewport};

    #[test]
    fn status_line_reports_portrait_sizes() {
        let state = compute_layout(Viewport::new(375.0, 812.0));
        assert_eq!(
            status_line(&state),
            "portrait: header 15% / body 85%, left 55% / right 45%"
        );
    }

    #[test]
    fn status_line_reports_landscape_sizes() {
        let state = compute_layout(Viewport::new(1920.0, 1080.0));
        assert_eq!(
            status_line(&state),
            "landscape: header 20% / body 80%, left 50% / right 50%"
        );
    }
}
