use bevy::{
    app::{App, Plugin, Update},
    diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin},
    ecs::{schedule::IntoSystemConfigs, system::Res},
};
use bevy_egui::{
    egui::{self, Align2, Color32, FontId, Id, LayerId, Order},
    EguiContexts,
};

use crate::physics::orbits::{
    state::{Controls, SimulationState},
    OrbitSet,
};

/// Top left corner of the first line, in screen pixels
const PANEL_ORIGIN: egui::Pos2 = egui::pos2(10.0, 10.0);
/// Distance between the tops of consecutive lines
const LINE_SPACING: f32 = 25.0;
const FONT_SIZE: f32 = 18.0;

/// Draws the control legend and simulation status in the top left corner
pub struct StatusWindowPlugin;

impl Plugin for StatusWindowPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, status_window_system.after(OrbitSet::Sync));
    }
}

/// Every line of the panel, the control legend and status followed by the frame rate
pub fn status_text(controls: &Controls, fps: f64) -> Vec<String> {
    let mut lines = controls.status_lines();
    lines.push(format!("FPS: {:.0}", fps));
    lines
}

/// Where the top left corner of line `idx` goes
pub fn line_origin(idx: usize) -> egui::Pos2 {
    PANEL_ORIGIN + egui::vec2(0.0, idx as f32 * LINE_SPACING)
}

pub fn status_window_system(
    mut contexts: EguiContexts,
    diagnostics: Res<DiagnosticsStore>,
    state: Res<SimulationState>,
) {
    let controls = state.controls();
    if !controls.show_info {
        return;
    }
    let fps = diagnostics
        .get(FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
        .unwrap_or(0.0);
    let painter = contexts
        .ctx_mut()
        .layer_painter(LayerId::new(Order::Foreground, Id::new("status_window")));
    for (idx, line) in status_text(controls, fps).into_iter().enumerate() {
        painter.text(
            line_origin(idx),
            Align2::LEFT_TOP,
            line,
            FontId::proportional(FONT_SIZE),
            Color32::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrreryConfig;

    #[test]
    fn test_status_text_appends_fps() {
        let controls = Controls::new(&OrreryConfig::default());
        let lines = status_text(&controls, 59.6);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[3], "R: Reset");
        assert_eq!(lines[4], "Speed: 1.0x");
        assert_eq!(lines[6], "FPS: 60");
    }

    #[test]
    fn test_lines_are_evenly_spaced() {
        assert_eq!(line_origin(0), egui::pos2(10.0, 10.0));
        assert_eq!(line_origin(1), egui::pos2(10.0, 35.0));
        assert_eq!(line_origin(5), egui::pos2(10.0, 135.0));
    }
}
