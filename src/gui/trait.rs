use eframe::egui;

use crate::{msg::WheelMsg, session::WheelView};

/// A part of the window. Widgets never change the session directly: they read the current
/// [WheelView] and push the resulting [WheelMsg]s to `forward`.
pub trait GuiShow {
    fn show(&mut self, ui: &mut egui::Ui, view: &WheelView, forward: &mut Vec<WheelMsg>);
}
