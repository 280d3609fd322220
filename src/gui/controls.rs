use eframe::egui;

use crate::{
    msg::WheelMsg, notename::NotationConvention, session::WheelView, util::mod12::Sector,
};

use super::r#trait::GuiShow;

/// Key picker, buttons to turn the wheel by one step, and the notation toggle.
pub struct Controls;

impl GuiShow for Controls {
    fn show(&mut self, ui: &mut egui::Ui, view: &WheelView, forward: &mut Vec<WheelMsg>) {
        ui.horizontal(|ui| {
            ui.label("Key:");
            let mut selected = view.root;
            egui::ComboBox::from_id_salt("key picker")
                .selected_text(view.key_names[view.root.index()].to_string())
                .show_ui(ui, |ui| {
                    for sector in Sector::all() {
                        let name = view.key_names[sector.index()].to_string();
                        ui.selectable_value(&mut selected, sector, name);
                    }
                });
            if selected != view.root {
                forward.push(WheelMsg::SelectKey { sector: selected });
            }

            if ui.button("◄").on_hover_text("previous").clicked() {
                forward.push(WheelMsg::Step { delta: -1 });
            }
            ui.label(format!("I: {}", view.key_name));
            if ui.button("►").on_hover_text("next").clicked() {
                forward.push(WheelMsg::Step { delta: 1 });
            }
            if ui.button("Reset").clicked() {
                forward.push(WheelMsg::Reset);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Notation:");
            let mut notation = view.notation;
            for c in NotationConvention::ALL {
                ui.selectable_value(&mut notation, c, c.to_string());
            }
            if notation != view.notation {
                forward.push(WheelMsg::SetNotation { notation });
            }
        });
    }
}
