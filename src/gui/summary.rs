use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{msg::WheelMsg, session::WheelView};

use super::r#trait::GuiShow;

/// The key and its scale, one degree per line.
pub struct ScaleSummary;

impl GuiShow for ScaleSummary {
    fn show(&mut self, ui: &mut egui::Ui, view: &WheelView, _forward: &mut Vec<WheelMsg>) {
        ui.heading(format!("{} major", view.key_name));
        ui.separator();
        egui::Grid::new("scale summary")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                for (triad, name) in view.triads.iter().zip(view.scale_names.iter()) {
                    ui.strong(triad.degree.roman());
                    ui.label(name.to_string());
                    ui.end_row();
                }
            });
        ui.separator();
        for (function, _, name) in view.functions.iter() {
            ui.label(format!("{}: {}", function.label(), name));
        }
    }
}

/// The diatonic triads of the key, under their numerals.
pub struct ChordTable;

impl GuiShow for ChordTable {
    fn show(&mut self, ui: &mut egui::Ui, view: &WheelView, _forward: &mut Vec<WheelMsg>) {
        TableBuilder::new(ui)
            .id_salt("chord table")
            .striped(true)
            .columns(Column::auto().at_least(56.0), 7)
            .header(20.0, |mut header| {
                for triad in view.triads.iter() {
                    header.col(|ui| {
                        ui.strong(triad.degree.roman_by_quality());
                    });
                }
            })
            .body(|mut body| {
                body.row(24.0, |mut row| {
                    for symbol in view.chord_symbols.iter() {
                        row.col(|ui| {
                            ui.label(symbol);
                        });
                    }
                });
            });
    }
}
