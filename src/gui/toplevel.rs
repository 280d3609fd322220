use eframe::egui;

use crate::{
    config::Config,
    msg::{HandleMsg, WheelMsg},
    session::WheelSession,
};

use super::{
    controls::Controls,
    palette,
    r#trait::GuiShow,
    summary::{ChordTable, ScaleSummary},
    wheel::WheelWindow,
};

pub struct Toplevel {
    session: WheelSession,
    wheel: WheelWindow,
    summary: ScaleSummary,
    controls: Controls,
    chords: ChordTable,
    outbox: Vec<WheelMsg>,
}

impl Toplevel {
    pub fn new(config: &Config) -> Self {
        Self {
            session: WheelSession::from_config(config),
            wheel: WheelWindow::new(config.wheel_radius, config.show_numerals),
            summary: ScaleSummary,
            controls: Controls,
            chords: ChordTable,
            outbox: vec![],
        }
    }

    fn keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowLeft) {
                self.outbox.push(WheelMsg::Step { delta: -1 });
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                self.outbox.push(WheelMsg::Step { delta: 1 });
            }
            if i.key_pressed(egui::Key::N) {
                self.outbox.push(WheelMsg::ToggleNotation);
            }
        });
    }
}

impl eframe::App for Toplevel {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = self.session.view();

        self.keyboard_shortcuts(ctx);

        egui::SidePanel::left("summary").show(ctx, |ui| {
            self.summary.show(ui, &view, &mut self.outbox);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(palette::BACKGROUND))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    self.wheel.show(ui, &view, &mut self.outbox);
                    self.controls.show(ui, &view, &mut self.outbox);
                    ui.add_space(8.0);
                    self.chords.show(ui, &view, &mut self.outbox);
                });
            });

        if !self.outbox.is_empty() {
            ctx.request_repaint();
        }
        for msg in self.outbox.drain(..) {
            self.session.handle_msg(msg);
        }
    }
}
