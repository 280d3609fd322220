use eframe::egui::{self, pos2, vec2};

use crate::{
    angle::STEP_DEGREES,
    msg::WheelMsg,
    session::WheelView,
    wheel::{DegreeWindow, Ring},
};

use super::{palette, r#trait::GuiShow};

// All radii are relative to [WheelWindow::radius].
const OUTER_LABEL_RADIUS: f32 = 0.84;
const MIDDLE_LABEL_RADIUS: f32 = 0.60;
const YELLOW_RING_RADIUS: f32 = 0.86;
const SPOKE_OUTER_RADIUS: f32 = 0.9;
const SPOKE_INNER_RADIUS: f32 = 0.2;
const WEDGE_OUTER_RADIUS: f32 = 0.98;
const WEDGE_INNER_RADIUS: f32 = 0.37;

/// Opening of the pointer wedge, in degrees. It covers the sectors of IV and V on either side of
/// the key.
const WEDGE_WIDTH: f32 = 120.0;
/// The wedge is filled with convex slices of this many degrees.
const WEDGE_SLICE: f32 = 2.0;

const MARGIN: f32 = 16.0;
const NUMERAL_MARGIN: f32 = 50.0;

pub struct WheelWindow {
    pub radius: f32,
    pub show_numerals: bool,
}

/// The point at distance `r` from `center`, `angle` degrees clockwise from straight up.
fn polar(center: egui::Pos2, r: f32, angle: f32) -> egui::Pos2 {
    let rad = (angle - 90.0).to_radians();
    center + vec2(r * rad.cos(), r * rad.sin())
}

fn window_size(ring: Ring) -> egui::Vec2 {
    match ring {
        Ring::Outer => vec2(100.0, 38.0),
        Ring::Middle => vec2(86.0, 32.0),
    }
}

impl WheelWindow {
    pub fn new(radius: f32, show_numerals: bool) -> Self {
        Self {
            radius,
            show_numerals,
        }
    }

    fn ring_radius(&self, ring: Ring) -> f32 {
        self.radius
            * match ring {
                Ring::Outer => OUTER_LABEL_RADIUS,
                Ring::Middle => MIDDLE_LABEL_RADIUS,
            }
    }

    /// Where the label of `sector` sits on the screen, given the current rotation.
    fn label_angle(&self, view: &WheelView, sector_index: usize) -> f32 {
        (sector_index as f64 * STEP_DEGREES + view.angle) as f32
    }

    fn draw_disc(&self, painter: &egui::Painter, center: egui::Pos2, view: &WheelView) {
        let stroke_width = (self.radius * 0.012).max(2.0);
        painter.circle(
            center,
            self.radius,
            palette::DISC,
            egui::Stroke::new(stroke_width, palette::BLUE),
        );
        painter.circle_stroke(
            center,
            self.radius * YELLOW_RING_RADIUS,
            egui::Stroke::new(stroke_width * 0.6, palette::YELLOW),
        );
        for i in 0..12 {
            let angle = self.label_angle(view, i);
            painter.line_segment(
                [
                    polar(center, self.radius * SPOKE_OUTER_RADIUS, angle),
                    polar(center, self.radius * SPOKE_INNER_RADIUS, angle),
                ],
                egui::Stroke::new(stroke_width * 0.6, palette::SPOKE),
            );
        }
    }

    fn draw_wedge(&self, painter: &egui::Painter, center: egui::Pos2) {
        let fill = palette::translucent(palette::IVORY, 200);
        let r_out = self.radius * WEDGE_OUTER_RADIUS;
        let r_in = self.radius * WEDGE_INNER_RADIUS;
        let mut a = -WEDGE_WIDTH / 2.0;
        while a < WEDGE_WIDTH / 2.0 {
            let b = (a + WEDGE_SLICE).min(WEDGE_WIDTH / 2.0);
            painter.add(egui::Shape::convex_polygon(
                vec![
                    polar(center, r_out, a),
                    polar(center, r_out, b),
                    polar(center, r_in, b),
                    polar(center, r_in, a),
                ],
                fill,
                egui::Stroke::NONE,
            ));
            a = b;
        }
    }

    fn draw_window(
        &self,
        painter: &egui::Painter,
        center: egui::Pos2,
        view: &WheelView,
        window: &DegreeWindow,
    ) {
        let angle = self.label_angle(view, window.sector.index());
        let pos = polar(center, self.ring_radius(window.ring), angle);
        let size = window_size(window.ring);
        let rect = egui::Rect::from_center_size(pos, size);
        painter.rect(
            rect,
            egui::CornerRadius::same(10),
            palette::translucent(palette::GREEN, 60),
            egui::Stroke::new(1.5, palette::BACKGROUND),
            egui::StrokeKind::Middle,
        );
        if self.show_numerals {
            painter.text(
                pos2(pos.x, pos.y - (size.y / 2.0 + 8.0)),
                egui::Align2::CENTER_BOTTOM,
                window.degree.roman_by_quality(),
                egui::FontId::proportional(14.0),
                palette::RED,
            );
        }
    }

    fn draw_labels(&self, painter: &egui::Painter, center: egui::Pos2, view: &WheelView) {
        for labels in view.ring.iter() {
            let angle = self.label_angle(view, labels.sector.index());
            painter.text(
                polar(center, self.ring_radius(Ring::Outer), angle),
                egui::Align2::CENTER_CENTER,
                labels.major,
                egui::FontId::proportional(18.0),
                palette::INK,
            );
            painter.text(
                polar(center, self.ring_radius(Ring::Middle), angle),
                egui::Align2::CENTER_CENTER,
                labels.minor,
                egui::FontId::proportional(14.0),
                palette::INK,
            );
        }
    }
}

impl GuiShow for WheelWindow {
    fn show(&mut self, ui: &mut egui::Ui, view: &WheelView, forward: &mut Vec<WheelMsg>) {
        let width = 2.0 * (self.radius + MARGIN);
        let height = 2.0 * self.radius + MARGIN + NUMERAL_MARGIN;
        let (response, painter) = ui.allocate_painter(vec2(width, height), egui::Sense::drag());
        let center = pos2(
            response.rect.center().x,
            response.rect.top() + MARGIN + self.radius,
        );

        if response.dragged() {
            if let Some(pointer) = response.interact_pointer_pos() {
                let offset = pointer - center;
                forward.push(WheelMsg::DragTo {
                    dx: offset.x as f64,
                    dy: offset.y as f64,
                });
            }
        }
        if response.drag_stopped() {
            forward.push(WheelMsg::Release);
        }

        self.draw_disc(&painter, center, view);
        self.draw_wedge(&painter, center);
        for window in view.windows.iter() {
            self.draw_window(&painter, center, view, window);
        }
        self.draw_labels(&painter, center, view);

        response.on_hover_text(view.caption());
    }
}
