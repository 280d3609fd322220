use std::borrow::Cow;

use crate::{
    angle,
    config::Config,
    msg::{HandleMsg, WheelMsg},
    notename::{
        spelling::{spell, Accidentals},
        NotationConvention,
    },
    scale::{diatonic_triads, functional_harmony, major_scale, Function, Triad},
    util::mod12::{PitchClass, Sector},
    wheel::{degree_windows, ring_labels, DegreeWindow, SectorLabels},
};

/// The only mutable state of the wheel: how far it is turned, and which names are printed on it.
/// Everything else is recomputed from these two values by [WheelSession::view].
#[derive(Clone, Debug, PartialEq)]
pub struct WheelSession {
    angle: f64,
    notation: NotationConvention,
}

impl Default for WheelSession {
    fn default() -> Self {
        Self::new(NotationConvention::default())
    }
}

impl WheelSession {
    pub fn new(notation: NotationConvention) -> Self {
        Self {
            angle: 0.0,
            notation,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.notation)
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn notation(&self) -> NotationConvention {
        self.notation
    }

    /// The key under the pointer. This already changes while the wheel is being dragged.
    pub fn root(&self) -> Sector {
        angle::angle_to_index(self.angle)
    }

    fn set_angle(&mut self, angle: f64) {
        let old_root = self.root();
        self.angle = angle::normalize(angle);
        let new_root = self.root();
        if old_root != new_root {
            tracing::debug!(from = %old_root, to = %new_root, "key changed");
        }
    }

    /// Follow the pointer without snapping, so that the wheel turns smoothly.
    pub fn update_continuous(&mut self, angle: f64) {
        self.set_angle(angle);
    }

    pub fn drag_to(&mut self, dx: f64, dy: f64) {
        self.set_angle(angle::angle_from_pointer(dx, dy));
    }

    pub fn snap_on_release(&mut self) {
        let snapped = angle::snap(self.angle);
        tracing::debug!(from = self.angle, to = snapped, "snapped");
        self.set_angle(snapped);
    }

    pub fn select_key(&mut self, sector: Sector) {
        self.set_angle(angle::index_to_angle(sector));
    }

    pub fn step(&mut self, delta: i64) {
        self.set_angle(angle::step_angle(self.angle, delta));
    }

    pub fn reset(&mut self) {
        self.set_angle(0.0);
    }

    pub fn set_notation(&mut self, notation: NotationConvention) {
        self.notation = notation;
    }

    pub fn toggle_notation(&mut self) {
        self.notation = self.notation.toggled();
    }

    pub fn view(&self) -> WheelView {
        WheelView::new(self.angle, self.notation)
    }
}

impl HandleMsg<WheelMsg> for WheelSession {
    fn handle_msg(&mut self, msg: WheelMsg) {
        match msg {
            WheelMsg::DragTo { dx, dy } => self.drag_to(dx, dy),
            WheelMsg::Rotate { angle } => self.update_continuous(angle),
            WheelMsg::Release => self.snap_on_release(),
            WheelMsg::SelectKey { sector } => self.select_key(sector),
            WheelMsg::Step { delta } => self.step(delta),
            WheelMsg::Reset => self.reset(),
            WheelMsg::SetNotation { notation } => self.set_notation(notation),
            WheelMsg::ToggleNotation => self.toggle_notation(),
        }
    }
}

/// Everything there is to display for one state of the wheel.
#[derive(Clone, Debug, PartialEq)]
pub struct WheelView {
    pub angle: f64,
    pub notation: NotationConvention,
    pub root: Sector,
    pub root_pitch_class: PitchClass,
    pub key_name: Cow<'static, str>,
    pub scale: [PitchClass; 7],
    pub scale_names: [Cow<'static, str>; 7],
    pub triads: [Triad; 7],
    pub chord_symbols: [String; 7],
    pub ring: [SectorLabels; 12],
    pub windows: [DegreeWindow; 7],
    pub functions: [(Function, Sector, Cow<'static, str>); 3],
    /// The key of every sector, spelled as it is written on its own side of the circle.
    pub key_names: [Cow<'static, str>; 12],
}

impl WheelView {
    pub fn new(angle: f64, notation: NotationConvention) -> Self {
        let root = angle::angle_to_index(angle);
        let root_pitch_class = root.pitch_class();
        let accidentals = Accidentals::for_key(root);
        let scale = major_scale(root_pitch_class);
        let scale_names = scale.map(|pc| accidentals.name(pc, notation));
        let triads = diatonic_triads(root_pitch_class);
        let chord_symbols = std::array::from_fn(|i| triads[i].symbol(&scale_names[i]));
        let functions = functional_harmony(root)
            .map(|(f, sector)| (f, sector, scale_names[f.degree().index()].clone()));
        let key_names = std::array::from_fn(|i| {
            let sector = Sector::new(i as i64);
            spell(sector.pitch_class(), sector, notation)
        });

        Self {
            angle: angle::normalize(angle),
            notation,
            root,
            root_pitch_class,
            key_name: accidentals.name(root_pitch_class, notation),
            scale,
            scale_names,
            triads,
            chord_symbols,
            ring: ring_labels(notation),
            windows: degree_windows(root),
            functions,
            key_names,
        }
    }

    /// "Tonic: C · Subdominant: F · Dominant: G"
    pub fn caption(&self) -> String {
        self.functions
            .iter()
            .map(|(f, _, name)| format!("{}: {}", f.label(), name))
            .collect::<Vec<_>>()
            .join(" · ")
    }
}
