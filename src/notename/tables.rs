//! Fixed name tables, one complete set per [NotationConvention].
//!
//! The two sets are kept side by side instead of deriving one from the other: solfège and letter
//! names differ in structure ("SOL#" has no one-to-one character mapping to "G#"), so every
//! lookup goes through the table of the requested convention.

use crate::util::mod12::{PitchClass, Sector};

use super::NotationConvention;

pub struct NoteTables {
    /// Internal names of the sectors, clockwise from the top. Solfège names are stored in upper
    /// case and need [super::title_case] before display.
    pub fifths: [&'static str; 12],

    /// Labels of the outer ring, with both spellings where both are in common use.
    pub ring: [&'static str; 12],

    /// Labels of the middle ring: the relative minor of the key in the same sector.
    pub relative_minor: [&'static str; 12],

    /// Chromatic names with sharps, in the same (internal) case as `fifths`.
    pub sharps: [&'static str; 12],

    /// Chromatic names with flats, already in display case.
    pub flats: [&'static str; 12],
}

pub static SOLFEGE: NoteTables = NoteTables {
    fifths: [
        "DO", "SOL", "RE", "LA", "MI", "SI", "FA#", "DO#", "SOL#", "RE#", "LA#", "FA",
    ],
    ring: [
        "Do", "Sol", "Re", "La", "Mi", "Si", "Solb/Fa#", "Reb/Do#", "Lab/Sol#", "Mib/Re#",
        "Sib/La#", "Fa",
    ],
    relative_minor: [
        "Lam",
        "Mim",
        "Sim",
        "Fa#m",
        "Do#m",
        "Sol#m",
        "Mibm/Re#m",
        "Sibm",
        "Fam",
        "Dom",
        "Solm",
        "Rem",
    ],
    sharps: [
        "DO", "DO#", "RE", "RE#", "MI", "FA", "FA#", "SOL", "SOL#", "LA", "LA#", "SI",
    ],
    flats: [
        "Do", "Reb", "Re", "Mib", "Mi", "Fa", "Solb", "Sol", "Lab", "La", "Sib", "Si",
    ],
};

pub static LETTER: NoteTables = NoteTables {
    fifths: [
        "C", "G", "D", "A", "E", "B", "F#", "C#", "G#", "D#", "A#", "F",
    ],
    ring: [
        "C", "G", "D", "A", "E", "B", "Gb/F#", "Db/C#", "Ab/G#", "Eb/D#", "Bb/A#", "F",
    ],
    relative_minor: [
        "Am", "Em", "Bm", "F#m", "C#m", "G#m", "Ebm/D#m", "Bbm", "Fm", "Cm", "Gm", "Dm",
    ],
    sharps: [
        "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    ],
    flats: [
        "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
    ],
};

/// Upper case solfège syllables and their display form.
pub const SOLFEGE_BASES: [(&str, &str); 7] = [
    ("DO", "Do"),
    ("RE", "Re"),
    ("MI", "Mi"),
    ("FA", "Fa"),
    ("SOL", "Sol"),
    ("LA", "La"),
    ("SI", "Si"),
];

pub const ROMANS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Roman numerals cased by triad quality, as printed above a chord table.
pub const ROMANS_BY_QUALITY: [&str; 7] = ["I", "ii", "iii", "IV", "V", "vi", "vii°"];

impl NoteTables {
    pub fn fifths_name(&self, sector: Sector) -> &'static str {
        self.fifths[sector.index()]
    }

    pub fn ring_label(&self, sector: Sector) -> &'static str {
        self.ring[sector.index()]
    }

    pub fn relative_minor_label(&self, sector: Sector) -> &'static str {
        self.relative_minor[sector.index()]
    }

    pub fn sharp_name(&self, pc: PitchClass) -> &'static str {
        self.sharps[pc.index()]
    }

    pub fn flat_name(&self, pc: PitchClass) -> &'static str {
        self.flats[pc.index()]
    }

    /// Find the pitch class of an internal or display name in this table set.
    pub fn lookup(&self, name: &str) -> Option<PitchClass> {
        let upper = name.to_uppercase();
        self.sharps
            .iter()
            .position(|n| n.to_uppercase() == upper)
            .or_else(|| self.flats.iter().position(|n| n.to_uppercase() == upper))
            .map(|i| PitchClass::new(i as i64))
    }
}

/// Look a name up in both conventions, solfège first. Returns [None] for anything else.
pub fn pitch_class_of(name: &str) -> Option<(PitchClass, NotationConvention)> {
    SOLFEGE
        .lookup(name)
        .map(|pc| (pc, NotationConvention::Solfege))
        .or_else(|| {
            LETTER
                .lookup(name)
                .map(|pc| (pc, NotationConvention::Letter))
        })
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fifths_tables_match_chromatic_tables() {
        for tables in [&SOLFEGE, &LETTER] {
            for sector in Sector::all() {
                assert_eq!(
                    tables.fifths_name(sector),
                    tables.sharp_name(sector.pitch_class())
                );
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(
            pitch_class_of("SOL#"),
            Some((PitchClass::new(8), NotationConvention::Solfege))
        );
        assert_eq!(
            pitch_class_of("Sib"),
            Some((PitchClass::new(10), NotationConvention::Solfege))
        );
        assert_eq!(
            pitch_class_of("Eb"),
            Some((PitchClass::new(3), NotationConvention::Letter))
        );
        assert_eq!(pitch_class_of("H"), None);
    }

    #[test]
    fn test_relative_minor_labels_are_a_minor_third_below() {
        for tables in [&SOLFEGE, &LETTER] {
            for sector in Sector::all() {
                let label = tables.relative_minor_label(sector);
                let first = label.split('/').next().unwrap_or(label);
                let name = first.strip_suffix('m').unwrap_or(first);
                let (pc, _) = pitch_class_of(name).unwrap();
                assert_eq!(pc, sector.pitch_class().transpose(-3));
            }
        }
    }
}
