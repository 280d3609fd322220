use std::fmt;

use crate::{
    notename::tables::{ROMANS, ROMANS_BY_QUALITY},
    util::mod12::{add_mod12, wrap7, PitchClass, Sector},
};

/// Semitones above the tonic of the seven degrees of the major scale.
pub const MAJOR_DEGREES: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Triad qualities on the degrees I to VII of any major key.
pub const MAJOR_QUALITIES: [ChordQuality; 7] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Minor,
    ChordQuality::Major,
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Diminished,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScaleDegree(u8);

impl ScaleDegree {
    pub const ALL: [ScaleDegree; 7] = [
        ScaleDegree(0),
        ScaleDegree(1),
        ScaleDegree(2),
        ScaleDegree(3),
        ScaleDegree(4),
        ScaleDegree(5),
        ScaleDegree(6),
    ];

    /// The `n`-th degree counted from zero, wrapping around after VII.
    pub fn nth(n: i64) -> Self {
        ScaleDegree(wrap7(n))
    }

    /// Degrees as they are usually counted, starting at one.
    pub fn from_ordinal(ordinal: i64) -> Self {
        Self::nth(ordinal - 1)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn semitones(&self) -> u8 {
        MAJOR_DEGREES[self.index()]
    }

    pub fn quality(&self) -> ChordQuality {
        MAJOR_QUALITIES[self.index()]
    }

    pub fn roman(&self) -> &'static str {
        ROMANS[self.index()]
    }

    /// The numeral with the case of the triad quality: "ii", "IV", "vii°".
    pub fn roman_by_quality(&self) -> &'static str {
        ROMANS_BY_QUALITY[self.index()]
    }
}

impl fmt::Display for ScaleDegree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.roman())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
}

impl ChordQuality {
    pub fn suffix(&self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "°",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triad {
    pub degree: ScaleDegree,
    pub root: PitchClass,
    pub quality: ChordQuality,
}

impl Triad {
    /// The chord symbol, given the display name of the chord's root.
    pub fn symbol(&self, root_name: &str) -> String {
        format!("{}{}", root_name, self.quality.suffix())
    }
}

pub fn major_scale(root: PitchClass) -> [PitchClass; 7] {
    ScaleDegree::ALL.map(|d| PitchClass::new(add_mod12(root.index() as u8, d.semitones()) as i64))
}

pub fn diatonic_triads(root: PitchClass) -> [Triad; 7] {
    let scale = major_scale(root);
    ScaleDegree::ALL.map(|degree| Triad {
        degree,
        root: scale[degree.index()],
        quality: degree.quality(),
    })
}

pub fn relative_minor(root: PitchClass) -> PitchClass {
    root.transpose(9)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    Tonic,
    Subdominant,
    Dominant,
}

impl Function {
    pub const ALL: [Function; 3] = [Function::Tonic, Function::Subdominant, Function::Dominant];

    /// The neighbour of the key's sector holding this function: the subdominant is one fifth
    /// down, the dominant one fifth up.
    pub fn sector(&self, key: Sector) -> Sector {
        match self {
            Function::Tonic => key,
            Function::Subdominant => key.offset(-1),
            Function::Dominant => key.offset(1),
        }
    }

    pub fn degree(&self) -> ScaleDegree {
        match self {
            Function::Tonic => ScaleDegree::from_ordinal(1),
            Function::Subdominant => ScaleDegree::from_ordinal(4),
            Function::Dominant => ScaleDegree::from_ordinal(5),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Function::Tonic => "Tonic",
            Function::Subdominant => "Subdominant",
            Function::Dominant => "Dominant",
        }
    }
}

/// Tonic, subdominant and dominant of the major key in `key`, as sectors of the wheel.
pub fn functional_harmony(key: Sector) -> [(Function, Sector); 3] {
    Function::ALL.map(|f| (f, f.sector(key)))
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_c_major() {
        let scale = major_scale(PitchClass::C);
        assert_eq!(scale, [0, 2, 4, 5, 7, 9, 11].map(PitchClass::new));

        let qualities = diatonic_triads(PitchClass::C).map(|t| t.quality);
        assert_eq!(qualities, MAJOR_QUALITIES);
    }

    #[test]
    fn test_every_key() {
        for n in 0..12 {
            let root = PitchClass::new(n);
            let scale = major_scale(root);
            assert_eq!(scale[0], root);
            for (pc, offset) in scale.iter().zip(MAJOR_DEGREES) {
                assert_eq!(root.interval_to(*pc), offset);
            }

            let triads = diatonic_triads(root);
            assert_eq!(triads[0].quality, ChordQuality::Major);
            assert_eq!(triads[6].quality, ChordQuality::Diminished);
            assert_eq!(triads[5].root, relative_minor(root));
        }
    }

    #[test]
    fn test_symbols() {
        let triads = diatonic_triads(PitchClass::C);
        let names = ["C", "D", "E", "F", "G", "A", "B"];
        let symbols: Vec<String> = triads
            .iter()
            .zip(names)
            .map(|(t, n)| t.symbol(n))
            .collect();
        assert_eq!(symbols, ["C", "Dm", "Em", "F", "G", "Am", "B°"]);
    }

    #[test]
    fn test_degrees_wrap() {
        assert_eq!(ScaleDegree::nth(7), ScaleDegree::nth(0));
        assert_eq!(ScaleDegree::nth(-1).roman(), "VII");
        assert_eq!(ScaleDegree::from_ordinal(4).roman_by_quality(), "IV");
        assert_eq!(ScaleDegree::from_ordinal(7).roman_by_quality(), "vii°");
    }

    #[test]
    fn test_functional_harmony_matches_scale() {
        for key in Sector::all() {
            let scale = major_scale(key.pitch_class());
            for (function, sector) in functional_harmony(key) {
                assert_eq!(sector.pitch_class(), scale[function.degree().index()]);
            }
        }
    }
}
