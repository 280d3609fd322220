use std::borrow::Cow;

use crate::util::mod12::{PitchClass, Sector};

use super::{present, NotationConvention};

/// Sectors whose keys are conventionally written with flats: Gb, Db, Ab, Eb, Bb.
pub const FLAT_SIDE_SECTORS: [usize; 5] = [6, 7, 8, 9, 10];

impl Sector {
    pub fn is_flat_side(&self) -> bool {
        FLAT_SIDE_SECTORS.contains(&self.index())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accidentals {
    Sharps,
    Flats,
}

impl Accidentals {
    /// How to spell the notes of the major key in `key`. F major needs its B flat, so all keys
    /// from sector 6 onwards use flats.
    pub fn for_key(key: Sector) -> Self {
        if key.index() >= 6 {
            Accidentals::Flats
        } else {
            Accidentals::Sharps
        }
    }

    pub fn name(&self, pc: PitchClass, convention: NotationConvention) -> Cow<'static, str> {
        match self {
            Accidentals::Flats => Cow::Borrowed(convention.tables().flat_name(pc)),
            Accidentals::Sharps => present(pc, convention),
        }
    }
}

/// Spell `pc` for display in `sector`: flats on the flat side of the circle, sharps (or the
/// natural name) everywhere else.
pub fn spell(pc: PitchClass, sector: Sector, convention: NotationConvention) -> Cow<'static, str> {
    let accidentals = if sector.is_flat_side() {
        Accidentals::Flats
    } else {
        Accidentals::Sharps
    };
    accidentals.name(pc, convention)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_spell_in_own_sector() {
        let expected_solfege = [
            "Do", "Sol", "Re", "La", "Mi", "Si", "Solb", "Reb", "Lab", "Mib", "Sib", "Fa",
        ];
        let expected_letter = [
            "C", "G", "D", "A", "E", "B", "Gb", "Db", "Ab", "Eb", "Bb", "F",
        ];
        for sector in Sector::all() {
            let pc = sector.pitch_class();
            assert_eq!(
                spell(pc, sector, NotationConvention::Solfege),
                expected_solfege[sector.index()]
            );
            assert_eq!(
                spell(pc, sector, NotationConvention::Letter),
                expected_letter[sector.index()]
            );
        }
    }

    #[test]
    fn test_black_keys_follow_the_sector() {
        for convention in NotationConvention::ALL {
            for pc in [1, 3, 6, 8, 10].map(PitchClass::new) {
                for sector in Sector::all() {
                    let name = spell(pc, sector, convention);
                    if sector.is_flat_side() {
                        assert!(name.ends_with('b'), "{name} in sector {sector}");
                    } else {
                        assert!(name.ends_with('#'), "{name} in sector {sector}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_key_accidentals() {
        assert_eq!(Accidentals::for_key(Sector::new(5)), Accidentals::Sharps);
        assert_eq!(Accidentals::for_key(Sector::new(6)), Accidentals::Flats);
        assert_eq!(Accidentals::for_key(Sector::new(11)), Accidentals::Flats);
        assert_eq!(
            Accidentals::Flats.name(PitchClass::new(10), NotationConvention::Letter),
            "Bb"
        );
    }

    #[test]
    fn test_sharp_names_are_the_presented_names() {
        for convention in NotationConvention::ALL {
            for n in 0..12 {
                let pc = PitchClass::new(n);
                assert_eq!(Accidentals::Sharps.name(pc, convention), present(pc, convention));
            }
        }
        assert_eq!(
            Accidentals::Sharps.name(PitchClass::new(8), NotationConvention::Solfege),
            "Sol#"
        );
    }
}
