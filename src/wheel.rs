//! What is printed on the two rings of the wheel, and where the windows of the fixed pointer
//! wedge look through to.

use crate::{
    notename::NotationConvention,
    scale::ScaleDegree,
    util::mod12::{PitchClass, Sector},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ring {
    /// Major keys.
    Outer,
    /// Relative minors of the major key in the same sector.
    Middle,
}

impl Ring {
    /// The pitch class of the chord printed in `sector` on this ring.
    pub fn pitch_class(&self, sector: Sector) -> PitchClass {
        match self {
            Ring::Outer => sector.pitch_class(),
            Ring::Middle => crate::scale::relative_minor(sector.pitch_class()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectorLabels {
    pub sector: Sector,
    pub major: &'static str,
    pub minor: &'static str,
}

pub fn ring_labels(convention: NotationConvention) -> [SectorLabels; 12] {
    let tables = convention.tables();
    std::array::from_fn(|i| {
        let sector = Sector::new(i as i64);
        SectorLabels {
            sector,
            major: tables.ring_label(sector),
            minor: tables.relative_minor_label(sector),
        }
    })
}

/// One window of the pointer wedge: the degree it shows, and the ring and sector of the wheel it
/// uncovers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DegreeWindow {
    pub degree: ScaleDegree,
    pub ring: Ring,
    pub sector: Sector,
}

/// The seven windows for the key in `root`.
///
/// The diatonic triads of a major key sit on three adjacent sectors of the wheel: the majors I, IV
/// and V on the outer ring at the key and its two neighbours, and the minors ii, iii and vi on the
/// middle ring below them. Only vii° is one sector further out, as the relative minor of the
/// second neighbour clockwise.
pub fn degree_windows(root: Sector) -> [DegreeWindow; 7] {
    let window = |ordinal, ring, offset| DegreeWindow {
        degree: ScaleDegree::from_ordinal(ordinal),
        ring,
        sector: root.offset(offset),
    };
    [
        window(1, Ring::Outer, 0),
        window(2, Ring::Middle, -1),
        window(3, Ring::Middle, 1),
        window(4, Ring::Outer, -1),
        window(5, Ring::Outer, 1),
        window(6, Ring::Middle, 0),
        window(7, Ring::Middle, 2),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scale::diatonic_triads;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_windows_agree_with_scale() {
        for root in Sector::all() {
            let triads = diatonic_triads(root.pitch_class());
            for (window, triad) in degree_windows(root).iter().zip(triads) {
                assert_eq!(window.degree, triad.degree);
                assert_eq!(window.ring.pitch_class(window.sector), triad.root);
            }
        }
    }

    #[test]
    fn test_ring_labels() {
        let labels = ring_labels(NotationConvention::Letter);
        assert_eq!(labels[0].major, "C");
        assert_eq!(labels[0].minor, "Am");
        assert_eq!(labels[6].major, "Gb/F#");
        assert_eq!(labels[6].minor, "Ebm/D#m");

        let labels = ring_labels(NotationConvention::Solfege);
        assert_eq!(labels[11].major, "Fa");
        assert_eq!(labels[11].minor, "Rem");
        for (i, l) in labels.iter().enumerate() {
            assert_eq!(l.sector.index(), i);
        }
    }
}
