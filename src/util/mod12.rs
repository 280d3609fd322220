use std::{
    cmp::PartialOrd,
    fmt,
    ops::{Add, Rem, Sub},
};

use num_integer::Integer;

pub fn add_mod12<T>(l: T, r: T) -> T
where
    T: Rem<Output = T> + Add<Output = T> + Sub<Output = T> + PartialOrd + From<u8>,
{
    let x = (l % T::from(12)) + (r % T::from(12));
    if x >= T::from(12) {
        x - T::from(12)
    } else {
        x
    }
}

pub fn sub_mod12<T>(l: T, r: T) -> T
where
    T: Rem<Output = T> + Add<Output = T> + Sub<Output = T> + PartialOrd + From<u8>,
{
    let a = l % T::from(12);
    let b = r % T::from(12);
    if a >= b {
        a - b
    } else {
        T::from(12) - b + a
    }
}

/// Reduce any integer into `0..12`, also for negative inputs.
pub fn wrap12(n: i64) -> u8 {
    n.mod_floor(&12) as u8
}

/// Reduce any integer into `0..7`, also for negative inputs.
pub fn wrap7(n: i64) -> u8 {
    n.mod_floor(&7) as u8
}

/// A chromatic pitch class, counted in semitones above C.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: Self = PitchClass(0);

    pub fn new(semitones: i64) -> Self {
        PitchClass(wrap12(semitones))
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn transpose(self, semitones: i64) -> Self {
        Self::new(self.0 as i64 + semitones)
    }

    /// The number of semitones one has to go up from `self` to reach `other`, in `0..12`.
    pub fn interval_to(self, other: Self) -> u8 {
        sub_mod12(other.0, self.0)
    }

    /// The pitch class reached after stacking `n` fifths on C.
    pub fn from_fifths(n: i64) -> Self {
        Self::new(7 * n)
    }

    /// Inverse of [PitchClass::from_fifths]. Seven is its own inverse modulo twelve.
    pub fn fifths_position(self) -> Sector {
        Sector::new(7 * self.0 as i64)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A position on the circle of fifths. Sector 0 sits at the top of the wheel and holds C; every
/// step clockwise adds a fifth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sector(u8);

impl Sector {
    pub const TOP: Self = Sector(0);

    pub fn new(index: i64) -> Self {
        Sector(wrap12(index))
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn offset(self, steps: i64) -> Self {
        Self::new(self.0 as i64 + steps)
    }

    pub fn pitch_class(self) -> PitchClass {
        PitchClass::from_fifths(self.0 as i64)
    }

    pub fn all() -> impl Iterator<Item = Sector> {
        (0..12).map(Sector)
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap12(-1), 11);
        assert_eq!(wrap12(-12), 0);
        assert_eq!(wrap12(25), 1);
        assert_eq!(wrap7(-1), 6);
        assert_eq!(wrap7(14), 0);
    }

    #[test]
    fn test_add_sub_mod12() {
        assert_eq!(add_mod12(7u8, 9u8), 4);
        assert_eq!(sub_mod12(2u8, 7u8), 7);
        assert_eq!(sub_mod12(7u8, 2u8), 5);
    }

    #[test]
    fn test_sectors_and_pitch_classes() {
        let expected = [0, 7, 2, 9, 4, 11, 6, 1, 8, 3, 10, 5];
        for (sector, pc) in Sector::all().zip(expected) {
            assert_eq!(sector.pitch_class(), PitchClass::new(pc));
            assert_eq!(sector.pitch_class().fifths_position(), sector);
        }
        assert_eq!(Sector::new(-1), Sector::new(11));
        assert_eq!(Sector::TOP.offset(-13), Sector::new(11));
    }

    #[test]
    fn test_interval_to() {
        let g = PitchClass::new(7);
        assert_eq!(g.interval_to(PitchClass::C), 5);
        assert_eq!(PitchClass::C.interval_to(g), 7);
        assert_eq!(g.transpose(-19), PitchClass::C);
    }
}
