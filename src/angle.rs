//! Conversion between the physical orientation of the wheel and the key under the pointer.
//!
//! Angles are in degrees, clockwise, with 0 meaning "sector 0 at the top". The pointer is fixed
//! while the wheel turns underneath it, so turning the wheel clockwise brings the sector
//! *before* the current one under the pointer.

use crate::util::mod12::{wrap12, Sector};

pub const SECTORS: i64 = 12;
pub const STEP_DEGREES: f64 = 360.0 / SECTORS as f64;

pub fn normalize(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid may round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// The number of whole detents nearest to `angle`, in `0..=12`.
pub fn steps(angle: f64) -> i64 {
    (normalize(angle) / STEP_DEGREES).round() as i64
}

pub fn angle_to_index(angle: f64) -> Sector {
    Sector::new(-steps(angle))
}

pub fn index_to_angle(sector: Sector) -> f64 {
    wrap12(-(sector.index() as i64)) as f64 * STEP_DEGREES
}

/// The detent nearest to `angle`, in `[0, 360)`.
pub fn snap(angle: f64) -> f64 {
    (steps(angle) * STEP_DEGREES as i64).rem_euclid(360) as f64
}

/// Move `delta` detents clockwise from the detent nearest to `angle`.
pub fn step_angle(angle: f64, delta: i64) -> f64 {
    ((steps(angle) + delta) * STEP_DEGREES as i64).rem_euclid(360) as f64
}

/// The angle of a pointer at offset `(dx, dy)` from the centre of the wheel, in screen
/// coordinates (y pointing down). Straight up is 0, increasing clockwise.
pub fn angle_from_pointer(dx: f64, dy: f64) -> f64 {
    normalize(dy.atan2(dx).to_degrees() + 90.0)
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip() {
        for n in -30..30 {
            let sector = Sector::new(n);
            assert_eq!(angle_to_index(index_to_angle(sector)), sector);
        }
    }

    #[test]
    fn test_periodicity() {
        let mut a = -725.0;
        while a < 725.0 {
            assert_eq!(angle_to_index(a), angle_to_index(a + 360.0));
            a += 7.3;
        }
    }

    #[test]
    fn test_clockwise_turn_moves_key_backwards() {
        for n in 0..12 {
            let a = index_to_angle(Sector::new(n));
            assert_eq!(angle_to_index(a + STEP_DEGREES), Sector::new(n - 1));
            assert_eq!(angle_to_index(a - STEP_DEGREES), Sector::new(n + 1));
        }
    }

    #[test]
    fn test_snap() {
        assert_relative_eq!(snap(90.0), 90.0);
        assert_relative_eq!(snap(104.0), 90.0);
        assert_relative_eq!(snap(106.0), 120.0);
        assert_relative_eq!(snap(359.0), 0.0);
        assert_relative_eq!(snap(-31.0), 330.0);
        assert_eq!(angle_to_index(snap(90.0)), Sector::new(9));
    }

    #[test]
    fn test_index_to_angle() {
        assert_relative_eq!(index_to_angle(Sector::new(0)), 0.0);
        assert_relative_eq!(index_to_angle(Sector::new(1)), 330.0);
        assert_relative_eq!(index_to_angle(Sector::new(9)), 90.0);
    }

    #[test]
    fn test_step_angle() {
        assert_relative_eq!(step_angle(14.0, 1), 30.0);
        assert_relative_eq!(step_angle(0.0, -1), 330.0);
        assert_relative_eq!(step_angle(345.0, 1), 30.0);
    }

    #[test]
    fn test_angle_from_pointer() {
        // straight up may come out as 0.0 or just below 360.0
        assert_relative_eq!(snap(angle_from_pointer(0.0, -1.0)), 0.0);
        assert_relative_eq!(angle_from_pointer(1.0, -1.0), 45.0, epsilon = 1e-9);
        assert_relative_eq!(angle_from_pointer(1.0, 0.0), 90.0, epsilon = 1e-9);
        assert_relative_eq!(angle_from_pointer(0.0, 1.0), 180.0, epsilon = 1e-9);
        assert_relative_eq!(angle_from_pointer(-1.0, 0.0), 270.0, epsilon = 1e-9);
    }
}
