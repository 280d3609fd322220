use std::{borrow::Cow, fmt};

use serde_derive::{Deserialize, Serialize};

use crate::util::mod12::PitchClass;

pub mod spelling;
pub mod tables;

use tables::{NoteTables, LETTER, SOLFEGE, SOLFEGE_BASES};

/// The two naming systems the wheel can be labelled in. This only ever selects a table; it never
/// takes part in any index arithmetic.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NotationConvention {
    /// Do, Re, Mi, ...
    #[default]
    Solfege,
    /// C, D, E, ...
    Letter,
}

impl NotationConvention {
    pub const ALL: [NotationConvention; 2] =
        [NotationConvention::Solfege, NotationConvention::Letter];

    pub fn tables(&self) -> &'static NoteTables {
        match self {
            NotationConvention::Solfege => &SOLFEGE,
            NotationConvention::Letter => &LETTER,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            NotationConvention::Solfege => NotationConvention::Letter,
            NotationConvention::Letter => NotationConvention::Solfege,
        }
    }
}

impl fmt::Display for NotationConvention {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NotationConvention::Solfege => write!(f, "Do-Re-Mi"),
            NotationConvention::Letter => write!(f, "C-D-E"),
        }
    }
}

/// The display name of a pitch class, spelled with sharps.
pub fn present(pc: PitchClass, convention: NotationConvention) -> Cow<'static, str> {
    title_case(convention.tables().sharp_name(pc), convention)
}

/// Bring an internal name into display form.
///
/// Solfège syllables are stored upper case ("SOL#") and shown title case ("Sol#"), with the
/// accidental kept as is. Letter names are already in display form. Anything that is not a
/// recognised name comes back unchanged.
pub fn title_case(name: &str, convention: NotationConvention) -> Cow<'_, str> {
    match convention {
        NotationConvention::Letter => Cow::Borrowed(name),
        NotationConvention::Solfege => {
            for (upper, title) in SOLFEGE_BASES {
                if let Some(accidental) = name.strip_prefix(upper) {
                    if matches!(accidental, "" | "#" | "b") {
                        return Cow::Owned(format!("{title}{accidental}"));
                    }
                }
            }
            Cow::Borrowed(name)
        }
    }
}

/// Translate an upper case solfège name ("RE#") to a letter name ("D#" or "Eb"). Unknown names
/// pass through upper cased.
pub fn to_letter_name(name: &str, prefer_flat: bool) -> String {
    let upper = name.to_uppercase();
    match SOLFEGE.sharps.iter().position(|n| *n == upper) {
        Some(i) => {
            let pc = PitchClass::new(i as i64);
            if prefer_flat {
                LETTER.flat_name(pc).into()
            } else {
                LETTER.sharp_name(pc).into()
            }
        }
        None {} => upper,
    }
}
