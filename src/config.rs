use std::{error::Error, fmt, fs, io, path::Path};

use serde_derive::{Deserialize, Serialize};

use crate::notename::NotationConvention;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "kebab-case")]
#[serde(default)]
pub struct Config {
    /// Naming system at start-up. The wheel itself always starts on the reference tonic.
    pub notation: NotationConvention,
    /// Radius of the wheel in points.
    pub wheel_radius: f32,
    /// Print the roman numerals above the windows of the pointer.
    pub show_numerals: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notation: NotationConvention::Solfege,
            wheel_radius: 260.0,
            show_numerals: true,
        }
    }
}

const MIN_RADIUS: f32 = 80.0;
const MAX_RADIUS: f32 = 1000.0;

impl Config {
    /// Read the configuration from a YAML file. A missing file is not an error; the defaults are
    /// used instead.
    pub fn load(path: &Path) -> Result<Self, ConfigErr> {
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigErr::Io(e)),
        };
        let config: Self = serde_yml::from_reader(file).map_err(ConfigErr::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(s: &str) -> Result<Self, ConfigErr> {
        let config: Self = serde_yml::from_str(s).map_err(ConfigErr::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigErr> {
        if !(MIN_RADIUS..=MAX_RADIUS).contains(&self.wheel_radius) {
            return Err(ConfigErr::WheelRadius(self.wheel_radius));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigErr {
    Io(io::Error),
    Parse(serde_yml::Error),
    WheelRadius(f32),
}

impl fmt::Display for ConfigErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErr::Io(e) => write!(f, "couldn't read the config file: {}", e),
            ConfigErr::Parse(e) => write!(f, "couldn't parse the config file: {}", e),
            ConfigErr::WheelRadius(r) => write!(
                f,
                "wheel radius {} is out of range, it must be between {} and {}",
                r, MIN_RADIUS, MAX_RADIUS
            ),
        }
    }
}

impl Error for ConfigErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigErr::Io(e) => Some(e),
            ConfigErr::Parse(e) => Some(e),
            ConfigErr::WheelRadius(_) => None {},
        }
    }
}
