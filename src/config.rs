// Run configuration, loaded from an optional TOML file.
//
// This mirrors the teacher's pattern of a serde-derived config struct with a
// `load_or_default` entry point, reduced to the fields this core actually
// needs: the video/audio/save-state/hotkey substructs it used to carry don't
// apply to a headless core and are dropped.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::logger::LogLevel;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// When true, the core never attempts to present frames; it only steps.
    pub headless: bool,
    /// Optional hard stop after this many emulated frames.
    pub stop_after_frames: Option<u64>,
    /// Logging verbosity, serialized as a lowercase string.
    #[serde(with = "level_serde")]
    pub verbosity: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            headless: true,
            stop_after_frames: None,
            verbosity: LogLevel::Info,
        }
    }
}

impl Config {
    /// Loads configuration from `path`, falling back to defaults if the file
    /// does not exist. A present-but-malformed file is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&text)?;
        Ok(config)
    }
}

mod level_serde {
    use super::LogLevel;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    enum Repr {
        Trace,
        Debug,
        Info,
        Warn,
        Error,
    }

    pub fn serialize<S: Serializer>(level: &LogLevel, s: S) -> Result<S::Ok, S::Error> {
        let repr = match level {
            LogLevel::Trace => Repr::Trace,
            LogLevel::Debug => Repr::Debug,
            LogLevel::Info => Repr::Info,
            LogLevel::Warn => Repr::Warn,
            LogLevel::Error => Repr::Error,
        };
        repr.serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<LogLevel, D::Error> {
        let repr = Repr::deserialize(d)?;
        Ok(match repr {
            Repr::Trace => LogLevel::Trace,
            Repr::Debug => LogLevel::Debug,
            Repr::Info => LogLevel::Info,
            Repr::Warn => LogLevel::Warn,
            Repr::Error => LogLevel::Error,
        })
    }
}
