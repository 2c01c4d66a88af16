use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::charset::DEFAULT_RAMP;
use crate::error::CoreError;

/// Facteur de correction d'aspect : une cellule de glyphe est ~2× plus haute que large.
pub const ASPECT_CORRECTION: f64 = 0.55;

/// Configuration d'une conversion. Immutable une fois validée.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use af_core::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.width, 80);
/// assert_eq!(config.ramp, "@%#*+=-:. ");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RenderConfig {
    /// Largeur de sortie en caractères.
    pub width: u32,
    /// Rampe de caractères, du plus sombre au plus clair.
    pub ramp: String,
    /// Inverser le mapping luminance → glyphe.
    pub invert: bool,
    /// Émettre les séquences truecolor ANSI.
    #[serde(rename = "color")]
    pub color_enabled: bool,
    /// Contraste, multiplicateur autour de 128. 1.0 = neutre.
    pub contrast: f32,
    /// Luminosité, multiplicateur par canal. 1.0 = neutre.
    pub brightness: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 80,
            ramp: DEFAULT_RAMP.to_string(),
            invert: false,
            color_enabled: false,
            contrast: 1.0,
            brightness: 1.0,
        }
    }
}

impl RenderConfig {
    /// Reject configurations that cannot drive a conversion.
    ///
    /// Runs before any image is decoded.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidConfig` if width is zero, the ramp is empty,
    /// or a multiplier is negative or not finite.
    ///
    /// # Example
    /// ```
    /// use af_core::config::RenderConfig;
    /// let config = RenderConfig { ramp: String::new(), ..RenderConfig::default() };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.width == 0 {
            return Err(CoreError::InvalidConfig("width must be at least 1".into()));
        }
        if self.ramp.is_empty() {
            return Err(CoreError::InvalidConfig("ramp must not be empty".into()));
        }
        for (name, value) in [("contrast", self.contrast), ("brightness", self.brightness)] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::InvalidConfig(format!(
                    "{name} must be a finite, non-negative factor (got {value})"
                )));
            }
        }
        Ok(())
    }

    /// Number of glyphs in the ramp.
    #[must_use]
    pub fn ramp_len(&self) -> usize {
        self.ramp.chars().count()
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    render: Option<RenderSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RenderSection {
    width: Option<u32>,
    ramp: Option<String>,
    invert: Option<bool>,
    color: Option<bool>,
    contrast: Option<f32>,
    brightness: Option<f32>,
}

/// Parse TOML text and merge it over the defaults.
///
/// # Errors
/// Returns `CoreError::Config` if the text is not a valid config document.
///
/// # Example
/// ```
/// use af_core::config::parse_config;
/// use std::path::Path;
/// let config = parse_config("[render]\nwidth = 40\ncolor = true\n", Path::new("inline")).unwrap();
/// assert_eq!(config.width, 40);
/// assert!(config.color_enabled);
/// assert_eq!(config.ramp, "@%#*+=-:. ");
/// ```
pub fn parse_config(content: &str, origin: &Path) -> Result<RenderConfig, CoreError> {
    let file: ConfigFile = toml::from_str(content).map_err(|e| CoreError::Config {
        path: origin.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut config = RenderConfig::default();
    let Some(r) = file.render else {
        log::debug!("{}: pas de section [render], défauts conservés", origin.display());
        return Ok(config);
    };

    if let Some(v) = r.width {
        config.width = v;
    }
    if let Some(v) = r.ramp {
        config.ramp = v;
    }
    if let Some(v) = r.invert {
        config.invert = v;
    }
    if let Some(v) = r.color {
        config.color_enabled = v;
    }
    if let Some(v) = r.contrast {
        config.contrast = v;
    }
    if let Some(v) = r.brightness {
        config.brightness = v;
    }
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns `CoreError::Config` if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use af_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("asciify.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RenderConfig, CoreError> {
    let content = std::fs::read_to_string(path).map_err(|e| CoreError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_config(&content, path)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_match_cli_surface() {
        let c = RenderConfig::default();
        assert_eq!(c.width, 80);
        assert_eq!(c.ramp, DEFAULT_RAMP);
        assert!(!c.invert);
        assert!(!c.color_enabled);
        assert!((c.contrast - 1.0).abs() < f32::EPSILON);
        assert!((c.brightness - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_width_rejected() {
        let c = RenderConfig {
            width: 0,
            ..RenderConfig::default()
        };
        assert!(matches!(c.validate(), Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn empty_ramp_rejected() {
        let c = RenderConfig {
            ramp: String::new(),
            ..RenderConfig::default()
        };
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("ramp"));
    }

    #[test]
    fn bad_multipliers_rejected() {
        for (contrast, brightness) in [(-1.0, 1.0), (1.0, f32::NAN), (f32::INFINITY, 1.0)] {
            let c = RenderConfig {
                contrast,
                brightness,
                ..RenderConfig::default()
            };
            assert!(c.validate().is_err(), "{contrast} / {brightness}");
        }
    }

    #[test]
    fn ramp_len_counts_chars_not_bytes() {
        let c = RenderConfig {
            ramp: "█▓▒░ ".into(),
            ..RenderConfig::default()
        };
        assert_eq!(c.ramp_len(), 5);
    }

    #[test]
    fn partial_toml_overrides_only_given_keys() {
        let c = parse_config(
            "[render]\nramp = \"#. \"\ninvert = true\ncontrast = 1.5\n",
            Path::new("t"),
        )
        .unwrap();
        assert_eq!(c.ramp, "#. ");
        assert!(c.invert);
        assert!((c.contrast - 1.5).abs() < f32::EPSILON);
        assert_eq!(c.width, 80);
    }

    #[test]
    fn empty_document_is_defaults() {
        assert_eq!(
            parse_config("", Path::new("t")).unwrap(),
            RenderConfig::default()
        );
    }

    #[test]
    fn unknown_key_is_config_error() {
        let err = parse_config("[render]\nfps = 30\n", Path::new("t")).unwrap_err();
        assert!(matches!(err, CoreError::Config { .. }));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\nwidth = 12\nbrightness = 0.5").unwrap();
        let c = load_config(file.path()).unwrap();
        assert_eq!(c.width, 12);
        assert!((c.brightness - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, CoreError::Config { .. }));
    }
}
