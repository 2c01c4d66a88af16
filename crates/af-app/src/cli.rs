use std::path::PathBuf;

use af_core::charset;
use af_core::config::{self, RenderConfig};
use af_core::error::CoreError;
use clap::Parser;

/// asciify — convertit une image en art ASCII, optionnellement en truecolor.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image source (PNG, JPEG, BMP, GIF).
    pub input: PathBuf,

    /// Largeur de sortie en caractères [défaut : 80].
    #[arg(short, long, allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Fichier de sortie. Défaut : sortie standard.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Inverser le mapping luminance → glyphe.
    #[arg(long, default_value_t = false)]
    pub invert: bool,

    /// Émettre la couleur ANSI 24 bits.
    #[arg(long, default_value_t = false)]
    pub color: bool,

    /// Rampe de caractères, du plus sombre au plus clair [défaut : "@%#*+=-:. "].
    #[arg(long, conflicts_with = "preset")]
    pub ramp: Option<String>,

    /// Rampe nommée : default, compact, standard, blocks, minimal.
    #[arg(long)]
    pub preset: Option<String>,

    /// Facteur de contraste (1.0 = neutre).
    #[arg(long)]
    pub contrast: Option<f32>,

    /// Facteur de luminosité (1.0 = neutre).
    #[arg(long)]
    pub brightness: Option<f32>,

    /// Fichier de configuration TOML (section [render]).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Build the render config: defaults, then `--config`, then CLI flags.
    ///
    /// # Errors
    /// Returns `CoreError::Config` for an unreadable config file and
    /// `CoreError::InvalidConfig` for any rejected value.
    pub fn resolve_config(&self) -> Result<RenderConfig, CoreError> {
        let mut config = match self.config {
            Some(ref path) => {
                log::info!("Config chargée depuis {}", path.display());
                config::load_config(path)?
            }
            None => RenderConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = u32::try_from(width)
                .ok()
                .filter(|w| *w > 0)
                .ok_or_else(|| {
                    CoreError::InvalidConfig(format!("width must be a positive integer (got {width})"))
                })?;
        }
        if let Some(ref ramp) = self.ramp {
            config.ramp.clone_from(ramp);
        }
        if let Some(ref name) = self.preset {
            config.ramp = charset::preset(name)?.to_string();
        }
        if self.invert {
            config.invert = true;
        }
        if self.color {
            config.color_enabled = true;
        }
        if let Some(v) = self.contrast {
            config.contrast = v;
        }
        if let Some(v) = self.brightness {
            config.brightness = v;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("asciify").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_resolve_to_render_defaults() {
        let config = parse(&["img.png"]).resolve_config().unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn short_and_long_flags() {
        let cli = parse(&[
            "img.png", "-w", "40", "-o", "out.txt", "--invert", "--color", "--ramp", "#. ",
            "--contrast", "1.5", "--brightness", "0.8",
        ]);
        assert_eq!(cli.out.as_deref(), Some(std::path::Path::new("out.txt")));
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.width, 40);
        assert!(config.invert && config.color_enabled);
        assert_eq!(config.ramp, "#. ");
        assert!((config.contrast - 1.5).abs() < f32::EPSILON);
        assert!((config.brightness - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn non_positive_width_is_invalid_config() {
        for w in ["0", "-3"] {
            let err = parse(&["img.png", "--width", w]).resolve_config().unwrap_err();
            assert!(matches!(err, CoreError::InvalidConfig(_)), "{w}");
        }
    }

    #[test]
    fn empty_ramp_is_invalid_config() {
        let err = parse(&["img.png", "--ramp", ""]).resolve_config().unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[test]
    fn preset_and_ramp_conflict() {
        let res = Cli::try_parse_from(["asciify", "img.png", "--ramp", "ab", "--preset", "blocks"]);
        assert!(res.is_err());
    }

    #[test]
    fn preset_selects_ramp() {
        let config = parse(&["img.png", "--preset", "blocks"]).resolve_config().unwrap();
        assert_eq!(config.ramp, charset::CHARSET_BLOCKS);
    }

    #[test]
    fn cli_overrides_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\nwidth = 20\ncolor = true\nramp = \"xy\"").unwrap();
        let path = file.path().to_string_lossy().into_owned();
        let config = parse(&["img.png", "--config", &path, "--width", "33"])
            .resolve_config()
            .unwrap();
        assert_eq!(config.width, 33);
        assert!(config.color_enabled);
        assert_eq!(config.ramp, "xy");
    }

    #[test]
    fn missing_config_file_fails() {
        let err = parse(&["img.png", "-c", "/nope/asciify.toml"])
            .resolve_config()
            .unwrap_err();
        assert!(matches!(err, CoreError::Config { .. }));
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["asciify"]).is_err());
    }
}
