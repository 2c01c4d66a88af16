use std::io::Write;
use std::path::{Path, PathBuf};

use af_core::error::CoreError;

/// Écrit l'art dans `dest`, ou sur `stdout` si absent.
///
/// A file receives the art exactly, and a confirmation line goes to `stdout`.
/// On stdout the art is followed by a single newline.
///
/// # Errors
/// Returns `CoreError::Write` if the destination cannot be written.
pub fn write_art(art: &str, dest: Option<&Path>, stdout: &mut impl Write) -> Result<(), CoreError> {
    match dest {
        Some(path) => {
            std::fs::write(path, art).map_err(|source| CoreError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            log::info!("{} octets écrits dans {}", art.len(), path.display());
            writeln!(stdout, "Wrote ASCII art to {}", path.display()).map_err(stdout_error)
        }
        None => writeln!(stdout, "{art}")
            .and_then(|()| stdout.flush())
            .map_err(stdout_error),
    }
}

fn stdout_error(source: std::io::Error) -> CoreError {
    CoreError::Write {
        path: PathBuf::from("<stdout>"),
        source,
    }
}
