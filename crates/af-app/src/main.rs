use anyhow::{Context, Result};
use clap::Parser;

pub mod cli;
pub mod output;
pub mod pipeline;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Résoudre la config (défauts < --config < flags), validée avant tout décodage
    let config = cli.resolve_config().context("Configuration invalide")?;
    log::debug!("Config : {config:?}");

    // 4. Convertir
    let art = pipeline::image_to_ascii(&cli.input, &config)
        .with_context(|| format!("Conversion impossible : {}", cli.input.display()))?;

    // 5. Écrire
    let mut stdout = std::io::stdout().lock();
    output::write_art(&art, cli.out.as_deref(), &mut stdout).context("Écriture impossible")?;

    Ok(())
}
