use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tessera_color::{Color, KeyColorPreset, Variant};
use tessera_theme::{Brightness, ThemeOptions, build_theme_with};
use tracing::{debug, info};

mod swatch;

#[derive(Parser)]
#[command(name = "example")]
#[command(version, long_about = None)]
#[command(about = "Preview the Material 3 theme derived from a key color")]
struct Cli {
    /// Key color as #RRGGBB (defaults to the baseline purple)
    key_color: Option<String>,
    /// Palette recipe
    #[arg(short, long, value_enum, default_value_t = VariantArg::TonalSpot)]
    variant: VariantArg,
    /// Only print the dark scheme
    #[arg(long, conflicts_with = "light")]
    dark: bool,
    /// Only print the light scheme
    #[arg(long)]
    light: bool,
    /// Print the styling configuration as JSON instead of swatches
    #[arg(long)]
    json: bool,
    /// List the key color presets
    #[arg(long)]
    presets: bool,
    /// Write the active scheme as packed linear RGBA f32s to this file
    #[arg(long, value_name = "FILE")]
    uniform: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    TonalSpot,
    Content,
    Vibrant,
    Expressive,
    Neutral,
    Monochrome,
    Rainbow,
    FruitSalad,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::TonalSpot => Variant::TonalSpot,
            VariantArg::Content => Variant::Content,
            VariantArg::Vibrant => Variant::Vibrant,
            VariantArg::Expressive => Variant::Expressive,
            VariantArg::Neutral => Variant::Neutral,
            VariantArg::Monochrome => Variant::Monochrome,
            VariantArg::Rainbow => Variant::Rainbow,
            VariantArg::FruitSalad => Variant::FruitSalad,
        }
    }
}

const DEFAULT_FILTER: &str = "error,tessera_theme=info,example=info";

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(DEFAULT_FILTER) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.presets {
        info!("Listing {} key color presets", KeyColorPreset::ALL.len());
        for preset in KeyColorPreset::ALL {
            swatch::print_preset(preset);
        }
        return Ok(());
    }

    let mut options = ThemeOptions::default().with_variant(cli.variant.into());
    if let Some(key_color) = cli.key_color {
        options = options.with_key_color(key_color);
    }
    debug!(key_color = %options.key_color, variant = options.variant.name(), "Building theme");
    let built = build_theme_with(&options)?;
    info!(
        "Derived theme from {} with {} themes",
        built.key_color,
        built.config.themes.len()
    );

    if let Some(path) = &cli.uniform {
        let brightness = if cli.dark {
            Brightness::Dark
        } else {
            Brightness::Light
        };
        let colors = built.tokens.scheme(brightness).to_linear_colors();
        let bytes = Color::slice_as_bytes(&colors);
        std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(
            "Wrote {} {} colors ({} bytes) to {}",
            colors.len(),
            brightness.name(),
            bytes.len(),
            path.display()
        );
        return Ok(());
    }

    if cli.json {
        println!("{}", built.config.to_json_pretty()?);
        return Ok(());
    }

    let modes: &[Brightness] = if cli.dark {
        &[Brightness::Dark]
    } else if cli.light {
        &[Brightness::Light]
    } else {
        &[Brightness::Light, Brightness::Dark]
    };
    swatch::print_header(&built, options.variant);
    for &brightness in modes {
        swatch::print_scheme(built.tokens.scheme(brightness), brightness);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
        let about = Cli::command().get_about().map(|about| about.to_string());
        assert_eq!(
            about.as_deref(),
            Some("Preview the Material 3 theme derived from a key color")
        );
    }

    #[test]
    fn test_uniform_flag_takes_a_path() {
        let args = ["example", "#B3261E", "--dark", "--uniform", "out.bin"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.key_color.as_deref(), Some("#B3261E"));
        assert_eq!(cli.uniform, Some(PathBuf::from("out.bin")));
        assert!(cli.dark);
        assert!(Cli::try_parse_from(["example", "--dark", "--light"]).is_err());
    }
}
