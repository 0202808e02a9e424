#![allow(non_snake_case)]

mod actions;
mod app;
mod bridge;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use kulaar_core::{Storefront, StorefrontFile};

/// Kulaar Catering - storefront
#[derive(Parser, Debug)]
#[command(name = "kulaar-desktop")]
#[command(about = "Kulaar Catering storefront with cart, menu navigation and product rails")]
struct Args {
    /// Storefront file (TOML) with settings and menu
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Initial window width
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Initial window height
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

/// Default filter directive for a `-v` count
fn log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn setup_logging(verbosity: u8) {
    let filter = log_filter(verbosity);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Default storefront file location (<config dir>/kulaar/storefront.toml)
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kulaar")
        .join("storefront.toml")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config_path = args.config.unwrap_or_else(default_config_path);
    let file = StorefrontFile::load(&config_path)
        .with_context(|| format!("loading storefront file {}", config_path.display()))?;
    let (config, catalog) = file.into_parts();

    let title = config.brand_name.clone();
    let store = Storefront::new(config, catalog);
    store.log_startup();

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(store)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_verbose_flag_raises_the_level() {
        assert_eq!(log_filter(0), "warn");
        assert_eq!(log_filter(1), "info");
        assert_eq!(log_filter(2), "debug");
        assert_eq!(log_filter(3), "trace");
        assert_eq!(log_filter(7), "trace");
    }

    #[test]
    fn verbose_flag_is_counted() {
        let args = Args::parse_from(["kulaar-desktop", "-vv"]);
        assert_eq!(args.verbose, 2);
        assert_eq!(log_filter(args.verbose), "debug");
    }
}
