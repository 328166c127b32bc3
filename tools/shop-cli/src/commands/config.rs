//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    let config = &ctx.config;

    ctx.output.blank();
    ctx.output.info("[store]");
    ctx.output.kv("data_dir", &config.store.data_dir);
    ctx.output.kv("resolved", &ctx.data_dir().display().to_string());

    ctx.output.blank();
    ctx.output.info("[catalog]");
    ctx.output.kv("latency_ms", &config.catalog.latency_ms.to_string());
    ctx.output.kv(
        "lookup_latency_ms",
        &config.catalog.lookup_latency_ms.to_string(),
    );
    ctx.output.kv("page_size", &config.catalog.page_size.to_string());

    ctx.output.blank();
    ctx.output.info("[search]");
    ctx.output.kv("debounce_ms", &config.search.debounce_ms.to_string());

    ctx.output.blank();
    ctx.output.info("[checkout]");
    ctx.output.kv("latency_ms", &config.checkout.latency_ms.to_string());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("shop.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
