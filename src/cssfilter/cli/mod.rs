//! Command-line client. Parses arguments, loads the editor config, drives a
//! [`FilterApi`] session and prints what comes back.

mod args;
mod logging;
mod print;

use args::{Cli, Commands};
use clap::Parser;
use cssfilter::api::{CmdResult, ConfigAction, FilterApi};
use cssfilter::config::EditorConfig;
use cssfilter::error::{FilterError, Result};
use cssfilter::gesture::DragModifier;
use cssfilter::model::EntryView;
use directories::ProjectDirs;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

const CONFIG_DIR_ENV: &str = "CSSFILTER_CONFIG_DIR";
const STDIN_MARKER: &str = "-";

struct AppContext {
    api: FilterApi,
    config_dir: PathBuf,
    json: bool,
}

#[derive(Serialize)]
struct ListOutput<'a> {
    css: &'a str,
    entries: &'a [EntryView],
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut ctx = init_context(cli.json)?;

    match cli.command {
        Commands::Show { css } => {
            let result = ctx.api.load_css(&read_css(&css)?)?;
            print::print_messages(&result.messages);
            if ctx.json {
                print_list_json(&result)
            } else {
                print::print_entries(&result.listed);
                Ok(())
            }
        }
        Commands::Add { css, name, value } => {
            load(&mut ctx, &css)?;
            let result = ctx.api.add(&name, value.as_deref())?;
            finish(&ctx, result)
        }
        Commands::Remove { css, indexes } => {
            load(&mut ctx, &css)?;
            let result = ctx.api.remove(&indexes)?;
            finish(&ctx, result)
        }
        Commands::Set { css, index, value } => {
            load(&mut ctx, &css)?;
            let result = ctx.api.update(&index, &value)?;
            finish(&ctx, result)
        }
        Commands::Move {
            css,
            index,
            position,
        } => {
            load(&mut ctx, &css)?;
            let result = ctx.api.move_entry(&index, &position)?;
            finish(&ctx, result)
        }
        Commands::Drag { css, index, pixels } => {
            load(&mut ctx, &css)?;
            let result = ctx.api.drag(&index, pixels)?;
            finish(&ctx, result)
        }
        Commands::Nudge {
            css,
            index,
            pixels,
            slow,
            fast,
        } => {
            let modifier = if slow {
                DragModifier::Slow
            } else if fast {
                DragModifier::Fast
            } else {
                DragModifier::None
            };
            load(&mut ctx, &css)?;
            let result = ctx.api.nudge(&index, pixels, modifier)?;
            finish(&ctx, result)
        }
        Commands::Kinds => handle_kinds(&ctx),
        Commands::Config { key, value } => handle_config(&mut ctx, key, value),
    }
}

fn init_context(json: bool) -> Result<AppContext> {
    let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "cssfilter", "cssfilter")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| FilterError::Api("Could not determine config directory".into()))?,
    };
    let config = EditorConfig::load(&config_dir)?;
    tracing::debug!(dir = %config_dir.display(), ?config, "loaded config");

    Ok(AppContext {
        api: FilterApi::new(config),
        config_dir,
        json,
    })
}

/// Reads the css argument, taking `-` to mean stdin.
fn read_css(arg: &str) -> Result<String> {
    if arg != STDIN_MARKER {
        return Ok(arg.to_string());
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer.trim_end().to_string())
}

/// Loads the input value, surfacing skipped-filter warnings right away.
fn load(ctx: &mut AppContext, css: &str) -> Result<()> {
    let result = ctx.api.load_css(&read_css(css)?)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn finish(ctx: &AppContext, result: CmdResult) -> Result<()> {
    print::print_messages(&result.messages);
    if ctx.json {
        let listed = ctx.api.show()?;
        return print_list_json(&listed);
    }
    if let Some(css) = &result.css {
        print::print_css(css);
    }
    Ok(())
}

fn print_list_json(result: &CmdResult) -> Result<()> {
    let css = result.css.clone().unwrap_or_default();
    let output = ListOutput {
        css: &css,
        entries: &result.listed,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn handle_kinds(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.kinds()?;
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&result.kinds)?);
    } else {
        print::print_kinds(&result.kinds);
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.configure(&ctx.config_dir, action)?;
    print::print_messages(&result.messages);
    if let Some(config) = &result.config {
        if ctx.json {
            println!("{}", serde_json::to_string_pretty(config)?);
        } else {
            print::print_config(config);
        }
    }
    Ok(())
}
