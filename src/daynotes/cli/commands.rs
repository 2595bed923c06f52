//! # CLI Layer
//!
//! This module is **one possible UI client** for daynotes. It is the only
//! place that parses arguments, writes to stdout/stderr or decides exit codes.
//!
//! Each handler calls one `DaynotesApi` method and formats the `CmdResult`.

use super::print::{print_messages, render_month_groups, render_sheet};
use super::setup::{Cli, Commands};
use clap::Parser;
use daynotes::api::{current_month, ConfigAction};
use daynotes::config::CONFIG_KEYS;
use daynotes::error::Result;
use daynotes::init::{load_config, open, DaynotesContext};
use daynotes::logging::init_logging;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let (data_dir, config) = load_config(cli.data_dir.as_deref())?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    if let Err(e) = init_logging(level) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let mut ctx = open(data_dir, config);

    match cli.command {
        Some(Commands::Month { month, year }) => handle_month(&ctx, month, year),
        Some(Commands::Set { date, text }) => handle_set(&mut ctx, date, text),
        Some(Commands::Get { date }) => handle_get(&ctx, date),
        Some(Commands::Clear { dates }) => handle_clear(&mut ctx, dates),
        Some(Commands::View) => handle_view(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_month(&ctx, None, None),
    }
}

fn handle_month(ctx: &DaynotesContext, month: Option<u32>, year: Option<i32>) -> Result<()> {
    let (this_year, this_month) = current_month();
    let result = ctx
        .api
        .month_sheet(year.unwrap_or(this_year), month.unwrap_or(this_month))?;
    if let Some(sheet) = &result.sheet {
        print!("{}", render_sheet(sheet));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_set(ctx: &mut DaynotesContext, date: String, text: Vec<String>) -> Result<()> {
    let text = text.join(" ");
    let result = ctx.api.set_note(&date, &text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_get(ctx: &DaynotesContext, date: String) -> Result<()> {
    let result = ctx.api.get_note(&date)?;
    if let Some((_, text)) = &result.note {
        if !text.is_empty() {
            println!("{}", text);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut DaynotesContext, dates: Vec<String>) -> Result<()> {
    let result = ctx.api.clear_notes(&dates)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &DaynotesContext) -> Result<()> {
    let result = ctx.api.saved_notes()?;
    print!("{}", render_month_groups(&result.month_groups));
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &DaynotesContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        for key in CONFIG_KEYS {
            if let Some(value) = config.get(key) {
                println!("{} = {}", key, value);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
