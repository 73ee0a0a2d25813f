use clap::Parser;
use std::path::PathBuf;
use tally::api::{ConfigAction, TallyApi};
use tally::config::TallyConfig;
use tally::error::Result;
use tally::store::fs::FileStore;

mod args;
mod print;

use args::{Cli, Commands};
use print::{print_messages, print_problems, print_report, print_run_log};

const CONFIG_DIR: &str = ".tally";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TallyApi<FileStore>,
    config_dir: PathBuf,
    threshold: u64,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { item, qty }) => handle_add(&mut ctx, item, qty),
        Some(Commands::Remove { item, qty }) => handle_remove(&mut ctx, item, qty),
        Some(Commands::Get { item }) => handle_get(&mut ctx, item),
        Some(Commands::Low { threshold }) => handle_low(&mut ctx, threshold),
        Some(Commands::Report) => handle_report(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Demo) => handle_demo(&mut ctx),
        None => handle_report(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = PathBuf::from(CONFIG_DIR);
    let config = TallyConfig::load(&config_dir).unwrap_or_default();

    // Flag beats config beats the built-in default.
    let snapshot = cli
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.snapshot_file));

    let api = TallyApi::new(FileStore::new(snapshot));
    Ok(AppContext {
        api,
        config_dir,
        threshold: config.low_threshold,
    })
}

fn handle_add(ctx: &mut AppContext, item: String, qty: i64) -> Result<()> {
    print_problems(&ctx.api.load()?.messages);
    let result = ctx.api.add_stock(&item, qty)?;
    print_messages(&result.messages);
    if !result.affected.is_empty() {
        print_messages(&ctx.api.save()?.messages);
    }
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, item: String, qty: i64) -> Result<()> {
    print_problems(&ctx.api.load()?.messages);
    let result = ctx.api.remove_stock(&item, qty)?;
    print_messages(&result.messages);
    if !result.affected.is_empty() {
        print_messages(&ctx.api.save()?.messages);
    }
    Ok(())
}

fn handle_get(ctx: &mut AppContext, item: String) -> Result<()> {
    print_problems(&ctx.api.load()?.messages);
    let result = ctx.api.quantity(&item)?;
    println!("{}", result.quantity.unwrap_or(0));
    Ok(())
}

fn handle_low(ctx: &mut AppContext, threshold: Option<u64>) -> Result<()> {
    print_problems(&ctx.api.load()?.messages);
    let threshold = threshold.unwrap_or(ctx.threshold);
    let result = ctx.api.low_stock(threshold)?;
    for name in &result.low_items {
        println!("{}", name);
    }
    Ok(())
}

fn handle_report(ctx: &mut AppContext) -> Result<()> {
    print_problems(&ctx.api.load()?.messages);
    let result = ctx.api.report()?;
    print_report(&result.stock);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = tally::commands::config::run(&ctx.config_dir, action)?;
    if let Some(config) = &result.config {
        for key in ["file", "threshold"] {
            if let Some(val) = config.get(key) {
                println!("{} = {}", key, val);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Fixed demonstration sequence: stock up, trip every warning path, save,
/// reload, report, and dump the run log.
fn handle_demo(ctx: &mut AppContext) -> Result<()> {
    print_messages(&ctx.api.add_stock("apple", 10)?.messages);
    print_messages(&ctx.api.add_stock("banana", 7)?.messages);
    print_messages(&ctx.api.add_stock("carrot", 4)?.messages);

    print_messages(&ctx.api.add_stock("orange", 0)?.messages);
    print_messages(&ctx.api.add_stock("banana", -2)?.messages);

    print_messages(&ctx.api.remove_stock("apple", 3)?.messages);
    print_messages(&ctx.api.remove_stock("orange", 1)?.messages);

    println!(
        "\nApple stock: {}",
        ctx.api.quantity("apple")?.quantity.unwrap_or(0)
    );
    println!(
        "Carrot stock: {}",
        ctx.api.quantity("carrot")?.quantity.unwrap_or(0)
    );
    println!(
        "Low items (threshold 5): {:?}",
        ctx.api.low_stock(5)?.low_items
    );

    print_messages(&ctx.api.save()?.messages);
    print_messages(&ctx.api.load()?.messages);

    print_report(&ctx.api.report()?.stock);
    print_run_log(ctx.api.run_log());
    Ok(())
}
