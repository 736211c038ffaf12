use std::process;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;

use guestdesk::api::HttpUserApi;
use guestdesk::cli::{Cli, Command};
use guestdesk::commands::update_user;
use guestdesk::config::Config;
use guestdesk::detail::{DetailFetcher, FetchPolicy};
use guestdesk::logging::init_tracing;
use guestdesk::record::UserRecord;
use guestdesk::submit::SubmitOutcome;
use guestdesk::ui::app::ExitReason;
use guestdesk::ui::form::fields_from_record;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        config.validate()?;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let api = Arc::new(HttpUserApi::new(&config.api)?);
    let fetcher = DetailFetcher::new(api, FetchPolicy::from(&config.api), &config.cache);

    match cli.command {
        Command::Edit { id } => {
            let exit = guestdesk::ui::runtime::run(runtime.handle(), fetcher, id, &config.ui)
                .context("Terminal error")?;
            if let ExitReason::Saved { redirect, message } = exit {
                println!("{}", message);
                println!("Redirected to {}", redirect);
            }
        }
        Command::Show { id, json } => {
            let fetched = runtime
                .block_on(fetcher.fetch(&id))
                .map_err(|e| anyhow!(e.user_message()))
                .with_context(|| format!("Failed to load user '{}'", id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&fetched.record)?);
            } else {
                print_record(&fetched.record);
            }
        }
        Command::Update { id, set } => {
            match runtime.block_on(update_user(&fetcher, &id, &set))? {
                SubmitOutcome::Saved {
                    record,
                    notification,
                    redirect,
                } => {
                    println!("{}", notification.message);
                    println!("update_at: {}", record.update_at);
                    println!("Redirected to {}", redirect);
                }
                SubmitOutcome::Failed { notification, .. } => bail!(notification.message),
            }
        }
    }

    Ok(())
}

fn print_record(record: &UserRecord) {
    for field in fields_from_record(record) {
        println!("{:<14} {}", format!("{}:", field.label()), field.value);
    }
    println!("{:<14} {}", "Created:", record.create_at);
    println!("{:<14} {}", "Updated:", record.update_at);
}
