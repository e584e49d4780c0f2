//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data dir, loads config, installs logging, builds the API
//! - `handle_*()`: Per-command handlers that call the API and print the result
//!
//! Business logic is not tested here; the binary is exercised end to end in `tests/`.

use super::print::{
    print_config, print_info, print_json, print_request, print_requests, print_success,
};
use super::setup::{Cli, Commands};
use aidreq::api::RequestApi;
use aidreq::config::{resolve_data_dir, AidreqConfig, CONFIG_KEYS};
use aidreq::envelope::ErrorEnvelope;
use aidreq::error::{AidreqError, Result};
use aidreq::logging::{effective_level, init_logging, LOG_ENV};
use aidreq::pagination::Paginator;
use aidreq::store::fs::FileStore;
use aidreq::validation::{RawCreateRequest, RawEditStatusRequest};
use clap::Parser;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;

struct AppContext {
    api: RequestApi<FileStore>,
    config: AidreqConfig,
    data_dir: PathBuf,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let json = cli.json;

    let outcome = match init_context(&cli) {
        Ok(mut ctx) => dispatch(&mut ctx, cli.command),
        Err(e) => Err(e),
    };

    if let Err(e) = &outcome {
        if json {
            print_json(&ErrorEnvelope::from(e))?;
        }
    }
    outcome
}

fn dispatch(ctx: &mut AppContext, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Create {
            name,
            item,
            approve,
        }) => handle_create(ctx, name, item, approve),
        Some(Commands::List { status, page }) => handle_list(ctx, status, page),
        Some(Commands::SetStatus { id, status }) => handle_set_status(ctx, id, status),
        Some(Commands::View { id }) => handle_view(ctx, &id),
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
        None => handle_list(ctx, None, 1),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir()?;
    let config = AidreqConfig::load(&data_dir)?;

    let level = effective_level(std::env::var(LOG_ENV).ok(), cli.verbose, &config.log_level);
    if let Err(e) = init_logging(&level) {
        eprintln!("Warning: {}", e);
    }
    debug!(data_dir = %data_dir.display(), page_size = config.page_size, "context ready");

    let paginator = Paginator::new(config.page_size)?;
    let store = FileStore::new(data_dir.clone());

    Ok(AppContext {
        api: RequestApi::new(store, paginator),
        config,
        data_dir,
        json: cli.json,
    })
}

fn handle_create(ctx: &mut AppContext, name: String, item: String, approve: bool) -> Result<()> {
    let raw = RawCreateRequest::new(name, item);
    let created = if approve {
        ctx.api.create_approved(&raw)?
    } else {
        ctx.api.create_request(&raw)?
    };

    if ctx.json {
        return print_json(&created);
    }
    print_success(&format!(
        "Created request {} ({})",
        created.id,
        created.status.label()
    ));
    Ok(())
}

fn handle_list(ctx: &AppContext, status: Option<String>, page: i64) -> Result<()> {
    let result = ctx.api.list_requests(status.as_deref(), page)?;

    if ctx.json {
        return print_json(&result);
    }
    print_requests(&result);
    Ok(())
}

fn handle_set_status(ctx: &mut AppContext, id: String, status: String) -> Result<()> {
    let updated = ctx
        .api
        .edit_request_status(&RawEditStatusRequest::new(id, status))?;

    if ctx.json {
        return print_json(&updated);
    }
    print_success(&format!(
        "Request {} is now {}",
        updated.id,
        updated.status.label()
    ));
    Ok(())
}

fn handle_view(ctx: &AppContext, id: &str) -> Result<()> {
    let request = ctx.api.get_request(id)?;

    if ctx.json {
        return print_json(&request);
    }
    print_request(&request);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            if ctx.json {
                return print_json(&ctx.config);
            }
            print_config(&ctx.config, &CONFIG_KEYS);
        }
        (Some(key), None) => {
            let value = ctx
                .config
                .get(&key)
                .ok_or_else(|| AidreqError::Config(format!("Unknown config key: {}", key)))?;
            if ctx.json {
                return print_json(&BTreeMap::from([(key, value)]));
            }
            print_info(&value);
        }
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.data_dir)?;
            if ctx.json {
                return print_json(&ctx.config);
            }
            let stored = ctx.config.get(&key).unwrap_or(value);
            print_success(&format!("{} set to {}", key, stored));
        }
    }
    Ok(())
}
