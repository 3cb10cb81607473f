//! # CLI Layer
//!
//! This module is **one possible UI client** for libris. It is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Initialize `AppContext` with API and configuration
//! 3. **API Dispatch**: Call the appropriate `LibrisApi` method
//! 4. **Output Formatting**: Convert `CmdResult` into terminal output
//! 5. **Error Handling**: Errors bubble up to `main`, which prints them and exits
//!
//! CLI tests should **not** test business logic; that's the command layer's job.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call API and format output

use super::logging;
use super::render::{
    colors_enabled, render_catalog, render_catalog_html, render_messages, render_shelves,
    render_text_list,
};
use super::setup::{
    print_grouped_help, print_help_for_command, CatalogCommands, Cli, Commands, CopyCommands,
    MiscCommands,
};
use clap::{CommandFactory, FromArgMatches};
use libris::api::{BookEdit, CmdResult, ConfigAction, LibrisApi, MessageLevel};
use libris::config::LibrisConfig;
use libris::error::{LibrisError, Result};
use libris::init::initialize;
use libris::store::fs::FileKvStore;

struct AppContext {
    api: LibrisApi<FileKvStore>,
    config: LibrisConfig,
    use_color: bool,
    quiet: bool,
}

pub fn run() -> Result<()> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    if cli.no_color {
        colored::control::set_override(false);
    }
    logging::init(cli.verbose);

    // -h: grouped help at the top level, clap's help for a subcommand
    if cli.help {
        match matches.subcommand_name() {
            Some(name) => print_help_for_command(name),
            None => print_grouped_help(),
        }
        return Ok(());
    }

    // These don't touch the store
    match &cli.command {
        Some(Commands::Misc(MiscCommands::Help { command })) => {
            return handle_help(command.as_deref());
        }
        Some(Commands::Misc(MiscCommands::Shelves)) => {
            print!("{}", render_shelves(colors_enabled(cli.no_color)));
            return Ok(());
        }
        _ => {}
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Catalog(cmd)) => match cmd {
            CatalogCommands::Add {
                title,
                author,
                copies,
                location,
            } => handle_add(&mut ctx, &title, &author, copies, &location),
            CatalogCommands::Remove { book_id } => handle_remove(&mut ctx, &book_id),
            CatalogCommands::Edit {
                book_id,
                title,
                author,
                location,
            } => handle_edit(
                &mut ctx,
                &book_id,
                BookEdit {
                    title,
                    author,
                    location,
                },
            ),
            CatalogCommands::List { html } => handle_list(&ctx, html),
        },
        Some(Commands::Copies(cmd)) => match cmd {
            CopyCommands::AddCopies { book_id, count } => {
                handle_add_copies(&mut ctx, &book_id, count)
            }
            CopyCommands::RemoveCopy { book_id, copy_id } => {
                handle_remove_copy(&mut ctx, &book_id, &copy_id)
            }
            CopyCommands::RemoveCopies { book_id, copy_ids } => {
                handle_remove_copies(&mut ctx, &book_id, &copy_ids)
            }
            CopyCommands::Checkout {
                book_id,
                copy_id,
                note,
            } => handle_checkout(&mut ctx, &book_id, &copy_id, note.as_deref()),
            CopyCommands::Return {
                book_id,
                copy_id,
                note,
            } => handle_return(&mut ctx, &book_id, &copy_id, note.as_deref()),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
            MiscCommands::Init => handle_init(&ctx),
            // Dispatched before the store was opened
            MiscCommands::Help { .. } | MiscCommands::Shelves => Ok(()),
        },
        None => handle_list(&ctx, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize()?;
    tracing::debug!(data_dir = %ctx.api.paths().data.display(), "store opened");

    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
        use_color: colors_enabled(cli.no_color),
        quiet: cli.quiet,
    })
}

fn handle_add(
    ctx: &mut AppContext,
    title: &str,
    author: &str,
    copies: i64,
    location: &str,
) -> Result<()> {
    let result = ctx.api.add_book(title, author, copies, location)?;
    print_mutation(ctx, &result);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, book_id: &str) -> Result<()> {
    let result = ctx.api.remove_book(book_id)?;
    print_mutation(ctx, &result);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, book_id: &str, edit: BookEdit) -> Result<()> {
    let result = ctx.api.edit_book(book_id, &edit)?;
    print_mutation(ctx, &result);
    Ok(())
}

fn handle_add_copies(ctx: &mut AppContext, book_id: &str, count: i64) -> Result<()> {
    let result = ctx.api.add_copies(book_id, count)?;
    print_mutation(ctx, &result);
    Ok(())
}

fn handle_remove_copy(ctx: &mut AppContext, book_id: &str, copy_id: &str) -> Result<()> {
    let result = ctx.api.delete_copy(book_id, copy_id)?;
    print_mutation(ctx, &result);
    Ok(())
}

fn handle_remove_copies(ctx: &mut AppContext, book_id: &str, copy_ids: &str) -> Result<()> {
    let result = ctx.api.delete_copies(book_id, copy_ids)?;
    print_mutation(ctx, &result);
    Ok(())
}

fn handle_checkout(
    ctx: &mut AppContext,
    book_id: &str,
    copy_id: &str,
    note: Option<&str>,
) -> Result<()> {
    let result = ctx.api.check_out(book_id, copy_id, note)?;
    print_mutation(ctx, &result);
    Ok(())
}

fn handle_return(
    ctx: &mut AppContext,
    book_id: &str,
    copy_id: &str,
    note: Option<&str>,
) -> Result<()> {
    let result = ctx.api.return_copy(book_id, copy_id, note)?;
    print_mutation(ctx, &result);
    Ok(())
}

fn handle_list(ctx: &AppContext, html: bool) -> Result<()> {
    let result = ctx.api.list()?;
    let view = result.view.unwrap_or_else(|| ctx.api.view());

    if html {
        print!("{}", render_catalog_html(&view, ctx.config.history_limit));
        return Ok(());
    }
    print!("{}", render_catalog(&view, ctx.use_color));
    if !ctx.quiet {
        print!("{}", render_messages(&result.messages, ctx.use_color));
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(err) = result
        .messages
        .iter()
        .find(|m| m.level == MessageLevel::Error)
    {
        return Err(LibrisError::Config(err.content.clone()));
    }

    if key.is_none() {
        let lines: Vec<String> = result
            .config
            .as_ref()
            .map(|config| {
                config
                    .list_all()
                    .into_iter()
                    .map(|(k, v)| format!("{} = {}", k, v))
                    .collect()
            })
            .unwrap_or_default();
        print!(
            "{}",
            render_text_list(&lines, "No configuration values.", ctx.use_color)
        );
    }
    print!("{}", render_messages(&result.messages, ctx.use_color));
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print!("{}", render_messages(&result.messages, ctx.use_color));
    Ok(())
}

fn handle_help(command: Option<&str>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(cmd),
        None => print_grouped_help(),
    }
    Ok(())
}

/// Success messages, then the refreshed table when something changed.
fn print_mutation(ctx: &AppContext, result: &CmdResult) {
    print!("{}", render_messages(&result.messages, ctx.use_color));
    if result.changed && !ctx.quiet {
        println!();
        print!("{}", render_catalog(&ctx.api.view(), ctx.use_color));
    }
}
