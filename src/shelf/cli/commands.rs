use super::render::{colors_supported, render_messages, render_page, render_text_list};
use super::setup::{Cli, Commands};
use clap::Parser;
use log::warn;
use shelf::api::{CmdMessage, ConfigAction};
use shelf::error::Result;
use shelf::init::{initialize, resolve_data_dir, HOME_ENV};
use shelf::logging::{init_logging, level_for};
use shelf::model::BookForm;
use shelf::page::{Notifier, ShelfPage};
use shelf::store::fs_storage::FsStorage;
use std::path::PathBuf;

/// Prints each message as soon as the page hands it over.
struct CliNotifier {
    use_color: bool,
}

impl Notifier for CliNotifier {
    fn notify(&mut self, message: &CmdMessage) {
        print!(
            "{}",
            render_messages(std::slice::from_ref(message), self.use_color)
        );
    }
}

struct AppContext {
    page: ShelfPage<FsStorage>,
    notifier: CliNotifier,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_logging(level_for(cli.verbose)) {
        eprintln!("Warning: {}", e);
    }

    let use_color = !cli.no_color && colors_supported();
    let data_dir = resolve_data_dir(
        cli.data_dir.as_deref(),
        std::env::var_os(HOME_ENV).map(Into::into),
    )?;

    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(data_dir, key, value, use_color),
        command => run_page(data_dir, command, use_color),
    }
}

/// Renders the page from storage, then fires the event for `command`.
fn run_page(data_dir: PathBuf, command: Option<Commands>, use_color: bool) -> Result<()> {
    let shelf = initialize(data_dir)?;
    let mut ctx = AppContext {
        page: shelf.page,
        notifier: CliNotifier { use_color },
    };
    ctx.page.on_ready()?;

    match command {
        Some(Commands::Add {
            title,
            author,
            isbn,
        }) => handle_add(&mut ctx, title, author, isbn),
        Some(Commands::Delete { isbn }) => handle_delete(&mut ctx, &isbn),
        Some(Commands::List) | Some(Commands::Config { .. }) | None => handle_list(&ctx),
    }
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let output = render_page(
        ctx.page.table().rows(),
        ctx.page.empty_state(),
        ctx.notifier.use_color,
    );
    print!("{}", output);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    title: Option<String>,
    author: Option<String>,
    isbn: Option<String>,
) -> Result<()> {
    ctx.page.form = BookForm::new(
        title.unwrap_or_default(),
        author.unwrap_or_default(),
        isbn.unwrap_or_default(),
    );
    ctx.page.on_submit(&mut ctx.notifier)?;
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, isbn: &str) -> Result<()> {
    let Some(target) = ctx.page.table().row(isbn).map(|row| row.delete_target()) else {
        warn!("no row for isbn={}", isbn);
        ctx.notifier.notify(&CmdMessage::warning(format!(
            "No book with ISBN {} on the shelf",
            isbn
        )));
        return Ok(());
    };
    ctx.page.on_table_click(&target, &mut ctx.notifier)?;
    Ok(())
}

fn handle_config(
    data_dir: PathBuf,
    key: Option<String>,
    value: Option<String>,
    use_color: bool,
) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = shelf::commands::config::run(&data_dir, action)?;

    if show_all {
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
            render_text_list(&lines, "No configuration values.", use_color)
        );
    }
    print!("{}", render_messages(&result.messages, use_color));
    Ok(())
}
