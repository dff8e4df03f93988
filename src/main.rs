// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use bookshelf::catalog::session::HELP;
use bookshelf::render::{render_dashboard, render_status, render_view};
use bookshelf::utils::logging::Notice;
use bookshelf::{
    BookCollection, BookFilters, BrowseSession, Config, DocumentRewriter, DocumentSource,
    JsonExporter, Layout, LoadSpinner, RewriteSummary, SessionCommand, SortColumn, SortSpec,
    StatsAggregator,
};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Search, filter and summarize a personal bookshelf", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Bookshelf document path or http(s) URL, overrides the config file
    #[arg(short, long, value_name = "LOCATION", env = "BOOKSHELF_SOURCE")]
    source: Option<String>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
struct FilterArgs {
    /// Case-insensitive match on title or author
    #[arg(long)]
    search: Option<String>,

    /// Exact tag match
    #[arg(long)]
    genre: Option<String>,

    /// Exact language match
    #[arg(long)]
    language: Option<String>,
}

impl FilterArgs {
    fn to_filters(&self) -> BookFilters {
        BookFilters::new(
            self.search.clone().unwrap_or_default(),
            self.genre.clone().unwrap_or_default(),
            self.language.clone().unwrap_or_default(),
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List books matching the given filters
    List {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, value_enum)]
        sort: Option<SortColumn>,

        #[arg(long, requires = "sort")]
        desc: bool,

        #[arg(long, value_enum)]
        layout: Option<Layout>,

        #[arg(long)]
        json: bool,
    },

    /// Show the genre and language values available for filtering
    Facets {
        #[arg(long)]
        json: bool,
    },

    /// Show collection statistics
    Stats {
        #[arg(long)]
        json: bool,
    },

    /// Interactively search and filter the collection
    Browse {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Export the filtered collection and statistics as JSON
    Export {
        #[arg(short, long, default_value = "./exports")]
        output: PathBuf,

        #[arg(short, long)]
        pretty: bool,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Maintain the tags of a local bookshelf document
    Tags {
        #[command(subcommand)]
        action: TagCommands,
    },
}

#[derive(Subcommand)]
enum TagCommands {
    /// Replace legacy Genre strings with Tags arrays
    Convert { file: PathBuf },

    /// Rejoin compound tags that were split apart
    Fix { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    bookshelf::utils::logging::init_logger(cli.color, cli.verbose);
    if !cli.color {
        colored::control::set_override(false);
    }

    let mut config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    if let Some(source) = cli.source {
        config.source.location = source;
    }

    let code = match cli.command {
        Commands::List {
            filters,
            sort,
            desc,
            layout,
            json,
        } => {
            let sort = sort.map(|column| {
                if desc {
                    SortSpec::descending(column)
                } else {
                    SortSpec::ascending(column)
                }
            });
            if let Some(layout) = layout {
                config.display.layout = layout;
            }
            cmd_list(&config, cli.color, &filters.to_filters(), sort, json).await?
        }
        Commands::Facets { json } => cmd_facets(&config, cli.color, json).await?,
        Commands::Stats { json } => cmd_stats(&config, cli.color, json).await?,
        Commands::Browse { filters } => {
            cmd_browse(&config, cli.color, filters.to_filters()).await?
        }
        Commands::Export {
            output,
            pretty,
            filters,
        } => cmd_export(&config, cli.color, output, pretty, &filters.to_filters()).await?,
        Commands::Tags { action } => cmd_tags(action)?,
    };

    Ok(code)
}

/// Loads the collection once. `None` means the error state was rendered.
async fn load_collection(config: &Config, color: bool) -> Result<Option<BookCollection>> {
    let source = DocumentSource::from_config(&config.source)
        .context("Invalid bookshelf document location")?;

    let spinner = LoadSpinner::new(&source.location(), color);
    let mut collection = BookCollection::new();
    collection.fetch(&source).await;
    spinner.finish();

    if let Some(message) = render_status(collection.status()) {
        println!("{}", message);
        return Ok(None);
    }

    let report = collection.report();
    if !report.is_clean() {
        eprintln!(
            "{}",
            Notice::Warning.line(&format!(
                "Skipped {} of {} records in {}",
                report.rejected.len(),
                report.total(),
                source
            ))
        );
    }

    Ok(Some(collection))
}

async fn cmd_list(
    config: &Config,
    color: bool,
    filters: &BookFilters,
    sort: Option<SortSpec>,
    json: bool,
) -> Result<ExitCode> {
    let Some(collection) = load_collection(config, color).await? else {
        return Ok(ExitCode::FAILURE);
    };

    let view = collection.view(filters).sorted(sort);

    if json {
        println!("{}", serde_json::to_string_pretty(&view.books)?);
    } else {
        print!("{}", render_view(&view, &config.display));
    }

    Ok(ExitCode::SUCCESS)
}

async fn cmd_facets(config: &Config, color: bool, json: bool) -> Result<ExitCode> {
    let Some(collection) = load_collection(config, color).await? else {
        return Ok(ExitCode::FAILURE);
    };

    let genres = collection.unique_genres();
    let languages = collection.unique_languages();

    if json {
        let facets = serde_json::json!({ "genres": genres, "languages": languages });
        println!("{}", serde_json::to_string_pretty(&facets)?);
    } else {
        println!("Genres ({}):", genres.len());
        for genre in &genres {
            println!("  {}", genre);
        }
        println!("\nLanguages ({}):", languages.len());
        for language in &languages {
            println!("  {}", language);
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn cmd_stats(config: &Config, color: bool, json: bool) -> Result<ExitCode> {
    let Some(collection) = load_collection(config, color).await? else {
        return Ok(ExitCode::FAILURE);
    };

    let report = StatsAggregator::with_config(collection.books(), &config.stats).report();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_dashboard(&report));
    }

    Ok(ExitCode::SUCCESS)
}

async fn cmd_browse(config: &Config, color: bool, filters: BookFilters) -> Result<ExitCode> {
    let Some(collection) = load_collection(config, color).await? else {
        return Ok(ExitCode::FAILURE);
    };

    let mut session = BrowseSession::new(filters, None);
    print!("{}", render_view(&collection.view(&session.filters), &config.display));
    println!("{}", Notice::Info.line("Type 'help' for commands, 'quit' to leave"));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        let command = match SessionCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", Notice::Warning.line(&message));
                continue;
            }
        };

        match &command {
            SessionCommand::Quit => break,
            SessionCommand::Help => println!("{}", HELP),
            SessionCommand::ListGenres => println!("{}", collection.unique_genres().join("\n")),
            SessionCommand::ListLanguages => {
                println!("{}", collection.unique_languages().join("\n"))
            }
            _ => {}
        }

        if command.changes_view() {
            session = session.apply(&command);
            let view = collection.view(&session.filters).sorted(session.sort);
            print!("{}", render_view(&view, &config.display));
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn cmd_export(
    config: &Config,
    color: bool,
    output: PathBuf,
    pretty: bool,
    filters: &BookFilters,
) -> Result<ExitCode> {
    let Some(collection) = load_collection(config, color).await? else {
        return Ok(ExitCode::FAILURE);
    };

    let exporter = JsonExporter::new(output).context("Failed to prepare export directory")?;
    let view = collection.view(filters);
    let stats = StatsAggregator::with_config(collection.books(), &config.stats).report();

    let manifest = exporter
        .export_view(&view, &stats, &config.source.location, pretty)
        .context("Export failed")?;

    println!(
        "{}",
        Notice::Success.line(&format!(
            "Exported {} of {} books to {}",
            manifest.exported_books,
            manifest.total_books,
            exporter.output_dir().display()
        ))
    );

    Ok(ExitCode::SUCCESS)
}

fn cmd_tags(action: TagCommands) -> Result<ExitCode> {
    let (file, summary) = match action {
        TagCommands::Convert { file } => {
            let rewriter = DocumentRewriter::new(&file).context("Cannot open document")?;
            (file, rewriter.convert_genres().context("Genre conversion failed")?)
        }
        TagCommands::Fix { file } => {
            let rewriter = DocumentRewriter::new(&file).context("Cannot open document")?;
            (file, rewriter.fix_tags().context("Tag repair failed")?)
        }
    };

    print_rewrite_summary(&file, &summary);

    if summary.books == 0 {
        println!("{}", Notice::Error.line("Document contains no books"));
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_rewrite_summary(file: &std::path::Path, summary: &RewriteSummary) {
    for change in &summary.changes {
        println!(
            "  {}: {:?} -> {:?}",
            change.title, change.before, change.after
        );
    }

    println!(
        "{}",
        Notice::Success.line(&format!(
            "Updated {} of {} books in {}",
            summary.modified,
            summary.books,
            file.display()
        ))
    );
    println!("Total unique tags: {}", summary.distinct_tags.len());
    println!("All tags: {}", summary.distinct_tags.join(", "));
}
