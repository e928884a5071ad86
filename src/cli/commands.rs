use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use crate::filters::filter_names;
use crate::models::GlossaryEntry;
use crate::store::{DEFAULT_MAX_ENTRIES, DirectoryHistory, GlossaryStore};
use crate::utils::{
    format_path_with_tilde, has_balanced_braces, is_valid_name, macro_reference,
};

#[derive(Parser)]
#[command(name = "glossary-store")]
#[command(version = "0.1.0")]
#[command(about = "Maintain a LaTeX nomenclature of symbols and descriptions", long_about = None)]
pub struct Cli {
    /// Glossary directory (defaults to the most recently used one, then the current directory)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Directory history file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub history_file: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create empty glossary files in the directory
    Init,
    /// List entries, optionally filtered by name
    List {
        /// Case-insensitive substring of the entry name
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Show a single entry
    Show { name: String },
    /// Add an entry or replace an existing one
    Add {
        name: String,
        symbol: String,
        description: String,
        /// Sort key (defaults to the symbol)
        #[arg(short, long)]
        sort_key: Option<String>,
    },
    /// Remove an entry
    Remove { name: String },
    /// Rewrite all generated files and the summary from the record file
    Regenerate,
    /// Show or clear recently used directories
    Recent {
        #[arg(long)]
        clear: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = &cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let mut history = open_history(cli.history_file.as_deref())?;
    let dir = resolve_dir(cli.dir.as_deref(), &history);
    let mut store = GlossaryStore::new(&dir);

    match command {
        Commands::Init => init_glossary(&store)?,
        Commands::List { filter } => {
            load(&mut store)?;
            list_entries(&store, filter.as_deref());
        }
        Commands::Show { name } => {
            load(&mut store)?;
            let entry = store
                .get(name)
                .with_context(|| format!("No entry named '{}' in {}", name, dir.display()))?;
            print_entry(name, entry);
        }
        Commands::Add { name, symbol, description, sort_key } => {
            let sort_key = sort_key.as_deref().unwrap_or(symbol.as_str());
            add_entry(&mut store, name, GlossaryEntry::new(symbol, description, sort_key))?;
        }
        Commands::Remove { name } => {
            load(&mut store)?;
            if store.remove(name).is_none() {
                bail!("No entry named '{}' in {}", name, dir.display());
            }
            store.save().context("Failed to save glossary")?;
            println!("Removed {}", name);
        }
        Commands::Regenerate => {
            load(&mut store)?;
            store.save().context("Failed to save glossary")?;
            store.write_summary().context("Failed to write summary")?;
            println!("Regenerated {} entries in {}", store.len(), format_path_with_tilde(&dir));
        }
        Commands::Recent { clear } => return show_recent(&mut history, *clear),
    }

    // only directories that were opened successfully are remembered
    if cli.dir.is_some() {
        history.add(&dir);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env).format_timestamp(None).try_init();
}

fn open_history(history_file: Option<&Path>) -> Result<DirectoryHistory> {
    match history_file {
        Some(path) => Ok(DirectoryHistory::open(path, DEFAULT_MAX_ENTRIES)),
        None => DirectoryHistory::open_default(DEFAULT_MAX_ENTRIES),
    }
}

fn resolve_dir(explicit: Option<&Path>, history: &DirectoryHistory) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| history.most_recent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn add_entry(store: &mut GlossaryStore, name: &str, entry: GlossaryEntry) -> Result<()> {
    if !is_valid_name(name) {
        bail!("Invalid name '{}': use a letter followed by letters or digits", name);
    }
    validate_fields(&entry)?;
    load(store)?;

    for other in store.find_by_symbol(&entry.symbol) {
        if other != name {
            log::warn!("Symbol '{}' is already used by '{}'", entry.symbol, other);
        }
    }

    let previous = store.insert(name, entry);
    store.save().context("Failed to save glossary")?;

    let verb = if previous.is_some() { "Updated" } else { "Added" };
    println!("{} {}", verb, name);
    Ok(())
}

/// Reject values the record format cannot carry back unchanged
fn validate_fields(entry: &GlossaryEntry) -> Result<()> {
    let fields = [
        ("symbol", &entry.symbol),
        ("description", &entry.description),
        ("sort key", &entry.sort_key),
    ];

    for (label, value) in fields {
        if value.is_empty() {
            bail!("The {} must not be empty", label);
        }
        if !has_balanced_braces(value) {
            bail!("Unbalanced braces in {} '{}'", label, value);
        }
    }

    Ok(())
}

fn load(store: &mut GlossaryStore) -> Result<()> {
    let report = store
        .load()
        .with_context(|| format!("Failed to load glossary from {}", store.base_dir().display()))?;
    if !report.skipped.is_empty() {
        eprintln!("Warning: skipped {} malformed line(s)", report.skipped.len());
    }
    Ok(())
}

fn init_glossary(store: &GlossaryStore) -> Result<()> {
    fs::create_dir_all(store.base_dir()).with_context(|| {
        format!("Failed to create glossary directory: {}", store.base_dir().display())
    })?;

    let mut created = 0;
    for (name, path) in store.files().required() {
        if !path.exists() {
            fs::write(path, "").with_context(|| format!("Failed to create {}", name))?;
            created += 1;
        }
    }

    println!(
        "Initialized {} ({} file(s) created)",
        format_path_with_tilde(store.base_dir()),
        created
    );
    Ok(())
}

fn list_entries(store: &GlossaryStore, filter: Option<&str>) {
    let names = filter_names(store.names(), filter.unwrap_or(""));
    for name in &names {
        if let Some(entry) = store.get(name) {
            println!("{}\t{}\t{}", name, entry.symbol, entry.description);
        }
    }
    println!("{} of {} entries", names.len(), store.len());
}

fn print_entry(name: &str, entry: &GlossaryEntry) {
    println!("Name:        {}", name);
    println!("Macro:       {}", macro_reference(name));
    println!("Symbol:      {}", entry.symbol);
    println!("Description: {}", entry.description);
    println!("Sort key:    {}", entry.sort_key);
}

fn show_recent(history: &mut DirectoryHistory, clear: bool) -> Result<()> {
    if clear {
        history.clear();
        println!("Directory history cleared");
        return Ok(());
    }

    let recent = history.list();
    if recent.is_empty() {
        println!("No recent directories");
    }
    for (i, dir) in recent.iter().enumerate() {
        println!("{:>2}. {}", i + 1, format_path_with_tilde(Path::new(dir)));
    }
    Ok(())
}
