use clap::{CommandFactory, Parser, Subcommand};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "libris",
    bin_name = "libris",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Catalog books and their physical copies", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Don't print the catalog after changes
    #[arg(short, long, global = true, help_heading = "Options")]
    pub quiet: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Catalog,
    Copies,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Catalog => "Catalog Commands:",
            CommandGroup::Copies => "Copy Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "remove" | "edit" | "list" => Some(CommandGroup::Catalog),
            "add-copies" | "remove-copy" | "remove-copies" | "checkout" | "return" => {
                Some(CommandGroup::Copies)
            }
            "shelves" | "config" | "init" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Catalog, CommandGroup::Copies, CommandGroup::Misc]
    }
}

/// Top-level help: commands listed under their group headings, then the
/// global flags as declared on [`Cli`].
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let mut out = format!(
        "libris {}\nCatalog books and their physical copies\n\nUsage: libris [OPTIONS] [COMMAND]\n",
        cmd.get_version().unwrap_or("unknown")
    );

    for group in CommandGroup::all() {
        let mut rows = cmd
            .get_subcommands()
            .filter(|sc| !sc.is_hide_set())
            .filter(|sc| CommandGroup::for_command(sc.get_name()) == Some(*group))
            .peekable();
        if rows.peek().is_none() {
            continue;
        }
        out.push_str(&format!("\n{}\n", group.heading()));
        for sc in rows {
            let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
            out.push_str(&format!("  {:<14} {}\n", sc.get_name(), about));
        }
    }

    out.push_str("\nOptions:\n");
    for arg in cmd.get_arguments().filter(|a| !a.is_positional()) {
        let flags = match (arg.get_short(), arg.get_long()) {
            (Some(short), Some(long)) => format!("-{}, --{}", short, long),
            (None, Some(long)) => format!("    --{}", long),
            (Some(short), None) => format!("-{}", short),
            (None, None) => continue,
        };
        let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
        out.push_str(&format!("  {:<16} {}\n", flags, help));
    }
    out.push_str(&format!("  {:<16} {}\n", "-V, --version", "Print version"));
    out
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Clap's own help for one subcommand, looked up by name or alias.
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();
    match cmd.find_subcommand_mut(name) {
        Some(sub) => print!("{}", sub.render_help()),
        None => {
            eprintln!("Unknown command: {}", name);
            eprintln!();
            print_grouped_help();
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Catalog(CatalogCommands),

    #[command(flatten)]
    Copies(CopyCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// Add a book with one or more copies
    #[command(display_order = 1)]
    Add {
        title: String,

        author: String,

        /// Number of copies to create
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        copies: i64,

        /// Shelf the copies go on (e.g. "Shelf 2")
        #[arg(short, long, default_value = "")]
        location: String,
    },

    /// Remove a book and all its copies
    #[command(alias = "rm", display_order = 2)]
    Remove {
        /// Book ID (e.g. B1000)
        book_id: String,
    },

    /// Edit a book's title, author, or move all its copies
    #[command(display_order = 3)]
    Edit {
        /// Book ID (e.g. B1000)
        book_id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        author: Option<String>,

        /// New shelf for the book and every copy
        #[arg(long)]
        location: Option<String>,
    },

    /// Show the catalog
    #[command(alias = "ls", display_order = 4)]
    List {
        /// Print an HTML table instead
        #[arg(long)]
        html: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CopyCommands {
    /// Add copies to an existing book
    #[command(display_order = 10)]
    AddCopies {
        book_id: String,

        #[arg(allow_negative_numbers = true)]
        count: i64,
    },

    /// Remove a single copy
    #[command(display_order = 11)]
    RemoveCopy { book_id: String, copy_id: String },

    /// Remove several copies (comma-separated ids)
    #[command(display_order = 12)]
    RemoveCopies {
        book_id: String,

        /// e.g. 001A,003A
        copy_ids: String,
    },

    /// Check a copy out
    #[command(display_order = 13)]
    Checkout {
        book_id: String,
        copy_id: String,

        /// Recorded in the copy's history (e.g. who has it)
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Return a checked-out copy
    #[command(display_order = 14)]
    Return {
        book_id: String,
        copy_id: String,

        #[arg(short, long)]
        note: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// List shelves and their copy id letters
    #[command(display_order = 30)]
    Shelves,

    /// Get or set configuration
    #[command(display_order = 31)]
    Config {
        /// Configuration key (e.g., history-limit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the store (optional utility)
    #[command(display_order = 32)]
    Init,

    /// Print help for libris or a subcommand
    #[command(display_order = 33)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
