//! devdeck CLI entry point.
//!
//! Parses command-line arguments and dispatches to the appropriate command handler.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use devdeck::commands::{
    add_command, config_display_command, config_reset_command, config_set_command, edit_command,
    gui_command, list_command, open_command, remove_command, repo_command, ConfigSubcommand,
    EditFields,
};
use devdeck::output::print_error;

#[derive(Parser, Debug)]
#[command(name = "devdeck")]
#[command(
    version,
    about = "A small launcher for your development projects",
    after_help = "EXAMPLES:
    # Open the project window
    devdeck

    # Manage projects from the terminal
    devdeck add --name Site --path ~/dev/site --repo https://github.com/me/site
    devdeck list
    devdeck edit Site --path ~/work/site
    devdeck remove 2

    # Open a project in the editor, or its repository in the browser
    devdeck open Site
    devdeck repo 1

PROJECTS:
    <project> is a position from 'devdeck list', an id (or its first
    characters), or an exact project name."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the project window (default)
    Gui,

    /// List all projects
    List,

    /// Add a project
    Add {
        /// Display name
        #[arg(long)]
        name: String,

        /// Folder opened in the editor; a leading ~ is your home directory
        #[arg(long)]
        path: String,

        /// Repository URL opened in the browser
        #[arg(long)]
        repo: Option<String>,
    },

    /// Change a project's name, path or repository
    Edit {
        /// Position, id or name of the project
        project: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        path: Option<String>,

        /// New repository URL; pass an empty string to clear it
        #[arg(long)]
        repo: Option<String>,
    },

    /// Delete a project
    #[command(visible_alias = "rm")]
    Remove {
        /// Position, id or name of the project
        project: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Open a project in the configured editor
    Open {
        /// Position, id or name of the project
        project: String,
    },

    /// Open a project's repository in the browser
    Repo {
        /// Position, id or name of the project
        project: String,
    },

    /// View or modify devdeck configuration
    #[command(after_help = "EXAMPLES:
    devdeck config                       # Show the current configuration
    devdeck config set editor zed        # Open projects with zed
    devdeck config reset --yes           # Restore defaults")]
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },

    /// Output shell completion script to stdout (hidden utility command)
    #[command(hide = true)]
    Completions {
        /// Shell type to generate completions for
        shell: Shell,
    },
}

/// Log to stderr, filtered by `DEVDECK_LOG`, then `RUST_LOG`, then `info`.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("DEVDECK_LOG")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        None | Some(Commands::Gui) => gui_command(),
        Some(Commands::List) => list_command(),
        Some(Commands::Add { name, path, repo }) => add_command(&name, &path, repo.as_deref()),
        Some(Commands::Edit {
            project,
            name,
            path,
            repo,
        }) => edit_command(&project, EditFields { name, path, repo }),
        Some(Commands::Remove { project, yes }) => remove_command(&project, yes),
        Some(Commands::Open { project }) => open_command(&project),
        Some(Commands::Repo { project }) => repo_command(&project),
        Some(Commands::Config { subcommand }) => match subcommand {
            None => config_display_command(),
            Some(ConfigSubcommand::Set { key, value }) => config_set_command(&key, &value),
            Some(ConfigSubcommand::Reset { yes }) => config_reset_command(yes),
        },
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "devdeck", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
