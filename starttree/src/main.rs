use std::path::PathBuf;

use clap::{Parser, Subcommand};
use starttree::{bookmark_tree::flatten, ctx::AppContext, keys};

/// Generate a static bookmarks start page.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file [default: ~/.config/StartTree/config.yaml]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory holding skeletons/ and themes/ [default: ~/.cache/StartTree]
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<SubCommands>,
}

#[derive(Subcommand)]
enum SubCommands {
    /// Regenerate index.html and the stylesheets (default)
    Generate,
    /// Print the bookmark hierarchy
    Keys,
    /// Print the flattened bookmark list as JSON
    Bookmarks,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let ctx = AppContext::from_home(cli.config, cli.cache_dir)?;

    match cli.command.unwrap_or(SubCommands::Generate) {
        SubCommands::Generate => ctx.generate()?,
        SubCommands::Keys => {
            let config = ctx.load_config()?;
            print!("{}", keys::outline(&config.tree));
        }
        SubCommands::Bookmarks => {
            let config = ctx.load_config()?;
            println!("{}", serde_json::to_string_pretty(&flatten(&config.tree))?);
        }
    }

    Ok(())
}
