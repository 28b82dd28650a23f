use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use moodtunes::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the discovery server and web UI
    Serve(ServeOptions),

    /// Search for tracks matching your mood
    Search(SearchOptions),

    /// List the built-in mood profiles
    Moods,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Open the web UI in the default browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Free-text description of your mood
    #[clap(long)]
    pub mood: Option<String>,

    /// Id of a built-in mood profile (see `moodtunes moods`)
    #[clap(long = "mood-id")]
    pub mood_id: Option<String>,

    /// A song you love
    #[clap(long)]
    pub song: Option<String>,

    /// Artist of the song you love
    #[clap(long)]
    pub artist: Option<String>,

    /// Instruments you enjoy, comma separated
    #[clap(long)]
    pub instruments: Option<String>,

    /// Preferred genre
    #[clap(long)]
    pub genre: Option<String>,

    /// Social profile URL to analyze
    #[clap(long)]
    pub profile: Option<String>,

    /// Number of tracks to fetch
    #[clap(long)]
    pub limit: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(opt) => cli::serve(opt.open).await,

        Command::Search(opt) => {
            cli::search(
                opt.mood,
                opt.mood_id,
                opt.song,
                opt.artist,
                opt.instruments,
                opt.genre,
                opt.profile,
                opt.limit,
            )
            .await
        }

        Command::Moods => cli::moods().await,

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
