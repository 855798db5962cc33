use clap::{
    Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use toptracks::{cli, config};

const DEFAULT_ARTIST: &str = "Good Kid";

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
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the top tracks of an artist
    Tracks(TracksOptions),

    /// Show which artist a search resolves to
    Artist(ArtistOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Args, Debug, Clone)]
pub struct TracksOptions {
    /// Artist to search for
    #[clap(default_value = DEFAULT_ARTIST)]
    pub artist: String,

    /// Market (ISO 3166-1 alpha-2 country code) for the top tracks
    #[clap(long)]
    pub market: Option<String>,

    /// Render the tracks as a table with album, popularity and duration
    #[clap(long)]
    pub table: bool,
}

impl Default for TracksOptions {
    fn default() -> Self {
        TracksOptions {
            artist: DEFAULT_ARTIST.to_string(),
            market: None,
            table: false,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ArtistOptions {
    /// Artist to search for
    #[clap(default_value = DEFAULT_ARTIST)]
    pub artist: String,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn main() {
    env_logger::init();
    config::load_env();

    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Command::Tracks(TracksOptions::default())) {
        Command::Tracks(opt) => {
            let mut config = config::Config::from_env();
            if let Some(market) = opt.market {
                config = config.with_market(market);
            }
            cli::tracks(config, &opt.artist, opt.table)
        }
        Command::Artist(opt) => cli::artist(config::Config::from_env(), &opt.artist),
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
