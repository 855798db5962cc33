//! Spotify Top Tracks CLI Library
//!
//! This library provides a small client for the Spotify Web API that
//! authenticates with the client-credentials grant, resolves an artist by
//! name and lists that artist's top tracks.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by the Spotify client
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Formatting helpers for output
//!
//! # Example
//!
//! ```
//! use toptracks::{config, spotify::SpotifyClient};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     config::load_env();
//!     let mut client = SpotifyClient::connect(config::Config::from_env())?;
//!     if client.search_artist("Good Kid")?.is_some() {
//!         let tracks = client.top_tracks()?;
//!         println!("{}", toptracks::utils::format_track_listing(&tracks));
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Searching for {}...", artist);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// The message goes to standard error so that piped track listings stay
/// clean. This macro never returns; use it only for fatal errors.
///
/// # Example
///
/// ```
/// error!("Failed to fetch access token: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for soft negative results such as a search that matched nothing.
/// Like [`error!`], it writes to standard error so that standard output only
/// ever carries track listings.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
