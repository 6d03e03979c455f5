mod admin;
mod config_cmd;
mod product;
mod watch;

pub use admin::AdminCommand;
pub use config_cmd::ConfigCommand;
pub use product::ProductCommand;
pub use watch::WatchCommand;

use clap::ValueEnum;
use std::io::{self, Write};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Asks a yes/no question on stdin. Anything but `y` means no.
pub(crate) fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}
