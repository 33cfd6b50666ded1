use clap::{Parser, Subcommand};

/// A meal ordering CLI with delivery cutoffs, cart building, and macro goal tracking.
#[derive(Parser, Debug)]
#[command(name = "macro_kitchen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a catalog JSON file (built-in sample menu when omitted).
    #[arg(short, long)]
    pub catalog: Option<String>,

    /// Path to a user goals JSON file (default goals when omitted).
    #[arg(short, long)]
    pub targets: Option<String>,

    /// Override the current hour (0-23) instead of reading the local clock.
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
    pub hour: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive ordering session.
    Order,

    /// Print the menu for a delivery slot.
    Menu {
        /// Delivery slot (lunch, dinner, next-day-breakfast); first open slot when omitted.
        #[arg(short, long)]
        slot: Option<String>,

        /// Goal filter (muscle-gain, fat-loss, ...) or "all".
        #[arg(long)]
        category: Option<String>,

        /// Find items by name instead of listing the whole menu.
        #[arg(short, long)]
        find: Option<String>,
    },

    /// Show delivery slots and their order cutoffs.
    Schedule,
}

impl Default for Command {
    fn default() -> Self {
        Command::Order
    }
}
