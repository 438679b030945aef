use clap::{Parser, Subcommand};
use roast_battle_app::application::BattleTab;

/// Turn-based roast battles in your terminal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in with the arena account and cache it locally
    Login,

    /// Forget the cached account
    Logout,

    /// Show the logged-in profile
    Whoami,

    /// List communities
    Communities {
        /// Only show communities whose name or description contains this
        #[arg(long, short)]
        search: Option<String>,

        /// Toggle the pin on a community (by id) before listing
        #[arg(long)]
        pin: Vec<String>,
    },

    /// List battles on a tab: available, active or completed
    Battles {
        #[arg(long, short, default_value = "available")]
        tab: BattleTab,
    },

    /// Rank fighters by roast cred
    Leaderboard,

    /// Enter a battle. Each line you type is sent as a roast; Ctrl-D leaves.
    Battle {
        /// Battle id
        id: String,

        /// Turn length in seconds
        #[arg(long, env = "ARENA_TURN_SECONDS")]
        turn_seconds: Option<u32>,
    },
}
