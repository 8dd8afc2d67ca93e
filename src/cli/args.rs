use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bridge-bid-console")]
#[command(
    author,
    version,
    about = "Interactive terminal client for a contract-bridge bidding tutor server"
)]
pub struct Args {
    /// Base URL of the bidding tutor server
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    pub server: String,

    /// Seat to bid from initially (N, E, S, W or a full name)
    #[arg(short = 'p', long)]
    pub seat: Option<String>,

    /// Create a session immediately instead of waiting for `new`
    #[arg(long)]
    pub auto_new: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
