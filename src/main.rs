use std::io::Write as _;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use bridge_bid_console::api::SessionApi;
use bridge_bid_console::cli::{parse_command, Args, Command};
use bridge_bid_console::config::Settings;
use bridge_bid_console::context::SessionContext;
use bridge_bid_console::{derive_screen, gate, parser};

const HELP_TEXT: &str = "commands: new | refresh | seat <N|E|S|W> | bid <call> | check <call> | help | quit \
— a bare call (1H, pass, x) is shorthand for `bid`";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let settings = Settings::from_args(&args)?;
    let api = SessionApi::new(&settings)?;

    let mut ctx = SessionContext::new();
    if let Some(seat) = settings.preselected_seat {
        ctx.select_seat(seat);
    }
    ctx.set_message(format!(
        "Welcome! Server {} — type `new` to deal, `help` for commands",
        settings.server_url
    ));

    if settings.auto_new {
        run_command(Command::NewSession, &api, &mut ctx).await;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        redraw(&ctx)?;
        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break, // stdin closed
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Err(message) => ctx.set_message(message),
            Ok(Command::Quit) => break,
            Ok(command) => run_command(command, &api, &mut ctx).await,
        }
    }

    println!("Goodbye.");
    Ok(())
}

/// Execute one command, then let the caller re-derive the screen from
/// the updated context. Every failure is terminal for that one
/// command; nothing is retried.
async fn run_command(command: Command, api: &SessionApi, ctx: &mut SessionContext) {
    match command {
        Command::Help => ctx.set_message(HELP_TEXT),
        Command::NewSession => match api.create_session().await {
            Ok(snapshot) => {
                ctx.install(snapshot);
                ctx.set_message("New session created");
            }
            Err(e) => ctx.set_message(e.to_string()),
        },
        Command::Refresh => {
            let id = match ctx.session_id() {
                Some(id) => id.to_string(),
                None => {
                    ctx.set_message("no active session");
                    return;
                }
            };
            match api.fetch_session(&id).await {
                Ok(snapshot) => {
                    ctx.install(snapshot);
                    ctx.set_message("");
                }
                Err(e) => ctx.set_message(e.to_string()),
            }
        }
        Command::SelectSeat(seat) => {
            ctx.select_seat(seat);
            ctx.set_message(format!("Bidding as {seat}"));
        }
        Command::Bid(token) => submit_bid(api, ctx, &token).await,
        Command::Check(token) => check_bid(api, ctx, &token).await,
        Command::Quit => {}
    }
}

/// Gate locally, then submit. A local denial never reaches the
/// network; a server rejection is shown word for word.
async fn submit_bid(api: &SessionApi, ctx: &mut SessionContext, token: &str) {
    let (seat, call, id) = match prepare_submission(ctx, token) {
        Some(parts) => parts,
        None => return,
    };
    match api.submit_bid(&id, seat, &call).await {
        Ok(snapshot) => {
            ctx.install(snapshot);
            ctx.set_message(format!("{call} accepted"));
        }
        Err(e) => ctx.set_message(e.to_string()),
    }
}

/// Same local gating as `submit_bid`, but asks the tutor for advice
/// instead of changing the auction.
async fn check_bid(api: &SessionApi, ctx: &mut SessionContext, token: &str) {
    let (seat, call, id) = match prepare_submission(ctx, token) {
        Some(parts) => parts,
        None => return,
    };
    match api.evaluate_bid(&id, seat, &call).await {
        Ok(advice) => {
            let message = if advice.is_recommended {
                format!("{call} matches the tutor's recommendation")
            } else {
                match advice.explanation {
                    Some(explanation) => explanation,
                    None => format!("tutor recommends {}", advice.recommended_bid),
                }
            };
            ctx.set_message(message);
        }
        Err(e) => ctx.set_message(e.to_string()),
    }
}

/// Run the turn gate and canonicalize the token. On any local denial
/// the context message is set and None is returned.
fn prepare_submission(
    ctx: &mut SessionContext,
    token: &str,
) -> Option<(bridge_bid_console::Seat, bridge_bid_console::Call, String)> {
    let seat = match ctx.selected_seat() {
        Some(seat) => seat,
        None => {
            ctx.set_message("no active session");
            return None;
        }
    };

    let verdict = gate::evaluate(ctx.snapshot(), seat, token);
    if !verdict.allowed {
        if let Some(reason) = verdict.reason {
            ctx.set_message(reason);
        }
        return None;
    }

    let call = match parser::canonicalize(token) {
        Ok(call) => call,
        Err(e) => {
            ctx.set_message(e.to_string());
            return None;
        }
    };

    let id = ctx.session_id()?.to_string();
    Some((seat, call, id))
}

fn redraw(ctx: &SessionContext) -> Result<()> {
    // Same clear-screen escape the original console client uses
    print!("\x1b[H\x1b[2J");
    print!(
        "{}",
        derive_screen(ctx.snapshot(), ctx.selected_seat(), "", ctx.message())
    );
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}
