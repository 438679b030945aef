mod cli;
mod render;

use clap::Parser;
use cli::{Cli, Command};
use roast_battle_app::application::{
    AuthSession, BattleBoard, BattleSession, BattleTab, CommunityDirectory, Submission,
};
use roast_battle_app::domain::{Leaderboard, User};
use roast_battle_app::AppContext;
use roast_battle_errors::AppError;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        tracing::error!("{}", e);
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

async fn run(command: Command) -> Result<(), AppError> {
    let ctx = AppContext::from_env()?;
    let session = ctx.start_session().await;

    let outcome = match command {
        Command::Login => login(&session).await,
        Command::Logout => session
            .logout()
            .await
            .map(|()| println!("Logged out. The arena will miss you (probably).")),
        Command::Whoami => {
            match session.user() {
                Some(user) => print!("{}", render::profile(&user)),
                None => println!("Not logged in. Run `roast-battle login`."),
            }
            Ok(())
        }
        Command::Communities { search, pin } => {
            list_communities(&ctx, search.as_deref().unwrap_or(""), &pin)
        }
        Command::Battles { tab } => {
            list_battles(&ctx, tab);
            Ok(())
        }
        Command::Leaderboard => {
            for entry in Leaderboard::rank(&ctx.data.users()) {
                println!("{}", render::leaderboard_line(&entry));
            }
            Ok(())
        }
        Command::Battle { id, turn_seconds } => match require_user(&session) {
            Ok(user) => {
                let turn_seconds = turn_seconds.unwrap_or(ctx.config.turn_seconds);
                enter_battle(&ctx, &user, &id, turn_seconds).await
            }
            Err(e) => Err(e),
        },
    };

    session.end();
    outcome
}

async fn login(session: &AuthSession) -> Result<(), AppError> {
    if let Some(user) = session.user() {
        println!("Already logged in as u/{}.", user.username);
        return Ok(());
    }
    println!("Connecting to the arena...");
    let user = session.login().await?;
    println!("Welcome back, u/{}!", user.username);
    Ok(())
}

fn require_user(session: &AuthSession) -> Result<User, AppError> {
    session.user().ok_or_else(|| {
        AppError::NotFound("Logged-in user (run `roast-battle login` first)".to_string())
    })
}

fn list_communities(ctx: &AppContext, search: &str, pins: &[String]) -> Result<(), AppError> {
    let mut directory = CommunityDirectory::new(ctx.data.communities());
    for id in pins {
        directory.toggle_pin(id)?;
    }

    let (pinned, unpinned) = directory.partition(search);
    if pinned.is_empty() && unpinned.is_empty() {
        println!("No communities match '{}'.", search);
        return Ok(());
    }
    if !pinned.is_empty() {
        println!("Pinned");
        for community in pinned {
            println!("  {}", render::community_line(community));
        }
    }
    if !unpinned.is_empty() {
        println!("All communities");
        for community in unpinned {
            println!("  {}", render::community_line(community));
        }
    }
    Ok(())
}

fn list_battles(ctx: &AppContext, tab: BattleTab) {
    let board = BattleBoard::new(ctx.data.battles());
    let battles = board.tab(tab);
    if battles.is_empty() {
        println!("No {} battles right now.", tab);
    }
    for battle in battles {
        println!("{}", render::battle_line(battle));
    }
}

async fn enter_battle(
    ctx: &AppContext,
    user: &User,
    battle_id: &str,
    turn_seconds: u32,
) -> Result<(), AppError> {
    let board = BattleBoard::new(ctx.data.battles());
    let battle = board.find(battle_id)?.clone();

    println!("{}", render::battle_line(&battle));
    print!("{}", render::roast_feed(&battle, &user.id));

    let mut session = BattleSession::open(battle, user, turn_seconds);
    let opponent = session.opponent();
    let mut updates = session.subscribe();
    let mut last_turn = session.snapshot().is_local_turn;
    println!("{}", render::clock(session.snapshot(), opponent.as_ref()));
    println!("Type a roast and press Enter. `/status` shows the clock, Ctrl-D leaves.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim() == "/status" {
                    println!("{} • {}", render::clock(session.snapshot(), opponent.as_ref()), render::draft(session.draft_status()));
                    continue;
                }
                session.set_draft(line);
                let status = session.draft_status();
                match session.submit() {
                    Ok(Submission::Recorded(roast)) => {
                        println!("🔥 Round {} roast landed ({}).", roast.round, render::draft(status));
                    }
                    Ok(Submission::Local) => println!("🔥 Roast sent ({}).", render::draft(status)),
                    Err(rejection) => println!("✋ Not sent: {} ({}).", rejection, render::draft(status)),
                }
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = *updates.borrow_and_update();
                if snapshot.is_local_turn != last_turn {
                    println!("{}", render::clock(snapshot, opponent.as_ref()));
                    last_turn = snapshot.is_local_turn;
                }
            }
        }
    }

    session.close();
    let battle = session.battle();
    println!(
        "Left battle {} with {} roasts on the board.",
        battle.id,
        battle.roasts().len()
    );
    Ok(())
}
