use roast_battle_app::domain::draft::MAX_ROAST_WORDS;
use roast_battle_app::domain::{
    Battle, ClockSnapshot, Community, DraftStatus, LeaderboardEntry, User, WordBudget,
    MAX_PARTICIPANTS,
};

pub fn profile(user: &User) -> String {
    let mut out = format!(
        "u/{} • Level {} • {}\n{} Roast Cred • {} karma\n{}W {}L of {} battles ({:.0}% wins)\n",
        user.username,
        user.level,
        user.karma_level,
        user.roast_cred,
        user.karma,
        user.wins,
        user.losses,
        user.total_battles,
        user.win_rate() * 100.0
    );
    for achievement in user.unlocked_achievements() {
        out.push_str(&format!(
            "  {} {}: {}\n",
            achievement.icon, achievement.name, achievement.description
        ));
    }
    if let Some(favorite) = &user.favorite_roast {
        out.push_str(&format!("Favorite roast: \"{}\"\n", favorite));
    }
    out
}

pub fn community_line(community: &Community) -> String {
    format!(
        "[{}] {} {:<16} {:>10} members  {}{}",
        community.id,
        community.icon,
        community.display_name,
        community.members,
        community.description,
        if community.is_pinned { "  📌" } else { "" }
    )
}

pub fn battle_line(battle: &Battle) -> String {
    let fighters = battle
        .participants
        .iter()
        .map(|p| format!("u/{}", p.username))
        .collect::<Vec<_>>()
        .join(" vs ");
    let open_slots = MAX_PARTICIPANTS.saturating_sub(battle.participants.len());
    format!(
        "[{}] {} - r/{} • {} • round {}/{} • {} roasts • {} votes • {} watching{}",
        battle.id,
        battle.theme.as_deref().unwrap_or("Open theme"),
        battle.community.as_deref().unwrap_or("all"),
        fighters,
        battle.current_round(),
        battle.max_rounds,
        battle.roasts().len(),
        battle.vote_count(),
        battle.spectators,
        if open_slots > 0 { "  (needs a challenger)" } else { "" }
    )
}

pub fn roast_feed(battle: &Battle, local_user_id: &str) -> String {
    let mut out = String::new();
    for roast in battle.roasts() {
        let author = battle
            .participant(&roast.user_id)
            .map(|u| u.username.as_str())
            .unwrap_or("unknown");
        let marker = if roast.user_id == local_user_id { ">" } else { " " };
        out.push_str(&format!(
            "{} u/{} • Round {} • {} votes\n    {}\n",
            marker, author, roast.round, roast.votes, roast.text
        ));
    }
    out
}

pub fn clock(snapshot: ClockSnapshot, opponent: Option<&User>) -> String {
    let whose = if snapshot.is_local_turn {
        "Your turn".to_string()
    } else {
        format!(
            "u/{}'s turn",
            opponent.map(|u| u.username.as_str()).unwrap_or("opponent")
        )
    };
    format!("⏱ {}s • {}", snapshot.seconds_remaining, whose)
}

pub fn draft(status: DraftStatus) -> String {
    let note = match status.budget {
        WordBudget::Normal => "",
        WordBudget::NearLimit => " (almost out of words)",
        WordBudget::OverLimit => " (too long)",
    };
    format!("{}/{} words{}", status.words, MAX_ROAST_WORDS, note)
}

pub fn leaderboard_line(entry: &LeaderboardEntry) -> String {
    format!(
        "#{:<3} u/{:<18} {:>6} cred",
        entry.rank, entry.user.username, entry.score
    )
}
