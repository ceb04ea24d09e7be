// ═══════════════════════════════════════════════════════════════════════
// Runner — CLI entry point for single games, batches, and reports
// ═══════════════════════════════════════════════════════════════════════

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use vallum_agents::Agent;
use vallum_engine::engine::{self, AdvanceOutcome};
use vallum_engine::types::{Difficulty, DraftPhase};
use vallum_engine::CardSet;
use vallum_sim::{run_batch, AgentKind, Database};

#[derive(Parser)]
#[command(name = "vallum", about = "Wall-defense solitaire difficulty lab")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single seeded game and print each round
    Play {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long, default_value = "medium")]
        difficulty: String,
        /// Agent type: "random" or "greedy"
        #[arg(short, long, default_value = "greedy")]
        agent: String,
        /// Directory holding player-cards.json and pict-cards.json
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
        /// Dump the final game state as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Run a batch of seeded games and store the results
    Batch {
        #[arg(short, long, default_value_t = 100)]
        games: u32,
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long, default_value = "medium")]
        difficulty: String,
        #[arg(short, long, default_value = "random")]
        agent: String,
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
        #[arg(long, default_value = "results.db")]
        db: String,
    },
    /// Print per-difficulty statistics from a results database
    Report {
        #[arg(long, default_value = "results.db")]
        db: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            difficulty,
            agent,
            data_dir,
            json,
        } => cmd_play(seed, &difficulty, &agent, &data_dir, json),
        Commands::Batch {
            games,
            seed,
            difficulty,
            agent,
            data_dir,
            db,
        } => cmd_batch(games, seed, &difficulty, &agent, &data_dir, &db),
        Commands::Report { db } => cmd_report(&db),
    }
}

fn parse_or_exit<T: std::str::FromStr<Err = String>>(value: &str) -> T {
    value.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(2);
    })
}

fn load_cards(data_dir: &Path) -> CardSet {
    let player_json = fs::read_to_string(data_dir.join("player-cards.json"))
        .expect("Failed to read player-cards.json");
    let pict_json = fs::read_to_string(data_dir.join("pict-cards.json"))
        .expect("Failed to read pict-cards.json");
    CardSet::from_json(&player_json, &pict_json).expect("Failed to parse card data")
}

fn cmd_play(seed: u64, difficulty: &str, agent: &str, data_dir: &Path, json: bool) {
    let difficulty: Difficulty = parse_or_exit(difficulty);
    let agent_kind: AgentKind = parse_or_exit(agent);
    let cards = load_cards(data_dir);
    let mut agent = agent_kind.build(seed);

    println!("=== Vallum Solitaire Lab ===\n");
    println!(
        "Running single game: seed={}, difficulty={}, agent={}\n",
        seed,
        difficulty,
        agent.name()
    );

    let mut state = vallum_engine::setup::new_game(&cards, difficulty, seed);

    loop {
        if state.draft_phase == DraftPhase::AwaitingSelection {
            let index = agent.select_draft(&state);
            if engine::select_draft_card(&mut state, index).is_err() {
                // An agent answering out of range forfeits the choice.
                let _ = engine::select_draft_card(&mut state, 0);
            }
            let kept = state.task_for_round(state.round).map(|c| c.name.clone());
            let banked = state.rejected_card.as_ref().map(|c| c.name.clone());
            println!(
                "Round {}: kept {:?}, banked {:?}",
                state.round,
                kept.unwrap_or_default(),
                banked.unwrap_or_default()
            );
            continue;
        }

        match engine::advance_phase(&mut state) {
            Ok(AdvanceOutcome::AttackResolved) => {
                if let Some(attack) = &state.last_attack {
                    let positions = attack.to_string();
                    println!(
                        "         Pict attack: {} cards ({} base + {} bonus){}",
                        attack.total(),
                        attack.base,
                        attack.bonus,
                        if positions.is_empty() {
                            String::new()
                        } else {
                            format!(" -- {positions}")
                        }
                    );
                }
            }
            Ok(AdvanceOutcome::RoundStarted(_)) => {}
            Ok(AdvanceOutcome::GameComplete) => {
                println!("\nGame complete after {} rounds.", state.round);
                break;
            }
            Err(e) => {
                println!("\nRun ended early in round {}: {}", state.round, e);
                break;
            }
        }
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&state).expect("Failed to serialize state")
        );
        return;
    }

    let ongoing = &state.ongoing_resources;
    println!("\nFinal ongoing resources:");
    println!(
        "  stone: {}, builder: {}, civilian: {}",
        ongoing.stone, ongoing.builder, ongoing.civilian
    );
    println!(
        "  renown: {}, piety: {}, valour: {}, discipline: {}",
        ongoing.renown, ongoing.piety, ongoing.valour, ongoing.discipline
    );
    println!(
        "Cards left -- player: {}, neutral: {}, Pict: {}",
        state.player_deck.len(),
        state.neutral_deck.len(),
        state.pict_deck.len()
    );
}

fn cmd_batch(games: u32, seed: u64, difficulty: &str, agent: &str, data_dir: &Path, db_path: &str) {
    let difficulty: Difficulty = parse_or_exit(difficulty);
    let agent_kind: AgentKind = parse_or_exit(agent);
    let cards = load_cards(data_dir);

    println!(
        "=== Batch: {} games, difficulty={}, agent={:?} ===\n",
        games, difficulty, agent_kind
    );

    let db = Database::new(db_path);
    let results = run_batch(&cards, difficulty, seed, games, agent_kind);

    let mut completed = 0u32;
    let mut total_attacks = 0u64;
    for result in &results {
        if result.completed {
            completed += 1;
        }
        total_attacks +=
            (result.attacks_left + result.attacks_middle + result.attacks_right) as u64;
        db.store_run(result);
    }

    let pct = if games > 0 {
        completed as f64 / games as f64 * 100.0
    } else {
        0.0
    };
    println!("--- Summary ({games} games) ---");
    println!("  completed: {completed} ({pct:.1}%)");
    if !results.is_empty() {
        println!(
            "  avg attack cards per run: {:.1}",
            total_attacks as f64 / results.len() as f64
        );
    }
    println!("\nResults saved to: {db_path}");
    println!("Total runs in DB: {}", db.run_count());
}

fn cmd_report(db_path: &str) {
    let db = Database::new(db_path);
    let summary = db.summary();
    if summary.is_empty() {
        println!("No runs found. Run some batches first.");
        return;
    }

    println!("=== Difficulty report ===\n");
    println!(
        "{:<10} {:>6} {:>10} {:>11} {:>12}",
        "Difficulty", "Runs", "Completed", "Avg rounds", "Avg attacks"
    );
    println!("{}", "-".repeat(52));
    for row in &summary {
        println!(
            "{:<10} {:>6} {:>10} {:>11.2} {:>12.1}",
            row.difficulty, row.runs, row.completed, row.avg_rounds, row.avg_attacks
        );
    }
}
