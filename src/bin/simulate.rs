//! Opponent strength simulation.
//!
//! Plays every difficulty against every scripted player for many sessions
//! in parallel and reports how often the computer wins.
//!
//! Usage:
//!   cargo run --release --bin simulate -- [OPTIONS]
//!
//! Options:
//!   --sessions <N>    Sessions per matchup (default: 1000)
//!   --rounds <N>      Rounds per session (default: 10)
//!   --classic         Five-move classical game
//!   --seed <N>        Base seed (default: 42)
//!   --output <FILE>   Write the report as JSON

use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use rpsls_arena::opponent::{Difficulty, ScriptedPlayer, Strategy};
use rpsls_arena::session::{Session, SessionConfig, Verdict};

/// Aggregated result of one difficulty against one scripted player.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Matchup {
    difficulty: Difficulty,
    player: String,
    sessions: u64,
    player_wins: u64,
    computer_wins: u64,
    draws: u64,
    rounds_won: u64,
    rounds_lost: u64,
    rounds_tied: u64,
}

impl Matchup {
    fn computer_session_rate(&self) -> f64 {
        if self.sessions == 0 {
            0.0
        } else {
            self.computer_wins as f64 / self.sessions as f64
        }
    }

    fn computer_round_rate(&self) -> f64 {
        let total = self.rounds_won + self.rounds_lost + self.rounds_tied;
        if total == 0 {
            0.0
        } else {
            self.rounds_lost as f64 / total as f64
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Report {
    moves: usize,
    rounds: u32,
    sessions_per_matchup: u64,
    seed: u64,
    elapsed_secs: f64,
    matchups: Vec<Matchup>,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut sessions: u64 = 1000;
    let mut rounds: u32 = 10;
    let mut classic = false;
    let mut seed: u64 = 42;
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--sessions" | "-n" => {
                i += 1;
                if i < args.len() {
                    sessions = args[i].parse().unwrap_or(sessions);
                }
            }
            "--rounds" | "-r" => {
                i += 1;
                if i < args.len() {
                    rounds = args[i].parse().unwrap_or(rounds);
                }
            }
            "--classic" => classic = true,
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or(seed);
                }
            }
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!("Usage: simulate [--sessions N] [--rounds N] [--classic] [--seed N] [--output FILE]");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let base = if classic {
        SessionConfig::classic()
    } else {
        SessionConfig::extended()
    }
    .with_rounds(rounds);
    if let Err(e) = base.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    println!("=== RPSLS Opponent Simulation ===");
    println!(
        "Moves: {} | Rounds: {} | Sessions per matchup: {} | Seed: {}\n",
        base.moves.len(),
        rounds,
        sessions,
        seed
    );

    // One job per (matchup, session) pair so rayon can balance them.
    let matchups: Vec<(Difficulty, ScriptedPlayer)> = Difficulty::ALL
        .iter()
        .flat_map(|&d| ScriptedPlayer::ALL.into_iter().map(move |p| (d, p)))
        .collect();
    let jobs: Vec<(usize, u64)> = (0..matchups.len())
        .flat_map(|m| (0..sessions).map(move |s| (m, s)))
        .collect();

    let progress = ProgressBar::new(jobs.len() as u64);
    if let Ok(style) =
        ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} sessions ({eta})")
    {
        progress.set_style(style.progress_chars("#>-"));
    }

    let start = Instant::now();

    let tallies: FxHashMap<usize, Matchup> = jobs
        .par_iter()
        .filter_map(|&(m, s)| {
            let (difficulty, player) = matchups[m];
            let session_seed = seed
                .wrapping_mul(1_000_003)
                .wrapping_add((m as u64) << 32)
                .wrapping_add(s);
            let result = play_session(&base, difficulty, player, session_seed);
            progress.inc(1);
            match result {
                Ok(tally) => Some((m, tally)),
                Err(e) => {
                    log::warn!("session {} of {} vs {} failed: {}", s, difficulty, player, e);
                    None
                }
            }
        })
        .fold(FxHashMap::default, |mut acc: FxHashMap<usize, Matchup>, (m, tally)| {
            merge(acc.entry(m).or_default(), &tally);
            acc
        })
        .reduce(FxHashMap::default, |mut left, right| {
            for (m, tally) in right {
                merge(left.entry(m).or_default(), &tally);
            }
            left
        });

    progress.finish_and_clear();
    let elapsed = start.elapsed();

    let results: Vec<Matchup> = matchups
        .iter()
        .enumerate()
        .map(|(m, &(difficulty, player))| {
            let mut matchup = tallies.get(&m).cloned().unwrap_or_default();
            matchup.difficulty = difficulty;
            matchup.player = player.to_string();
            matchup
        })
        .collect();

    println!(
        "{:<8} {:<16} {:>10} {:>10} {:>8} {:>12}",
        "Level", "Player", "CPU wins", "You win", "Draws", "CPU rounds"
    );
    println!("{}", "-".repeat(68));
    for m in &results {
        println!(
            "{:<8} {:<16} {:>9.1}% {:>10} {:>8} {:>11.1}%",
            m.difficulty.name(),
            m.player,
            m.computer_session_rate() * 100.0,
            m.player_wins,
            m.draws,
            m.computer_round_rate() * 100.0
        );
    }
    println!("\nTotal time: {:.2}s", elapsed.as_secs_f64());

    if let Some(path) = output {
        let report = Report {
            moves: base.moves.len(),
            rounds,
            sessions_per_matchup: sessions,
            seed,
            elapsed_secs: elapsed.as_secs_f64(),
            matchups: results,
        };
        match save_report(&report, &path) {
            Ok(_) => println!("Saved report: {}", path),
            Err(e) => eprintln!("Error saving report: {}", e),
        }
    }
}

/// Play one full session with a scripted player and count the outcome.
fn play_session(
    base: &SessionConfig,
    difficulty: Difficulty,
    player: ScriptedPlayer,
    seed: u64,
) -> Result<Matchup, Box<dyn std::error::Error + Send + Sync>> {
    let config = base.clone().with_difficulty(difficulty).with_seed(seed);
    let mut session = Session::new(config)?;
    // The scripted player gets its own stream so it never shares draws with the opponent.
    let mut player_rng = StdRng::seed_from_u64(seed ^ 0x5eed_cafe);

    while !session.is_finished() {
        let choice = player.choose(session.history(), session.rules(), &mut player_rng);
        session.submit_move(choice)?;
    }

    let summary = session.summary();
    let mut tally = Matchup {
        sessions: 1,
        rounds_won: summary.player_score as u64,
        rounds_lost: summary.computer_score as u64,
        rounds_tied: summary.ties as u64,
        ..Default::default()
    };
    match summary.verdict {
        Verdict::PlayerWins => tally.player_wins = 1,
        Verdict::ComputerWins => tally.computer_wins = 1,
        Verdict::Draw => tally.draws = 1,
    }
    Ok(tally)
}

fn merge(into: &mut Matchup, from: &Matchup) {
    into.sessions += from.sessions;
    into.player_wins += from.player_wins;
    into.computer_wins += from.computer_wins;
    into.draws += from.draws;
    into.rounds_won += from.rounds_won;
    into.rounds_lost += from.rounds_lost;
    into.rounds_tied += from.rounds_tied;
}

fn save_report(report: &Report, path: &str) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())
}
