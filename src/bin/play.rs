//! Play against the computer in the terminal.
//!
//! Usage:
//!   cargo run --release --bin play -- [OPTIONS]
//!
//! Options:
//!   --config <FILE>      Session configuration JSON file (optional)
//!   --classic            Five-move classical game instead of the six-move one
//!   --difficulty <D>     easy | medium | hard
//!   --rounds <N>         Rounds per game
//!   --seed <N>           Random seed (optional)
//!
//! Commands:
//!   <move>               rock, paper, scissors, lizard, spock, stone
//!   easy|medium|hard     Change difficulty for the next rounds
//!   status | rules       Show scores / who beats whom
//!   log [FILE]           Save the session log as JSON
//!   restart | quit

use std::env;
use std::io::{self, BufRead, Write};

use rpsls_arena::opponent::Difficulty;
use rpsls_arena::rules::RuleSet;
use rpsls_arena::session::{Session, SessionConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut config_file: Option<String> = None;
    let mut classic = false;
    let mut difficulty: Option<Difficulty> = None;
    let mut rounds: Option<u32> = None;
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                if i < args.len() {
                    config_file = Some(args[i].clone());
                }
            }
            "--classic" => classic = true,
            "--difficulty" | "-d" => {
                i += 1;
                if i < args.len() {
                    difficulty = args[i].parse().ok();
                }
            }
            "--rounds" | "-r" => {
                i += 1;
                if i < args.len() {
                    rounds = args[i].parse().ok();
                }
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = match &config_file {
        Some(path) => match SessionConfig::from_json_file(path) {
            Ok(config) => {
                println!("Loaded config from: {}", path);
                config
            }
            Err(e) => {
                eprintln!("Could not load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None if classic => SessionConfig::classic(),
        None => SessionConfig::extended(),
    };
    if let Some(d) = difficulty {
        config = config.with_difficulty(d);
    }
    if let Some(n) = rounds {
        config = config.with_rounds(n);
    }
    if let Some(s) = seed {
        config = config.with_seed(s);
    }

    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    println!("=== Rock Paper Scissors Lizard Spock ===");
    println!(
        "Moves: {}",
        session
            .rules()
            .moves()
            .iter()
            .map(|m| m.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "Rounds: {} | Difficulty: {} | type 'help' for commands\n",
        session.state().rounds_max,
        session.difficulty()
    );

    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let mut words = line.split_whitespace();
        let command = match words.next() {
            Some(word) => word.to_ascii_lowercase(),
            None => {
                prompt();
                continue;
            }
        };

        match command.as_str() {
            "quit" | "exit" | "q" => break,
            "help" => print_commands(),
            "restart" => {
                session.reset();
                println!("New game. Difficulty: {}", session.difficulty());
            }
            "status" => print_status(&session),
            "rules" => print_rules(session.rules()),
            "log" => {
                let log = session.log();
                let path = words
                    .next()
                    .map(String::from)
                    .unwrap_or_else(|| log.default_file_name());
                match log.save_json(&path) {
                    Ok(_) => println!("Saved log: {}", path),
                    Err(e) => eprintln!("Error saving log: {}", e),
                }
            }
            word => {
                if let Ok(d) = word.parse::<Difficulty>() {
                    session.set_difficulty(d);
                    println!("Difficulty: {}", d);
                } else {
                    match session.submit_move_named(word) {
                        Ok(round) => {
                            println!(
                                "Round {}: {} vs {} - {}",
                                round.sequence, round.player, round.computer, round.outcome
                            );
                            print_status(&session);
                            if session.is_finished() {
                                println!("\nGame Over - {}", session.summary());
                                println!("Type 'restart' to play again or 'log' to save the session.");
                            }
                        }
                        Err(e) => println!("{}", e),
                    }
                }
            }
        }
        prompt();
    }
}

fn prompt() {
    print!("> ");
    io::stdout().flush().ok();
}

fn print_status(session: &Session) {
    let state = session.state();
    println!(
        "  Round {}/{} | Tries left {} | You {} - Computer {} (Ties {})",
        state.rounds_played,
        state.rounds_max,
        state.tries_left,
        state.player_score,
        state.computer_score,
        state.ties
    );
}

fn print_rules(rules: &RuleSet) {
    for &m in rules.moves() {
        let beaten: Vec<&str> = rules.defeats(m).iter().map(|x| x.name()).collect();
        println!("  {:<9} beats {}", m.name(), beaten.join(", "));
    }
}

fn print_commands() {
    println!("  <move>             play a round");
    println!("  easy|medium|hard   change difficulty");
    println!("  status | rules     show scores / who beats whom");
    println!("  log [FILE]         save the session log as JSON");
    println!("  restart | quit");
}

fn print_usage() {
    println!("Usage: play [--config FILE] [--classic] [--difficulty D] [--rounds N] [--seed N]");
}
