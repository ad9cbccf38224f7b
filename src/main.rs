//! Wordle Infogain CLI
//!
//! Interactive command-line driver for the information-gain solver.

use clap::{Parser, Subcommand};
use log::warn;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use wordle_infogain::{parse_word, FeedbackCode, Preference, Session, SessionState, WordLists};

/// Recommend Wordle guesses by expected information gain
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Possible secret words (JSON array or one word per line)
    #[arg(short, long)]
    solutions: PathBuf,

    /// Extra words accepted as guesses but never secrets
    #[arg(short, long)]
    guesses: Option<PathBuf>,

    /// Opening guess
    #[arg(long, default_value = "soare")]
    first_guess: String,

    /// Worker threads used to evaluate guesses
    #[arg(short, long)]
    threads: Option<usize>,

    /// List the remaining candidates when at most this many are left
    #[arg(long, default_value_t = 10)]
    show: usize,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve interactively, entering the feedback for each guess
    Play,
    /// Print the recommended guess after the given rounds
    Suggest {
        /// Rounds already played, as guess:code (e.g. soare:bbyyg)
        #[arg(long = "history", value_name = "GUESS:CODE")]
        history: Vec<String>,
    },
    /// Play against a known secret word
    Solve { secret: String },
    /// Rank the best opening guesses
    Top {
        #[arg(default_value_t = 10)]
        n: usize,
    },
}

/// Guesses `solve` makes before giving up
const MAX_ROUNDS: usize = 20;

const INSTRUCTIONS: &str = "\
Enter results as a 5-letter string where each letter is:
  'b' for black/gray (not present)
  'y' for yellow (present but not at the specified position)
  'g' for green (present and at the specified position)
For example, a result of yellow, yellow, green, green, gray is 'yyggb'.";

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn print_candidates(session: &Session, show: usize) {
    let candidates = session.game().candidates();
    if candidates.len() > show {
        println!("There are {} compatible words remaining", candidates.len());
    } else {
        println!(
            "There are {} compatible words remaining: {}",
            candidates.len(),
            candidates.join(" ")
        );
    }
}

fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    io::stdout().flush()?;
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn read_feedback<R: BufRead>(reader: &mut R) -> io::Result<Option<FeedbackCode>> {
    loop {
        print!("Result: ");
        let Some(line) = read_line(reader)? else {
            return Ok(None);
        };
        match FeedbackCode::parse(&line) {
            Ok(code) => return Ok(Some(code)),
            Err(e) => println!("{}", e),
        }
    }
}

fn choose_guess<R: BufRead>(session: &Session, reader: &mut R) -> io::Result<Option<String>> {
    let selection = session.recommend();
    match selection.preferred() {
        None => {
            let fallback = session.game().candidates().first().cloned();
            if let Some(word) = &fallback {
                println!("No guess narrows the candidates further; trying {}", word);
            }
            Ok(fallback)
        }
        Some(Preference::Take { guess, gain, .. }) => {
            println!(
                "The best guess is {} with an information gain of {:.4} bits",
                guess, gain
            );
            Ok(Some(guess.to_string()))
        }
        Some(Preference::Choose {
            info,
            info_gain,
            win,
            win_gain,
        }) => {
            println!("1. Best guess for information gain: {} ({:.4} bits)", info, info_gain);
            println!("2. Best guess for compatibility: {} ({:.4} bits)", win, win_gain);
            println!("Which guess do you want to use? (1 or 2)");
            loop {
                let Some(choice) = read_line(reader)? else {
                    return Ok(None);
                };
                match choice.as_str() {
                    "1" => return Ok(Some(info.to_string())),
                    "2" => return Ok(Some(win.to_string())),
                    _ => println!("Invalid choice"),
                }
            }
        }
    }
}

fn run_interactive<R: BufRead>(
    lists: &WordLists,
    first_guess: &str,
    show: usize,
    mut reader: R,
) -> Result<(), Box<dyn Error>> {
    println!(
        "There are {} solutions and {} valid guesses.",
        lists.solutions().len(),
        lists.allowed_guesses().len()
    );
    println!("{}", INSTRUCTIONS);

    let mut session = Session::new(lists.new_game());
    let mut word = first_guess.to_string();

    loop {
        session.guess(&word)?;
        println!("Enter {}", word);

        let Some(code) = read_feedback(&mut reader)? else {
            return Ok(());
        };
        let state = session.feedback(code)?.clone();
        println!("{} is {}", word, code.to_code_string());
        if let Some(learned) = session.last_learned() {
            println!("New condition:\n{}", learned);
        }
        println!("Combined condition:\n{}", session.constraint());

        match state {
            SessionState::Contradiction => {
                println!("No words are compatible with this condition");
                return Ok(());
            }
            SessionState::Solved(answer) => {
                println!("The word is {}", answer);
                return Ok(());
            }
            _ => print_candidates(&session, show),
        }

        word = match choose_guess(&session, &mut reader)? {
            Some(next) => next,
            None => return Ok(()),
        };
    }
}

fn suggest(lists: &WordLists, history: &[String], show: usize) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new(lists.new_game());
    for round in history {
        let (guess, code) = round
            .split_once(':')
            .ok_or_else(|| format!("expected GUESS:CODE, got '{}'", round))?;
        session.guess(guess)?;
        match session.feedback(code.parse::<FeedbackCode>()?)? {
            SessionState::Contradiction => {
                println!("No words are compatible with this condition");
                return Ok(());
            }
            SessionState::Solved(answer) => {
                println!("The word is {}", answer);
                return Ok(());
            }
            _ => {}
        }
    }

    if !session.constraint().is_empty() {
        println!("Combined condition:\n{}", session.constraint());
        print_candidates(&session, show);
    }

    let selection = session.recommend();
    match selection.preferred() {
        Some(Preference::Take { guess, gain, viable }) => {
            println!("Best guess: {} ({:.4} bits)", guess, gain);
            if !viable {
                println!("  This word cannot be the answer");
            }
        }
        Some(Preference::Choose {
            info,
            info_gain,
            win,
            win_gain,
        }) => {
            println!("Best guess for information gain: {} ({:.4} bits)", info, info_gain);
            println!("Best guess for compatibility: {} ({:.4} bits)", win, win_gain);
        }
        None => println!("No guess narrows the candidates further"),
    }
    Ok(())
}

fn solve(lists: &WordLists, secret: &str, first_guess: &str) -> Result<(), Box<dyn Error>> {
    let secret = parse_word(secret)?;
    if !lists.solutions().contains(&secret) {
        warn!("{} is not in the solution list", secret);
    }

    let mut session = Session::new(lists.new_game());
    let mut word = first_guess.to_string();

    for _ in 0..MAX_ROUNDS {
        session.guess(&word)?;
        let code = FeedbackCode::observe(&secret, &word);
        println!("Guess {}: {} → {}", session.history().len() + 1, word, code);

        match session.feedback(code)?.clone() {
            SessionState::Contradiction => {
                println!("No words are compatible with this condition");
                return Ok(());
            }
            SessionState::Solved(answer) if answer == word => {
                println!("Solved in {} guesses.", session.history().len());
                return Ok(());
            }
            SessionState::Solved(answer) => {
                println!(
                    "Guess {}: {} → {}",
                    session.history().len() + 1,
                    answer,
                    FeedbackCode::ALL_CORRECT
                );
                println!("Solved in {} guesses.", session.history().len() + 1);
                return Ok(());
            }
            _ => {}
        }

        word = match session.recommend().preferred() {
            Some(Preference::Take { guess, .. }) => guess.to_string(),
            Some(Preference::Choose { info, .. }) => info.to_string(),
            None => match session.game().candidates().first() {
                Some(candidate) => candidate.clone(),
                None => return Ok(()),
            },
        };
    }

    println!("Failed to solve within {} guesses.", MAX_ROUNDS);
    Ok(())
}

fn top(lists: &WordLists, n: usize) {
    let game = lists.new_game();
    let ranked = game.ranked(&Default::default(), n);

    println!("{:>4} {:>8} {:>8} {:>12} Possible?", "#", "Word", "Bits", "Exp. Remain");
    println!("{}", "-".repeat(50));
    for (i, analysis) in ranked.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>8.3} {:>12.1} {}",
            i + 1,
            analysis.word,
            analysis.gain,
            analysis.expected_remaining,
            if analysis.is_possible_answer { "✓" } else { "" }
        );
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let lists = WordLists::load(&cli.solutions, cli.guesses.as_deref())?;
    let first_guess = parse_word(&cli.first_guess)?;
    if !lists.allowed_guesses().contains(&first_guess) {
        return Err(format!("'{}' is not an allowed guess", first_guess).into());
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_interactive(&lists, &first_guess, cli.show, io::stdin().lock()),
        Command::Suggest { history } => suggest(&lists, &history, cli.show),
        Command::Solve { secret } => solve(&lists, &secret, &first_guess),
        Command::Top { n } => {
            top(&lists, n);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}
