mod catalog;
mod country;
mod quiz;
mod scoring;

use crate::country::Country;
use crate::quiz::{
    generate, is_correct, Answer, InputMode, Mode, Options, Question, Response,
    DEFAULT_CANDIDATE_COUNT,
};
use crate::scoring::{
    compute_scores, current_streak, is_all_correct_achievement, is_streak_at_threshold,
};
use std::io::{self, Write};
use std::time::Instant;

/// Countdown per question in timed mode.
const TIME_LIMIT_MILLIS: f64 = 10_000.0;

fn main() {
    println!("Welcome to Flag Quiz (Rust / terminal edition)");

    // FLAG_QUIZ_DB overrides the catalog location (used by the test suite).
    let db_path =
        std::env::var("FLAG_QUIZ_DB").unwrap_or_else(|_| catalog::DB_PATH.to_string());
    let conn = match catalog::open(&db_path) {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("Error opening country catalog: {e}");
            return;
        }
    };
    let countries = match catalog::load(&conn) {
        Ok(countries) => countries,
        Err(e) => {
            eprintln!("Error loading country catalog: {e}");
            return;
        }
    };
    if countries.is_empty() {
        eprintln!("Country catalog is empty.");
        return;
    }
    println!("Loaded {} countries and territories.", countries.len());
    println!();
    print_menu_help();

    let mut options = Options {
        mode: Mode::Classic,
        input_mode: InputMode::MultipleChoice,
    };
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut input = String::new();
        match stdin.read_line(&mut input) {
            Ok(0) => {
                println!("\nGoodbye!");
                break;
            }
            Ok(_) => {}
            Err(_) => {
                eprintln!("Error reading input, try again.");
                continue;
            }
        }

        let raw = input.trim();
        if raw.is_empty() {
            continue;
        }

        let lc_cmd = raw.to_lowercase();

        match lc_cmd.as_str() {
            "quit" | "exit" => {
                println!("Goodbye!");
                break;
            }
            "help" => print_menu_help(),
            "options" => print_options(&options),
            "list" => {
                println!("Catalog ({} countries/territories):", countries.len());
                for country in &countries {
                    println!(
                        "  {} {} ({})",
                        flag_emoji(&country.code),
                        country.common_name,
                        country.code
                    );
                }
                println!();
            }
            "start" => run_game(&countries, &options),
            other => {
                if let Some(mode) = other.strip_prefix("mode ") {
                    match mode.trim() {
                        "classic" => options.mode = Mode::Classic,
                        "timed" => options.mode = Mode::Timed,
                        "endless" => options.mode = Mode::Endless,
                        bad => {
                            println!("Unknown mode '{bad}' (expected classic, timed or endless).\n");
                            continue;
                        }
                    }
                    print_options(&options);
                } else if let Some(input_mode) = other.strip_prefix("input ") {
                    match input_mode.trim() {
                        "choice" | "multiple-choice" => {
                            options.input_mode = InputMode::MultipleChoice
                        }
                        "text" => options.input_mode = InputMode::Text,
                        bad => {
                            println!("Unknown input mode '{bad}' (expected choice or text).\n");
                            continue;
                        }
                    }
                    print_options(&options);
                } else {
                    println!("Unknown command: '{other}'");
                    println!("Type 'help' to see available commands.\n");
                }
            }
        }
    }
}

fn print_menu_help() {
    println!("Commands:");
    println!("  start   -> begin a game with the current options");
    println!("  mode    -> set game mode (e.g. 'mode timed'; classic, timed or endless)");
    println!("  input   -> set input mode (e.g. 'input text'; choice or text)");
    println!("  options -> show current options");
    println!("  list    -> show the country catalog");
    println!("  help    -> show this help");
    println!("  quit    -> exit");
    println!();
}

fn print_options(options: &Options) {
    println!(
        "Mode: {} | Input: {}\n",
        mode_name(options.mode),
        input_mode_name(options.input_mode)
    );
}

fn mode_name(mode: Mode) -> &'static str {
    match mode {
        Mode::Classic => "classic",
        Mode::Timed => "timed",
        Mode::Endless => "endless",
    }
}

fn input_mode_name(input_mode: InputMode) -> &'static str {
    match input_mode {
        InputMode::MultipleChoice => "multiple-choice",
        InputMode::Text => "text",
    }
}

/// Unicode flag for a country code (regional indicator pair).
fn flag_emoji(code: &str) -> String {
    code.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| {
            let offset = c.to_ascii_uppercase() as u32 - 'A' as u32;
            char::from_u32(0x1F1E6 + offset).unwrap_or('?')
        })
        .collect()
}

/// Plays one game with the given options, then prints the summary.
fn run_game(countries: &[Country], options: &Options) {
    let mut rng = rand::thread_rng();
    let mut history: Vec<Answer> = Vec::new();

    println!("\n--- GAME START ---");
    match options.input_mode {
        InputMode::MultipleChoice => {
            println!("Guess the flag: enter an option number, 'pass' to skip, 'end' to finish.")
        }
        InputMode::Text => {
            println!("Guess the flag: type the country's name, 'pass' to skip, 'end' to finish.")
        }
    }
    if options.mode == Mode::Timed {
        println!(
            "Timed mode: answers later than {:.0} seconds score as out of time.",
            TIME_LIMIT_MILLIS / 1000.0
        );
    }

    loop {
        let question = match generate(&mut rng, countries, DEFAULT_CANDIDATE_COUNT) {
            Ok(question) => question,
            Err(e) => {
                eprintln!("Error generating question: {e}");
                break;
            }
        };

        println!("\n--- ROUND {} ---", history.len() + 1);
        println!(
            "Whose flag is this?  {}",
            flag_emoji(&question.correct_country.code)
        );
        if options.input_mode == InputMode::MultipleChoice {
            for (i, candidate) in question.candidates.iter().enumerate() {
                println!("{:>2}: {}", i + 1, candidate.common_name);
            }
        }

        let shown_at = Instant::now();
        let response = match read_response(options, &question) {
            Some(response) => response,
            None => break,
        };
        let elapsed_millis = shown_at.elapsed().as_secs_f64() * 1000.0;

        // Late submissions in timed mode are recorded as timeouts; declined
        // and timed-out answers carry no time.
        let (response, time_taken_millis) = match response {
            Response::Answered(text) => {
                if options.mode == Mode::Timed && elapsed_millis > TIME_LIMIT_MILLIS {
                    (Response::TimedOut, None)
                } else {
                    (Response::Answered(text), Some(elapsed_millis))
                }
            }
            other => (other, None),
        };

        let answer = Answer {
            candidates: question.candidates.clone(),
            correct_country: question.correct_country.clone(),
            response,
            time_taken_millis,
        };
        let correct = is_correct(&answer, options, countries);
        let timed_out = answer.response == Response::TimedOut;
        let previous_streak = current_streak(&history, options, countries);
        history.push(answer);

        if correct {
            println!("Correct!");
            let streak = current_streak(&history, options, countries);
            if is_streak_at_threshold(streak) {
                println!("\u{1F389} Nice! {streak} in a row!");
            }
        } else {
            let verdict = if timed_out { "Out of time!" } else { "Incorrect!" };
            println!(
                "{} It's the flag of {}.",
                verdict, question.correct_country.common_name
            );
            if previous_streak >= 3 {
                println!("\u{1F622} Awh! You just lost your streak of {previous_streak}!");
            }
        }

        let scores = compute_scores(&history, options, countries);
        println!(
            "Streak: {}  Score: {:.0}",
            current_streak(&history, options, countries),
            scores.total_score
        );

        if options.mode == Mode::Classic && !correct {
            println!("Game over!");
            break;
        }
    }

    print_summary(&history, options, countries);
}

/// Reads one round's submission. Returns `None` when the player ends the
/// game (or stdin closes).
fn read_response(options: &Options, question: &Question) -> Option<Response> {
    let stdin = io::stdin();

    loop {
        print!("Answer: ");
        io::stdout().flush().ok();

        let mut input = String::new();
        match stdin.read_line(&mut input) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(_) => {
                eprintln!("Error reading input, try again.");
                continue;
            }
        }

        let guess = input.trim();
        if guess.is_empty() {
            continue;
        }

        if guess.eq_ignore_ascii_case("end") {
            print!("End the game? (y/n): ");
            io::stdout().flush().ok();
            let mut confirm = String::new();
            match stdin.read_line(&mut confirm) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(_) => continue,
            }
            if confirm.trim().eq_ignore_ascii_case("y") {
                return None;
            }
            continue;
        }

        if guess.eq_ignore_ascii_case("pass") {
            return Some(Response::Declined);
        }

        match options.input_mode {
            InputMode::MultipleChoice => match guess.parse::<usize>() {
                Ok(n) if n >= 1 && n <= question.candidates.len() => {
                    return Some(Response::Answered(
                        question.candidates[n - 1].common_name.clone(),
                    ));
                }
                _ => {
                    println!(
                        "Enter a number between 1 and {}, 'pass', or 'end'.",
                        question.candidates.len()
                    );
                }
            },
            InputMode::Text => return Some(Response::Answered(guess.to_string())),
        }
    }
}

/// Prints the per-answer board and the score breakdown.
fn print_summary(history: &[Answer], options: &Options, countries: &[Country]) {
    println!("\n--- SUMMARY ---");
    if history.is_empty() {
        println!("No answers recorded.");
        println!("--- END ---\n");
        return;
    }

    for (i, answer) in history.iter().enumerate() {
        let status = if is_correct(answer, options, countries) {
            "\u{2713}"
        } else {
            "\u{2717}"
        };
        let response = match &answer.response {
            Response::Answered(text) => format!("answered \"{text}\""),
            Response::Declined => "passed".to_string(),
            Response::TimedOut => "ran out of time".to_string(),
        };
        let time = match answer.time_taken_millis {
            Some(millis) => format!(" ({})", format_millis(millis)),
            None => String::new(),
        };
        println!(
            "{:>2} {} {} {} [{}]{}",
            i + 1,
            status,
            flag_emoji(&answer.correct_country.code),
            answer.correct_country.common_name,
            response,
            time
        );
    }

    let scores = compute_scores(history, options, countries);
    let best_streak = scores.streaks.iter().max().copied().unwrap_or(0);
    println!();
    println!("Answers:           {}", history.len());
    println!("Best streak:       {}", best_streak);
    println!("Base score:        {:.0}", scores.total_base_score);
    println!("Streak bonus:      {:.0}", scores.total_streak_score);
    println!(
        "Achievement bonus: {:.0}",
        scores.all_correct_achievement_bonus
    );
    println!("Total score:       {:.0}", scores.total_score);
    if is_all_correct_achievement(history, options, countries) {
        println!("\u{1F389} Awesome! You got 100%!");
    }
    println!("--- END ---\n");
}

/// Short human-readable duration, e.g. "1.2s" or "680ms".
fn format_millis(millis: f64) -> String {
    if millis >= 1000.0 {
        format!("{:.1}s", millis / 1000.0)
    } else {
        format!("{millis:.0}ms")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_emoji_maps_to_regional_indicators() {
        assert_eq!(flag_emoji("FR"), "\u{1F1EB}\u{1F1F7}");
        assert_eq!(flag_emoji("ro"), "\u{1F1F7}\u{1F1F4}");
    }

    #[test]
    fn test_format_millis() {
        assert_eq!(format_millis(680.0), "680ms");
        assert_eq!(format_millis(1230.0), "1.2s");
    }
}
