//! Question generation and answer evaluation.
//!
//! Everything in this module is a pure, synchronous transformation over
//! immutable inputs. Randomness is injected as `R: Rng + ?Sized` so tests can
//! drive generation with a seeded source.
use crate::country::{are_confusable, Country};
use rand::seq::SliceRandom;
use std::fmt;

/// Default number of candidate countries offered per question.
pub const DEFAULT_CANDIDATE_COUNT: usize = 4;

/// Stop condition for a running game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Stop on the first incorrect answer.
    Classic,
    /// Fixed countdown per question; late submissions time out.
    Timed,
    /// No stop condition.
    Endless,
}

/// How the player submits an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Must match one candidate's common name exactly.
    MultipleChoice,
    /// Free-form string compared against a wider acceptable-name set.
    Text,
}

/// Session-wide configuration, immutable while a game is running.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub mode: Mode,
    pub input_mode: InputMode,
}

/// One round of the game.
///
/// `correct_country` is always a member of `candidates`.
#[derive(Debug, Clone)]
pub struct Question {
    pub candidates: Vec<Country>,
    pub correct_country: Country,
}

/// What the player did with a question.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Free-form or selected-option text.
    Answered(String),
    /// Explicit "don't know".
    Declined,
    /// No response before the deadline.
    TimedOut,
}

/// The judged record of one completed round, immutable once created.
#[derive(Debug, Clone)]
pub struct Answer {
    pub candidates: Vec<Country>,
    pub correct_country: Country,
    pub response: Response,
    /// Elapsed milliseconds from question display to response; `None` for
    /// timed-out/declined answers.
    pub time_taken_millis: Option<f64>,
}

/// Failure generating a question from a given catalog.
#[derive(Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// The catalog was empty (caller contract violation).
    EmptyCatalog,
    /// The confusable-flag filter emptied the selection pool before enough
    /// candidates were picked. This is a configuration error; the filter is
    /// not relaxed.
    PoolExhausted { picked: usize, requested: usize },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::EmptyCatalog => write!(f, "cannot generate a question from an empty catalog"),
            GenerateError::PoolExhausted { picked, requested } => write!(
                f,
                "candidate pool exhausted after {} of {} picks; the catalog is too small or too confusable",
                picked, requested
            ),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Generates one question: `count` candidate countries with no code
/// duplicates and no two members of the same confusable-flag group, plus a
/// uniformly chosen correct country among them.
///
/// A catalog with `count` or fewer entries is served whole.
pub fn generate<R: rand::Rng + ?Sized>(
    rng: &mut R,
    catalog: &[Country],
    count: usize,
) -> Result<Question, GenerateError> {
    if catalog.is_empty() {
        return Err(GenerateError::EmptyCatalog);
    }

    let candidates = if catalog.len() <= count {
        catalog.to_vec()
    } else {
        let mut picked: Vec<Country> = Vec::with_capacity(count);
        for _ in 0..count {
            // Pool = catalog minus picked countries minus anything sharing a
            // confusable-flag group with a picked country.
            let pool: Vec<&Country> = catalog
                .iter()
                .filter(|c| !picked.iter().any(|p| p.code == c.code))
                .filter(|c| !picked.iter().any(|p| are_confusable(&p.code, &c.code)))
                .collect();
            let choice = pool.choose(rng).ok_or(GenerateError::PoolExhausted {
                picked: picked.len(),
                requested: count,
            })?;
            picked.push((*choice).clone());
        }
        picked
    };

    let correct_country = candidates
        .choose(rng)
        .cloned()
        .ok_or(GenerateError::EmptyCatalog)?;

    Ok(Question {
        candidates,
        correct_country,
    })
}

/// Normalizes free-text input: trims, collapses internal whitespace runs to
/// single spaces, and lowercases.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// All name strings accepted for `correct` in text mode: its common name,
/// official name, and alternate spellings, plus the same for every catalog
/// country sharing a confusable-flag group with it.
fn acceptable_names<'a>(correct: &'a Country, catalog: &'a [Country]) -> Vec<&'a str> {
    let mut names: Vec<&str> = Vec::new();
    let mut push_all = |country: &'a Country| {
        names.push(country.common_name.as_str());
        names.push(country.official_name.as_str());
        names.extend(country.alternate_spellings.iter().map(String::as_str));
    };

    push_all(correct);
    for country in catalog {
        if country.code != correct.code && are_confusable(&country.code, &correct.code) {
            push_all(country);
        }
    }
    names
}

/// Judges a completed answer.
///
/// Multiple-choice submissions must equal the correct country's common name
/// exactly (the option set is closed, so no normalization applies). Text
/// submissions are normalized and compared against the acceptable-name set,
/// which includes flag-confusable countries.
pub fn is_correct(answer: &Answer, options: &Options, catalog: &[Country]) -> bool {
    let submitted = match &answer.response {
        Response::Answered(text) => text,
        Response::Declined | Response::TimedOut => return false,
    };

    match options.input_mode {
        InputMode::MultipleChoice => *submitted == answer.correct_country.common_name,
        InputMode::Text => {
            let submitted = normalize(submitted);
            acceptable_names(&answer.correct_country, catalog)
                .iter()
                .any(|name| normalize(name) == submitted)
        }
    }
}
