use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::input::TokenReader;
use crate::output::TerminalOutput;
use crate::quiz::definition::QuizDefinition;
use crate::quiz::Quiz;
use crate::settings::{Settings, SettingsError, USAGE};

mod input;
mod output;
mod quiz;
mod settings;

const EXIT_USAGE: i32 = 2;

fn init_logging() {
    // Stdout is the quiz itself, diagnostics go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_quiz(settings: &Settings) -> Result<QuizDefinition> {
    let mut definition = QuizDefinition::open(&settings.quiz_path)?;
    if definition.is_empty() {
        warn!("{} contains no questions", settings.quiz_path.display());
    }
    if settings.shuffle {
        let seed = match settings.seed {
            Some(seed) => seed,
            None => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .context("System clock is set before 1970")?
                .as_secs(),
        };
        info!("Shuffling questions with seed {}", seed);
        definition.shuffle(&mut StdRng::seed_from_u64(seed));
    }
    Ok(definition)
}

fn main() {
    init_logging();

    let settings = match Settings::from_args(env::args().skip(1)) {
        Ok(settings) => settings,
        Err(SettingsError::HelpRequested) => {
            eprintln!("{}", USAGE);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            process::exit(EXIT_USAGE);
        }
    };

    let definition = match load_quiz(&settings) {
        Ok(definition) => definition,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(EXIT_USAGE);
        }
    };

    let quiz = Quiz::new(
        definition,
        settings.time_limit(),
        TokenReader::stdin(),
        TerminalOutput,
    );
    quiz.run();
}
