use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cinequiz::catalog::{load_and_merge, Catalog};
use cinequiz::config::{AppConfig, CliConfig, FileConfig};
use cinequiz::quiz::{generate_question, Difficulty};
use cinequiz::session::SessionState;

mod cli_style;

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(name = "cinequiz", styles = cli_style::get_styles())]
#[command(about = "Multiple-choice movie trivia over IMDb-style data dumps")]
struct CliArgs {
    /// Path to the title dump (title.basics.tsv).
    #[clap(long, value_parser = parse_path)]
    title_basics: Option<PathBuf>,

    /// Path to the ratings dump (title.ratings.tsv).
    #[clap(long, value_parser = parse_path)]
    title_ratings: Option<PathBuf>,

    /// Path to the principals dump (title.principals.tsv).
    #[clap(long, value_parser = parse_path)]
    title_principals: Option<PathBuf>,

    /// Path to the names dump (name.basics.tsv).
    #[clap(long, value_parser = parse_path)]
    name_basics: Option<PathBuf>,

    /// Minimum average rating a movie needs to enter the catalog.
    #[clap(long, default_value_t = 7.0)]
    rating_threshold: f64,

    /// Number of questions to play; prompted interactively when omitted.
    #[clap(short = 'n', long)]
    questions: Option<usize>,

    /// Difficulty tier; prompted interactively when omitted.
    #[clap(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Seed for the question generator, for reproducible sessions.
    #[clap(long)]
    seed: Option<u64>,

    /// Path to a TOML config file; its values override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    config: Option<PathBuf>,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            title_basics: self.title_basics.clone(),
            title_ratings: self.title_ratings.clone(),
            title_principals: self.title_principals.clone(),
            name_basics: self.name_basics.clone(),
            rating_threshold: self.rating_threshold,
            questions: self.questions,
            difficulty: self.difficulty,
            seed: self.seed,
        }
    }
}

const PROMPT: &str = ">> ";

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    info!(
        "cinequiz {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH")
    );

    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    info!("Loading catalog sources, this can take a while...");
    let catalog = load_and_merge(&config.sources, config.rating_threshold)
        .context("Could not build the movie catalog")?;
    if catalog.is_empty() {
        anyhow::bail!(
            "No movies survived the merge filters (rating threshold {:.1}); nothing to quiz on.",
            config.rating_threshold
        );
    }

    let mut rng: StdRng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    run_session(&catalog, &config, &mut rng)
}

fn run_session(catalog: &Catalog, config: &AppConfig, rng: &mut impl Rng) -> Result<()> {
    cli_style::print_banner();

    let mut rl = DefaultEditor::new()?;

    let num_questions = match config.questions {
        Some(n) => n,
        None => match prompt_question_count(&mut rl)? {
            Some(n) => n,
            None => return Ok(()),
        },
    };
    let difficulty = match config.difficulty {
        Some(d) => d,
        None => match prompt_difficulty(&mut rl)? {
            Some(d) => d,
            None => return Ok(()),
        },
    };

    let mut session = SessionState::new();
    for number in 1..=num_questions {
        let Some(question) = generate_question(catalog, difficulty, rng) else {
            // Unreachable with a non-empty catalog, which main checked.
            break;
        };
        cli_style::print_question(number, num_questions, &question.prompt, &question.options);

        let Some(given) = prompt_choice(&mut rl, question.options.len())? else {
            break;
        };
        let given_answer = &question.options[given - 1];
        if session.record(&question.prompt, &question.correct_answer, given_answer) {
            cli_style::print_correct();
        } else {
            cli_style::print_wrong(&question.correct_answer);
        }
    }

    if session.answered() > 0 {
        cli_style::print_recap(session.history(), session.score());
    }
    cli_style::print_goodbye();
    Ok(())
}

/// Read one line, mapping ctrl-C/ctrl-D to `None` so the session can end
/// early without an error.
fn read_line(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) => Ok(Some(line.trim().to_owned())),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e).context("Failed to read input"),
    }
}

fn prompt_question_count(rl: &mut DefaultEditor) -> Result<Option<usize>> {
    loop {
        println!("How many questions would you like to answer?");
        let Some(line) = read_line(rl, PROMPT)? else {
            return Ok(None);
        };
        match line.parse::<usize>() {
            Ok(n) if n > 0 => return Ok(Some(n)),
            _ => cli_style::print_warning("Please enter a positive number."),
        }
    }
}

fn prompt_difficulty(rl: &mut DefaultEditor) -> Result<Option<Difficulty>> {
    use clap::ValueEnum;
    loop {
        println!("Select difficulty (easy, medium, hard):");
        let Some(line) = read_line(rl, PROMPT)? else {
            return Ok(None);
        };
        match Difficulty::from_str(&line, true) {
            Ok(difficulty) => return Ok(Some(difficulty)),
            Err(_) => {
                cli_style::print_warning("Please choose from easy, medium, or hard.");
            }
        }
    }
}

/// Ask for a 1-based option number until the answer is in range.
fn prompt_choice(rl: &mut DefaultEditor, option_count: usize) -> Result<Option<usize>> {
    loop {
        let Some(line) = read_line(rl, PROMPT)? else {
            return Ok(None);
        };
        match line.parse::<usize>() {
            Ok(choice) if (1..=option_count).contains(&choice) => return Ok(Some(choice)),
            _ => cli_style::print_warning(&format!(
                "Please enter a number between 1 and {}.",
                option_count
            )),
        }
    }
}
