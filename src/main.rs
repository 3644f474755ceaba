//! Mastermind Solver - CLI
//!
//! Mastermind with TUI and CLI modes: let the computer break your code, break
//! one yourself, or benchmark the strategies.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        SolveConfig, analyze_code, benchmark_secrets, run_benchmark, run_guess, run_simple,
        solve_code,
    },
    config::{GameSettings, GameVariant, SymbolKind},
    core::Code,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::StrategyType,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind with minimax and consistent-random codebreakers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: minimax (default) or random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// Symbols: colors (default) or digits
    #[arg(long, global = true, default_value = "colors")]
    symbols: String,

    /// Number of colours in play (2-6)
    #[arg(long, global = true, default_value_t = GameSettings::DEFAULT_COLOR_COUNT)]
    colors: usize,

    /// Number of digits in play (2-10)
    #[arg(long, global = true, default_value_t = GameSettings::DEFAULT_DIGIT_COUNT)]
    digits: usize,

    /// Code length
    #[arg(short, long, global = true, default_value_t = GameSettings::DEFAULT_CODE_LENGTH)]
    length: usize,

    /// Maximum attempts per game
    #[arg(short = 'm', long, global = true, default_value_t = GameSettings::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Tolerate some inconsistent feedback (allowed-cheating variant)
    #[arg(long, global = true)]
    cheating: bool,

    /// Inconsistent answers tolerated in the cheating variant
    #[arg(long, global = true, default_value_t = GameSettings::DEFAULT_ALLOWED_CHEATS)]
    allowed_cheats: usize,

    /// Seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI: you hold the secret, the computer guesses (default)
    Play,

    /// Simple CLI mode: the computer holds the secret, you guess
    Simple,

    /// Text mode: you hold the secret, the computer guesses
    Guess,

    /// Let the computer solve a specific secret
    Solve {
        /// The secret, e.g. RGBY or 0123
        code: String,

        /// Show candidate counts and guess metrics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze how a guess splits the full code space
    Analyze {
        /// Guess to analyze
        code: String,
    },

    /// Benchmark a strategy against many secrets
    Benchmark {
        /// Number of random secrets
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Play every possible secret instead
        #[arg(long)]
        all: bool,
    },
}

impl Cli {
    fn settings(&self) -> Result<GameSettings> {
        let Some(symbol_kind) = SymbolKind::from_name(&self.symbols) else {
            bail!("Unknown symbol kind '{}', use colors or digits", self.symbols);
        };
        let variant = if self.cheating {
            GameVariant::AllowedCheating
        } else {
            GameVariant::Standard
        };

        Ok(GameSettings::new(
            symbol_kind,
            self.colors,
            self.digits,
            self.length,
            self.max_attempts,
            variant,
            self.allowed_cheats,
            self.seed,
        )?)
    }

    fn strategy(&self) -> StrategyType {
        StrategyType::from_name(&self.strategy.to_lowercase(), self.seed)
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with prompts or the TUI
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = cli.settings()?;
    info!(?settings, strategy = %cli.strategy, "starting");

    // Default to Play mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => run_play_command(cli.strategy(), settings),
        Commands::Simple => run_simple(&settings),
        Commands::Guess => run_guess_command(&cli, &settings),
        Commands::Solve { code, verbose } => run_solve_command(&cli, &settings, code, *verbose),
        Commands::Analyze { code } => {
            let result = analyze_code(code, &settings)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, all } => {
            run_benchmark_command(&cli, &settings, (!*all).then_some(*count))
        }
    }
}

fn run_guess_command(cli: &Cli, settings: &GameSettings) -> Result<()> {
    let outcome = run_guess(cli.strategy(), settings)?;
    if settings.variant() == GameVariant::Standard && outcome.cheating_detected {
        bail!(
            "{} inconsistent answers for secret {}",
            outcome.detected_cheats,
            outcome
                .secret
                .as_ref()
                .map_or_else(String::new, ToString::to_string)
        );
    }
    Ok(())
}

fn run_solve_command(cli: &Cli, settings: &GameSettings, code: &str, verbose: bool) -> Result<()> {
    let secret = Code::parse(code, &settings.alphabet()?)?;
    let result = solve_code(cli.strategy(), settings, SolveConfig::new(secret))?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(cli: &Cli, settings: &GameSettings, count: Option<usize>) -> Result<()> {
    let secrets = benchmark_secrets(settings, count)?;
    println!(
        "Running benchmark on {} secrets ({} positions, {} symbols)...",
        secrets.len(),
        settings.code_length(),
        settings.alphabet()?.len()
    );

    let name = cli.strategy.to_lowercase();
    let seed = cli.seed;
    let result = run_benchmark(
        |index| StrategyType::from_name(&name, seed.map(|s| s.wrapping_add(index as u64))),
        settings,
        &secrets,
    )?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(strategy: StrategyType, settings: GameSettings) -> Result<()> {
    use mastermind_solver::interactive::{App, run_tui};

    let app = App::new(strategy, settings)?;
    run_tui(app)
}
