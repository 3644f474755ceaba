//! Benchmark command
//!
//! Tests strategy performance across many secrets, in parallel.

use super::solve::{SolveConfig, solve_code};
use crate::config::GameSettings;
use crate::core::Code;
use crate::error::GameError;
use crate::solver::Strategy;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub strategy: &'static str,
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Attempts needed -> number of solved games
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Secrets to benchmark against
///
/// `None` means every code of the configured length; otherwise `count` random
/// codes drawn with the settings' seed.
///
/// # Errors
/// Propagates errors from building the alphabet or drawing codes.
pub fn benchmark_secrets(settings: &GameSettings, count: Option<usize>) -> Result<Vec<Code>, GameError> {
    let alphabet = settings.alphabet()?;
    let length = settings.code_length();

    let Some(count) = count else {
        return Ok(alphabet.codes(length).collect());
    };

    let mut rng = settings
        .seed()
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    (0..count)
        .map(|_| alphabet.random_code(length, &mut rng))
        .collect()
}

/// Run a fresh strategy against every secret
///
/// `make_strategy` receives the game index so seeded runs stay reproducible
/// no matter how rayon schedules the games.
///
/// # Errors
/// Returns the first error raised by any game.
pub fn run_benchmark<S, F>(
    make_strategy: F,
    settings: &GameSettings,
    secrets: &[Code],
) -> Result<BenchmarkResult, GameError>
where
    S: Strategy,
    F: Fn(usize) -> S + Sync,
{
    let start = Instant::now();
    let pb = ProgressBar::new(secrets.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let outcomes: Vec<(bool, usize)> = secrets
        .par_iter()
        .enumerate()
        .map(|(index, secret)| {
            let config = SolveConfig {
                secret: secret.clone(),
                with_metrics: false,
            };
            let outcome = solve_code(make_strategy(index), settings, config);
            pb.inc(1);
            outcome.map(|result| (result.success, result.attempts()))
        })
        .collect::<Result<_, _>>()?;

    pb.finish_with_message("Complete!");
    let strategy = make_strategy(0).name();
    let duration = start.elapsed();

    let total_games = outcomes.len();
    let total_guesses: usize = outcomes.iter().map(|&(_, guesses)| guesses).sum();
    let solved = outcomes.iter().filter(|&&(success, _)| success).count();

    let mut distribution = BTreeMap::new();
    for &(_, guesses) in outcomes.iter().filter(|&&(success, _)| success) {
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    info!(total_games, solved, elapsed = ?duration, "benchmark finished");

    Ok(BenchmarkResult {
        strategy,
        total_games,
        solved,
        failed: total_games - solved,
        total_guesses,
        average_guesses: if total_games == 0 {
            0.0
        } else {
            total_guesses as f64 / total_games as f64
        },
        min_guesses: outcomes.iter().map(|&(_, g)| g).min().unwrap_or(0),
        max_guesses: outcomes.iter().map(|&(_, g)| g).max().unwrap_or(0),
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameVariant, SymbolKind};
    use crate::solver::{MinimaxStrategy, StrategyType};

    fn small_settings(seed: Option<u64>) -> GameSettings {
        GameSettings::new(
            SymbolKind::Colors,
            4,
            10,
            3,
            10,
            GameVariant::Standard,
            0,
            seed,
        )
        .unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let settings = GameSettings::create_default();
        let secrets = benchmark_secrets(&GameSettings::create_default(), Some(10)).unwrap();
        let result = run_benchmark(|i| MinimaxStrategy::new(Some(i as u64)), &settings, &secrets).unwrap();

        assert_eq!(result.total_games, 10);
        assert_eq!(result.failed, 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= settings.max_attempts());
    }

    #[test]
    fn exhaustive_benchmark_covers_every_code() {
        let settings = small_settings(Some(5));
        let secrets = benchmark_secrets(&settings, None).unwrap();
        assert_eq!(secrets.len(), 64);

        let result = run_benchmark(
            |i| StrategyType::from_name("random", Some(i as u64)),
            &settings,
            &secrets,
        )
        .unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert_eq!(result.solved + result.failed, 64);
        assert_eq!(result.strategy, "Random consistent");
    }

    #[test]
    fn seeded_secrets_repeat() {
        let settings = small_settings(Some(11));
        let first = benchmark_secrets(&settings, Some(20)).unwrap();
        let second = benchmark_secrets(&settings, Some(20)).unwrap();
        assert_eq!(first, second);
        assert!(first.iter().all(|code| code.len() == 3));
    }

    #[test]
    fn benchmark_empty_secret_list() {
        let settings = GameSettings::create_default();
        let result = run_benchmark(|_| MinimaxStrategy::default(), &settings, &[]).unwrap();

        assert_eq!(result.total_games, 0);
        assert_eq!(result.total_guesses, 0);
        assert!(result.distribution.is_empty());
    }

    #[test]
    fn metrics_consistency() {
        let settings = small_settings(Some(2));
        let secrets = benchmark_secrets(&settings, Some(15)).unwrap();
        let result = run_benchmark(|i| MinimaxStrategy::new(Some(i as u64)), &settings, &secrets).unwrap();

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }
}
