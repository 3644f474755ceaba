//! End-to-end game scenarios through the public API

use mastermind_solver::config::GameSettings;
use mastermind_solver::core::{Alphabet, Code, GameResult, score};
use mastermind_solver::error::{ErrorKind, GameError};
use mastermind_solver::game::{ComputerGuessingGame, Game, GameState};
use mastermind_solver::solver::{MinimaxStrategy, RandomConsistentStrategy, Strategy, StrategyType};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

fn colors() -> Alphabet {
    Alphabet::colors(6).unwrap()
}

fn code(s: &str) -> Code {
    Code::parse(s, &colors()).unwrap()
}

/// Answer every guess truthfully; returns the number of attempts if won
fn play_honestly<S: Strategy>(strategy: S, alphabet: Alphabet, length: usize, secret: &Code) -> Option<usize> {
    let mut game = ComputerGuessingGame::new(strategy, alphabet, length, 12, 0).unwrap();
    while game.state() == GameState::InProgress {
        let guess = game.computer_guess().unwrap();
        let result = score(&guess, secret).unwrap();
        game.provide_computer_feedback(&guess, result).unwrap();
    }

    assert!(!game.check_for_cheating(Some(secret)).unwrap());
    assert_eq!(game.detected_cheats(), 0);
    (game.state() == GameState::Won).then(|| game.attempts().len())
}

#[test]
fn score_is_symmetric_and_bounded() {
    let alphabet = Alphabet::digits(3).unwrap();
    let codes: Vec<Code> = alphabet.codes(3).collect();

    for a in &codes {
        assert_eq!(score(a, a).unwrap(), GameResult::perfect(3));
        for b in &codes {
            let ab = score(a, b).unwrap();
            assert_eq!(ab, score(b, a).unwrap());
            assert!(ab.exact() + ab.wrong_position() <= 3);
        }
    }
}

#[test]
fn duplicate_symbols_are_not_double_counted() {
    let digits = Alphabet::digits(10).unwrap();
    let secret = Code::parse("122", &digits).unwrap();
    let guess = Code::parse("222", &digits).unwrap();
    assert_eq!(score(&guess, &secret).unwrap(), GameResult::new(2, 0));
}

#[test]
fn minimax_breaks_classic_codes() {
    // Every 7th code keeps the run short while covering the whole space
    let secrets: Vec<Code> = colors().codes(4).step_by(7).collect();
    let worst = secrets
        .par_iter()
        .enumerate()
        .map(|(i, secret)| {
            play_honestly(MinimaxStrategy::new(Some(i as u64)), colors(), 4, secret)
                .unwrap_or_else(|| panic!("minimax failed on {secret}"))
        })
        .max()
        .unwrap();

    assert!(worst <= 12);
}

#[test]
fn random_consistent_breaks_sampled_codes() {
    let mut rng = StdRng::seed_from_u64(2024);
    for i in 0..50 {
        let secret = colors().random_code(4, &mut rng).unwrap();
        let turns = play_honestly(RandomConsistentStrategy::new(Some(i)), colors(), 4, &secret);
        assert!(turns.is_some(), "random consistent failed on {secret}");
    }
}

#[test]
fn digit_codes_are_broken_too() {
    let digits = Alphabet::digits(8).unwrap();
    let secret = Code::parse("70531", &digits).unwrap();
    let turns = play_honestly(StrategyType::from_name("minimax", Some(9)), digits, 5, &secret);
    assert!(turns.is_some());
}

#[test]
fn honest_feedback_is_never_flagged_whatever_the_tolerance() {
    for allowed in [0, 1, 5] {
        let secret = code("MYCB");
        let mut game =
            ComputerGuessingGame::new(MinimaxStrategy::new(Some(3)), colors(), 4, 12, allowed).unwrap();
        while game.state() == GameState::InProgress {
            let guess = game.computer_guess().unwrap();
            game.provide_computer_feedback(&guess, score(&guess, &secret).unwrap())
                .unwrap();
            assert!(!game.check_for_cheating(Some(&secret)).unwrap());
        }
        assert_eq!(game.detected_cheats(), 0);
        assert!(!game.cheating_detected());
    }
}

#[test]
fn denying_a_correct_guess_is_one_inconsistency() {
    let secret = code("RRYY");
    let mut game =
        ComputerGuessingGame::new(MinimaxStrategy::new(Some(1)), colors(), 4, 12, 0).unwrap();

    let guess = game.computer_guess().unwrap();
    assert_eq!(guess, secret);
    game.provide_computer_feedback(&guess, GameResult::new(0, 0))
        .unwrap();

    assert!(game.check_for_cheating(Some(&secret)).unwrap());
    assert_eq!(game.detected_cheats(), 1);
}

#[test]
fn lying_strategy_still_produces_guesses() {
    let secret = code("BGCM");
    let mut game =
        ComputerGuessingGame::new(RandomConsistentStrategy::new(Some(6)), colors(), 4, 12, 3).unwrap();

    // Claim "nothing matches" every single time
    while game.state() == GameState::InProgress {
        let guess = game.computer_guess().unwrap();
        assert_eq!(guess.len(), 4);
        game.provide_computer_feedback(&guess, GameResult::new(0, 0))
            .unwrap();
    }

    assert_eq!(game.state(), GameState::Lost);
    assert_eq!(game.attempts().len(), 12);
    game.check_for_cheating(Some(&secret)).unwrap();
    assert!(game.detected_cheats() > 0);
}

#[test]
fn single_attempt_game_is_lost_after_a_miss() {
    let mut game = Game::new(code("RGB"), 1, 3).unwrap();
    let result = game.evaluate_attempt(&code("YYY")).unwrap();

    assert!(!result.is_win(3));
    assert_eq!(game.state(), GameState::Lost);
    assert_eq!(
        game.evaluate_attempt(&code("RGB")).unwrap_err().kind(),
        ErrorKind::InvalidOperation
    );
}

#[test]
fn secret_is_only_revealed_after_the_game() {
    let secret = code("CMYB");
    let mut game = Game::new(secret.clone(), 12, 4).unwrap();

    let err = game.secret_code().unwrap_err();
    assert_eq!(err, GameError::SecretHidden);
    assert_eq!(err.kind(), ErrorKind::InvalidOperation);

    game.surrender().unwrap();
    assert_eq!(game.secret_code().unwrap(), &secret);
}

#[test]
fn random_secret_from_settings_can_be_played() {
    let settings = GameSettings::create_digit_variant();
    let alphabet = settings.alphabet().unwrap();
    let mut rng = StdRng::seed_from_u64(77);
    let secret = alphabet.random_code(settings.code_length(), &mut rng).unwrap();

    let mut game = Game::new(secret.clone(), settings.max_attempts(), settings.code_length()).unwrap();
    assert_eq!(game.evaluate_attempt(&secret).unwrap(), GameResult::perfect(4));
    assert_eq!(game.state(), GameState::Won);
}

#[test]
fn seeded_games_replay_after_reset() {
    let secret = code("GYRC");
    let mut game =
        ComputerGuessingGame::new(StrategyType::from_name("minimax", Some(99)), colors(), 4, 12, 0).unwrap();

    let record = |game: &mut ComputerGuessingGame| {
        let mut guesses = Vec::new();
        while game.state() == GameState::InProgress {
            let guess = game.computer_guess().unwrap();
            game.provide_computer_feedback(&guess, score(&guess, &secret).unwrap())
                .unwrap();
            guesses.push(guess);
        }
        guesses
    };

    let first = record(&mut game);
    game.reset();
    let second = record(&mut game);
    assert_eq!(first, second);
}
