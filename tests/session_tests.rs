//! End-to-end session tests driven by scripted and seeded roll sources.

use dice_race::{
    DiceRoller, GameConfig, GameSession, RollSource, SessionState, TurnError,
};

/// Replays a fixed sequence of rolls, panicking if the session asks for
/// more than were scripted.
struct ScriptedRolls {
    rolls: Vec<u8>,
    next: usize,
}

impl ScriptedRolls {
    fn new(rolls: &[u8]) -> Self {
        Self {
            rolls: rolls.to_vec(),
            next: 0,
        }
    }

    fn exhausted(&self) -> bool {
        self.next == self.rolls.len()
    }
}

impl RollSource for ScriptedRolls {
    fn roll(&mut self) -> u8 {
        let roll = self.rolls[self.next];
        self.next += 1;
        roll
    }
}

fn config(names: &[&str], target: u32) -> GameConfig {
    GameConfig::new(names.iter().map(|n| n.to_string()).collect(), target).unwrap()
}

/// The fixed two-player race: P1 rolls 4 then 5 then 6, P2 rolls 3 then 2.
/// P1 crosses the target of 10 on their third roll and the game stops with
/// P2 one roll short.
#[test]
fn test_fixed_two_player_race() {
    let mut session = GameSession::new(&config(&["P1", "P2"], 10));
    let mut dice = ScriptedRolls::new(&[4, 3, 5, 2, 6]);

    let winning = session.play_to_completion(&mut dice).unwrap();

    assert!(dice.exhausted());
    assert_eq!(winning.player, 0);
    assert_eq!(winning.score, 15);

    let winner = session.winner().unwrap();
    assert_eq!(winner.name(), "P1");
    assert_eq!(winner.score(), 15);
    assert_eq!(winner.rolls(), &[4, 5, 6]);

    let loser = &session.players()[1];
    assert_eq!(loser.score(), 5);
    assert_eq!(loser.rolls(), &[3, 2]);
}

/// The game stops the moment the target is reached, mid-round: players
/// after the winner keep their shorter roll histories.
#[test]
fn test_win_mid_round_leaves_unequal_roll_counts() {
    let mut session = GameSession::new(&config(&["A", "B", "C"], 6));
    // A rolls 5, B rolls 5, C rolls 5; then A rolls 6 and wins before B or
    // C get a fourth-turn-of-round roll.
    let mut dice = ScriptedRolls::new(&[5, 5, 5, 6]);

    session.play_to_completion(&mut dice).unwrap();

    let players = session.players();
    assert_eq!(players[0].rolls().len(), 2);
    assert_eq!(players[1].rolls().len(), 1);
    assert_eq!(players[2].rolls().len(), 1);
    assert_eq!(session.winner().unwrap().name(), "A");
}

/// Turn order wraps from the last player back to the first and no player
/// ever takes two consecutive turns.
#[test]
fn test_turns_are_strictly_sequential() {
    let mut session = GameSession::new(&config(&["A", "B", "C", "D"], 50));
    let mut dice = ScriptedRolls::new(&[1; 12]);

    let mut turn_order = Vec::new();
    for _ in 0..12 {
        let outcome = session.play_turn(&mut dice).unwrap();
        turn_order.push(outcome.player);
    }

    assert_eq!(turn_order, vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3]);
}

/// Four players with identical scores throughout: the leaderboard lists
/// them in original entry order.
#[test]
fn test_tied_leaderboard_keeps_entry_order() {
    let mut session = GameSession::new(&config(&["W", "X", "Y", "Z"], 12));
    // Everyone rolls 4s. W hits 12 on the ninth turn; X, Y and Z are tied
    // on 8 and must keep their entry order behind the winner.
    let mut dice = ScriptedRolls::new(&[4; 9]);

    for _ in 0..8 {
        session.play_turn(&mut dice).unwrap();
    }
    let winning = session.play_turn(&mut dice).unwrap();
    assert!(winning.winning);
    assert_eq!(session.winner().unwrap().name(), "W");

    let names: Vec<_> = session.leaderboard().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["W", "X", "Y", "Z"]);
}

/// Mixed scores rank descending; the tied pair keeps its relative order.
#[test]
fn test_leaderboard_sorts_descending_with_stable_ties() {
    let mut session = GameSession::new(&config(&["A", "B", "C", "D"], 10));
    // Final scores: A=5, B=10 (wins on their second roll), C=1, D=5.
    // A and D tie on 5; A entered first and must rank first of the two.
    let mut dice = ScriptedRolls::new(&[2, 5, 1, 5, 3, 5]);

    session.play_to_completion(&mut dice).unwrap();

    let ranked: Vec<_> = session
        .leaderboard()
        .iter()
        .map(|p| (p.name().to_string(), p.score()))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("B".to_string(), 10),
            ("A".to_string(), 5),
            ("D".to_string(), 5),
            ("C".to_string(), 1),
        ]
    );

    // Turn order itself is untouched by ranking.
    let order: Vec<_> = session.players().iter().map(|p| p.name()).collect();
    assert_eq!(order, vec!["A", "B", "C", "D"]);
}

/// A seeded roller drives a full game to exactly one winner, and only the
/// winner's score reaches the target.
#[test]
fn test_seeded_game_produces_one_winner() {
    let mut session = GameSession::new(&config(&["P1", "P2", "P3"], 30));
    let mut dice = DiceRoller::from_seed(2024);

    session.play_to_completion(&mut dice).unwrap();

    let at_or_over_target = session
        .players()
        .iter()
        .filter(|p| p.score() >= 30)
        .count();
    assert_eq!(at_or_over_target, 1);
    assert!(session.winner().unwrap().score() >= 30);
    assert_eq!(session.play_to_completion(&mut dice), Err(TurnError::GameOver));
}

/// Identical seeds replay the identical game.
#[test]
fn test_same_seed_replays_same_game() {
    let run = |seed: u64| {
        let mut session = GameSession::new(&config(&["P1", "P2"], 25));
        let mut dice = DiceRoller::from_seed(seed);
        session.play_to_completion(&mut dice).unwrap();
        session
            .players()
            .iter()
            .map(|p| p.rolls().to_vec())
            .collect::<Vec<_>>()
    };

    assert_eq!(run(7), run(7));
}

#[test]
fn test_session_state_reports_progress() {
    let mut session = GameSession::new(&config(&["P1", "P2"], 4));
    assert_eq!(session.state(), SessionState::AwaitingTurn(0));

    let mut dice = ScriptedRolls::new(&[2, 6]);
    session.play_turn(&mut dice).unwrap();
    assert_eq!(session.state(), SessionState::AwaitingTurn(1));

    session.play_turn(&mut dice).unwrap();
    assert_eq!(session.state(), SessionState::Won(1));
}
