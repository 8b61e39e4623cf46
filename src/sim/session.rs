//! Game session: owns the current snapshot and applies commands to it
//!
//! Every mutation goes through `commit`, which swaps in a whole new
//! `GameState`. The frame tick and the paddle timer are both writers; with
//! one swap per operation neither can observe or clobber a half-applied
//! update from the other.

use rand_pcg::Pcg32;

use super::commands::{self, Direction};
use super::rng::{self, RandomSource};
use super::state::{GameEvent, GameState, GameStatus};
use super::tick;
use crate::highscores::{load_high_score, record_high_score};
use crate::persistence::HighScoreStore;
use crate::settings::GameConfig;

pub struct GameSession<R: RandomSource = Pcg32> {
    config: GameConfig,
    state: GameState,
    rng: R,
    store: Box<dyn HighScoreStore>,
}

impl GameSession<Pcg32> {
    /// Session with a seeded PCG generator
    pub fn new(config: GameConfig, seed: u64, store: Box<dyn HighScoreStore>) -> Self {
        log::info!("Session created with seed: {}", seed);
        Self::with_rng(config, rng::seeded(seed), store)
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Session with an explicit random source. Reads the stored high score once.
    pub fn with_rng(config: GameConfig, rng: R, store: Box<dyn HighScoreStore>) -> Self {
        let config = config.sanitized();
        let high_score = load_high_score(&*store);
        let state = GameState::new(&config, high_score);
        Self {
            config,
            state,
            rng,
            store,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Advance one frame, persisting any new high score
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let step = tick::step(&self.state, &self.config, &mut self.rng);
        for event in &step.events {
            match *event {
                GameEvent::HighScoreRaised(score) => {
                    log::info!("New high score: {}", score);
                    record_high_score(&mut *self.store, score);
                }
                GameEvent::LifeLost { remaining } => {
                    log::debug!("Ball lost, lives remaining: {}", remaining);
                }
                GameEvent::GameOver => log::info!("Game over (score {})", step.state.score),
                GameEvent::Win => log::info!("All bricks cleared (score {})", step.state.score),
                GameEvent::BrickDestroyed { .. } => {}
            }
        }
        self.commit(step.state);
        step.events
    }

    pub fn launch(&mut self) {
        let next = commands::launch(&self.state, &self.config, &mut self.rng);
        self.commit(next);
    }

    pub fn toggle_pause(&mut self) {
        let next = commands::toggle_pause(&self.state);
        self.commit(next);
    }

    pub fn move_paddle(&mut self, direction: Direction) {
        let next = commands::move_paddle(&self.state, &self.config, direction);
        self.commit(next);
    }

    /// Center the paddle on a pointer x already in canvas space
    pub fn pointer_moved(&mut self, canvas_x: f32) {
        let next = commands::center_paddle_on(&self.state, &self.config, canvas_x);
        self.commit(next);
    }

    /// New bricks, score and lives; the high score survives
    pub fn reset(&mut self) {
        let next = commands::reset(&self.state, &self.config);
        log::info!("Session reset (high score {})", next.high_score);
        self.commit(next);
    }

    fn commit(&mut self, next: GameState) {
        if next.status != self.state.status {
            log::debug!("Status {:?} -> {:?}", self.state.status, next.status);
        }
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;

    use super::*;
    use crate::highscores::tests::BrokenStore;
    use crate::persistence::{MemoryStore, StorageError};
    use crate::sim::rng::SequenceRandom;

    /// Memory store the test can inspect after handing it to the session
    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<MemoryStore>>);

    impl HighScoreStore for SharedStore {
        fn load(&self) -> Result<Option<u64>, StorageError> {
            self.0.borrow().load()
        }

        fn save(&mut self, score: u64) -> Result<(), StorageError> {
            self.0.borrow_mut().save(score)
        }
    }

    fn session_with(store: impl HighScoreStore + 'static) -> GameSession<SequenceRandom> {
        GameSession::with_rng(
            GameConfig::default(),
            SequenceRandom::constant(0.9),
            Box::new(store),
        )
    }

    #[test]
    fn test_new_session_reads_high_score() {
        let session = session_with(MemoryStore::with_value(300));
        assert_eq!(session.state().high_score, 300);
        assert_eq!(session.status(), GameStatus::Start);

        let session = session_with(BrokenStore);
        assert_eq!(session.state().high_score, 0);
    }

    #[test]
    fn test_launch_then_tick() {
        let mut session = session_with(MemoryStore::new());
        let start = session.state().ball.pos;
        session.launch();
        assert_eq!(session.status(), GameStatus::Playing);

        session.tick();
        let pos = session.state().ball.pos;
        assert!((pos.x - (start.x + 3.5)).abs() < 1e-4);
        assert_eq!(pos.y, start.y - 5.0);
    }

    #[test]
    fn test_pause_freezes_ticks() {
        let mut session = session_with(MemoryStore::new());
        session.launch();
        session.toggle_pause();
        let frozen = session.state().clone();
        for _ in 0..10 {
            assert!(session.tick().is_empty());
        }
        assert_eq!(session.state(), &frozen);

        session.toggle_pause();
        session.tick();
        assert_ne!(session.state(), &frozen);
    }

    #[test]
    fn test_game_over_persists_high_score() {
        let store = SharedStore::default();
        let mut session = session_with(store.clone());
        session.launch();

        let mut state = session.state().clone();
        state.lives = 1;
        state.score = 120;
        state.ball.pos = Vec2::new(100.0, 520.0);
        state.ball.vel = Vec2::new(0.0, 5.0);
        session.commit(state);

        let events = session.tick();
        assert!(events.contains(&GameEvent::GameOver));
        assert_eq!(session.state().high_score, 120);
        assert_eq!(store.0.borrow().value(), Some(120));
    }

    #[test]
    fn test_failed_write_is_ignored() {
        let mut session = session_with(BrokenStore);
        session.launch();

        let mut state = session.state().clone();
        state.lives = 1;
        state.score = 80;
        state.ball.pos = Vec2::new(100.0, 520.0);
        state.ball.vel = Vec2::new(0.0, 5.0);
        session.commit(state);

        session.tick();
        assert_eq!(session.status(), GameStatus::GameOver);
        assert_eq!(session.state().high_score, 80);
    }

    #[test]
    fn test_reset_after_game_over() {
        let mut session = session_with(MemoryStore::with_value(300));
        let mut state = session.state().clone();
        state.status = GameStatus::GameOver;
        state.lives = 0;
        state.score = 40;
        session.commit(state);

        session.reset();
        let state = session.state();
        assert_eq!(state.status, GameStatus::Start);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.high_score, 300);
        assert_eq!(state.visible_bricks(), 60);
    }

    #[test]
    fn test_paddle_commands() {
        let mut session = session_with(MemoryStore::new());
        session.move_paddle(Direction::Left);
        assert_eq!(session.state().paddle.pos.x, 342.0);
        session.pointer_moved(60.0);
        assert_eq!(session.state().paddle.pos.x, 10.0);
        session.pointer_moved(10_000.0);
        assert_eq!(session.state().paddle.pos.x, 700.0);
    }
}
