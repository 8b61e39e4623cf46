//! Frame and paddle-timer driver
//!
//! The host calls `on_frame` from its display-refresh callback and
//! `on_paddle_timer` from a ~60 Hz interval. Both are no-ops while the
//! driver is stopped, so a late callback after `stop` is harmless.

use super::input::{InputState, Key, KeyCommand};
use crate::sim::{GameEvent, GameSession, RandomSource};

#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    running: bool,
    frames: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin accepting callbacks. Returns false if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        log::debug!("Frame driver started");
        true
    }

    /// Stop accepting callbacks. Safe to call repeatedly.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        log::debug!("Frame driver stopped after {} frames", self.frames);
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames ticked since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// One animation frame: exactly one simulation tick
    pub fn on_frame<R: RandomSource>(&mut self, session: &mut GameSession<R>) -> Vec<GameEvent> {
        if !self.running {
            return Vec::new();
        }
        self.frames += 1;
        session.tick()
    }

    /// Keyboard-repeat paddle movement
    pub fn on_paddle_timer<R: RandomSource>(
        &mut self,
        session: &mut GameSession<R>,
        input: &InputState,
    ) {
        if !self.running {
            return;
        }
        if let Some(direction) = input.direction() {
            session.move_paddle(direction);
        }
    }

    /// Key down: update held keys and run one-shot commands
    pub fn on_key_down<R: RandomSource>(
        &mut self,
        session: &mut GameSession<R>,
        input: &mut InputState,
        key: Key,
    ) {
        match input.press(key) {
            Some(KeyCommand::Launch) => session.launch(),
            Some(KeyCommand::TogglePause) => session.toggle_pause(),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::settings::GameConfig;
    use crate::sim::GameStatus;

    fn session() -> GameSession {
        GameSession::new(GameConfig::default(), 5, Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_start_stop_idempotent() {
        let mut driver = FrameDriver::new();
        assert!(!driver.stop());
        assert!(driver.start());
        assert!(!driver.start());
        assert!(driver.stop());
        assert!(!driver.stop());
        assert!(!driver.is_running());
    }

    #[test]
    fn test_stopped_driver_ignores_callbacks() {
        let mut driver = FrameDriver::new();
        let mut session = session();
        session.launch();
        let before = session.state().clone();

        driver.on_frame(&mut session);
        let input = InputState {
            left: true,
            right: false,
        };
        driver.on_paddle_timer(&mut session, &input);

        assert_eq!(session.state(), &before);
        assert_eq!(driver.frames(), 0);
    }

    #[test]
    fn test_frame_and_timer_interleave() {
        let mut driver = FrameDriver::new();
        let mut session = session();
        let mut input = InputState::default();
        driver.start();

        driver.on_key_down(&mut session, &mut input, Key::Right);
        driver.on_paddle_timer(&mut session, &input);
        driver.on_paddle_timer(&mut session, &input);
        assert_eq!(session.state().paddle.pos.x, 366.0);

        driver.on_key_down(&mut session, &mut input, Key::Launch);
        assert_eq!(session.status(), GameStatus::Playing);

        driver.on_frame(&mut session);
        driver.on_paddle_timer(&mut session, &input);
        driver.on_frame(&mut session);
        assert_eq!(driver.frames(), 2);
        assert_eq!(session.state().paddle.pos.x, 374.0);
        assert!(session.state().ball.launched);

        driver.on_key_down(&mut session, &mut input, Key::Pause);
        assert_eq!(session.status(), GameStatus::Paused);
    }
}
