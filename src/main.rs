//! Brick Breaker entry point
//!
//! Native builds run a headless demo session: the paddle follows the ball
//! through pointer commands until the game ends or the tick budget runs out.
//! The browser build is driven from JavaScript through `brick_breaker::wasm`.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use brick_breaker::persistence::{FileStore, HighScoreStore, MemoryStore};
    use brick_breaker::platform::FrameDriver;
    use brick_breaker::sim::{GameEvent, GameSession, RandomSource, rng};
    use brick_breaker::{GameConfig, LossRule};
    use clap::Parser;

    /// Headless brick breaker demo
    #[derive(Debug, Parser)]
    #[command(name = "brick-breaker", version, about)]
    struct Args {
        /// Session seed (launch direction, particles, demo aim)
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Stop after this many frames
        #[arg(long, default_value_t = 20_000)]
        max_ticks: u64,

        /// JSON config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Persist the high score to this file
        #[arg(long)]
        high_score_file: Option<PathBuf>,

        /// below-paddle | below-canvas
        #[arg(long, value_parser = parse_loss_rule)]
        loss_rule: Option<LossRule>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    }

    fn parse_loss_rule(s: &str) -> Result<LossRule, String> {
        LossRule::from_str(s).ok_or_else(|| format!("unknown loss rule {s:?}"))
    }

    pub fn run() -> Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        let args = Args::parse();
        log::info!("Brick Breaker (native) starting...");

        let mut config = match &args.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => GameConfig::default(),
        };
        if let Some(rule) = args.loss_rule {
            config.loss_rule = rule;
        }
        log::info!("Loss rule: {}", config.loss_rule.as_str());

        let store: Box<dyn HighScoreStore> = match &args.high_score_file {
            Some(path) => Box::new(FileStore::new(path)),
            None => Box::new(MemoryStore::new()),
        };

        let mut session = GameSession::new(config, args.seed, store);
        let mut driver = FrameDriver::new();
        driver.start();

        // Separate stream so the demo's aim doesn't perturb the session's RNG
        let mut aim_rng = rng::seeded(args.seed ^ 0x9e37_79b9_7f4a_7c15);
        let mut aim = aim_rng.centered(40.0);
        let mut bricks_broken = 0u32;
        let mut lives_lost = 0u32;

        while driver.frames() < args.max_ticks && !session.status().is_terminal() {
            if !session.state().ball.launched {
                session.launch();
            }

            let ball = &session.state().ball;
            let was_falling = ball.vel.y > 0.0;
            let target_x = ball.pos.x + aim;
            session.pointer_moved(target_x);

            for event in driver.on_frame(&mut session) {
                match event {
                    GameEvent::BrickDestroyed { .. } => bricks_broken += 1,
                    GameEvent::LifeLost { .. } => lives_lost += 1,
                    _ => {}
                }
            }

            // New aim after every paddle bounce
            if was_falling && session.state().ball.vel.y < 0.0 {
                aim = aim_rng.centered(40.0);
            }
        }
        driver.stop();

        let state = session.state();
        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(state).context("serializing final state")?
            );
        } else {
            println!("Status:        {:?}", state.status);
            println!("Frames:        {}", driver.frames());
            println!("Score:         {}", state.score);
            println!("High score:    {}", state.high_score);
            println!("Lives left:    {}", state.lives);
            println!("Lives lost:    {}", lives_lost);
            println!(
                "Bricks broken: {} ({} remaining)",
                bricks_broken,
                state.visible_bricks()
            );
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is brick_breaker::wasm::wasm_start, this is just to satisfy the compiler
}
