//! Session controller: wraps the tick engine with the pause/speed/game-over
//! state machine, input buffering, and score bookkeeping.
//!
//! The controller is the only owner of mutable game state. An external
//! scheduler calls [`Session::tick`] once per cadence interval; commands
//! arriving between ticks only touch the single-slot pending direction and
//! the phase flags, so a tick never observes a half-applied input.

use anyhow::{Context, Result};

use crate::core::config::GameConfig;
use crate::core::engine::{advance, spawn_food, Food, Outcome};
use crate::core::grid::Grid;
use crate::core::rng::SimpleRng;
use crate::core::snake::Snake;
use crate::core::snapshot::GameSnapshot;
use crate::store::ScoreStore;
use crate::types::{clamp_tick_ms, Direction, GameCommand, SessionPhase};

/// What a single tick did, from the scheduler's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick arrived while paused or after game over; nothing happened.
    Idle,
    /// Snake advanced; `ate` marks a growth tick.
    Moved { ate: bool },
    /// This tick ended the session.
    GameOver,
}

const SPAWN_DIRECTION: Direction = Direction::Right;

/// Spawn a snake at the grid center, trailing away from the spawn
/// direction, with every segment wrapped onto the torus.
fn spawn_snake(grid: Grid, length: usize) -> Snake {
    let head = grid.center();
    let (dx, dy) = SPAWN_DIRECTION.delta();
    let segments = (0..length as i32)
        .map(|i| grid.wrap(head.offset(-dx * i, -dy * i)))
        .collect();
    Snake::from_segments(segments)
}

/// A single game session plus the high score that outlives it.
pub struct Session<S: ScoreStore> {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Option<Food>,
    phase: SessionPhase,
    score: u32,
    high_score: u32,
    /// Last accepted proposal, applied at the next tick boundary.
    pending: Direction,
    /// Direction actually applied on the most recent tick.
    committed: Direction,
    rng: SimpleRng,
    store: S,
    tick_ms: u64,
}

impl<S: ScoreStore> Session<S> {
    /// Create a session, reading the persisted high score through `store`.
    pub fn new(config: GameConfig, seed: u32, store: S) -> Result<Self> {
        let config = config.normalized();
        let grid = Grid::new(config.grid_size);
        let mut rng = SimpleRng::new(seed);
        let snake = spawn_snake(grid, config.initial_snake_length);
        let food = spawn_food(grid, &mut rng, &snake);
        let high_score = store.load().context("Failed to load high score")?;
        let tick_ms = config.tick_ms;

        Ok(Self {
            config,
            grid,
            snake,
            food,
            phase: SessionPhase::Running,
            score: 0,
            high_score,
            pending: SPAWN_DIRECTION,
            committed: SPAWN_DIRECTION,
            rng,
            store,
            tick_ms,
        })
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Food> {
        self.food
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn committed_direction(&self) -> Direction {
        self.committed
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    /// Adjust the tick cadence, clamped to the supported range.
    ///
    /// Only scheduling changes; engine state is untouched.
    pub fn set_tick_ms(&mut self, ms: u64) {
        self.tick_ms = clamp_tick_ms(ms);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Buffer a direction change for the next tick.
    ///
    /// Rejected when `requested` reverses the *committed* direction, not the
    /// latest proposal: a rapid double press must not fold the snake onto
    /// itself before a tick has moved it. Later accepted proposals simply
    /// overwrite earlier ones.
    pub fn propose_direction(&mut self, requested: Direction) -> bool {
        if requested.is_opposite(self.committed) {
            return false;
        }
        self.pending = requested;
        true
    }

    /// Toggle between `Running` and `Paused`; no-op after game over.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            SessionPhase::Running => {
                self.phase = SessionPhase::Paused;
                true
            }
            SessionPhase::Paused => {
                self.phase = SessionPhase::Running;
                true
            }
            SessionPhase::GameOver => false,
        }
    }

    /// Reset snake, food, score, and direction buffers; the high score and
    /// the random stream carry over.
    pub fn restart(&mut self) {
        self.snake = spawn_snake(self.grid, self.config.initial_snake_length);
        self.food = spawn_food(self.grid, &mut self.rng, &self.snake);
        self.phase = SessionPhase::Running;
        self.score = 0;
        self.pending = SPAWN_DIRECTION;
        self.committed = SPAWN_DIRECTION;
    }

    /// Apply an abstract command; inapplicable commands are silent no-ops.
    ///
    /// Returns whether the command changed anything.
    pub fn handle_command(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::TogglePause => self.toggle_pause(),
            GameCommand::Restart => {
                self.restart();
                true
            }
            _ => match command.direction() {
                Some(dir) => self.propose_direction(dir),
                None => false,
            },
        }
    }

    /// Advance the game by exactly one step.
    ///
    /// Commits the pending direction, runs the engine, and applies score and
    /// phase updates. An `Err` only surfaces from the score store; game
    /// state is already consistent by then.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        match self.phase {
            SessionPhase::Paused | SessionPhase::GameOver => return Ok(TickOutcome::Idle),
            SessionPhase::Running => {}
        }

        self.committed = self.pending;

        let Some(food) = self.food else {
            // Snake already covers the grid; nowhere left to move.
            self.phase = SessionPhase::GameOver;
            return Ok(TickOutcome::GameOver);
        };

        match advance(self.grid, &self.snake, self.committed, food, &mut self.rng) {
            Outcome::Collided => {
                self.phase = SessionPhase::GameOver;
                Ok(TickOutcome::GameOver)
            }
            Outcome::Moved { snake, ate, food } => {
                self.snake = snake;
                if ate {
                    self.food = food;
                    self.score += self.config.food_reward;
                    if self.score > self.high_score {
                        self.high_score = self.score;
                        self.store
                            .save(self.high_score)
                            .context("Failed to persist high score")?;
                    }
                }
                Ok(TickOutcome::Moved { ate })
            }
        }
    }

    /// Fill `out` with the current state, reusing its allocations.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.snake.clear();
        out.snake.extend(self.snake.segments());
        out.food = self.food;
        out.phase = self.phase;
        out.score = self.score;
        out.high_score = self.high_score;
        out.direction = self.committed;
        out.grid_size = self.grid.size();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
