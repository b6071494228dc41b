//! Classic 2048 engine.

use tracing::{debug, trace};

use crate::board::{can_move, has_any_move, slide, Grid, Move};
use crate::core::{EngineConfig, GameRng, Result, WINNING_VALUE};
use crate::rules::{GameEngine, GameState, RandomSpawner, TileSpawner};

/// Single-session engine holding the current state and one undo snapshot.
#[derive(Clone, Debug)]
pub struct ClassicGame<S: TileSpawner = RandomSpawner> {
    config: EngineConfig,
    spawner: S,
    current: GameState,
    /// State before the last accepted move, consumed by `undo`.
    previous: Option<GameState>,
}

/// Builder for creating a `ClassicGame`.
#[derive(Clone, Debug, Default)]
pub struct ClassicGameBuilder {
    config: EngineConfig,
}

impl ClassicGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: usize) -> Self {
        self.config.size = size;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn initial_tiles(mut self, count: usize) -> Self {
        self.config.initial_tiles = count;
        self
    }

    pub fn four_probability(mut self, probability: f64) -> Self {
        self.config.four_probability = probability;
        self
    }

    /// Build the engine with the default random spawner.
    pub fn build(self) -> Result<ClassicGame> {
        ClassicGame::new(self.config)
    }

    /// Build the engine with a caller-supplied spawner.
    ///
    /// The configured seed and four-probability are ignored; the spawner
    /// owns its randomness.
    pub fn build_with_spawner<S: TileSpawner>(self, spawner: S) -> Result<ClassicGame<S>> {
        ClassicGame::with_spawner(self.config, spawner)
    }
}

impl ClassicGame<RandomSpawner> {
    /// Create an engine and deal the opening tiles.
    ///
    /// Without a seed in `config` the RNG is seeded from OS entropy.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let spawner = RandomSpawner::new(rng, config.four_probability)?;
        Self::with_spawner(config, spawner)
    }
}

impl<S: TileSpawner> ClassicGame<S> {
    /// Create an engine that draws tiles from `spawner`.
    pub fn with_spawner(config: EngineConfig, mut spawner: S) -> Result<Self> {
        config.validate()?;
        let grid = opening_grid(&mut spawner, config.size, config.initial_tiles)?;
        debug!(size = config.size, "started new game");

        Ok(Self {
            config,
            spawner,
            current: GameState::Playing { grid, can_undo: false },
            previous: None,
        })
    }

    /// Resume play from an existing position.
    ///
    /// The position starts as `Playing` with no undo history; a board with
    /// no legal moves is classified as lost on the next `make_move`.
    pub fn from_position(config: EngineConfig, spawner: S, grid: Grid) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            spawner,
            current: GameState::Playing { grid, can_undo: false },
            previous: None,
        })
    }

    /// Start a new game at the configured size.
    pub fn reset(&mut self) -> Result<&GameState> {
        self.new_game(self.config.size)
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Whether an undo snapshot is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.previous.is_some()
    }

    /// Phase for a freshly spawned grid, given the phase before the move.
    fn classify(&self, grid: Grid) -> GameState {
        if grid.has_tile_at_least(WINNING_VALUE) && !self.current.is_won() {
            debug!(score = grid.score(), "reached winning tile");
            GameState::Won {
                grid,
                continue_playing: false,
            }
        } else if let GameState::Won { continue_playing, .. } = self.current {
            GameState::Won { grid, continue_playing }
        } else if !has_any_move(&grid) {
            debug!(score = grid.score(), "no legal moves left");
            GameState::Lost { grid }
        } else {
            GameState::Playing { grid, can_undo: true }
        }
    }
}

impl<S: TileSpawner> GameEngine for ClassicGame<S> {
    fn current_state(&self) -> &GameState {
        &self.current
    }

    fn make_move(&mut self, direction: Move) -> &GameState {
        if self.current.is_lost() {
            return &self.current;
        }

        if !has_any_move(self.current.grid()) {
            debug!(score = self.current.score(), "no legal moves left");
            self.current = GameState::Lost {
                grid: self.current.grid().clone(),
            };
            return &self.current;
        }

        let outcome = slide(self.current.grid(), direction);
        if !outcome.is_effective() {
            trace!(%direction, "move left the grid unchanged");
            return &self.current;
        }

        let gained = outcome.gained();
        let spawned = self.spawner.spawn(outcome.grid());
        let next = self.classify(spawned);
        debug!(%direction, gained, score = next.score(), "applied move");

        self.previous = Some(std::mem::replace(&mut self.current, next));
        &self.current
    }

    fn is_valid_move(&self, direction: Move) -> bool {
        self.current.accepts_moves() && can_move(self.current.grid(), direction)
    }

    fn new_game(&mut self, size: usize) -> Result<&GameState> {
        let grid = opening_grid(&mut self.spawner, size, self.config.initial_tiles)?;
        debug!(size, "started new game");

        self.previous = None;
        self.current = GameState::Playing { grid, can_undo: false };
        Ok(&self.current)
    }

    fn undo(&mut self) -> Option<&GameState> {
        let previous = self.previous.take()?;
        debug!(score = previous.score(), "restored previous state");
        self.current = previous;
        Some(&self.current)
    }

    fn continue_game(&mut self) -> &GameState {
        if let GameState::Won { continue_playing, .. } = &mut self.current {
            *continue_playing = true;
        }
        &self.current
    }
}

/// Empty grid of `size` with `tiles` spawned onto it.
fn opening_grid<S: TileSpawner>(spawner: &mut S, size: usize, tiles: usize) -> Result<Grid> {
    let mut grid = Grid::empty(size)?;
    for _ in 0..tiles {
        grid = spawner.spawn(&grid);
    }
    Ok(grid)
}
