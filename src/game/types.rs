//! Snake game data structures.

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH, INITIAL_BODY_PARTS};
use rand::Rng;
use std::collections::VecDeque;

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) delta for this direction.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

/// A cell on the grid, in cell units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Board dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub width: i16,
    pub height: i16,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

impl Board {
    pub const fn new(width: i16, height: i16) -> Self {
        Self { width, height }
    }

    /// Number of drawn cells.
    pub fn cell_count(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }

    /// Longest snake the board can hold. Counts the extra column and row at
    /// the far edges, where the head may still sit without ending the game.
    pub fn max_snake_len(&self) -> usize {
        (self.width.max(0) as usize + 1) * (self.height.max(0) as usize + 1)
    }

    /// True if `pos` is one of the drawn cells.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// True once `pos` is past a wall.
    ///
    /// The far edges are inclusive: a head at `x == width` or `y == height`
    /// is one cell outside the drawn grid but still in play. Only the next
    /// step beyond that ends the game.
    pub fn is_out_of_bounds(&self, pos: Position) -> bool {
        pos.x < 0 || pos.x > self.width || pos.y < 0 || pos.y > self.height
    }
}

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    Wall,
    SelfBite,
}

impl GameOverCause {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Wall => "The snake hit the wall.",
            Self::SelfBite => "The snake bit its own body.",
        }
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is already over; nothing moved.
    Idle,
    Moved,
    AteApple { score: u32 },
    GameOver { cause: GameOverCause },
}

/// Single-slot holder for the latest accepted direction request.
///
/// Written by the input path, drained once at the start of every tick.
/// A newer request overwrites an older one that has not been consumed yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionInbox {
    pending: Option<Direction>,
}

impl DirectionInbox {
    pub fn post(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    pub fn peek(&self) -> Option<Direction> {
        self.pending
    }

    pub fn take(&mut self) -> Option<Direction> {
        self.pending.take()
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    pub board: Board,

    // Snake state
    /// Body segments, head at the front (index 0). Preallocated to
    /// `board.max_snake_len()` so ticking never reallocates.
    pub snake: VecDeque<Position>,
    /// Committed movement direction.
    pub direction: Direction,
    /// Direction requested since the last tick.
    pub inbox: DirectionInbox,

    pub apple: Position,

    /// Apples eaten.
    pub score: u32,
    /// `Some` once the game has ended. Terminal: never cleared.
    pub game_over: Option<GameOverCause>,
    /// Movement steps elapsed.
    pub tick_count: u64,
}

impl SnakeGame {
    /// New game on the standard board.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_board(Board::default(), rng)
    }

    /// New game on `board`: six segments stacked on the origin, heading right.
    pub fn with_board<R: Rng + ?Sized>(board: Board, rng: &mut R) -> Self {
        let mut snake = VecDeque::with_capacity(board.max_snake_len());
        snake.extend(std::iter::repeat(Position::new(0, 0)).take(INITIAL_BODY_PARTS));

        Self {
            board,
            snake,
            direction: Direction::Right,
            inbox: DirectionInbox::default(),
            apple: spawn_apple(board, rng),
            score: 0,
            game_over: None,
            tick_count: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.game_over.is_none()
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    /// Current logical length of the snake.
    pub fn body_parts(&self) -> usize {
        self.snake.len()
    }

    /// Read-only view handed to the renderer.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            board: self.board,
            segments: &self.snake,
            apple: self.apple,
            direction: self.direction,
            score: self.score,
            running: self.is_running(),
            game_over: self.game_over,
            tick_count: self.tick_count,
        }
    }
}

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub board: Board,
    pub segments: &'a VecDeque<Position>,
    pub apple: Position,
    pub direction: Direction,
    pub score: u32,
    pub running: bool,
    pub game_over: Option<GameOverCause>,
    pub tick_count: u64,
}

impl Snapshot<'_> {
    pub fn head(&self) -> Option<Position> {
        self.segments.front().copied()
    }

    pub fn body_parts(&self) -> usize {
        self.segments.len()
    }
}

/// Pick a cell uniformly at random over the whole board.
///
/// Cells occupied by the snake are not excluded.
pub fn spawn_apple<R: Rng + ?Sized>(board: Board, rng: &mut R) -> Position {
    Position::new(
        rng.gen_range(0..board.width),
        rng.gen_range(0..board.height),
    )
}
