//! Terminal runtime.
//!
//! Owns the terminal session and runs the loop: draw the current snapshot,
//! wait for a key until the next tick is due, run whatever ticks the driver
//! says are due. After game over the final screen stays up until the player
//! quits.

use crate::constants::IDLE_POLL_MS;
use crate::game::{self, SnakeGame, TickDriver, TickOutcome};
use crate::input::{map_key, KeyAction};
use crate::ui;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::{debug, error, info};
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Game plus the timer that drives it.
pub struct App<R: Rng> {
    game: SnakeGame,
    driver: TickDriver,
    rng: R,
    should_quit: bool,
}

impl<R: Rng> App<R> {
    pub fn new(mut rng: R) -> Self {
        let game = SnakeGame::new(&mut rng);
        Self::with_game(game, rng)
    }

    pub fn with_game(game: SnakeGame, rng: R) -> Self {
        Self {
            game,
            driver: TickDriver::default(),
            rng,
            should_quit: false,
        }
    }

    pub fn game(&self) -> &SnakeGame {
        &self.game
    }

    pub fn driver(&self) -> &TickDriver {
        &self.driver
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// How long to wait for input before the next tick is due.
    pub fn poll_timeout(&self) -> Duration {
        self.driver
            .until_next()
            .unwrap_or(Duration::from_millis(IDLE_POLL_MS))
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match map_key(key) {
            KeyAction::Steer(direction) => {
                if !game::steer(&mut self.game, direction) {
                    debug!("ignored turn to {:?}", direction);
                }
            }
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    /// Credit `elapsed` wall time and run the ticks that fall due.
    ///
    /// Stops the driver on game over; no tick runs after that.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TickOutcome> {
        let due = self.driver.advance(elapsed);
        let mut outcomes = Vec::with_capacity(due as usize);

        for _ in 0..due {
            let outcome = game::tick(&mut self.game, &mut self.rng);
            outcomes.push(outcome);

            match outcome {
                TickOutcome::AteApple { score } => {
                    debug!(
                        "apple eaten at tick {}: score {}, length {}, next apple at ({}, {})",
                        self.game.tick_count,
                        score,
                        self.game.body_parts(),
                        self.game.apple.x,
                        self.game.apple.y
                    );
                }
                TickOutcome::GameOver { cause } => {
                    info!(
                        "game over after {} ticks ({:?}): score {}, length {}",
                        self.game.tick_count,
                        cause,
                        self.game.score,
                        self.game.body_parts()
                    );
                    self.driver.stop();
                    break;
                }
                TickOutcome::Moved | TickOutcome::Idle => {}
            }
        }

        outcomes
    }
}

/// Raw mode + alternate screen for as long as this value lives.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;

        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err).context("failed to enter alternate screen");
        }

        let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(err).context("failed to create terminal");
            }
        };
        terminal.hide_cursor().ok();

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            error!("failed to disable raw mode: {}", err);
        }
        if let Err(err) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            error!("failed to leave alternate screen: {}", err);
        }
        if let Err(err) = self.terminal.show_cursor() {
            error!("failed to show cursor: {}", err);
        }
    }
}

/// Run the game in the terminal until the player quits.
pub fn run<R: Rng>(rng: R) -> Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut app = App::new(rng);

    info!(
        "new game: {}x{} board, {}ms ticks, apple at ({}, {})",
        app.game().board.width,
        app.game().board.height,
        app.driver().interval().as_millis(),
        app.game().apple.x,
        app.game().apple.y
    );

    let mut last_frame = Instant::now();
    while !app.should_quit() {
        session
            .terminal
            .draw(|frame| ui::draw_ui(frame, &app.game().snapshot()))
            .context("failed to draw frame")?;

        if event::poll(app.poll_timeout()).context("failed to poll terminal events")? {
            if let Event::Key(key) = event::read().context("failed to read terminal event")? {
                app.handle_key(key);
            }
        }

        let now = Instant::now();
        app.advance(now.duration_since(last_frame));
        last_frame = now;
    }

    info!(
        "quit with score {} after {} ticks",
        app.game().score,
        app.game().tick_count
    );
    Ok(())
}
