//! Snake game logic: steering, the per-tick update, and collision detection.

use super::types::*;
use rand::Rng;

/// Resolve a direction request against the current direction.
///
/// A request for the exact reverse of `current` is refused.
pub fn turn(current: Direction, requested: Direction) -> Direction {
    if requested == current.opposite() {
        current
    } else {
        requested
    }
}

/// Queue a direction change for the next tick. Returns false if refused.
///
/// The request is checked against the committed direction here and again
/// when the tick consumes it, so a burst of keys between two ticks can never
/// fold the snake back onto itself.
pub fn steer(game: &mut SnakeGame, requested: Direction) -> bool {
    if !game.is_running() {
        return false;
    }
    if turn(game.direction, requested) != requested {
        return false;
    }
    game.inbox.post(requested);
    true
}

/// Advance the game by one tick: move, check apple, check collisions.
pub fn tick<R: Rng + ?Sized>(game: &mut SnakeGame, rng: &mut R) -> TickOutcome {
    if !game.is_running() {
        return TickOutcome::Idle;
    }

    game.tick_count += 1;

    if let Some(requested) = game.inbox.take() {
        game.direction = turn(game.direction, requested);
    }

    let vacated = move_snake(game);
    let ate = check_apple(game, vacated, rng);

    if let Some(cause) = check_collisions(game) {
        game.game_over = Some(cause);
        return TickOutcome::GameOver { cause };
    }

    if ate {
        TickOutcome::AteApple { score: game.score }
    } else {
        TickOutcome::Moved
    }
}

/// Shift every segment into the place of the one ahead of it and advance the
/// head one cell. Returns the cell the tail just left.
pub fn move_snake(game: &mut SnakeGame) -> Position {
    let head = game.head();
    let vacated = game.snake.pop_back().unwrap_or(head);
    game.snake.push_front(head.step(game.direction));
    vacated
}

/// Eat the apple if the head is on it: grow back onto `vacated`, score, and
/// drop a new apple anywhere on the board. Returns true if eaten.
pub fn check_apple<R: Rng + ?Sized>(game: &mut SnakeGame, vacated: Position, rng: &mut R) -> bool {
    if game.head() != game.apple {
        return false;
    }
    game.snake.push_back(vacated);
    game.score += 1;
    game.apple = spawn_apple(game.board, rng);
    true
}

/// Body is checked before walls.
pub fn check_collisions(game: &SnakeGame) -> Option<GameOverCause> {
    let head = game.head();

    if game.snake.iter().skip(1).any(|&seg| seg == head) {
        return Some(GameOverCause::SelfBite);
    }

    if game.board.is_out_of_bounds(head) {
        return Some(GameOverCause::Wall);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    /// Game with the snake laid out explicitly and the apple parked far away.
    fn game_with_snake(segments: &[(i16, i16)], direction: Direction) -> SnakeGame {
        let mut rng = create_test_rng();
        let mut game = SnakeGame::new(&mut rng);
        game.snake.clear();
        game.snake
            .extend(segments.iter().map(|&(x, y)| Position::new(x, y)));
        game.direction = direction;
        game.apple = Position::new(30, 30);
        game
    }

    #[test]
    fn test_turn_allows_perpendicular_and_same() {
        assert_eq!(turn(Direction::Right, Direction::Up), Direction::Up);
        assert_eq!(turn(Direction::Right, Direction::Down), Direction::Down);
        assert_eq!(turn(Direction::Right, Direction::Right), Direction::Right);
    }

    #[test]
    fn test_turn_refuses_reversal_all_directions() {
        for d in Direction::ALL {
            assert_eq!(turn(d, d.opposite()), d);
        }
    }

    #[test]
    fn test_steer_posts_to_inbox() {
        let mut game = game_with_snake(&[(5, 5), (4, 5)], Direction::Right);
        assert!(steer(&mut game, Direction::Up));
        assert_eq!(game.inbox.peek(), Some(Direction::Up));
        // Not committed until the next tick
        assert_eq!(game.direction, Direction::Right);
    }

    #[test]
    fn test_steer_refuses_reversal() {
        let mut game = game_with_snake(&[(5, 5), (4, 5)], Direction::Right);
        assert!(!steer(&mut game, Direction::Left));
        assert_eq!(game.inbox.peek(), None);
    }

    #[test]
    fn test_steer_burst_cannot_reverse_within_one_tick() {
        let mut rng = create_test_rng();
        let mut game = game_with_snake(&[(5, 5), (4, 5), (3, 5)], Direction::Right);

        // Up is accepted; Left is the reverse of the committed Right
        assert!(steer(&mut game, Direction::Up));
        assert!(!steer(&mut game, Direction::Left));

        tick(&mut game, &mut rng);
        assert_eq!(game.direction, Direction::Up);
        assert_eq!(game.head(), Position::new(5, 4));
        assert!(game.is_running());
    }

    #[test]
    fn test_steer_last_accepted_wins() {
        let mut rng = create_test_rng();
        let mut game = game_with_snake(&[(5, 5), (4, 5)], Direction::Right);

        steer(&mut game, Direction::Up);
        steer(&mut game, Direction::Down);
        tick(&mut game, &mut rng);

        assert_eq!(game.direction, Direction::Down);
        assert_eq!(game.head(), Position::new(5, 6));
    }

    #[test]
    fn test_steer_ignored_when_game_over() {
        let mut game = game_with_snake(&[(5, 5), (4, 5)], Direction::Right);
        game.game_over = Some(GameOverCause::Wall);
        assert!(!steer(&mut game, Direction::Up));
        assert_eq!(game.inbox.peek(), None);
    }

    #[test]
    fn test_inbox_drained_each_tick() {
        let mut rng = create_test_rng();
        let mut game = game_with_snake(&[(5, 5), (4, 5)], Direction::Right);
        steer(&mut game, Direction::Down);
        tick(&mut game, &mut rng);
        assert_eq!(game.inbox.peek(), None);

        // Keeps heading down without further input
        tick(&mut game, &mut rng);
        assert_eq!(game.head(), Position::new(5, 7));
    }

    #[test]
    fn test_move_shifts_body_toward_head() {
        let mut game = game_with_snake(&[(5, 5), (4, 5), (3, 5)], Direction::Right);
        let vacated = move_snake(&mut game);

        assert_eq!(vacated, Position::new(3, 5));
        let cells: Vec<Position> = game.snake.iter().copied().collect();
        assert_eq!(
            cells,
            vec![Position::new(6, 5), Position::new(5, 5), Position::new(4, 5)]
        );
    }

    #[test]
    fn test_head_advance_each_direction() {
        for (direction, expected) in [
            (Direction::Up, Position::new(5, 4)),
            (Direction::Down, Position::new(5, 6)),
            (Direction::Left, Position::new(4, 5)),
            (Direction::Right, Position::new(6, 5)),
        ] {
            let mut game = game_with_snake(&[(5, 5)], direction);
            move_snake(&mut game);
            assert_eq!(game.head(), expected, "moving {:?}", direction);
        }
    }

    #[test]
    fn test_single_tick_from_start() {
        let mut rng = create_test_rng();
        let mut game = SnakeGame::new(&mut rng);
        game.apple = Position::new(20, 20);

        let outcome = tick(&mut game, &mut rng);

        assert_eq!(outcome, TickOutcome::Moved);
        assert_eq!(game.head(), Position::new(1, 0));
        assert!(game.snake.iter().skip(1).all(|&s| s == Position::new(0, 0)));
        assert_eq!(game.body_parts(), 6);
        assert!(game.is_running());
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_eating_apple_grows_and_scores() {
        let mut rng = create_test_rng();
        let mut game = game_with_snake(&[(5, 5), (4, 5), (3, 5)], Direction::Right);
        game.apple = Position::new(6, 5);

        let outcome = tick(&mut game, &mut rng);

        assert_eq!(outcome, TickOutcome::AteApple { score: 1 });
        assert_eq!(game.score, 1);
        assert_eq!(game.body_parts(), 4);
        // The new tail is the cell the old tail just left
        assert_eq!(game.snake.back().copied(), Some(Position::new(3, 5)));
        assert!(game.board.contains(game.apple));
    }

    #[test]
    fn test_apple_not_eaten_when_head_elsewhere() {
        let mut rng = create_test_rng();
        let mut game = game_with_snake(&[(5, 5), (4, 5)], Direction::Right);
        game.apple = Position::new(5, 6);

        let vacated = move_snake(&mut game);
        assert!(!check_apple(&mut game, vacated, &mut rng));
        assert_eq!(game.apple, Position::new(5, 6));
        assert_eq!(game.body_parts(), 2);
    }

    #[test]
    fn test_wall_right_allows_one_cell_past_grid() {
        let mut rng = create_test_rng();
        let width = Board::default().width;
        let mut game = game_with_snake(&[(width - 1, 7), (width - 2, 7)], Direction::Right);

        // Rightmost drawn cell -> x == width: still alive
        assert_eq!(tick(&mut game, &mut rng), TickOutcome::Moved);
        assert_eq!(game.head().x, width);
        assert!(game.is_running());

        // x == width + 1: dead
        assert_eq!(
            tick(&mut game, &mut rng),
            TickOutcome::GameOver {
                cause: GameOverCause::Wall
            }
        );
        assert!(!game.is_running());
    }

    #[test]
    fn test_wall_bottom_allows_one_cell_past_grid() {
        let mut rng = create_test_rng();
        let height = Board::default().height;
        let mut game = game_with_snake(&[(3, height - 1)], Direction::Down);

        tick(&mut game, &mut rng);
        assert!(game.is_running());
        tick(&mut game, &mut rng);
        assert_eq!(game.game_over, Some(GameOverCause::Wall));
    }

    #[test]
    fn test_wall_top_and_left_end_immediately() {
        let mut rng = create_test_rng();

        let mut game = game_with_snake(&[(10, 0)], Direction::Up);
        tick(&mut game, &mut rng);
        assert_eq!(game.game_over, Some(GameOverCause::Wall));

        let mut game = game_with_snake(&[(0, 10)], Direction::Left);
        tick(&mut game, &mut rng);
        assert_eq!(game.game_over, Some(GameOverCause::Wall));
    }

    #[test]
    fn test_self_collision() {
        let mut rng = create_test_rng();
        // Head moving right from (5,5) into (6,5), which the body occupies
        let mut game = game_with_snake(
            &[(5, 5), (5, 4), (6, 4), (7, 4), (7, 5), (6, 5), (6, 6)],
            Direction::Right,
        );

        let outcome = tick(&mut game, &mut rng);

        assert_eq!(
            outcome,
            TickOutcome::GameOver {
                cause: GameOverCause::SelfBite
            }
        );
        assert!(!game.is_running());
    }

    #[test]
    fn test_moving_into_vacated_tail_cell_is_safe() {
        let mut rng = create_test_rng();
        // Tight loop: the head follows into the cell the tail leaves this tick
        let mut game = game_with_snake(&[(5, 5), (6, 5), (6, 6), (5, 6)], Direction::Down);

        let outcome = tick(&mut game, &mut rng);

        assert_eq!(outcome, TickOutcome::Moved);
        assert_eq!(game.head(), Position::new(5, 6));
    }

    #[test]
    fn test_tick_idle_after_game_over() {
        let mut rng = create_test_rng();
        let mut game = game_with_snake(&[(5, 5), (4, 5)], Direction::Right);
        game.game_over = Some(GameOverCause::SelfBite);
        let before: Vec<Position> = game.snake.iter().copied().collect();

        assert_eq!(tick(&mut game, &mut rng), TickOutcome::Idle);

        let after: Vec<Position> = game.snake.iter().copied().collect();
        assert_eq!(before, after);
        assert_eq!(game.tick_count, 0);
    }

    #[test]
    fn test_length_non_decreasing_while_running() {
        let mut rng = create_test_rng();
        let mut game = SnakeGame::new(&mut rng);
        let mut last_len = game.body_parts();

        // Sweep down and across, turning at the edges
        for step in 0..400u32 {
            if step % 30 == 0 {
                let next = if game.direction == Direction::Right {
                    Direction::Down
                } else {
                    Direction::Right
                };
                steer(&mut game, next);
            }
            tick(&mut game, &mut rng);
            if !game.is_running() {
                break;
            }
            assert!(game.body_parts() >= last_len);
            assert_eq!(game.body_parts(), 6 + game.score as usize);
            last_len = game.body_parts();
        }
    }
}
