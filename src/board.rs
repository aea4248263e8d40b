use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::coords::{Coordinate, Direction::Right, Direction};
use crate::error::ConfigError;
use crate::keys::KeyReceiver;
use crate::snake::{MoveResult, Snake, INITIAL_LENGTH};

const START_HEAD: Coordinate = Coordinate::new(4, 2);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepResult {
    Moved,
    Ate,
    /// Food was eaten and there is no free cell left for the next one.
    Won,
    Crashed
}

impl StepResult {
    pub fn is_over(self) -> bool {
        matches!(self, StepResult::Won | StepResult::Crashed)
    }
}

pub struct GameState {
    width: i32,
    height: i32,
    snake: Snake,
    /// `None` only once the board is full and the game is won.
    food: Option<Coordinate>,
    rng: StdRng,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: &GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: &GameConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let snake = Snake::new(START_HEAD, INITIAL_LENGTH, Right);
        Ok(Self::from_parts(config.width, config.height, snake, rng))
    }

    /// Board with `snake` already on it and food on a random free cell, if any.
    pub(crate) fn from_parts(width: i32, height: i32, snake: Snake, mut rng: StdRng) -> Self {
        let food = sample_free_cell(&mut rng, width, height, &snake);
        GameState { width, height, snake, food, rng }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Coordinate> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.snake.length() - INITIAL_LENGTH
    }

    /// Random unoccupied cell, or `None` once the snake covers the whole board.
    pub fn new_food_coordinate(&mut self) -> Option<Coordinate> {
        sample_free_cell(&mut self.rng, self.width, self.height, &self.snake)
    }

    /// One tick: consume the latest queued direction and move.
    pub fn step(&mut self, keys: &KeyReceiver) -> StepResult {
        self.advance(keys.drain_latest())
    }

    pub fn advance(&mut self, turn: Option<Direction>) -> StepResult {
        match self.snake.move_step(turn, self.width, self.height) {
            MoveResult::Crashed => StepResult::Crashed,
            MoveResult::Moved { new_head } if Some(new_head) == self.food => {
                self.snake.grow();
                self.food = self.new_food_coordinate();

                match self.food {
                    Some(food) => {
                        debug!("food eaten at {:?}, next at {:?}", new_head, food);
                        StepResult::Ate
                    }
                    None => StepResult::Won,
                }
            }
            MoveResult::Moved { .. } => StepResult::Moved,
        }
    }
}

fn sample_free_cell(rng: &mut StdRng, width: i32, height: i32, snake: &Snake) -> Option<Coordinate> {
    if snake.fields().len() as i64 >= width as i64 * height as i64 {
        return None;
    }

    loop {
        let coord = Coordinate::new(rng.gen_range(0..width), rng.gen_range(0..height));
        if !snake.is_occupied(coord) {
            return Some(coord);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Direction::*;
    use crate::keys::key_channel;

    fn fresh(seed: u64) -> GameState {
        GameState::with_seed(&GameConfig::default(), seed).unwrap()
    }

    fn food_is_free(state: &GameState) -> bool {
        state.food().map_or(true, |food| !state.snake().is_occupied(food))
    }

    #[test]
    fn fresh_game_scores_zero() {
        let state = fresh(1);
        assert_eq!(state.score(), 0);
        assert_eq!(state.snake().length(), 3);
        assert_eq!(state.snake().head(), Coordinate::new(4, 2));
        assert!(state.food().is_some());
        assert!(food_is_free(&state));
    }

    #[test]
    fn small_board_is_rejected() {
        let err = GameState::new(&GameConfig::with_size(7, 7)).err();
        assert!(matches!(err, Some(ConfigError::BoardTooSmall { .. })));
    }

    #[test]
    fn eating_grows_and_scores() {
        let mut state = fresh(2);
        state.food = Some(Coordinate::new(5, 2));

        assert_eq!(state.advance(None), StepResult::Ate);
        assert_eq!(state.snake().length(), 4);
        assert_eq!(state.score(), 1);
        assert_ne!(state.food(), Some(Coordinate::new(5, 2)));
        assert!(state.food().is_some());
        assert!(food_is_free(&state));
    }

    #[test]
    fn latest_key_wins_and_reversal_is_dropped() {
        let mut state = fresh(3);
        let (tx, rx) = key_channel();
        tx.push(Down);
        tx.push(Left);

        state.step(&rx);
        assert_eq!(state.snake().direction(), Right);
        assert_eq!(state.snake().head(), Coordinate::new(5, 2));
    }

    #[test]
    fn queued_turn_is_applied() {
        let mut state = fresh(4);
        let (tx, rx) = key_channel();
        tx.push(Up);

        state.step(&rx);
        assert_eq!(state.snake().direction(), Up);
    }

    #[test]
    fn running_into_the_wall_ends_the_game() {
        let mut state = GameState::with_seed(&GameConfig::with_size(8, 8), 5).unwrap();
        // put the food out of the way so nothing else happens
        state.food = Some(Coordinate::new(0, 7));

        let results: Vec<_> = (0..4).map(|_| state.advance(None)).collect();
        assert_eq!(results, vec![StepResult::Moved, StepResult::Moved, StepResult::Moved, StepResult::Crashed]);
        assert!(results[3].is_over());
        assert_eq!(state.snake().head(), Coordinate::new(7, 2));
    }

    #[test]
    fn eating_the_last_food_wins_and_clears_it() {
        // 8x1 row with x=0..6 taken; the only cell that frees up on the next
        // move is the off-board (-1, 0), so (7, 0) is the last free cell
        let snake = Snake::new(Coordinate::new(6, 0), 8, Right);
        let mut state = GameState::from_parts(8, 1, snake, StdRng::seed_from_u64(9));
        state.food = Some(Coordinate::new(7, 0));

        let result = state.advance(None);

        assert_eq!(result, StepResult::Won);
        assert!(result.is_over());
        assert_eq!(state.food(), None);
        assert_eq!(state.snake().fields().len(), 8);
        assert_eq!(state.score(), 9 - INITIAL_LENGTH);
        assert!(food_is_free(&state));
    }

    #[test]
    fn no_free_cell_means_no_food() {
        let mut rng = StdRng::seed_from_u64(7);
        // a single row exactly as long as the snake
        let snake = Snake::new(Coordinate::new(7, 0), 8, Right);

        assert_eq!(sample_free_cell(&mut rng, 8, 1, &snake), None);

        let spare = sample_free_cell(&mut rng, 8, 2, &snake).unwrap();
        assert_eq!(spare.y, 1);
    }
}
