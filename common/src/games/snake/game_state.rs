use crate::games::SessionRng;
use crate::log;
use super::entity::Snake;
use super::events::GameEvents;
use super::food::Food;
use super::settings::SnakeSettings;
use super::types::{DeathReason, Direction, GameStatus};

/// The whole simulation: one snake, one piece of food and the score.
///
/// Holds no rendering or audio handles. Hosts drive it with [`GameState::update`]
/// on every timer tick and [`GameState::apply_direction_input`] on every
/// directional key press, one event at a time.
#[derive(Clone, Debug)]
pub struct GameState {
    snake: Snake,
    food: Food,
    status: GameStatus,
    score: u32,
    board_size: i32,
}

impl GameState {
    pub fn new(settings: &SnakeSettings, rng: &mut SessionRng) -> Self {
        let snake = Snake::new();
        let food = Food::new(snake.body(), settings.board_size, rng);
        Self {
            snake,
            food,
            status: GameStatus::Running,
            score: 0,
            board_size: settings.board_size,
        }
    }

    /// Runs one tick. Does nothing while stopped.
    ///
    /// Food is checked before the collision checks. A wall collision skips the
    /// tail check.
    pub fn update(&mut self, rng: &mut SessionRng, events: &mut impl GameEvents) {
        if self.status != GameStatus::Running {
            return;
        }

        self.snake.advance();
        self.check_collision_with_food(rng, events);

        if let Some(reason) = self.detect_collision() {
            self.game_over(reason, rng, events);
        }
    }

    /// Any direction resumes a stopped game and is applied as a turn in the
    /// same step.
    pub fn apply_direction_input(&mut self, direction: Direction) {
        if self.status == GameStatus::Stopped {
            self.status = GameStatus::Running;
            log!("Game resumed");
        }
        self.snake.set_direction(direction);
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn board_size(&self) -> i32 {
        self.board_size
    }

    fn check_collision_with_food(&mut self, rng: &mut SessionRng, events: &mut impl GameEvents) {
        if self.snake.head() != self.food.position() {
            return;
        }

        self.food.relocate(self.snake.body(), self.board_size, rng);
        self.snake.grow();
        self.score += 1;
        log!("Snake ate food. Score: {}", self.score);
        events.on_eat();
    }

    fn detect_collision(&self) -> Option<DeathReason> {
        if !self.snake.head().is_within(self.board_size) {
            Some(DeathReason::WallCollision)
        } else if self.snake.bites_itself() {
            Some(DeathReason::SelfCollision)
        } else {
            None
        }
    }

    fn game_over(&mut self, reason: DeathReason, rng: &mut SessionRng, events: &mut impl GameEvents) {
        let final_score = self.score;
        self.snake.reset();
        self.food.relocate(self.snake.body(), self.board_size, rng);
        self.status = GameStatus::Stopped;
        self.score = 0;
        log!("Game over ({:?}) with score {}", reason, final_score);
        events.on_collision(reason);
    }

    #[cfg(test)]
    fn with_parts(snake: Snake, food: Food, board_size: i32) -> Self {
        Self {
            snake,
            food,
            status: GameStatus::Running,
            score: 0,
            board_size,
        }
    }
}
