//! Session state and the Ready → Playing ⇄ Paused → GameOver state machine.

use crate::collision::{is_night_flip_score, Collision, CollisionJudge};
use crate::config::GameConfig;
use crate::constants::{DEFAULT_SCALE_FACTOR, RESTART_BUTTON};
use crate::entities::{Bird, Ground, PipeStream, Rect};
use crate::input::GameInput;
use rand::Rng;

/// Coarse session phase, derived from the flags on `GameState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first flap or confirm.
    Ready,
    Playing,
    Paused,
    /// Terminal until restarted.
    GameOver,
}

/// Something that happened while handling input or advancing a frame.
/// The game loop turns these into sound cues, persistence and log lines.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Started,
    Flapped,
    Scored { score: u32 },
    NightToggled { is_night: bool },
    Paused,
    Resumed,
    GameOver {
        cause: Collision,
        score: u32,
        /// True when this run beat the previous best.
        new_high_score: bool,
    },
    Restarted,
    QuitRequested,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub bird: Bird,
    pub pipes: PipeStream,
    pub ground: Ground,
    pub judge: CollisionJudge,

    pub score: u32,
    pub high_score: u32,
    pub paused: bool,
    pub game_over: bool,
    /// Set by the first flap/confirm of a run; world scrolling waits on it.
    pub started: bool,
    /// Cosmetic day/night background selection.
    pub is_night: bool,

    pub scroll_speed: f64,
    pub scale_factor: f64,
    /// World-space region of the game-over Restart control.
    pub restart_button: Rect,
}

impl GameState {
    pub fn new(config: &GameConfig, high_score: u32) -> Self {
        let scale_factor = DEFAULT_SCALE_FACTOR;
        let (bx, by, bw, bh) = RESTART_BUTTON;
        Self {
            bird: Bird::new(scale_factor),
            pipes: PipeStream::new(scale_factor, config.scroll_speed),
            ground: Ground::new(scale_factor),
            judge: CollisionJudge::default(),
            score: 0,
            high_score,
            paused: false,
            game_over: false,
            started: false,
            is_night: false,
            scroll_speed: config.scroll_speed,
            scale_factor,
            restart_button: Rect::new(bx, by, bw, bh),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.paused {
            Phase::Paused
        } else if !self.started {
            Phase::Ready
        } else {
            Phase::Playing
        }
    }

    /// Apply one input. Inputs that do not apply to the current phase are
    /// ignored.
    pub fn handle_input(&mut self, input: GameInput) -> Vec<GameEvent> {
        let mut events = Vec::new();

        match input {
            GameInput::Quit => events.push(GameEvent::QuitRequested),
            GameInput::Flap => {
                if self.game_over || self.paused {
                    return events;
                }
                self.start(&mut events);
                self.bird.flap();
                events.push(GameEvent::Flapped);
            }
            GameInput::Confirm => {
                if self.game_over || self.paused {
                    return events;
                }
                self.start(&mut events);
            }
            GameInput::TogglePause => {
                if self.game_over {
                    return events;
                }
                self.paused = !self.paused;
                events.push(if self.paused {
                    GameEvent::Paused
                } else {
                    GameEvent::Resumed
                });
            }
            GameInput::ToggleNight => {
                if self.game_over {
                    return events;
                }
                self.toggle_night(&mut events);
            }
            GameInput::Restart => {
                if self.game_over {
                    self.reset();
                    events.push(GameEvent::Restarted);
                }
            }
            GameInput::Click { x, y } => {
                if self.game_over && self.restart_button.contains(x, y) {
                    self.reset();
                    events.push(GameEvent::Restarted);
                }
            }
        }

        events
    }

    /// Advance the simulation by `dt` seconds. Nothing moves while paused or
    /// after game over.
    pub fn update<R: Rng>(&mut self, dt: f64, rng: &mut R) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.game_over || self.paused {
            return events;
        }

        if self.started {
            self.ground.update(self.scroll_speed, dt);
            self.pipes.update(dt, rng);
        }
        self.bird.update(dt);

        let judgement = self.judge.check(&self.bird, &mut self.pipes);

        // Points first, so a pipe cleared on the fatal frame still counts
        // toward the high score.
        for _ in 0..judgement.pipes_cleared {
            self.award_point(&mut events);
        }

        if let Some(cause) = judgement.collision {
            self.trigger_game_over(cause, &mut events);
        }

        events
    }

    fn start(&mut self, events: &mut Vec<GameEvent>) {
        if !self.started {
            self.started = true;
            self.bird.update_on = true;
            events.push(GameEvent::Started);
        }
    }

    fn award_point(&mut self, events: &mut Vec<GameEvent>) {
        self.score += 1;
        events.push(GameEvent::Scored { score: self.score });
        if is_night_flip_score(self.score) {
            self.toggle_night(events);
        }
    }

    fn toggle_night(&mut self, events: &mut Vec<GameEvent>) {
        self.is_night = !self.is_night;
        events.push(GameEvent::NightToggled {
            is_night: self.is_night,
        });
    }

    /// Enter game over. Only the first call of a run has any effect.
    fn trigger_game_over(&mut self, cause: Collision, events: &mut Vec<GameEvent>) {
        if self.game_over {
            return;
        }

        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }

        self.game_over = true;
        self.started = false;
        self.bird.update_on = false;

        events.push(GameEvent::GameOver {
            cause,
            score: self.score,
            new_high_score,
        });
    }

    /// Begin a fresh run. High score and ground scroll carry over; the
    /// background always returns to day.
    pub fn reset(&mut self) {
        self.bird = Bird::new(self.scale_factor);
        self.pipes = PipeStream::new(self.scale_factor, self.scroll_speed);
        self.score = 0;
        self.paused = false;
        self.game_over = false;
        self.started = false;
        self.is_night = false;
    }
}
