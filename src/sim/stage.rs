//! Stage progression state machine
//!
//! ```text
//! Playing(s) --score >= threshold(s)--> PendingUpgrade(s) --screen empty--> Playing(s + 1)
//! Playing(final) --score >= threshold(final)--> GameOver(won)
//! any --lives == 0--> GameOver(lost)
//! GameOver --restart--> Playing(1)
//! ```
//!
//! The pending phase holds the stage change back until every entity has left
//! the screen; spawning is suspended while it lasts.

use serde::{Deserialize, Serialize};

use crate::Tuning;

/// Where the run is in its stage sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StagePhase {
    Playing { stage: u32 },
    /// Threshold reached, waiting for the screen to clear
    PendingUpgrade { stage: u32 },
    GameOver { stage: u32, won: bool },
}

/// Outcome of a progression check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageTransition {
    /// Threshold crossed, upgrade deferred until the screen is empty
    UpgradePending { stage: u32 },
    /// Moved on to `stage`
    Advanced { stage: u32 },
    /// Final stage cleared
    Won { stage: u32 },
}

/// Banner shown after a stage change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageMessage {
    pub text: String,
    pub remaining_ticks: u32,
}

/// Stage state machine plus the difficulty it drives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageProgression {
    pub phase: StagePhase,
    /// Current scroll speed (px/frame)
    pub speed: f32,
    pub message: Option<StageMessage>,
}

impl StageProgression {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: StagePhase::Playing { stage: 1 },
            speed: tuning.base_speed,
            message: None,
        }
    }

    pub fn stage(&self) -> u32 {
        match self.phase {
            StagePhase::Playing { stage }
            | StagePhase::PendingUpgrade { stage }
            | StagePhase::GameOver { stage, .. } => stage,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, StagePhase::PendingUpgrade { .. })
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, StagePhase::GameOver { .. })
    }

    /// Run ended by losing the last life
    pub fn lose(&mut self) {
        if !self.is_game_over() {
            let stage = self.stage();
            self.phase = StagePhase::GameOver { stage, won: false };
            log::info!("Game over on stage {}", stage);
        }
    }

    /// Tick the banner timer
    pub fn tick_message(&mut self) {
        if let Some(message) = &mut self.message {
            message.remaining_ticks = message.remaining_ticks.saturating_sub(1);
            if message.remaining_ticks == 0 {
                self.message = None;
            }
        }
    }

    /// Check thresholds and the deferred upgrade. At most one transition per call.
    pub fn update(
        &mut self,
        score: u32,
        screen_empty: bool,
        tuning: &Tuning,
    ) -> Option<StageTransition> {
        match self.phase {
            StagePhase::PendingUpgrade { stage } => {
                if !screen_empty {
                    return None;
                }
                let next = stage + 1;
                self.phase = StagePhase::Playing { stage: next };
                self.speed = (self.speed + tuning.speed_step).min(tuning.max_speed);
                self.message = Some(StageMessage {
                    text: format!("STAGE {} START!", next),
                    remaining_ticks: tuning.stage_message_frames,
                });
                log::info!("Stage {} started (speed {})", next, self.speed);
                Some(StageTransition::Advanced { stage: next })
            }
            StagePhase::Playing { stage } => {
                let threshold = tuning.threshold(stage)?;
                if score < threshold {
                    return None;
                }
                if stage >= tuning.final_stage {
                    self.phase = StagePhase::GameOver { stage, won: true };
                    self.message = Some(StageMessage {
                        text: "ALL STAGES CLEAR!".to_string(),
                        remaining_ticks: tuning.stage_message_frames,
                    });
                    log::info!("Final stage {} cleared with score {}", stage, score);
                    Some(StageTransition::Won { stage })
                } else {
                    self.phase = StagePhase::PendingUpgrade { stage };
                    log::info!("Stage {} cleared, waiting for the screen to empty", stage);
                    Some(StageTransition::UpgradePending { stage })
                }
            }
            StagePhase::GameOver { .. } => None,
        }
    }
}
