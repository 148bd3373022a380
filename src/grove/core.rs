//! Intent dispatcher tying the economy and the study timer together.
//!
//! The presentation raises an [`Intent`], the core validates and mutates,
//! and every outcome comes back as a list of [`Notification`]s for the
//! caller to redraw from. Nothing here renders or reads the clock.

use super::error::Rejection;
use super::logic;
use super::state::PlayerState;
use super::timer::{StudyTimer, TimerEvent};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    SelectCharacter(String),
    StartStudySession(i64),
    BuyItem(String),
    FeedPet,
    /// One second of study time, sent by the external clock.
    RequestTick,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Notification {
    StateChanged(PlayerState),
    SessionStarted { remaining_seconds: u64, reward: u32 },
    SessionProgress { remaining_seconds: u64 },
    SessionCompleted { reward: u32 },
    OperationRejected(Rejection),
}

/// One player's game: owned state, no globals.
#[derive(Clone, Debug, PartialEq)]
pub struct Grove {
    player: PlayerState,
    timer: StudyTimer,
}

impl Grove {
    pub fn new() -> Self {
        Self::with_player(PlayerState::new())
    }

    pub fn with_player(player: PlayerState) -> Self {
        Self {
            player,
            timer: StudyTimer::new(),
        }
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn timer(&self) -> &StudyTimer {
        &self.timer
    }

    pub fn is_studying(&self) -> bool {
        self.timer.is_running()
    }

    pub fn dispatch(&mut self, intent: Intent) -> Vec<Notification> {
        log::debug!("intent: {:?}", intent);
        let result = match intent {
            Intent::SelectCharacter(id) => logic::select_character(&mut self.player, &id)
                .map(|_| vec![self.state_changed()]),
            Intent::BuyItem(id) => {
                logic::purchase(&mut self.player, &id).map(|_| vec![self.state_changed()])
            }
            Intent::FeedPet => logic::feed_pet(&mut self.player).map(|_| vec![self.state_changed()]),
            Intent::StartStudySession(minutes) => {
                self.timer.start(minutes).map(|remaining_seconds| {
                    log::info!("study session started: {} min", minutes);
                    vec![Notification::SessionStarted {
                        remaining_seconds,
                        reward: minutes as u32,
                    }]
                })
            }
            Intent::RequestTick => Ok(self.tick()),
        };

        match result {
            Ok(notifications) => notifications,
            Err(rejection) => {
                log::info!("rejected: {}", rejection.kind());
                vec![Notification::OperationRejected(rejection)]
            }
        }
    }

    fn tick(&mut self) -> Vec<Notification> {
        match self.timer.tick() {
            Some(TimerEvent::Progress { remaining_seconds }) => {
                vec![Notification::SessionProgress { remaining_seconds }]
            }
            Some(TimerEvent::Completed { reward }) => {
                logic::apply_study_reward(&mut self.player, reward);
                log::info!(
                    "study session completed: +{} (sessions: {})",
                    reward,
                    self.player.completed_sessions
                );
                vec![
                    Notification::SessionCompleted { reward },
                    self.state_changed(),
                ]
            }
            None => Vec::new(),
        }
    }

    fn state_changed(&self) -> Notification {
        Notification::StateChanged(self.player.clone())
    }
}
