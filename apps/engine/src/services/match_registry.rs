//! In-memory registry of live matches, one per room.
//!
//! Each room's state sits behind its own mutex, so actions within a room are
//! applied one at a time while different rooms proceed independently. The
//! registry also tracks when the current turn started; the transport drives
//! the turn clock by polling [`MatchRegistry::overdue_rooms`] and calling
//! [`MatchRegistry::run_timeout_fallback`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};

use crate::config::engine::EngineConfig;
use crate::domain::{
    apply_in_place, derive_transitions, initialize_game, project_all, project_for_player,
    GameAction, GameState, GameStatus, GameTransition, PlayerId, PlayerView, RoomId, TeamKey,
};
use crate::error::AppError;
use crate::errors::ErrorCode;

#[derive(Debug, Clone)]
pub struct MatchEntry {
    pub state: GameState,
    /// When the player on turn got the turn.
    pub turn_started_at: Instant,
}

/// What an accepted action produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub state: GameState,
    pub transitions: Vec<GameTransition>,
}

impl ActionOutcome {
    pub fn finished(&self) -> bool {
        self.state.is_finished()
    }
}

pub struct MatchRegistry {
    matches: DashMap<RoomId, Arc<Mutex<MatchEntry>>>,
    rng: Mutex<ChaCha20Rng>,
    turn_timeout: Duration,
}

impl Default for MatchRegistry {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl MatchRegistry {
    pub fn new(config: &EngineConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_os_rng(),
        };
        Self {
            matches: DashMap::new(),
            rng: Mutex::new(rng),
            turn_timeout: config.turn_timeout,
        }
    }

    pub fn turn_timeout(&self) -> Duration {
        self.turn_timeout
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    fn entry(&self, room_id: &str) -> Result<Arc<Mutex<MatchEntry>>, AppError> {
        self.matches
            .get(room_id)
            .map(|e| Arc::clone(e.value()))
            .ok_or_else(|| AppError::room_not_found(room_id))
    }

    /// Deal a new match into `room_id`.
    ///
    /// Replaces a finished match in the same room; a match still in progress
    /// is a conflict.
    pub fn start_match<I, S>(
        &self,
        room_id: &str,
        players: I,
        previous_winner: Option<TeamKey>,
    ) -> Result<GameState, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<PlayerId>,
    {
        let state = {
            let mut rng = self.rng.lock();
            initialize_game(room_id, players, previous_winner, &mut *rng)?
        };

        match self.matches.entry(room_id.to_string()) {
            Entry::Occupied(occupied) => {
                let mut guard = occupied.get().lock();
                if !guard.state.is_finished() {
                    return Err(AppError::conflict(
                        ErrorCode::MatchInProgress,
                        format!("room {room_id} already has a match in progress"),
                    ));
                }
                *guard = MatchEntry {
                    state: state.clone(),
                    turn_started_at: Instant::now(),
                };
            }
            Entry::Vacant(vacant) => {
                vacant.insert(Arc::new(Mutex::new(MatchEntry {
                    state: state.clone(),
                    turn_started_at: Instant::now(),
                })));
            }
        }

        info!(
            room_id,
            trump_caller = %state.trump_caller_id,
            "match started"
        );
        Ok(state)
    }

    /// Start the next match with the same seating. The winners of the
    /// finished match supply the next trump caller.
    pub fn rematch(&self, room_id: &str) -> Result<GameState, AppError> {
        let entry = self.entry(room_id)?;
        let mut guard = entry.lock();
        if !guard.state.is_finished() {
            return Err(AppError::conflict(
                ErrorCode::MatchInProgress,
                format!("room {room_id} has not finished its match"),
            ));
        }

        let players = guard.state.players.clone();
        let previous_winner = guard.state.winner;
        let state = {
            let mut rng = self.rng.lock();
            initialize_game(room_id, players, previous_winner, &mut *rng)?
        };
        *guard = MatchEntry {
            state: state.clone(),
            turn_started_at: Instant::now(),
        };

        info!(
            room_id,
            previous_winner = ?previous_winner,
            trump_caller = %state.trump_caller_id,
            "rematch started"
        );
        Ok(state)
    }

    pub fn apply(&self, room_id: &str, action: &GameAction) -> Result<ActionOutcome, AppError> {
        self.apply_at(room_id, action, Instant::now())
    }

    /// Apply `action` to the room's match. A rejected action changes nothing
    /// and is returned as a validation error for the acting client.
    pub fn apply_at(
        &self,
        room_id: &str,
        action: &GameAction,
        now: Instant,
    ) -> Result<ActionOutcome, AppError> {
        let entry = self.entry(room_id)?;
        let mut guard = entry.lock();
        self.apply_locked(room_id, &mut guard, action, now)
    }

    fn apply_locked(
        &self,
        room_id: &str,
        entry: &mut MatchEntry,
        action: &GameAction,
        now: Instant,
    ) -> Result<ActionOutcome, AppError> {
        let mut next = entry.state.clone();
        let result = {
            let mut rng = self.rng.lock();
            apply_in_place(&mut next, action, &mut *rng)
        };
        if let Err(err) = result {
            warn!(
                room_id,
                player_id = action.player_id(),
                action = action.name(),
                error = %err,
                "action rejected"
            );
            return Err(err.into());
        }

        let transitions = derive_transitions(&entry.state, &next);
        for t in &transitions {
            match t {
                GameTransition::TurnBecame { player_id } => {
                    entry.turn_started_at = now;
                    debug!(room_id, player_id = %player_id, "turn started");
                }
                GameTransition::TrumpCalled => info!(room_id, "trump called"),
                GameTransition::TrumpRevealed { suit } => {
                    info!(room_id, suit = %suit, "trump revealed")
                }
                GameTransition::TrickCompleted { winner } => {
                    info!(room_id, winner = %winner, "trick completed")
                }
                GameTransition::GameFinished { winner } => {
                    info!(
                        room_id,
                        winner = %winner,
                        forfeited_by = ?next.forfeited_by,
                        "match finished"
                    )
                }
            }
        }
        debug!(
            room_id,
            player_id = action.player_id(),
            action = action.name(),
            "action applied"
        );

        entry.state = next.clone();
        Ok(ActionOutcome {
            state: next,
            transitions,
        })
    }

    pub fn state(&self, room_id: &str) -> Result<GameState, AppError> {
        let entry = self.entry(room_id)?;
        let guard = entry.lock();
        Ok(guard.state.clone())
    }

    pub fn view_for(&self, room_id: &str, player_id: &str) -> Result<PlayerView, AppError> {
        let entry = self.entry(room_id)?;
        let guard = entry.lock();
        Ok(project_for_player(&guard.state, player_id)?)
    }

    /// One projection per seated player, for broadcasting after a change.
    pub fn views(&self, room_id: &str) -> Result<Vec<PlayerView>, AppError> {
        let entry = self.entry(room_id)?;
        let guard = entry.lock();
        Ok(project_all(&guard.state))
    }

    /// Drop a room, e.g. once every player has left.
    pub fn remove(&self, room_id: &str) -> Option<GameState> {
        let (_, entry) = self.matches.remove(room_id)?;
        info!(room_id, "room removed");
        let guard = entry.lock();
        Some(guard.state.clone())
    }

    fn is_overdue(&self, entry: &MatchEntry, now: Instant) -> bool {
        entry.state.status == GameStatus::Playing
            && now.saturating_duration_since(entry.turn_started_at) >= self.turn_timeout
    }

    /// Rooms whose player on turn has used up their time.
    pub fn overdue_rooms(&self, now: Instant) -> Vec<RoomId> {
        let entries: Vec<(RoomId, Arc<Mutex<MatchEntry>>)> = self
            .matches
            .iter()
            .map(|e| (e.key().clone(), Arc::clone(e.value())))
            .collect();

        entries
            .into_iter()
            .filter(|(_, entry)| self.is_overdue(&entry.lock(), now))
            .map(|(room_id, _)| room_id)
            .collect()
    }

    /// Play a random legal card for the player on turn if their time is up.
    ///
    /// Returns `Ok(None)` when the room is no longer overdue, e.g. because the
    /// player acted while the clock was being checked.
    pub fn run_timeout_fallback(
        &self,
        room_id: &str,
        now: Instant,
    ) -> Result<Option<ActionOutcome>, AppError> {
        let entry = self.entry(room_id)?;
        let mut guard = entry.lock();
        if !self.is_overdue(&guard, now) {
            return Ok(None);
        }

        let player_id = guard.state.current_turn.clone();
        info!(room_id, player_id = %player_id, "turn timed out, playing random card");
        let action = GameAction::PlayRandomCard { player_id };
        self.apply_locked(room_id, &mut guard, &action, now).map(Some)
    }
}
