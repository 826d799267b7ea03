//! Round state and the operations that advance it.
//!
//! `RoundState` is a value: operations borrow a snapshot and return a new
//! one. The grid and history are `im` structures, so the clone at each
//! commit boundary is structural sharing, not a deep copy, and the input
//! snapshot is never aliased by the output.
//!
//! The caller must treat the returned state as the sole current state and
//! discard the prior one; the engine assumes a single in-flight selection
//! and a single writer, matching two players on one device.

use im::Vector;
use std::time::Duration;
use tracing::debug;

use super::error::EngineError;
use crate::core::{Claim, GameRng, Grid, PlayerId, PlayerMap, PlayerScore, Rect, RoundConfig};

/// One round of Life Tile, from obstacle seeding to full occupancy.
///
/// ## Example
///
/// ```
/// use life_tile::{PlayerId, Rect, RoundConfig, RoundState};
///
/// let config = RoundConfig::new(3, 1).obstacles(0);
/// let state = RoundState::new(config, PlayerId::new(0), 7).unwrap();
///
/// let rect = Rect::cell(0, 0);
/// assert!(state.validate_selection(rect));
/// let state = state.commit(rect).unwrap();
///
/// assert_eq!(state.current_player(), Some(PlayerId::new(1)));
/// assert_eq!(state.score(PlayerId::new(0)).round, 1);
/// ```
#[derive(Clone, Debug)]
pub struct RoundState {
    config: RoundConfig,
    grid: Grid,
    scores: PlayerMap<PlayerScore>,
    /// Whose turn it is; `None` once the round is over.
    current: Option<PlayerId>,
    first_player: PlayerId,
    loser: Option<PlayerId>,
    history: Vector<Claim>,
    /// In-flight drag selection, if any.
    pending: Option<Rect>,
    rng: GameRng,
}

impl RoundState {
    /// Start the first round of a session.
    ///
    /// Builds an all-empty grid, draws `config.obstacle_count` obstacle
    /// cells (independent uniform draws; duplicates collapse, so the
    /// effective count may be lower), and gives the turn to
    /// `first_player`. All scores start at zero.
    pub fn new(
        config: RoundConfig,
        first_player: PlayerId,
        seed: u64,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        if first_player.index() >= config.player_count {
            return Err(EngineError::InvalidConfig(format!(
                "first player {} out of range for {} players",
                first_player, config.player_count
            )));
        }

        let scores = PlayerMap::with_default(config.player_count);
        Ok(Self::seed_round(config, scores, first_player, GameRng::new(seed)))
    }

    /// Build a fresh board for a round, consuming obstacle draws from `rng`.
    fn seed_round(
        config: RoundConfig,
        scores: PlayerMap<PlayerScore>,
        first_player: PlayerId,
        mut rng: GameRng,
    ) -> Self {
        let mut grid = Grid::new(config.width, config.height);
        for _ in 0..config.obstacle_count {
            let x = rng.gen_range_usize(0..config.width as usize) as u16;
            let y = rng.gen_range_usize(0..config.height as usize) as u16;
            grid.block(x, y);
        }

        debug!(
            width = config.width,
            height = config.height,
            obstacles = config.cell_count() - grid.empty_cells(),
            %first_player,
            "round initialized"
        );

        Self {
            config,
            grid,
            scores,
            current: Some(first_player),
            first_player,
            loser: None,
            history: Vector::new(),
            pending: None,
            rng,
        }
    }

    // === Selection ===

    /// Whether `rect` would be a legal claim right now.
    ///
    /// Legal iff the round is active and every cell of `rect` (inclusive
    /// bounds) is empty. Malformed or off-grid rectangles are illegal, not
    /// faults; a drag gesture may stray anywhere. No side effects, safe to
    /// call on every pointer move.
    #[must_use]
    pub fn validate_selection(&self, rect: Rect) -> bool {
        self.loser.is_none() && self.grid.is_region_empty(rect)
    }

    /// Record `rect` as the in-flight drag selection.
    ///
    /// Tracking never fails and implies nothing about legality; the
    /// highlight color comes from [`validate_selection`]. While the round
    /// is over the selection is ignored.
    ///
    /// [`validate_selection`]: RoundState::validate_selection
    #[must_use]
    pub fn select(&self, rect: Rect) -> Self {
        let mut next = self.clone();
        next.pending = if self.loser.is_none() { Some(rect) } else { None };
        next
    }

    /// Discard the in-flight selection (pointer released on an illegal
    /// candidate).
    #[must_use]
    pub fn clear_selection(&self) -> Self {
        let mut next = self.clone();
        next.pending = None;
        next
    }

    // === Commit ===

    /// Commit a claim with zero recorded think time.
    pub fn commit(&self, rect: Rect) -> Result<Self, EngineError> {
        self.commit_timed(rect, Duration::ZERO)
    }

    /// Commit a claim for the current player.
    ///
    /// On success the returned snapshot has the rectangle claimed, the
    /// move appended to history, the claimed area added to the player's
    /// round score, and either the turn advanced or, if the grid is now
    /// full, the round closed: the committer is the loser, their round
    /// score is forfeited, every other player banks theirs, and there is
    /// no current player.
    ///
    /// # Errors
    ///
    /// [`EngineError::RoundOver`] if the round already ended,
    /// [`EngineError::IllegalMove`] if `rect` fails
    /// [`validate_selection`](RoundState::validate_selection).
    pub fn commit_timed(&self, rect: Rect, think_time: Duration) -> Result<Self, EngineError> {
        if self.loser.is_some() {
            return Err(EngineError::RoundOver);
        }
        let player = self.current.ok_or(EngineError::RoundOver)?;
        if !self.validate_selection(rect) {
            return Err(EngineError::IllegalMove(rect));
        }

        let mut next = self.clone();
        next.grid.claim(rect, player);
        next.history.push_back(Claim::timed(player, rect, think_time));
        next.scores[player].round += rect.area();
        next.pending = None;

        debug!(%player, claim = %rect, area = rect.area(), "claim committed");

        if next.grid.is_full() {
            next.loser = Some(player);
            next.current = None;
            for (id, score) in next.scores.iter_mut() {
                if id == player {
                    score.forfeit();
                } else {
                    score.bank();
                }
            }
            debug!(loser = %player, turns = next.history.len(), "round over");
        } else {
            next.current = Some(player.next(self.config.player_count));
        }

        Ok(next)
    }

    // === Round transition ===

    /// Start the next round: rotated first player, fresh obstacle-seeded
    /// grid, cumulative scores carried forward, round scores at zero.
    ///
    /// Obstacle draws continue the session RNG stream, so a session is
    /// fully determined by the seed passed to [`RoundState::new`].
    ///
    /// # Errors
    ///
    /// [`EngineError::NotOver`] while the round is still active; callers
    /// should check [`loser`](RoundState::loser) before offering a
    /// next-round action.
    pub fn start_next_round(&self) -> Result<Self, EngineError> {
        if self.loser.is_none() {
            return Err(EngineError::NotOver);
        }

        let first_player = self.first_player.next(self.config.player_count);
        let mut scores = self.scores.clone();
        for (_, score) in scores.iter_mut() {
            score.round = 0;
        }

        Ok(Self::seed_round(
            self.config.clone(),
            scores,
            first_player,
            self.rng.clone(),
        ))
    }

    // === Snapshot accessors ===

    /// The configuration this round was started with.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// The board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// All players' scores in turn order.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<PlayerScore> {
        &self.scores
    }

    /// One player's score.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> PlayerScore {
        self.scores[player]
    }

    /// Whose turn it is, or `None` once the round is over.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current
    }

    /// The player who opened this round.
    #[must_use]
    pub fn first_player(&self) -> PlayerId {
        self.first_player
    }

    /// The player who filled the last cell, once the round is over.
    #[must_use]
    pub fn loser(&self) -> Option<PlayerId> {
        self.loser
    }

    /// Whether the round has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.loser.is_some()
    }

    /// Committed claims in commit order; the index is the turn number.
    #[must_use]
    pub fn history(&self) -> &Vector<Claim> {
        &self.history
    }

    /// The in-flight drag selection, if any.
    #[must_use]
    pub fn pending_selection(&self) -> Option<Rect> {
        self.pending
    }
}
