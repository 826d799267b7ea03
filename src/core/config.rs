//! Round configuration.
//!
//! The engine takes its dimensions, obstacle count, and player count as
//! explicit parameters at round start. There is no runtime config file and
//! no ambient state; the presentation layer passes a `RoundConfig` once and
//! the engine carries it across rounds.

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Reference grid width.
pub const DEFAULT_WIDTH: u16 = 6;
/// Reference grid height.
pub const DEFAULT_HEIGHT: u16 = 6;
/// Reference obstacle count.
///
/// Obstacle cells are drawn independently, so duplicate draws can land on
/// the same cell and the effective count may be lower. That matches the
/// reference behavior and is kept as-is.
pub const DEFAULT_OBSTACLES: u16 = 3;
/// Reference player count.
pub const DEFAULT_PLAYERS: usize = 2;

/// Configuration for a round: board size, obstacles, players.
///
/// ## Example
///
/// ```
/// use life_tile::core::RoundConfig;
///
/// // The reference game: 6x6, 3 obstacles, 2 players
/// let config = RoundConfig::default();
/// assert!(config.validate().is_ok());
///
/// // A bigger free-for-all
/// let config = RoundConfig::new(10, 8).obstacles(5).players(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Grid width in cells.
    pub width: u16,

    /// Grid height in cells.
    pub height: u16,

    /// Number of independent obstacle draws at round start.
    pub obstacle_count: u16,

    /// Number of players in turn order.
    pub player_count: usize,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            obstacle_count: DEFAULT_OBSTACLES,
            player_count: DEFAULT_PLAYERS,
        }
    }
}

impl RoundConfig {
    /// Create a configuration with the given grid size and reference
    /// obstacle and player counts.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the obstacle draw count.
    #[must_use]
    pub fn obstacles(mut self, count: u16) -> Self {
        self.obstacle_count = count;
        self
    }

    /// Set the player count.
    #[must_use]
    pub fn players(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Total number of grid cells.
    #[must_use]
    pub fn cell_count(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Check that this configuration describes a playable round.
    ///
    /// Obstacle draws must leave at least one claimable cell even if no
    /// draw collapses, otherwise a round could begin already full.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width < 1 || self.height < 1 {
            return Err(EngineError::InvalidConfig(format!(
                "grid dimensions must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.player_count < 2 {
            return Err(EngineError::InvalidConfig(format!(
                "need at least 2 players, got {}",
                self.player_count
            )));
        }
        if self.player_count > 255 {
            return Err(EngineError::InvalidConfig(format!(
                "at most 255 players supported, got {}",
                self.player_count
            )));
        }
        if self.obstacle_count as u32 >= self.cell_count() {
            return Err(EngineError::InvalidConfig(format!(
                "{} obstacle draws cannot leave a claimable cell on a {}x{} grid",
                self.obstacle_count, self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_game() {
        let config = RoundConfig::default();

        assert_eq!(config.width, 6);
        assert_eq!(config.height, 6);
        assert_eq!(config.obstacle_count, 3);
        assert_eq!(config.player_count, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RoundConfig::new(4, 5).obstacles(2).players(3);

        assert_eq!(config.width, 4);
        assert_eq!(config.height, 5);
        assert_eq!(config.cell_count(), 20);
        assert_eq!(config.obstacle_count, 2);
        assert_eq!(config.player_count, 3);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(RoundConfig::new(0, 6).validate().is_err());
        assert!(RoundConfig::new(6, 0).validate().is_err());
    }

    #[test]
    fn test_rejects_too_few_players() {
        assert!(RoundConfig::default().players(0).validate().is_err());
        assert!(RoundConfig::default().players(1).validate().is_err());
        assert!(RoundConfig::default().players(2).validate().is_ok());
    }

    #[test]
    fn test_rejects_obstacles_filling_grid() {
        assert!(RoundConfig::new(2, 2).obstacles(4).validate().is_err());
        assert!(RoundConfig::new(2, 2).obstacles(3).validate().is_ok());
    }
}
