use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Load-time configuration for a simulation instance. Dimensions and block
/// size are in pixels; the tick rate only matters when the loop is paced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid width in pixels.
    pub width: i32,
    /// Grid height in pixels.
    pub height: i32,
    /// Edge length of one grid cell in pixels.
    pub block_size: i32,
    /// Ticks per second when driven interactively. Ignored in unpaced use.
    pub tick_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            block_size: 20,
            tick_rate: 20,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size.
    pub fn new(width: i32, height: i32, block_size: i32) -> Self {
        Self {
            width,
            height,
            block_size,
            ..Default::default()
        }
    }

    /// Small grid for tests.
    pub fn small() -> Self {
        Self::new(200, 200, 20)
    }

    /// Fails fast when the dimensions are not positive multiples of the
    /// block size.
    pub fn validate(&self) -> Result<(), GameError> {
        let ok = self.block_size > 0
            && self.width > 0
            && self.height > 0
            && self.width % self.block_size == 0
            && self.height % self.block_size == 0;

        if ok {
            Ok(())
        } else {
            Err(GameError::OutOfBoundsConfig {
                width: self.width,
                height: self.height,
                block_size: self.block_size,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.width, 600);
        assert_eq!(config.height, 600);
        assert_eq!(config.block_size, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(400, 200, 20);
        assert_eq!(config.width, 400);
        assert_eq!(config.height, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_multiple_dimensions() {
        let config = GameConfig::new(601, 600, 20);
        assert!(matches!(
            config.validate(),
            Err(GameError::OutOfBoundsConfig { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_values() {
        assert!(GameConfig::new(0, 600, 20).validate().is_err());
        assert!(GameConfig::new(600, -600, 20).validate().is_err());
        assert!(GameConfig::new(600, 600, 0).validate().is_err());
    }
}
