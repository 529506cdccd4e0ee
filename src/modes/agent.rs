use anyhow::{Context, Result};
use rand::Rng;

use crate::env::SnakeEnv;
use crate::game::{GameConfig, TurnSignal};
use crate::metrics::GameMetrics;

/// Options for the headless rollout mode.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Number of episodes to run.
    pub episodes: u32,
    /// Print a progress line every N episodes.
    pub log_frequency: u32,
    /// Game configuration (grid size, block size).
    pub game_config: GameConfig,
}

impl AgentConfig {
    pub fn new(episodes: u32, game_config: GameConfig) -> Self {
        Self {
            episodes,
            log_frequency: 100,
            game_config,
        }
    }
}

/// Headless mode that drives the environment with uniformly random
/// relative-turn signals, unpaced. It exists to exercise the agent-facing
/// contract end to end; any real decision process plugs in the same way.
pub struct AgentMode {
    config: AgentConfig,
    env: SnakeEnv,
    metrics: GameMetrics,
}

impl AgentMode {
    pub fn new(config: AgentConfig) -> Result<Self> {
        let env = SnakeEnv::new(config.game_config.clone())
            .context("Invalid game configuration")?;
        Ok(Self {
            config,
            env,
            metrics: GameMetrics::new(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut rng = rand::thread_rng();

        for episode in 1..=self.config.episodes {
            let (score, ticks) = self.run_episode(&mut rng)?;
            self.metrics.on_game_over(score);

            if episode % self.config.log_frequency == 0 || episode == self.config.episodes {
                println!(
                    "episode {:>6}/{}: score {:>3}, {:>5} ticks | best {}, mean {:.2}",
                    episode,
                    self.config.episodes,
                    score,
                    ticks,
                    self.metrics.high_score,
                    self.metrics.mean_score(),
                );
            }
        }

        self.metrics.update();
        println!(
            "{} episodes in {} | best {}, mean {:.2}",
            self.metrics.games_played,
            self.metrics.format_time(),
            self.metrics.high_score,
            self.metrics.mean_score(),
        );

        Ok(())
    }

    /// Runs a single episode to termination and returns (score, ticks).
    /// Every episode terminates: the stall rule caps frame counts even when
    /// the random walk avoids every wall.
    fn run_episode<R: Rng>(&mut self, rng: &mut R) -> Result<(u32, u32)> {
        self.env.reset().context("Failed to reset environment")?;

        let mut ticks = 0u32;
        loop {
            let signal = TurnSignal::from_index(rng.gen_range(0..3));
            let outcome = self
                .env
                .step(signal)
                .context("Environment step failed")?;
            ticks += 1;

            if outcome.game_over {
                return Ok((outcome.score, ticks));
            }
        }
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    #[test]
    fn test_episode_terminates() {
        let config = AgentConfig::new(1, GameConfig::small());
        let mut mode = AgentMode::new(config).unwrap();

        let (score, ticks) = mode.run_episode(&mut thread_rng()).unwrap();

        assert!(ticks > 0);
        assert!(score <= ticks);
        assert!(!mode.env.state().is_alive());
    }

    #[test]
    fn test_run_tracks_metrics() {
        let mut config = AgentConfig::new(3, GameConfig::small());
        config.log_frequency = 10;
        let mut mode = AgentMode::new(config).unwrap();

        mode.run().unwrap();

        assert_eq!(mode.metrics().games_played, 3);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = AgentConfig::new(1, GameConfig::new(601, 600, 20));
        assert!(AgentMode::new(config).is_err());
    }
}
