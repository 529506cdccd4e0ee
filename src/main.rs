use anyhow::Result;
use clap::{Parser, ValueEnum};
use gridsnake::game::GameConfig;
use gridsnake::modes::{AgentConfig, AgentMode, HumanMode};

#[derive(Parser)]
#[command(name = "gridsnake")]
#[command(version, about = "Grid-snake simulation: play it or drive it")]
struct Cli {
    /// Execution mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// Grid width in pixels
    #[arg(long, default_value = "600")]
    width: i32,

    /// Grid height in pixels
    #[arg(long, default_value = "600")]
    height: i32,

    /// Cell edge length in pixels
    #[arg(long, default_value = "20")]
    block_size: i32,

    /// Ticks per second in human mode
    #[arg(long, default_value = "20")]
    tick_rate: u32,

    /// Episodes to run in agent mode
    #[arg(long, default_value = "1000")]
    episodes: u32,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
    /// Run random-policy rollouts headlessly, unpaced
    Agent,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        width: cli.width,
        height: cli.height,
        block_size: cli.block_size,
        tick_rate: cli.tick_rate,
    };

    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config)?;
            human_mode.run().await?;
        }
        Mode::Agent => {
            let mut agent_mode = AgentMode::new(AgentConfig::new(cli.episodes, config))?;
            agent_mode.run()?;
        }
    }

    Ok(())
}
