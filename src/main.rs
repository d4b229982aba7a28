use anyhow::Result;
use clap::Parser;
use torus_snake::game::GameConfig;
use torus_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a toroidal grid")]
struct Cli {
    /// Side length of the square play field
    #[arg(long, default_value = "20")]
    grid_size: usize,

    /// Milliseconds between movement ticks
    #[arg(long, default_value = "200")]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::new(cli.grid_size);
    config.tick_ms = cli.tick_ms;

    HumanMode::new(config).run().await
}
