use matatu_mock_data::display::Summary;
use matatu_mock_data::location::ROUTE_DEFINITIONS;
use matatu_mock_data::{run, GeneratorConfig};
use std::error::Error;
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = GeneratorConfig::from_consts()?;
    match config.seed {
        Some(seed) => info!("Sampling peak multipliers with seed {seed}"),
        None => info!("Sampling peak multipliers from entropy"),
    }

    let mock_data = run(&config)?;

    print!(
        "{}",
        Summary {
            mock_data: &mock_data,
            definitions: &ROUTE_DEFINITIONS,
            output_dir: &config.output_dir,
        }
    );

    Ok(())
}
