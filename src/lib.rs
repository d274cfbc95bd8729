pub mod consts;
pub mod data;
pub mod display;
pub mod error;
pub mod location;

use consts::{
    LONG_ROUTE_FARE, MEDIUM_ROUTE_FARE, MEDIUM_ROUTE_MAX_STAGES, MOCK_DATA_SEED, OUTPUT_DIR,
    PEAK_HOURS_END, PEAK_HOURS_START, PEAK_MULTIPLIER_MAX, PEAK_MULTIPLIER_MIN, SHORT_ROUTE_FARE,
    SHORT_ROUTE_MAX_STAGES,
};
use data::{Fare, MockData, Route};
use error::MockDataError;
use location::{find_location, RouteDefinition};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tracing::debug;

/// Standard fare in Ksh for a route with `num_stages` stops, counting both
/// ends.
pub fn fare_for_stage_count(num_stages: usize) -> u32 {
    if num_stages <= SHORT_ROUTE_MAX_STAGES {
        SHORT_ROUTE_FARE
    } else if num_stages <= MEDIUM_ROUTE_MAX_STAGES {
        MEDIUM_ROUTE_FARE
    } else {
        LONG_ROUTE_FARE
    }
}

/// Uniform over the closed multiplier range, rounded to two decimals.
pub fn sample_peak_multiplier<R: Rng>(rng: &mut R) -> f64 {
    let multiplier: f64 = rng.gen_range(PEAK_MULTIPLIER_MIN..=PEAK_MULTIPLIER_MAX);
    (multiplier * 100.0).round() / 100.0
}

pub fn generate_routes_and_fares<R: Rng>(
    definitions: &[RouteDefinition],
    rng: &mut R,
) -> MockData {
    let mut routes = Vec::with_capacity(definitions.len());
    let mut fares = Vec::with_capacity(definitions.len());

    for (index, definition) in definitions.iter().enumerate() {
        let route_id = format!("route_{}", index + 1);
        let num_stages = definition.num_stages();

        routes.push(Route {
            route_id: route_id.clone(),
            origin: definition.origin.to_string(),
            destination: definition.destination.to_string(),
            stages: definition.stage_names().collect::<Vec<_>>().join(","),
            is_verified: true,
        });

        let fare = Fare {
            route_id,
            standard_fare: fare_for_stage_count(num_stages),
            peak_multiplier: sample_peak_multiplier(rng),
            peak_hours_starts: PEAK_HOURS_START.to_string(),
            peak_hours_end: PEAK_HOURS_END.to_string(),
        };
        debug!(
            "{} {} -> {}: {} stages, Ksh {} x{}",
            fare.route_id,
            definition.origin,
            definition.destination,
            num_stages,
            fare.standard_fare,
            fare.peak_multiplier
        );
        if let (Some(origin), Some(destination)) = (
            find_location(definition.origin),
            find_location(definition.destination),
        ) {
            debug!("{} runs from {origin} to {destination}", fare.route_id);
        }
        fares.push(fare);
    }

    MockData { routes, fares }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    // None draws the peak multipliers from entropy
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            output_dir: PathBuf::from(OUTPUT_DIR),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Builds the configuration baked in at compile time.
    pub fn from_consts() -> Result<Self, MockDataError> {
        let seed = MOCK_DATA_SEED.map(parse_seed).transpose()?;
        Ok(GeneratorConfig {
            seed,
            ..GeneratorConfig::default()
        })
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

pub fn parse_seed(seed: &str) -> Result<u64, MockDataError> {
    seed.trim()
        .parse()
        .map_err(|_| MockDataError::InvalidSeed(seed.to_string()))
}

/// Generates the mock data from the built-in route table and writes both
/// files into the configured directory.
pub fn run(config: &GeneratorConfig) -> Result<MockData, MockDataError> {
    let mut rng = config.rng();
    let mock_data = generate_routes_and_fares(&location::ROUTE_DEFINITIONS, &mut rng);
    data::write_mock_data(&mock_data, &config.output_dir)?;
    Ok(mock_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fare_tiers_switch_at_stage_boundaries() {
        assert_eq!(fare_for_stage_count(2), 70);
        assert_eq!(fare_for_stage_count(5), 70);
        assert_eq!(fare_for_stage_count(6), 80);
        assert_eq!(fare_for_stage_count(7), 80);
        assert_eq!(fare_for_stage_count(8), 100);
        assert_eq!(fare_for_stage_count(20), 100);
    }

    #[test]
    fn peak_multiplier_stays_in_range_with_two_decimals() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let multiplier = sample_peak_multiplier(&mut rng);
            assert!((1.2..=1.5).contains(&multiplier), "{multiplier}");
            let cents = multiplier * 100.0;
            assert!((cents - cents.round()).abs() < 1e-9, "{multiplier}");
        }
    }

    #[test]
    fn seeds_must_be_integers() {
        assert_eq!(parse_seed(" 42 ").unwrap(), 42);
        assert!(matches!(
            parse_seed("forty-two"),
            Err(MockDataError::InvalidSeed(_))
        ));
    }
}
