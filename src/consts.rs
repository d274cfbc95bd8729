pub const OUTPUT_DIR: &str = "scripts/mock_data";
pub const ROUTES_FILE_NAME: &str = "routes.json";
pub const FARES_FILE_NAME: &str = "fares.json";

pub const PEAK_HOURS_START: &str = "07:00";
pub const PEAK_HOURS_END: &str = "09:00";

// Fare tiers in Ksh, keyed on the number of stages including both ends
pub const SHORT_ROUTE_MAX_STAGES: usize = 5;
pub const MEDIUM_ROUTE_MAX_STAGES: usize = 7;
pub const SHORT_ROUTE_FARE: u32 = 70;
pub const MEDIUM_ROUTE_FARE: u32 = 80;
pub const LONG_ROUTE_FARE: u32 = 100;

pub const PEAK_MULTIPLIER_MIN: f64 = 1.2;
pub const PEAK_MULTIPLIER_MAX: f64 = 1.5;

pub const MOCK_DATA_SEED: Option<&str> = option_env!("MOCK_DATA_SEED");
