/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Client-side request timeout in milliseconds
    pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

    /// Location used when the embedding page does not supply one
    pub const DEFAULT_POSTCODE: &'static str = "NR32";
    pub const DEFAULT_AREA: &'static str = "Lowestoft";

    /// localStorage key holding the last chosen sort option
    pub const SORT_STORAGE_KEY: &'static str = "skip-sort";
}
