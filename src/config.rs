use log::warn;
use squad_core::Formation;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

const DEFAULT_SEED: u64 = 42;
const DEFAULT_WEEKS: u32 = 10;
const DEFAULT_SQUAD_SIZE: usize = 24;

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub seed: u64,
    pub weeks: u32,
    pub formation: Formation,
    pub squad_size: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            seed: DEFAULT_SEED,
            weeks: DEFAULT_WEEKS,
            formation: Formation::F442,
            squad_size: DEFAULT_SQUAD_SIZE,
        }
    }
}

impl SimulationConfig {
    /// Reads SEED, WEEKS, FORMATION and SQUAD_SIZE. Missing or malformed
    /// values keep their defaults.
    pub fn from_env() -> Self {
        let defaults = SimulationConfig::default();

        SimulationConfig {
            seed: read_var("SEED", defaults.seed),
            weeks: read_var("WEEKS", defaults.weeks),
            formation: read_var("FORMATION", defaults.formation),
            squad_size: read_var("SQUAD_SIZE", defaults.squad_size).clamp(11, squad_core::MAX_SQUAD_SIZE),
        }
    }
}

fn read_var<T>(name: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            warn!("{}='{}' is invalid ({}), using {}", name, value, e, default);
            default
        }),
        Err(_) => default,
    }
}
