//! Command-line launch options for the desktop app.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchOptions {
    pub seed: SeedChoice,
    /// Overrides the settings file in the platform config directory.
    pub config_path: Option<PathBuf>,
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

/// Reads `--seed N` / `--seed=N` and `--config PATH` / `--config=PATH`. Unknown arguments are
/// left for macroquad.
pub fn parse_launch_args(args: &[String], generated_seed: u64) -> Result<LaunchOptions, String> {
    let mut seed = None;
    let mut config_path = None;
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();
        let (flag, inline_value) = match argument.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (argument, None),
        };
        if flag != "--seed" && flag != "--config" {
            index += 1;
            continue;
        }

        let value = match inline_value {
            Some(value) => value,
            None => {
                index += 1;
                args.get(index)
                    .map(String::as_str)
                    .ok_or_else(|| format!("missing value for {flag}"))?
            }
        };

        if flag == "--seed" {
            if seed.is_some() {
                return Err("seed provided more than once".to_string());
            }
            seed = Some(parse_seed_value(value)?);
        } else {
            if config_path.is_some() {
                return Err("config provided more than once".to_string());
            }
            config_path = Some(PathBuf::from(value));
        }
        index += 1;
    }

    Ok(LaunchOptions {
        seed: match seed {
            Some(seed) => SeedChoice::Cli(seed),
            None => SeedChoice::Generated(generated_seed),
        },
        config_path,
    })
}

fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    raw_value.parse::<u64>().map_err(|_| format!("seed value '{raw_value}' must be a number"))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn falls_back_to_generated_seed_and_default_settings() {
        let options = parse_launch_args(&as_args(&["crawl"]), 9_876_543).expect("no flags");
        assert_eq!(options.seed, SeedChoice::Generated(9_876_543));
        assert_eq!(options.config_path, None);
    }

    #[test]
    fn parses_separate_and_inline_values() {
        let args = as_args(&["crawl", "--seed", "4242", "--config=rules/hard.toml"]);
        let options = parse_launch_args(&args, 1).expect("valid flags");
        assert_eq!(options.seed, SeedChoice::Cli(4_242));
        assert_eq!(options.config_path, Some(PathBuf::from("rules/hard.toml")));

        let options = parse_launch_args(&as_args(&["crawl", "--seed=2026"]), 1).expect("inline");
        assert_eq!(options.seed.value(), 2_026);
    }

    #[test]
    fn ignores_unrelated_arguments() {
        let args = as_args(&["crawl", "--fullscreen", "--seed", "3"]);
        let options = parse_launch_args(&args, 1).expect("unrelated flags pass through");
        assert_eq!(options.seed, SeedChoice::Cli(3));
    }

    #[test]
    fn errors_when_a_flag_has_no_value() {
        let err = parse_launch_args(&as_args(&["crawl", "--config"]), 1)
            .expect_err("missing config value should error");
        assert!(err.contains("missing value for --config"), "unexpected error: {err}");
    }

    #[test]
    fn errors_when_seed_value_is_not_a_number() {
        let err = parse_launch_args(&as_args(&["crawl", "--seed=abc"]), 1)
            .expect_err("non-numeric seed value should error");
        assert!(err.contains("number"), "error should explain numeric requirement: {err}");
    }

    #[test]
    fn errors_when_seed_is_provided_more_than_once() {
        let err = parse_launch_args(&as_args(&["crawl", "--seed=1", "--seed", "2"]), 1)
            .expect_err("duplicate seed flags should be rejected");
        assert!(err.contains("more than once"), "error should explain duplicate seed: {err}");
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        let first = generate_runtime_seed();
        let second = generate_runtime_seed();
        assert_ne!(first, second, "runtime seed generation should vary per call");
    }
}
