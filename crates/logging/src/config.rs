//! crates/logging/src/config.rs
//! Verbosity configuration combining info and debug levels.

use super::levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};

/// Combined verbosity configuration for info and debug flags.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Info flag levels.
    pub info: InfoLevels,
    /// Debug flag levels.
    pub debug: DebugLevels,
}

impl VerbosityConfig {
    /// Create a new configuration from a verbose level (0-3).
    ///
    /// Levels above 3 are treated as 3.
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        match level {
            0 => {}
            1 => {
                config.info.walk = 1;
            }
            2 => {
                config.info.walk = 1;
                config.info.skip = 1;
                config.debug.walk = 1;
                config.debug.stat = 1;
                config.debug.dup = 1;
            }
            _ => {
                config.info.set_all(2);
                config.debug.walk = 4;
                config.debug.stat = 2;
                config.debug.symlink = 2;
                config.debug.dup = 1;
            }
        }

        config
    }

    /// Apply a single info flag token (e.g., "skip2", "walk", "all", "none").
    pub fn apply_info_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        match name {
            "all" => {
                self.info.set_all(level);
                return Ok(());
            }
            "none" => {
                self.info.set_all(0);
                return Ok(());
            }
            _ => {}
        }

        let flag = InfoFlag::ALL
            .into_iter()
            .find(|flag| flag.name() == name)
            .ok_or_else(|| format!("unknown info flag: {name}"))?;

        self.info.set(flag, level);
        Ok(())
    }

    /// Apply a single debug flag token (e.g., "walk4", "stat").
    pub fn apply_debug_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        match name {
            "all" => {
                self.debug.set_all(level);
                return Ok(());
            }
            "none" => {
                self.debug.set_all(0);
                return Ok(());
            }
            _ => {}
        }

        let flag = DebugFlag::ALL
            .into_iter()
            .find(|flag| flag.name() == name)
            .ok_or_else(|| format!("unknown debug flag: {name}"))?;

        self.debug.set(flag, level);
        Ok(())
    }

    /// Returns the highest level configured for any flag.
    ///
    /// Used to pick a default `tracing` filter when no directives are given.
    pub fn max_level(&self) -> u8 {
        let info = InfoFlag::ALL.into_iter().map(|f| self.info.get(f));
        let debug = DebugFlag::ALL.into_iter().map(|f| self.debug.get(f));
        info.chain(debug).max().unwrap_or(0)
    }
}

/// Parse a flag token like "walk2" into ("walk", 2) or "stat" into ("stat", 1).
fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    if token.is_empty() {
        return Err("empty flag token".to_string());
    }

    let digit_start = token.find(|c: char| c.is_ascii_digit());

    match digit_start {
        Some(0) => Err(format!("missing flag name in: {token}")),
        Some(pos) => {
            let name = &token[..pos];
            let level = token[pos..]
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag: {token}"))?;
            Ok((name, level))
        }
        None => Ok((token, 1)),
    }
}
