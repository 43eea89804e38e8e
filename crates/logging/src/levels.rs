//! crates/logging/src/levels.rs
//! Flag enums and level structures for info and debug verbosity.

/// Info flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfoFlag {
    /// Entries reported to the consumer.
    Walk,
    /// Entries filtered out before reaching the consumer.
    Skip,
}

impl InfoFlag {
    /// Every info flag, in declaration order.
    pub const ALL: [Self; 2] = [Self::Walk, Self::Skip];

    /// Token name used by [`crate::VerbosityConfig::apply_info_flag`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Skip => "skip",
        }
    }
}

/// Debug flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugFlag {
    /// Directory traversal (frames entered, entries listed).
    Walk,
    /// Metadata lookups.
    Stat,
    /// Symlink follow decisions.
    Symlink,
    /// Duplicate directory detection.
    Dup,
}

impl DebugFlag {
    /// Every debug flag, in declaration order.
    pub const ALL: [Self; 4] = [Self::Walk, Self::Stat, Self::Symlink, Self::Dup];

    /// Token name used by [`crate::VerbosityConfig::apply_debug_flag`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Stat => "stat",
            Self::Symlink => "symlink",
            Self::Dup => "dup",
        }
    }
}

/// Info verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfoLevels {
    /// Reported entries level.
    pub walk: u8,
    /// Skipped entries level.
    pub skip: u8,
}

impl InfoLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: InfoFlag) -> u8 {
        match flag {
            InfoFlag::Walk => self.walk,
            InfoFlag::Skip => self.skip,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: InfoFlag, level: u8) {
        match flag {
            InfoFlag::Walk => self.walk = level,
            InfoFlag::Skip => self.skip = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        self.walk = level;
        self.skip = level;
    }
}

/// Debug verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugLevels {
    /// Directory traversal level.
    pub walk: u8,
    /// Metadata lookup level.
    pub stat: u8,
    /// Symlink handling level.
    pub symlink: u8,
    /// Duplicate detection level.
    pub dup: u8,
}

impl DebugLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Walk => self.walk,
            DebugFlag::Stat => self.stat,
            DebugFlag::Symlink => self.symlink,
            DebugFlag::Dup => self.dup,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Walk => self.walk = level,
            DebugFlag::Stat => self.stat = level,
            DebugFlag::Symlink => self.symlink = level,
            DebugFlag::Dup => self.dup = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        self.walk = level;
        self.stat = level;
        self.symlink = level;
        self.dup = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_levels_get_reflects_set() {
        let mut levels = InfoLevels::default();
        levels.set(InfoFlag::Skip, 3);
        assert_eq!(levels.get(InfoFlag::Skip), 3);
        assert_eq!(levels.get(InfoFlag::Walk), 0);
    }

    #[test]
    fn debug_levels_set_all_touches_every_flag() {
        let mut levels = DebugLevels::default();
        levels.set_all(2);
        for flag in DebugFlag::ALL {
            assert_eq!(levels.get(flag), 2, "{flag:?}");
        }
    }

    #[test]
    fn flag_names_are_unique() {
        let mut names: Vec<_> = DebugFlag::ALL.iter().map(|f| f.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DebugFlag::ALL.len());
    }
}
