use std::fmt;

/// Coarse outcome of a walk, with stable integer codes for foreign callers.
///
/// ```
/// use walk::WalkResult;
///
/// assert_eq!(WalkResult::CannotOpen.code(), 2);
/// assert_eq!(WalkResult::from_code(3), Some(WalkResult::CannotStat));
/// assert_eq!(WalkResult::from_code(9), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum WalkResult {
    /// Every entry was visited without error.
    Ok = 0,
    /// A path exceeded the configured maximum length.
    NameTooLong = 1,
    /// A directory could not be opened.
    CannotOpen = 2,
    /// An entry's metadata could not be read.
    CannotStat = 3,
    /// Reading a directory listing failed part way through.
    IoError = 4,
}

impl WalkResult {
    /// Every outcome, ordered by code.
    pub const ALL: [Self; 5] = [
        Self::Ok,
        Self::NameTooLong,
        Self::CannotOpen,
        Self::CannotStat,
        Self::IoError,
    ];

    /// Returns the integer code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Maps an integer code back to an outcome.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            1 => Some(Self::NameTooLong),
            2 => Some(Self::CannotOpen),
            3 => Some(Self::CannotStat),
            4 => Some(Self::IoError),
            _ => None,
        }
    }

    /// Reports whether this is [`WalkResult::Ok`].
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NameTooLong => "name too long",
            Self::CannotOpen => "cannot open directory",
            Self::CannotStat => "cannot stat entry",
            Self::IoError => "directory read error",
        }
    }
}

impl fmt::Display for WalkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<WalkResult> for i32 {
    fn from(result: WalkResult) -> Self {
        result.code()
    }
}
