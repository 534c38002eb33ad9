use std::str::FromStr;

use eyre::WrapErr;

/// Longest path the platform promises to hand back from `getcwd`
#[cfg(target_os = "linux")]
pub const MAX_PATH_LEN: usize = 4096;
#[cfg(not(target_os = "linux"))]
pub const MAX_PATH_LEN: usize = 1024;

/// The length budget for a shortened path
///
/// A negative length on the command line means "compress to this many bytes even if the
/// path already fits", which is tracked by [`forced`](Self::forced).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetLength {
    /// Maximum number of bytes the output should take up
    pub len: usize,
    /// Compress even when the path is already shorter than `len`
    pub forced: bool,
}

impl Default for TargetLength {
    /// Large enough that no real path is ever compressed
    fn default() -> Self {
        Self::new(MAX_PATH_LEN + 2)
    }
}

impl TargetLength {
    pub fn new(len: usize) -> Self {
        Self { len, forced: false }
    }

    pub fn forced(len: usize) -> Self {
        Self { len, forced: true }
    }

    /// Negative values force compression to their absolute value
    pub fn from_signed(raw: i64) -> Self {
        let len = usize::try_from(raw.unsigned_abs()).unwrap_or(usize::MAX);
        Self {
            len,
            forced: raw < 0,
        }
    }

    /// Parse a signed integer, rejecting anything else
    pub fn parse(raw: &str) -> eyre::Result<Self> {
        let value: i64 = raw
            .trim()
            .parse()
            .wrap_err_with(|| format!("Invalid length argument: {raw:?}"))?;
        Ok(Self::from_signed(value))
    }

    /// Parse the way C's `atoi` does
    ///
    /// Leading whitespace and an optional sign are accepted, then as many digits as there are.
    /// Anything after the digits is ignored, and no digits at all means 0. Out of range values
    /// saturate instead of wrapping.
    pub fn parse_lenient(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let mut seen_digit = false;
        let magnitude = digits
            .bytes()
            .take_while(u8::is_ascii_digit)
            .inspect(|_| seen_digit = true)
            .fold(0u64, |acc, d| {
                acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
            });
        if !seen_digit {
            tracing::warn!("Length argument {raw:?} has no leading digits; treating it as 0");
        }

        let len = usize::try_from(magnitude).unwrap_or(usize::MAX);
        // atoi("-0") is 0, which isn't negative
        Self {
            len,
            forced: negative && magnitude != 0,
        }
    }
}

impl FromStr for TargetLength {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
