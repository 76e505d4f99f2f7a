use crate::{
    error::{ParseError, RangeError},
    version::{Version, VERSION_PATTERN},
};
use core::fmt::{self, Display};
use regex::Regex;
use std::sync::LazyLock;

/// A version at the head of a string, optionally decorated with whitespace, `[` and `>=`.
/// Anything after the version is left unmatched.
static RANGE_HEAD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\s*\[?\s*(?:>=\s*)?(?P<version>{VERSION_PATTERN})")).unwrap()
});

/// Returns the next breaking boundary above `version`: the smallest bump of its least
/// significant non-zero component.
///
/// | `version` | boundary |
/// |---|---|
/// | `1.2.3` | `1.2.4` |
/// | `1.2.0` | `1.3.0` |
/// | `1.0.0` | `2.0.0` |
/// | `0.0.0` | none |
///
/// The boundary is always a bare numeric core. Pre-release and build metadata on `version` are not
/// carried over. Returns `None` for `0.0.0`, and also when the bump would overflow, since then no
/// greater numeric core exists.
///
/// ```
/// use semrange::{next_boundary, Version};
///
/// let from = Version::parse("0.4.6-rc.1", true).unwrap();
/// assert_eq!(next_boundary(&from), Some(Version::from_core(0, 4, 7)));
/// assert_eq!(next_boundary(&Version::from_core(0, 0, 0)), None);
/// ```
pub fn next_boundary(version: &Version) -> Option<Version> {
    let (major, minor, patch) = (version.major(), version.minor(), version.patch());

    if patch > 0 {
        patch
            .checked_add(1)
            .map(|patch| Version::from_core(major, minor, patch))
    } else if minor > 0 {
        minor
            .checked_add(1)
            .map(|minor| Version::from_core(major, minor, 0))
    } else if major > 0 {
        major
            .checked_add(1)
            .map(|major| Version::from_core(major, 0, 0))
    } else {
        None
    }
}

/// A contiguous, half-open interval of versions: `[from, to)`, or `[from, ∞)` when there is no
/// upper bound.
///
/// Ranges are either made from explicit bounds with [`Range::new`], or derived from a single
/// version with [`Range::parse`], in which case the upper bound is that version's
/// [`next_boundary`].
///
/// # Examples
///
/// ```
/// use semrange::prelude::*;
///
/// let range = Range::parse("[>=1.4.0").unwrap();
/// assert_eq!("[1.4.0-1.5.0]", range.to_string());
/// assert!(range.contains(&"1.4.9".parse().unwrap()));
/// assert!(!range.contains(&"1.5.0".parse().unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RangeBounds")
)]
pub struct Range {
    from: Version,
    to: Option<Version>,
}

impl Range {
    /// Returns a new range including `from` and everything above it, up to but excluding `to`.
    /// Pass `None` for `to` to leave the range unbounded above.
    ///
    /// # Errors
    ///
    /// - If `to` is given and `from` is greater than it, returns a
    ///   [`RangeError::FromGreaterThanTo`]. The bounds are never swapped.
    pub fn new(from: Version, to: Option<Version>) -> Result<Self, RangeError> {
        if let Some(to) = &to {
            if from > *to {
                return Err(RangeError::FromGreaterThanTo {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
        }

        Ok(Self { from, to })
    }

    /// Parses a range from the version at the head of `range_str`, and bounds it above by that
    /// version's [`next_boundary`].
    ///
    /// Leading whitespace, `[` and `>=` before the version are skipped. The version itself is
    /// parsed leniently (minor and patch may be omitted), and anything after it is ignored.
    ///
    /// Note that this is not the inverse of [`Display`]: in `[1.0.0-2.0.0]`, the `-2.0.0` reads
    /// as a pre-release of the lower bound. The rendered form is ambiguous anyway, since an
    /// unbounded range from `1.0.0-2.0.0` renders the same way, so there is no `FromStr` impl.
    ///
    /// # Errors
    ///
    /// - If no version starts the string, returns a [`ParseError::InvalidRange`].
    /// - If the version found has a numeric identifier with a leading zero or one that overflows,
    ///   returns a [`ParseError::LeadingZero`] or [`ParseError::NumberTooLarge`].
    pub fn parse(range_str: &str) -> Result<Self, ParseError> {
        let captures =
            RANGE_HEAD_REGEX
                .captures(range_str)
                .ok_or_else(|| ParseError::InvalidRange {
                    range: range_str.to_owned(),
                })?;
        let version_str = captures
            .name("version")
            .map(|m| m.as_str())
            .unwrap_or(range_str);

        let from = Version::from_captures(&captures, version_str, false)?;
        let to = next_boundary(&from);

        // the boundary's numeric core is strictly greater, so `from < to` always holds
        Ok(Self { from, to })
    }

    /// Returns the inclusive lower bound.
    pub fn from(&self) -> &Version {
        &self.from
    }

    /// Returns the exclusive upper bound, or `None` if the range is unbounded above.
    pub fn to(&self) -> Option<&Version> {
        self.to.as_ref()
    }

    /// Returns true if this range has an upper bound.
    pub fn is_bounded(&self) -> bool {
        self.to.is_some()
    }

    /// Returns true if `version` is at or above the lower bound, and below the upper bound if
    /// there is one.
    pub fn contains(&self, version: &Version) -> bool {
        *version >= self.from && self.to.as_ref().map_or(true, |to| version < to)
    }

    /// Returns true if this range contains both bounds of `other`.
    ///
    /// Each bound is tested with [`Range::contains`]. An unbounded `other`
    /// is only contained in another unbounded range.
    ///
    /// The upper bound of `other` is checked as a version, even though it is exclusive. So a
    /// bounded range does not contain itself, nor any range sharing its upper bound.
    ///
    /// ```
    /// use semrange::prelude::*;
    ///
    /// let outer = Range::new(Version::from_core(1, 0, 0), Some(Version::from_core(2, 0, 0))).unwrap();
    /// let inner = Range::parse("1.2.0").unwrap();
    /// let open = Range::new(Version::from_core(1, 2, 0), None).unwrap();
    ///
    /// assert!(outer.contains_range(&inner));
    /// assert!(!outer.contains_range(&outer));
    /// assert!(!outer.contains_range(&open));
    /// ```
    pub fn contains_range(&self, other: &Range) -> bool {
        if !self.contains(&other.from) {
            return false;
        }

        match &other.to {
            Some(other_to) => self.contains(other_to),
            None => self.to.is_none(),
        }
    }
}

impl Display for Range {
    /// Renders `[FROM]` for an unbounded range, or `[FROM-TO]` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.to {
            Some(to) => write!(f, "[{}-{}]", self.from, to),
            None => write!(f, "[{}]", self.from),
        }
    }
}

/// The shape `Range` takes on the wire. Deserialized ranges go through [`Range::new`], so the
/// bound check still applies.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RangeBounds {
    from: Version,
    #[serde(default)]
    to: Option<Version>,
}

#[cfg(feature = "serde")]
impl TryFrom<RangeBounds> for Range {
    type Error = RangeError;

    fn try_from(bounds: RangeBounds) -> Result<Self, Self::Error> {
        Range::new(bounds.from, bounds.to)
    }
}
