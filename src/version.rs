use crate::error::ParseError;
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    hash::{Hash, Hasher},
    str::FromStr,
};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// A version with optional minor and patch, capturing each part by name. Not anchored, so it can
/// be embedded in larger patterns (see [`Range::parse`](crate::Range::parse)).
///
/// The shape is looser than the grammar in two ways: numbers may have leading zeros and
/// minor/patch may be absent. Both are checked after matching, each with its own error.
pub(crate) const VERSION_PATTERN: &str = concat!(
    r"(?P<major>[0-9]+)(?:\.(?P<minor>[0-9]+)(?:\.(?P<patch>[0-9]+))?)?",
    r"(?:-(?P<pre>[0-9A-Za-z\-]+(?:\.[0-9A-Za-z\-]+)*))?",
    r"(?:\+(?P<build>[0-9A-Za-z\-]+(?:\.[0-9A-Za-z\-]+)*))?",
);

// regex compiles to finite automata, so matching is linear in the input length no matter how
// adversarial it is.
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{VERSION_PATTERN}$")).unwrap());

static IDENTIFIERS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z\-]+(?:\.[0-9A-Za-z\-]+)*$").unwrap());

/// One dot-separated part of a pre-release.
///
/// The variant order matters: a derived [`Ord`] puts every numeric identifier below every
/// alphanumeric one, which is exactly SemVer precedence.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    /// Only digits, without a leading zero (unless it is exactly `0`). Compared numerically.
    Numeric(u64),

    /// Digits, ASCII letters and hyphens, with at least one non-digit. Compared lexically in
    /// ASCII order.
    AlphaNumeric(String),
}

impl Identifier {
    fn parse(identifier: &str, version_str: &str) -> Result<Self, ParseError> {
        if identifier.bytes().all(|b| b.is_ascii_digit()) {
            parse_number(identifier, version_str).map(Identifier::Numeric)
        } else {
            Ok(Identifier::AlphaNumeric(identifier.to_owned()))
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{n}"),
            Identifier::AlphaNumeric(s) => f.write_str(s),
        }
    }
}

fn parse_number(digits: &str, version_str: &str) -> Result<u64, ParseError> {
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(ParseError::LeadingZero {
            version: version_str.to_owned(),
            identifier: digits.to_owned(),
        });
    }
    // the pattern only lets digits through, so overflow is the only failure left
    digits.parse().map_err(|_| ParseError::NumberTooLarge {
        version: version_str.to_owned(),
        identifier: digits.to_owned(),
    })
}

fn parse_pre_release(text: &str, version_str: &str) -> Result<Vec<Identifier>, ParseError> {
    text.split('.')
        .map(|identifier| Identifier::parse(identifier, version_str))
        .collect()
}

fn parse_build(text: &str) -> Vec<String> {
    text.split('.').map(str::to_owned).collect()
}

/// A [Semantic Versioning 2.0.0](https://semver.org/) version: a numeric core
/// (`MAJOR.MINOR.PATCH`), an optional pre-release, and optional build metadata.
///
/// Versions are totally ordered by SemVer *precedence*. Build metadata is carried along for
/// display, but it is ignored by equality, hashing, and ordering, so `1.0.0+a == 1.0.0+b`.
///
/// # Examples
///
/// ```
/// use semrange::prelude::*;
///
/// let alpha = Version::parse("1.0.0-alpha", true).unwrap();
/// let release: Version = "1.0.0+build.5".parse().unwrap();
/// assert!(alpha < release);
/// assert_eq!(release, Version::from_core(1, 0, 0));
/// assert_eq!("1.0.0+build.5", release.to_string());
/// ```
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Vec<Identifier>,
    build: Vec<String>,
}

impl Version {
    /// Returns a new version from its components, validating the pre-release and build text.
    ///
    /// `pre_release` and `build` are dot-separated identifiers without their leading `-`/`+`.
    /// Pass an empty string for either to omit it.
    ///
    /// Unlike [`Version::from_core`], this is fallible: the text parts are checked against the
    /// identifier grammar, so every `Version` renders to a string that [`Version::parse`] reads
    /// back in strict mode. Use `from_core` when there is no pre-release or build metadata.
    ///
    /// ```
    /// use semrange::Version;
    ///
    /// let version = Version::new(1, 2, 4, "asd", "qwe").unwrap();
    /// assert_eq!("1.2.4-asd+qwe", version.to_string());
    /// ```
    ///
    /// # Errors
    ///
    /// - If either component contains an empty identifier or a character other than ASCII
    ///   alphanumerics and `-`, returns a [`ParseError::InvalidVersion`].
    /// - If a numeric pre-release identifier has a leading zero, returns a
    ///   [`ParseError::LeadingZero`].
    /// - If a numeric pre-release identifier overflows a `u64`, returns a
    ///   [`ParseError::NumberTooLarge`].
    pub fn new(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: &str,
        build: &str,
    ) -> Result<Self, ParseError> {
        let rendered = || {
            let mut rendered = format!("{major}.{minor}.{patch}");
            if !pre_release.is_empty() {
                rendered.push('-');
                rendered.push_str(pre_release);
            }
            if !build.is_empty() {
                rendered.push('+');
                rendered.push_str(build);
            }
            rendered
        };

        let mut version = Self::from_core(major, minor, patch);

        if !pre_release.is_empty() {
            if !IDENTIFIERS_REGEX.is_match(pre_release) {
                return Err(ParseError::InvalidVersion { version: rendered() });
            }
            version.pre_release = parse_pre_release(pre_release, &rendered())?;
        }

        if !build.is_empty() {
            if !IDENTIFIERS_REGEX.is_match(build) {
                return Err(ParseError::InvalidVersion { version: rendered() });
            }
            version.build = parse_build(build);
        }

        Ok(version)
    }

    /// Returns a new version with only a numeric core: no pre-release and no build metadata.
    pub const fn from_core(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Parses a version string.
    ///
    /// The whole string must be a version: nothing may precede or follow it.
    ///
    /// With `strict`, the string must follow the SemVer 2.0.0 grammar exactly. Without it, the
    /// minor and patch components may be omitted and default to `0`, so `1` and `1.2` parse as
    /// `1.0.0` and `1.2.0`. Every other rule, such as the ban on leading zeros, applies in both
    /// modes.
    ///
    /// ```
    /// use semrange::Version;
    ///
    /// assert!(Version::parse("1.2", true).is_err());
    /// assert_eq!(Version::parse("1.2", false), Ok(Version::from_core(1, 2, 0)));
    /// ```
    ///
    /// # Errors
    ///
    /// - If the string does not have the shape of a version, returns a
    ///   [`ParseError::InvalidVersion`].
    /// - If a numeric identifier has a leading zero, returns a [`ParseError::LeadingZero`].
    /// - If `strict` and the minor or patch component is absent, returns a
    ///   [`ParseError::MissingComponent`].
    /// - If a numeric identifier overflows a `u64`, returns a [`ParseError::NumberTooLarge`].
    pub fn parse(version_str: &str, strict: bool) -> Result<Self, ParseError> {
        let captures =
            VERSION_REGEX
                .captures(version_str)
                .ok_or_else(|| ParseError::InvalidVersion {
                    version: version_str.to_owned(),
                })?;
        Self::from_captures(&captures, version_str, strict)
    }

    /// Builds a version out of a match of [`VERSION_PATTERN`]. `version_str` is only used for
    /// error messages.
    pub(crate) fn from_captures(
        captures: &Captures<'_>,
        version_str: &str,
        strict: bool,
    ) -> Result<Self, ParseError> {
        let number = |name: &'static str| -> Result<Option<u64>, ParseError> {
            captures
                .name(name)
                .map(|m| parse_number(m.as_str(), version_str))
                .transpose()
        };

        // major is not optional in the pattern
        let major = number("major")?.unwrap_or_default();
        let minor = number("minor")?;
        let patch = number("patch")?;

        if strict {
            let missing = if minor.is_none() {
                Some("minor")
            } else if patch.is_none() {
                Some("patch")
            } else {
                None
            };
            if let Some(component) = missing {
                return Err(ParseError::MissingComponent {
                    version: version_str.to_owned(),
                    component,
                });
            }
        }

        let pre_release = captures
            .name("pre")
            .map(|m| parse_pre_release(m.as_str(), version_str))
            .transpose()?
            .unwrap_or_default();
        let build = captures
            .name("build")
            .map(|m| parse_build(m.as_str()))
            .unwrap_or_default();

        Ok(Self {
            major,
            minor: minor.unwrap_or_default(),
            patch: patch.unwrap_or_default(),
            pre_release,
            build,
        })
    }

    /// Returns the major component.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// Returns the minor component.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// Returns the patch component.
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Returns the pre-release identifiers. Empty if there is no pre-release.
    pub fn pre_release(&self) -> &[Identifier] {
        &self.pre_release
    }

    /// Returns the build metadata identifiers. Empty if there is no build metadata.
    pub fn build(&self) -> &[String] {
        &self.build
    }

    /// Returns true if this version has a pre-release.
    pub fn is_prerelease(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// The fields that take part in precedence, in order. A release sorts above any pre-release
    /// with the same core because `true > false`.
    fn precedence_key(&self) -> (u64, u64, u64, bool, &[Identifier]) {
        (
            self.major,
            self.minor,
            self.patch,
            self.pre_release.is_empty(),
            &self.pre_release,
        )
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.precedence_key() == other.precedence_key()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.precedence_key().hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// Compares by SemVer precedence: the numeric core, then the pre-release (absent is
    /// greatest), identifier by identifier. Build metadata is ignored.
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence_key().cmp(&other.precedence_key())
    }
}

impl Display for Version {
    /// Renders the canonical form, `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        for (idx, identifier) in self.pre_release.iter().enumerate() {
            f.write_str(if idx == 0 { "-" } else { "." })?;
            write!(f, "{identifier}")?;
        }

        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }

        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    /// Parses a version string in strict mode. See [`Version::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, true)
    }
}

impl TryFrom<&str> for Version {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct VersionVisitor;

        impl<'de> serde::de::Visitor<'de> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a SemVer version as a string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}
