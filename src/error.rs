/// Errors that can occur when parsing a version or range string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The string does not match the version grammar.
    #[error("Version string `{version}` should match `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`")]
    InvalidVersion {
        /// The offending version string
        version: String,
    },

    /// A numeric identifier was written with a leading zero.
    #[error("Numeric identifier `{identifier}` in version string `{version}` should not have a leading zero")]
    LeadingZero {
        /// The offending version string
        version: String,
        /// The identifier with the leading zero
        identifier: String,
    },

    /// In strict mode, the minor or patch component was omitted.
    #[error("Version string `{version}` should have a `{component}` component")]
    MissingComponent {
        /// The offending version string
        version: String,
        /// The name of the first missing component, `minor` or `patch`
        component: &'static str,
    },

    /// A numeric identifier does not fit in a `u64`.
    #[error("Numeric identifier `{identifier}` in version string `{version}` is too large")]
    NumberTooLarge {
        /// The offending version string
        version: String,
        /// The identifier that overflowed
        identifier: String,
    },

    /// No version could be extracted from the head of a range string.
    #[error("Range string `{range}` should start with a version")]
    InvalidRange {
        /// The offending range string
        range: String,
    },
}

/// Errors that can occur when constructing a [`Range`](crate::Range) from explicit bounds.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The lower bound is greater than the upper bound.
    #[error("Range lower bound `{from}` should not be greater than upper bound `{to}`")]
    FromGreaterThanTo {
        /// The offending lower bound, rendered
        from: String,
        /// The upper bound it was checked against, rendered
        to: String,
    },
}

/// Any error produced by this library.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// See [`ParseError`]
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// See [`RangeError`]
    #[error(transparent)]
    Range(#[from] RangeError),
}
