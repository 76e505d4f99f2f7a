//! # semrange
//!
//! A library for parsing, comparing, and ranging [Semantic Versioning 2.0.0](https://semver.org/)
//! versions.
//!
//! ## Examples
//!
//! Parse and compare versions:
//!
//! ```
//! use semrange::prelude::*;
//!
//! let alpha = Version::parse("1.0.0-alpha", true).unwrap();
//! let alpha_1 = Version::parse("1.0.0-alpha.1", true).unwrap();
//! let release = Version::parse("1.0.0", true).unwrap();
//! assert!(alpha < alpha_1 && alpha_1 < release);
//!
//! // build metadata never affects precedence
//! assert_eq!(
//!     Version::new(1, 1, 1, "", "build-a").unwrap(),
//!     Version::new(1, 1, 1, "", "build-b").unwrap(),
//! );
//! ```
//!
//! Derive a range from a single version, and check what it contains:
//!
//! ```
//! use semrange::prelude::*;
//!
//! let range = Range::parse("0.4.6").unwrap();
//! assert_eq!("[0.4.6-0.4.7]", range.to_string());
//! assert!(range.contains(&Version::from_core(0, 4, 6)));
//! assert!(!range.contains(&Version::from_core(0, 4, 7)));
//! ```
//!
//! Or, give both bounds yourself:
//!
//! ```
//! use semrange::prelude::*;
//!
//! let from = Version::from_core(0, 4, 6);
//! let to = Version::from_core(1, 6, 8);
//! let range = Range::new(from.clone(), Some(to.clone())).unwrap();
//! assert!(range.contains(&"1.4.6".parse().unwrap()));
//!
//! // bounds are never swapped for you
//! assert!(Range::new(to, Some(from)).is_err());
//! ```
//!
//! ## Important Terms
//!
//! - **Numeric core**: The `MAJOR.MINOR.PATCH` triple of a version.
//! - **Identifier**: One dot-separated part of a pre-release or of build metadata. Pre-release
//!   identifiers are modeled by the [`Identifier`] enum.
//! - **Precedence**: How versions are ordered. Build metadata does not take part. See
//!   [`Version`]'s [`Ord`] implementation.
//! - **Breaking boundary**: The next version at which backward compatibility is no longer
//!   promised. It is the default upper bound of a range derived from one version. See
//!   [`next_boundary`].
//!
//! ## Strictness
//!
//! [`Version::parse`] takes a `strict` flag. Strict parsing follows the SemVer grammar exactly.
//! Lenient parsing additionally accepts a missing minor and/or patch component, defaulting them to
//! `0`:
//!
//! | Input | Strict | Lenient |
//! |---|---|---|
//! | `1.2.3` | `1.2.3` | `1.2.3` |
//! | `1.2` | error | `1.2.0` |
//! | `1` | error | `1.0.0` |
//! | `1.2.03` | error | error |
//!
//! [`FromStr`](core::str::FromStr) on [`Version`] is strict. [`Range::parse`] is lenient.
//!
//! ## Prelude
//!
//! semrange provides a prelude module for convenience. It contains everything needed to interact
//! with the library.
//!
//! Use it with:
//!
//! ```
//! use semrange::prelude::*;
//! ```
#![warn(missing_docs)]

mod error;
mod range;
mod version;

pub use crate::error::{Error, ParseError, RangeError};
pub use crate::range::{next_boundary, Range};
pub use crate::version::{Identifier, Version};

/// A convenience module appropriate for glob imports (`use semrange::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::next_boundary;
    #[doc(no_inline)]
    pub use crate::Error;
    #[doc(no_inline)]
    pub use crate::Identifier;
    #[doc(no_inline)]
    pub use crate::ParseError;
    #[doc(no_inline)]
    pub use crate::Range;
    #[doc(no_inline)]
    pub use crate::RangeError;
    #[doc(no_inline)]
    pub use crate::Version;
}
