//! Naming-convention derivation.
//!
//! A feature name typed by the user is turned into the casing variants every
//! template embeds. All thirteen generated files read their names from one
//! [`NameVariants`] value, so file names, imports and class names cannot drift
//! apart within an invocation.
//!
//! | Variant          | `"UserProfile"` / `"MyApp"` | Used for                  |
//! |------------------|-----------------------------|---------------------------|
//! | `snake_case`     | `user_profile`              | file names, import paths  |
//! | `pascal_case`    | `UserProfile`               | generated type names      |
//! | `app_name_lower` | `myapp`                     | `package:` import root    |
//!
//! ## Known limitations
//!
//! The boundary rule only splits `lowerUPPER` transitions. `"HTTPServer"` and
//! `"user profile"` style inputs are not split any further than that, and
//! [`to_pascal_case`] touches only the first character. Both are kept as-is so
//! output stays stable for existing users.

use std::fmt;

use crate::domain::error::DomainError;

/// Casing variants derived from one feature name and one application name.
///
/// Immutable after construction; build it with [`NameVariants::derive`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameVariants {
    raw: String,
    snake_case: String,
    pascal_case: String,
    app_name_lower: String,
}

impl NameVariants {
    /// Derive all variants.
    ///
    /// The feature name is trimmed before casing rules apply; `raw` keeps the
    /// original input. Blank input is rejected here as well as in the
    /// service, so a `NameVariants` never holds an empty stem.
    pub fn derive(feature_name: &str, app_name: &str) -> Result<Self, DomainError> {
        let feature = feature_name.trim();
        if feature.is_empty() {
            return Err(DomainError::blank("feature name"));
        }
        if app_name.trim().is_empty() {
            return Err(DomainError::blank("application name"));
        }

        Ok(Self {
            raw: feature_name.to_string(),
            snake_case: to_snake_case(feature),
            pascal_case: to_pascal_case(feature),
            app_name_lower: app_name_lower(app_name),
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn snake_case(&self) -> &str {
        &self.snake_case
    }

    pub fn pascal_case(&self) -> &str {
        &self.pascal_case
    }

    pub fn app_name_lower(&self) -> &str {
        &self.app_name_lower
    }
}

impl fmt::Display for NameVariants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} / {}) in {}",
            self.raw.trim(),
            self.snake_case,
            self.pascal_case,
            self.app_name_lower
        )
    }
}

/// Convert to snake case.
///
/// Inserts `_` between an ASCII lowercase letter and the uppercase run that
/// follows it, replaces spaces with `_`, then lowercases everything.
///
/// ```
/// use strata_core::domain::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("UserProfile"), "user_profile");
/// assert_eq!(to_snake_case("myABCFeature"), "my_abcfeature");
/// assert_eq!(to_snake_case("order history"), "order_history");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if prev.is_some_and(|p| p.is_ascii_lowercase()) && c.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(if c == ' ' { '_' } else { c });
        prev = Some(c);
    }

    out.to_lowercase()
}

/// Uppercase the first character if it is lowercase. Nothing else changes.
///
/// ```
/// use strata_core::domain::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("settings"), "Settings");
/// assert_eq!(to_pascal_case("UserProfile"), "UserProfile");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => first.to_uppercase().chain(chars).collect(),
        Some(_) => s.to_string(),
        None => String::new(),
    }
}

/// Trimmed, lowercased application name.
pub fn app_name_lower(s: &str) -> String {
    s.trim().to_lowercase()
}
