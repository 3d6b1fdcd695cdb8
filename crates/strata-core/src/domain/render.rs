//! `{{VARIABLE}}` substitution for catalog bodies.
//!
//! ## Built-in Variables
//!
//! | Variable         | Example         | Source                      |
//! |------------------|-----------------|-----------------------------|
//! | `FEATURE_NAME`   | "UserProfile"   | trimmed user input          |
//! | `FEATURE_SNAKE`  | "user_profile"  | [`NameVariants::snake_case`] |
//! | `FEATURE_PASCAL` | "UserProfile"   | [`NameVariants::pascal_case`] |
//! | `APP_NAME`       | "myapp"         | [`NameVariants::app_name_lower`] |

use std::collections::BTreeMap;

use crate::domain::naming::NameVariants;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Variable map a template body is rendered against.
///
/// Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    /// Build the standard context for one feature.
    pub fn new(names: &NameVariants) -> Self {
        let mut vars = BTreeMap::new();
        vars.insert("FEATURE_NAME".to_string(), names.raw().trim().to_string());
        vars.insert("FEATURE_SNAKE".to_string(), names.snake_case().to_string());
        vars.insert("FEATURE_PASCAL".to_string(), names.pascal_case().to_string());
        vars.insert("APP_NAME".to_string(), names.app_name_lower().to_string());
        Self { variables: vars }
    }

    /// Add or override a variable.
    #[cfg(test)]
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every known `{{KEY}}`; unknown placeholders stay literal.
    ///
    /// Single left-to-right pass, so substituted values are never rescanned.
    pub fn render(&self, template: &str) -> String {
        self.render_inner(template).0
    }

    /// Like [`render`](Self::render) but fails on the first unknown placeholder.
    pub fn render_strict(&self, template: &str) -> Result<String, String> {
        let (out, missing) = self.render_inner(template);
        match missing.into_iter().next() {
            Some(key) => Err(key),
            None => Ok(out),
        }
    }

    fn render_inner(&self, template: &str) -> (String, Vec<String>) {
        let mut out = String::with_capacity(template.len() + 64);
        let mut missing = Vec::new();
        let mut rest = template;

        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + OPEN.len()..];

            let Some(end) = after_open.find(CLOSE) else {
                out.push_str(&rest[start..]);
                rest = "";
                break;
            };

            let key = &after_open[..end];
            match self.get(key) {
                Some(value) if is_variable_name(key) => out.push_str(value),
                _ => {
                    if is_variable_name(key) {
                        missing.push(key.to_string());
                    }
                    out.push_str(&rest[start..start + OPEN.len() + end + CLOSE.len()]);
                }
            }
            rest = &after_open[end + CLOSE.len()..];
        }
        out.push_str(rest);

        (out, missing)
    }
}

fn is_variable_name(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
