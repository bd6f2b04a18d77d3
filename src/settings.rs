//! Formatter configuration
//!
//! Settings mirror what an administrator configures in a formatter UI: one
//! display template per range granularity, a template for single dates, and a
//! display separator. Defaulting happens exactly once, when a partial record
//! is resolved into a [`FormatSettings`] value; the formatting core only ever
//! sees fully-populated settings.

use serde::{Deserialize, Serialize};

use crate::error::{FormatterError, Result};

const DEFAULT_SINGLE: &str = "d F Y";
const DEFAULT_ONE_DAY: &str = "d F Y";
const DEFAULT_ONE_MONTH: &str = "d - {d} F Y";
const DEFAULT_SEVERAL_MONTHS: &str = "d F - {d} {F} Y";
const DEFAULT_SEVERAL_YEARS: &str = "d F Y - {d} {F} {Y}";
const DEFAULT_SEPARATOR: &str = "-";

/// Fully-resolved formatter configuration
///
/// Every field holds a display template except `separator`, which is a
/// display-only string for template authors to include literally; the
/// formatting algorithm itself never reads it. `single_all_day` is likewise
/// accepted for presentation-layer use: callers that render an all-day
/// single date select it instead of `single` before invoking the formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSettings {
    /// Template for a single date (no end date, or end equals start)
    pub single: String,
    /// Template for a single date that covers a whole day
    pub single_all_day: String,
    /// Template for a range within one calendar day
    pub one_day: String,
    /// Template for a range within one calendar month
    pub one_month: String,
    /// Template for a range within one calendar year
    pub several_months: String,
    /// Template for a range spanning calendar years
    pub several_years: String,
    /// Display separator available to template authors
    pub separator: String,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            single: DEFAULT_SINGLE.to_string(),
            single_all_day: DEFAULT_SINGLE.to_string(),
            one_day: DEFAULT_ONE_DAY.to_string(),
            one_month: DEFAULT_ONE_MONTH.to_string(),
            several_months: DEFAULT_SEVERAL_MONTHS.to_string(),
            several_years: DEFAULT_SEVERAL_YEARS.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Administrator-supplied settings before defaulting
///
/// Every field is optional; missing and blank fields fall back to the
/// documented defaults when resolved. This is the record shape a settings
/// store deserializes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialFormatSettings {
    pub single: Option<String>,
    pub single_all_day: Option<String>,
    pub one_day: Option<String>,
    pub one_month: Option<String>,
    pub several_months: Option<String>,
    pub several_years: Option<String>,
    pub separator: Option<String>,
}

impl FormatSettings {
    /// Compose partial settings with the defaults
    ///
    /// A field left unset or blank by the administrator resolves to its
    /// default; this is the only place defaulting happens.
    ///
    /// # Example
    ///
    /// ```
    /// use daterange_formatter::{FormatSettings, PartialFormatSettings};
    ///
    /// let partial = PartialFormatSettings {
    ///     one_month: Some("j - {j} F Y".to_string()),
    ///     ..PartialFormatSettings::default()
    /// };
    /// let settings = FormatSettings::resolve(partial);
    /// assert_eq!(settings.one_month, "j - {j} F Y");
    /// assert_eq!(settings.single, "d F Y");
    /// ```
    pub fn resolve(partial: PartialFormatSettings) -> Self {
        let defaults = Self::default();
        Self {
            single: resolve_field(partial.single, defaults.single),
            single_all_day: resolve_field(partial.single_all_day, defaults.single_all_day),
            one_day: resolve_field(partial.one_day, defaults.one_day),
            one_month: resolve_field(partial.one_month, defaults.one_month),
            several_months: resolve_field(partial.several_months, defaults.several_months),
            several_years: resolve_field(partial.several_years, defaults.several_years),
            separator: resolve_field(partial.separator, defaults.separator),
        }
    }

    /// Set the single date template
    pub fn with_single(mut self, template: impl Into<String>) -> Self {
        self.single = template.into();
        self
    }

    /// Set the all-day single date template
    pub fn with_single_all_day(mut self, template: impl Into<String>) -> Self {
        self.single_all_day = template.into();
        self
    }

    /// Set the same-day range template
    pub fn with_one_day(mut self, template: impl Into<String>) -> Self {
        self.one_day = template.into();
        self
    }

    /// Set the same-month range template
    pub fn with_one_month(mut self, template: impl Into<String>) -> Self {
        self.one_month = template.into();
        self
    }

    /// Set the same-year range template
    pub fn with_several_months(mut self, template: impl Into<String>) -> Self {
        self.several_months = template.into();
        self
    }

    /// Set the multi-year range template
    pub fn with_several_years(mut self, template: impl Into<String>) -> Self {
        self.several_years = template.into();
        self
    }

    /// Set the display separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// One-line summary of the configured range templates
    ///
    /// Suitable for a settings administration UI.
    pub fn summary(&self) -> String {
        format!(
            "Display date range using formats: {}, {}, {}, {}",
            self.one_day, self.one_month, self.several_months, self.several_years
        )
    }

    /// Validate the configured templates
    ///
    /// Advisory only: formatting never fails on a malformed template, but a
    /// settings UI can surface these problems to the administrator before
    /// saving. Flags empty templates and unbalanced braces.
    pub fn validate(&self) -> Result<()> {
        for (field, template) in [
            ("single", &self.single),
            ("single_all_day", &self.single_all_day),
            ("one_day", &self.one_day),
            ("one_month", &self.one_month),
            ("several_months", &self.several_months),
            ("several_years", &self.several_years),
        ] {
            if template.trim().is_empty() {
                return Err(FormatterError::EmptyTemplate { field });
            }

            let open_braces = template.matches('{').count();
            let close_braces = template.matches('}').count();
            if open_braces != close_braces {
                return Err(FormatterError::UnbalancedBraces {
                    field,
                    template: template.clone(),
                });
            }
        }

        Ok(())
    }
}

fn resolve_field(value: Option<String>, default: String) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default,
    }
}
