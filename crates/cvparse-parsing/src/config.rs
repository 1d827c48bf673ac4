use regex::Regex;

use crate::experience::MonthYear;

/// Controls how a list of values is overridden from its defaults.
#[derive(Debug, Clone, Default)]
pub enum ListOverride<T> {
    /// Use the built-in defaults.
    #[default]
    Default,
    /// Completely replace the defaults with these values.
    Replace(Vec<T>),
    /// Append these values to the defaults.
    Extend(Vec<T>),
}

impl<T: Clone> ListOverride<T> {
    /// Resolve this override against the given defaults.
    pub fn resolve(&self, defaults: &[T]) -> Vec<T> {
        match self {
            ListOverride::Default => defaults.to_vec(),
            ListOverride::Replace(v) => v.clone(),
            ListOverride::Extend(v) => {
                let mut result = defaults.to_vec();
                result.extend(v.iter().cloned());
                result
            }
        }
    }
}

/// Configuration for the extraction pipeline.
///
/// All regex fields are `Option<Regex>` — `None` means "use the built-in
/// default". Use [`ParsingConfigBuilder`] to construct with string patterns.
#[derive(Debug, Clone, Default)]
pub struct ParsingConfig {
    // ── section.rs ──
    /// Recognized section header names (canonical lowercase).
    pub(crate) section_names: ListOverride<String>,

    // ── experience.rs ──
    /// Regex matching a free-text date range on one line.
    pub(crate) date_range_re: Option<Regex>,
    /// Month/year substituted for "present". `None` means the current date.
    pub(crate) present_clock: Option<MonthYear>,

    // ── contact.rs ──
    /// Regex matching an email address.
    pub(crate) email_re: Option<Regex>,
}

impl ParsingConfig {
    /// Section names resolved against the built-in set, all lowercase.
    pub(crate) fn section_names(&self) -> Vec<String> {
        let defaults: Vec<String> = crate::section::DEFAULT_SECTIONS
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        self.section_names
            .resolve(&defaults)
            .into_iter()
            .map(|s| s.to_lowercase())
            .collect()
    }

    /// The month/year that "present" resolves to.
    pub(crate) fn present_clock(&self) -> MonthYear {
        self.present_clock.unwrap_or_else(MonthYear::now)
    }
}

/// Builder for [`ParsingConfig`].
///
/// Accepts string patterns that are compiled to `Regex` in
/// [`build()`](Self::build). Fails fast with `regex::Error` if any pattern
/// is invalid.
#[derive(Debug, Clone, Default)]
pub struct ParsingConfigBuilder {
    section_names: ListOverride<String>,
    date_range_re: Option<String>,
    present_clock: Option<MonthYear>,
    email_re: Option<String>,
}

impl ParsingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Section names ──

    pub fn set_section_names(mut self, names: Vec<String>) -> Self {
        self.section_names = ListOverride::Replace(names);
        self
    }

    pub fn add_section_name(mut self, name: String) -> Self {
        match &mut self.section_names {
            ListOverride::Extend(v) => v.push(name),
            _ => self.section_names = ListOverride::Extend(vec![name]),
        }
        self
    }

    // ── Date ranges ──

    /// The pattern must expose `start` and `end` named capture groups.
    pub fn date_range_regex(mut self, pattern: &str) -> Self {
        self.date_range_re = Some(pattern.to_string());
        self
    }

    /// Fix the month/year that "present" resolves to (tests, reproducible runs).
    pub fn present_clock(mut self, clock: MonthYear) -> Self {
        self.present_clock = Some(clock);
        self
    }

    // ── Contact ──

    pub fn email_regex(mut self, pattern: &str) -> Self {
        self.email_re = Some(pattern.to_string());
        self
    }

    /// Compile all string patterns into regexes and produce a [`ParsingConfig`].
    pub fn build(self) -> Result<ParsingConfig, regex::Error> {
        let compile = |opt: Option<String>| -> Result<Option<Regex>, regex::Error> {
            opt.map(|p| Regex::new(&p)).transpose()
        };

        Ok(ParsingConfig {
            section_names: self.section_names,
            date_range_re: compile(self.date_range_re)?,
            present_clock: self.present_clock,
            email_re: compile(self.email_re)?,
        })
    }
}
