use std::str::FromStr;

use log::Level;
use thiserror::Error;

use crate::contact::form::FormVariant;
use crate::reveal::RevealTiming;

pub const SUBMISSIONS_KEY: &str = "contact-submissions";
pub const THEME_KEY: &str = "theme";

/// Which cut of the site gets built. Picked at compile time through the
/// `SITE_REVISION` environment variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Revision {
    Current,
    Legacy,
    Service,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown site revision `{0}` (expected current, legacy or service)")]
pub struct RevisionError(String);

impl FromStr for Revision {
    type Err = RevisionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "current" => Ok(Revision::Current),
            "legacy" => Ok(Revision::Legacy),
            "service" => Ok(Revision::Service),
            other => Err(RevisionError(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionMode {
    /// Only shows the notification and clears the form.
    Simulated,
    /// Appends every submission to the key-value store first.
    Persisted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub revision: Revision,
    pub reveal: RevealTiming,
    pub form: FormVariant,
    pub submission: SubmissionMode,
    pub submissions_key: &'static str,
    pub theme_key: &'static str,
    pub visibility_threshold: f64,
    pub bottom_inset_px: f64,
    pub log_level: Level,
}

impl SiteConfig {
    pub fn for_revision(revision: Revision) -> Self {
        let (reveal, form, submission) = match revision {
            Revision::Current => (RevealTiming::Current, FormVariant::Quote, SubmissionMode::Simulated),
            Revision::Legacy => (RevealTiming::Legacy, FormVariant::Quote, SubmissionMode::Simulated),
            Revision::Service => (
                RevealTiming::Current,
                FormVariant::ServiceRequest,
                SubmissionMode::Persisted,
            ),
        };

        Self {
            revision,
            reveal,
            form,
            submission,
            submissions_key: SUBMISSIONS_KEY,
            theme_key: THEME_KEY,
            visibility_threshold: 0.3,
            bottom_inset_px: 100.0,
            log_level: default_log_level(),
        }
    }

    pub fn from_env() -> Result<Self, RevisionError> {
        let revision = match option_env!("SITE_REVISION") {
            Some(raw) => raw.parse()?,
            None => Revision::Current,
        };
        Ok(Self::for_revision(revision))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::for_revision(Revision::Current)
    }
}

#[cfg(debug_assertions)]
fn default_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
fn default_log_level() -> Level {
    Level::Info
}
