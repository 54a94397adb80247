use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Field length bounds
pub const MIN_URL_LENGTH: usize = 16;
pub const MAX_URL_LENGTH: usize = 8192;
pub const DEFAULT_MAX_URL_LENGTH: usize = 2048;

pub const MIN_ALT_LENGTH: usize = 0;
pub const MAX_ALT_LENGTH: usize = 2000;
pub const DEFAULT_MAX_ALT_LENGTH: usize = 300;

pub const MIN_CAPTION_LENGTH: usize = 0;
pub const MAX_CAPTION_LENGTH: usize = 5000;
pub const DEFAULT_MAX_CAPTION_LENGTH: usize = 1000;

pub const MIN_SLUG_LENGTH: usize = 8;
pub const MAX_SLUG_LENGTH: usize = 500;
pub const DEFAULT_MAX_SLUG_LENGTH: usize = 120;

pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

pub const MIN_CONTENT_LENGTH: usize = 0;
pub const MAX_CONTENT_LENGTH: usize = 1_000_000;
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 100_000;

/// Field limits applied by the managers before anything reaches the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length for image URLs
    pub max_url_length: usize,
    /// Maximum length for image alt text
    pub max_alt_length: usize,
    /// Maximum length for image captions
    pub max_caption_length: usize,
    /// Maximum length for project and post slugs
    pub max_slug_length: usize,
    /// Maximum length for project and post titles
    pub max_title_length: usize,
    /// Maximum length for post bodies and project descriptions
    pub max_content_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_url_length: DEFAULT_MAX_URL_LENGTH,
            max_alt_length: DEFAULT_MAX_ALT_LENGTH,
            max_caption_length: DEFAULT_MAX_CAPTION_LENGTH,
            max_slug_length: DEFAULT_MAX_SLUG_LENGTH,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        check_range(
            "max_url_length",
            self.max_url_length,
            MIN_URL_LENGTH,
            MAX_URL_LENGTH,
        )?;
        check_range(
            "max_alt_length",
            self.max_alt_length,
            MIN_ALT_LENGTH,
            MAX_ALT_LENGTH,
        )?;
        check_range(
            "max_caption_length",
            self.max_caption_length,
            MIN_CAPTION_LENGTH,
            MAX_CAPTION_LENGTH,
        )?;
        check_range(
            "max_slug_length",
            self.max_slug_length,
            MIN_SLUG_LENGTH,
            MAX_SLUG_LENGTH,
        )?;
        check_range(
            "max_title_length",
            self.max_title_length,
            MIN_TITLE_LENGTH,
            MAX_TITLE_LENGTH,
        )?;
        check_range(
            "max_content_length",
            self.max_content_length,
            MIN_CONTENT_LENGTH,
            MAX_CONTENT_LENGTH,
        )?;

        Ok(())
    }
}

#[track_caller]
fn check_range(name: &str, value: usize, min: usize, max: usize) -> ConfigErrorResult<()> {
    if value < min || value > max {
        return Err(ConfigError::validation(format!(
            "validation.{} must be {}-{}, got {}",
            name, min, max, value
        )));
    }
    Ok(())
}
