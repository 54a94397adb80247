use crate::{CmsError, CmsResult};

use folio_config::ValidationConfig;

/// Trim surrounding whitespace from user-supplied text
pub fn sanitize_string(s: &str) -> String {
    s.trim().to_string()
}

/// Trim, and treat blank input as absent
pub fn sanitize_optional(s: Option<&str>) -> Option<String> {
    s.map(sanitize_string).filter(|v| !v.is_empty())
}

/// Field checks shared by every manager, bounded by [`ValidationConfig`].
#[derive(Debug, Clone)]
pub struct InputValidator {
    limits: ValidationConfig,
}

impl InputValidator {
    pub fn new(limits: ValidationConfig) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ValidationConfig {
        &self.limits
    }

    #[track_caller]
    pub fn required(&self, value: &str, field: &str, max_length: usize) -> CmsResult<String> {
        let value = sanitize_string(value);
        if value.is_empty() {
            return Err(CmsError::validation(format!("{} is required", field), field));
        }
        Self::check_length(&value, field, max_length)?;
        Ok(value)
    }

    #[track_caller]
    pub fn optional(
        &self,
        value: Option<&str>,
        field: &str,
        max_length: usize,
    ) -> CmsResult<Option<String>> {
        let value = sanitize_optional(value);
        if let Some(ref v) = value {
            Self::check_length(v, field, max_length)?;
        }
        Ok(value)
    }

    /// Absolute http(s) URL or a site-relative path such as `/uploads/a.jpg`.
    #[track_caller]
    pub fn url(&self, value: &str) -> CmsResult<String> {
        let url = self.required(value, "url", self.limits.max_url_length)?;

        if url.chars().any(char::is_whitespace) {
            return Err(CmsError::validation("url cannot contain whitespace", "url"));
        }

        let has_scheme = url.starts_with("https://") || url.starts_with("http://");
        if !has_scheme && !url.starts_with('/') {
            return Err(CmsError::validation(
                "url must be http(s) or start with '/'",
                "url",
            ));
        }

        Ok(url)
    }

    /// Lowercase ASCII letters, digits and single inner hyphens.
    #[track_caller]
    pub fn slug(&self, value: &str) -> CmsResult<String> {
        let slug = self.required(value, "slug", self.limits.max_slug_length)?;

        let valid_chars = slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

        if !valid_chars || slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
            return Err(CmsError::validation(
                format!(
                    "slug '{}' must use lowercase letters, digits and single hyphens",
                    slug
                ),
                "slug",
            ));
        }

        Ok(slug)
    }

    #[track_caller]
    pub fn title(&self, value: &str) -> CmsResult<String> {
        self.required(value, "title", self.limits.max_title_length)
    }

    /// Long-form text may be empty, but not longer than the content limit.
    #[track_caller]
    pub fn content(&self, value: &str, field: &str) -> CmsResult<String> {
        let value = sanitize_string(value);
        Self::check_length(&value, field, self.limits.max_content_length)?;
        Ok(value)
    }

    #[track_caller]
    fn check_length(value: &str, field: &str, max_length: usize) -> CmsResult<()> {
        if value.chars().count() > max_length {
            return Err(CmsError::validation(
                format!("{} must not exceed {} characters", field, max_length),
                field,
            ));
        }
        Ok(())
    }
}
