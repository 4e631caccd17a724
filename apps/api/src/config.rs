use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Directory holding the pdfium shared library. `None` binds the system library.
    pub pdfium_lib_dir: Option<PathBuf>,
    pub max_upload_bytes: usize,
    /// Longest edge, in pixels, of the rendered first résumé page.
    pub render_max_pixels: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: require_env("GOOGLE_API_KEY")?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            pdfium_lib_dir: std::env::var("PDFIUM_LIB_DIR").ok().map(PathBuf::from),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            render_max_pixels: check_render_max_pixels(parse_env("RENDER_MAX_PIXELS", 2000)?)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// pdfium takes pixel bounds as `i32`; zero would make every render fail.
fn check_render_max_pixels(value: u32) -> Result<u32> {
    if value == 0 || i32::try_from(value).is_err() {
        anyhow::bail!("RENDER_MAX_PIXELS must be between 1 and {}, got {value}", i32::MAX);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let value: u16 = parse_env("RESUME_CHECKER_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(value, 8080);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("RESUME_CHECKER_TEST_BAD_PIXELS", "lots");
        let result: Result<u32> = parse_env("RESUME_CHECKER_TEST_BAD_PIXELS", 2000);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_max_pixels_bounds() {
        assert!(check_render_max_pixels(0).is_err());
        assert!(check_render_max_pixels(i32::MAX as u32 + 1).is_err());
        assert_eq!(check_render_max_pixels(2000).unwrap(), 2000);
        assert_eq!(check_render_max_pixels(i32::MAX as u32).unwrap(), i32::MAX as u32);
    }

    #[test]
    fn test_require_env_names_missing_variable() {
        let err = require_env("RESUME_CHECKER_TEST_MISSING_KEY").unwrap_err();
        assert!(err.to_string().contains("RESUME_CHECKER_TEST_MISSING_KEY"));
    }
}
