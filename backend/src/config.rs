//! Runtime configuration, read once at startup from `RAILQR_*` environment variables.
//!
//! Every setting has a default that runs the server locally on port 8080 with uploads in
//! `./uploads`.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_EMBLEM_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/5/55/Emblem_of_India.svg/150px-Emblem_of_India.svg.png";
pub const DEFAULT_LOGO_URL: &str = "https://thumbs.dreamstime.com/b/logo-icon-vector-logos-icons-set-social-media-flat-banner-vectors-svg-eps-jpg-jpeg-paper-texture-glossy-emblem-wallpaper-210441921.jpg";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Where uploaded photos are written; also served under `/uploads`.
    pub upload_dir: PathBuf,
    /// Optional directory holding `LiberationSans-*.ttf`. The embedded DejaVu Sans family is
    /// used when it is missing.
    pub fonts_dir: PathBuf,
    pub fetch_timeout: Duration,
    pub max_redirects: usize,
    pub summary_delay: Duration,
    pub summary_timeout: Duration,
    pub emblem_url: String,
    pub logo_url: String,
    pub json_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            upload_dir: PathBuf::from("uploads"),
            fonts_dir: PathBuf::from("./fonts"),
            fetch_timeout: Duration::from_secs(10),
            max_redirects: 5,
            summary_delay: Duration::from_millis(1200),
            summary_timeout: Duration::from_secs(30),
            emblem_url: DEFAULT_EMBLEM_URL.to_string(),
            logo_url: DEFAULT_LOGO_URL.to_string(),
            json_limit: 10 * 1024 * 1024, // 10 MB
        }
    }
}

fn env_string(name: &str, default: String) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_duration_ms(name: &str, default: Duration) -> Duration {
    Duration::from_millis(env_u64(name, default.as_millis() as u64))
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_string("RAILQR_HOST", defaults.host),
            port: env::var("RAILQR_PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            upload_dir: PathBuf::from(env_string(
                "RAILQR_UPLOAD_DIR",
                defaults.upload_dir.to_string_lossy().into_owned(),
            )),
            fonts_dir: PathBuf::from(env_string(
                "RAILQR_FONTS_DIR",
                defaults.fonts_dir.to_string_lossy().into_owned(),
            )),
            fetch_timeout: env_duration_ms("RAILQR_FETCH_TIMEOUT_MS", defaults.fetch_timeout),
            max_redirects: env_usize("RAILQR_MAX_REDIRECTS", defaults.max_redirects),
            summary_delay: env_duration_ms("RAILQR_SUMMARY_DELAY_MS", defaults.summary_delay),
            summary_timeout: env_duration_ms(
                "RAILQR_SUMMARY_TIMEOUT_MS",
                defaults.summary_timeout,
            ),
            emblem_url: env_string("RAILQR_EMBLEM_URL", defaults.emblem_url),
            logo_url: env_string("RAILQR_LOGO_URL", defaults.logo_url),
            json_limit: env_usize("RAILQR_JSON_LIMIT_BYTES", defaults.json_limit),
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
