use std::path::PathBuf;

use jiff::tz::TimeZone;

use feedback_core::s3_keys;
use feedback_export::pdf::{EmbeddedFont, PdfFont};
use feedback_export::report::{DEFAULT_TITLE, ReportOptions};
use feedback_export::styles::ReportLayout;
use feedback_storage::StoreBackend;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATA_PATH: &str = "data/feedback.json";

/// How the process receives requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Runtime {
    /// Inside AWS Lambda, behind API Gateway.
    Lambda,
    /// A plain HTTP listener on `0.0.0.0:port`.
    Http { port: u16 },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub runtime: Runtime,
    pub store: StoreBackend,
    pub report_title: String,
    /// IANA zone name; `None` means the system zone.
    pub report_time_zone: Option<String>,
    /// JSON file overriding the default page layout.
    pub report_layout_path: Option<PathBuf>,
    /// TrueType font embedded in exported PDFs; `None` uses Helvetica.
    pub report_font_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let runtime = if get("AWS_LAMBDA_RUNTIME_API").is_some() {
            Runtime::Lambda
        } else {
            let port = match get("PORT") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|e| eyre::eyre!("invalid PORT {raw:?}: {e}"))?,
                None => DEFAULT_PORT,
            };
            Runtime::Http { port }
        };

        let store = match get("FEEDBACK_STORE").as_deref().map(str::trim) {
            None | Some("file") => StoreBackend::File {
                path: get("FEEDBACK_DATA_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
            },
            Some("memory") => StoreBackend::Memory,
            Some("s3") => StoreBackend::S3 {
                bucket: get("FEEDBACK_BUCKET")
                    .ok_or_else(|| eyre::eyre!("FEEDBACK_BUCKET is required when FEEDBACK_STORE=s3"))?,
                prefix: get("FEEDBACK_PREFIX")
                    .unwrap_or_else(|| s3_keys::DEFAULT_PREFIX.to_string()),
            },
            Some(other) => {
                return Err(eyre::eyre!(
                    "unknown FEEDBACK_STORE {other:?} (expected file, memory or s3)"
                ));
            }
        };

        Ok(Self {
            runtime,
            store,
            report_title: get("FEEDBACK_REPORT_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            report_time_zone: get("FEEDBACK_REPORT_TZ"),
            report_layout_path: get("FEEDBACK_REPORT_LAYOUT").map(PathBuf::from),
            report_font_path: get("FEEDBACK_REPORT_FONT").map(PathBuf::from),
        })
    }

    /// Resolve the time zone, layout file and font into report options.
    pub fn report_options(&self) -> eyre::Result<ReportOptions> {
        let time_zone = match &self.report_time_zone {
            Some(name) => TimeZone::get(name)
                .map_err(|e| eyre::eyre!("unknown FEEDBACK_REPORT_TZ {name:?}: {e}"))?,
            None => TimeZone::system(),
        };

        let layout = match &self.report_layout_path {
            Some(path) => {
                let contents = std::fs::read_to_string(path).map_err(|e| {
                    eyre::eyre!("failed to read report layout at {}: {e}", path.display())
                })?;
                let layout: ReportLayout = serde_json::from_str(&contents)?;
                tracing::info!(path = %path.display(), "report layout loaded");
                layout
            }
            None => ReportLayout::default(),
        };

        let font = match &self.report_font_path {
            Some(path) => {
                let font = EmbeddedFont::from_path(path).map_err(|e| {
                    eyre::eyre!("failed to load report font at {}: {e}", path.display())
                })?;
                tracing::info!(path = %path.display(), "report font loaded");
                PdfFont::Embedded(font)
            }
            None => PdfFont::Helvetica,
        };

        Ok(ReportOptions {
            title: self.report_title.clone(),
            time_zone,
            layout,
            font,
        })
    }
}
