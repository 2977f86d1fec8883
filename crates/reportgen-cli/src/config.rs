use std::fmt;
use std::path::PathBuf;

use eyre::WrapErr;
use reportgen_core::redact::redact_secret;
use reportgen_google::auth::ServiceAccountKey;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const SERVICE_ACCOUNT_FILE: &str = "SERVICE_ACCOUNT_FILE";
pub const DOCUMENT_TEMPLATE_ID: &str = "DOCUMENT_TEMPLATE_ID";
pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const TEXT_MODEL: &str = "REPORTGEN_TEXT_MODEL";
pub const IMAGE_MODEL: &str = "REPORTGEN_IMAGE_MODEL";
pub const WEASYPRINT_BIN: &str = "WEASYPRINT_BIN";

/// Where the pipelines read and write on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub template: PathBuf,
    pub image_folder: PathBuf,
    pub save_folder: PathBuf,
    /// Image embedded when no image prompt is given.
    pub default_image: PathBuf,
    pub local_output: PathBuf,
    pub export_dir: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            template: PathBuf::from("templates/template.html"),
            image_folder: PathBuf::from("generated_images"),
            save_folder: PathBuf::from("generated_pdf"),
            default_image: PathBuf::from("./generated_images/img.svg"),
            local_output: PathBuf::from("local_output.pdf"),
            export_dir: PathBuf::from("."),
        }
    }
}

#[derive(Clone)]
pub struct Settings {
    pub openai_api_key: String,
    pub service_account_file: PathBuf,
    pub document_id: String,
    pub openai_base_url: Option<String>,
    pub text_model: Option<String>,
    pub image_model: Option<String>,
    pub weasyprint_bin: Option<PathBuf>,
    pub paths: Paths,
}

impl Settings {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from any variable source. Empty values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let required = [OPENAI_API_KEY, SERVICE_ACCOUNT_FILE, DOCUMENT_TEMPLATE_ID];
        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|name| get(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(eyre::eyre!(
                "missing required environment variables: {}",
                missing.join(", ")
            ));
        }

        Ok(Self {
            openai_api_key: get(OPENAI_API_KEY).unwrap_or_default(),
            service_account_file: get(SERVICE_ACCOUNT_FILE).map(PathBuf::from).unwrap_or_default(),
            document_id: get(DOCUMENT_TEMPLATE_ID).unwrap_or_default(),
            openai_base_url: get(OPENAI_BASE_URL),
            text_model: get(TEXT_MODEL),
            image_model: get(IMAGE_MODEL),
            weasyprint_bin: get(WEASYPRINT_BIN).map(PathBuf::from),
            paths: Paths::default(),
        })
    }

    /// Read and parse the service-account key. Both pipelines require a
    /// usable key file before any work starts.
    pub fn load_service_account(&self) -> eyre::Result<ServiceAccountKey> {
        ServiceAccountKey::from_file(&self.service_account_file).wrap_err_with(|| {
            format!(
                "loading the service account key from {}",
                self.service_account_file.display()
            )
        })
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("openai_api_key", &redact_secret(&self.openai_api_key))
            .field("service_account_file", &self.service_account_file)
            .field("document_id", &self.document_id)
            .field("openai_base_url", &self.openai_base_url)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("weasyprint_bin", &self.weasyprint_bin)
            .field("paths", &self.paths)
            .finish()
    }
}
