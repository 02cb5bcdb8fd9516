use crate::date::{DatePolicy, MonthDisplay};
use crate::entry::{EntryKind, MountTarget};
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOGO_SRC: &str =
    "https://as2.ftcdn.net/v2/jpg/02/20/52/39/1000_F_220523939_LLQ8aYBh0i8U3Ysyg6AV50NIHFxZwnB7.jpg";
pub const DEFAULT_LOGO_ALT: &str = "Image Unavailable!";
pub const DEFAULT_TITLE: &str = "This is title";
pub const DEFAULT_SUBHEADING: &str = "This is H1 heading";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BiteloConfig {
    #[serde(default)]
    pub header: HeaderConfig,
    #[serde(default)]
    pub heading: HeadingConfig,
}

impl BiteloConfig {
    /// Parse a JSON document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(
            header_mount = %config.header.mount_id,
            heading_mount = %config.heading.mount_id,
            "Loaded config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.header.mount_target()?;
        self.heading.mount_target()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    pub mount_id: String,
    pub logo_src: String,
    pub logo_alt: String,
}

impl HeaderConfig {
    pub fn mount_target(&self) -> Result<MountTarget> {
        MountTarget::parse(&self.mount_id)
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            mount_id: EntryKind::Header.default_mount_id().to_string(),
            logo_src: DEFAULT_LOGO_SRC.to_string(),
            logo_alt: DEFAULT_LOGO_ALT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeadingConfig {
    pub mount_id: String,
    pub title: String,
    pub subheading: String,
    pub month_display: MonthDisplay,
    pub date_policy: DatePolicy,
}

impl HeadingConfig {
    pub fn mount_target(&self) -> Result<MountTarget> {
        MountTarget::parse(&self.mount_id)
    }
}

impl Default for HeadingConfig {
    fn default() -> Self {
        Self {
            mount_id: EntryKind::Heading.default_mount_id().to_string(),
            title: DEFAULT_TITLE.to_string(),
            subheading: DEFAULT_SUBHEADING.to_string(),
            month_display: MonthDisplay::default(),
            date_policy: DatePolicy::default(),
        }
    }
}
