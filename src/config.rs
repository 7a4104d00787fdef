use std::path::PathBuf;

const FAQ_URL: &str = "https://support.huaweicloud.com/intl/en-us/sms_faq/sms_faq_0007.html";
const DATA_DIR: &str = "data";

/// Where to fetch from and where the cache/output files live. Every field can
/// be overridden from the CLI, so tests can point the pipeline at fixtures.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub faq_url: String,
    pub cache_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        let data = PathBuf::from(DATA_DIR);
        Self {
            faq_url: FAQ_URL.to_string(),
            cache_path: data.join("cache.html"),
            output_path: data.join("os-list.json"),
        }
    }
}
