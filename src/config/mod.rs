pub mod lambda;
pub mod toml_config;

use crate::domain::model::Locale;

pub const DEFAULT_CAMPAIGN_URL: &str = "https://fundraisemyway.cancer.ca/campaigns/scoreforcancer";
pub const DEFAULT_GOAL: f64 = 250000.0;
pub const DEFAULT_CURRENCY: &str = "CAD";
pub const DEFAULT_LOCALE: Locale = Locale::EnCa;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-CA,en;q=0.9";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[cfg(feature = "cli")]
mod cli {
    use super::*;
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_campaign, validate_socket_addr, Validate};
    use clap::Parser;
    use std::time::Duration;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "score-total")]
    #[command(about = "Serves the campaign's total raised as JSON")]
    pub struct CliConfig {
        #[arg(long, default_value = DEFAULT_BIND)]
        pub bind: String,

        #[arg(long, default_value = DEFAULT_CAMPAIGN_URL)]
        pub source_url: String,

        #[arg(long, default_value_t = DEFAULT_GOAL, help = "Campaign goal; 0 disables progress")]
        pub goal: f64,

        #[arg(long, default_value = DEFAULT_CURRENCY)]
        pub currency: String,

        #[arg(long, default_value_t = DEFAULT_LOCALE)]
        pub locale: Locale,

        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        pub timeout_secs: u64,

        #[arg(long, default_value = DEFAULT_USER_AGENT)]
        pub user_agent: String,

        #[arg(long, default_value = DEFAULT_ACCEPT_LANGUAGE)]
        pub accept_language: String,

        #[arg(long, help = "Load settings from a TOML file instead of flags")]
        pub config: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl ConfigProvider for CliConfig {
        fn source_url(&self) -> &str {
            &self.source_url
        }

        fn goal(&self) -> Option<f64> {
            Some(self.goal)
        }

        fn currency(&self) -> &str {
            &self.currency
        }

        fn locale(&self) -> Locale {
            self.locale
        }

        fn user_agent(&self) -> &str {
            &self.user_agent
        }

        fn accept_language(&self) -> &str {
            &self.accept_language
        }

        fn request_timeout(&self) -> Duration {
            Duration::from_secs(self.timeout_secs)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_socket_addr("bind", &self.bind)?;
            validate_campaign(self)
        }
    }

}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
