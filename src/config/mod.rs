use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "userdir")]
#[command(about = "A terminal browser for a public user/post API, with a timezone clock")]
pub struct CliConfig {
    #[arg(long, default_value = "https://jsonplaceholder.typicode.com")]
    pub users_api_base: String,

    #[arg(long, default_value = "https://worldtimeapi.org/api")]
    pub time_api_base: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write diagnostics to this file instead of stderr")]
    pub log_file: Option<String>,
}

impl ConfigProvider for CliConfig {
    fn users_api_base(&self) -> &str {
        &self.users_api_base
    }

    fn time_api_base(&self) -> &str {
        &self.time_api_base
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("users_api_base", &self.users_api_base)?;
        validate_url("time_api_base", &self.time_api_base)?;
        if let Some(log_file) = &self.log_file {
            validate_non_empty_string("log_file", log_file)?;
        }
        Ok(())
    }
}
