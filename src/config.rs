use crate::error::AppError;
use clap::Parser;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "email-ledger", about = "Desktop controller for the email ingestion server")]
pub struct Cli {
    /// Base URL of the ingestion server
    #[arg(long, env = "EMAIL_LEDGER_SERVER_URL", default_value = "http://127.0.0.1:5000")]
    pub server_url: String,

    /// Rows per page in the run history table
    #[arg(long, env = "EMAIL_LEDGER_PAGE_SIZE", default_value_t = 10)]
    pub page_size: usize,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub server_url: Url,
    pub page_size: usize,
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Result<Self, AppError> {
        let server_url = Url::parse(&cli.server_url)?;
        if !matches!(server_url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "server URL must be http or https, got {}",
                server_url.scheme()
            )));
        }

        Ok(Self {
            server_url,
            page_size: cli.page_size.max(1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("email-ledger").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_override_defaults() {
        let cli = parse(&["--server-url", "https://ledger.local:8443", "--page-size", "25"]);
        let settings = Settings::from_cli(cli).unwrap();
        assert_eq!(settings.server_url.as_str(), "https://ledger.local:8443/");
        assert_eq!(settings.page_size, 25);
    }

    #[test]
    fn zero_page_size_becomes_one() {
        let settings = Settings::from_cli(parse(&["--page-size", "0"])).unwrap();
        assert_eq!(settings.page_size, 1);
    }

    #[test]
    fn rejects_bad_urls() {
        let err = Settings::from_cli(parse(&["--server-url", "not a url"])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = Settings::from_cli(parse(&["--server-url", "ftp://example.com"])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
