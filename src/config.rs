use argh::FromArgs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

#[derive(FromArgs, Debug, PartialEq)]
/// Keep track of vehicles, shipments and routes for the length of one session.
pub struct Config {
    #[argh(option)]
    /// run commands from this file instead of reading them interactively.
    pub script: Option<PathBuf>,

    #[argh(switch)]
    /// do not print the menu before each prompt.
    pub no_menu: bool,

    #[argh(option)]
    /// log filter such as "debug" or "cat_logistics=trace". Defaults to $RUST_LOG, then "warn".
    pub log: Option<String>,
}

impl Config {
    /// Filter from `--log`, then `RUST_LOG`, then the default.
    ///
    /// An unparsable directive falls back to the default rather than failing startup.
    pub fn filter(&self) -> EnvFilter {
        let from_flag = self.log.as_deref().and_then(|f| EnvFilter::try_new(f).ok());
        from_flag
            .or_else(|| EnvFilter::try_from_default_env().ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
    }

    /// Install the global `tracing` subscriber. Logs go to stderr.
    pub fn init_logging(&self) {
        tracing_subscriber::fmt()
            .with_env_filter(self.filter())
            .with_writer(std::io::stderr)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_defaults() {
        let config = Config::from_args(&["cat-logistics"], &[]).unwrap();
        assert_eq!(
            config,
            Config {
                script: None,
                no_menu: false,
                log: None,
            }
        );
    }

    #[test]
    fn test_all_flags() {
        let config = Config::from_args(
            &["cat-logistics"],
            &["--script", "fleet.txt", "--no-menu", "--log", "debug"],
        )
        .unwrap();
        assert_eq!(config.script, Some(PathBuf::from("fleet.txt")));
        assert!(config.no_menu);
        assert_eq!(config.log.as_deref(), Some("debug"));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Config::from_args(&["cat-logistics"], &["--persist"]).is_err());
    }

    #[test]
    fn test_log_flag_drives_filter() {
        let config = Config::from_args(&["cat-logistics"], &["--log", "debug"]).unwrap();
        assert_eq!(config.filter().max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
