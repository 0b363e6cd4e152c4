//! CLI argument parsing
//!
//! Options:
//!   --config <path>   Configuration file (default: studybuddy.toml)
//!   --version         Show version
//!   --help            Show help

/// Usage text
pub const USAGE: &str = "\
studybuddy — study-aid generation service

USAGE:
    studybuddy [options]

OPTIONS:
    --config <path>   Configuration file (default: studybuddy.toml)
    --version         Show version
    --help            Show help";

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "studybuddy.toml";

/// Parsed CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// Configuration file path (explicitly set or None for the default)
    pub config: Option<String>,

    /// Show version and exit
    pub show_version: bool,

    /// Show help and exit
    pub show_help: bool,
}

impl Args {
    /// Configuration path to use
    pub fn config_path(&self) -> &str {
        self.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH)
    }
}

/// Parse CLI arguments from std::env::args()
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args, String> {
    let mut iter = args.into_iter();
    let _program = iter.next(); // Skip program name

    let mut args_out = Args {
        config: None,
        show_version: false,
        show_help: false,
    };

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| "--config requires a path".to_string())?;
                args_out.config = Some(path);
            }
            "--version" => args_out.show_version = true,
            "--help" | "-h" => args_out.show_help = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(args_out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("studybuddy")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_args_uses_default_config() {
        let args = parse_args(argv(&[])).unwrap();
        assert_eq!(args.config, None);
        assert_eq!(args.config_path(), DEFAULT_CONFIG_PATH);
    }

    #[test]
    fn test_explicit_config_path() {
        let args = parse_args(argv(&["--config", "/etc/studybuddy.toml"])).unwrap();
        assert_eq!(args.config_path(), "/etc/studybuddy.toml");
    }

    #[test]
    fn test_config_without_path_is_error() {
        assert!(parse_args(argv(&["--config"])).is_err());
    }

    #[test]
    fn test_version_and_help_flags() {
        assert!(parse_args(argv(&["--version"])).unwrap().show_version);
        assert!(parse_args(argv(&["--help"])).unwrap().show_help);
        assert!(parse_args(argv(&["-h"])).unwrap().show_help);
    }

    #[test]
    fn test_unknown_argument_is_error() {
        assert!(parse_args(argv(&["--verbose"])).is_err());
    }
}
