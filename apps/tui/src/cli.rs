use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "grand-strategy", version, about = "U.S. grand strategy explorer")]
pub struct CliArgs {
    /// Print the profiles and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging to LOG_DIR
    #[arg(long)]
    pub debug: bool,

    /// Override the theme preference file
    #[arg(long = "theme-file", value_name = "PATH")]
    pub theme_file: Option<String>,

    /// Page variant: classic, gradient or neon
    #[arg(long, value_name = "NAME")]
    pub variant: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(path) = &self.theme_file {
            std::env::set_var("THEME_FILE", path);
        }
        if let Some(variant) = &self.variant {
            std::env::set_var("PAGE_VARIANT", variant);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headless_json() {
        let args = CliArgs::parse_from(["grand-strategy", "--headless", "--json"]);
        assert!(args.headless);
        assert!(args.json);
        assert!(args.variant.is_none());
    }

    #[test]
    fn parses_overrides() {
        let args = CliArgs::parse_from([
            "grand-strategy",
            "--variant",
            "neon",
            "--theme-file",
            "/tmp/theme.json",
        ]);
        assert_eq!(args.variant.as_deref(), Some("neon"));
        assert_eq!(args.theme_file.as_deref(), Some("/tmp/theme.json"));
    }

    #[test]
    fn help_mentions_flags() {
        let help = CliArgs::help_text();
        assert!(help.contains("--headless"));
        assert!(help.contains("--variant"));
    }
}
