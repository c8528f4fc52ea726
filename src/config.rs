//! Loading `config.toml`.
//!
//! ```toml
//! rows = 100
//! cols = 26
//! col_width = 10
//! separator = ","
//! ```
//!
//! Every key is optional. Problems with the file are reported as warnings and
//! the built-in defaults are used instead.

use directories::ProjectDirs;
use gridcalc_core::SheetConfig;
use std::path::PathBuf;

/// Load the sheet configuration from `config_file`, or from the user config
/// directory when no file is given. Returns the configuration and any
/// warnings to show the user.
pub fn load_config(config_file: Option<&PathBuf>) -> (SheetConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let Some(path) = config_file.cloned().or_else(user_config_path) else {
        return (SheetConfig::default(), warnings);
    };

    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (SheetConfig::default(), warnings);
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match parse_config(&content) {
            Ok(config) => return (config, warnings),
            Err(err) => warnings.push(format!("Failed to parse {}: {}", path.display(), err)),
        },
        Err(err) => warnings.push(format!("Failed to read {}: {}", path.display(), err)),
    }
    (SheetConfig::default(), warnings)
}

/// Parse and validate TOML configuration text.
pub fn parse_config(content: &str) -> Result<SheetConfig, String> {
    let config: SheetConfig = toml::from_str(content).map_err(|e| e.to_string())?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "gridcalc")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config_partial_keys_use_defaults() {
        let config = parse_config("rows = 10\nseparator = \";\"\n").unwrap();
        assert_eq!(config.rows, 10);
        assert_eq!(config.cols, 26);
        assert_eq!(config.separator, ';');
    }

    #[test]
    fn parse_config_rejects_unknown_keys_and_bad_values() {
        assert!(parse_config("colour = \"red\"").is_err());
        assert!(parse_config("rows = 0").is_err());
        assert!(parse_config("separator = \"ab\"").is_err());
    }

    #[test]
    fn load_config_missing_explicit_file_warns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let (config, warnings) = load_config(Some(&path));
        assert_eq!(config, SheetConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("not found"));
    }

    #[test]
    fn load_config_bad_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "rows = \"many\"").unwrap();
        let (config, warnings) = load_config(Some(&path));
        assert_eq!(config, SheetConfig::default());
        assert!(warnings[0].starts_with("Failed to parse"));
    }

    #[test]
    fn load_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "cols = 4\ncol_width = 6\n").unwrap();
        let (config, warnings) = load_config(Some(&path));
        assert!(warnings.is_empty());
        assert_eq!((config.cols, config.col_width), (4, 6));
    }
}
