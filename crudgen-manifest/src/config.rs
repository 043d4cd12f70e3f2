//! Optional `crudgen.toml` configuration.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default number of records returned per list page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Top-level `crudgen.toml` contents. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// The `[generate]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Root directory that receives the per-run output containers.
    pub output_dir: PathBuf,
    /// Page size used by generated list endpoints.
    pub page_size: u32,
    pub datasource: Datasource,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            page_size: DEFAULT_PAGE_SIZE,
            datasource: Datasource::default(),
        }
    }
}

/// Database provider written into the storage schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Datasource {
    #[default]
    Postgresql,
    Mysql,
    Sqlite,
}

impl Datasource {
    /// The provider string as understood by the storage schema.
    pub fn provider(&self) -> &'static str {
        match self {
            Datasource::Postgresql => "postgresql",
            Datasource::Mysql => "mysql",
            Datasource::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for Datasource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.provider())
    }
}

impl FromStr for Datasource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgresql" | "postgres" => Ok(Datasource::Postgresql),
            "mysql" => Ok(Datasource::Mysql),
            "sqlite" => Ok(Datasource::Sqlite),
            _ => Err(format!(
                "unknown datasource '{}', expected 'postgresql', 'mysql' or 'sqlite'",
                s
            )),
        }
    }
}

impl Config {
    pub const FILE_NAME: &'static str = "crudgen.toml";

    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::parse_with_filename(&content, &path.display().to_string())
    }

    /// Load `crudgen.toml` from `dir` if present, otherwise the defaults.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(Self::FILE_NAME);
        if path.is_file() {
            Self::open(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config contents with a custom filename for error reporting.
    pub fn parse_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| Error::config_parse(e, content, filename))?;

        if config.generate.page_size == 0 {
            let span = content
                .find("page_size")
                .map(|pos| miette::SourceSpan::from((pos, "page_size".len())));
            return Err(Error::validation_at(
                "page_size must be at least 1",
                content,
                filename,
                span,
            ));
        }

        Ok(config)
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with_filename(s, Self::FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config.generate.page_size, 20);
        assert_eq!(config.generate.datasource, Datasource::Postgresql);
        assert_eq!(config.generate.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_generate_section() {
        let config: Config = r#"
            [generate]
            output_dir = "build"
            page_size = 50
            datasource = "sqlite"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.generate.output_dir, PathBuf::from("build"));
        assert_eq!(config.generate.page_size, 50);
        assert_eq!(config.generate.datasource.provider(), "sqlite");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = "[generate]\npage_size = 0\n".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::Validation { span: Some(_), .. }));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = "[generate]\npagesize = 5\n".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_datasource_from_str() {
        assert_eq!("postgres".parse::<Datasource>(), Ok(Datasource::Postgresql));
        assert_eq!("MySQL".parse::<Datasource>(), Ok(Datasource::Mysql));
        assert!("oracle".parse::<Datasource>().is_err());
    }

    #[test]
    fn test_discover() {
        let temp = TempDir::new().unwrap();
        assert_eq!(Config::discover(temp.path()).unwrap(), Config::default());

        std::fs::write(
            temp.path().join("crudgen.toml"),
            "[generate]\npage_size = 5\n",
        )
        .unwrap();
        assert_eq!(Config::discover(temp.path()).unwrap().generate.page_size, 5);
    }
}
