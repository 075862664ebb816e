//! Per-descriptor override options
//!
//! A descriptor `foo.json` may be accompanied by `foo.ini` and/or `foo.cfg`. Sections are named after
//! report context labels (`cppDep.0`, an archive file name, ...) plus `global`, so an option can be scoped
//! to a single dependency or artifact.

use ini::Ini;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

const GLOBAL_SECTION: &str = "global";

#[derive(Debug, Error)]
#[error("could not read option file \"{}\": {source}", path.display())]
pub struct ConfigError {
    pub path: PathBuf,
    #[source]
    pub source: ini::Error,
}

#[derive(Debug, Clone, Default)]
pub struct FileConfig {
    sections: HashMap<String, HashMap<String, String>>,
}

impl FileConfig {
    /// Load `<stem>.ini` then `<stem>.cfg` next to a descriptor. Missing files are skipped; keys from the
    /// later file win.
    pub fn load_for(descriptor: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for extension in ["ini", "cfg"] {
            let path = descriptor.with_extension(extension);
            if !path.is_file() {
                continue;
            }
            debug!("loading options from \"{}\"", path.display());
            let ini = Ini::load_from_file(&path).map_err(|source| ConfigError {
                path: path.clone(),
                source,
            })?;
            config.merge(&ini);
        }
        Ok(config)
    }

    pub fn from_ini_str(content: &str) -> Result<Self, ini::ParseError> {
        let ini = Ini::load_from_str(content)?;
        let mut config = Self::default();
        config.merge(&ini);
        Ok(config)
    }

    /// Option names are case-insensitive; section names are not
    fn merge(&mut self, ini: &Ini) {
        for (section, properties) in ini {
            let section = section.unwrap_or(GLOBAL_SECTION).to_string();
            let entries = self.sections.entry(section).or_default();
            for (key, value) in properties.iter() {
                entries.insert(key.to_ascii_lowercase(), value.to_string());
            }
        }
    }

    /// Raw option value, looked up in the innermost context section first, then `global`
    pub fn lookup(&self, context: &[String], option: &str) -> Option<&str> {
        let option = option.to_ascii_lowercase();
        context
            .iter()
            .rev()
            .map(String::as_str)
            .chain(std::iter::once(GLOBAL_SECTION))
            .find_map(|section| self.sections.get(section)?.get(&option))
            .map(String::as_str)
    }

    /// Boolean option, falling back to `default` when unset or not a boolean
    pub fn flag(&self, context: &[String], option: &str, default: bool) -> bool {
        let Some(value) = self.lookup(context, option) else {
            return default;
        };
        parse_bool(value).unwrap_or_else(|| {
            warn!("could not coerce {option} to boolean: {value:?}");
            default
        })
    }

    /// Whether debug builds carry the `d` suffix in their library name
    pub fn debug_suffix(&self, context: &[String]) -> bool {
        if self
            .lookup(context, "no_debug_suffix")
            .and_then(parse_bool)
            .unwrap_or(false)
        {
            return false;
        }
        self.flag(context, "debug_suffix", true)
    }
}

pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}
