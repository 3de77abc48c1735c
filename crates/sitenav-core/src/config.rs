//! Navigation configuration management.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    error::{NavError, Result},
    ids::IdScheme,
};

/// Main configuration structure for section navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Group shown on startup. It never has a navigation menu.
    #[serde(default = "default_home")]
    pub home: String,

    /// Sub-section of the home group shown on startup.
    #[serde(default)]
    pub default_index: usize,

    /// Registered section groups, in page order.
    #[serde(default = "default_groups")]
    pub groups: Vec<GroupConfig>,

    /// Element addressing rules.
    #[serde(default)]
    pub ids: IdScheme,

    /// Upper bound when sub-sections are discovered by probing the page.
    #[serde(default = "default_max_sections")]
    pub max_sections: usize,

    /// CSS `display` value used when a revealed element is still hidden
    /// by the page stylesheet.
    #[serde(default = "default_reveal_display")]
    pub reveal_display: String,

    /// Console log level for the frontend.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// A single section group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Group name, also the id of its top-level trigger.
    pub name: String,

    /// Number of sub-sections. Discovered from the page when absent.
    #[serde(default)]
    pub sections: Option<usize>,
}

impl GroupConfig {
    /// Create a group whose sub-sections are discovered from the page.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sections: None,
        }
    }

    /// Fix the number of sub-sections.
    pub fn with_sections(mut self, sections: usize) -> Self {
        self.sections = Some(sections);
        self
    }
}

// Default value functions
fn default_home() -> String {
    "home".to_string()
}

fn default_groups() -> Vec<GroupConfig> {
    vec![
        GroupConfig::new("home"),
        GroupConfig::new("tut"),
        GroupConfig::new("doc"),
    ]
}

fn default_max_sections() -> usize {
    64
}

fn default_reveal_display() -> String {
    "block".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            home: default_home(),
            default_index: 0,
            groups: default_groups(),
            ids: IdScheme::default(),
            max_sections: default_max_sections(),
            reveal_display: default_reveal_display(),
            log_level: default_log_level(),
        }
    }
}

impl NavConfig {
    /// Parse configuration from TOML text, e.g. a file embedded at build time.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: NavConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.groups.is_empty() {
            return Err(NavError::config("groups cannot be empty"));
        }

        if self.ids.separator.is_empty() {
            return Err(NavError::config("ids.separator cannot be empty"));
        }

        let mut seen = HashSet::new();
        for group in &self.groups {
            if group.name.is_empty() {
                return Err(NavError::invalid_group("", "name cannot be empty"));
            }
            if group.name.contains(self.ids.separator.as_str()) {
                return Err(NavError::invalid_group(
                    &group.name,
                    format!("name contains the id separator '{}'", self.ids.separator),
                ));
            }
            if !seen.insert(group.name.as_str()) {
                return Err(NavError::invalid_group(&group.name, "registered twice"));
            }
        }

        if !seen.contains(self.home.as_str()) {
            return Err(NavError::config(format!(
                "home group '{}' is not registered",
                self.home
            )));
        }

        if self.log_level.parse::<tracing::Level>().is_err() {
            return Err(NavError::config(format!(
                "unknown log_level '{}'",
                self.log_level
            )));
        }

        if matches!(self.reveal_display.trim(), "" | "none") {
            return Err(NavError::config(format!(
                "reveal_display '{}' would keep revealed elements hidden",
                self.reveal_display
            )));
        }

        if self.max_sections == 0 {
            tracing::warn!("max_sections is 0, groups without a section count will have none");
        }

        Ok(())
    }

    /// Names of all registered groups.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    /// Whether `group` is the home group.
    pub fn is_home(&self, group: &str) -> bool {
        self.home == group
    }
}
