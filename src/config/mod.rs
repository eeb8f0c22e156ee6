// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the configuration file holding the default table
//! styling. Missing fields take their defaults, and an unreadable file falls
//! back to the defaults entirely.

use serde::{Deserialize, Serialize};
use tablefmt::{Borders, TableOptions};

const CONFIG_NAME: &str = "tablefmt";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub borders: Borders,
    pub bold_header: bool,
    /// Column order. Empty means use the keys of the first record.
    pub headers: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            borders: Borders::default(),
            bold_header: false,
            headers: vec![],
        }
    }
}

impl AppConfig {
    pub fn to_options(&self) -> TableOptions {
        let options = TableOptions::default()
            .borders(self.borders)
            .bold_header(self.bold_header);

        if self.headers.is_empty() {
            options
        } else {
            options.headers(self.headers.iter().cloned())
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_default_options() {
        assert_eq!(AppConfig::default().to_options(), TableOptions::default());
    }

    #[test]
    fn configured_headers_are_explicit() {
        let config = AppConfig {
            headers: vec!["id".into(), "name".into()],
            bold_header: true,
            ..AppConfig::default()
        };

        let options = config.to_options();
        assert_eq!(options.headers, Some(vec!["id".to_string(), "name".to_string()]));
        assert!(options.bold_header);
    }

    #[test]
    fn borders_round_trip_as_string() {
        let config: AppConfig = serde_json::from_str(r#"{"borders": "*=!"}"#).unwrap();
        assert_eq!(config.borders, Borders::new('*', '=', '!'));
        assert_eq!(config.version, 1);
    }

    #[test]
    fn short_border_string_is_rejected() {
        let result = serde_json::from_str::<AppConfig>(r#"{"borders": "+-"}"#);
        assert!(result.is_err());
    }
}
