// SPDX-License-Identifier: PMPL-1.0-or-later

//! Project configuration (`portal.yaml`)
//!
//! Every field is optional; command-line flags take precedence over the
//! file. A missing default file is not an error, a missing explicit one is.
//!
//! ```yaml
//! site: data/site.json
//! i18n: data/i18n.json
//! out_dir: public
//! lang: zh-Hant          # pin the language instead of detecting it
//! prefer: [zh-TW, en]    # preference list used for detection
//! ```

use crate::i18n::Lang;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "portal.yaml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortalConfig {
    pub site: Option<PathBuf>,
    pub i18n: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub lang: Option<Lang>,
    pub prefer: Vec<String>,
}

impl PortalConfig {
    /// Load `portal.yaml` from the working directory, or defaults if absent.
    pub fn load_default() -> Result<Self> {
        let path = PathBuf::from(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            log::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
            Ok(Self::default())
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut config: PortalConfig = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve relative paths against the directory holding the config file.
    fn rebase(&mut self, base: &Path) {
        for slot in [&mut self.site, &mut self.i18n, &mut self.out_dir] {
            if let Some(path) = slot.as_mut() {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        }
    }
}
