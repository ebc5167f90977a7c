//! ConfigStore - event_config.json の読み込みとサンプル生成

use crate::config::model::EventConfig;
use crate::error::{EventpageError, Result};
use log::info;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Handle on one configuration document path
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

/// Outcome of [`ConfigStore::load_or_create_sample`]
#[derive(Debug)]
pub enum Bootstrap {
    /// Document existed and validated
    Loaded(EventConfig),
    /// Document was missing; a sample was written at this path
    SampleCreated(PathBuf),
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the document
    ///
    /// # Errors
    ///
    /// - `NotFound` if the file does not exist (callers should bootstrap with
    ///   [`ConfigStore::create_sample`] instead)
    /// - `ConfigParse` if the content is not well-formed
    /// - `ConfigValidation` listing every missing or empty required field
    pub fn load(&self) -> Result<EventConfig> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| EventpageError::from_read(&self.path, e))?;

        let config = EventConfig::parse(&content, &self.path)?;
        info!(
            "loaded event config '{}' from {}",
            config.event_name,
            self.path.display()
        );
        Ok(config)
    }

    /// Write the sample document
    ///
    /// Never overwrites: anything already at the path (even an empty file)
    /// yields `AlreadyExists`. Existence check and creation are a single
    /// `create_new` open.
    pub fn create_sample(&self) -> Result<()> {
        let content = EventConfig::sample()
            .to_json_pretty()
            .map_err(|e| self.write_error(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e.to_string()))?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::AlreadyExists {
                    EventpageError::AlreadyExists {
                        path: self.path.clone(),
                    }
                } else {
                    self.write_error(e.to_string())
                }
            })?;

        file.write_all(content.as_bytes())
            .and_then(|_| file.write_all(b"\n"))
            .and_then(|_| file.sync_all())
            .map_err(|e| self.write_error(e.to_string()))?;

        info!("created sample config at {}", self.path.display());
        Ok(())
    }

    /// Load the document, or write a sample when it does not exist yet
    ///
    /// A missing document is not a failure; a present but invalid one is.
    pub fn load_or_create_sample(&self) -> Result<Bootstrap> {
        match self.load() {
            Ok(config) => Ok(Bootstrap::Loaded(config)),
            Err(EventpageError::NotFound { .. }) => {
                self.create_sample()?;
                Ok(Bootstrap::SampleCreated(self.path.clone()))
            }
            Err(e) => Err(e),
        }
    }

    fn write_error(&self, reason: String) -> EventpageError {
        EventpageError::Write {
            path: self.path.clone(),
            reason,
        }
    }
}
