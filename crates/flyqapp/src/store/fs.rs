use super::{FilterChange, FilterStore, SavedFilter};
use crate::error::{FilterError, Result};
use crate::model::Group;
use crate::share;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const FILTERS_FILE: &str = "filters.json";
const SESSION_FILE: &str = "session.json";

/// Filesystem store: `filters.json` (named filters) and `session.json`
/// (the working tree) under one data directory.
///
/// Writes go through a temp file and a rename so a killed process cannot
/// leave a half-written file behind.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// The OS-appropriate default data directory.
    pub fn default_dir() -> Result<PathBuf> {
        directories::ProjectDirs::from("", "", "flyq")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| FilterError::Store("no home directory available".to_string()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn filters_path(&self) -> PathBuf {
        self.dir.join(FILTERS_FILE)
    }

    fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    fn load_filters(&self) -> Result<Vec<SavedFilter>> {
        let path = self.filters_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save_filters(&self, filters: &[SavedFilter]) -> Result<()> {
        let content = serde_json::to_string_pretty(filters)?;
        self.write_atomic(&self.filters_path(), &content)
    }

    fn write_atomic(&self, target: &Path, content: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        let tmp = self.dir.join(format!(".write-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, content)?;
        fs::rename(&tmp, target)?;
        Ok(())
    }

    fn position(filters: &[SavedFilter], name: &str) -> Option<usize> {
        filters.iter().position(|entry| entry.name == name)
    }
}

impl FilterStore for FileStore {
    fn create(&mut self, name: &str, filter: &str, color: &str) -> Result<SavedFilter> {
        let mut filters = self.load_filters()?;
        if Self::position(&filters, name).is_some() {
            return Err(FilterError::DuplicateName(name.to_string()));
        }
        let entry = SavedFilter::new(name, filter, color);
        filters.push(entry.clone());
        self.save_filters(&filters)?;
        Ok(entry)
    }

    fn get(&self, name: &str) -> Result<SavedFilter> {
        let filters = self.load_filters()?;
        Self::position(&filters, name)
            .map(|pos| filters[pos].clone())
            .ok_or_else(|| FilterError::FilterNotFound(name.to_string()))
    }

    fn list(&self) -> Result<Vec<SavedFilter>> {
        self.load_filters()
    }

    fn update(&mut self, name: &str, change: FilterChange) -> Result<SavedFilter> {
        let mut filters = self.load_filters()?;
        let position = Self::position(&filters, name)
            .ok_or_else(|| FilterError::FilterNotFound(name.to_string()))?;
        if let Some(new_name) = &change.name {
            if new_name != name && Self::position(&filters, new_name).is_some() {
                return Err(FilterError::DuplicateName(new_name.clone()));
            }
        }
        {
            let entry = &mut filters[position];
            if let Some(new_name) = change.name {
                entry.name = new_name;
            }
            if let Some(filter) = change.filter {
                entry.filter = filter;
            }
            if let Some(color) = change.color {
                entry.color = color;
            }
            entry.updated_at = Utc::now();
        }
        self.save_filters(&filters)?;
        Ok(filters[position].clone())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let mut filters = self.load_filters()?;
        let position = Self::position(&filters, name)
            .ok_or_else(|| FilterError::FilterNotFound(name.to_string()))?;
        filters.remove(position);
        self.save_filters(&filters)
    }

    fn load_session(&self) -> Result<Option<Group>> {
        let path = self.session_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        share::deserialize(&content).map(Some)
    }

    fn save_session(&mut self, root: &Group) -> Result<()> {
        let content = share::serialize(root)?;
        self.write_atomic(&self.session_path(), &content)
    }
}
