use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::i18n::Language;
use crate::record::SessionRecord;

pub const HISTORY_KEY: &str = "multiplicationGameData";
pub const LANGUAGE_KEY: &str = "multiplicationGameLanguage";

/// Keyed string storage, the shape of a browser's local storage.
pub trait Backend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// One `<key>.json` file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Backend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Append-only history of finished quizzes plus the chosen language.
///
/// The history is loaded once when the store is opened and every append
/// rewrites the whole sequence.
pub struct ProgressStore {
    backend: Box<dyn Backend>,
    history: Vec<SessionRecord>,
}

impl ProgressStore {
    pub fn open(backend: impl Backend + 'static) -> Self {
        let history = read_history(&backend);
        Self {
            backend: Box::new(backend),
            history,
        }
    }

    pub fn records(&self) -> &[SessionRecord] {
        &self.history
    }

    /// Re-reads the persisted history. Missing or corrupt data reads as empty.
    pub fn load_all(&self) -> Vec<SessionRecord> {
        read_history(self.backend.as_ref())
    }

    pub fn append(&mut self, record: SessionRecord) -> Result<(), StoreError> {
        self.history.push(record);
        if let Err(e) = self.persist() {
            self.history.pop();
            log::warn!("Failed to save progress: {e}");
            return Err(e);
        }
        log::debug!("Saved progress ({} sessions)", self.history.len());
        Ok(())
    }

    pub fn load_language(&self) -> Language {
        match self.backend.read(LANGUAGE_KEY) {
            Ok(Some(code)) => Language::from_code(code.trim()).unwrap_or_default(),
            Ok(None) => Language::default(),
            Err(e) => {
                log::warn!("Failed to read language setting: {e}");
                Language::default()
            }
        }
    }

    pub fn save_language(&mut self, language: Language) -> Result<(), StoreError> {
        self.backend.write(LANGUAGE_KEY, language.code())
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.history)?;
        self.backend.write(HISTORY_KEY, &json)
    }
}

fn read_history(backend: &dyn Backend) -> Vec<SessionRecord> {
    let content = match backend.read(HISTORY_KEY) {
        Ok(Some(content)) => content,
        Ok(None) => {
            log::debug!("No saved progress, starting empty.");
            return Vec::new();
        }
        Err(e) => {
            log::warn!("Failed to read progress: {e}");
            return Vec::new();
        }
    };
    match serde_json::from_str(&content) {
        Ok(history) => history,
        Err(e) => {
            log::warn!("Saved progress is corrupt, starting empty: {e}");
            Vec::new()
        }
    }
}
