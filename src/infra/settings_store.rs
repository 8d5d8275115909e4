//! TOML-file backed settings store.
//!
//! Reads come from the document loaded at `open` or at the last write. Each
//! write takes an exclusive lock on a sibling `.lock` file, rereads the file,
//! applies only the changed key and writes the result back, so handles that
//! share a file never drop each other's keys. `toml_edit` keeps comments and
//! ordering of keys that were not touched.

use std::{
    fs::{self, OpenOptions},
    io::ErrorKind,
    path::{Path, PathBuf},
};

use fs2::FileExt;
use toml_edit::{value, Array, DocumentMut, Item};

use crate::{
    domain::settings_key::SettingKey,
    infra::{contracts::SettingsStore, error::AppError},
};

#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    lock_path: PathBuf,
    document: DocumentMut,
}

impl FileSettingsStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let lock_path = path.with_extension("lock");
        let document = read_document(&path)?;

        Ok(Self {
            path,
            lock_path,
            document,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn item(&self, key: SettingKey) -> Option<&Item> {
        self.document.get(key.as_str())
    }

    /// Sets `key` to `item`, or removes it when `item` is `None`.
    fn commit(&mut self, key: SettingKey, item: Option<Item>) -> Result<(), AppError> {
        if let Some(parent) = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            fs::create_dir_all(parent).map_err(|source| AppError::SettingsWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let lock = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&self.lock_path)
            .map_err(|source| AppError::SettingsLock {
                path: self.lock_path.clone(),
                source,
            })?;
        FileExt::lock_exclusive(&lock).map_err(|source| AppError::SettingsLock {
            path: self.lock_path.clone(),
            source,
        })?;

        let committed = self.commit_locked(key, item);

        if let Err(error) = FileExt::unlock(&lock) {
            tracing::warn!(
                path = %self.lock_path.display(),
                error = %error,
                "failed to release settings lock"
            );
        }

        committed
    }

    fn commit_locked(&mut self, key: SettingKey, item: Option<Item>) -> Result<(), AppError> {
        let mut document = read_document(&self.path)?;

        let changed = match item {
            Some(item) => {
                document[key.as_str()] = item;
                true
            }
            None => document.remove(key.as_str()).is_some(),
        };

        if changed {
            let staging = self.path.with_extension("toml.tmp");
            fs::write(&staging, document.to_string())
                .and_then(|()| fs::rename(&staging, &self.path))
                .map_err(|source| AppError::SettingsWrite {
                    path: self.path.clone(),
                    source,
                })?;
        }

        self.document = document;
        Ok(())
    }
}

impl SettingsStore for FileSettingsStore {
    fn text(&self, key: SettingKey) -> Result<Option<String>, AppError> {
        match self.item(key) {
            None => Ok(None),
            Some(item) => item
                .as_str()
                .map(|text| Some(text.to_owned()))
                .ok_or_else(|| type_error(key, "string")),
        }
    }

    fn set_text(&mut self, key: SettingKey, text: &str) -> Result<(), AppError> {
        self.commit(key, Some(value(text)))?;

        if key.is_secret() {
            tracing::debug!(key = key.as_str(), "secret setting updated");
        } else {
            tracing::debug!(key = key.as_str(), value = text, "setting updated");
        }
        Ok(())
    }

    fn flag(&self, key: SettingKey) -> Result<bool, AppError> {
        match self.item(key) {
            None => Ok(false),
            Some(item) => item.as_bool().ok_or_else(|| type_error(key, "boolean")),
        }
    }

    fn set_flag(&mut self, key: SettingKey, flag: bool) -> Result<(), AppError> {
        self.commit(key, Some(value(flag)))
    }

    fn list(&self, key: SettingKey) -> Result<Vec<String>, AppError> {
        let Some(item) = self.item(key) else {
            return Ok(Vec::new());
        };

        let array = item
            .as_array()
            .ok_or_else(|| type_error(key, "array of strings"))?;

        array
            .iter()
            .map(|entry| {
                entry
                    .as_str()
                    .map(ToOwned::to_owned)
                    .ok_or_else(|| type_error(key, "array of strings"))
            })
            .collect()
    }

    fn set_list(&mut self, key: SettingKey, values: &[String]) -> Result<(), AppError> {
        let mut array = Array::new();
        for entry in values {
            array.push(entry.as_str());
        }

        self.commit(key, Some(value(array)))
    }

    fn remove(&mut self, key: SettingKey) -> Result<(), AppError> {
        if self.item(key).is_none() && !self.path.exists() {
            return Ok(());
        }

        self.commit(key, None)
    }
}

fn read_document(path: &Path) -> Result<DocumentMut, AppError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(source) if source.kind() == ErrorKind::NotFound => return Ok(DocumentMut::new()),
        Err(source) => {
            return Err(AppError::SettingsRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    raw.parse::<DocumentMut>()
        .map_err(|source| AppError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
}

fn type_error(key: SettingKey, expected: &'static str) -> AppError {
    AppError::SettingsType {
        key: key.as_str(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileSettingsStore {
        FileSettingsStore::open(dir.path().join("settings.toml")).expect("store should open")
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let store = store_in(&dir);

        assert_eq!(store.text(SettingKey::Username).expect("read"), None);
        assert!(!store.flag(SettingKey::MudMode).expect("read"));
        assert!(store.list(SettingKey::Favorites).expect("read").is_empty());
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        {
            let mut store = store_in(&dir);
            store
                .set_text(SettingKey::Username, "sysop")
                .expect("text should persist");
            store
                .set_flag(SettingKey::MudMode, true)
                .expect("flag should persist");
            store
                .set_list(
                    SettingKey::Favorites,
                    &["bbs.one:23".to_owned(), "bbs.two:2323".to_owned()],
                )
                .expect("list should persist");
        }

        let store = store_in(&dir);

        assert_eq!(
            store.text(SettingKey::Username).expect("read"),
            Some("sysop".to_owned())
        );
        assert!(store.flag(SettingKey::MudMode).expect("read"));
        assert_eq!(
            store.list(SettingKey::Favorites).expect("read"),
            vec!["bbs.one:23".to_owned(), "bbs.two:2323".to_owned()]
        );
    }

    #[test]
    fn remove_deletes_key_from_file() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let mut store = store_in(&dir);
        store
            .set_text(SettingKey::Password, "hunter2")
            .expect("text should persist");

        store.remove(SettingKey::Password).expect("remove should persist");

        let raw = fs::read_to_string(store.path()).expect("settings file should exist");
        assert!(!raw.contains("password"));
        assert_eq!(store_in(&dir).text(SettingKey::Password).expect("read"), None);
    }

    #[test]
    fn preserves_unrelated_comments() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "# hand edited\nusername = \"guest\"\n").expect("fixture should write");

        let mut store = FileSettingsStore::open(&path).expect("store should open");
        store
            .set_flag(SettingKey::MudMode, false)
            .expect("flag should persist");

        let raw = fs::read_to_string(&path).expect("settings file should exist");
        assert!(raw.contains("# hand edited"));
        assert!(raw.contains("mud_mode = false"));
    }

    #[test]
    fn wrong_type_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "mud_mode = \"yes\"\n").expect("fixture should write");

        let store = FileSettingsStore::open(&path).expect("store should open");
        let error = store.flag(SettingKey::MudMode).expect_err("string is not a flag");

        assert!(matches!(
            error,
            AppError::SettingsType {
                key: "mud_mode",
                expected: "boolean"
            }
        ));
    }

    #[test]
    fn writes_from_two_handles_keep_each_others_keys() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let mut first = store_in(&dir);
        let mut second = store_in(&dir);

        first
            .set_list(SettingKey::Favorites, &["bbs.one:23".to_owned()])
            .expect("list should persist");
        second
            .set_flag(SettingKey::MudMode, true)
            .expect("flag should persist");

        let reopened = store_in(&dir);
        assert_eq!(
            reopened.list(SettingKey::Favorites).expect("read"),
            vec!["bbs.one:23".to_owned()]
        );
        assert!(reopened.flag(SettingKey::MudMode).expect("read"));
        assert_eq!(
            second.list(SettingKey::Favorites).expect("read"),
            vec!["bbs.one:23".to_owned()]
        );
    }

    #[test]
    fn remove_from_stale_handle_reaches_the_file() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let mut stale = store_in(&dir);
        let mut writer = store_in(&dir);
        writer
            .set_text(SettingKey::Username, "sysop")
            .expect("text should persist");

        stale
            .remove(SettingKey::Username)
            .expect("remove should persist");

        assert_eq!(store_in(&dir).text(SettingKey::Username).expect("read"), None);
    }

    #[test]
    fn malformed_file_fails_to_open() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "favorites = [").expect("fixture should write");

        let error = FileSettingsStore::open(&path).expect_err("malformed toml must fail");

        assert!(matches!(error, AppError::SettingsParse { .. }));
    }
}
