use super::DataStore;
use crate::error::{CustbookError, Result};
use crate::model::Customer;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "customers.json";

/// Stores the customer list as a pretty-printed JSON array in one file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CustbookError::Io)?;
            }
        }
        Ok(())
    }

    fn read_content(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CustbookError::Io(e)),
        }
    }
}

/// Parses a backing file's content. A document that is not valid JSON, or not
/// a JSON array, yields an empty list. Inside an array each element is read on
/// its own; only elements that are not objects are skipped.
fn parse_customers(content: &str, path: &Path) -> Vec<Customer> {
    let value: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unparseable data file");
            return Vec::new();
        }
    };

    let Value::Array(elements) = value else {
        tracing::warn!(path = %path.display(), "ignoring data file that is not a JSON array");
        return Vec::new();
    };

    elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value(element) {
            Ok(customer) => Some(customer),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    index,
                    error = %e,
                    "skipping data file entry that is not a customer object"
                );
                None
            }
        })
        .collect()
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Customer>> {
        let Some(content) = self.read_content()? else {
            tracing::debug!(path = %self.path.display(), "data file missing, starting empty");
            return Ok(Vec::new());
        };

        let customers = parse_customers(&content, &self.path);
        tracing::debug!(path = %self.path.display(), count = customers.len(), "loaded customers");
        Ok(customers)
    }

    fn save(&mut self, customers: &[Customer]) -> Result<()> {
        self.ensure_parent_dir()?;

        let mut content =
            serde_json::to_string_pretty(customers).map_err(CustbookError::Serialization)?;
        content.push('\n');
        fs::write(&self.path, content).map_err(CustbookError::Io)?;

        tracing::debug!(path = %self.path.display(), count = customers.len(), "saved customers");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn customer(id: u64, name: &str) -> Customer {
        Customer {
            id,
            name: name.to_string(),
            phone: format!("555-{:04}", id),
            email: String::new(),
            notes: String::new(),
            extra: Default::default(),
        }
    }

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join(DEFAULT_DATA_FILE))
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let customers = vec![customer(5, "Eve"), customer(1, "Ann"), customer(3, "Cy")];

        store.save(&customers).unwrap();
        assert_eq!(store.load().unwrap(), customers);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store
            .save(&[customer(1, "Ann"), customer(2, "Bo")])
            .unwrap();
        store.save(&[customer(2, "Bo")]).unwrap();

        assert_eq!(store.load().unwrap(), vec![customer(2, "Bo")]);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/deeper/customers.json"));
        store.save(&[customer(1, "Ann")]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn unparseable_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ not json").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn non_array_document_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"id": 1, "name": "Ann"}"#).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn reads_compact_encoding_with_missing_fields() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"[{"id":2,"name":"Bo"},{"name":"NoId"}]"#).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, 2);
        assert_eq!(loaded[0].phone, "");
        assert_eq!(loaded[1].id, 0);
    }

    #[test]
    fn wrong_typed_fields_keep_every_record() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"[{"id":1,"name":"Ann","phone":5551000,"email":"","notes":""},
                {"id":2,"name":"Bo","phone":"","email":"","notes":""}]"#,
        )
        .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].phone, "5551000");
        assert_eq!(loaded[1].name, "Bo");
    }

    #[test]
    fn null_fields_load_as_empty_text() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"[{"id":3,"name":"Cy","notes":null,"email":null}]"#).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded[0].id, 3);
        assert_eq!(loaded[0].notes, "");
        assert_eq!(loaded[0].email, "");
    }

    #[test]
    fn negative_id_counts_as_zero_without_dropping_others() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"[{"id":-4,"name":"Neg"},{"id":6,"name":"Six"}]"#).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, 0);
        assert_eq!(crate::store::next_id(&loaded), 7);
    }

    #[test]
    fn unknown_keys_survive_a_save() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        fs::write(store.path(), r#"[{"id":1,"name":"Ann","company":"Acme","tags":["vip"]}]"#)
            .unwrap();

        let loaded = store.load().unwrap();
        store.save(&loaded).unwrap();

        let raw: Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw[0]["company"], "Acme");
        assert_eq!(raw[0]["tags"][0], "vip");
        assert_eq!(raw[0]["phone"], "");
    }

    #[test]
    fn non_object_entries_are_skipped_individually() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"[7, {"id":2,"name":"Bo"}, "stray"]"#).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Bo");
    }

    #[test]
    fn writes_pretty_json_array() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.save(&[customer(1, "Ann")]).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.starts_with("[\n  {\n    \"id\": 1,"));
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["name"], "Ann");
    }
}
