use std::sync::{Arc, Mutex};
use vfs_core::{
    Clock, FileRegistry, ListQuery, NodeKind, SharedClock, SortKey, SortOrder, StoreError,
    Timestamp, UserDirectory, MAX_FILE_NAME_LEN,
};

#[derive(Debug)]
struct ManualClock(Mutex<Timestamp>);

impl ManualClock {
    fn at(value: &str) -> Arc<Self> {
        Arc::new(Self(Mutex::new(Timestamp::parse(value).unwrap())))
    }

    fn set(&self, value: &str) {
        *self.0.lock().unwrap() = Timestamp::parse(value).unwrap();
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.0.lock().unwrap()
    }
}

fn setup(clock: &Arc<ManualClock>) -> UserDirectory {
    let shared: SharedClock = clock.clone();
    let mut directory = UserDirectory::with_clock(shared);
    directory.register_user("alice").unwrap();
    directory
        .get_user_mut("alice")
        .unwrap()
        .folders_mut()
        .create_folder("docs", "")
        .unwrap();
    directory
}

fn docs_files(directory: &mut UserDirectory) -> &mut FileRegistry {
    directory
        .get_user_mut("alice")
        .unwrap()
        .folders_mut()
        .get_folder_mut("docs")
        .unwrap()
        .files_mut()
}

fn file_names(files: &FileRegistry, query: ListQuery) -> Vec<String> {
    files
        .list_files(query)
        .into_iter()
        .map(|file| file.name().to_string())
        .collect()
}

#[test]
fn create_stamps_time_and_keeps_description_verbatim() {
    let clock = ManualClock::at("2024-02-29 23:59:59");
    let mut directory = setup(&clock);
    let files = docs_files(&mut directory);

    files.create_file("config", "\"a config file\"").unwrap();

    let file = files.get_file("config").unwrap();
    assert_eq!(file.description(), "\"a config file\"");
    assert_eq!(file.created_at().to_string(), "2024-02-29 23:59:59");
}

#[test]
fn create_checks_name_then_uniqueness_then_length() {
    let clock = ManualClock::at("2024-01-01 00:00:00");
    let mut directory = setup(&clock);
    let files = docs_files(&mut directory);
    files.create_file("dup", "").unwrap();

    let err = files.create_file("bad name", "").unwrap_err();
    assert!(matches!(err, StoreError::InvalidName { kind: NodeKind::File, .. }));

    let err = files.create_file("dup", "").unwrap_err();
    assert_eq!(
        err,
        StoreError::AlreadyExists {
            kind: NodeKind::File,
            name: "dup".to_string(),
        }
    );

    let long = format!("'{}'", "n".repeat(MAX_FILE_NAME_LEN - 1));
    let err = files.create_file(&long, "").unwrap_err();
    assert!(matches!(err, StoreError::TooLong { kind: NodeKind::File, .. }));
    assert_eq!(files.len(), 1);
}

#[test]
fn delete_file_removes_only_that_file() {
    let clock = ManualClock::at("2024-01-01 00:00:00");
    let mut directory = setup(&clock);
    let files = docs_files(&mut directory);
    files.create_file("keep", "").unwrap();
    files.create_file("drop", "").unwrap();

    files.delete_file("drop").unwrap();

    assert!(files.contains("keep"));
    let err = files.get_file("drop").unwrap_err();
    assert!(matches!(err, StoreError::NotFound { kind: NodeKind::File, .. }));
    let err = files.delete_file("drop").unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[test]
fn list_files_by_created_desc() {
    let clock = ManualClock::at("2024-01-01 00:00:00");
    let mut directory = setup(&clock);
    let files = docs_files(&mut directory);
    files.create_file("old", "").unwrap();
    clock.set("2024-01-02 00:00:00");
    files.create_file("new", "").unwrap();

    assert_eq!(
        file_names(files, ListQuery::new(SortKey::CreatedAt, SortOrder::Desc)),
        vec!["new", "old"]
    );
    assert_eq!(
        file_names(files, ListQuery::new(SortKey::Name, SortOrder::Asc)),
        vec!["new", "old"]
    );
}

#[test]
fn every_created_file_is_listed_once_with_attributes() {
    let clock = ManualClock::at("2024-01-01 08:00:00");
    let mut directory = setup(&clock);
    let files = docs_files(&mut directory);
    let inputs = [("c.md", "third"), ("a.md", ""), ("b.md", "second")];
    for (name, description) in inputs {
        files.create_file(name, description).unwrap();
    }

    let listed = files.list_files(ListQuery::default());
    assert_eq!(listed.len(), inputs.len());
    for (name, description) in inputs {
        let matches: Vec<_> = listed.iter().filter(|file| file.name() == name).collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].description(), description);
        assert_eq!(matches[0].created_at().to_string(), "2024-01-01 08:00:00");
    }
}

#[test]
fn file_names_are_scoped_per_folder() {
    let clock = ManualClock::at("2024-01-01 00:00:00");
    let mut directory = setup(&clock);
    let folders = directory.get_user_mut("alice").unwrap().folders_mut();
    folders.create_folder("other", "").unwrap();

    for folder in ["docs", "other"] {
        folders
            .get_folder_mut(folder)
            .unwrap()
            .files_mut()
            .create_file("same.txt", "")
            .unwrap();
    }
    assert!(folders.get_folder("other").unwrap().files().contains("same.txt"));
}
