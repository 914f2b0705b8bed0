use vfs_core::{NodeKind, StoreError, UserDirectory, MAX_USERNAME_LEN};

#[test]
fn register_twice_fails_already_exists() {
    let mut directory = UserDirectory::new();
    directory.register_user("alice").unwrap();

    let err = directory.register_user("alice").unwrap_err();
    assert_eq!(
        err,
        StoreError::AlreadyExists {
            kind: NodeKind::User,
            name: "alice".to_string(),
        }
    );
    assert_eq!(directory.len(), 1);
}

#[test]
fn register_rejects_invalid_names() {
    let mut directory = UserDirectory::new();
    for name in ["", "test user", "test@user", "a/b"] {
        let err = directory.register_user(name).unwrap_err();
        assert!(
            matches!(err, StoreError::InvalidName { kind: NodeKind::User, .. }),
            "{name:?} gave {err:?}"
        );
    }
    assert!(directory.is_empty());
}

#[test]
fn register_accepts_quoted_name_with_space() {
    let mut directory = UserDirectory::new();
    directory.register_user("\"test user\"").unwrap();
    assert!(directory.get_user("\"test user\"").is_ok());
}

#[test]
fn register_rejects_names_over_username_ceiling() {
    let mut directory = UserDirectory::new();
    let err = directory
        .register_user("averylongusernamethatexceedsthemaximumlength")
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::TooLong {
            kind: NodeKind::User,
            name: "averylongusernamethatexceedsthemaximumlength".to_string(),
            max: MAX_USERNAME_LEN,
        }
    );
    assert_eq!(
        err.to_string(),
        "user name is too long, max length allowed is 25"
    );
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    let mut directory = UserDirectory::new();
    directory.register_user("alice").unwrap();

    let err = directory.get_user("Alice").unwrap_err();
    assert!(matches!(err, StoreError::NotFound { kind: NodeKind::User, .. }));
    assert!(directory.get_user_mut("ghost").is_err());
}

#[test]
fn mutable_handle_writes_through_to_directory() {
    let mut directory = UserDirectory::new();
    directory.register_user("alice").unwrap();

    directory
        .get_user_mut("alice")
        .unwrap()
        .folders_mut()
        .create_folder("docs", "")
        .unwrap();

    assert!(directory
        .get_user("alice")
        .unwrap()
        .folders()
        .contains("docs"));
}

#[test]
fn usernames_are_sorted() {
    let mut directory = UserDirectory::new();
    for name in ["carol", "alice", "bob"] {
        directory.register_user(name).unwrap();
    }
    assert_eq!(directory.usernames(), vec!["alice", "bob", "carol"]);
}

#[test]
fn directories_are_isolated() {
    let mut first = UserDirectory::new();
    let second = UserDirectory::new();
    first.register_user("alice").unwrap();
    assert!(second.get_user("alice").is_err());
}
