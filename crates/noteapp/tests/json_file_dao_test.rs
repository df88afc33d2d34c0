use noteapp::dao::fs::{JsonFileDao, NOTES_FILENAME};
use noteapp::dao::NoteDao;
use noteapp::error::NoteError;
use noteapp::model::Note;
use std::fs;
use tempfile::TempDir;
use uuid::Uuid;

fn setup() -> (TempDir, JsonFileDao) {
    let dir = TempDir::new().unwrap();
    let dao = JsonFileDao::new(dir.path().join("data"));
    (dir, dao)
}

#[test]
fn test_missing_file_reads_as_empty_table() {
    let (_dir, dao) = setup();
    assert!(dao.get_all().unwrap().is_empty());
    assert!(!dao.notes_path().exists());
}

#[test]
fn test_insert_creates_directory_and_file() {
    let (_dir, mut dao) = setup();
    let note = Note::new("Groceries", "Milk and eggs");

    dao.insert(&note).unwrap();

    assert!(dao.notes_path().exists());
    assert_eq!(dao.get_by_id(&note.id).unwrap(), note);
}

#[test]
fn test_rows_keep_insertion_order() {
    let (_dir, mut dao) = setup();
    let notes: Vec<Note> = ["One", "Two", "Three"]
        .iter()
        .map(|t| Note::new(*t, "body"))
        .collect();
    for note in &notes {
        dao.insert(note).unwrap();
    }

    assert_eq!(dao.get_all().unwrap(), notes);
}

#[test]
fn test_upsert_replaces_in_place() {
    let (_dir, mut dao) = setup();
    let first = Note::new("First", "one");
    let second = Note::new("Second", "two");
    dao.insert(&first).unwrap();
    dao.insert(&second).unwrap();

    let mut changed = first.clone();
    changed.title = "Renamed".to_string();
    dao.update(&changed).unwrap();

    let rows = dao.get_all().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].title, "Renamed");
    assert_eq!(rows[1], second);
}

#[test]
fn test_get_by_id_not_found() {
    let (_dir, dao) = setup();
    let id = Uuid::new_v4();
    match dao.get_by_id(&id) {
        Err(NoteError::NoteNotFound(err_id)) => assert_eq!(err_id, id),
        other => panic!("Expected NoteNotFound, got {:?}", other),
    }
}

#[test]
fn test_delete_one_and_missing_row() {
    let (_dir, mut dao) = setup();
    let keep = Note::new("Keep", "me");
    let drop_me = Note::new("Drop", "me");
    dao.insert(&keep).unwrap();
    dao.insert(&drop_me).unwrap();

    dao.delete_one(&drop_me).unwrap();
    dao.delete_one(&drop_me).unwrap();

    assert_eq!(dao.get_all().unwrap(), vec![keep]);
}

#[test]
fn test_delete_all_leaves_an_empty_table_file() {
    let (_dir, mut dao) = setup();
    dao.insert(&Note::new("A", "a")).unwrap();

    dao.delete_all().unwrap();

    assert!(dao.notes_path().exists());
    assert!(dao.get_all().unwrap().is_empty());
}

#[test]
fn test_no_tmp_files_left_behind() {
    let (_dir, mut dao) = setup();
    dao.insert(&Note::new("Atomic", "write")).unwrap();

    for entry in fs::read_dir(dao.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_failed_rename_removes_tmp_file() {
    let (_dir, mut dao) = setup();
    // A directory where the table should go makes the rename fail
    fs::create_dir_all(dao.notes_path()).unwrap();

    assert!(matches!(dao.delete_all(), Err(NoteError::Io(_))));

    for entry in fs::read_dir(dao.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_corrupt_file_is_a_serialization_error() {
    let (_dir, dao) = setup();
    fs::create_dir_all(dao.root()).unwrap();
    fs::write(dao.root().join(NOTES_FILENAME), "not json").unwrap();

    assert!(matches!(dao.get_all(), Err(NoteError::Serialization(_))));
}

#[test]
fn test_blank_file_reads_as_empty_table() {
    let (_dir, dao) = setup();
    fs::create_dir_all(dao.root()).unwrap();
    fs::write(dao.root().join(NOTES_FILENAME), "  \n").unwrap();

    assert!(dao.get_all().unwrap().is_empty());
}
