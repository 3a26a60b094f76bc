use crate::model::repository::{Folder, FolderUpdate};
use crate::repository::folder_repository::*;
use crate::test::{cleanup, refresh_db};

#[test]
fn get_all_folders_empty() {
    let con = refresh_db().open_connection().unwrap();
    let folders = get_all_folders(&con).unwrap();
    assert!(folders.is_empty());
    cleanup();
}

#[test]
fn create_folder_keeps_name_verbatim() {
    let con = refresh_db().open_connection().unwrap();
    let created = create_folder("<b>bold</b>", &con).unwrap();
    let retrieved = get_folder_by_id(created.id, &con).unwrap();
    assert_eq!(
        retrieved,
        Some(Folder {
            id: 1,
            name: "<b>bold</b>".to_string()
        })
    );
    cleanup();
}

#[test]
fn get_folder_by_id_missing_is_none() {
    let con = refresh_db().open_connection().unwrap();
    assert_eq!(get_folder_by_id(42, &con).unwrap(), None);
    cleanup();
}

#[test]
fn update_folder_without_name_changes_nothing() {
    let con = refresh_db().open_connection().unwrap();
    let created = create_folder("original", &con).unwrap();
    let changed = update_folder(created.id, &FolderUpdate::default(), &con).unwrap();
    // the row still matches, it just keeps its values
    assert_eq!(changed, 1);
    assert_eq!(get_folder_by_id(created.id, &con).unwrap(), Some(created));
    cleanup();
}

#[test]
fn update_folder_missing_returns_0() {
    let con = refresh_db().open_connection().unwrap();
    let update = FolderUpdate {
        name: Some("new".to_string()),
    };
    assert_eq!(update_folder(42, &update, &con).unwrap(), 0);
    cleanup();
}

#[test]
fn delete_folder_returns_rows_deleted() {
    let con = refresh_db().open_connection().unwrap();
    let created = create_folder("doomed", &con).unwrap();
    assert_eq!(delete_folder(created.id, &con).unwrap(), 1);
    assert_eq!(delete_folder(created.id, &con).unwrap(), 0);
    cleanup();
}

#[test]
fn create_folder_returns_ids_past_u32_max() {
    let con = refresh_db().open_connection().unwrap();
    con.execute(
        "insert into folders (id, name) values (4294967297, 'big id')",
        [],
    )
    .unwrap();
    let created = create_folder("next", &con).unwrap();
    assert_eq!(created.id, 4294967298);
    assert_eq!(get_folder_by_id(4294967298, &con).unwrap(), Some(created));
    assert_eq!(get_all_folders(&con).unwrap().len(), 2);
    cleanup();
}
