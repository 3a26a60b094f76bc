use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::model::repository::{Folder, FolderUpdate};

/// returns every folder in the database, in the order they were created
pub fn get_all_folders(con: &Connection) -> Result<Vec<Folder>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folder/get_all_folders.sql"
    ))?;
    let rows = pst.query_map([], map_folder)?;
    let mut folders = Vec::<Folder>::new();
    for folder in rows {
        folders.push(folder?);
    }
    Ok(folders)
}

/// returns `None` if no folder has the passed id
pub fn get_folder_by_id(id: i64, con: &Connection) -> Result<Option<Folder>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folder/get_folder_by_id.sql"
    ))?;
    pst.query_row(params![id], map_folder).optional()
}

/// creates a folder record in the database and returns it with its new id.
/// The name is saved as-is
pub fn create_folder(name: &str, con: &Connection) -> Result<Folder, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folder/create_folder.sql"))?;
    let id = pst.insert(params![name])?;
    Ok(Folder {
        id,
        name: name.to_string(),
    })
}

/// only sets the fields of `update` that are `Some`. Returns the number of rows changed,
/// which will be 0 if the folder doesn't exist
pub fn update_folder(
    id: i64,
    update: &FolderUpdate,
    con: &Connection,
) -> Result<usize, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folder/update_folder.sql"))?;
    pst.execute(params![update.name, id])
}

/// returns the number of rows deleted. Notes in the folder are removed by the database
pub fn delete_folder(id: i64, con: &Connection) -> Result<usize, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folder/delete_folder.sql"))?;
    pst.execute(params![id])
}

fn map_folder(row: &Row) -> Result<Folder, rusqlite::Error> {
    Ok(Folder {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
