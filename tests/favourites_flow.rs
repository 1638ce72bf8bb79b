// End-to-end favourites flow against a real on-disk database
use flathunt_lib::state::{
    add_favourite, list_favourites, open_at, remove_favourite, FavouriteHome, StoreError,
};
use serde_json::{Map, Value};

fn home(id: i64, name: &str) -> FavouriteHome {
    let mut details = Map::new();
    details.insert("name".to_string(), Value::String(name.to_string()));
    FavouriteHome { id, details }
}

#[test]
fn favourite_then_unfavourite_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let db = open_at(&dir.path().join("flathunt.db")).unwrap();
    assert!(db.is_ready());

    // Fresh store starts empty
    assert!(list_favourites(&db).unwrap().is_empty());

    // Add {id: 1, name: "Flat A"} and read it back
    let flat_a = home(1, "Flat A");
    add_favourite(&db, &flat_a).unwrap();
    assert_eq!(list_favourites(&db).unwrap(), vec![flat_a]);

    // Remove it and the list is empty again
    assert!(remove_favourite(&db, 1).unwrap());
    assert!(list_favourites(&db).unwrap().is_empty());
}

#[test]
fn duplicate_favourite_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let db = open_at(&dir.path().join("flathunt.db")).unwrap();

    add_favourite(&db, &home(1, "Flat A")).unwrap();
    let err = add_favourite(&db, &home(1, "Flat A")).unwrap_err();
    assert!(matches!(err, StoreError::AlreadyFavourite { id: 1 }));

    assert_eq!(list_favourites(&db).unwrap().len(), 1);
}

#[test]
fn favourites_survive_a_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flathunt.db");

    {
        let db = open_at(&path).unwrap();
        add_favourite(&db, &home(7, "Loft on Main")).unwrap();
    }

    // Second open runs against the existing schema version
    let db = open_at(&path).unwrap();
    let homes = list_favourites(&db).unwrap();
    assert_eq!(homes.len(), 1);
    assert_eq!(homes[0].id, 7);
    assert_eq!(homes[0].details["name"], "Loft on Main");
}
