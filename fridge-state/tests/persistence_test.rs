//! Cross-container persistence integration tests over a real directory store.

use std::sync::Arc;

use fridge_state::{
    keys, DirStore, FamilyDirectory, FridgeBoard, FridgeStatus, KeyValueStore, NewFridgeItem,
    Rituals, Storage,
};

fn storage_at(dir: &std::path::Path) -> Storage {
    Storage::new(Arc::new(DirStore::open(dir).expect("store opens")))
}

#[test]
fn containers_share_one_namespace_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_at(dir.path());

    let mut board = FridgeBoard::new(storage.clone());
    let item_id = board.add_item(NewFridgeItem::note("first note", "dad"));
    board.update_status(&item_id, FridgeStatus::Rotation).unwrap();

    let mut rituals = Rituals::new(storage.clone());
    rituals.pass_spotlight("", "dad".into(), "seed".into()).unwrap();

    // every slice landed as its own namespaced key
    let store = DirStore::open(dir.path()).unwrap();
    let mut written = store.keys();
    written.sort();
    assert!(written.contains(&format!("family-fridge:{}", keys::FRIDGE)));
    assert!(written.contains(&format!("family-fridge:{}", keys::SPOTLIGHT)));

    // a fresh process sees both containers' state
    let reopened = storage_at(dir.path());
    let mut board = FridgeBoard::new(reopened.clone());
    board.hydrate();
    assert_eq!(board.rotation().len(), 1);

    let mut rituals = Rituals::new(reopened);
    rituals.hydrate();
    assert_eq!(rituals.spotlight().current_holder, "dad");
}

#[test]
fn corrupt_slice_degrades_to_defaults_without_touching_others() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_at(dir.path());

    let mut board = FridgeBoard::new(storage.clone());
    board.add_item(NewFridgeItem::note("survives", "mom"));

    // clobber the roster slice with garbage
    let store = DirStore::open(dir.path()).unwrap();
    store
        .put(&format!("family-fridge:{}", keys::FAMILY), "{broken".to_string())
        .unwrap();

    let reopened = storage_at(dir.path());
    let mut directory = FamilyDirectory::new(reopened.clone());
    directory.hydrate();
    assert!(directory.members().is_empty());

    let mut board = FridgeBoard::new(reopened);
    board.hydrate();
    assert_eq!(board.items().len(), 1);
}

#[test]
fn clear_all_leaves_foreign_files_alone() {
    let dir = tempfile::tempdir().unwrap();
    let store = DirStore::open(dir.path()).unwrap();
    store.put("other-app:notes", "keep me".to_string()).unwrap();

    let storage = storage_at(dir.path());
    let mut board = FridgeBoard::new(storage.clone());
    board.add_item(NewFridgeItem::note("gone after clear", "dad"));

    storage.clear_all();

    let reopened = DirStore::open(dir.path()).unwrap();
    assert_eq!(reopened.get("other-app:notes"), Some("keep me".to_string()));
    assert!(reopened.get(&format!("family-fridge:{}", keys::FRIDGE)).is_none());
}
