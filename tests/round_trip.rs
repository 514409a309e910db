//! Persistence round-trip tests: every list the ops can produce must
//! survive a save/load cycle unchanged.

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use slate::io::store_io::{load_tasks, save_tasks};
use slate::model::task::TaskItem;
use slate::ops::list_ops;

#[test]
fn fresh_list_round_trips() {
    let dir = TempDir::new().unwrap();
    let mut tasks = Vec::new();
    list_ops::add_task(&mut tasks, "Buy milk").unwrap();
    list_ops::add_task(&mut tasks, "Walk dog").unwrap();

    save_tasks(dir.path(), &tasks).unwrap();
    assert_eq!(load_tasks(dir.path()), tasks);
}

#[test]
fn toggled_and_reordered_list_round_trips() {
    let dir = TempDir::new().unwrap();
    let mut tasks = Vec::new();
    for t in ["a", "b", "c"] {
        list_ops::add_task(&mut tasks, t).unwrap();
    }
    list_ops::toggle_task(&mut tasks, 1).unwrap();
    list_ops::apply_order(&mut tasks, &[2, 0, 1]).unwrap();

    save_tasks(dir.path(), &tasks).unwrap();
    let loaded = load_tasks(dir.path());
    assert_eq!(loaded, tasks);

    let texts: Vec<&str> = loaded.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["c", "a", "b"]);
    assert!(loaded[2].completed);
}

#[test]
fn deletions_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut tasks = Vec::new();
    for t in ["a", "b", "c"] {
        list_ops::add_task(&mut tasks, t).unwrap();
    }
    list_ops::delete_task(&mut tasks, 0).unwrap();

    save_tasks(dir.path(), &tasks).unwrap();
    assert_eq!(load_tasks(dir.path()), tasks);
    assert_eq!(load_tasks(dir.path()).len(), 2);
}

#[test]
fn unicode_text_round_trips() {
    let dir = TempDir::new().unwrap();
    let mut tasks = Vec::new();
    list_ops::add_task(&mut tasks, "café ☕ 買い物 👨\u{200D}👩\u{200D}👧").unwrap();

    save_tasks(dir.path(), &tasks).unwrap();
    assert_eq!(load_tasks(dir.path()), tasks);
}

#[test]
fn repeated_saves_keep_last_state() {
    let dir = TempDir::new().unwrap();
    let mut tasks = vec![TaskItem::new("seed")];
    save_tasks(dir.path(), &tasks).unwrap();

    for i in 0..10 {
        list_ops::add_task(&mut tasks, &format!("task {i}")).unwrap();
        save_tasks(dir.path(), &tasks).unwrap();
    }
    assert_eq!(load_tasks(dir.path()), tasks);
    assert_eq!(load_tasks(dir.path()).len(), 11);
}
