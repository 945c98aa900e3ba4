use restgen::routes::Synthesis;
use restgen::watch::{reload_model, watch_model};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;
use tempfile::TempDir;

const MODEL_V1: &str = r#"
resources:
  - { name: Thing, key: thingId, segment: things }
interfaces:
  - name: Things
    mixes:
      - { template: ResourceRead, resource: Thing }
"#;

const MODEL_V2: &str = r#"
resources:
  - { name: Thing, key: thingId, segment: things }
interfaces:
  - name: Things
    mixes:
      - { template: ResourceOperations, resource: Thing }
"#;

#[test]
fn test_watch_model_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resources.yaml");
    std::fs::write(&path, MODEL_V1).unwrap();

    let initial = reload_model(&path, 1).unwrap();
    assert_eq!(initial.len(), 1);
    let table = Arc::new(RwLock::new(initial));

    let updates: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
    let updates_clone = Arc::clone(&updates);

    let watcher = watch_model(&path, Arc::clone(&table), 2, move |synthesis: &Synthesis| {
        updates_clone.lock().unwrap().push(synthesis.len());
    })
    .expect("watch_model");

    // allow watcher thread to start
    std::thread::sleep(Duration::from_millis(100));

    std::fs::write(&path, MODEL_V2).unwrap();

    for _ in 0..40 {
        if updates.lock().unwrap().contains(&5) {
            break;
        }
        std::thread::sleep(Duration::from_millis(50));
    }

    assert!(updates.lock().unwrap().contains(&5));
    assert_eq!(table.read().unwrap().len(), 5);
    drop(watcher);
}

#[test]
fn test_broken_document_keeps_previous_table() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resources.yaml");
    std::fs::write(&path, MODEL_V1).unwrap();

    let table = Arc::new(RwLock::new(reload_model(&path, 1).unwrap()));
    let watcher = watch_model(&path, Arc::clone(&table), 1, |_| {}).expect("watch_model");
    std::thread::sleep(Duration::from_millis(100));

    std::fs::write(&path, "resources: [ this is not yaml").unwrap();
    std::thread::sleep(Duration::from_millis(300));

    assert_eq!(table.read().unwrap().len(), 1);
    drop(watcher);
}
