use super::{Dummy, Handler, Storage};

#[test]
fn storage_keeps_diagnostics_in_order() {
    let storage: Storage<String> = Storage::new();

    storage.receive("first");
    storage.receive("second");

    assert_eq!(storage.as_vec().as_slice(), ["first", "second"]);
    assert_eq!(storage.into_vec(), vec!["first".to_string(), "second".to_string()]);
}

#[test]
fn dummy_accepts_anything() {
    let handler: &dyn Handler<u32> = &Dummy;
    handler.receive(42);
}
