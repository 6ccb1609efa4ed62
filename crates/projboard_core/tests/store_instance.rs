use projboard_core::ProjectStore;
use std::sync::{Arc, Mutex};

// Single test: the lifecycle assertions depend on nothing else in this
// binary touching the shared instance first.
#[test]
fn shared_instance_is_lazy_and_identity_stable() {
    assert!(!ProjectStore::is_instance_initialized());

    let first = ProjectStore::instance();
    assert!(ProjectStore::is_instance_initialized());
    let second = ProjectStore::instance();
    assert!(std::ptr::eq(first, second));

    let received = Arc::new(Mutex::new(0usize));
    {
        let received = Arc::clone(&received);
        first.add_listener(move |snapshot| *received.lock().unwrap() = snapshot.len());
    }
    second.add_project("A", "desc", 2);

    assert_eq!(*received.lock().unwrap(), 1);
    assert_eq!(ProjectStore::instance().len(), 1);
}
