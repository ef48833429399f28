use fibre_registry::{resolve_from, Container};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

// A simple service that gets a unique ID upon creation.
struct RequestTracker {
  id: usize,
}

// A global, thread-safe counter to generate unique IDs.
static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn main() {
  let container = Container::new();

  // Both services share one factory shape; only the persistence flag differs.
  container.register_service("fresh_tracker", |_: &Container| {
    println!("Creating NON-PERSISTENT RequestTracker...");
    RequestTracker {
      id: ID_COUNTER.fetch_add(1, Ordering::SeqCst),
    }
  });
  container.register_service("cached_tracker", |_: &Container| {
    println!("Creating PERSISTENT RequestTracker...");
    RequestTracker {
      id: ID_COUNTER.fetch_add(1, Ordering::SeqCst),
    }
  });

  // Persistence is opted into after registration.
  container.set_service_persistent("cached_tracker", true).unwrap();

  println!("--- Resolving the non-persistent service ---");
  let f1 = resolve_from!(&container, RequestTracker, "fresh_tracker");
  let f2 = resolve_from!(&container, RequestTracker, "fresh_tracker");
  println!("Fresh 1 ID: {}, Fresh 2 ID: {}", f1.id, f2.id);
  assert!(
    !Arc::ptr_eq(&f1, &f2),
    "Non-persistent resolutions should be distinct"
  );
  println!("Non-persistent resolutions are different instances, as expected.\n");

  println!("--- Resolving the persistent service ---");
  let c1 = resolve_from!(&container, RequestTracker, "cached_tracker");
  let c2 = resolve_from!(&container, RequestTracker, "cached_tracker");
  println!("Cached 1 ID: {}, Cached 2 ID: {}", c1.id, c2.id);
  assert!(
    Arc::ptr_eq(&c1, &c2),
    "Persistent resolutions should be identical"
  );
  println!("Persistent resolutions are the same instance, as expected.");
}
