use fibre_registry::Container;
use std::sync::atomic::{AtomicUsize, Ordering};

static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn main() {
  let container = Container::new();

  // Parameters are plain configuration values; factories read them at
  // resolution time, so changing a parameter changes later resolutions.
  container.set_parameter("prefix", String::from("req-"));
  container.register_service("request_id", |c: &Container| {
    let prefix = c.get_parameter::<String>("prefix").unwrap();
    format!("{}{}", prefix, ID_COUNTER.fetch_add(1, Ordering::SeqCst))
  });

  let first = container.resolve_service::<String>("request_id").unwrap();
  let second = container.resolve_service::<String>("request_id").unwrap();
  println!("Generated ids: {} and {}", first, second);
  assert_ne!(*first, *second);

  container.set_parameter("prefix", String::from("job-"));
  let third = container.resolve_service::<String>("request_id").unwrap();
  println!("After reconfiguring the prefix: {}", third);
  assert!(third.starts_with("job-"));

  // Once the service is persistent, the next resolution settles the value.
  container.set_service_persistent("request_id", true).unwrap();
  let settled = container.resolve_service::<String>("request_id").unwrap();
  let again = container.resolve_service::<String>("request_id").unwrap();
  println!("Settled id: {} (resolved twice)", settled);
  assert_eq!(*settled, *again);
}
