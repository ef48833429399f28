use fibre_registry::{resolve_from, Container, ContainerError};
use std::panic;

fn main() {
  let container = Container::new();

  // --- Using the fallible methods ---
  println!("Attempting to resolve a service that was never registered...");
  match container.resolve_service::<String>("missing_service") {
    Ok(_) => panic!("Should not have found the service!"),
    Err(error) => println!("Correctly received an error: {}", error),
  }

  match container.get_parameter::<bool>("missing_parameter") {
    Ok(_) => panic!("Should not have found the parameter!"),
    Err(error) => {
      assert_eq!(
        error,
        ContainerError::UnknownParameter("missing_parameter".to_string())
      );
      println!("Correctly received an error: {}", error);
    }
  }

  // --- Using the panicking `resolve_from!` macro ---
  println!("\nNow the same lookup through the panicking macro...");
  let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
    // This line will panic!
    let _service = resolve_from!(&container, String, "missing_service");
  }));
  assert!(result.is_err(), "resolve_from! should have panicked.");
  println!("Successfully caught the expected panic from resolve_from!.");
}
