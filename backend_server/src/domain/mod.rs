pub mod greeting;

pub use greeting::{DEFAULT_NAME, greeting_message, root_message};
