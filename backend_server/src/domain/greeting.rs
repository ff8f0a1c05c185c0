// Greeting rules served by the backend API.

pub const DEFAULT_NAME: &str = "World";
const SIGNATURE: &str = "Axum";

pub fn root_message() -> String {
    format!("Hello {DEFAULT_NAME} from {SIGNATURE}!")
}

// Missing names fall back to the default; provided names are used verbatim.
pub fn greeting_message(name: Option<&str>) -> String {
    let name = name.unwrap_or(DEFAULT_NAME);
    format!("Hello, {name} from {SIGNATURE}!")
}
