pub mod greeting;
pub mod health;

#[cfg(test)]
pub(crate) mod test_support;

pub use greeting::GreetingUseCase;
pub use health::HealthUseCase;
