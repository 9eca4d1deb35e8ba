//! Page components for the Valentine greeting.

mod greeting;

pub use greeting::Greeting;
