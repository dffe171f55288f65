pub mod clock;
pub mod constants;
pub mod errors;
pub mod logger;
pub mod policy;
pub mod presentation;
pub mod types;
