pub mod ports;
pub mod services;
pub mod shared;
pub mod use_cases;
