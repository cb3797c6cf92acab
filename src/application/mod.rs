/// Application layer: DTOs, factories, and use cases.
pub mod dto;
pub mod factories;
pub mod use_cases;
