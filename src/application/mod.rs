/// Application layer - Use cases, DTOs and read models
///
/// This layer orchestrates domain services and talks to infrastructure
/// only through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
