//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! command surface and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing the economy rules and validation
//! - **Orchestration**: Coordinating repository calls
//! - **Domain Models**: Working with domain models rather than entity models

pub mod economy;
pub mod points;
