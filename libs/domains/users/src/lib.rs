//! Users Domain
//!
//! Admin-gated listing of every registered user.
//!
//! # Features
//!
//! - Requester lookup and administrator check
//! - Projection of stored records to a public view (no password hash, no admin flag)
//! - Failures returned as values, never panics
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Use case   │  ← Authorization check, projection
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Directory  │  ← Read access to user records (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Records, public views, requests
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{InMemoryUserDirectory, ListAllUsersRequest, ListAllUsersUseCase};
//!
//! # async fn example() {
//! let directory = InMemoryUserDirectory::new();
//! let use_case = ListAllUsersUseCase::new(directory);
//!
//! match use_case.execute(ListAllUsersRequest::new("admin-id")).await {
//!     Ok(users) => println!("{} users", users.len()),
//!     Err(err) => eprintln!("{err}"),
//! }
//! # }
//! ```

pub mod error;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{DirectoryError, DirectoryResult, ListAllUsersError, ListAllUsersResult};
pub use models::{ListAllUsersRequest, PublicUserView, User};
pub use repository::{InMemoryUserDirectory, UserDirectory};
pub use service::ListAllUsersUseCase;
