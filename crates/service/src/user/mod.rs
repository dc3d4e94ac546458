pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{RegisterUserInput, UpdateUserInput, UserDto};
pub use repository::{SeaOrmUserRepository, UserRepository};
pub use service::UserService;
