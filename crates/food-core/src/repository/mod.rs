//! Repository Layer
//!
//! Backend access abstractions and implementations.

mod traits;
mod http_repo;
mod memory_repo;


pub use traits::FoodRepository;
pub use http_repo::HttpFoodRepository;
pub use memory_repo::MemoryFoodRepository;
