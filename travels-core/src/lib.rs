pub mod error;
pub mod mapper;
pub mod model;
pub mod predicate;
pub mod repository;
pub mod resource;
pub mod service;
pub mod validate;

pub use error::TravelsError;

pub type TravelsResult<T> = Result<T, TravelsError>;
