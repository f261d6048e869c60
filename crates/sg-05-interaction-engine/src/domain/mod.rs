pub mod collection;
pub mod factory;
