pub mod chain_validator;
pub mod types;
pub mod anchor;
pub mod evaluate;
pub mod verdict;
pub mod navigation;
pub mod session;
pub mod error;
