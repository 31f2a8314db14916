use thiserror::Error;

/// Failure to build a vehicle by name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("`{0}` is abstract and cannot be constructed; pick a concrete vehicle such as `car` or `boat`")]
    Abstract(String),
    #[error("unknown vehicle `{0}`")]
    Unknown(String),
}
