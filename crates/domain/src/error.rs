use crate::{Difficulty, Equipment, Property};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PayloadError {
    #[error("{0} is missing")]
    MissingField(&'static str),
    #[error("{field} must be {max} characters or fewer ({len} > {max})")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("no catalog for {} / {}", .0.name(), .1.name())]
    NotFound(Equipment, Difficulty),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}
