#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod cart;
pub mod catalog;
pub mod paging;

mod error;

pub use cart::{CartEntry, CartKey, CartStatus, CartStore, WorkoutPayload, derive_key};
pub use catalog::{CatalogRepository, Difficulty, Equipment, Property, StaticCatalog, Workout};
pub use error::{CatalogError, PayloadError};
pub use paging::{PagedIndexController, SWIPE_THRESHOLD, ScrollCommand};
