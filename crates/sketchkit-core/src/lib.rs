//! # SketchKit Core
//!
//! Core types shared by the SketchKit crates.
//! Provides the error taxonomy used by the scene engine and its
//! persistence layer, and the identifier type every drawing object carries.

pub mod error;
pub mod id;

pub use error::{Error, PersistenceError, Result, SceneError};
pub use id::ObjectId;
