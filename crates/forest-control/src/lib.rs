//! Navigation state management for gridded dataset browsing
//!
//! This crate provides:
//! - Actions and a permissive reducer over a schema-less [`State`]
//! - A single-threaded [`Store`] with a composable middleware chain
//! - [`Observable`] / [`Stream`] pub-sub for views
//! - Middlewares for audit logging, coordinate inversion, next/previous
//!   navigation and cascading catalog queries
//! - The [`Catalog`] query contract and an in-memory [`StaticCatalog`]
//! - A headless view model describing the control panel
//!
//! ```text
//! View → Action → Store::dispatch → middleware chain → reduce → notify → Views
//! ```

pub mod actions;
pub mod catalog;
pub mod error;
pub mod initial_state;
pub mod middleware;
pub mod navigation;
pub mod observable;
pub mod reducer;
pub mod state;
pub mod store;
pub mod value;
pub mod view_models;
pub mod views;

pub use actions::{Action, ActionKind, Navigate, SetValue};
pub use catalog::{Catalog, CatalogRecord, StaticCatalog};
pub use error::ControlError;
pub use initial_state::initial_state;
pub use middleware::{
    ActionLog, ControlsMiddleware, InverseCoordinateMiddleware, LogMiddleware, Middleware,
    NextPreviousMiddleware,
};
pub use navigation::{next_item, previous_item};
pub use observable::{Observable, Stream, Subscribers};
pub use reducer::{reduce, Reducer};
pub use state::State;
pub use store::{Next, Store};
pub use value::Value;
pub use view_models::{ControlViewModel, SelectorModel};
pub use views::ControlView;
