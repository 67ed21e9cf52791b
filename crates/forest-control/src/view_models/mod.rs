pub mod control_view_model;

pub use control_view_model::{ControlViewModel, SelectorModel};
