pub mod control_view;

pub use control_view::ControlView;
