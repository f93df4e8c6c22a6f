mod action;
mod button;
mod colors;
mod control;
mod hit;
mod layout;
mod scene;
mod state;
mod widget;

pub use action::ActionHandler;
pub use button::Button;
pub use colors::StateColors;
pub use control::{Control, Interaction};
pub use hit::{Bounds, HitTest};
pub use layout::{LayoutHints, SizeType, SizeUnit};
pub use scene::{Scene, SceneError};
pub use state::ControlState;
pub use widget::Widget;

pub use glam::Vec2;
pub use taffy::{self, NodeId};
