//! Camera rig, its flights between bodies, immersive offset sync and mouse look.

mod immersive;
mod look;
mod transition;

use bevy::prelude::*;

pub use immersive::{immersive_enabled, ImmersiveMode, TrackedSpace, ViewerOffset};
pub use look::{mouse_look_plugin, MouseLook};
pub use transition::{
    ease_in_out_quad, transition_destination, ActiveTransition, CameraTransition,
    TransitionFinished,
};

pub(crate) use immersive::{apply_viewer_offset, sync_viewer_offset};
pub(crate) use transition::{advance_transition, begin_transition};

/// The single transform the viewer camera rides on.
#[derive(Component, Debug, Default)]
pub struct CameraRig;
