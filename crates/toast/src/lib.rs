//! Animated toast overlays for a host surface.
//!
//! A toast is presented into a [`Host`] by [`Toaster::present`]: the overlay
//! is attached below the host's bottom edge, then slid into view by animating
//! a single anchor constraint. It leaves the same way through
//! [`Toaster::dismiss`], either on request or after an auto-dismiss delay,
//! and is detached from the host once its exit transition completes.
//!
//! All work runs on a [`UiLoop`], a serial single-threaded context that owns
//! animation frames and one-shot timers. Whoever renders the host advances the
//! loop, typically once per frame.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! use butter::{AutoDismiss, PresentationBehavior, Size, Stage, ToastContent, Toaster, UiLoop};
//!
//! let ui = UiLoop::new();
//! let host = Rc::new(RefCell::new(Stage::new(Size::new(320.0, 480.0))));
//! let toaster = Toaster::default();
//!
//! let handle = toaster.present(
//!     &ui,
//!     ToastContent::new("Saved").title("Draft"),
//!     PresentationBehavior::fit_content(),
//!     &host,
//!     Some(AutoDismiss::after(Duration::from_secs(2))),
//! );
//! assert_eq!(host.borrow().child_count(), 1);
//!
//! ui.run_frames(Duration::from_secs(5), Duration::from_millis(16));
//! assert_eq!(host.borrow().child_count(), 0);
//! assert!(handle.is_dismissed());
//! ```

/// Presentation and dismissal behaviour descriptors.
pub mod behavior;
/// Engine configuration and its TOML loader.
pub mod config;
/// What a toast displays.
pub mod content;
/// Engine errors.
pub mod error;
/// Live overlay handles.
pub mod handle;
/// Host surfaces overlays are attached to.
pub mod host;
/// Transition target resolution.
pub mod placement;
/// Interaction routing from the overlay to content callbacks.
pub mod router;
/// Passive overlay renderer model: fitting and element visibility.
pub mod surface;
/// The presentation/dismissal engine.
pub mod toaster;
/// Serial UI execution context.
pub mod ui_loop;

pub use butter_layout::{Attribute, Rect, Size};
pub use behavior::{
	AnimationDirection, AnimationType, AutoDismiss, DismissalBehavior, PresentationBehavior,
	SizingStyle,
};
pub use config::{ConfigError, SurfaceMetrics, ToasterConfig, TransitionTiming};
pub use content::{ButtonModel, Icon, OverlayCallback, ToastContent};
pub use error::ToastError;
pub use handle::{OverlayHandle, OverlayId, OverlayPhase};
pub use host::{Host, Stage};
pub use placement::{Placement, resolve};
pub use router::{CallbackRouter, InteractionDelegate};
pub use surface::{Element, OverlaySurface, SwipeDirection};
pub use toaster::Toaster;
pub use ui_loop::{TimerId, UiLoop, WeakUiLoop};
