//! Immutable description of what a toast shows and how it reacts.
//!
//! Every optional slot on [`ToastContent`] doubles as a visibility flag: an
//! element is rendered exactly when its slot is filled.

use core::fmt;
use std::rc::Rc;

use butter_layout::Size;

use crate::handle::OverlayHandle;

/// Callback invoked with the overlay that received an interaction.
pub type OverlayCallback = Rc<dyn Fn(&OverlayHandle)>;

/// Opaque image shown beside the text.
///
/// Only the intrinsic size matters to the engine; `name` identifies the image
/// for whoever renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
	/// Renderer-specific image identifier.
	pub name: String,
	/// Intrinsic size, used when fitting the overlay.
	pub size: Size,
}

impl Icon {
	/// Creates an icon.
	pub fn new(name: impl Into<String>, size: Size) -> Self {
		Self {
			name: name.into(),
			size,
		}
	}
}

/// Action button shown at the trailing edge of a toast.
#[derive(Clone)]
pub struct ButtonModel {
	label: String,
	accessibility_label: Option<String>,
	on_activate: OverlayCallback,
}

impl ButtonModel {
	/// Creates a button that calls `on_activate` when tapped.
	pub fn new(label: impl Into<String>, on_activate: impl Fn(&OverlayHandle) + 'static) -> Self {
		Self {
			label: label.into(),
			accessibility_label: None,
			on_activate: Rc::new(on_activate),
		}
	}

	/// Sets the label announced by assistive technology.
	#[must_use]
	pub fn accessibility_label(mut self, label: impl Into<String>) -> Self {
		self.accessibility_label = Some(label.into());
		self
	}

	/// Visible button label.
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Label announced by assistive technology, if set.
	pub fn accessibility(&self) -> Option<&str> {
		self.accessibility_label.as_deref()
	}

	/// Activation callback.
	pub fn on_activate(&self) -> &OverlayCallback {
		&self.on_activate
	}
}

impl fmt::Debug for ButtonModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ButtonModel")
			.field("label", &self.label)
			.field("accessibility_label", &self.accessibility_label)
			.finish_non_exhaustive()
	}
}

/// What a toast displays.
///
/// Built once before presentation and never mutated afterwards.
#[derive(Clone)]
pub struct ToastContent {
	message: String,
	title: Option<String>,
	icon: Option<Icon>,
	message_accessibility_label: Option<String>,
	title_accessibility_label: Option<String>,
	icon_accessibility_label: Option<String>,
	button: Option<ButtonModel>,
	on_swipe: Option<OverlayCallback>,
}

impl ToastContent {
	/// Creates content with only a message.
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			title: None,
			icon: None,
			message_accessibility_label: None,
			title_accessibility_label: None,
			icon_accessibility_label: None,
			button: None,
			on_swipe: None,
		}
	}

	/// Adds a title above the message.
	#[must_use]
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Adds a leading icon.
	#[must_use]
	pub fn icon(mut self, icon: Icon) -> Self {
		self.icon = Some(icon);
		self
	}

	/// Adds an action button.
	#[must_use]
	pub fn button(mut self, button: ButtonModel) -> Self {
		self.button = Some(button);
		self
	}

	/// Sets the handler for a downward swipe.
	#[must_use]
	pub fn on_swipe(mut self, on_swipe: impl Fn(&OverlayHandle) + 'static) -> Self {
		self.on_swipe = Some(Rc::new(on_swipe));
		self
	}

	/// Sets the accessibility label of the message.
	#[must_use]
	pub fn message_accessibility_label(mut self, label: impl Into<String>) -> Self {
		self.message_accessibility_label = Some(label.into());
		self
	}

	/// Sets the accessibility label of the title.
	#[must_use]
	pub fn title_accessibility_label(mut self, label: impl Into<String>) -> Self {
		self.title_accessibility_label = Some(label.into());
		self
	}

	/// Sets the accessibility label of the icon.
	#[must_use]
	pub fn icon_accessibility_label(mut self, label: impl Into<String>) -> Self {
		self.icon_accessibility_label = Some(label.into());
		self
	}

	pub fn message(&self) -> &str {
		&self.message
	}

	pub fn title_text(&self) -> Option<&str> {
		self.title.as_deref()
	}

	pub fn icon_image(&self) -> Option<&Icon> {
		self.icon.as_ref()
	}

	pub fn button_model(&self) -> Option<&ButtonModel> {
		self.button.as_ref()
	}

	pub fn swipe_handler(&self) -> Option<&OverlayCallback> {
		self.on_swipe.as_ref()
	}

	pub fn message_accessibility(&self) -> Option<&str> {
		self.message_accessibility_label.as_deref()
	}

	pub fn title_accessibility(&self) -> Option<&str> {
		self.title_accessibility_label.as_deref()
	}

	pub fn icon_accessibility(&self) -> Option<&str> {
		self.icon_accessibility_label.as_deref()
	}
}

impl fmt::Debug for ToastContent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ToastContent")
			.field("message", &self.message)
			.field("title", &self.title)
			.field("icon", &self.icon)
			.field("button", &self.button)
			.field("on_swipe", &self.on_swipe.is_some())
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builder_fills_only_requested_slots() {
		let content = ToastContent::new("Copied")
			.title("Clipboard")
			.title_accessibility_label("Clipboard notice");

		assert_eq!(content.message(), "Copied");
		assert_eq!(content.title_text(), Some("Clipboard"));
		assert_eq!(content.title_accessibility(), Some("Clipboard notice"));
		assert!(content.icon_image().is_none());
		assert!(content.button_model().is_none());
		assert!(content.swipe_handler().is_none());
		assert!(content.message_accessibility().is_none());
	}

	#[test]
	fn button_keeps_label_and_accessibility() {
		let button = ButtonModel::new("Undo", |_| {}).accessibility_label("Undo delete");
		assert_eq!(button.label(), "Undo");
		assert_eq!(button.accessibility(), Some("Undo delete"));
	}

	#[test]
	fn debug_omits_callbacks() {
		let content = ToastContent::new("x").on_swipe(|_| {});
		let debug = format!("{content:?}");
		assert!(debug.contains("on_swipe: true"), "{debug}");
	}
}
