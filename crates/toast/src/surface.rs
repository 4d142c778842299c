//! Passive overlay model: what is shown, how big it wants to be, and where
//! interactions go.

use core::fmt;

use butter_layout::Size;
use unicode_width::UnicodeWidthStr;

use crate::config::SurfaceMetrics;
use crate::content::ToastContent;
use crate::handle::OverlayHandle;
use crate::router::{CallbackRouter, InteractionDelegate};

/// Ratio of the corner diameter to the overlay height.
const CORNER_RATIO: f32 = 0.70;

/// A visible part of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
	Icon,
	Title,
	Message,
	Button,
}

/// Direction of a swipe gesture on the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
	Up,
	Down,
	Left,
	Right,
}

/// The rendering side of an overlay.
///
/// Holds the content, its fitted size under the smallest possible sizing,
/// and the delegate interactions are routed through. The surface never moves
/// itself; placement belongs to the constraints on its [`OverlayHandle`].
pub struct OverlaySurface {
	content: ToastContent,
	fitted: Size,
	delegate: Box<dyn InteractionDelegate>,
}

impl OverlaySurface {
	/// Creates a surface that routes interactions to the content's callbacks.
	pub fn new(content: ToastContent, metrics: SurfaceMetrics) -> Self {
		let router = CallbackRouter::for_content(&content);
		Self::with_delegate(content, metrics, router)
	}

	/// Creates a surface with a custom interaction delegate.
	pub fn with_delegate(content: ToastContent, metrics: SurfaceMetrics, delegate: impl InteractionDelegate + 'static) -> Self {
		let fitted = fit(&content, &metrics);
		Self {
			content,
			fitted,
			delegate: Box::new(delegate),
		}
	}

	pub fn content(&self) -> &ToastContent {
		&self.content
	}

	/// Smallest size that shows every rendered element.
	pub fn fitted_size(&self) -> Size {
		self.fitted
	}

	/// Rendered elements in leading-to-trailing, top-to-bottom order.
	pub fn elements(&self) -> Vec<Element> {
		let content = &self.content;
		let mut elements = Vec::with_capacity(4);
		if content.icon_image().is_some() {
			elements.push(Element::Icon);
		}
		if content.title_text().is_some() {
			elements.push(Element::Title);
		}
		elements.push(Element::Message);
		if content.button_model().is_some() {
			elements.push(Element::Button);
		}
		elements
	}

	/// Whether `element` is rendered.
	pub fn shows(&self, element: Element) -> bool {
		match element {
			Element::Icon => self.content.icon_image().is_some(),
			Element::Title => self.content.title_text().is_some(),
			Element::Message => true,
			Element::Button => self.content.button_model().is_some(),
		}
	}

	/// Corner radius for a frame of the given height.
	pub fn corner_radius(frame_height: f32) -> f32 {
		frame_height * CORNER_RATIO / 2.0
	}

	/// Forwards a button tap. Ignored when no button is rendered.
	pub(crate) fn button_tapped(&self, overlay: &OverlayHandle) -> bool {
		if !self.shows(Element::Button) {
			return false;
		}
		self.delegate.button_activated(overlay);
		true
	}

	/// Forwards a swipe. Only a downward swipe on content with a swipe
	/// handler is recognised.
	pub(crate) fn swiped(&self, overlay: &OverlayHandle, direction: SwipeDirection) -> bool {
		if direction != SwipeDirection::Down || self.content.swipe_handler().is_none() {
			return false;
		}
		self.delegate.swipe_detected(overlay);
		true
	}
}

impl fmt::Debug for OverlaySurface {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OverlaySurface")
			.field("content", &self.content)
			.field("fitted", &self.fitted)
			.finish_non_exhaustive()
	}
}

/// Measures content laid out as `[icon] [title / message] [button]` inside
/// the padding, with `spacing` between neighbouring columns.
fn fit(content: &ToastContent, metrics: &SurfaceMetrics) -> Size {
	let mut columns: Vec<Size> = Vec::with_capacity(3);

	if let Some(icon) = content.icon_image() {
		columns.push(icon.size);
	}

	// Empty text still occupies a line.
	let title = content.title_text();
	let title_lines = title.map_or(0, |t| t.lines().count().max(1));
	let message_lines = content.message().lines().count().max(1);
	let text_columns = title
		.into_iter()
		.chain([content.message()])
		.flat_map(str::lines)
		.map(UnicodeWidthStr::width)
		.max()
		.unwrap_or(0);
	columns.push(Size::new(
		text_columns as f32 * metrics.glyph_width,
		(title_lines + message_lines) as f32 * metrics.line_height,
	));

	if let Some(button) = content.button_model() {
		columns.push(Size::new(
			button.label().width() as f32 * metrics.glyph_width,
			metrics.button_height,
		));
	}

	let gaps = columns.len().saturating_sub(1) as f32 * metrics.spacing;
	let width = columns.iter().map(|c| c.width).sum::<f32>() + gaps + 2.0 * metrics.padding;
	let height = columns.iter().map(|c| c.height).fold(0.0, f32::max) + 2.0 * metrics.padding;
	Size::new(width, height)
}

#[cfg(test)]
mod tests;
