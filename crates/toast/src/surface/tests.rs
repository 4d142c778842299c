use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::content::{ButtonModel, Icon};

fn surface(content: ToastContent) -> OverlaySurface {
	OverlaySurface::new(content, SurfaceMetrics::default())
}

#[rstest]
#[case::message_only(ToastContent::new("hello"), Size::new(64.0, 41.0))]
#[case::title_and_message(ToastContent::new("Draft stored").title("Saved"), Size::new(120.0, 58.0))]
#[case::wide_glyphs(ToastContent::new("日本"), Size::new(56.0, 41.0))]
#[case::empty_message(ToastContent::new(""), Size::new(24.0, 41.0))]
#[case::multiline_message(ToastContent::new("one\nthree"), Size::new(64.0, 58.0))]
fn fitted_size_follows_text(#[case] content: ToastContent, #[case] expected: Size) {
	assert_eq!(surface(content).fitted_size(), expected);
}

#[test]
fn icon_and_button_add_columns() {
	let content = ToastContent::new("hi")
		.icon(Icon::new("check", Size::new(20.0, 20.0)))
		.button(ButtonModel::new("Undo", |_| {}));
	// 20 icon + 16 text + 32 button + two gaps + padding on both sides
	assert_eq!(surface(content).fitted_size(), Size::new(112.0, 44.0));
}

#[test]
fn metrics_drive_fitting() {
	let metrics = SurfaceMetrics {
		padding: 0.0,
		spacing: 0.0,
		glyph_width: 1.0,
		line_height: 1.0,
		button_height: 1.0,
	};
	let surface = OverlaySurface::new(ToastContent::new("abc"), metrics);
	assert_eq!(surface.fitted_size(), Size::new(3.0, 1.0));
}

#[test]
fn elements_follow_slot_presence() {
	assert_eq!(surface(ToastContent::new("m")).elements(), vec![Element::Message]);

	let full = surface(
		ToastContent::new("m")
			.title("t")
			.icon(Icon::new("i", Size::new(1.0, 1.0)))
			.button(ButtonModel::new("b", |_| {})),
	);
	assert_eq!(
		full.elements(),
		vec![Element::Icon, Element::Title, Element::Message, Element::Button]
	);
	assert!(full.shows(Element::Button));
}

#[test]
fn missing_button_is_hidden() {
	let surface = surface(ToastContent::new("m").title("t"));
	assert!(!surface.shows(Element::Button));
	assert!(!surface.shows(Element::Icon));
	assert!(surface.shows(Element::Title));
}

#[rstest]
#[case(40.0, 14.0)]
#[case(0.0, 0.0)]
#[case(100.0, 35.0)]
fn corner_radius_scales_with_height(#[case] height: f32, #[case] expected: f32) {
	assert!((OverlaySurface::corner_radius(height) - expected).abs() < 1e-4);
}
