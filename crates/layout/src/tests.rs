use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

const HOST: Rect = Rect::new(0.0, 0.0, 300.0, 300.0);

#[test]
fn rect_edges() {
	let rect = Rect::new(10.0, 5.0, 30.0, 20.0);
	assert_eq!(rect.bottom(), 25.0);
	assert_eq!(rect.center_x(), 25.0);
	assert_eq!(Rect::from_size(Size::new(4.0, 2.0)), Rect::new(0.0, 0.0, 4.0, 2.0));
	assert_eq!(Size::new(64.0, 41.0).to_string(), "64x41");
}

#[rstest]
#[case::bottom(HostAnchor::Bottom, HOST, 300.0)]
#[case::center_x(HostAnchor::CenterX, HOST, 150.0)]
#[case::offset_bottom(HostAnchor::Bottom, Rect::new(10.0, 20.0, 300.0, 300.0), 320.0)]
#[case::offset_center_x(HostAnchor::CenterX, Rect::new(10.0, 20.0, 300.0, 300.0), 160.0)]
fn host_anchor_positions(#[case] anchor: HostAnchor, #[case] host: Rect, #[case] expected: f32) {
	assert_eq!(anchor.position_in(host), expected);
}

#[test]
fn activate_replaces_same_attribute() {
	let mut set = ConstraintSet::new();
	assert!(set.is_empty());
	set.activate(Constraint::to_host(Attribute::Top, HostAnchor::Bottom, 10.0));
	set.activate(Constraint::to_host(Attribute::Top, HostAnchor::Bottom, -20.0));
	assert_eq!(set.len(), 1);
	assert_eq!(set.find(Attribute::Top).map(|c| c.constant), Some(-20.0));
}

#[test]
fn deactivate_removes_only_that_attribute() {
	let mut set = ConstraintSet::new();
	set.activate(Constraint::to_host(Attribute::Top, HostAnchor::Bottom, 10.0));
	set.activate(Constraint::to_host(Attribute::CenterX, HostAnchor::CenterX, 0.0));
	let removed = set.deactivate(Attribute::Top);
	assert_eq!(removed.map(|c| c.attribute), Some(Attribute::Top));
	assert!(set.find(Attribute::Top).is_none());
	assert!(set.find(Attribute::CenterX).is_some());
	assert!(set.deactivate(Attribute::Top).is_none());
}

#[test]
fn unconstrained_overlay_sits_on_host_origin_at_fitted_size() {
	let host = Rect::new(5.0, 7.0, 300.0, 300.0);
	let frame = ConstraintSet::new().resolve(host, Size::new(80.0, 40.0));
	assert_eq!(frame, Rect::new(5.0, 7.0, 80.0, 40.0));
}

#[test]
fn centered_overlay_hanging_below_host() {
	let mut set = ConstraintSet::new();
	set.activate(Constraint::to_host(Attribute::CenterX, HostAnchor::CenterX, 0.0));
	set.activate(Constraint::to_host(Attribute::Top, HostAnchor::Bottom, 40.0));
	let frame = set.resolve(HOST, Size::new(100.0, 40.0));
	assert_eq!(frame, Rect::new(100.0, 340.0, 100.0, 40.0));
	assert!(frame.y >= HOST.bottom());
}

#[test]
fn fixed_width_overrides_fitted_width() {
	let mut set = ConstraintSet::new();
	set.activate(Constraint::to_host(Attribute::CenterX, HostAnchor::CenterX, 0.0));
	set.activate(Constraint::fixed(Attribute::Width, 260.0));
	let frame = set.resolve(HOST, Size::new(100.0, 40.0));
	assert_eq!(frame.width, 260.0);
	assert_eq!(frame.x, 20.0);
}

#[test]
fn negative_width_is_clamped() {
	let mut set = ConstraintSet::new();
	set.activate(Constraint::fixed(Attribute::Width, -5.0));
	assert_eq!(set.resolve(HOST, Size::new(10.0, 10.0)).width, 0.0);
}
