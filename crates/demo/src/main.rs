//! Headless toast demo.
//!
//! Presents one toast into an in-memory stage, drives the UI loop in real
//! time and logs the overlay's frame on every tick until nothing is left to
//! animate.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use butter::{
	AutoDismiss, ButtonModel, DismissalBehavior, Icon, PresentationBehavior, Size, SizingStyle, Stage, ToastContent, ToastError,
	Toaster, ToasterConfig, UiLoop,
};
use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};

/// Demo command line arguments.
#[derive(Parser, Debug)]
#[command(name = "butter-demo")]
#[command(about = "Present a toast into a headless stage and log its frames")]
struct Args {
	/// Toast message
	#[arg(short, long, default_value = "Changes saved")]
	message: String,

	/// Title shown above the message
	#[arg(short, long)]
	title: Option<String>,

	/// Label of an action button that dismisses the toast
	#[arg(short, long, value_name = "LABEL")]
	button: Option<String>,

	/// Name of a leading icon
	#[arg(long, value_name = "NAME")]
	icon: Option<String>,

	/// Horizontal sizing
	#[arg(long, value_enum, default_value_t = Fit::Host)]
	fit: Fit,

	/// Dismiss automatically this many seconds after presentation
	#[arg(short, long, value_name = "SECS")]
	auto_dismiss: Option<f32>,

	/// Seconds a toast without auto-dismiss stays up before the demo dismisses it
	#[arg(long, value_name = "SECS", default_value_t = 1.0)]
	hold: f32,

	/// Simulate a button tap this many seconds after start
	#[arg(long, value_name = "SECS")]
	tap: Option<f32>,

	/// Stage width
	#[arg(long, default_value_t = 375.0)]
	width: f32,

	/// Stage height
	#[arg(long, default_value_t = 667.0)]
	height: f32,

	/// Frames per second
	#[arg(long, default_value_t = 60)]
	fps: u32,

	/// TOML configuration file
	#[arg(short, long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Fit {
	/// Span the stage width minus the configured margin
	Host,
	/// Use the content's natural width
	Content,
}

impl From<Fit> for SizingStyle {
	fn from(fit: Fit) -> Self {
		match fit {
			Fit::Host => SizingStyle::FitHostWidth,
			Fit::Content => SizingStyle::FitContent,
		}
	}
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	setup_tracing(args.verbose);

	if args.fps == 0 {
		return Err("--fps must be at least 1".into());
	}
	if !(args.width > 0.0 && args.height > 0.0) {
		return Err("--width and --height must be positive".into());
	}

	let config = match &args.config {
		Some(path) => {
			info!(path = %path.display(), "loading config");
			ToasterConfig::load(path)?
		}
		None => ToasterConfig::default(),
	};
	let toaster = Toaster::new(config);
	let ui = UiLoop::new();
	let stage = Rc::new(RefCell::new(Stage::new(Size::new(args.width, args.height))));

	let auto_dismiss = args
		.auto_dismiss
		.map(Duration::try_from_secs_f32)
		.transpose()?
		.map(AutoDismiss::after);
	let content = content(&args, toaster, &ui, &stage);

	let handle = toaster.present(
		&ui,
		content,
		PresentationBehavior::new(args.fit.into()),
		&stage,
		auto_dismiss,
	);
	info!(overlay = %handle.id(), fitted = %handle.fitted_size(), "toast presented");

	if auto_dismiss.is_none() {
		let hold = config.present.total() + Duration::try_from_secs_f32(args.hold)?;
		let handle = handle.clone();
		let stage = Rc::clone(&stage);
		ui.schedule_after(hold, move |ui| match toaster.dismiss(ui, &handle, &stage, DismissalBehavior::default()) {
			Ok(()) => info!(overlay = %handle.id(), "hold elapsed, dismissing"),
			Err(ToastError::AlreadyDismissed(id)) => debug!(overlay = %id, "already dismissed"),
			Err(error) => warn!(%error, "dismiss failed"),
		});
	}

	if let Some(tap) = args.tap {
		let handle = handle.clone();
		ui.schedule_after(Duration::try_from_secs_f32(tap)?, move |_| {
			let routed = handle.notify_button_activated();
			info!(overlay = %handle.id(), routed, "simulated tap");
		});
	}

	let frame = Duration::from_secs(1) / args.fps;
	let mut frames = 0u64;
	let mut last_phase = handle.phase();
	ui.run_until_idle(frame, |now| {
		frames += 1;
		let rect = handle.frame();
		debug!(
			t_ms = now.as_millis() as u64,
			x = rect.x,
			y = rect.y,
			width = rect.width,
			height = rect.height,
			corner_radius = handle.corner_radius(),
			"frame"
		);
		let phase = handle.phase();
		if phase != last_phase {
			info!(t_ms = now.as_millis() as u64, %phase, "phase changed");
			last_phase = phase;
		}
	})
	.await;

	info!(
		frames,
		elapsed_ms = ui.now().as_millis() as u64,
		children = stage.borrow().child_count(),
		"stage idle"
	);
	Ok(())
}

/// Builds the toast content from the command line. A button, when asked for,
/// dismisses the toast it belongs to.
fn content(args: &Args, toaster: Toaster, ui: &UiLoop, stage: &Rc<RefCell<Stage>>) -> ToastContent {
	let mut content = ToastContent::new(args.message.clone());
	if let Some(title) = &args.title {
		content = content.title(title.clone());
	}
	if let Some(icon) = &args.icon {
		content = content.icon(Icon::new(icon.clone(), Size::new(20.0, 20.0)));
	}
	if let Some(label) = &args.button {
		let ui = ui.downgrade();
		let stage = Rc::downgrade(stage);
		content = content.button(ButtonModel::new(label.clone(), move |overlay| {
			let (Some(ui), Some(stage)) = (ui.upgrade(), stage.upgrade()) else {
				return;
			};
			if let Err(error) = toaster.dismiss(&ui, overlay, &stage, DismissalBehavior::default()) {
				debug!(%error, "button dismiss ignored");
			}
		}));
	}
	content
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("butter=trace,butter_demo=debug,info")
		} else {
			EnvFilter::new("butter_demo=info,warn")
		}
	});

	tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
