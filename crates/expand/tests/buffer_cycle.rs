//! Expansion against a real buffer with the selection listener wired up.

use std::sync::{Arc, Weak};

use keycycle_buffer::{Buffer, Motion};
use keycycle_config::Config;
use keycycle_expand::{ExpansionController, Outcome};
use keycycle_primitives::{EditorHandle, Position};
use pretty_assertions::assert_eq;

const CONFIG: &str = r#"
[definitions.rust]
"=" = [" = ", " == ", "="]
"(" = ["(!!)", "("]
"|" = ["|!!|", " || "]

[definitions.markdown]
"*" = ["**!!**", "*"]
"#;

fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Controller whose default input types into `buffer`, listening to its
/// cursor reports.
fn wire(buffer: &Arc<Buffer>, context: &'static str) -> Arc<ExpansionController> {
	init_tracing();
	let typing: Weak<Buffer> = Arc::downgrade(buffer);
	let controller = Arc::new(
		ExpansionController::new(
			move || Some(context.to_owned()),
			move |text: &str| {
				if let Some(buffer) = typing.upgrade() {
					let _ = buffer.type_text(text);
				}
			},
		)
		.with_config(&Config::parse(CONFIG).unwrap()),
	);
	let listener = Arc::downgrade(&controller);
	buffer.on_selection_change(move |editor, positions| {
		if let Some(controller) = listener.upgrade() {
			controller.on_cursor_moved(editor, positions);
		}
	});
	controller
}

#[tokio::test]
async fn cycles_in_place_inside_existing_text() {
	let buffer = Arc::new(Buffer::from_text("let x;"));
	let controller = wire(&buffer, "rust");
	buffer.set_cursor(Position::new(0, 5));

	controller.process("=", buffer.as_ref()).await.unwrap();
	assert_eq!(buffer.text(), "let x = ;");
	controller.process("=", buffer.as_ref()).await.unwrap();
	assert_eq!(buffer.text(), "let x == ;");
	controller.process("=", buffer.as_ref()).await.unwrap();
	assert_eq!(buffer.text(), "let x=;");
	controller.process("=", buffer.as_ref()).await.unwrap();
	assert_eq!(buffer.text(), "let x = ;");
	assert_eq!(buffer.cursor(), Position::new(0, 8));
}

#[tokio::test]
async fn marked_template_places_cursor_after_prefix() {
	let buffer = Arc::new(Buffer::from_text("foo\nbar"));
	let controller = wire(&buffer, "rust");
	buffer.set_cursor(Position::new(1, 3));

	controller.process("(", buffer.as_ref()).await.unwrap();
	assert_eq!(buffer.text(), "foo\nbar()");
	assert_eq!(buffer.cursor(), Position::new(1, 4));
	assert!(!controller.state().is_idle(), "own cursor fixup must not cancel");

	controller.process("(", buffer.as_ref()).await.unwrap();
	assert_eq!(buffer.text(), "foo\nbar(");
	assert_eq!(buffer.cursor(), Position::new(1, 4));
}

#[tokio::test]
async fn moving_the_cursor_ends_the_cycle() {
	let buffer = Arc::new(Buffer::new());
	let controller = wire(&buffer, "rust");

	controller.process("|", buffer.as_ref()).await.unwrap();
	assert_eq!(buffer.text(), "||");
	buffer.move_cursor(Motion::LineEnd);
	assert!(controller.state().is_idle());

	let outcome = controller.process("|", buffer.as_ref()).await.unwrap();
	assert_eq!(outcome, Outcome::Expanded { index: 0, continued: false });
	assert_eq!(buffer.text(), "||||");
}

#[tokio::test]
async fn unbound_key_is_typed_and_ends_the_cycle() {
	let buffer = Arc::new(Buffer::new());
	let controller = wire(&buffer, "rust");

	controller.process("=", buffer.as_ref()).await.unwrap();
	assert_eq!(controller.process("1", buffer.as_ref()).await.unwrap(), Outcome::Forwarded);
	assert_eq!(buffer.text(), " = 1");
	assert!(controller.state().is_idle());

	controller.process("=", buffer.as_ref()).await.unwrap();
	assert_eq!(buffer.text(), " = 1 = ");
}

#[tokio::test]
async fn context_selects_definitions() {
	let buffer = Arc::new(Buffer::new());
	let controller = wire(&buffer, "markdown");

	assert_eq!(controller.process("=", buffer.as_ref()).await.unwrap(), Outcome::Forwarded);
	controller.process("*", buffer.as_ref()).await.unwrap();
	assert_eq!(buffer.text(), "=****");
	assert_eq!(buffer.cursor(), Position::new(0, 3));
	controller.process("*", buffer.as_ref()).await.unwrap();
	assert_eq!(buffer.text(), "=*");
}

#[tokio::test]
async fn switching_buffers_starts_fresh() {
	let first = Arc::new(Buffer::new());
	let second = Arc::new(Buffer::new());
	let controller = wire(&first, "rust");

	controller.process("=", first.as_ref()).await.unwrap();
	controller.process("=", second.as_ref()).await.unwrap();
	assert_eq!(first.text(), " = ");
	assert_eq!(second.text(), " = ");
	assert_eq!(controller.state().active().unwrap().editor, second.id());
}

#[tokio::test]
async fn read_only_buffer_cancels_cycle() {
	let buffer = Arc::new(Buffer::new());
	let controller = wire(&buffer, "rust");

	controller.process("=", buffer.as_ref()).await.unwrap();
	buffer.set_read_only(true);
	assert!(controller.process("=", buffer.as_ref()).await.is_err());
	assert!(controller.state().is_idle());
	assert_eq!(buffer.text(), " = ");
}
