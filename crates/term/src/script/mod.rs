//! Script lines: key presses and cursor commands.


use keycycle_buffer::Motion;

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
	/// Press a key.
	Key(String),
	/// Move the cursor.
	Move(Motion),
	/// End the current cycle.
	Cancel,
	/// Re-read the configuration.
	Reload,
	/// Type a line break.
	Newline,
}

impl Step {
	/// Parses a script line.
	///
	/// Lines matching a command name exactly are commands; any other
	/// non-empty line is pressed as a key, so `:` or `:=` stay usable as keys.
	pub fn parse(line: &str) -> Option<Self> {
		let step = match line {
			"" => return None,
			":left" => Self::Move(Motion::Left),
			":right" => Self::Move(Motion::Right),
			":up" => Self::Move(Motion::Up),
			":down" => Self::Move(Motion::Down),
			":home" => Self::Move(Motion::LineStart),
			":end" => Self::Move(Motion::LineEnd),
			":cancel" => Self::Cancel,
			":reload" => Self::Reload,
			":newline" => Self::Newline,
			key => Self::Key(key.to_owned()),
		};
		Some(step)
	}
}
