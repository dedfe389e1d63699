//! Command line parsing.
//!
//! Each submitted line is parsed into a [`Command`] through the [`COMMANDS`]
//! table, which maps command names to argument counts and constructors. A
//! line without a leading `/` is shorthand for `/go <line>`.
//!
//! Arguments stay as raw text: number parsing and range checks happen in
//! `floorplan-core` so they report the same errors however input arrives.

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Build a new house.
    Create {
        /// Raw width text.
        width: String,
        /// Raw height text.
        height: String,
        /// Raw room count text.
        rooms: String,
    },
    /// Highlight a room by its 1-based number.
    Navigate {
        /// Raw room number text.
        room: String,
    },
    /// Remove the highlight.
    Clear,
    /// Show the command summary.
    Help,
    /// Quit the application.
    Quit,
    /// Command name not in the table.
    Unknown {
        /// Name as typed, without the slash.
        name: String,
    },
    /// Known command with the wrong number of arguments.
    Usage {
        /// Usage line of the command.
        usage: &'static str,
    },
}

/// One entry of the command table.
#[derive(Debug)]
pub struct CommandSpec {
    /// Name and aliases, without the slash. The first is canonical.
    pub names: &'static [&'static str],
    /// Usage line shown on argument mismatch and in help.
    pub usage: &'static str,
    /// Number of arguments the command takes.
    pub arity: usize,
    /// Construct the command from exactly `arity` arguments.
    pub build: fn(&[&str]) -> Command,
}

/// Every command the input line understands.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        names: &["create", "c"],
        usage: "/create <width> <height> <rooms>",
        arity: 3,
        build: build_create,
    },
    CommandSpec { names: &["go", "navigate", "n"], usage: "/go <room>", arity: 1, build: build_navigate },
    CommandSpec { names: &["clear"], usage: "/clear", arity: 0, build: |_| Command::Clear },
    CommandSpec { names: &["help", "h"], usage: "/help", arity: 0, build: |_| Command::Help },
    CommandSpec { names: &["quit", "q"], usage: "/quit", arity: 0, build: |_| Command::Quit },
];

fn build_create(args: &[&str]) -> Command {
    match args {
        [width, height, rooms] => Command::Create {
            width: (*width).to_string(),
            height: (*height).to_string(),
            rooms: (*rooms).to_string(),
        },
        _ => Command::Usage { usage: "/create <width> <height> <rooms>" },
    }
}

fn build_navigate(args: &[&str]) -> Command {
    match args {
        [room] => Command::Navigate { room: (*room).to_string() },
        _ => Command::Usage { usage: "/go <room>" },
    }
}

/// Parse a submitted line.
pub fn parse(text: &str) -> Command {
    let text = text.trim();
    let Some(rest) = text.strip_prefix('/') else {
        return Command::Navigate { room: text.to_string() };
    };

    let mut words = rest.split_whitespace();
    let name = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let Some(spec) = lookup(name) else {
        return Command::Unknown { name: name.to_string() };
    };
    if args.len() != spec.arity {
        return Command::Usage { usage: spec.usage };
    }
    (spec.build)(&args)
}

/// Table entry for a command name or alias.
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    let name = name.to_ascii_lowercase();
    COMMANDS.iter().find(|spec| spec.names.contains(&name.as_str()))
}

/// One-line summary of every command.
pub fn help_line() -> String {
    let usages: Vec<_> = COMMANDS.iter().map(|spec| spec.usage).collect();
    format!("{} | <room> | Esc quits", usages.join(" | "))
}
