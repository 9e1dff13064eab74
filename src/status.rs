use crossterm::style::{style, Color, Stylize};

/// Kind of user-facing status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Message,
    Failure,
    Success,
    Caution,
    Processing,
}

impl Status {
    pub fn prefix(self) -> &'static str {
        match self {
            Status::Message => "\u{1F916} ",
            Status::Failure => "\u{274C} [failure] ",
            Status::Success => "\u{2705} [success] ",
            Status::Caution => "\u{26A0}\u{FE0F} [caution] ",
            Status::Processing => "\u{231B} [processing] ",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Status::Failure => Color::DarkRed,
            Status::Success => Color::DarkGreen,
            Status::Caution => Color::DarkYellow,
            Status::Message | Status::Processing => Color::DarkCyan,
        }
    }
}

pub fn format_message(text: &str, status: Status) -> String {
    format!(
        "{}{}",
        style(status.prefix()).with(status.color()),
        style(text).with(status.color())
    )
}

pub fn banner() -> String {
    let text = [
        "-----------------------",
        "\u{1F356} the Barbarian Tools",
        "Kyakuhon Text Formatter",
        "-----------------------",
        concat!("Beta             v", env!("CARGO_PKG_VERSION")),
        "-----------------------",
    ]
    .join("\n");
    style(text).with(Color::DarkRed).to_string()
}

pub fn restart_notice() -> String {
    style("\n-------Re-Start--------")
        .with(Color::DarkYellow)
        .to_string()
}
