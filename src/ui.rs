use std::io::IsTerminal;

/// Terminal styles used by the commands. Plain text when stdout is not a tty.
#[derive(Debug, Clone, Copy)]
pub enum Style {
    Bold,
    Dim,
    Success,
    Failure,
    Accent,
}

impl Style {
    fn sgr(self) -> &'static str {
        match self {
            Style::Bold => "1",
            Style::Dim => "2",
            Style::Failure => "31",
            Style::Success => "32",
            Style::Accent => "36",
        }
    }
}

pub fn paint(style: Style, text: &str) -> String {
    if std::io::stdout().is_terminal() {
        format!("\x1b[{}m{text}\x1b[0m", style.sgr())
    } else {
        text.to_string()
    }
}

/// Indented, highlighted label for a `dialoguer` prompt.
pub fn prompt_label(label: &str) -> String {
    format!("  {}", paint(Style::Accent, label))
}

pub fn print_ok(msg: &str) {
    println!("{} {msg}", paint(Style::Success, "OK"));
}

pub fn print_info(msg: &str) {
    println!("{} {msg}", paint(Style::Accent, "->"));
}

/// Print `msg` to stderr and exit with `code`.
pub fn die(msg: &str, code: i32) -> ! {
    eprintln!("{} {msg}", paint(Style::Failure, "ERR"));
    std::process::exit(code);
}
