//! Built-in command table.
//!
//! Every command the terminal understands is an entry in [`COMMANDS`]. A
//! handler receives the (lower-cased) text after the command name and returns the lines
//! to print; the session takes care of the prompt echo and the blank
//! separators around them.

use super::clock::Clock;

/// Prompt shown before the input line and echoed before each command.
pub const PROMPT: &str = "agrim@macbook-pro ~ $";

/// Hint printed after an unknown command.
pub const HELP_HINT: &str = "Type \"help\" to see available commands";

/// What a command does to the scrollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Append these lines.
    Lines(Vec<String>),
    /// Wipe the scrollback.
    ClearScreen,
}

/// Handler signature: argument text and the clock.
pub type Handler = fn(&str, &dyn Clock) -> Output;

/// A named built-in.
pub struct Command {
    pub name: &'static str,
    pub summary: &'static str,
    pub handler: Handler,
}

pub static COMMANDS: &[Command] = &[
    Command { name: "help", summary: "Show this help message", handler: help },
    Command { name: "clear", summary: "Clear the terminal", handler: clear },
    Command { name: "echo", summary: "Print text", handler: echo },
    Command { name: "date", summary: "Show current date and time", handler: date },
    Command { name: "ls", summary: "List files", handler: ls },
    Command { name: "whoami", summary: "Show current user", handler: whoami },
    Command { name: "about", summary: "About me", handler: about },
    Command { name: "skills", summary: "Technical skills", handler: skills },
    Command { name: "contact", summary: "Contact information", handler: contact },
];

/// Look up a command by its (already lower-cased) name.
pub fn find(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|c| c.name == name)
}

/// Run `name` with `args`, falling back to the "not found" message.
pub fn run(name: &str, args: &str, clock: &dyn Clock) -> Output {
    match find(name) {
        Some(command) => (command.handler)(args, clock),
        None => Output::Lines(vec![
            format!("Command not found: {}", name),
            HELP_HINT.to_string(),
        ]),
    }
}

fn lines(text: &[&str]) -> Output {
    Output::Lines(text.iter().map(|s| s.to_string()).collect())
}

fn help(_args: &str, _clock: &dyn Clock) -> Output {
    let mut out = vec!["Available commands:".to_string()];
    out.extend(
        COMMANDS
            .iter()
            .map(|c| format!("  {:<8} - {}", c.name, c.summary)),
    );
    Output::Lines(out)
}

fn clear(_args: &str, _clock: &dyn Clock) -> Output {
    Output::ClearScreen
}

fn echo(args: &str, _clock: &dyn Clock) -> Output {
    Output::Lines(vec![args.to_string()])
}

fn date(_args: &str, clock: &dyn Clock) -> Output {
    Output::Lines(vec![clock.date_string()])
}

fn ls(_args: &str, _clock: &dyn Clock) -> Output {
    lines(&[
        "Documents",
        "Projects",
        "Downloads",
        "Desktop",
        "Music",
        "Pictures",
        "Videos",
    ])
}

fn whoami(_args: &str, _clock: &dyn Clock) -> Output {
    lines(&["agrim"])
}

fn about(_args: &str, _clock: &dyn Clock) -> Output {
    lines(&[
        "┌──────────────────────────────┐",
        "│ Agrim Gupta                  │",
        "│ Computer Science Graduate    │",
        "│ Backend & API Developer      │",
        "└──────────────────────────────┘",
        "",
        "2025 Computer Science graduate with strong",
        "foundations in backend development, APIs,",
        "and quality engineering.",
        "",
        "Focused on building scalable, reliable",
        "and data-driven applications using",
        "modern backend technologies.",
    ])
}

fn skills(_args: &str, _clock: &dyn Clock) -> Output {
    lines(&[
        "┌──────────────┐",
        "│   Skills     │",
        "└──────────────┘",
        "",
        "Programming:",
        "• Python",
        "• Java",
        "• C++",
        "• JavaScript",
        "",
        "Backend & APIs:",
        "• FastAPI / Flask",
        "• RESTful APIs",
        "• Microservices",
        "",
        "Testing & QA:",
        "• PyTest",
        "• Selenium",
        "• Postman",
        "• JUnit",
        "• Jenkins",
        "",
        "Databases & Data:",
        "• PostgreSQL",
        "• MySQL",
        "• MongoDB",
        "• NumPy / Pandas",
        "",
        "Cloud & Tools:",
        "• Docker",
        "• Git / GitHub",
        "• AWS (Basics)",
    ])
}

fn contact(_args: &str, _clock: &dyn Clock) -> Output {
    lines(&[
        "┌─────────┐",
        "│ Contact │",
        "└─────────┘",
        "",
        "Email: wa1agrim@gmail.com",
        "GitHub: github.com/Agrim007",
        "LinkedIn: linkedin.com/in/agrim-gupta/",
    ])
}
