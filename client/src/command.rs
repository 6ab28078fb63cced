use common::games::tictactoe::{CELL_COUNT, GameMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Zero-based cell index.
    Place(usize),
    SelectMode(GameMode),
    Restart,
    Menu,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "Commands: 1-9 place a mark, r restart, m menu, q quit. \
In the menu: p vs player, c vs computer.";

pub fn parse_command(line: &str) -> Result<ConsoleCommand, String> {
    let input = line.trim().to_lowercase();

    if let Ok(cell) = input.parse::<usize>() {
        if (1..=CELL_COUNT).contains(&cell) {
            return Ok(ConsoleCommand::Place(cell - 1));
        }
        return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
    }

    match input.as_str() {
        "p" | "player" => Ok(ConsoleCommand::SelectMode(GameMode::VsPlayer)),
        "c" | "computer" => Ok(ConsoleCommand::SelectMode(GameMode::VsComputer)),
        "r" | "restart" => Ok(ConsoleCommand::Restart),
        "m" | "menu" => Ok(ConsoleCommand::Menu),
        "h" | "help" | "?" => Ok(ConsoleCommand::Help),
        "q" | "quit" | "exit" => Ok(ConsoleCommand::Quit),
        "" => Err("Empty input".to_string()),
        other => Err(format!("Unknown command '{}'", other)),
    }
}
