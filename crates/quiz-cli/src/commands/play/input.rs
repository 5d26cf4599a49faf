/// One line typed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCommand {
    /// 0-based option index, from `1..n` or `a..`.
    Choose(usize),
    Next,
    Previous,
    Reset,
    Quit,
    Help,
    Empty,
    Unknown(String),
}

pub fn parse(line: &str) -> PlayerCommand {
    let text = line.trim().to_ascii_lowercase();
    match text.as_str() {
        "" => PlayerCommand::Empty,
        "n" | "next" => PlayerCommand::Next,
        "p" | "prev" | "previous" => PlayerCommand::Previous,
        "r" | "reset" | "retry" => PlayerCommand::Reset,
        "q" | "quit" | "exit" => PlayerCommand::Quit,
        "h" | "?" | "help" => PlayerCommand::Help,
        _ => parse_choice(&text).unwrap_or_else(|| PlayerCommand::Unknown(line.trim().to_string())),
    }
}

fn parse_choice(text: &str) -> Option<PlayerCommand> {
    if let Ok(number) = text.parse::<usize>() {
        return number.checked_sub(1).map(PlayerCommand::Choose);
    }
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => ('a'..='z')
            .position(|candidate| candidate == letter)
            .map(PlayerCommand::Choose),
        _ => None,
    }
}
