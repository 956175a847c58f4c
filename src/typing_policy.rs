pub const WORD_DELIMITER: char = ' ';
pub const BACKSPACE: char = '\u{8}';
/// Terminals in raw mode usually report backspace as DEL
pub const DELETE: char = '\u{7f}';

/// What a single typed character asks the session to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keystroke {
    /// Close the current word and move on
    Delimiter,
    Backspace,
    Char(char),
}

impl From<char> for Keystroke {
    fn from(c: char) -> Self {
        match c {
            WORD_DELIMITER => Keystroke::Delimiter,
            BACKSPACE | DELETE => Keystroke::Backspace,
            other => Keystroke::Char(other),
        }
    }
}
