use crossterm::style::{Color, StyledContent, Stylize};

use std::fmt;

/// A single character position in a rendered maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Wall,
    Open,
    /// Part of a solution path.
    Path,
    Start,
    End,
}

impl GridCell {
    /// Plain ASCII symbol, one character wide.
    pub fn symbol(self) -> char {
        match self {
            GridCell::Wall => '#',
            GridCell::Open => ' ',
            GridCell::Path => 'X',
            GridCell::Start => 'S',
            GridCell::End => 'E',
        }
    }

    /// Colored two-column symbol for terminal output.
    pub fn styled(self) -> StyledContent<&'static str> {
        match self {
            GridCell::Wall => "██".with(Color::White),
            GridCell::Open => "  ".with(Color::Reset),
            GridCell::Path => "* ".with(Color::Yellow),
            GridCell::Start => "S ".with(Color::Green),
            GridCell::End => "E ".with(Color::Red),
        }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
