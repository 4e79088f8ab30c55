use std::fmt;
use std::time::Duration;

use Difficulty::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Easy, Medium, Hard];

    pub fn tick_interval(self) -> Duration {
        let ms = match self {
            Easy => 140,
            Medium => 100,
            Hard => 60,
        };
        Duration::from_millis(ms)
    }

    // Menu cycling, wraps around at both ends
    pub fn next(self) -> Difficulty {
        match self {
            Easy => Medium,
            Medium => Hard,
            Hard => Easy,
        }
    }

    pub fn previous(self) -> Difficulty {
        match self {
            Easy => Hard,
            Medium => Easy,
            Hard => Medium,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Easy => "Easy",
            Medium => "Medium",
            Hard => "Hard",
        };
        f.write_str(name)
    }
}
