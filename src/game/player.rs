use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Human => "Player",
            Player::Computer => "Computer",
        }
    }

    /// Abbreviated name, used to label owned boxes
    pub fn short_name(self) -> &'static str {
        match self {
            Player::Human => "Play",
            Player::Computer => "Comp",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Human.other(), Player::Computer);
        assert_eq!(Player::Computer.other(), Player::Human);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Human.name(), "Player");
        assert_eq!(Player::Computer.name(), "Computer");
        assert_eq!(Player::Human.short_name(), "Play");
        assert_eq!(Player::Computer.short_name(), "Comp");
    }
}
