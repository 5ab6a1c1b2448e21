use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Dark,
    Light,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Dark => Player::Light,
            Player::Light => Player::Dark,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Dark => Cell::Dark,
            Player::Light => Cell::Light,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Dark => "Dark",
            Player::Light => "Light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Dark.other(), Player::Light);
        assert_eq!(Player::Light.other(), Player::Dark);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Dark.name(), "Dark");
        assert_eq!(Player::Light.name(), "Light");
    }

    #[test]
    fn test_player_serde_tags() {
        assert_eq!(serde_json::to_string(&Player::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<Player>("\"light\"").unwrap(),
            Player::Light
        );
    }
}
