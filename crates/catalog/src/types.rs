//! Wire types for the store catalog.

use serde::{Deserialize, Serialize};

/// A remotely-owned title as reported by the store catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogGame {
    pub id: u64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_game_serde_round_trip() {
        let game = CatalogGame {
            id: 1207658930,
            name: "Star Ranger".into(),
        };

        let json = serde_json::to_string(&game).unwrap();
        let back: CatalogGame = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game);
    }

    #[test]
    fn catalog_game_deserializes_wire_shape() {
        let game: CatalogGame =
            serde_json::from_str(r#"{"id": 42, "name": "Game A"}"#).unwrap();
        assert_eq!(game.id, 42);
        assert_eq!(game.name, "Game A");
    }
}
