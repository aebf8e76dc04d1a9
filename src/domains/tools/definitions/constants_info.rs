//! `get_constants_info` - where simulation constants live.

use serde_json::{Value, json};

use crate::domains::tools::registry::{ToolDef, ToolHandler};
use crate::domains::tools::schema::ParamSchema;

pub fn definition() -> ToolDef {
    ToolDef {
        name: "get_constants_info",
        description: "Get information about where simulation constants are defined",
        schema: ParamSchema::EMPTY,
        handler: ToolHandler::Fixed(payload),
    }
}

fn payload() -> Value {
    json!({
        "location": "gridiron-engine/src/Gridiron.Engine/Simulation/Configuration/GameProbabilities.cs",
        "rule": "ALL probability values, thresholds, and configuration constants MUST be defined here",
        "structure": "Nested static classes organized by domain",
        "existingDomains": [
            "Passing - completion rates, interception chances",
            "Rushing - tackle break rates, big run chances",
            "Turnovers - fumble rates, recovery rates",
            "FieldGoals - make percentages by distance",
            "Kickoffs - touchback rates, return averages",
            "Punts - gross yards, net yards, inside-20",
            "GameDecisions - play type selection weights",
            "FourthDown - go-for-it probabilities, field position thresholds",
            "Timeouts - timeout thresholds, ice kicker probability",
        ],
        "usage": "Reference as GameProbabilities.DomainName.CONSTANT_NAME",
        "addingNew": "When adding new simulation logic, add a new nested class to GameProbabilities.cs",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_points_at_game_probabilities() {
        let payload = payload();
        assert!(
            payload["location"]
                .as_str()
                .unwrap()
                .ends_with("GameProbabilities.cs")
        );
        assert_eq!(payload["existingDomains"].as_array().unwrap().len(), 9);
    }
}
