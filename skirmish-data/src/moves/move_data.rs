use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Accuracy,
    HealAmount,
    MoveCategory,
    MoveEffect,
    Type,
};

/// Data for a move.
///
/// Field aliases accept the key names used by older data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    /// Name of the move.
    pub name: String,
    /// Move category.
    pub category: MoveCategory,
    /// Move type.
    #[serde(rename = "type", alias = "element")]
    pub primary_type: Type,
    /// Base power, absent for moves that deal no damage.
    #[serde(default, alias = "power", skip_serializing_if = "Option::is_none")]
    pub base_power: Option<u16>,
    /// Base accuracy; absent or null for moves that never miss.
    #[serde(default)]
    pub accuracy: Accuracy,
    /// Whether the move has an increased critical hit ratio.
    #[serde(default, alias = "high_crit_flag")]
    pub high_crit: bool,
    /// Turn order priority.
    #[serde(default)]
    pub priority: i8,
    /// Maximum number of uses.
    #[serde(alias = "max_pp")]
    pub pp: u8,
    /// Effects applied to the user, in order.
    #[serde(default, alias = "self_effect")]
    pub user_effects: Vec<MoveEffect>,
    /// Effects applied to the target, in order.
    #[serde(default, alias = "opponent_effect")]
    pub target_effects: Vec<MoveEffect>,
    /// Effects on the battlefield itself. Parsed but never applied.
    #[serde(default, alias = "environment_effect")]
    pub field_effects: Vec<String>,
}

impl MoveData {
    /// Whether the move goes through damage calculation.
    pub fn is_attack(&self) -> bool {
        self.category != MoveCategory::Status
    }

    /// The first drain effect on the user, if any.
    pub fn drain(&self) -> Option<HealAmount> {
        self.user_effects.iter().find_map(|effect| match effect {
            MoveEffect::Drain(amount) => Some(*amount),
            _ => None,
        })
    }
}
