//! Closed vocabularies for rounds, moves, and outcomes.
//!
//! Every tag the engine dispatches on is an enum, so a new round type or
//! outcome is a compile error wherever it is not handled.

use serde::{Deserialize, Serialize};

/// The three mini-games a round can be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundType {
    /// Pick 1-3; repeating your last pick is punished.
    Pattern,
    /// Obey or defy the opponent's advice.
    Authority,
    /// Fire / Grass / Water.
    Instinct,
}

impl RoundType {
    /// All round types, in selection order.
    pub const ALL: [RoundType; 3] = [RoundType::Pattern, RoundType::Authority, RoundType::Instinct];

    /// Wire tag (`PATTERN`, `AUTHORITY`, `INSTINCT`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RoundType::Pattern => "PATTERN",
            RoundType::Authority => "AUTHORITY",
            RoundType::Instinct => "INSTINCT",
        }
    }

    /// Display name of the mini-game.
    #[must_use]
    pub const fn evaluator_name(self) -> &'static str {
        match self {
            RoundType::Pattern => "Pattern Trap",
            RoundType::Authority => "Authority Challenge",
            RoundType::Instinct => "Instinct Round",
        }
    }

    /// Whether this round takes a numeric pick (as opposed to a stance).
    #[must_use]
    pub const fn takes_number(self) -> bool {
        !matches!(self, RoundType::Authority)
    }
}

impl std::fmt::Display for RoundType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.evaluator_name())
    }
}

/// Result of a single evaluated round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    HumanWin,
    AiWin,
    /// Only the Instinct round can produce a draw.
    Draw,
}

impl Outcome {
    /// Wire tag (`HUMAN_WIN`, `AI_WIN`, `DRAW`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::HumanWin => "HUMAN_WIN",
            Outcome::AiWin => "AI_WIN",
            Outcome::Draw => "DRAW",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Winner of a finished match. There is no drawn match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Winner {
    Human,
    Ai,
}

impl Winner {
    /// Decide the match winner from final scores.
    ///
    /// The human must be strictly ahead; a tied score goes to the AI.
    #[must_use]
    pub const fn from_scores(human_score: u32, ai_score: u32) -> Self {
        if human_score > ai_score {
            Winner::Human
        } else {
            Winner::Ai
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Human => f.write_str("HUMAN"),
            Winner::Ai => f.write_str("AI"),
        }
    }
}

/// A validated numeric pick in {1, 2, 3}.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pick(u8);

impl Pick {
    /// All picks in ascending order.
    pub const ALL: [Pick; 3] = [Pick(1), Pick(2), Pick(3)];

    /// Validate a raw number. Returns `None` outside 1..=3.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        match value {
            1..=3 => Some(Self(value)),
            _ => None,
        }
    }

    /// The raw value (1-3).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Pick {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Pick::new(value).ok_or(value)
    }
}

impl From<Pick> for u8 {
    fn from(pick: Pick) -> u8 {
        pick.0
    }
}

impl std::fmt::Display for Pick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Instinct round element. Each beats exactly one other.
///
/// ```
/// use outsmart::core::Element;
///
/// assert!(Element::Fire.beats(Element::Grass));
/// assert!(Element::Grass.beats(Element::Water));
/// assert!(Element::Water.beats(Element::Fire));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Grass,
    Water,
}

impl Element {
    /// Elements in pick order (Fire = 1, Grass = 2, Water = 3).
    pub const ALL: [Element; 3] = [Element::Fire, Element::Grass, Element::Water];

    /// Map a pick onto its element.
    #[must_use]
    pub const fn from_pick(pick: Pick) -> Self {
        match pick.get() {
            1 => Element::Fire,
            2 => Element::Grass,
            _ => Element::Water,
        }
    }

    /// The pick this element is submitted as.
    #[must_use]
    pub const fn pick(self) -> Pick {
        match self {
            Element::Fire => Pick(1),
            Element::Grass => Pick(2),
            Element::Water => Pick(3),
        }
    }

    /// The element this one defeats.
    #[must_use]
    pub const fn prey(self) -> Element {
        match self {
            Element::Fire => Element::Grass,
            Element::Grass => Element::Water,
            Element::Water => Element::Fire,
        }
    }

    /// True if `self` defeats `other`.
    #[must_use]
    pub fn beats(self, other: Element) -> bool {
        self.prey() == other
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Grass => "Grass",
            Element::Water => "Water",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Authority round response to the opponent's advice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stance {
    Defy,
    Obey,
}

impl std::fmt::Display for Stance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stance::Defy => f.write_str("DEFY"),
            Stance::Obey => f.write_str("OBEY"),
        }
    }
}

/// A move as submitted by the caller.
///
/// Numbers are kept raw so out-of-range input can be rejected by the
/// controller rather than at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// A numeric pick for Pattern and Instinct rounds.
    Number(u8),
    /// A stance for Authority rounds.
    Authority(Stance),
}

impl From<Stance> for Move {
    fn from(stance: Stance) -> Self {
        Move::Authority(stance)
    }
}

impl From<Pick> for Move {
    fn from(pick: Pick) -> Self {
        Move::Number(pick.get())
    }
}

impl From<Element> for Move {
    fn from(element: Element) -> Self {
        Move::Number(element.pick().get())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Number(n) => write!(f, "{n}"),
            Move::Authority(stance) => write!(f, "{stance}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_validation() {
        assert_eq!(Pick::new(0), None);
        assert_eq!(Pick::new(1).map(Pick::get), Some(1));
        assert_eq!(Pick::new(3).map(Pick::get), Some(3));
        assert_eq!(Pick::new(4), None);
        assert_eq!(Pick::try_from(9), Err(9));
    }

    #[test]
    fn test_element_cycle() {
        for element in Element::ALL {
            assert!(!element.beats(element));
            assert!(element.beats(element.prey()));
            assert!(!element.prey().beats(element));
        }
    }

    #[test]
    fn test_element_pick_mapping() {
        for pick in Pick::ALL {
            assert_eq!(Element::from_pick(pick).pick(), pick);
        }
        assert_eq!(Element::from_pick(Pick::ALL[0]), Element::Fire);
        assert_eq!(Element::from_pick(Pick::ALL[2]), Element::Water);
    }

    #[test]
    fn test_winner_tie_goes_to_ai() {
        assert_eq!(Winner::from_scores(3, 1), Winner::Human);
        assert_eq!(Winner::from_scores(1, 3), Winner::Ai);
        assert_eq!(Winner::from_scores(2, 2), Winner::Ai);
        assert_eq!(Winner::from_scores(0, 0), Winner::Ai);
    }

    #[test]
    fn test_wire_tags_serde() {
        assert_eq!(serde_json::to_string(&RoundType::Authority).unwrap(), "\"AUTHORITY\"");
        assert_eq!(serde_json::to_string(&Outcome::AiWin).unwrap(), "\"AI_WIN\"");
        assert_eq!(serde_json::to_string(&Stance::Obey).unwrap(), "\"OBEY\"");
        assert_eq!(serde_json::to_string(&Pick::ALL[1]).unwrap(), "2");
        assert!(serde_json::from_str::<Pick>("7").is_err());
    }

    #[test]
    fn test_round_type_names() {
        assert_eq!(RoundType::Pattern.as_str(), "PATTERN");
        assert_eq!(RoundType::Instinct.to_string(), "Instinct Round");
        assert!(RoundType::Pattern.takes_number());
        assert!(!RoundType::Authority.takes_number());
    }
}
