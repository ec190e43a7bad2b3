use serde::{Deserialize, Serialize};

/// Achievements a member can unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeType {
    NewUser,
    FirstSwap,
    FrequentSwapper,
    SwapVeteran,
    TopRated,
    CommunityRegular,
    CommunityPillar,
    EcoSaver,
    EcoChampion,
}

impl BadgeType {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::NewUser,
            Self::FirstSwap,
            Self::FrequentSwapper,
            Self::SwapVeteran,
            Self::TopRated,
            Self::CommunityRegular,
            Self::CommunityPillar,
            Self::EcoSaver,
            Self::EcoChampion,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NewUser => "New Neighbor",
            Self::FirstSwap => "First Swap",
            Self::FrequentSwapper => "Frequent Swapper",
            Self::SwapVeteran => "Swap Veteran",
            Self::TopRated => "Top Rated",
            Self::CommunityRegular => "Community Regular",
            Self::CommunityPillar => "Community Pillar",
            Self::EcoSaver => "Eco Saver",
            Self::EcoChampion => "Eco Champion",
        }
    }
}

/// Which member counter a badge measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeCriterion {
    /// Completed swap count.
    Swaps,
    /// Average review rating, gated on a minimum review volume.
    Reviews,
    /// Profile checklist completion.
    Profile,
    /// Community events attended.
    Community,
    /// Environmental impact units credited for completed swaps.
    Environmental,
}

/// Static configuration for one badge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BadgeDefinition {
    pub badge: BadgeType,
    pub criterion: BadgeCriterion,
    pub threshold: f64,
}

/// Raised when a badge table fails boundary validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("badge {0:?} is defined more than once")]
    DuplicateBadge(BadgeType),
    #[error("badge {badge:?} has non-positive threshold {threshold}")]
    InvalidThreshold { badge: BadgeType, threshold: f64 },
}

/// Immutable badge table, fixed at process start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeCatalog {
    definitions: Vec<BadgeDefinition>,
}

const fn definition(badge: BadgeType, criterion: BadgeCriterion, threshold: f64) -> BadgeDefinition {
    BadgeDefinition {
        badge,
        criterion,
        threshold,
    }
}

const STANDARD_DEFINITIONS: [BadgeDefinition; 9] = [
    definition(BadgeType::NewUser, BadgeCriterion::Profile, 1.0),
    definition(BadgeType::FirstSwap, BadgeCriterion::Swaps, 1.0),
    definition(BadgeType::FrequentSwapper, BadgeCriterion::Swaps, 10.0),
    definition(BadgeType::SwapVeteran, BadgeCriterion::Swaps, 50.0),
    definition(BadgeType::TopRated, BadgeCriterion::Reviews, 4.5),
    definition(BadgeType::CommunityRegular, BadgeCriterion::Community, 5.0),
    definition(BadgeType::CommunityPillar, BadgeCriterion::Community, 20.0),
    definition(BadgeType::EcoSaver, BadgeCriterion::Environmental, 40.0),
    definition(BadgeType::EcoChampion, BadgeCriterion::Environmental, 200.0),
];

impl BadgeCatalog {
    /// The production badge table.
    pub fn standard() -> Self {
        Self {
            definitions: STANDARD_DEFINITIONS.to_vec(),
        }
    }

    /// Build a catalog from explicit definitions, validating at the boundary.
    pub fn new(definitions: Vec<BadgeDefinition>) -> Result<Self, CatalogError> {
        let mut seen: Vec<BadgeType> = Vec::with_capacity(definitions.len());
        for definition in &definitions {
            if !(definition.threshold.is_finite() && definition.threshold > 0.0) {
                return Err(CatalogError::InvalidThreshold {
                    badge: definition.badge,
                    threshold: definition.threshold,
                });
            }
            if seen.contains(&definition.badge) {
                return Err(CatalogError::DuplicateBadge(definition.badge));
            }
            seen.push(definition.badge);
        }

        Ok(Self { definitions })
    }

    pub fn definitions(&self) -> &[BadgeDefinition] {
        &self.definitions
    }

    pub fn definition_for(&self, badge: BadgeType) -> Option<&BadgeDefinition> {
        self.definitions
            .iter()
            .find(|definition| definition.badge == badge)
    }
}

impl Default for BadgeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
