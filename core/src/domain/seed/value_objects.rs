use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default)]
pub struct SeedMenuInput {
    pub force: bool,
}

/// What the catalog looks like relative to the seed dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedState {
    Absent,
    Partial { existing: u64 },
    Complete { existing: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPlan {
    Skip,
    Insert,
    Replace,
}

impl SeedState {
    pub fn from_count(existing: u64, expected: u64) -> Self {
        match existing {
            0 => SeedState::Absent,
            n if n < expected => SeedState::Partial { existing: n },
            n => SeedState::Complete { existing: n },
        }
    }

    pub fn plan(self, force: bool) -> SeedPlan {
        match (self, force) {
            (SeedState::Absent, _) => SeedPlan::Insert,
            (SeedState::Partial { .. }, _) => SeedPlan::Replace,
            (SeedState::Complete { .. }, true) => SeedPlan::Replace,
            (SeedState::Complete { .. }, false) => SeedPlan::Skip,
        }
    }

    pub fn existing(self) -> u64 {
        match self {
            SeedState::Absent => 0,
            SeedState::Partial { existing } | SeedState::Complete { existing } => existing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SeedOutcome {
    Skipped { existing: u64 },
    Seeded { inserted: u64 },
    Reseeded { removed: u64, inserted: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_count() {
        assert_eq!(SeedState::from_count(0, 60), SeedState::Absent);
        assert_eq!(
            SeedState::from_count(12, 60),
            SeedState::Partial { existing: 12 }
        );
        assert_eq!(
            SeedState::from_count(60, 60),
            SeedState::Complete { existing: 60 }
        );
        assert_eq!(
            SeedState::from_count(75, 60),
            SeedState::Complete { existing: 75 }
        );
    }

    #[test]
    fn test_plan() {
        assert_eq!(SeedState::Absent.plan(false), SeedPlan::Insert);
        assert_eq!(SeedState::Absent.plan(true), SeedPlan::Insert);
        assert_eq!(SeedState::Partial { existing: 3 }.plan(false), SeedPlan::Replace);
        assert_eq!(SeedState::Complete { existing: 60 }.plan(false), SeedPlan::Skip);
        assert_eq!(SeedState::Complete { existing: 60 }.plan(true), SeedPlan::Replace);
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(SeedOutcome::Reseeded {
            removed: 3,
            inserted: 60,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"outcome": "reseeded", "removed": 3, "inserted": 60})
        );
    }
}
