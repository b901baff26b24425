use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::count::PackedCount;

/// How two packed counts are ordered in a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingRule {
    /// Exact count descending, ties broken by search count descending.
    #[default]
    ExactThenSearch,
    /// Combined (exact + search) count descending. Historical variant, only
    /// used when asked for explicitly.
    Combined,
}

impl RankingRule {
    /// `Less` means `a` ranks ahead of `b`.
    pub fn compare(self, a: PackedCount, b: PackedCount) -> Ordering {
        match self {
            RankingRule::ExactThenSearch => b
                .exact_count()
                .cmp(&a.exact_count())
                .then_with(|| b.search_count().cmp(&a.search_count())),
            RankingRule::Combined => b.combined_count().cmp(&a.combined_count()),
        }
    }
}

/// Ranking configuration, recorded in every report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankConfig {
    pub version: String,
    pub rule: RankingRule,
}

impl RankConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            rule: RankingRule::ExactThenSearch,
        }
    }

    pub fn with_rule(rule: RankingRule) -> Self {
        Self {
            rule,
            ..Self::v0()
        }
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self::v0()
    }
}
