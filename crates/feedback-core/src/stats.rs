//! Aggregate satisfaction statistics for the admin dashboard.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::feedback::FeedbackRecord;
use crate::models::rating::Rating;

/// Per-rating counts and rounded percentages over a set of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeedbackStats {
    pub total: usize,
    pub counts: BTreeMap<Rating, usize>,
    /// Whole-number percentages, rounded half away from zero. They need not
    /// sum to exactly 100.
    pub percentages: BTreeMap<Rating, u32>,
}

impl FeedbackStats {
    pub fn from_records(records: &[FeedbackRecord]) -> Self {
        let mut counts: BTreeMap<Rating, usize> =
            Rating::ALL.into_iter().map(|rating| (rating, 0)).collect();
        for record in records {
            *counts.entry(record.rating).or_default() += 1;
        }

        let total = records.len();
        let percentages = counts
            .iter()
            .map(|(&rating, &count)| (rating, percentage(count, total)))
            .collect();

        Self {
            total,
            counts,
            percentages,
        }
    }

    pub fn count(&self, rating: Rating) -> usize {
        self.counts.get(&rating).copied().unwrap_or(0)
    }

    pub fn percentage(&self, rating: Rating) -> u32 {
        self.percentages.get(&rating).copied().unwrap_or(0)
    }
}

fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}
