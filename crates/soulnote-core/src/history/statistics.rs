//! Aggregate mood statistics.

use crate::entry::{MoodEntry, MoodScore};

/// Aggregates over a window of mood entries.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodStatistics {
    pub total: usize,
    pub mean: f64,
    /// Entry count per score; index 0 holds score 1.
    pub histogram: [usize; 10],
    /// Most frequent score and its count. Ties go to the lowest score.
    pub mode: (MoodScore, usize),
}

/// Result of [`MoodStatistics::compute`].
#[derive(Debug, Clone, PartialEq)]
pub enum StatisticsResult {
    Ready(MoodStatistics),
    InsufficientData,
}

/// One line of the proportional bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartRow {
    pub score: MoodScore,
    pub count: usize,
    pub bar_length: usize,
}

impl MoodStatistics {
    pub fn compute(entries: &[MoodEntry]) -> StatisticsResult {
        let scores: Vec<MoodScore> = entries.iter().map(|entry| entry.score).collect();
        Self::from_scores(&scores)
    }

    pub fn from_scores(scores: &[MoodScore]) -> StatisticsResult {
        if scores.is_empty() {
            return StatisticsResult::InsufficientData;
        }

        let mut histogram = [0usize; 10];
        let mut sum = 0u64;
        for score in scores {
            histogram[usize::from(score.value() - 1)] += 1;
            sum += u64::from(score.value());
        }

        let total = scores.len();
        let mut mode = (scores[0], 0);
        for score in MoodScore::all() {
            let count = histogram[usize::from(score.value() - 1)];
            if count > mode.1 {
                mode = (score, count);
            }
        }

        StatisticsResult::Ready(Self {
            total,
            mean: sum as f64 / total as f64,
            histogram,
            mode,
        })
    }

    pub fn count_for(&self, score: MoodScore) -> usize {
        self.histogram[usize::from(score.value() - 1)]
    }

    /// Chart rows from score 10 down to 1.
    pub fn chart(&self) -> Vec<ChartRow> {
        MoodScore::all()
            .rev()
            .map(|score| {
                let count = self.count_for(score);
                ChartRow {
                    score,
                    count,
                    bar_length: bar_length(count, self.total),
                }
            })
            .collect()
    }
}

/// Integer percentage of `total`, divided by ten.
pub fn bar_length(count: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (count * 100 / total) / 10
}
