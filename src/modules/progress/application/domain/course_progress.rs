use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completion ratio in percent, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct CompletionPercentage(f64);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Completion percentage must be between 0 and 100")]
pub struct InvalidCompletionPercentage;

impl CompletionPercentage {
    pub fn new(value: f64) -> Result<Self, InvalidCompletionPercentage> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(InvalidCompletionPercentage);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for CompletionPercentage {
    type Error = InvalidCompletionPercentage;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CompletionPercentage> for f64 {
    fn from(value: CompletionPercentage) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgress {
    pub course: Uuid,
    pub completion_percentage: CompletionPercentage,
    #[serde(default)]
    pub is_completed: bool,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Per-course progress of one user, at most one entry per course id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CourseProgress>", into = "Vec<CourseProgress>")]
pub struct CourseProgressList {
    entries: Vec<CourseProgress>,
    index: HashMap<Uuid, usize>,
}

impl CourseProgressList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, course: &Uuid) -> Option<&CourseProgress> {
        self.index.get(course).and_then(|&pos| self.entries.get(pos))
    }

    pub fn entries(&self) -> &[CourseProgress] {
        &self.entries
    }

    pub fn course_ids(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.entries.iter().map(|entry| entry.course)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records progress on `course` at instant `now`.
    ///
    /// An existing entry keeps its `started_at`; its `completed_at` moves to
    /// `now` when `is_completed` is set and is left untouched otherwise. A new
    /// entry starts at `now` and is stamped completed only if `is_completed`.
    pub fn track(
        &mut self,
        course: Uuid,
        completion_percentage: CompletionPercentage,
        is_completed: bool,
        now: DateTime<Utc>,
    ) -> &CourseProgress {
        if let Some(&pos) = self.index.get(&course) {
            let entry = &mut self.entries[pos];
            entry.completion_percentage = completion_percentage;
            entry.is_completed = is_completed;
            if is_completed {
                entry.completed_at = Some(now);
            }
            return &self.entries[pos];
        }

        let pos = self.entries.len();
        self.entries.push(CourseProgress {
            course,
            completion_percentage,
            is_completed,
            started_at: now,
            completed_at: is_completed.then_some(now),
        });
        self.index.insert(course, pos);
        &self.entries[pos]
    }

    fn insert_or_replace(&mut self, entry: CourseProgress) {
        match self.index.get(&entry.course) {
            Some(&pos) => self.entries[pos] = entry,
            None => {
                self.index.insert(entry.course, self.entries.len());
                self.entries.push(entry);
            }
        }
    }
}

impl From<Vec<CourseProgress>> for CourseProgressList {
    fn from(entries: Vec<CourseProgress>) -> Self {
        let mut list = Self::new();
        for entry in entries {
            list.insert_or_replace(entry);
        }
        list
    }
}

impl From<CourseProgressList> for Vec<CourseProgress> {
    fn from(list: CourseProgressList) -> Self {
        list.entries
    }
}
