use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Level must be one of Beginner, Intermediate, Advanced")]
pub struct InvalidSkillLevel;

impl FromStr for SkillLevel {
    type Err = InvalidSkillLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(SkillLevel::Beginner),
            "Intermediate" => Ok(SkillLevel::Intermediate),
            "Advanced" => Ok(SkillLevel::Advanced),
            _ => Err(InvalidSkillLevel),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillProgress {
    pub skill: String,
    #[serde(default)]
    pub level: SkillLevel,
}

/// A user's skill levels, at most one entry per skill name.
///
/// Entries keep their insertion order on the wire; lookups go through a
/// skill → position index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<SkillProgress>", into = "Vec<SkillProgress>")]
pub struct SkillProgressList {
    entries: Vec<SkillProgress>,
    index: HashMap<String, usize>,
}

impl SkillProgressList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, skill: &str) -> Option<&SkillProgress> {
        self.index.get(skill).and_then(|&pos| self.entries.get(pos))
    }

    pub fn entries(&self) -> &[SkillProgress] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets the level for `skill`, replacing it in place when the skill is
    /// already tracked and appending it otherwise.
    pub fn upsert(&mut self, skill: &str, level: SkillLevel) -> &SkillProgress {
        let pos = match self.index.get(skill) {
            Some(&pos) => pos,
            None => {
                let pos = self.entries.len();
                self.entries.push(SkillProgress {
                    skill: skill.to_string(),
                    level,
                });
                self.index.insert(skill.to_string(), pos);
                pos
            }
        };

        let entry = &mut self.entries[pos];
        entry.level = level;
        entry
    }
}

impl From<Vec<SkillProgress>> for SkillProgressList {
    /// Duplicate skills collapse onto the first position; the last level wins.
    fn from(entries: Vec<SkillProgress>) -> Self {
        let mut list = Self::new();
        for entry in entries {
            list.upsert(&entry.skill, entry.level);
        }
        list
    }
}

impl From<SkillProgressList> for Vec<SkillProgress> {
    fn from(list: SkillProgressList) -> Self {
        list.entries
    }
}
