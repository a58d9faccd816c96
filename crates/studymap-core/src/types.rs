use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type PatternId = String;
pub type ProblemId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

/// Learning-curve tier of a whole pattern, distinct from the per-problem
/// [`Difficulty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tier::Beginner => "Beginner",
            Tier::Intermediate => "Intermediate",
            Tier::Advanced => "Advanced",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Tier::Beginner),
            "intermediate" => Ok(Tier::Intermediate),
            "advanced" => Ok(Tier::Advanced),
            other => Err(format!("unknown tier: {}", other)),
        }
    }
}

/// Curation source a problem was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    LeetCodeWizard,
    NeetCode,
    LeetCode75,
    Blind75,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Source::LeetCodeWizard => "LeetCodeWizard",
            Source::NeetCode => "NeetCode",
            Source::LeetCode75 => "LeetCode75",
            Source::Blind75 => "Blind75",
        };
        write!(f, "{}", s)
    }
}

/// A named algorithmic technique grouping multiple problems.
///
/// `problems` is a denormalized cache of the membership; the authoritative
/// relation is `Problem::patterns`. See the consistency checker in the
/// catalog crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pattern {
    pub id: PatternId,
    pub name: String,
    pub description: String,
    pub problems: Vec<ProblemId>,
    pub tier: Tier,
    pub estimated_hours: u32,
}

impl Pattern {
    pub fn new(
        id: impl Into<PatternId>,
        name: impl Into<String>,
        tier: Tier,
        estimated_hours: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            problems: Vec::new(),
            tier,
            estimated_hours,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_problems<I, S>(mut self, problems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ProblemId>,
    {
        self.problems = problems.into_iter().map(Into::into).collect();
        self
    }
}

/// A directed prerequisite relationship: `from` should be learned before `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrereqEdge {
    pub from: PatternId,
    pub to: PatternId,
}

impl PrereqEdge {
    pub fn new(from: impl Into<PatternId>, to: impl Into<PatternId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}
