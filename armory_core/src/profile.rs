//! Agent profile: experience, level and achievements

use serde::{Deserialize, Serialize};

/// Experience needed per level
pub const XP_PER_LEVEL: u64 = 1000;

/// The player's persistent profile
///
/// Level is never stored; it is always derived from `xp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentProfile {
    pub name: String,
    xp: u64,
    /// Mirrors the size of the saved-loadouts collection
    pub total_builds: usize,
}

impl Default for AgentProfile {
    fn default() -> Self {
        Self::new("AGENT-001")
    }
}

impl AgentProfile {
    pub fn new(name: impl Into<String>) -> Self {
        AgentProfile {
            name: name.into(),
            xp: 0,
            total_builds: 0,
        }
    }

    pub fn xp(&self) -> u64 {
        self.xp
    }

    /// Add experience; xp never decreases
    pub fn add_xp(&mut self, amount: u64) {
        self.xp = self.xp.saturating_add(amount);
    }

    /// `floor(xp / 1000) + 1`
    pub fn level(&self) -> u64 {
        self.xp / XP_PER_LEVEL + 1
    }

    /// Experience earned inside the current level
    pub fn xp_into_level(&self) -> u64 {
        self.xp % XP_PER_LEVEL
    }

    /// Experience still missing for the next level
    pub fn xp_to_next_level(&self) -> u64 {
        XP_PER_LEVEL - self.xp_into_level()
    }

    /// Badges unlocked for a given number of saved loadouts
    pub fn achievements(&self, saved_count: usize) -> Vec<Achievement> {
        Achievement::all()
            .iter()
            .map(|kind| Achievement {
                kind: *kind,
                completed: kind.is_met(saved_count, self.level()),
            })
            .collect()
    }
}

/// Achievement identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AchievementKind {
    FirstBuild,
    FiveBuilds,
    TenBuilds,
    LevelFive,
    LevelTen,
}

impl AchievementKind {
    pub fn id(&self) -> &'static str {
        match self {
            AchievementKind::FirstBuild => "first-build",
            AchievementKind::FiveBuilds => "five-builds",
            AchievementKind::TenBuilds => "ten-builds",
            AchievementKind::LevelFive => "level-five",
            AchievementKind::LevelTen => "level-ten",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AchievementKind::FirstBuild => "First Build",
            AchievementKind::FiveBuilds => "Arsenal Builder",
            AchievementKind::TenBuilds => "Master Armorer",
            AchievementKind::LevelFive => "Elite Agent",
            AchievementKind::LevelTen => "Legendary",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AchievementKind::FirstBuild => "Create your first loadout",
            AchievementKind::FiveBuilds => "Create 5 loadouts",
            AchievementKind::TenBuilds => "Create 10 loadouts",
            AchievementKind::LevelFive => "Reach level 5",
            AchievementKind::LevelTen => "Reach level 10",
        }
    }

    fn is_met(&self, saved_count: usize, level: u64) -> bool {
        match self {
            AchievementKind::FirstBuild => saved_count >= 1,
            AchievementKind::FiveBuilds => saved_count >= 5,
            AchievementKind::TenBuilds => saved_count >= 10,
            AchievementKind::LevelFive => level >= 5,
            AchievementKind::LevelTen => level >= 10,
        }
    }
}

/// An achievement and whether it is unlocked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub kind: AchievementKind,
    pub completed: bool,
}

impl Achievement {
    pub fn all() -> &'static [AchievementKind] {
        &[
            AchievementKind::FirstBuild,
            AchievementKind::FiveBuilds,
            AchievementKind::TenBuilds,
            AchievementKind::LevelFive,
            AchievementKind::LevelTen,
        ]
    }
}
