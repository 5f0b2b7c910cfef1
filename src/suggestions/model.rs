use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Productivity,
    Team,
    Health,
    Planning,
    Alert,
    Motivation,
    General,
}

/// Declared lowest first so the derived `Ord` gives critical > high > medium > low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Badge colour used when rendering the suggestion card.
    pub fn appearance(&self) -> &'static str {
        match self {
            Priority::Critical => "red",
            Priority::High => "orange",
            Priority::Medium => "blue",
            Priority::Low => "green",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub category: Category,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl Suggestion {
    pub fn new(
        category: Category,
        icon: &str,
        title: &str,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            category,
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.into(),
            priority,
        }
    }
}
