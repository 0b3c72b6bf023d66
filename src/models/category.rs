//! Category models
//!
//! Categories are identified by name. A fixed set ships with the program;
//! users can register more, each with an icon and a color.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon and color attached to a category name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStyle {
    /// Glyph or markup shown next to the name
    pub icon: String,

    /// Hex (`#AABBCC`) or named color
    pub color: String,
}

impl CategoryStyle {
    pub fn new(icon: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            color: color.into(),
        }
    }

    /// Style used for category names that are neither built in nor registered
    pub fn fallback() -> Self {
        BuiltinCategory::Other.style()
    }
}

/// Where a category definition came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySource {
    Builtin,
    Custom,
}

impl fmt::Display for CategorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "built-in"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// A named category together with its style and origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub style: CategoryStyle,
    pub source: CategorySource,
}

impl Category {
    pub fn new(name: impl Into<String>, style: CategoryStyle, source: CategorySource) -> Self {
        Self {
            name: name.into(),
            style,
            source,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.style.icon, self.name)
    }
}

/// The fixed category set available without any configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinCategory {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    Health,
    Education,
    Salary,
    Investment,
    Other,
}

impl BuiltinCategory {
    /// Get all built-in categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transport,
            Self::Shopping,
            Self::Entertainment,
            Self::Bills,
            Self::Health,
            Self::Education,
            Self::Salary,
            Self::Investment,
            Self::Other,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Salary => "Salary",
            Self::Investment => "Investment",
            Self::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍔",
            Self::Transport => "🚗",
            Self::Shopping => "🛍️",
            Self::Entertainment => "🎬",
            Self::Bills => "📄",
            Self::Health => "💊",
            Self::Education => "📚",
            Self::Salary => "💰",
            Self::Investment => "📈",
            Self::Other => "📦",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Food => "#FF6B6B",
            Self::Transport => "#4ECDC4",
            Self::Shopping => "#45B7D1",
            Self::Entertainment => "#96CEB4",
            Self::Bills => "#FFEEAD",
            Self::Health => "#D4A5A5",
            Self::Education => "#9B59B6",
            Self::Salary => "#2ECC71",
            Self::Investment => "#F1C40F",
            Self::Other => "#95A5A6",
        }
    }

    pub fn style(&self) -> CategoryStyle {
        CategoryStyle::new(self.icon(), self.color())
    }

    /// Look up a built-in by exact name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.name() == name)
    }

    pub fn to_category(&self) -> Category {
        Category::new(self.name(), self.style(), CategorySource::Builtin)
    }
}
