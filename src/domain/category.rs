use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A catalog category products are listed under.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Icon hint for the storefront navigation.
    pub icon: Option<String>,
    /// Hex color used by the storefront navigation.
    pub color: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            name: name.into(),
            description: None,
            icon: None,
            color: None,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>, color: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self.color = Some(color.into());
        self
    }
}
