/// Staff directory domain types
use serde::{Deserialize, Serialize};

/// A single staff record as returned by the directory API.
///
/// Every field is optional at the boundary; identity is by `id` when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    /// Avatar image URL
    #[serde(default)]
    pub avatar: Option<String>,
}

impl StaffMember {
    /// First and last name joined by a space, skipping absent or blank parts.
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One page of the staff listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffPage {
    #[serde(default)]
    pub data: Option<Vec<StaffMember>>,

    /// 1-based number of this page
    #[serde(default)]
    pub page: Option<u32>,

    #[serde(default)]
    pub total_pages: Option<u32>,

    #[serde(default)]
    pub per_page: Option<u32>,

    /// Total number of records across all pages
    #[serde(default)]
    pub total: Option<u32>,
}

impl StaffPage {
    pub fn new(data: Vec<StaffMember>, page: u32, total_pages: u32) -> Self {
        Self {
            data: Some(data),
            page: Some(page),
            total_pages: Some(total_pages),
            per_page: None,
            total: None,
        }
    }

    /// Whether the server reports pages after this one.
    ///
    /// Absent numbers count as zero, so a page without `total_pages`
    /// never has a successor.
    pub fn has_more(&self) -> bool {
        self.page.unwrap_or(0) < self.total_pages.unwrap_or(0)
    }
}

/// Entry of the list shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Staff(StaffMember),
    /// Trailing "load more" affordance, present only while pages remain
    LoadMore,
}

impl ListItem {
    pub fn is_load_more(&self) -> bool {
        matches!(self, ListItem::LoadMore)
    }
}
