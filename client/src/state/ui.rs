//! Local UI chrome state (sidebar, feed category).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the personalization store so
//! nothing here is ever persisted.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Video category shown by the home feed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    Home,
    Gaming,
    Automobiles,
    Sports,
    Entertainment,
    Technology,
    Music,
    Blogs,
    News,
}

impl Category {
    /// Sidebar order.
    pub const ALL: [Category; 9] = [
        Category::Home,
        Category::Gaming,
        Category::Automobiles,
        Category::Sports,
        Category::Entertainment,
        Category::Technology,
        Category::Music,
        Category::Blogs,
        Category::News,
    ];

    /// Catalog `videoCategoryId`.
    pub fn id(self) -> &'static str {
        match self {
            Category::Home => "0",
            Category::Gaming => "20",
            Category::Automobiles => "2",
            Category::Sports => "17",
            Category::Entertainment => "24",
            Category::Technology => "28",
            Category::Music => "10",
            Category::Blogs => "22",
            Category::News => "25",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Home => "Home",
            Category::Gaming => "Gaming",
            Category::Automobiles => "Automobiles",
            Category::Sports => "Sports",
            Category::Entertainment => "Entertainment",
            Category::Technology => "Technology",
            Category::Music => "Music",
            Category::Blogs => "Blogs",
            Category::News => "News",
        }
    }
}

/// UI state for the navigation chrome.
#[derive(Clone, Debug)]
pub struct UiState {
    pub sidebar_expanded: bool,
    pub category: Category,
}

impl Default for UiState {
    fn default() -> Self {
        Self { sidebar_expanded: true, category: Category::Home }
    }
}
