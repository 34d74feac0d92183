//! Static listing catalog: supported cities and rental categories.
//!
//! The catalog backs the quick-search UI and resolves category ids from
//! filter forms to their display titles before templating.

use serde::Serialize;

/// A rental category shown on the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

/// Cities with active listings.
pub const LOCATIONS: [&str; 20] = [
    "Delhi",
    "Mumbai",
    "Bangalore",
    "Chennai",
    "Kolkata",
    "Hyderabad",
    "Pune",
    "Ahmedabad",
    "Jaipur",
    "Lucknow",
    "Chandigarh",
    "Noida",
    "Gurgaon",
    "Indore",
    "Kochi",
    "Coimbatore",
    "Nagpur",
    "Bhopal",
    "Vizag",
    "Surat",
];

pub const CATEGORIES: [Category; 5] = [
    Category {
        id: "houses",
        title: "Houses & Flats",
        icon: "\u{1F3E0}",
    },
    Category {
        id: "pg",
        title: "PG & Hostels",
        icon: "\u{1F3E8}",
    },
    Category {
        id: "coworking",
        title: "Co-working Spaces",
        icon: "\u{1F4BC}",
    },
    Category {
        id: "library",
        title: "Library / Study Seats",
        icon: "\u{1F4DA}",
    },
    Category {
        id: "commercial",
        title: "Commercial & Offices",
        icon: "\u{1F3E2}",
    },
];

/// Read-only view over the static listing data.
#[derive(Debug, Clone, Default)]
pub struct Catalog;

impl Catalog {
    pub fn new() -> Self {
        Self
    }

    pub fn locations(&self) -> &'static [&'static str] {
        &LOCATIONS
    }

    pub fn categories(&self) -> &'static [Category] {
        &CATEGORIES
    }

    /// Finds a category by its id.
    pub fn category_by_id(&self, id: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.id == id)
    }

    /// Resolves a raw category value from a filter form.
    ///
    /// `"all"` means no category filter and resolves to `None`. Known ids
    /// resolve to their display title; anything else passes through as
    /// free text.
    pub fn display_title(&self, raw: &str) -> Option<String> {
        if raw == "all" {
            return None;
        }
        match self.category_by_id(raw) {
            Some(category) => Some(category.title.to_string()),
            None => Some(raw.to_string()),
        }
    }
}
