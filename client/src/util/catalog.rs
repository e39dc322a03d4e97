//! Toolbar catalog: which fixture buttons exist, grouped by category.
//!
//! Buttons are identified by `(category, id)` the same way the rail renders
//! them, so the UI state never needs the canvas crate to know what is armed.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Toolbar section a fixture button belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Rooms,
    SharedDesks,
    Chairs,
}

impl Category {
    /// Sections in rail order.
    pub const ALL: [Category; 3] = [Self::Rooms, Self::SharedDesks, Self::Chairs];

    pub fn title(self) -> &'static str {
        match self {
            Self::Rooms => "Rooms",
            Self::SharedDesks => "Shared desks",
            Self::Chairs => "Chairs",
        }
    }
}

/// A fixture button: its section and its 1-based position inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FixtureButton {
    pub category: Category,
    pub id: u8,
}

impl FixtureButton {
    pub const fn new(category: Category, id: u8) -> Self {
        Self { category, id }
    }
}

/// Rendering data for one fixture button.
#[derive(Clone, Copy, Debug)]
pub struct CatalogEntry {
    pub button: FixtureButton,
    pub image: &'static str,
    pub label: &'static str,
}

pub const MEETING_ROOM: FixtureButton = FixtureButton::new(Category::Rooms, 1);
pub const OFFICE: FixtureButton = FixtureButton::new(Category::Rooms, 2);
pub const SHARED_DESK: FixtureButton = FixtureButton::new(Category::SharedDesks, 1);
pub const ROUND_DESK: FixtureButton = FixtureButton::new(Category::SharedDesks, 2);
pub const CHAIR: FixtureButton = FixtureButton::new(Category::Chairs, 1);

/// Icon of the freehand drawing button.
pub const DRAW_ICON: &str = "assets/img/grundriss.svg";

pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry { button: MEETING_ROOM, image: "assets/img/room1.svg", label: "Meeting room" },
    CatalogEntry { button: OFFICE, image: "assets/img/room2.svg", label: "Office" },
    CatalogEntry { button: SHARED_DESK, image: "assets/img/desk1.svg", label: "Shared desk" },
    CatalogEntry { button: ROUND_DESK, image: "assets/img/desk2.svg", label: "Round desk" },
    CatalogEntry { button: CHAIR, image: "assets/img/chair.svg", label: "Chair" },
];

/// Buttons of one section, in display order.
pub fn entries(category: Category) -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter().filter(move |e| e.button.category == category)
}

/// Look up a button's rendering data. Unknown buttons yield `None`.
pub fn lookup(button: FixtureButton) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.button == button)
}
