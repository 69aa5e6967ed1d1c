//! Fixed selection catalogs for the dispatch form.
//!
//! Catalog order is render order: selects and checkbox grids list entries
//! exactly as they appear here.

/// Plant capacities offered per system.
pub const PLANT_TYPES: &[&str] = &["2 Kw", "3 Kw", "4 Kw", "6 Kw", "8 Kw", "10 Kw"];

/// Physical components checked off on each system card.
pub const COMPONENT_NAMES: &[&str] = &[
    "Module",
    "Inverter",
    "ACDB",
    "DCDB",
    "Earthing Kit",
    "L.A",
    "Structure",
    "WiFi",
    "AC wire",
    "DC wire",
    "Earthing Wire",
    "Earth Pit",
];

/// Stores a dispatch can originate from.
pub const STORES: &[&str] = &["Ghazipur", "Varanasi"];

/// Technicians who carry out installations.
pub const TECHNICIANS: &[&str] = &["Upender", "Ashish", "Bablu"];

/// Districts served.
pub const DISTRICTS: &[&str] = &[
    "Ghazipur",
    "Varanasi",
    "Ballia",
    "Azamgarh",
    "Mau",
    "Chandauli",
    "Lucknow",
    "Jaunpur",
    "Mirzapur",
    "Bhadohi",
];

/// Upper bound on systems per dispatch. Count input is clamped to this.
pub const MAX_SYSTEMS: usize = 20;
