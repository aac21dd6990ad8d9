//! Real Nizhny Novgorod landmarks for realistic test fixtures.
//!
//! Coordinates are approximate positions taken from public maps of the
//! historic centre; categories follow the city catalog numbering.

use walk_planner::{CategoryId, Coordinate, Landmark};

pub const MONUMENTS: CategoryId = 1;
pub const PARKS: CategoryId = 2;
pub const EMBANKMENTS: CategoryId = 4;
pub const ARCHITECTURE: CategoryId = 5;
pub const MUSEUMS: CategoryId = 7;
pub const THEATRES: CategoryId = 8;
pub const FOUNTAINS: CategoryId = 11;

/// A named start position.
#[derive(Debug, Clone)]
pub struct StartPoint {
    pub name: &'static str,
    pub coordinate: Coordinate,
}

impl StartPoint {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self {
            name,
            coordinate: Coordinate::new(lat, lon),
        }
    }
}

// ============================================================================
// Popular start points
// ============================================================================

pub const START_POINTS: &[StartPoint] = &[
    StartPoint::new("Kremlin", 56.326887, 44.005986),
    StartPoint::new("Minin Square", 56.327266, 44.006597),
    StartPoint::new("Bolshaya Pokrovskaya", 56.318136, 43.995234),
    StartPoint::new("Fedorovsky Embankment", 56.325238, 43.985295),
    StartPoint::new("Strelka", 56.334505, 43.976589),
];

pub fn kremlin_start() -> Coordinate {
    START_POINTS[0].coordinate
}

/// A spot in the upper town with no landmark within a few hundred meters.
pub fn quiet_start() -> Coordinate {
    Coordinate::new(56.3400, 44.0300)
}

// ============================================================================
// Catalog
// ============================================================================

fn landmark(id: &str, title: &str, category: CategoryId, lat: f64, lon: f64) -> Landmark {
    Landmark::new(id, title, category, Coordinate::new(lat, lon))
}

/// The historic-centre catalog, in loader order.
pub fn catalog() -> Vec<Landmark> {
    vec![
        landmark("kremlin", "Nizhny Novgorod Kremlin", ARCHITECTURE, 56.3285, 44.0030)
            .with_description("Sixteenth-century fortress above the Volga."),
        landmark("minin-monument", "Minin and Pozharsky Monument", MONUMENTS, 56.3272, 44.0058),
        landmark("minin-fountain", "Fountain on Minin Square", FOUNTAINS, 56.3266, 44.0063),
        landmark("chkalov-stairs", "Chkalov Staircase", ARCHITECTURE, 56.3306, 44.0094),
        landmark("chkalov-monument", "Chkalov Monument", MONUMENTS, 56.3300, 44.0090),
        landmark("alexandrovsky-garden", "Alexandrovsky Garden", PARKS, 56.3300, 44.0130),
        landmark("art-museum", "State Art Museum", MUSEUMS, 56.3293, 44.0148),
        landmark("rukavishnikov", "Rukavishnikov Estate", MUSEUMS, 56.3296, 44.0166),
        landmark("upper-embankment", "Upper Volga Embankment", EMBANKMENTS, 56.3290, 44.0180),
        landmark("drama-theatre", "Drama Theatre", THEATRES, 56.3227, 44.0010),
        landmark("pochainsky", "Pochainsky Ravine", PARKS, 56.3255, 43.9990),
        landmark("fedorovsky", "Fedorovsky Embankment", EMBANKMENTS, 56.3252, 43.9853),
        landmark("gorky-square", "Gorky Monument", MONUMENTS, 56.3135, 43.9930),
        landmark("kulibin-park", "Kulibin Park", PARKS, 56.3175, 44.0055),
        landmark("nevsky-cathedral", "Alexander Nevsky Cathedral", ARCHITECTURE, 56.3344, 43.9704),
    ]
}
