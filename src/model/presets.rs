//! Built-in sample plans.

use super::{FloorPlan, Opening, Wall, WallId};

/// The editor's starter plan: an 8 × 6 m shell with an L-shaped partition.
#[must_use]
pub fn default_apartment() -> FloorPlan {
    let mut plan = FloorPlan::new();
    let w: Vec<WallId> = [
        Wall::new(0.0, 0.0, 8.0, 0.0),
        Wall::new(8.0, 0.0, 8.0, 6.0),
        Wall::new(8.0, 6.0, 0.0, 6.0),
        Wall::new(0.0, 6.0, 0.0, 0.0),
        Wall::new(4.0, 0.0, 4.0, 4.0),
        Wall::new(4.0, 4.0, 8.0, 4.0),
    ]
    .into_iter()
    .map(|wall| plan.insert_wall_unchecked(wall))
    .collect();

    for opening in [
        Opening::door(w[0], 0.25),
        Opening::window(w[1], 0.3),
        Opening::window(w[2], 0.5),
        Opening::door(w[4], 0.7),
        Opening::window(w[1], 0.75),
    ] {
        plan.insert_opening_unchecked(opening);
    }
    plan
}

/// A larger reference apartment: balcony, living area, bedrooms, two
/// bathrooms, kitchen and a safe room. Most of its 28 walls meet other walls
/// at T-junctions.
#[must_use]
pub fn reference_apartment() -> FloorPlan {
    let mut plan = FloorPlan::new();
    let w: Vec<WallId> = [
        // Balcony
        (1.5, 0.0, 8.0, 0.0, "balc-top"),
        (8.0, 0.0, 8.0, 2.5, "balc-right"),
        (1.5, 0.0, 1.5, 2.5, "balc-left"),
        // Shell
        (0.0, 2.5, 14.0, 2.5, "main-top"),
        (14.0, 2.5, 14.0, 10.5, "right"),
        (14.0, 10.5, 10.0, 10.5, "bottom-right"),
        (10.0, 10.5, 10.0, 13.5, "addition-right"),
        (10.0, 13.5, 0.0, 13.5, "bottom"),
        (0.0, 13.5, 0.0, 2.5, "left"),
        // Vertical partitions
        (7.0, 2.5, 7.0, 5.5, "div-v1-top"),
        (7.0, 5.5, 7.0, 10.5, "div-v1-bot"),
        (10.5, 2.5, 10.5, 5.5, "div-v2-top"),
        (10.5, 5.5, 10.5, 10.5, "div-v2-right"),
        // Horizontal partitions
        (7.0, 5.5, 10.5, 5.5, "div-h1"),
        (10.5, 5.5, 14.0, 5.5, "div-h1-right"),
        (0.0, 8.0, 7.0, 8.0, "div-h-living"),
        (7.0, 9.0, 10.5, 9.0, "div-h-bath-bot"),
        (10.5, 9.0, 14.0, 9.0, "div-h-right-bot"),
        // Bathrooms
        (8.0, 5.5, 8.0, 9.0, "bath-left"),
        (9.5, 5.5, 9.5, 9.0, "bath-right"),
        (8.0, 7.0, 9.5, 7.0, "bath-divider"),
        // Entry and kitchen
        (1.5, 8.0, 1.5, 9.5, "entry-right"),
        (0.0, 9.5, 3.5, 9.5, "kitchen-bot"),
        (3.5, 8.0, 3.5, 10.5, "kitchen-right"),
        // Bottom row
        (0.0, 10.5, 10.0, 10.5, "div-h-bottom"),
        (4.5, 10.5, 4.5, 13.5, "safe-room-div"),
        (7.0, 9.0, 7.0, 10.5, "small-left"),
        (9.0, 9.0, 9.0, 10.5, "small-right"),
    ]
    .into_iter()
    .map(|(x1, y1, x2, y2, label)| {
        plan.insert_wall_unchecked(Wall::new(x1, y1, x2, y2).with_label(label))
    })
    .collect();

    let doors = [
        (0, 0.5, 1.2),
        (3, 0.12, 0.9),
        (9, 0.6, 0.9),
        (11, 0.6, 0.9),
        (14, 0.3, 0.8),
        (21, 0.4, 0.8),
        (21, 0.8, 0.8),
        (10, 0.25, 0.9),
        (12, 0.3, 0.9),
        (18, 0.5, 0.9),
        (16, 0.3, 0.8),
        (25, 0.5, 0.9),
        (26, 0.5, 0.9),
    ];
    for (wall, position, width) in doors {
        plan.insert_opening_unchecked(Opening::door(w[wall], position).with_width(width));
    }

    let windows = [
        (0, 0.2, 1.5),
        (0, 0.8, 1.5),
        (1, 0.5, 1.0),
        (2, 0.5, 1.0),
        (3, 0.6, 1.2),
        (3, 0.85, 1.2),
        (4, 0.25, 1.2),
        (4, 0.65, 1.2),
        (4, 0.9, 1.0),
        (8, 0.3, 1.0),
        (7, 0.7, 1.2),
        (5, 0.5, 1.0),
    ];
    for (wall, position, width) in windows {
        plan.insert_opening_unchecked(Opening::window(w[wall], position).with_width(width));
    }
    plan
}
