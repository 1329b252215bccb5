//! Fixed shape layouts for each pose.
//!
//! Three rows in sprite-local coordinates: a wheel pair at y=6, the
//! diamond body at y=24, a wheel pair at y=42. The offsets and ellipse
//! radii are hand-tuned and kept as literal tables.

use crate::model::Pose;

pub const TOP_ROW: f64 = 6.0;
pub const BODY_ROW: f64 = 24.0;
pub const BOTTOM_ROW: f64 = 42.0;

/// One primitive in a layout, anchored at its own center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Part {
    /// Filled `o`, radius 3.
    SmallWheel { x: f64, y: f64 },
    /// Hollow `O`, radius 4.
    LargeWheel { x: f64, y: f64 },
    /// Filled ellipse used for the facing poses.
    EllipseWheel { x: f64, y: f64, rx: f64, ry: f64 },
    /// Filled `●`, radius 2.
    Hub { x: f64, y: f64 },
    /// `◆` with half-diagonal 6.
    Diamond { x: f64, y: f64 },
}

impl Part {
    pub fn center(&self) -> (f64, f64) {
        match *self {
            Part::SmallWheel { x, y }
            | Part::LargeWheel { x, y }
            | Part::EllipseWheel { x, y, .. }
            | Part::Hub { x, y }
            | Part::Diamond { x, y } => (x, y),
        }
    }

    pub fn is_wheel(&self) -> bool {
        matches!(
            self,
            Part::SmallWheel { .. } | Part::LargeWheel { .. } | Part::EllipseWheel { .. }
        )
    }
}

pub static NORMAL: [Part; 7] = [
    Part::SmallWheel { x: 8.0, y: TOP_ROW },
    Part::Hub {
        x: 20.0,
        y: TOP_ROW,
    },
    Part::SmallWheel {
        x: 32.0,
        y: TOP_ROW,
    },
    Part::Diamond {
        x: 20.0,
        y: BODY_ROW,
    },
    Part::LargeWheel {
        x: 8.0,
        y: BOTTOM_ROW,
    },
    Part::Hub {
        x: 20.0,
        y: BOTTOM_ROW,
    },
    Part::LargeWheel {
        x: 32.0,
        y: BOTTOM_ROW,
    },
];

/// Large wheels pushed outward on top, small wheels below.
pub static DAMAGED: [Part; 7] = [
    Part::LargeWheel { x: 6.0, y: TOP_ROW },
    Part::Hub {
        x: 20.0,
        y: TOP_ROW,
    },
    Part::LargeWheel {
        x: 34.0,
        y: TOP_ROW,
    },
    Part::Diamond {
        x: 20.0,
        y: BODY_ROW,
    },
    Part::SmallWheel {
        x: 8.0,
        y: BOTTOM_ROW,
    },
    Part::Hub {
        x: 20.0,
        y: BOTTOM_ROW,
    },
    Part::SmallWheel {
        x: 32.0,
        y: BOTTOM_ROW,
    },
];

pub static FACING_LEFT: [Part; 7] = [
    Part::EllipseWheel {
        x: 6.0,
        y: TOP_ROW,
        rx: 4.0,
        ry: 3.0,
    },
    Part::Hub {
        x: 18.0,
        y: TOP_ROW,
    },
    Part::EllipseWheel {
        x: 30.0,
        y: TOP_ROW,
        rx: 3.0,
        ry: 4.0,
    },
    Part::Diamond {
        x: 18.0,
        y: BODY_ROW,
    },
    Part::EllipseWheel {
        x: 6.0,
        y: BOTTOM_ROW,
        rx: 5.0,
        ry: 4.0,
    },
    Part::Hub {
        x: 18.0,
        y: BOTTOM_ROW,
    },
    Part::EllipseWheel {
        x: 30.0,
        y: BOTTOM_ROW,
        rx: 4.0,
        ry: 5.0,
    },
];

pub static FACING_RIGHT: [Part; 7] = [
    Part::EllipseWheel {
        x: 10.0,
        y: TOP_ROW,
        rx: 3.0,
        ry: 4.0,
    },
    Part::Hub {
        x: 22.0,
        y: TOP_ROW,
    },
    Part::EllipseWheel {
        x: 34.0,
        y: TOP_ROW,
        rx: 4.0,
        ry: 3.0,
    },
    Part::Diamond {
        x: 22.0,
        y: BODY_ROW,
    },
    Part::EllipseWheel {
        x: 10.0,
        y: BOTTOM_ROW,
        rx: 4.0,
        ry: 5.0,
    },
    Part::Hub {
        x: 22.0,
        y: BOTTOM_ROW,
    },
    Part::EllipseWheel {
        x: 34.0,
        y: BOTTOM_ROW,
        rx: 5.0,
        ry: 4.0,
    },
];

/// The parts painted for `pose`, in paint order.
pub fn parts(pose: Pose) -> &'static [Part] {
    match pose {
        Pose::Normal => &NORMAL,
        Pose::Damaged => &DAMAGED,
        Pose::FacingLeft => &FACING_LEFT,
        Pose::FacingRight => &FACING_RIGHT,
    }
}

/// Horizontal distance between the two wheels of a row.
pub fn wheel_gap(pose: Pose, row_y: f64) -> Option<f64> {
    let xs: Vec<f64> = parts(pose)
        .iter()
        .filter(|p| p.is_wheel() && p.center().1 == row_y)
        .map(|p| p.center().0)
        .collect();
    match xs.as_slice() {
        [a, b] => Some((b - a).abs()),
        _ => None,
    }
}
