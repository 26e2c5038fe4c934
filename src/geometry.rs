//! Static plan geometry: the terrace outline, its three named zones, the
//! labeled dimension segments, and the spa placement block.
//!
//! Everything in this module is configuration-driven and computed once per
//! session. The outline is produced by walking a fixed chain of directed
//! offsets (in meters) from a fixed origin corner and then applying a closure
//! correction that rederives the three doorway vertices so the final edge is
//! exactly 0.80 m wide. Zone polygons are explicit joins of the corrected
//! vertex set, not the output of any clipping step. There are no runtime
//! failure modes here — a bad entry in the tables is an authoring mistake
//! that shows up as a visibly broken outline.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::METER;
use crate::viewport::Point;

/// Which axis a chain segment moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// One directed offset in the outline chain, in meters at plan scale.
#[derive(Debug, Clone, Copy)]
pub struct SegmentSpec {
    pub axis: Axis,
    pub meters: f64,
}

const fn seg(axis: Axis, meters: f64) -> SegmentSpec {
    SegmentSpec { axis, meters }
}

/// Origin corner of the chain walk (vertex p3 of the survey).
const ORIGIN: Point = Point { x: 140.0, y: 120.0 };

/// Width of the doorway edge the closure correction enforces, in meters.
const DOORWAY_M: f64 = 0.8;

/// The surveyed offset chain, walked sequentially from [`ORIGIN`]. Produces
/// vertices p4 through the raw p1; the doorway vertices (p1, p2, p18) are
/// rederived afterwards by the closure correction in [`build`].
const CHAIN: [SegmentSpec; 16] = [
    seg(Axis::X, 2.8),  // p4
    seg(Axis::Y, -1.4), // p5
    seg(Axis::X, 6.0),  // p6
    seg(Axis::Y, 3.7),  // p7
    seg(Axis::X, -1.9), // p8
    seg(Axis::Y, 3.0),  // p9
    seg(Axis::X, 1.9),  // p10
    seg(Axis::Y, 4.6),  // p11
    seg(Axis::X, -1.7), // p12
    seg(Axis::Y, 1.0),  // p13
    seg(Axis::X, 0.5),  // p14
    seg(Axis::Y, 3.4),  // p15
    seg(Axis::X, -1.6), // p16
    seg(Axis::Y, -6.1), // p17
    seg(Axis::X, -4.8), // p18
    seg(Axis::Y, -1.3), // p1 (raw, before correction)
];

/// Identifier for one of the three fixed zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneId {
    /// Upper gourmet / dining sector.
    Top,
    /// Central social sector around the spa.
    Jacuzzi,
    /// Lower hammock extension.
    Extension,
}

/// A static named sub-region of the outline, used for descriptive hover
/// highlighting. Unrelated to furniture placement.
#[derive(Debug, Clone, Serialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: &'static str,
    pub description: &'static str,
    /// Approximate area label, e.g. `"~29m²"`.
    pub area: &'static str,
    /// Display color as a CSS hex string.
    pub color: &'static str,
    /// Closed boundary polygon (first vertex repeated last).
    #[serde(skip)]
    pub polygon: Vec<Point>,
}

/// Preferred placement side for a dimension callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// One labeled measurement between two outline vertices.
#[derive(Debug, Clone, Copy)]
pub struct DimSegment {
    /// Survey index shown in the midpoint badge (1–18).
    pub index: u8,
    pub a: Point,
    pub b: Point,
    /// Literal length text, e.g. `"2.80"`. Label text is as printed on the
    /// survey; the corrected chain is authoritative for geometry, and the
    /// two are not re-reconciled here.
    pub label: &'static str,
    pub side: Side,
}

/// Placement of the fixed spa (jacuzzi) block inside the social zone.
#[derive(Debug, Clone, Copy)]
pub struct Spa {
    /// Top-left corner in scene space.
    pub x: f64,
    pub y: f64,
    /// Side length of the square shell.
    pub size: f64,
    /// Technical clearance to the adjacent walls, right and top.
    pub gap: f64,
}

/// The full static backdrop: outline, zones, dimensions, spa.
#[derive(Debug, Clone)]
pub struct FloorPlan {
    /// Corrected outline ring; the last vertex equals the first.
    pub outline: Vec<Point>,
    pub zones: Vec<Zone>,
    pub dimensions: Vec<DimSegment>,
    pub spa: Spa,
}

/// Walk [`CHAIN`] from [`ORIGIN`], returning the raw vertex sequence
/// starting with the origin itself.
#[must_use]
pub fn walk_chain() -> Vec<Point> {
    let mut pts = Vec::with_capacity(CHAIN.len() + 1);
    let mut cur = ORIGIN;
    pts.push(cur);
    for spec in CHAIN {
        match spec.axis {
            Axis::X => cur.x += spec.meters * METER,
            Axis::Y => cur.y += spec.meters * METER,
        }
        pts.push(cur);
    }
    pts
}

/// Build the full plan. Pure function of the fixed tables above.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn build() -> FloorPlan {
    let chain = walk_chain();

    // Raw chain vertices, in survey numbering.
    let p3 = chain[0];
    let p4 = chain[1];
    let p5 = chain[2];
    let p6 = chain[3];
    let p7 = chain[4];
    let p8 = chain[5];
    let p9 = chain[6];
    let p10 = chain[7];
    let p11 = chain[8];
    let p12 = chain[9];
    let p13 = chain[10];
    let p14 = chain[11];
    let p15 = chain[12];
    let p16 = chain[13];
    let p17 = chain[14];
    let p1_raw = chain[16];

    // Closure correction: rederive the doorway vertices from the origin
    // column and the raw closing height so the final edge is exactly the
    // doorway width. The raw chain does not close on its own.
    let p2 = Point::new(p3.x, p1_raw.y);
    let p1 = Point::new(p2.x + DOORWAY_M * METER, p1_raw.y);
    let p18 = Point::new(p1.x, p17.y);

    let outline = vec![
        p2, p3, p4, p5, p6, p7, p8, p9, p10, p11, p12, p13, p14, p15, p16, p17, p18, p1, p2,
    ];

    // Shared corner where the gourmet and social zones meet on the left wall.
    let top_split = Point::new(p3.x, p7.y);
    // Inner corner of the extension notch.
    let notch = Point::new(p12.x, p17.y);

    let zones = vec![
        Zone {
            id: ZoneId::Top,
            name: "Área Gourmet",
            description: "Setor superior plano com paisagismo lateral (h=2.30m). \
                          Ideal para mesa de jantar e circulação.",
            area: "~29m²",
            color: "#5aaa5a",
            polygon: vec![top_split, p3, p4, p5, p6, p7, p8, top_split],
        },
        Zone {
            id: ZoneId::Jacuzzi,
            name: "Área Social",
            description: "SPA de 2.20m² centralizado com circulações técnicas de 0.80m.",
            area: "~22m²",
            color: "#4ecdc4",
            polygon: vec![
                top_split,
                p8,
                p9,
                p10,
                p11,
                p12,
                notch,
                Point::new(p18.x, p17.y),
                Point::new(p18.x, p1.y),
                p2,
                top_split,
            ],
        },
        Zone {
            id: ZoneId::Extension,
            name: "Área da Rede",
            description: "Espaço de relaxamento e leitura, ideal para redário. Piso revestido.",
            area: "~11m²",
            color: "#ff9f43",
            polygon: vec![p17, notch, p12, p13, p14, p15, p16, p17],
        },
    ];

    let dimensions = vec![
        DimSegment { index: 3, a: p2, b: p3, label: "6.50", side: Side::Left },
        DimSegment { index: 4, a: p3, b: p4, label: "2.80", side: Side::Top },
        DimSegment { index: 5, a: p4, b: p5, label: "1.40", side: Side::Left },
        DimSegment { index: 6, a: p5, b: p6, label: "6.00", side: Side::Top },
        DimSegment { index: 7, a: p6, b: p7, label: "3.70", side: Side::Right },
        DimSegment { index: 8, a: p7, b: p8, label: "1.90", side: Side::Bottom },
        DimSegment { index: 9, a: p8, b: p9, label: "3.00", side: Side::Left },
        DimSegment { index: 10, a: p9, b: p10, label: "1.90", side: Side::Top },
        DimSegment { index: 11, a: p10, b: p11, label: "4.60", side: Side::Right },
        DimSegment { index: 12, a: p11, b: p12, label: "1.70", side: Side::Top },
        DimSegment { index: 13, a: p12, b: p13, label: "1.00", side: Side::Left },
        DimSegment { index: 14, a: p13, b: p14, label: "0.50", side: Side::Top },
        DimSegment { index: 15, a: p14, b: p15, label: "3.40", side: Side::Right },
        DimSegment { index: 16, a: p15, b: p16, label: "1.60", side: Side::Bottom },
        DimSegment { index: 17, a: p16, b: p17, label: "6.10", side: Side::Left },
        DimSegment { index: 18, a: p17, b: p18, label: "4.80", side: Side::Bottom },
        DimSegment { index: 1, a: p18, b: p1, label: "1.30", side: Side::Left },
        DimSegment { index: 2, a: p1, b: p2, label: "0.80", side: Side::Top },
    ];

    let spa_size = 2.2 * METER;
    let spa_gap = DOORWAY_M * METER;
    let spa = Spa {
        x: p9.x - spa_gap - spa_size,
        y: p7.y + spa_gap,
        size: spa_size,
        gap: spa_gap,
    };

    FloorPlan { outline, zones, dimensions, spa }
}

impl FloorPlan {
    /// The zone under `pt`, if any. Zones are checked in declaration order;
    /// they only share boundary edges, so the order is not observable away
    /// from the shared walls.
    #[must_use]
    pub fn zone_at(&self, pt: Point) -> Option<ZoneId> {
        self.zones
            .iter()
            .find(|z| point_in_polygon(pt, &z.polygon))
            .map(|z| z.id)
    }
}

/// Ray-cast containment test. Accepts the polygon with or without the
/// closing duplicate vertex.
#[must_use]
pub fn point_in_polygon(pt: Point, polygon: &[Point]) -> bool {
    let mut verts = polygon;
    if verts.len() >= 2 && verts.first() == verts.last() {
        verts = &verts[..verts.len() - 1];
    }
    if verts.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = verts.len() - 1;
    for i in 0..verts.len() {
        let (a, b) = (verts[i], verts[j]);
        let crosses = (a.y > pt.y) != (b.y > pt.y);
        if crosses {
            let x_at = (b.x - a.x) * (pt.y - a.y) / (b.y - a.y) + a.x;
            if pt.x < x_at {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
