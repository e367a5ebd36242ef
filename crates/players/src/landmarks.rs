use rps_core::*;
use rps_gameplay::*;

/// A single hand landmark in image space. Depth, when present, is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Deserialize)]
#[serde(try_from = "Vec<Distance>")]
pub struct Point {
    x: Distance,
    y: Distance,
}

impl Point {
    pub fn new(x: Distance, y: Distance) -> Self {
        Self { x, y }
    }
    pub fn distance(&self, other: &Self) -> Distance {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl TryFrom<Vec<Distance>> for Point {
    type Error = anyhow::Error;
    fn try_from(coords: Vec<Distance>) -> Result<Self, Self::Error> {
        match coords.as_slice() {
            [x, y] | [x, y, _] => Ok(Self::new(*x, *y)),
            other => Err(anyhow::anyhow!("expected 2 or 3 coordinates, got {}", other.len())),
        }
    }
}

/// The five digits, each with the three landmarks the extension test reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const fn all() -> [Self; 5] {
        [Self::Thumb, Self::Index, Self::Middle, Self::Ring, Self::Pinky]
    }
    /// Landmark indices as (tip, last joint, base).
    pub const fn joints(&self) -> (usize, usize, usize) {
        match self {
            Self::Thumb => (4, 3, 2),
            Self::Index => (8, 7, 5),
            Self::Middle => (12, 11, 9),
            Self::Ring => (16, 15, 13),
            Self::Pinky => (20, 19, 17),
        }
    }
}

/// One detected hand: 21 points in the usual hand-landmark order
/// (wrist, then four points per digit from thumb to pinky).
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(try_from = "Vec<Point>")]
pub struct Landmarks([Point; LANDMARKS]);

impl Landmarks {
    pub fn new(points: [Point; LANDMARKS]) -> Self {
        Self(points)
    }
    pub fn point(&self, index: usize) -> Point {
        self.0[index]
    }
    /// A finger is extended when its tip sits well beyond its last joint,
    /// both measured from the finger's base.
    pub fn extended(&self, finger: Finger) -> bool {
        let (tip, joint, base) = finger.joints();
        let base = self.0[base];
        self.0[tip].distance(&base) > self.0[joint].distance(&base) * EXTENSION_RATIO
    }
    /// Classify the hand shape. Ambiguous shapes are absent.
    pub fn gesture(&self) -> Option<Gesture> {
        let [thumb, index, middle, ring, pinky] = Finger::all().map(|f| self.extended(f));
        if index && middle && !ring && !pinky {
            Some(Gesture::Scissors)
        } else if !index && !middle && !ring && !pinky && thumb {
            Some(Gesture::Rock)
        } else if index && middle && ring && pinky {
            Some(Gesture::Paper)
        } else {
            None
        }
    }
}

impl TryFrom<Vec<Point>> for Landmarks {
    type Error = anyhow::Error;
    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        let n = points.len();
        <[Point; LANDMARKS]>::try_from(points)
            .map(Self)
            .map_err(|_| anyhow::anyhow!("expected {} landmarks, got {}", LANDMARKS, n))
    }
}
