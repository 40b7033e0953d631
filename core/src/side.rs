//! The six cube-map faces and their viewing angles.

/// One face of the cube map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Side {
    /// File stem used on disk and inside the pack (`panorama_N`).
    pub key: &'static str,
    /// Human-readable direction, used in logs and errors.
    pub name: &'static str,
    /// Horizontal angle in degrees.
    pub heading: u16,
    /// Vertical angle in degrees (positive is up).
    pub pitch: i16,
}

/// Cube-map faces in the order the title screen expects them.
pub const SIDES: [Side; 6] = [
    Side {
        key: "panorama_0",
        name: "front",
        heading: 0,
        pitch: 0,
    },
    Side {
        key: "panorama_1",
        name: "right",
        heading: 90,
        pitch: 0,
    },
    Side {
        key: "panorama_2",
        name: "back",
        heading: 180,
        pitch: 0,
    },
    Side {
        key: "panorama_3",
        name: "left",
        heading: 270,
        pitch: 0,
    },
    Side {
        key: "panorama_4",
        name: "up",
        heading: 0,
        pitch: 90,
    },
    Side {
        key: "panorama_5",
        name: "down",
        heading: 0,
        pitch: -90,
    },
];
