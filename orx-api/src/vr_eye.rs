#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialization", derive(serde::Deserialize, serde::Serialize))]
pub enum Eye {
    Left,
    Right,
}

impl Eye {
    // Render and submission order
    pub const ALL: [Eye; 2] = [Eye::Left, Eye::Right];
}

impl Default for Eye {
    fn default() -> Eye {
        Eye::Left
    }
}
