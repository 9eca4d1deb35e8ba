//! Nicknames shown on the star map.

/// Marker position as percentages of the sky section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// A nickname paired with the reason behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nickname {
    pub name: &'static str,
    pub reason: &'static str,
    pub position: Position,
}

/// The nickname revealed by the moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecialNickname {
    pub name: &'static str,
    pub message: &'static str,
}

pub const NICKNAMES: [Nickname; 5] = [
    Nickname {
        name: "Sweetie",
        reason: "Because you're the sweetest person I know",
        position: Position { x: 20.0, y: 30.0 },
    },
    Nickname {
        name: "Princess",
        reason: "Because you deserve to be treated like royalty",
        position: Position { x: 60.0, y: 15.0 },
    },
    Nickname {
        name: "Sunshine",
        reason: "Because you light up my world",
        position: Position { x: 80.0, y: 40.0 },
    },
    Nickname {
        name: "Angel",
        reason: "Because you're a blessing in my life",
        position: Position { x: 40.0, y: 60.0 },
    },
    Nickname {
        name: "Jaan",
        reason: "Because you're my life",
        position: Position { x: 70.0, y: 70.0 },
    },
];

pub const SPECIAL_NICKNAME: SpecialNickname = SpecialNickname {
    name: "My Everything",
    message: "You're the most precious person in my life. Every moment with you is a blessing, and I cherish you more than words can express.",
};
