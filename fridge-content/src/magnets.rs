//! The heirloom magnet set.
//!
//! Magnets are short pieces of family philosophy, each tagged to one of five
//! pillars. A starter subset is pinned to the fridge on first run.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Thematic pillar a magnet (or wisdom fridge item) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    Identity,
    Community,
    Delight,
    Effort,
    Wonder,
}

impl Pillar {
    /// Display emoji.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Identity => "🪞",
            Self::Community => "🤝",
            Self::Delight => "🎈",
            Self::Effort => "💪",
            Self::Wonder => "✨",
        }
    }

    /// Accent color (hex).
    pub fn color(&self) -> &'static str {
        match self {
            Self::Identity => "#F59E0B",
            Self::Community => "#3B82F6",
            Self::Delight => "#EF4444",
            Self::Effort => "#10B981",
            Self::Wonder => "#8B5CF6",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Identity => "Identity",
            Self::Community => "Community",
            Self::Delight => "Delight",
            Self::Effort => "Effort",
            Self::Wonder => "Wonder",
        }
    }
}

/// A single heirloom magnet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Magnet {
    /// Stable numeric id
    pub id: u32,
    /// The magnet text
    pub text: String,
    /// Who it came from
    pub source: String,
    /// Pillar tag
    pub pillar: Pillar,
}

fn magnet(id: u32, text: &str, source: &str, pillar: Pillar) -> Magnet {
    Magnet {
        id,
        text: text.to_string(),
        source: source.to_string(),
        pillar,
    }
}

/// The bundled magnet set.
pub static MAGNETS: LazyLock<Vec<Magnet>> = LazyLock::new(|| {
    use Pillar::*;
    vec![
        magnet(1, "Know yourself, love yourself, be true to yourself.", "Grandmother", Identity),
        magnet(2, "Be sensitive to the needs of others.", "Grandmother", Community),
        magnet(3, "Be honest. Show integrity in your dealings with others.", "Grandfather", Community),
        magnet(4, "Enjoy the little things that come by. If you wait for the big happiness before being happy, you will always be sad.", "Grandfather", Delight),
        magnet(5, "Think for yourself.", "Great-grandfather", Identity),
        magnet(6, "Keep fighting. Never quit.", "Great-grandfather", Effort),
        magnet(7, "Laughing makes things easier. Don't take it all too seriously.", "Great-grandmother", Delight),
        magnet(9, "They are all just as afraid as you are.", "Grandfather", Community),
        magnet(13, "Live every minute, intensely. Pay attention to small things in life, for that is mostly what there is.", "Grandmother", Delight),
        magnet(15, "Sing. Listen to the wind. Both soothe your soul.", "Father", Wonder),
        magnet(17, "Notice what makes you light up, and do more of that.", "Wife", Identity),
        magnet(18, "Learn how to fill your own cup. Then, let it overflow to others.", "Self", Identity),
        magnet(19, "You are loved unconditionally, with a love that has been nurtured over many generations.", "Family lineage", Wonder),
        magnet(22, "Do the best you can with what you have. And have fun with it!", "Father", Effort),
        magnet(27, "Mistakes are gifts. They reveal a truth about the world to you.", "Self", Effort),
        magnet(33, "The beginning of wisdom is silence. The second stage is listening.", "Fridge magnet", Community),
        magnet(34, "The most beautiful thing we can experience is the mysterious.", "Albert Einstein", Wonder),
        magnet(37, "If you obey all the rules, you miss all the fun.", "Fridge magnet", Delight),
        magnet(39, "Those who say yes are rewarded by adventures. Those who say no are rewarded by safety.", "Fridge magnet", Delight),
        magnet(50, "Love and be loved.", "Father-in-law", Community),
        magnet(54, "Never give up, never surrender.", "Father-in-law", Effort),
        magnet(58, "Appreciate the magic of the ordinary day.", "Sister", Delight),
    ]
});

/// The most accessible, kid-friendly magnets, pinned on first run.
pub const STARTER_MAGNET_IDS: &[u32] = &[1, 7, 9, 17, 27, 33, 37, 39, 50, 58];

/// The starter magnets in listed order.
pub fn starter_magnets() -> Vec<&'static Magnet> {
    STARTER_MAGNET_IDS.iter().filter_map(|id| magnet_by_id(*id)).collect()
}

/// Look up a magnet by id.
pub fn magnet_by_id(id: u32) -> Option<&'static Magnet> {
    MAGNETS.iter().find(|m| m.id == id)
}

/// Magnets tagged with a pillar.
pub fn by_pillar(pillar: Pillar) -> Vec<&'static Magnet> {
    MAGNETS.iter().filter(|m| m.pillar == pillar).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_ids_all_resolve() {
        for id in STARTER_MAGNET_IDS {
            assert!(magnet_by_id(*id).is_some(), "starter magnet {id} missing");
        }
        assert_eq!(starter_magnets().len(), STARTER_MAGNET_IDS.len());
    }

    #[test]
    fn every_pillar_has_magnets() {
        for pillar in [Pillar::Identity, Pillar::Community, Pillar::Delight, Pillar::Effort, Pillar::Wonder] {
            assert!(!by_pillar(pillar).is_empty());
        }
    }
}
