/// Group color assignment

use serde::{Deserialize, Serialize};

/// The colors Chrome accepts for a tab group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupColor {
    Grey,
    Blue,
    Red,
    Yellow,
    Green,
    Pink,
    Purple,
    Cyan,
    Orange,
}

/// Every color a randomly assigned group may receive.
pub const PALETTE: [GroupColor; 9] = [
    GroupColor::Blue,
    GroupColor::Cyan,
    GroupColor::Green,
    GroupColor::Grey,
    GroupColor::Orange,
    GroupColor::Pink,
    GroupColor::Purple,
    GroupColor::Red,
    GroupColor::Yellow,
];

/// Source of randomness for fallback color picks.
///
/// Injected rather than called ambiently so tests can pin the pick.
pub trait RandomSource {
    /// A uniformly distributed index in `0..bound`.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Production randomness, backed by the platform entropy source.
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        let mut buf = [0u8; 4];
        if getrandom::getrandom(&mut buf).is_err() {
            return 0;
        }
        u32::from_le_bytes(buf) as usize % bound.max(1)
    }
}

/// Pick the color for a site identity.
///
/// A handful of well-known sites are pinned so their groups stay recognizable
/// across sessions; anything else draws a random palette member. Random picks
/// are not stable across calls — a group is colored once at creation and the
/// color then lives on the group.
pub fn color_for(identity: &str, rng: &mut impl RandomSource) -> GroupColor {
    match identity.to_lowercase().as_str() {
        "instagram" => GroupColor::Pink,
        "chatgpt" => GroupColor::Cyan,
        "youtube" => GroupColor::Red,
        "facebook" => GroupColor::Blue,
        "flipkart" => GroupColor::Yellow,
        _ => PALETTE[rng.next_index(PALETTE.len())],
    }
}

#[cfg(test)]
pub(crate) struct FixedRandom(pub usize);

#[cfg(test)]
impl RandomSource for FixedRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0 % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_sites_are_stable() {
        for _ in 0..3 {
            assert_eq!(color_for("instagram", &mut FixedRandom(0)), GroupColor::Pink);
            assert_eq!(color_for("chatgpt", &mut FixedRandom(3)), GroupColor::Cyan);
            assert_eq!(color_for("youtube", &mut FixedRandom(5)), GroupColor::Red);
            assert_eq!(color_for("facebook", &mut FixedRandom(7)), GroupColor::Blue);
            assert_eq!(color_for("flipkart", &mut FixedRandom(8)), GroupColor::Yellow);
        }
    }

    #[test]
    fn test_pinned_lookup_is_case_insensitive() {
        assert_eq!(color_for("YouTube", &mut FixedRandom(0)), GroupColor::Red);
        assert_eq!(color_for("FACEBOOK", &mut FixedRandom(0)), GroupColor::Blue);
    }

    #[test]
    fn test_unknown_sites_draw_from_the_palette() {
        for i in 0..PALETTE.len() {
            let color = color_for("somewhere-new", &mut FixedRandom(i));
            assert!(PALETTE.contains(&color));
            assert_eq!(color, PALETTE[i]);
        }
    }

    #[test]
    fn test_os_random_stays_in_bounds() {
        let mut rng = OsRandom;
        for _ in 0..32 {
            assert!(rng.next_index(PALETTE.len()) < PALETTE.len());
        }
    }

    #[test]
    fn test_serializes_to_chrome_names() {
        assert_eq!(
            serde_json::to_string(&GroupColor::Grey).unwrap(),
            "\"grey\""
        );
        let color: GroupColor = serde_json::from_str("\"cyan\"").unwrap();
        assert_eq!(color, GroupColor::Cyan);
    }
}
