use crate::models::WardrobeItem;

/// Coarse color family a free-text color name resolves into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFamily {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Neutral,
}

/// Family membership by color-name substring, checked in declaration order
const FAMILY_TABLE: &[(ColorFamily, &[&str])] = &[
    (
        ColorFamily::Red,
        &["red", "burgundy", "maroon", "pink", "rose"],
    ),
    (ColorFamily::Orange, &["orange", "peach", "coral", "amber"]),
    (ColorFamily::Yellow, &["yellow", "gold", "mustard", "lemon"]),
    (
        ColorFamily::Green,
        &["green", "olive", "mint", "lime", "emerald", "sage"],
    ),
    (
        ColorFamily::Blue,
        &["blue", "navy", "teal", "aqua", "turquoise", "sky blue"],
    ),
    (
        ColorFamily::Purple,
        &["purple", "lavender", "violet", "magenta", "plum"],
    ),
    (
        ColorFamily::Neutral,
        &[
            "black", "white", "gray", "beige", "tan", "brown", "cream", "ivory", "silver",
        ],
    ),
];

/// Family pairs sitting opposite each other on the color wheel
const COMPLEMENTARY_PAIRS: &[(ColorFamily, ColorFamily)] = &[
    (ColorFamily::Red, ColorFamily::Green),
    (ColorFamily::Blue, ColorFamily::Orange),
    (ColorFamily::Yellow, ColorFamily::Purple),
];

/// Harmony when either garment's color is unknown
pub const UNKNOWN_HARMONY: f64 = 0.5;
const SAME_FAMILY_HARMONY: f64 = 0.8;
const COMPLEMENTARY_HARMONY: f64 = 1.0;
const NEUTRAL_HARMONY: f64 = 0.9;
const DEFAULT_HARMONY: f64 = 0.6;

impl ColorFamily {
    /// Resolves a free-text color name to its family.
    ///
    /// The first family whose member names appear as a substring wins;
    /// unknown or missing colors resolve to neutral.
    pub fn resolve(color: Option<&str>) -> Self {
        let Some(color) = color else {
            return ColorFamily::Neutral;
        };
        let color = color.to_lowercase();

        FAMILY_TABLE
            .iter()
            .find(|(_, names)| names.iter().any(|name| color.contains(name)))
            .map(|(family, _)| *family)
            .unwrap_or(ColorFamily::Neutral)
    }

    /// Whether this family pairs with everything
    pub fn is_neutral(&self) -> bool {
        matches!(self, ColorFamily::Neutral)
    }

    /// Whether the two families complement each other
    pub fn complements(&self, other: ColorFamily) -> bool {
        COMPLEMENTARY_PAIRS
            .iter()
            .any(|&(a, b)| (a == *self && b == other) || (a == other && b == *self))
    }
}

/// Scores how well two garments' colors combine, in [0, 1].
///
/// Missing colors score a neutral 0.5 rather than penalizing the pair.
pub fn harmony(a: &WardrobeItem, b: &WardrobeItem) -> f64 {
    let (Some(color_a), Some(color_b)) = (a.declared_color(), b.declared_color()) else {
        return UNKNOWN_HARMONY;
    };

    let family_a = ColorFamily::resolve(Some(color_a));
    let family_b = ColorFamily::resolve(Some(color_b));

    if family_a == family_b {
        SAME_FAMILY_HARMONY
    } else if family_a.complements(family_b) {
        COMPLEMENTARY_HARMONY
    } else if family_a.is_neutral() || family_b.is_neutral() {
        NEUTRAL_HARMONY
    } else {
        DEFAULT_HARMONY
    }
}
