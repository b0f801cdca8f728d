//! Category entity - The fixed set of games the store sells currency for.
//!
//! Categories are static and never fetched from the backend. Id 0 is shared by the
//! "all categories" filter and by products whose category could not be resolved.

use serde::Serialize;

/// Asset used for "all categories" and for products without a known game.
pub const GENERIC_ASSET: &str = "diamond";

/// Game category a product belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// Filter value meaning "every category"
    All,
    /// Mobile Legends: Bang Bang
    MobileLegends,
    /// Free Fire
    FreeFire,
    /// PUBG Mobile
    PubgMobile,
    /// Genshin Impact
    GenshinImpact,
    /// Roblox
    Roblox,
    /// Stumble Guys
    StumbleGuys,
    /// Honkai: Star Rail
    HonkaiStarRail,
    /// Call of Duty Mobile
    CallOfDutyMobile,
    /// Free Fire MAX
    FreeFireMax,
    /// The backend sent a category we do not recognise
    Unknown,
}

impl Category {
    /// The nine games, in display order.
    pub const GAMES: [Self; 9] = [
        Self::MobileLegends,
        Self::FreeFire,
        Self::PubgMobile,
        Self::GenshinImpact,
        Self::Roblox,
        Self::StumbleGuys,
        Self::HonkaiStarRail,
        Self::CallOfDutyMobile,
        Self::FreeFireMax,
    ];

    /// Numeric id used by the backend. `All` and `Unknown` both map to 0.
    pub const fn id(self) -> i64 {
        match self {
            Self::All | Self::Unknown => 0,
            Self::MobileLegends => 1,
            Self::FreeFire => 2,
            Self::PubgMobile => 3,
            Self::GenshinImpact => 4,
            Self::Roblox => 5,
            Self::StumbleGuys => 6,
            Self::HonkaiStarRail => 7,
            Self::CallOfDutyMobile => 8,
            Self::FreeFireMax => 9,
        }
    }

    /// Looks up a game by its backend id. Returns `None` for 0 and unknown ids.
    pub fn from_game_id(id: i64) -> Option<Self> {
        Self::GAMES.into_iter().find(|game| game.id() == id)
    }

    /// Parses a user-supplied filter id, where 0 means every category.
    pub fn from_filter_id(id: i64) -> Option<Self> {
        if id == 0 {
            Some(Self::All)
        } else {
            Self::from_game_id(id)
        }
    }

    /// Display name shown in the category strip.
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "Semua",
            Self::MobileLegends => "Mobile Legends: Bang Bang",
            Self::FreeFire => "Free Fire",
            Self::PubgMobile => "PUBG Mobile",
            Self::GenshinImpact => "Genshin Impact",
            Self::Roblox => "Roblox",
            Self::StumbleGuys => "Stumble Guys",
            Self::HonkaiStarRail => "Honkai: Star Rail",
            Self::CallOfDutyMobile => "Call of Duty Mobile",
            Self::FreeFireMax => "Free Fire MAX",
            Self::Unknown => "Lainnya",
        }
    }

    /// Local asset id used as the icon, and as the product image when none resolves.
    pub const fn asset(self) -> &'static str {
        match self {
            Self::All | Self::Unknown => GENERIC_ASSET,
            Self::MobileLegends => "mlbb",
            Self::FreeFire => "ff",
            Self::PubgMobile => "pubg",
            Self::GenshinImpact => "genshin",
            Self::Roblox => "roblox",
            Self::StumbleGuys => "stumble",
            Self::HonkaiStarRail => "honkai_star",
            Self::CallOfDutyMobile => "codm",
            Self::FreeFireMax => "ffmax",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
