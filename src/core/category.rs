//! Category resolution for incoming product records.
//!
//! The backend identifies a product's game either by a numeric `category_id` or by a
//! free-text `kategori`. Both are mapped onto [`Category`]; anything unrecognised
//! becomes [`Category::Unknown`].

use crate::{
    entities::Category,
    errors::{Error, Result},
};

/// Maps a free-text game token onto a category. Case and surrounding whitespace are
/// ignored; full titles and common short forms are accepted.
pub fn from_token(token: &str) -> Category {
    let normalized = token.trim().to_lowercase();
    match normalized.as_str() {
        "mobile legends: bang bang" | "mobile legends" | "mlbb" | "ml" => {
            Category::MobileLegends
        }
        "free fire" | "ff" => Category::FreeFire,
        "pubg mobile" | "pubg" | "pubgm" => Category::PubgMobile,
        "genshin impact" | "genshin" => Category::GenshinImpact,
        "roblox" => Category::Roblox,
        "stumble guys" | "stumble" => Category::StumbleGuys,
        "honkai: star rail" | "honkai star rail" | "hsr" => Category::HonkaiStarRail,
        "call of duty mobile" | "call of duty: mobile" | "codm" => Category::CallOfDutyMobile,
        "free fire max" | "ff max" | "ffmax" => Category::FreeFireMax,
        _ => Category::Unknown,
    }
}

/// Resolves a product's category. A known numeric id wins; otherwise the text is
/// mapped; otherwise the category is unknown.
pub fn resolve(category_id: Option<i64>, kategori: Option<&str>) -> Category {
    if let Some(category) = category_id.and_then(Category::from_game_id) {
        return category;
    }

    match kategori {
        Some(text) if !text.trim().is_empty() => {
            let category = from_token(text);
            if category == Category::Unknown {
                tracing::debug!("Unrecognised category text {:?}", text);
            }
            category
        }
        _ => Category::Unknown,
    }
}

/// Parses a category filter picked by the user, where 0 selects every category.
///
/// # Errors
/// Returns [`Error::UnknownCategory`] for any other id that is not a known game.
pub fn filter(id: i64) -> Result<Category> {
    Category::from_filter_id(id).ok_or(Error::UnknownCategory { id })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_every_game_name_maps_to_itself() {
        for game in Category::GAMES {
            assert_eq!(from_token(game.name()), game, "{game:?}");
        }
    }

    #[test]
    fn test_token_matching_ignores_case_and_whitespace() {
        assert_eq!(from_token("  FREE FIRE MAX "), Category::FreeFireMax);
        assert_eq!(from_token("mlbb"), Category::MobileLegends);
        assert_eq!(from_token("Genshin"), Category::GenshinImpact);
        assert_eq!(from_token("Valorant"), Category::Unknown);
        assert_eq!(from_token(""), Category::Unknown);
    }

    #[test]
    fn test_numeric_id_preferred_over_text() {
        assert_eq!(resolve(Some(5), Some("Free Fire")), Category::Roblox);
    }

    #[test]
    fn test_unknown_id_falls_back_to_text() {
        assert_eq!(resolve(Some(0), Some("PUBG Mobile")), Category::PubgMobile);
        assert_eq!(resolve(Some(77), Some("Roblox")), Category::Roblox);
    }

    #[test]
    fn test_nothing_usable_is_unknown() {
        assert_eq!(resolve(None, None), Category::Unknown);
        assert_eq!(resolve(None, Some("   ")), Category::Unknown);
        assert_eq!(resolve(Some(99), None), Category::Unknown);
    }

    #[test]
    fn test_filter_accepts_all_and_games_only() {
        assert_eq!(filter(0).unwrap(), Category::All);
        assert_eq!(filter(9).unwrap(), Category::FreeFireMax);
        assert!(matches!(filter(42), Err(Error::UnknownCategory { id: 42 })));
        assert!(matches!(filter(-1), Err(Error::UnknownCategory { id: -1 })));
    }
}
