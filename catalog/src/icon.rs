use crate::CatalogError;
use lazy_static::lazy_static;
use std::collections::HashMap;

pub const DEFAULT_ICON: &str = "🎬";

lazy_static! {
    static ref ICONS: HashMap<&'static str, &'static str> = {
        let pairs: &[(&str, &str)] = &[
            ("the prison escape", "🔒"),
            ("the family boss", "👔"),
            ("the masked hero", "🦇"),
            ("urban stories", "🌆"),
            ("life journey", "🏃"),
            ("dream heist", "💭"),
            ("the virtual world", "🕶️"),
            ("the wise guys", "🤵"),
            ("the quest for the ring", "💍"),
            ("space wars: the beginning", "🚀"),
            ("the factory owner", "🏭"),
            ("underground club", "👊"),
        ];
        pairs.iter().copied().collect()
    };
}

/// Decorative icon for a movie title. The lower-cased title must equal a known
/// phrase exactly; surrounding whitespace is not trimmed.
pub fn icon_for(title: &str) -> &'static str {
    ICONS.get(title.to_lowercase().as_str()).copied().unwrap_or(DEFAULT_ICON)
}

/// Same as [`icon_for`], but for callers whose title may be absent. An absent
/// title is an error rather than the default icon.
pub fn try_icon_for(title: Option<&str>) -> Result<&'static str, CatalogError> {
    title.map(icon_for).ok_or(CatalogError::MissingTitle)
}
