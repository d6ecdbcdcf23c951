//! Identity databases available for UUID/IGN conversion.

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The database a conversion lookup runs against.
///
/// Renders as the lowercase path segment used by `/convert/{collection}`.
///
/// ## Examples
///
/// ```rust
/// use antisniper::Collection;
///
/// assert_eq!(Collection::default(), Collection::Mojang);
/// assert_eq!(Collection::Hypixel.to_string(), "hypixel");
///
/// let parsed: Collection = "Hypixel".parse().unwrap();
/// assert_eq!(parsed, Collection::Hypixel);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Collection {
    /// Mojang's account database.
    #[default]
    Mojang,
    /// Hypixel's player database.
    Hypixel,
}

impl Collection {
    /// Returns the `/convert/...` path for this collection.
    pub fn convert_path(self) -> String {
        format!("/convert/{self}")
    }
}
