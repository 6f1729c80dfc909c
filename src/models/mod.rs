pub mod company;
pub mod employee;
pub mod health;

use serde::{Deserialize, Deserializer};

/// Distinguishes an absent PATCH field from an explicit null: an absent
/// field stays `None`, a present field becomes `Some(..)` with the inner
/// `None` carrying "clear the stored value".
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}
