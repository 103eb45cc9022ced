//! Elemental typing for bosses.

/// The six boss elements.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Element {
    #[default]
    Fire,
    Ice,
    Lightning,
    Earth,
    Wind,
    Shadow,
}

impl Element {
    /// Total number of elements.
    pub const COUNT: usize = 6;

    /// Returns all elements in canonical order.
    pub const fn all() -> [Element; Self::COUNT] {
        [
            Element::Fire,
            Element::Ice,
            Element::Lightning,
            Element::Earth,
            Element::Wind,
            Element::Shadow,
        ]
    }
}

/// A per-element value table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementTable<T> {
    pub fire: T,
    pub ice: T,
    pub lightning: T,
    pub earth: T,
    pub wind: T,
    pub shadow: T,
}

impl<T> ElementTable<T> {
    /// Look up the value for an element.
    #[inline]
    pub const fn get(&self, element: Element) -> &T {
        match element {
            Element::Fire => &self.fire,
            Element::Ice => &self.ice,
            Element::Lightning => &self.lightning,
            Element::Earth => &self.earth,
            Element::Wind => &self.wind,
            Element::Shadow => &self.shadow,
        }
    }
}
