use super::CanonicalMode;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// one value per canonical mode, such as km traveled or an impact coefficient.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct ModeValues<T> {
    pub pt: T,
    pub car: T,
    #[serde(rename = "mod")]
    pub mod_: T,
    pub mm: T,
    pub bike: T,
    pub walk: T,
}

impl<T: Copy> ModeValues<T> {
    pub fn from_fn(mut f: impl FnMut(CanonicalMode) -> T) -> ModeValues<T> {
        ModeValues {
            pt: f(CanonicalMode::Pt),
            car: f(CanonicalMode::Car),
            mod_: f(CanonicalMode::Mod),
            mm: f(CanonicalMode::Mm),
            bike: f(CanonicalMode::Bike),
            walk: f(CanonicalMode::Walk),
        }
    }

    /// values in [`CanonicalMode::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalMode, T)> + '_ {
        CanonicalMode::ALL.iter().map(move |m| (*m, self[*m]))
    }

    pub fn map<U: Copy>(&self, f: impl Fn(T) -> U) -> ModeValues<U> {
        ModeValues::from_fn(|m| f(self[m]))
    }
}

impl ModeValues<f64> {
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }

    /// sum of the products with another set of per-mode values
    pub fn dot(&self, other: &ModeValues<f64>) -> f64 {
        self.iter().map(|(m, v)| v * other[m]).sum()
    }
}

impl<T> Index<CanonicalMode> for ModeValues<T> {
    type Output = T;

    fn index(&self, mode: CanonicalMode) -> &Self::Output {
        match mode {
            CanonicalMode::Pt => &self.pt,
            CanonicalMode::Car => &self.car,
            CanonicalMode::Mod => &self.mod_,
            CanonicalMode::Mm => &self.mm,
            CanonicalMode::Bike => &self.bike,
            CanonicalMode::Walk => &self.walk,
        }
    }
}

impl<T> IndexMut<CanonicalMode> for ModeValues<T> {
    fn index_mut(&mut self, mode: CanonicalMode) -> &mut Self::Output {
        match mode {
            CanonicalMode::Pt => &mut self.pt,
            CanonicalMode::Car => &mut self.car,
            CanonicalMode::Mod => &mut self.mod_,
            CanonicalMode::Mm => &mut self.mm,
            CanonicalMode::Bike => &mut self.bike,
            CanonicalMode::Walk => &mut self.walk,
        }
    }
}
