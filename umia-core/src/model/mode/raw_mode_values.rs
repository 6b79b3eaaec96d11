use super::RawMode;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// one value per raw mode. used for the rating and adjustment rows of a
/// persona in a scenario. fields missing from a configuration row take
/// the default value of `T`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RawModeValues<T> {
    #[serde(rename = "mod")]
    pub mod_: T,
    pub car: T,
    pub bike: T,
    pub walk: T,
    pub mm: T,
    pub pt_mod: T,
    pub pt_bike: T,
    pub pt_walk: T,
    pub pt_mm: T,
    pub mod_walk: T,
    pub mod_mm: T,
    pub car_walk: T,
    pub mm_walk: T,
}

impl<T: Copy> RawModeValues<T> {
    pub fn from_fn(mut f: impl FnMut(RawMode) -> T) -> RawModeValues<T> {
        RawModeValues {
            mod_: f(RawMode::Mod),
            car: f(RawMode::Car),
            bike: f(RawMode::Bike),
            walk: f(RawMode::Walk),
            mm: f(RawMode::Mm),
            pt_mod: f(RawMode::PtMod),
            pt_bike: f(RawMode::PtBike),
            pt_walk: f(RawMode::PtWalk),
            pt_mm: f(RawMode::PtMm),
            mod_walk: f(RawMode::ModWalk),
            mod_mm: f(RawMode::ModMm),
            car_walk: f(RawMode::CarWalk),
            mm_walk: f(RawMode::MmWalk),
        }
    }

    /// builds a row mode by mode, stopping at the first error
    pub fn try_from_fn<E>(
        mut f: impl FnMut(RawMode) -> Result<T, E>,
    ) -> Result<RawModeValues<T>, E>
    where
        T: Default,
    {
        let mut row = RawModeValues::<T>::default();
        for mode in RawMode::ALL {
            row[mode] = f(mode)?;
        }
        Ok(row)
    }

    /// builds a row from values listed in [`RawMode::ALL`] order
    pub fn from_array(values: [T; RawMode::COUNT]) -> RawModeValues<T> {
        let [mod_, car, bike, walk, mm, pt_mod, pt_bike, pt_walk, pt_mm, mod_walk, mod_mm, car_walk, mm_walk] =
            values;
        RawModeValues {
            mod_,
            car,
            bike,
            walk,
            mm,
            pt_mod,
            pt_bike,
            pt_walk,
            pt_mm,
            mod_walk,
            mod_mm,
            car_walk,
            mm_walk,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RawMode, T)> + '_ {
        RawMode::ALL.iter().map(move |m| (*m, self[*m]))
    }

    pub fn map<U: Copy>(&self, f: impl Fn(T) -> U) -> RawModeValues<U> {
        RawModeValues::from_fn(|m| f(self[m]))
    }

    pub fn to_array(&self) -> [T; RawMode::COUNT] {
        RawMode::ALL.map(|m| self[m])
    }
}

impl<T> Index<RawMode> for RawModeValues<T> {
    type Output = T;

    fn index(&self, mode: RawMode) -> &Self::Output {
        match mode {
            RawMode::Mod => &self.mod_,
            RawMode::Car => &self.car,
            RawMode::Bike => &self.bike,
            RawMode::Walk => &self.walk,
            RawMode::Mm => &self.mm,
            RawMode::PtMod => &self.pt_mod,
            RawMode::PtBike => &self.pt_bike,
            RawMode::PtWalk => &self.pt_walk,
            RawMode::PtMm => &self.pt_mm,
            RawMode::ModWalk => &self.mod_walk,
            RawMode::ModMm => &self.mod_mm,
            RawMode::CarWalk => &self.car_walk,
            RawMode::MmWalk => &self.mm_walk,
        }
    }
}

impl<T> IndexMut<RawMode> for RawModeValues<T> {
    fn index_mut(&mut self, mode: RawMode) -> &mut Self::Output {
        match mode {
            RawMode::Mod => &mut self.mod_,
            RawMode::Car => &mut self.car,
            RawMode::Bike => &mut self.bike,
            RawMode::Walk => &mut self.walk,
            RawMode::Mm => &mut self.mm,
            RawMode::PtMod => &mut self.pt_mod,
            RawMode::PtBike => &mut self.pt_bike,
            RawMode::PtWalk => &mut self.pt_walk,
            RawMode::PtMm => &mut self.pt_mm,
            RawMode::ModWalk => &mut self.mod_walk,
            RawMode::ModMm => &mut self.mod_mm,
            RawMode::CarWalk => &mut self.car_walk,
            RawMode::MmWalk => &mut self.mm_walk,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_array_order_matches_modes() {
        let values = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let row = RawModeValues::from_array(values);
        assert_eq!(row[RawMode::Mod], 0);
        assert_eq!(row[RawMode::PtMod], 5);
        assert_eq!(row[RawMode::MmWalk], 12);
        assert_eq!(row.to_array(), values);
    }

    #[test]
    fn test_try_from_fn_stops_at_first_error() {
        let row: Result<RawModeValues<u8>, RawMode> =
            RawModeValues::try_from_fn(|m| if m == RawMode::Walk { Err(m) } else { Ok(1) });
        assert_eq!(row, Err(RawMode::Walk));
        let row: Result<RawModeValues<u8>, RawMode> = RawModeValues::try_from_fn(|_| Ok(1));
        assert_eq!(row.expect("test failed").to_array(), [1; RawMode::COUNT]);
    }

    #[test]
    fn test_missing_fields_default() {
        let row: RawModeValues<i64> =
            serde_json::from_str(r#"{"mod": 2, "car": 3}"#).expect("test invariant failed");
        assert_eq!(row[RawMode::Mod], 2);
        assert_eq!(row[RawMode::Car], 3);
        assert_eq!(row.iter().filter(|(_, v)| *v == 0).count(), 11);
    }
}
