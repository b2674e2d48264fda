//! Sub-models instantiated once per design load case.

/// Identifies one of the two design load cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoadCase {
    One,
    Two,
}

/// A pair of independent sub-models, one per design load case.
///
/// Both copies are separate values even when built from the same
/// parameters, so consumers may evaluate each case on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadCases<T> {
    pub case1: T,
    pub case2: T,
}

impl<T: Clone> LoadCases<T> {
    /// Builds both load cases from the same parameters.
    #[must_use]
    pub fn duplicate(model: T) -> Self {
        Self {
            case1: model.clone(),
            case2: model,
        }
    }
}

impl<T> LoadCases<T> {
    /// Returns the sub-model for a load case.
    #[must_use]
    pub fn get(&self, case: LoadCase) -> &T {
        match case {
            LoadCase::One => &self.case1,
            LoadCase::Two => &self.case2,
        }
    }

    /// Iterates over both cases in order.
    pub fn iter(&self) -> impl Iterator<Item = (LoadCase, &T)> {
        [(LoadCase::One, &self.case1), (LoadCase::Two, &self.case2)].into_iter()
    }

    /// Applies a function to both cases.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> LoadCases<U> {
        LoadCases {
            case1: f(self.case1),
            case2: f(self.case2),
        }
    }
}
