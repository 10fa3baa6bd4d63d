use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade, declared best to worst so `A < E` under `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    pub const fn ordered() -> [Self; 5] {
        [Self::A, Self::B, Self::C, Self::D, Self::E]
    }

    pub const fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Bands a net score into a grade. Cut-points are inclusive upper bounds and
/// apply to every category alike.
///
/// | net score | grade |
/// |-----------|-------|
/// | <= -1     | A     |
/// | <= 2      | B     |
/// | <= 10     | C     |
/// | <= 18     | D     |
/// | otherwise | E     |
pub fn grade(net: i32) -> Grade {
    match net {
        n if n <= -1 => Grade::A,
        n if n <= 2 => Grade::B,
        n if n <= 10 => Grade::C,
        n if n <= 18 => Grade::D,
        _ => Grade::E,
    }
}
