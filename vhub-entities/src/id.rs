use std::{fmt, num::ParseIntError, str::FromStr};

/// Numeric identifier assigned by the database.
///
/// All persistent entities are identified by an auto-incremented
/// 64-bit integer.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Id(i64);

impl Id {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for Id {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<Id> for i64 {
    fn from(from: Id) -> Self {
        from.0
    }
}

impl FromStr for Id {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Id, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}
