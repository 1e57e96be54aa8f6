use crate::error::{TableError, TableResult};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumCount, EnumIter};

pub const FINGER_COUNT: usize = 10;

/// Two-letter names, indexed by finger id.
pub const FINGER_NAMES: [&str; FINGER_COUNT] =
    ["LP", "LR", "LM", "LI", "LT", "RT", "RI", "RM", "RR", "RP"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Hand {
    Left,
    Right,
}

/// One of the ten fingers, numbered from the left pinky (0) to the right pinky (9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount)]
#[repr(u8)]
pub enum Finger {
    LeftPinky = 0,
    LeftRing = 1,
    LeftMiddle = 2,
    LeftIndex = 3,
    LeftThumb = 4,
    RightThumb = 5,
    RightIndex = 6,
    RightMiddle = 7,
    RightRing = 8,
    RightPinky = 9,
}

pub const FINGERS: [Finger; FINGER_COUNT] = [
    Finger::LeftPinky,
    Finger::LeftRing,
    Finger::LeftMiddle,
    Finger::LeftIndex,
    Finger::LeftThumb,
    Finger::RightThumb,
    Finger::RightIndex,
    Finger::RightMiddle,
    Finger::RightRing,
    Finger::RightPinky,
];

impl Finger {
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> TableResult<Self> {
        FINGERS
            .get(index)
            .copied()
            .ok_or_else(|| TableError::Parse(format!("Finger id {} is outside 0-9", index)))
    }

    pub const fn name(self) -> &'static str {
        FINGER_NAMES[self.index()]
    }

    pub const fn hand(self) -> Hand {
        if self.index() < 5 {
            Hand::Left
        } else {
            Hand::Right
        }
    }

    /// The same finger on the opposite hand (i -> 9 - i).
    pub const fn mirror(self) -> Self {
        FINGERS[FINGER_COUNT - 1 - self.index()]
    }
}

impl fmt::Display for Finger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Finger {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        FINGER_NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(trimmed))
            .map(|i| FINGERS[i])
            .ok_or_else(|| TableError::Parse(format!("Unknown finger name '{}'", trimmed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_index_order_matches_table() {
        assert_eq!(Finger::COUNT, FINGER_COUNT);
        for (i, finger) in Finger::iter().enumerate() {
            assert_eq!(finger.index(), i);
            assert_eq!(FINGERS[i], finger);
        }
    }

    #[test]
    fn test_hands_split_at_five() {
        assert_eq!(Finger::LeftThumb.hand(), Hand::Left);
        assert_eq!(Finger::RightThumb.hand(), Hand::Right);
        assert!(Finger::iter().filter(|f| f.hand() == Hand::Left).count() == 5);
    }

    #[test]
    fn test_names_parse_back() {
        for finger in Finger::iter() {
            assert_eq!(finger.name().parse::<Finger>().unwrap(), finger);
        }
        assert_eq!("rp".parse::<Finger>().unwrap(), Finger::RightPinky);
        assert!("XX".parse::<Finger>().is_err());
    }

    #[test]
    fn test_mirror() {
        assert_eq!(Finger::LeftPinky.mirror(), Finger::RightPinky);
        assert_eq!(Finger::LeftThumb.mirror(), Finger::RightThumb);
        for finger in Finger::iter() {
            assert_ne!(finger.hand(), finger.mirror().hand());
            assert_eq!(finger.mirror().mirror(), finger);
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert!(Finger::from_index(10).is_err());
        assert_eq!(Finger::from_index(3).unwrap(), Finger::LeftIndex);
    }
}
