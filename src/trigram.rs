use crate::error::{TableError, TableResult};
use crate::finger::{Finger, FINGERS};
use std::fmt;
use std::str::FromStr;

/// Number of distinct finger triples.
pub const TRIGRAM_COUNT: usize = FINGERS.len() * FINGERS.len() * FINGERS.len();

/// Length of an encoded key: three two-letter finger names.
pub const KEY_LEN: usize = 6;

/// Three consecutive keystrokes, identified by the finger that presses each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Trigram(pub Finger, pub Finger, pub Finger);

impl Trigram {
    pub fn new(f0: Finger, f1: Finger, f2: Finger) -> Self {
        Self(f0, f1, f2)
    }

    pub fn from_indices(f0: usize, f1: usize, f2: usize) -> TableResult<Self> {
        Ok(Self(
            Finger::from_index(f0)?,
            Finger::from_index(f1)?,
            Finger::from_index(f2)?,
        ))
    }

    pub fn fingers(&self) -> [Finger; 3] {
        [self.0, self.1, self.2]
    }

    /// Concatenated finger names, e.g. `LPLRLM`.
    pub fn key(&self) -> String {
        let mut s = String::with_capacity(KEY_LEN);
        for finger in self.fingers() {
            s.push_str(finger.name());
        }
        s
    }

    /// Every triple, first finger outermost, ascending finger id.
    pub fn all() -> impl Iterator<Item = Trigram> {
        FINGERS.into_iter().flat_map(|f0| {
            FINGERS.into_iter().flat_map(move |f1| {
                FINGERS.into_iter().map(move |f2| Trigram(f0, f1, f2))
            })
        })
    }

    /// Left-for-right reflection of every finger.
    pub fn mirror(&self) -> Self {
        Self(self.0.mirror(), self.1.mirror(), self.2.mirror())
    }

    /// Parses a six-letter key such as `LPRTLM`.
    pub fn parse_key(key: &str) -> TableResult<Self> {
        let key = key.trim();
        if key.len() != KEY_LEN || !key.is_ascii() {
            return Err(TableError::Parse(format!(
                "Trigram key '{}' must be {} ASCII letters",
                key, KEY_LEN
            )));
        }
        Ok(Self(
            key[0..2].parse()?,
            key[2..4].parse()?,
            key[4..6].parse()?,
        ))
    }

    /// Parses three comma-separated finger ids such as `0,5,9`.
    pub fn parse_indices(s: &str) -> TableResult<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(TableError::Parse(format!(
                "Expected three finger ids, got '{}'",
                s
            )));
        }
        let mut ids = [0usize; 3];
        for (slot, part) in ids.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| TableError::Parse(format!("Invalid finger id '{}'", part)))?;
        }
        Self::from_indices(ids[0], ids[1], ids[2])
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0, self.1, self.2)
    }
}

impl FromStr for Trigram {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(',') {
            Self::parse_indices(s)
        } else {
            Self::parse_key(s)
        }
    }
}
