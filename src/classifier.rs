use crate::category::Category;
use crate::error::{TableError, TableResult};
use crate::finger::{Finger, Hand, FINGERS, FINGER_COUNT};
use crate::trigram::Trigram;

/// Per-finger flags marking fingers that are weak for redirects.
///
/// The default (pinky, ring and middle of both hands) is an opaque ergonomic
/// judgment. It is carried as-is and can be replaced wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadRedirectSet([bool; FINGER_COUNT]);

impl BadRedirectSet {
    pub const DEFAULT: Self = Self([
        true, true, true, false, false, false, false, true, true, true,
    ]);

    pub const fn from_flags(flags: [bool; FINGER_COUNT]) -> Self {
        Self(flags)
    }

    pub fn from_fingers<I: IntoIterator<Item = Finger>>(fingers: I) -> Self {
        let mut flags = [false; FINGER_COUNT];
        for finger in fingers {
            flags[finger.index()] = true;
        }
        Self(flags)
    }

    /// Comma-separated finger names, e.g. `LP,LR,RR`. An empty string is the empty set.
    pub fn parse(s: &str) -> TableResult<Self> {
        let fingers = s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| {
                p.parse::<Finger>().map_err(|_| {
                    TableError::Config(format!("--bad-redirect: unknown finger '{}'", p))
                })
            })
            .collect::<TableResult<Vec<_>>>()?;
        Ok(Self::from_fingers(fingers))
    }

    pub fn contains(&self, finger: Finger) -> bool {
        self.0[finger.index()]
    }

    pub fn fingers(&self) -> impl Iterator<Item = Finger> + '_ {
        FINGERS.into_iter().filter(move |f| self.contains(*f))
    }
}

impl Default for BadRedirectSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Default)]
pub struct Classifier {
    pub bad_redirect: BadRedirectSet,
}

impl Classifier {
    pub fn new(bad_redirect: BadRedirectSet) -> Self {
        Self { bad_redirect }
    }

    /// Assigns the single category for a trigram. First matching rule wins.
    pub fn classify(&self, trigram: Trigram) -> Category {
        let Trigram(f0, f1, f2) = trigram;
        let (h0, h1, h2) = (f0.hand(), f1.hand(), f2.hand());
        let same_skip = f0 == f2;

        // Adjacent repeat
        if f0 == f1 || f1 == f2 {
            return if same_skip {
                Category::SameFingerTrigram
            } else {
                Category::SameFingerBigram
            };
        }

        // L-R-L / R-L-R
        if h0 != h1 && h1 != h2 {
            return if same_skip {
                Category::AlternationSameFingerSkip
            } else {
                Category::Alternation
            };
        }

        if h0 == h1 && h1 == h2 {
            let towards_pinky_side = f0 > f1 && f1 > f2;
            if towards_pinky_side || (f0 < f1 && f1 < f2) {
                // Decreasing ids move inward on the left hand, increasing on the right.
                return if towards_pinky_side == (h0 == Hand::Left) {
                    Category::InwardOneHand
                } else {
                    Category::OutwardOneHand
                };
            }

            let bad = trigram.fingers().iter().all(|f| self.bad_redirect.contains(*f));
            return match (same_skip, bad) {
                (true, true) => Category::BadRedirectSameFingerSkip,
                (true, false) => Category::RedirectSameFingerSkip,
                (false, true) => Category::BadRedirect,
                (false, false) => Category::Redirect,
            };
        }

        // Exactly one hand change: direction is read off the same-hand pair.
        let (roll0, roll1) = if h0 == h1 { (f0, f1) } else { (f1, f2) };
        let pivot_hand = roll0.hand();
        if (roll0 > roll1) == (pivot_hand == Hand::Right) {
            Category::InwardRoll
        } else {
            Category::OutwardRoll
        }
    }
}

/// Classifies with the default bad-redirect set.
pub fn classify(trigram: Trigram) -> Category {
    Classifier::default().classify(trigram)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(a: usize, b: usize, c: usize) -> Trigram {
        Trigram::from_indices(a, b, c).unwrap()
    }

    #[test]
    fn test_same_finger_precedes_everything() {
        assert_eq!(classify(tri(3, 3, 3)), Category::SameFingerTrigram);
        assert_eq!(classify(tri(3, 3, 7)), Category::SameFingerBigram);
        assert_eq!(classify(tri(7, 3, 3)), Category::SameFingerBigram);
    }

    #[test]
    fn test_left_hand_one_hand_runs() {
        // LI -> LM -> LR moves toward the pinky but reads as inward on the left.
        assert_eq!(classify(tri(3, 2, 1)), Category::InwardOneHand);
        assert_eq!(classify(tri(1, 2, 3)), Category::OutwardOneHand);
    }

    #[test]
    fn test_right_hand_one_hand_runs() {
        assert_eq!(classify(tri(6, 7, 8)), Category::InwardOneHand);
        assert_eq!(classify(tri(8, 7, 6)), Category::OutwardOneHand);
    }

    #[test]
    fn test_redirect_weakness() {
        // LP LM LR: all weak
        assert_eq!(classify(tri(0, 2, 1)), Category::BadRedirect);
        // LI is not weak
        assert_eq!(classify(tri(1, 3, 2)), Category::Redirect);
        assert_eq!(classify(tri(3, 1, 3)), Category::RedirectSameFingerSkip);
        assert_eq!(classify(tri(8, 9, 8)), Category::BadRedirectSameFingerSkip);
    }

    #[test]
    fn test_rolls() {
        // L L R: pair (LR, LI), increasing on the left hand
        assert_eq!(classify(tri(1, 3, 6)), Category::InwardRoll);
        assert_eq!(classify(tri(3, 1, 6)), Category::OutwardRoll);
        // L R R: pair (RR, RI), decreasing on the right hand
        assert_eq!(classify(tri(0, 8, 6)), Category::InwardRoll);
    }

    #[test]
    fn test_custom_bad_redirect_set() {
        let strict = Classifier::new(BadRedirectSet::from_fingers([]));
        assert_eq!(strict.classify(tri(0, 2, 1)), Category::Redirect);

        let lax = Classifier::new(BadRedirectSet::from_flags([true; FINGER_COUNT]));
        assert_eq!(lax.classify(tri(1, 3, 2)), Category::BadRedirect);
    }

    #[test]
    fn test_bad_redirect_parse() {
        let set = BadRedirectSet::parse("LP,LR,LM,RM,RR,RP").unwrap();
        assert_eq!(set, BadRedirectSet::DEFAULT);
        assert_eq!(set.fingers().count(), 6);
        assert_eq!(BadRedirectSet::parse("").unwrap().fingers().count(), 0);
        assert!(BadRedirectSet::parse("LP,ZZ").is_err());
    }
}
