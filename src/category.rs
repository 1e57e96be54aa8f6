use clap::ValueEnum;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Ergonomic class of a three-stroke finger sequence.
///
/// The kebab-case strings are the long labels written to the table.
/// External analyzers key off them by exact string, so they must not change.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCount,
    EnumString,
    Display,
    IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    SameFingerTrigram,
    SameFingerBigram,
    Alternation,
    AlternationSameFingerSkip,
    InwardOneHand,
    OutwardOneHand,
    Redirect,
    RedirectSameFingerSkip,
    BadRedirect,
    BadRedirectSameFingerSkip,
    InwardRoll,
    OutwardRoll,
}

/// Which label vocabulary to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum LabelStyle {
    /// Descriptive kebab-case names (`same-finger-bigram`).
    #[default]
    Long,
    /// Historic abbreviations (`sfb`, `inroll`, ...).
    Short,
}

impl Category {
    pub fn long_label(self) -> &'static str {
        self.into()
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Self::SameFingerTrigram => "sft",
            Self::SameFingerBigram => "sfb",
            Self::Alternation => "alt",
            Self::AlternationSameFingerSkip => "alt-sfs",
            Self::InwardOneHand => "inoneh",
            Self::OutwardOneHand => "outoneh",
            Self::Redirect => "red",
            Self::RedirectSameFingerSkip => "red-sfs",
            Self::BadRedirect => "bad-red",
            Self::BadRedirectSameFingerSkip => "bad-red-sfs",
            Self::InwardRoll => "inroll",
            Self::OutwardRoll => "outroll",
        }
    }

    pub fn label(self, style: LabelStyle) -> &'static str {
        match style {
            LabelStyle::Long => self.long_label(),
            LabelStyle::Short => self.short_label(),
        }
    }

    /// Accepts a label from either vocabulary. Matching is exact: no trimming or case folding.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::from_str(label)
            .ok()
            .or_else(|| Self::iter().find(|c| c.short_label() == label))
    }

    /// The vocabulary `label` belongs to, if it is an exact label of this category.
    pub fn style_of(self, label: &str) -> Option<LabelStyle> {
        if label == self.long_label() {
            Some(LabelStyle::Long)
        } else if label == self.short_label() {
            Some(LabelStyle::Short)
        } else {
            None
        }
    }

    pub fn is_same_finger(self) -> bool {
        matches!(self, Self::SameFingerTrigram | Self::SameFingerBigram)
    }

    pub fn is_redirect(self) -> bool {
        matches!(
            self,
            Self::Redirect
                | Self::RedirectSameFingerSkip
                | Self::BadRedirect
                | Self::BadRedirectSameFingerSkip
        )
    }
}
