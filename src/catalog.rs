//! Inquiry categories offered by the contact form, each bound to a fixed
//! render descriptor.

use crate::ui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryCategory {
    General,
    Admissions,
    Tutoring,
    Partnership,
    Support,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDescriptor {
    pub category: InquiryCategory,
    pub slug: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
    pub color: Color,
}

const DESCRIPTORS: [CategoryDescriptor; 6] = [
    CategoryDescriptor {
        category: InquiryCategory::General,
        slug: "general",
        label: "General question",
        glyph: "?",
        color: Color::Cyan,
    },
    CategoryDescriptor {
        category: InquiryCategory::Admissions,
        slug: "admissions",
        label: "Admissions",
        glyph: "🎓",
        color: Color::Blue,
    },
    CategoryDescriptor {
        category: InquiryCategory::Tutoring,
        slug: "tutoring",
        label: "Tutoring",
        glyph: "✎",
        color: Color::Green,
    },
    CategoryDescriptor {
        category: InquiryCategory::Partnership,
        slug: "partnership",
        label: "Partnership",
        glyph: "⚑",
        color: Color::Magenta,
    },
    CategoryDescriptor {
        category: InquiryCategory::Support,
        slug: "support",
        label: "Technical support",
        glyph: "⚙",
        color: Color::Yellow,
    },
    CategoryDescriptor {
        category: InquiryCategory::Other,
        slug: "other",
        label: "Something else",
        glyph: "•",
        color: Color::DarkGrey,
    },
];

impl InquiryCategory {
    pub const ALL: [InquiryCategory; 6] = [
        Self::General,
        Self::Admissions,
        Self::Tutoring,
        Self::Partnership,
        Self::Support,
        Self::Other,
    ];

    pub fn descriptor(self) -> &'static CategoryDescriptor {
        &DESCRIPTORS[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }

    pub fn labels() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|category| category.label())
    }

    /// Accepts either the slug or the display label, case-insensitively.
    pub fn lookup(value: &str) -> Option<Self> {
        let value = value.trim();
        DESCRIPTORS
            .iter()
            .find(|d| d.slug.eq_ignore_ascii_case(value) || d.label.eq_ignore_ascii_case(value))
            .map(|d| d.category)
    }
}

impl fmt::Display for InquiryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown inquiry category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for InquiryCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_variant() {
        for category in InquiryCategory::ALL {
            assert_eq!(category.descriptor().category, category);
        }
    }

    #[test]
    fn lookup_by_slug_or_label() {
        assert_eq!(InquiryCategory::lookup("TUTORING"), Some(InquiryCategory::Tutoring));
        assert_eq!(
            InquiryCategory::lookup("Technical support"),
            Some(InquiryCategory::Support)
        );
        assert!("billing".parse::<InquiryCategory>().is_err());
    }
}
