/// Shared DaisyUI color tokens used by button-like controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DaisyColor {
    Primary,
    Secondary,
    Accent,
    Neutral,
    Info,
    Success,
    Warning,
    Error,
}

impl DaisyColor {
    /// Returns the class suffix (e.g. `"primary"`) for the color.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Neutral => "neutral",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Common sizing tokens used by DaisyUI controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DaisySize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
}

impl DaisySize {
    /// Returns the suffix used by DaisyUI for the selected size.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Adds a prefix (e.g. `btn`) to the size suffix for class composition.
    #[must_use]
    pub fn with_prefix(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

/// Variants used across button-like elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DaisyVariant {
    #[default]
    Solid,
    Outline,
    Ghost,
    Link,
    Soft,
}

impl DaisyVariant {
    /// Maps the variant to the DaisyUI class name.
    #[must_use]
    pub const fn as_class(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Outline => Some("btn-outline"),
            Self::Ghost => Some("btn-ghost"),
            Self::Link => Some("btn-link"),
            Self::Soft => Some("btn-soft"),
        }
    }
}

/// Convenience helper for composing class lists with an optional tone.
#[must_use]
pub fn tone_class(prefix: &str, tone: Option<DaisyColor>) -> Option<String> {
    tone.map(|color| format!("{prefix}-{}", color.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_prefix_composes_class() {
        assert_eq!(DaisySize::default().with_prefix("btn"), "btn-md");
        assert_eq!(DaisySize::Xs.with_prefix("badge"), "badge-xs");
    }

    #[test]
    fn solid_variant_has_no_modifier_class() {
        assert_eq!(DaisyVariant::default(), DaisyVariant::Solid);
        assert_eq!(DaisyVariant::Solid.as_class(), None);
        assert_eq!(DaisyVariant::Ghost.as_class(), Some("btn-ghost"));
    }

    #[test]
    fn tone_class_is_optional() {
        assert_eq!(
            tone_class("btn", Some(DaisyColor::Secondary)).as_deref(),
            Some("btn-secondary")
        );
        assert_eq!(tone_class("btn", None), None);
    }
}
