use crate::FieldValue;
use std::fmt::Display;

/// Semantic role of a cron expression field, defined by its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldKind {
    /// Minutes, `0-59`.
    Minute = 0,
    /// Hours, `0-23`.
    Hour = 1,
    /// Days of month, `1-31`.
    DayOfMonth = 2,
    /// Months, `1-12`.
    Month = 3,
    /// Days of week, `1-7`.
    DayOfWeek = 4,
}

impl FieldKind {
    /// All kinds in the order of fields in the expression.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::DayOfWeek,
    ];

    /// Returns kind of the field at the specified position of the expression.
    pub fn from_position(position: usize) -> Option<Self> {
        Self::ALL.get(position).copied()
    }

    /// Inclusive bounds of the field's values.
    pub const fn min_max(&self) -> (FieldValue, FieldValue) {
        match self {
            Self::Minute => (0, 59),
            Self::Hour => (0, 23),
            Self::DayOfMonth => (1, 31),
            Self::Month => (1, 12),
            Self::DayOfWeek => (1, 7),
        }
    }

    /// Name of the kind as it appears in the report.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::DayOfMonth => "day_of_month",
            Self::Month => "month",
            Self::DayOfWeek => "day_of_week",
        }
    }
}

impl Display for FieldKind {
    // `pad` respects width and alignment, so `{:<14}` works as expected.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Some(FieldKind::Minute))]
    #[case(1, Some(FieldKind::Hour))]
    #[case(2, Some(FieldKind::DayOfMonth))]
    #[case(3, Some(FieldKind::Month))]
    #[case(4, Some(FieldKind::DayOfWeek))]
    #[case(5, None)]
    #[case(100, None)]
    fn test_from_position(#[case] position: usize, #[case] expected: Option<FieldKind>) {
        assert_eq!(FieldKind::from_position(position), expected);
    }

    #[rstest]
    #[case(FieldKind::Minute, 0, 59)]
    #[case(FieldKind::Hour, 0, 23)]
    #[case(FieldKind::DayOfMonth, 1, 31)]
    #[case(FieldKind::Month, 1, 12)]
    #[case(FieldKind::DayOfWeek, 1, 7)]
    fn test_min_max(#[case] kind: FieldKind, #[case] min: FieldValue, #[case] max: FieldValue) {
        assert_eq!(kind.min_max(), (min, max));
    }

    #[test]
    fn test_position_matches_discriminant() {
        for (position, kind) in FieldKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, position, "kind = {kind:?}");
        }
    }

    #[rstest]
    #[case(FieldKind::Minute, "minute", "minute        |")]
    #[case(FieldKind::Hour, "hour", "hour          |")]
    #[case(FieldKind::DayOfMonth, "day_of_month", "day_of_month  |")]
    #[case(FieldKind::Month, "month", "month         |")]
    #[case(FieldKind::DayOfWeek, "day_of_week", "day_of_week   |")]
    fn test_display(#[case] kind: FieldKind, #[case] expected: &str, #[case] padded: &str) {
        assert_eq!(kind.to_string(), expected);
        assert_eq!(format!("{kind:<14}|"), padded);
    }
}
