use crate::{
    field::FieldKind,
    pattern::{ExpandedField, Field},
    CronError, Result,
};
use std::{fmt::Display, str::FromStr};
use tracing::debug;

/// Represents a fully expanded cron expression.
///
/// For expression format clarification and usage examples, please refer to the [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Schedule {
    minute: ExpandedField,
    hour: ExpandedField,
    day_of_month: ExpandedField,
    month: ExpandedField,
    day_of_week: ExpandedField,
}

impl Schedule {
    /// Parses, validates and expands provided `expression`.
    ///
    /// Alternative way to construct [`Schedule`] is to use one of `try_from` or `from_str` methods.
    ///
    /// Returns [`CronError`] of the first invalid field, in the order of fields.
    pub fn new(expression: impl AsRef<str>) -> Result<Self> {
        let expression = expression.as_ref();
        let elements: Vec<&str> = expression.split_whitespace().collect();

        if elements.len() != FieldKind::ALL.len() {
            debug!(expression, count = elements.len(), "wrong number of fields");
            return Err(CronError::WrongFieldCount {
                expression: expression.to_owned(),
                count: elements.len(),
            });
        }

        let expand = |kind: FieldKind| -> Result<ExpandedField> {
            Field::parse(kind, elements[kind as usize])
                .map(|field| field.expand())
                .inspect_err(|e| debug!(%kind, error = %e, "invalid field"))
        };

        // Fields are expanded in the order of initialization.
        Ok(Self {
            minute: expand(FieldKind::Minute)?,
            hour: expand(FieldKind::Hour)?,
            day_of_month: expand(FieldKind::DayOfMonth)?,
            month: expand(FieldKind::Month)?,
            day_of_week: expand(FieldKind::DayOfWeek)?,
        })
    }

    /// Returns expanded field of the specified kind.
    pub fn field(&self, kind: FieldKind) -> &ExpandedField {
        match kind {
            FieldKind::Minute => &self.minute,
            FieldKind::Hour => &self.hour,
            FieldKind::DayOfMonth => &self.day_of_month,
            FieldKind::Month => &self.month,
            FieldKind::DayOfWeek => &self.day_of_week,
        }
    }

    /// Returns iterator over expanded fields in the order they appear in the expression.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &ExpandedField> {
        FieldKind::ALL.into_iter().map(move |kind| self.field(kind))
    }
}

impl From<Schedule> for String {
    fn from(value: Schedule) -> Self {
        value.to_string()
    }
}

impl From<&Schedule> for String {
    fn from(value: &Schedule) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Schedule {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for Schedule {
    type Error = CronError;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Schedule {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Schedule {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for Schedule {
    /// Renders the report: one line per field, without trailing newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, field) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{field}")?;
        }

        Ok(())
    }
}
