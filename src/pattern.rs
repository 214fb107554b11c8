use crate::{field::FieldKind, operation::Operation, validate::parse_payload, FieldValue, Result};
use std::fmt::Display;
use tracing::{debug, trace};

/// Width of the field name column in the report.
pub(crate) const NAME_COLUMN_WIDTH: usize = 14;

/// Values carried by the validated field's text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum PatternItem {
    All,
    // */step
    Step(FieldValue),
    // start-end
    Range(FieldValue, FieldValue),
    List(Vec<FieldValue>),
    Single(FieldValue),
}

/// Single classified and validated field of a cron expression.
///
/// It borrows the text from the expression and lives only until expansion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field<'a> {
    kind: FieldKind,
    raw: &'a str,
    operation: Operation,
    payload: &'a str,
    item: PatternItem,
}

impl<'a> Field<'a> {
    /// Classifies and validates `input` as a field of the specified `kind`.
    pub fn parse(kind: FieldKind, input: &'a str) -> Result<Self> {
        let (operation, payload) = Operation::classify(input)?;
        let item = parse_payload(kind, operation, payload)?;

        debug!(%kind, %operation, payload, "field parsed");

        Ok(Self {
            kind,
            raw: input,
            operation,
            payload,
            item,
        })
    }

    /// Kind of the field.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Field's text as it was in the expression.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Detected operation.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Part of the text which carries the operation's values.
    pub fn payload(&self) -> &'a str {
        self.payload
    }

    /// Produces the sequence of values denoted by the field.
    pub fn expand(&self) -> ExpandedField {
        let (min, max) = self.kind.min_max();

        let values: Vec<FieldValue> = match &self.item {
            PatternItem::All => (min..=max).collect(),
            PatternItem::Step(step) => (min..=max).step_by(*step as usize).collect(),
            PatternItem::Range(start, end) => (*start..=*end).collect(),
            PatternItem::List(values) => values.clone(),
            PatternItem::Single(value) => vec![*value],
        };

        trace!(kind = %self.kind, count = values.len(), "field expanded");

        ExpandedField { kind: self.kind, values }
    }
}

impl Display for Field<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Ordered values of the single expanded field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExpandedField {
    kind: FieldKind,
    values: Vec<FieldValue>,
}

impl ExpandedField {
    /// Kind of the field.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Values in the order they were produced.
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    /// Consumes the field and returns its values.
    pub fn into_values(self) -> Vec<FieldValue> {
        self.values
    }
}

impl Display for ExpandedField {
    /// Renders the report line: name padded to the fixed column width and space-separated values.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<width$}", self.kind, width = NAME_COLUMN_WIDTH)?;

        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }

        Ok(())
    }
}
