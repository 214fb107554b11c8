use crate::{field::FieldKind, operation::Operation, pattern::PatternItem, utils, CronError, FieldValue, Result};

/// Checks numeric content of the field's `payload` against the bounds of its `kind`.
///
/// `payload` is the text returned by [`Operation::classify`] along with the `operation`.
/// [`Operation::AllItems`] is always valid.
///
/// For lists the first offending item is reported.
pub fn validate(kind: FieldKind, operation: Operation, payload: &str) -> Result<()> {
    parse_payload(kind, operation, payload).map(|_| ())
}

/// Validates `payload` and returns the values it carries.
pub(crate) fn parse_payload(kind: FieldKind, operation: Operation, payload: &str) -> Result<PatternItem> {
    let (min, max) = kind.min_max();

    match operation {
        Operation::AllItems => Ok(PatternItem::All),
        // zero step makes no sense, so the lowest step is 1 even for zero-based fields
        Operation::Step => parse_bounded(kind, operation, payload, min.max(1), max).map(PatternItem::Step),
        Operation::Single => parse_bounded(kind, operation, payload, min, max).map(PatternItem::Single),
        Operation::List => payload
            .split(',')
            .map(|item| parse_bounded(kind, operation, item, min, max))
            .collect::<Result<Vec<_>>>()
            .map(PatternItem::List),
        Operation::Range => {
            let (start, end) = split_range(kind, payload)?;

            let (Some(start_value), Some(end_value)) =
                (utils::parse_plain_number(start), utils::parse_plain_number(end))
            else {
                return Err(malformed(kind, operation, payload));
            };

            if start_value > end_value {
                return Err(CronError::OrderViolation {
                    kind,
                    value: payload.to_owned(),
                });
            }

            let start = parse_bounded(kind, operation, start, min, max)?;
            let end = parse_bounded(kind, operation, end, min, max)?;

            Ok(PatternItem::Range(start, end))
        }
    }
}

/// Splits range payload into start and end, rejecting signed or incomplete bounds.
fn split_range(kind: FieldKind, payload: &str) -> Result<(&str, &str)> {
    if payload.starts_with('-') || payload.ends_with('-') {
        return Err(malformed(kind, Operation::Range, payload));
    }

    let mut parts = payload.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(start), Some(end), None) => Ok((start, end)),
        _ => Err(malformed(kind, Operation::Range, payload)),
    }
}

fn parse_bounded(
    kind: FieldKind,
    operation: Operation,
    input: &str,
    min: FieldValue,
    max: FieldValue,
) -> Result<FieldValue> {
    if !utils::is_plain_number(input) {
        return Err(malformed(kind, operation, input));
    }

    utils::parse_digital_value(input, min, max).ok_or_else(|| CronError::OutOfRange {
        kind,
        operation,
        value: input.to_owned(),
        min,
        max,
    })
}

fn malformed(kind: FieldKind, operation: Operation, input: &str) -> CronError {
    CronError::MalformedField {
        kind,
        operation,
        value: input.to_owned(),
    }
}
