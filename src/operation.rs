use crate::{utils, CronError, Result};
use std::fmt::Display;

const STEP_PREFIX: &str = "*/";

/// Grammar production matched by a field's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operation {
    /// `*`: each possible value.
    AllItems,
    /// `*/N`: each N-th value starting from the field's minimum.
    Step,
    /// `A-B`: each value from `A` to `B` inclusively.
    Range,
    /// `A,B,C`: listed values, in the same order.
    List,
    /// `N`: the single value.
    Single,
}

impl Operation {
    /// Detects the operation of the field's text.
    ///
    /// Checks are made in priority order, first match wins, so text with both `,` and `-` is a list.
    /// Returns the operation with its payload: the text after `*/` for [`Operation::Step`],
    /// the whole text otherwise.
    pub fn classify(input: &str) -> Result<(Self, &str)> {
        if let Some(step) = input.strip_prefix(STEP_PREFIX) {
            Ok((Self::Step, step))
        } else if input.starts_with('*') {
            Ok((Self::AllItems, input))
        } else if input.contains(',') {
            Ok((Self::List, input))
        } else if input.contains('-') {
            Ok((Self::Range, input))
        } else if utils::is_plain_number(input) {
            Ok((Self::Single, input))
        } else {
            Err(CronError::InvalidField(input.to_owned()))
        }
    }

    /// Name of the operation as it appears in messages.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AllItems => "all_items",
            Self::Step => "step",
            Self::Range => "range",
            Self::List => "list",
            Self::Single => "single",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("*", Operation::AllItems, "*")]
    #[case("*/15", Operation::Step, "15")]
    #[case("*/", Operation::Step, "")]
    #[case("*/-1", Operation::Step, "-1")]
    #[case("1,15", Operation::List, "1,15")]
    #[case("5,1,3", Operation::List, "5,1,3")]
    #[case("1-5,7", Operation::List, "1-5,7")]
    #[case("1,3-5", Operation::List, "1,3-5")]
    #[case(",", Operation::List, ",")]
    #[case("1-5", Operation::Range, "1-5")]
    #[case("-1", Operation::Range, "-1")]
    #[case("6--2", Operation::Range, "6--2")]
    #[case("a-b", Operation::Range, "a-b")]
    #[case("0", Operation::Single, "0")]
    #[case("00", Operation::Single, "00")]
    #[case("59", Operation::Single, "59")]
    #[case("256", Operation::Single, "256")]
    fn test_classify_valid(#[case] input: &str, #[case] operation: Operation, #[case] payload: &str) {
        assert_eq!(Operation::classify(input), Ok((operation, payload)), "input = {input}");
    }

    #[rstest]
    #[case("xyz")]
    #[case("")]
    #[case("?")]
    #[case("L")]
    #[case("15W")]
    #[case("1#2")]
    #[case("5/2")]
    #[case("+5")]
    #[case("1.5")]
    #[case("MON")]
    fn test_classify_invalid(#[case] input: &str) {
        assert!(
            matches!(Operation::classify(input), Err(CronError::InvalidField(ref e)) if e == input),
            "input = {input}"
        );
    }

    #[rstest]
    #[case("*,1")]
    #[case("*-5")]
    #[case("**")]
    fn test_classify_star_prefix_is_all_items(#[case] input: &str) {
        assert_eq!(Operation::classify(input).map(|(op, _)| op), Ok(Operation::AllItems));
    }

    #[rstest]
    #[case(Operation::AllItems, "all_items")]
    #[case(Operation::Step, "step")]
    #[case(Operation::Range, "range")]
    #[case(Operation::List, "list")]
    #[case(Operation::Single, "single")]
    fn test_display(#[case] operation: Operation, #[case] expected: &str) {
        assert_eq!(operation.to_string(), expected);
    }
}
