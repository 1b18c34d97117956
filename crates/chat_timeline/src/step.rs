//! Step - discrete unit of work within a workflow
//!
//! Steps are created by the workflow engine and consumed read-only by
//! list views; they carry no identity beyond their position.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One discrete, optionally numbered unit of work.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_number: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Step {
    fn number(&self) -> u32 {
        self.step_number.unwrap_or(0)
    }

    fn timestamp_or_epoch(&self) -> DateTime<Utc> {
        self.timestamp.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

/// Order steps by number ascending, then timestamp ascending. Missing
/// fields default to 0 / the epoch; no failure modes.
pub fn compare_steps(a: &Step, b: &Step) -> Ordering {
    a.number()
        .cmp(&b.number())
        .then_with(|| a.timestamp_or_epoch().cmp(&b.timestamp_or_epoch()))
}

/// Sort a list of steps into execution order without mutating the
/// input. Stable: fully tied steps keep their relative order.
pub fn sort_steps(steps: &[Step]) -> Vec<Step> {
    let mut sorted = steps.to_vec();
    sorted.sort_by(compare_steps);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn step(number: Option<u32>, ms: Option<i64>) -> Step {
        Step {
            step_number: number,
            timestamp: ms.map(|ms| Utc.timestamp_millis_opt(ms).unwrap()),
        }
    }

    #[test]
    fn test_orders_by_number_then_timestamp() {
        let sorted = sort_steps(&[
            step(Some(2), None),
            step(Some(1), None),
            step(Some(1), Some(5)),
            step(Some(1), Some(1)),
        ]);
        assert_eq!(
            sorted,
            vec![
                step(Some(1), None),
                step(Some(1), Some(1)),
                step(Some(1), Some(5)),
                step(Some(2), None),
            ]
        );
    }

    #[test]
    fn test_missing_number_defaults_to_zero() {
        let sorted = sort_steps(&[step(Some(1), None), step(None, None)]);
        assert_eq!(sorted[0], step(None, None));
    }

    #[test]
    fn test_output_is_monotonic_in_step_number() {
        let sorted = sort_steps(&[
            step(Some(3), Some(1)),
            step(None, Some(9)),
            step(Some(2), Some(4)),
            step(Some(2), Some(2)),
        ]);
        let numbers: Vec<u32> = sorted.iter().map(|s| s.step_number.unwrap_or(0)).collect();
        let mut expected = numbers.clone();
        expected.sort_unstable();
        assert_eq!(numbers, expected);
    }
}
