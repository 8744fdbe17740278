//! Cancellation policy evaluation
//!
//! A policy is a set of rules (days_before, refund_percentage). On
//! cancellation the rules are walked from the most demanding lead time
//! down; the first rule the actual lead time satisfies decides the
//! refund. No matching rule means no refund.

use shared::{AppError, AppResult, ErrorCode};

use crate::db::models::{CancellationRule, CancellationRuleCreate};

/// Refund percentage for a cancellation made `days_before` days ahead
/// of the reserved date.
///
/// `rules` may arrive in any order; evaluation sorts them descending by
/// `days_before` so more lead time never earns a smaller refund than
/// less.
pub fn evaluate(rules: &[CancellationRule], days_before: i64) -> f64 {
    let mut sorted: Vec<&CancellationRule> = rules.iter().collect();
    sorted.sort_by(|a, b| b.days_before.cmp(&a.days_before));
    for rule in sorted {
        if days_before >= rule.days_before {
            return rule.refund_percentage;
        }
    }
    0.0
}

/// Validate a rule before it is persisted
pub fn validate_rule(rule: &CancellationRuleCreate) -> AppResult<()> {
    if rule.days_before < 0 {
        return Err(AppError::validation(format!(
            "days_before must be non-negative, got {}",
            rule.days_before
        )));
    }
    if !(0.0..=100.0).contains(&rule.refund_percentage) {
        return Err(AppError::with_message(
            ErrorCode::InvalidRefundPercentage,
            format!(
                "Refund percentage must be between 0 and 100, got {}",
                rule.refund_percentage
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(days_before: i64, refund_percentage: f64) -> CancellationRule {
        CancellationRule {
            id: None,
            business_id: surrealdb::RecordId::from(("business", "test")),
            days_before,
            refund_percentage,
            created_at: None,
        }
    }

    #[test]
    fn test_first_satisfied_rule_wins() {
        let rules = vec![rule(7, 100.0), rule(2, 50.0), rule(0, 0.0)];
        assert_eq!(evaluate(&rules, 10), 100.0);
        assert_eq!(evaluate(&rules, 7), 100.0);
        assert_eq!(evaluate(&rules, 3), 50.0);
        assert_eq!(evaluate(&rules, 2), 50.0);
        assert_eq!(evaluate(&rules, 1), 0.0);
        assert_eq!(evaluate(&rules, 0), 0.0);
    }

    #[test]
    fn test_unsorted_rules_same_result() {
        let sorted = vec![rule(7, 100.0), rule(2, 50.0)];
        let shuffled = vec![rule(2, 50.0), rule(7, 100.0)];
        for days in [0, 1, 2, 5, 7, 30] {
            assert_eq!(evaluate(&sorted, days), evaluate(&shuffled, days));
        }
    }

    #[test]
    fn test_no_rules_no_refund() {
        assert_eq!(evaluate(&[], 30), 0.0);
    }

    #[test]
    fn test_refund_monotone_in_lead_time() {
        // More lead time never pays out less
        let rules = vec![rule(14, 100.0), rule(7, 75.0), rule(3, 25.0), rule(1, 10.0)];
        let mut previous = 0.0;
        for days in 0..=20 {
            let refund = evaluate(&rules, days);
            assert!(
                refund >= previous,
                "refund dropped from {} to {} at {} days",
                previous,
                refund,
                days
            );
            previous = refund;
        }
    }

    #[test]
    fn test_negative_lead_time_gets_nothing() {
        // Cancelling after the reserved date has passed
        let rules = vec![rule(0, 10.0)];
        assert_eq!(evaluate(&rules, -1), 0.0);
        assert_eq!(evaluate(&rules, 0), 10.0);
    }

    #[test]
    fn test_validate_rule() {
        let ok = CancellationRuleCreate {
            days_before: 7,
            refund_percentage: 100.0,
        };
        assert!(validate_rule(&ok).is_ok());

        let negative_days = CancellationRuleCreate {
            days_before: -1,
            refund_percentage: 50.0,
        };
        assert!(validate_rule(&negative_days).is_err());

        let bad_pct = CancellationRuleCreate {
            days_before: 3,
            refund_percentage: 150.0,
        };
        let err = validate_rule(&bad_pct).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRefundPercentage);
    }
}
