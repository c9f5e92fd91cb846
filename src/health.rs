//! Financial health scoring
//!
//! Pure computation: no I/O, no fallback path, deterministic for identical
//! inputs. Callers must not pass negative income.

use std::collections::HashMap;

/// Compute a 0-100 financial health score from monthly income, expense
/// categories, and monthly savings.
///
/// Zero income returns 0 (guards divide-by-zero). Otherwise the score is
/// `savings_rate * 0.6 + expense_diversity * 40`, clamped to `[0, 100]`,
/// where `savings_rate` is the savings percentage of income and
/// `expense_diversity` normalizes the distinct category count against 10.
pub fn score(income: f64, expenses: &HashMap<String, f64>, savings: f64) -> f64 {
    if income == 0.0 {
        return 0.0;
    }

    let savings_rate = savings / income * 100.0;
    let expense_diversity = (expenses.len() as f64 / 10.0).min(1.0);

    let raw = savings_rate * 0.6 + expense_diversity * 40.0;
    raw.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expenses(categories: &[(&str, f64)]) -> HashMap<String, f64> {
        categories
            .iter()
            .map(|(name, amount)| (name.to_string(), *amount))
            .collect()
    }

    #[test]
    fn test_zero_income_scores_zero() {
        let e = expenses(&[("Housing", 1500.0), ("Food", 600.0)]);
        assert_eq!(score(0.0, &e, 1000.0), 0.0);
        assert_eq!(score(0.0, &HashMap::new(), 0.0), 0.0);
    }

    #[test]
    fn test_reference_score() {
        // savings rate 20% -> 12 points, diversity 2/10 -> 8 points
        let e = expenses(&[("Housing", 1500.0), ("Food", 600.0)]);
        let s = score(5000.0, &e, 1000.0);
        assert!((s - 20.0).abs() < 1e-9, "expected 20.0, got {}", s);
    }

    #[test]
    fn test_monotone_in_savings() {
        let e = expenses(&[("Housing", 1500.0), ("Food", 600.0), ("Transport", 300.0)]);
        let mut previous = score(5000.0, &e, 0.0);
        for savings in (500..=5000).step_by(500) {
            let current = score(5000.0, &e, savings as f64);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_clamped_to_hundred() {
        let e = expenses(&[("Housing", 100.0)]);
        assert_eq!(score(1000.0, &e, 10_000.0), 100.0);
    }

    #[test]
    fn test_diversity_saturates_at_ten_categories() {
        let many: HashMap<String, f64> =
            (0..15).map(|i| (format!("category-{}", i), 100.0)).collect();
        let ten: HashMap<String, f64> =
            (0..10).map(|i| (format!("category-{}", i), 100.0)).collect();

        assert_eq!(score(5000.0, &many, 0.0), score(5000.0, &ten, 0.0));
        assert_eq!(score(5000.0, &ten, 0.0), 40.0);
    }

    #[test]
    fn test_idempotent() {
        let e = expenses(&[("Housing", 1500.0)]);
        assert_eq!(score(4000.0, &e, 800.0), score(4000.0, &e, 800.0));
    }
}
