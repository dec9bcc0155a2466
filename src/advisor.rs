use crate::ledger::CategorySpend;

pub const WITHIN_BUDGET: &str = "Expenditure is within the budget. No reductions necessary.";

/// Greedy reduction suggestions for a month that ran over budget.
///
/// Walks the breakdown in descending-spend order. The first category whose
/// spend alone exceeds the remaining excess gets a hard "reduce by at least"
/// suggestion and ends the walk; every category before it gets a softer
/// "consider reducing" and its spend is subtracted from the excess. If no
/// single category ever covers the remaining excess, the soft suggestions
/// accumulated so far are the whole answer.
///
/// Total over non-negative inputs and an empty breakdown; never fails.
pub fn suggest_reductions(
    monthly_expenditure: f64,
    budget_amount: f64,
    breakdown: &[CategorySpend],
) -> Vec<String> {
    if monthly_expenditure <= budget_amount {
        return vec![WITHIN_BUDGET.to_string()];
    }

    let mut excess = monthly_expenditure - budget_amount;
    let mut suggestions = Vec::new();
    for item in breakdown {
        if item.total > excess {
            suggestions.push(format!(
                "Reduce spending in '{}' by at least {:.2}.",
                item.category, excess
            ));
            break;
        }
        suggestions.push(format!("Consider reducing spending in '{}'.", item.category));
        excess -= item.total;
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spend(category: &str, total: f64) -> CategorySpend {
        CategorySpend {
            category: category.to_string(),
            total,
        }
    }

    #[test]
    fn test_within_budget_single_message() {
        let breakdown = vec![spend("rent", 1000.0)];
        let suggestions = suggest_reductions(1000.0, 1200.0, &breakdown);
        assert_eq!(suggestions, vec![WITHIN_BUDGET.to_string()]);
    }

    #[test]
    fn test_exactly_on_budget_is_within() {
        let suggestions = suggest_reductions(1200.0, 1200.0, &[spend("rent", 1200.0)]);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0], WITHIN_BUDGET);
    }

    #[test]
    fn test_top_category_covers_excess() {
        // expenditure 1400 vs budget 1200: excess 200, rent (1000) > 200
        let breakdown = vec![spend("rent", 1000.0), spend("food", 400.0)];
        let suggestions = suggest_reductions(1400.0, 1200.0, &breakdown);
        assert_eq!(
            suggestions,
            vec!["Reduce spending in 'rent' by at least 200.00.".to_string()]
        );
    }

    #[test]
    fn test_first_of_tied_categories_terminates_walk() {
        // expenditure 200 vs budget 150: excess 50; the first category already
        // covers it, the second is never considered.
        let breakdown = vec![spend("food", 100.0), spend("fun", 100.0)];
        let suggestions = suggest_reductions(200.0, 150.0, &breakdown);
        assert_eq!(
            suggestions,
            vec!["Reduce spending in 'food' by at least 50.00.".to_string()]
        );
    }

    #[test]
    fn test_soft_suggestions_before_terminal() {
        // excess 450: rent (300) consumed first, then food (200) > 150 left.
        let breakdown = vec![spend("rent", 300.0), spend("food", 200.0), spend("fun", 50.0)];
        let suggestions = suggest_reductions(1000.0, 550.0, &breakdown);
        assert_eq!(
            suggestions,
            vec![
                "Consider reducing spending in 'rent'.".to_string(),
                "Reduce spending in 'food' by at least 150.00.".to_string(),
            ]
        );
    }

    #[test]
    fn test_exhausted_breakdown_returns_soft_suggestions() {
        // excess 500 can never be covered by any single category.
        let breakdown = vec![spend("rent", 100.0), spend("food", 50.0)];
        let suggestions = suggest_reductions(650.0, 150.0, &breakdown);
        assert_eq!(
            suggestions,
            vec![
                "Consider reducing spending in 'rent'.".to_string(),
                "Consider reducing spending in 'food'.".to_string(),
            ]
        );
    }

    #[test]
    fn test_category_equal_to_excess_is_soft() {
        // amount == excess is not strictly greater, so it gets the soft wording.
        let breakdown = vec![spend("rent", 100.0)];
        let suggestions = suggest_reductions(250.0, 150.0, &breakdown);
        assert_eq!(
            suggestions,
            vec!["Consider reducing spending in 'rent'.".to_string()]
        );
    }

    #[test]
    fn test_empty_breakdown_over_budget_is_empty() {
        let suggestions = suggest_reductions(100.0, 50.0, &[]);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_at_most_one_terminal_suggestion_and_it_is_last() {
        let breakdown = vec![
            spend("a", 100.0),
            spend("b", 40.0),
            spend("c", 30.0),
            spend("d", 5.0),
        ];
        // excess 150: a and b are consumed, c covers the remaining 10.
        let suggestions = suggest_reductions(300.0, 150.0, &breakdown);
        let terminal: Vec<usize> = suggestions
            .iter()
            .enumerate()
            .filter(|(_, s)| s.starts_with("Reduce spending"))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(terminal, vec![suggestions.len() - 1]);
    }
}
