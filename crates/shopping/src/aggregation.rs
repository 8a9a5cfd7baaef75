use std::collections::BTreeMap;

use mealplanner_shared::IngredientEntry;

use crate::quantity::{format_quantity, parse_quantity};
use crate::report::{Item, ShoppingListReport, StoreGroup};

/// Result of trying to sum the quantities of one ingredient in one store
#[derive(Debug, Clone, PartialEq)]
pub enum AggregationOutcome {
    /// Every quantity parsed and all units are identical
    Aggregated {
        total: f64,
        unit: String,
        original: Vec<String>,
    },
    /// At least one quantity did not parse, or the units differ
    NotAggregated { original: Vec<String> },
}

impl AggregationOutcome {
    /// Decide whether `quantities` can be summed
    ///
    /// The empty unit counts as a unit of its own: "200" and "200 g" are not
    /// summed together.
    pub fn decide(quantities: Vec<String>) -> Self {
        match Self::sum(&quantities) {
            Some((total, unit)) => Self::Aggregated {
                total,
                unit,
                original: quantities,
            },
            None => Self::NotAggregated {
                original: quantities,
            },
        }
    }

    fn sum(quantities: &[String]) -> Option<(f64, String)> {
        let mut parsed = Vec::with_capacity(quantities.len());

        for quantity in quantities {
            match parse_quantity(quantity) {
                Ok(p) => parsed.push(p),
                Err(e) => {
                    tracing::debug!(error = %e, "quantity not aggregated");
                    return None;
                }
            }
        }

        let (first, rest) = parsed.split_first()?;
        if let Some(other) = rest.iter().find(|p| p.unit != first.unit) {
            tracing::debug!(
                unit = %first.unit,
                other = %other.unit,
                "units differ, quantity not aggregated"
            );
            return None;
        }

        let total = parsed.iter().map(|p| p.value).sum();

        Some((total, first.unit.to_owned()))
    }

    pub fn original(&self) -> &[String] {
        match self {
            Self::Aggregated { original, .. } | Self::NotAggregated { original } => original,
        }
    }

    pub fn is_aggregated(&self) -> bool {
        matches!(self, Self::Aggregated { .. })
    }

    /// Text shown next to the ingredient
    ///
    /// - Aggregated: "200g, 300g (totaal 500 g)"
    /// - Not aggregated: "200g, a pinch"
    pub fn display_quantity(&self) -> String {
        match self {
            Self::Aggregated {
                total,
                unit,
                original,
            } => {
                let mut total = format_quantity(*total);
                if !unit.is_empty() {
                    total.push(' ');
                    total.push_str(unit);
                }

                format!("{} (totaal {total})", original.join(", "))
            }
            Self::NotAggregated { original } => original.join(", "),
        }
    }
}

/// Shopping List Aggregator
///
/// Stateless service turning the ingredients of every planned meal into a
/// shopping list grouped per supermarket.
///
/// Ingredients are matched on their exact name within a supermarket:
/// - "Melk 1l" + "Melk 1l" = "1l, 1l (totaal 2 l)"
/// - "Melk 1l" + "Melk 500ml" = "1l, 500ml" (units differ)
/// - "Zout 5g" + "Zout a pinch" = "5g, a pinch" (unparseable amount)
pub struct ShoppingListAggregator;

impl ShoppingListAggregator {
    /// Build the shopping list report
    ///
    /// Never fails: an ingredient whose quantities cannot be summed falls back
    /// to listing them in the order they were supplied.
    pub fn build<I>(entries: I) -> ShoppingListReport
    where
        I: IntoIterator<Item = IngredientEntry>,
    {
        let mut quantities: BTreeMap<(String, String), Vec<String>> = BTreeMap::new();

        for entry in entries {
            quantities
                .entry((entry.store_name, entry.ingredient_name))
                .or_default()
                .push(entry.quantity_text);
        }

        let mut groups: Vec<StoreGroup> = Vec::new();

        for ((store_name, ingredient_name), quantities) in quantities {
            let item = Item {
                ingredient_name,
                display_quantity: AggregationOutcome::decide(quantities).display_quantity(),
            };

            match groups.last_mut() {
                Some(group) if group.store_name == store_name => group.items.push(item),
                _ => groups.push(StoreGroup {
                    store_name,
                    items: vec![item],
                }),
            }
        }

        for group in groups.iter_mut() {
            group
                .items
                .sort_by_cached_key(|item| item.ingredient_name.to_lowercase());
        }

        groups.sort_by(|a, b| a.store_name.cmp(&b.store_name));

        tracing::debug!(groups = groups.len(), "shopping list built");

        ShoppingListReport { groups }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantities(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_decide_same_unit_sums() {
        let outcome = AggregationOutcome::decide(quantities(&["200g", "300g"]));

        assert_eq!(
            outcome,
            AggregationOutcome::Aggregated {
                total: 500.0,
                unit: "g".to_owned(),
                original: quantities(&["200g", "300g"]),
            }
        );
    }

    #[test]
    fn test_decide_empty_unit_differs_from_named_unit() {
        let outcome = AggregationOutcome::decide(quantities(&["200", "200 g"]));

        assert!(!outcome.is_aggregated());
        assert_eq!(outcome.display_quantity(), "200, 200 g");
    }

    #[test]
    fn test_decide_unit_comparison_is_case_sensitive() {
        let outcome = AggregationOutcome::decide(quantities(&["1 L", "1 l"]));

        assert!(!outcome.is_aggregated());
    }

    #[test]
    fn test_decide_empty_group_is_not_aggregated() {
        let outcome = AggregationOutcome::decide(vec![]);

        assert_eq!(outcome, AggregationOutcome::NotAggregated { original: vec![] });
        assert_eq!(outcome.display_quantity(), "");
    }

    #[test]
    fn test_display_without_unit() {
        let outcome = AggregationOutcome::decide(quantities(&["2", "1/2"]));

        assert_eq!(outcome.display_quantity(), "2, 1/2 (totaal 2.5)");
    }

    #[test]
    fn test_original_keeps_supplied_order() {
        let outcome = AggregationOutcome::decide(quantities(&["3 el", "a pinch", "1 el"]));

        assert_eq!(outcome.original().to_vec(), quantities(&["3 el", "a pinch", "1 el"]));
    }

    #[test]
    fn test_build_empty_input() {
        let report = ShoppingListAggregator::build(Vec::<IngredientEntry>::new());

        assert!(report.is_empty());
    }
}
