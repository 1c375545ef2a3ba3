use std::collections::HashMap;

/// One displayed score category.
#[derive(Debug, Clone, Copy)]
pub struct BreakdownItem {
    pub label: &'static str,
    pub key: &'static str,
    pub weight: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct BreakdownGroup {
    pub name: &'static str,
    pub items: [BreakdownItem; 3],
}

const fn item(label: &'static str, key: &'static str, weight: &'static str) -> BreakdownItem {
    BreakdownItem { label, key, weight }
}

pub const BREAKDOWN_GROUPS: [BreakdownGroup; 4] = [
    BreakdownGroup {
        name: "Fordonets skick",
        items: [
            item("Alder", "ageScore", "12%"),
            item("Miltal", "mileageScore", "12%"),
            item("Besiktning", "inspectionScore", "10%"),
        ],
    },
    BreakdownGroup {
        name: "Ekonomi & juridik",
        items: [
            item("Skuld & ekonomi", "debtFinanceScore", "15%"),
            item("Marknadsvarde", "marketValueScore", "5%"),
            item("Miljo & skatt", "environmentScore", "5%"),
        ],
    },
    BreakdownGroup {
        name: "Historik & underhall",
        items: [
            item("Forsakring", "insuranceScore", "9%"),
            item("Servicehistorik", "serviceHistoryScore", "8%"),
            item("Agarhistorik", "ownerHistoryScore", "5%"),
        ],
    },
    BreakdownGroup {
        name: "Sakerhet & tillforlitlighet",
        items: [
            item("Drivlina", "drivetrainScore", "8%"),
            item("Aterkallelser", "recallScore", "6%"),
            item("Stold & sakerhet", "theftSecurityScore", "5%"),
        ],
    },
];

/// Keys every analysis must carry, in the order missing ones are reported.
pub const EXPECTED_BREAKDOWN_KEYS: [&str; 12] = [
    "ageScore",
    "mileageScore",
    "insuranceScore",
    "recallScore",
    "inspectionScore",
    "debtFinanceScore",
    "serviceHistoryScore",
    "drivetrainScore",
    "ownerHistoryScore",
    "marketValueScore",
    "environmentScore",
    "theftSecurityScore",
];

/// A zero debt/finance score means a purchase block is registered.
pub const PURCHASE_BLOCK_KEY: &str = "debtFinanceScore";

pub fn missing_breakdown_keys(breakdown: &HashMap<String, f64>) -> Vec<&'static str> {
    EXPECTED_BREAKDOWN_KEYS
        .iter()
        .copied()
        .filter(|key| !breakdown.contains_key(*key))
        .collect()
}

pub fn has_purchase_block(breakdown: &HashMap<String, f64>) -> bool {
    breakdown.get(PURCHASE_BLOCK_KEY).is_some_and(|v| *v == 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_breakdown() -> HashMap<String, f64> {
        EXPECTED_BREAKDOWN_KEYS.iter().map(|k| (k.to_string(), 50.0)).collect()
    }

    #[test]
    fn groups_cover_exactly_the_expected_keys() {
        let mut grouped: Vec<&str> = BREAKDOWN_GROUPS
            .iter()
            .flat_map(|g| g.items.iter().map(|i| i.key))
            .collect();
        let mut expected = EXPECTED_BREAKDOWN_KEYS.to_vec();
        grouped.sort_unstable();
        expected.sort_unstable();
        assert_eq!(grouped, expected);
    }

    #[test]
    fn complete_breakdown_has_nothing_missing() {
        assert!(missing_breakdown_keys(&full_breakdown()).is_empty());
    }

    #[test]
    fn missing_keys_reported_in_canonical_order() {
        let mut breakdown = full_breakdown();
        breakdown.remove("theftSecurityScore");
        breakdown.remove("ageScore");
        breakdown.remove("recallScore");

        assert_eq!(
            missing_breakdown_keys(&breakdown),
            vec!["ageScore", "recallScore", "theftSecurityScore"]
        );
    }

    #[test]
    fn extra_keys_are_ignored() {
        let mut breakdown = full_breakdown();
        breakdown.insert("bonusScore".to_string(), 100.0);
        assert!(missing_breakdown_keys(&breakdown).is_empty());
    }

    #[test]
    fn empty_breakdown_misses_all_twelve() {
        assert_eq!(missing_breakdown_keys(&HashMap::new()).len(), 12);
    }

    #[test]
    fn purchase_block_only_on_zero_debt_score() {
        let mut breakdown = full_breakdown();
        assert!(!has_purchase_block(&breakdown));
        breakdown.insert("debtFinanceScore".to_string(), 0.0);
        assert!(has_purchase_block(&breakdown));
        breakdown.remove("debtFinanceScore");
        assert!(!has_purchase_block(&breakdown));
    }
}
