//! Property-based tests for the aggregation pipeline using proptest

use costwatch::{
    aggregation::aggregate,
    types::{round_to_cents, AccountId, Category, CostRecord},
};
use proptest::prelude::*;

// Strategies for generating test data

prop_compose! {
    fn arb_record()(
        account in prop::sample::select(vec!["1", "2", "3"]),
        category in prop::sample::select(vec!["EC2", "S3", "Lambda", "RDS", "SQS"]),
        amount in -100.0f64..1000.0,
    ) -> CostRecord {
        CostRecord {
            account: AccountId::new(account),
            category: Category::new(category),
            amount,
        }
    }
}

proptest! {
    #[test]
    fn entries_never_exceed_top_n(
        records in prop::collection::vec(arb_record(), 0..200),
        top_n in 1usize..8,
    ) {
        let ranked = aggregate(&records, top_n).unwrap();
        for entries in ranked.values() {
            prop_assert!(entries.len() <= top_n);
        }
    }

    #[test]
    fn entries_are_non_increasing_by_amount(
        records in prop::collection::vec(arb_record(), 0..200),
    ) {
        let ranked = aggregate(&records, 10).unwrap();
        for entries in ranked.values() {
            for pair in entries.windows(2) {
                prop_assert!(pair[0].amount >= pair[1].amount);
            }
        }
    }

    #[test]
    fn totals_match_input_sums_within_cent_rounding(
        records in prop::collection::vec(arb_record(), 0..200),
    ) {
        let ranked = aggregate(&records, usize::MAX).unwrap();
        for (account, entries) in &ranked {
            for entry in entries {
                // Sum in input order, exactly as the aggregator does
                let expected: f64 = records
                    .iter()
                    .filter(|r| &r.account == account && r.category == entry.category)
                    .map(|r| r.amount)
                    .sum();
                prop_assert_eq!(entry.amount, round_to_cents(expected));
            }
        }
    }

    #[test]
    fn no_duplicate_categories_within_one_account(
        records in prop::collection::vec(arb_record(), 0..200),
    ) {
        let ranked = aggregate(&records, 10).unwrap();
        for entries in ranked.values() {
            let mut seen = std::collections::HashSet::new();
            for entry in entries {
                prop_assert!(seen.insert(entry.category.clone()));
            }
        }
    }

    #[test]
    fn aggregation_is_idempotent(
        records in prop::collection::vec(arb_record(), 0..200),
    ) {
        prop_assert_eq!(
            aggregate(&records, 10).unwrap(),
            aggregate(&records, 10).unwrap()
        );
    }

    #[test]
    fn every_output_account_appeared_in_the_input(
        records in prop::collection::vec(arb_record(), 0..200),
    ) {
        let ranked = aggregate(&records, 10).unwrap();
        for account in ranked.keys() {
            prop_assert!(records.iter().any(|r| &r.account == account));
        }
    }
}
