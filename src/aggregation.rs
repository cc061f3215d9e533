//! Aggregation of raw cost records into ranked per-account summaries
//!
//! Records are grouped by account, summed per category within each account,
//! then ranked descending by spend and truncated to the configured top-N.
//!
//! Ordering is deterministic: categories keep the order they were first
//! encountered in the input, and the descending sort is stable, so equal
//! totals never reorder. Amounts are summed at full precision and rounded
//! to cents only when a total is finalized.

use crate::error::{CostwatchError, Result};
use crate::types::{cents, round_to_cents, AccountId, Category, CostRecord, RankedEntry};
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

/// Accumulator for one account's per-category totals
///
/// Keeps first-seen category order so ties break deterministically.
struct CategoryAccumulator {
    order: Vec<Category>,
    totals: HashMap<Category, f64>,
}

impl CategoryAccumulator {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            totals: HashMap::new(),
        }
    }

    fn add(&mut self, category: &Category, amount: f64) {
        match self.totals.get_mut(category) {
            Some(total) => *total += amount,
            None => {
                self.order.push(category.clone());
                self.totals.insert(category.clone(), amount);
            }
        }
    }

    fn into_ranked(mut self, top_n: usize) -> Vec<RankedEntry> {
        let mut entries: Vec<RankedEntry> = self
            .order
            .drain(..)
            .map(|category| {
                let total = self.totals[&category];
                RankedEntry {
                    category,
                    amount: round_to_cents(total),
                }
            })
            .collect();

        // Stable sort: equal totals keep first-seen order.
        entries.sort_by_key(|entry| Reverse(cents(entry.amount)));
        entries.truncate(top_n);
        entries
    }
}

/// Group records by account, sum per category, rank, and cap at `top_n`
///
/// Pure function of its input: identical record sequences always produce an
/// identical mapping. Empty input yields an empty mapping.
///
/// # Errors
///
/// Returns [`CostwatchError::InvalidArgument`] if `top_n` is zero; a
/// zero-length ranking is a caller mistake, not a meaningful request.
///
/// # Examples
/// ```
/// use costwatch::aggregation::aggregate;
/// use costwatch::types::{AccountId, Category, CostRecord};
///
/// let records = vec![
///     CostRecord {
///         account: AccountId::new("1"),
///         category: Category::new("EC2"),
///         amount: 10.0,
///     },
/// ];
/// let ranked = aggregate(&records, 10).unwrap();
/// assert_eq!(ranked[&AccountId::new("1")].len(), 1);
/// ```
pub fn aggregate(
    records: &[CostRecord],
    top_n: usize,
) -> Result<BTreeMap<AccountId, Vec<RankedEntry>>> {
    if top_n == 0 {
        return Err(CostwatchError::InvalidArgument(
            "top_n must be a positive integer".to_string(),
        ));
    }

    let mut by_account: BTreeMap<AccountId, CategoryAccumulator> = BTreeMap::new();
    for record in records {
        by_account
            .entry(record.account.clone())
            .or_insert_with(CategoryAccumulator::new)
            .add(&record.category, record.amount);
    }

    Ok(by_account
        .into_iter()
        .map(|(account, acc)| (account, acc.into_ranked(top_n)))
        .collect())
}
