use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::core::{RawTransaction, WalletMetrics, WEI_PER_ETH};

const SECS_PER_DAY: f64 = 86_400.0;

/// The wallet has no transactions to analyze. Callers must surface this as
/// "no history found", never as a zero score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyHistory;

impl std::fmt::Display for EmptyHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no transactions to analyze")
    }
}

impl std::error::Error for EmptyHistory {}

/// Reduce a wallet's transaction window to summary statistics.
///
/// `transactions` must be ordered newest first. `address` is the queried
/// wallet; it is excluded from the contact set directly instead of being
/// inferred from the set size. `now` is passed in so identical inputs always
/// produce identical metrics.
pub fn extract(
    address: &str,
    transactions: &[RawTransaction],
    now: DateTime<Utc>,
) -> Result<WalletMetrics, EmptyHistory> {
    if transactions.is_empty() {
        return Err(EmptyHistory);
    }
    let count = transactions.len() as f64;
    let own = address.to_ascii_lowercase();

    // Address comparison is case-insensitive; checksummed and lowercase
    // forms of the same address must not count as two contacts.
    let mut contacts: HashSet<String> = HashSet::new();
    for tx in transactions {
        for addr in [&tx.from, &tx.to] {
            if addr.is_empty() {
                continue;
            }
            let lower = addr.to_ascii_lowercase();
            if lower != own {
                contacts.insert(lower);
            }
        }
    }

    let total_value: f64 = transactions.iter().map(|tx| tx.value as f64).sum();
    let total_gas_cost: f64 = transactions
        .iter()
        .map(|tx| tx.gas_used as f64 * tx.gas_price as f64)
        .sum();
    let contract_calls = transactions
        .iter()
        .filter(|tx| tx.is_contract_call())
        .count();

    let newest = transactions[0].timestamp;
    let oldest = transactions[transactions.len() - 1].timestamp;

    // Day counts truncate; timestamps in the future clamp to 0.
    let wallet_age_days = (now - oldest).num_days().max(0);
    let days_since_last_activity = (now - newest).num_days().max(0);

    // Minimum window of one day guards the division when the whole history
    // shares a single timestamp.
    let span_days = (newest - oldest).num_seconds() as f64 / SECS_PER_DAY;
    let tx_frequency = count / span_days.max(1.0);

    Ok(WalletMetrics {
        total_transactions: transactions.len(),
        unique_contacts: contacts.len(),
        avg_transaction_value: total_value / WEI_PER_ETH / count,
        avg_gas_cost: total_gas_cost / count,
        contract_interaction_rate: contract_calls as f64 / count,
        wallet_age_days,
        days_since_last_activity,
        tx_frequency,
    })
}
