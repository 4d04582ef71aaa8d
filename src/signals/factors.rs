use crate::core::WalletMetrics;

pub const HIGH_FREQUENCY: &str = "High transaction frequency";
pub const HEAVY_CONTRACT_USE: &str = "Heavy smart contract interaction";
pub const HIGH_AVG_VALUE: &str = "High average transaction value";
pub const NEW_WALLET: &str = "New wallet";
pub const RECENT_ACTIVITY: &str = "Very recent activity";
pub const WIDE_NETWORK: &str = "Large counterparty network";

/// Attach a qualitative label for every metric threshold the wallet crosses.
/// Labels explain the score, they do not feed back into it.
pub fn collect(metrics: &WalletMetrics) -> Vec<String> {
    let mut factors = Vec::new();
    if metrics.tx_frequency > 5.0 {
        factors.push(HIGH_FREQUENCY.to_string());
    }
    if metrics.contract_interaction_rate > 0.5 {
        factors.push(HEAVY_CONTRACT_USE.to_string());
    }
    if metrics.avg_transaction_value > 10.0 {
        factors.push(HIGH_AVG_VALUE.to_string());
    }
    if metrics.wallet_age_days < 30 {
        factors.push(NEW_WALLET.to_string());
    }
    if metrics.days_since_last_activity < 1 {
        factors.push(RECENT_ACTIVITY.to_string());
    }
    if metrics.unique_contacts > 100 {
        factors.push(WIDE_NETWORK.to_string());
    }
    factors
}
