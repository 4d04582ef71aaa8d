use crate::core::WalletMetrics;

/// Round a raw sub-score to the nearest integer and clamp into 0-100.
pub fn normalize(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

/// Blend the two sub-scores into the overall score.
///
/// Older wallets shift weight toward the transaction-pattern signal, and
/// low-activity wallets have the composite damped so a new or silent wallet
/// never scores as confidently as an established one.
pub fn blend_overall(transaction_risk: f64, contract_risk: f64, metrics: &WalletMetrics) -> f64 {
    let age_weight = (metrics.wallet_age_days as f64 / 365.0).min(1.0);
    let activity_weight = (metrics.total_transactions as f64 / 1000.0).min(1.0);

    let blended = transaction_risk * (0.4 + 0.1 * age_weight)
        + contract_risk * (0.6 - 0.1 * age_weight);
    blended * (0.7 + 0.3 * activity_weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_metrics(wallet_age_days: i64, total_transactions: usize) -> WalletMetrics {
        WalletMetrics {
            total_transactions,
            unique_contacts: 0,
            avg_transaction_value: 0.0,
            avg_gas_cost: 0.0,
            contract_interaction_rate: 0.0,
            wallet_age_days,
            days_since_last_activity: 0,
            tx_frequency: 0.0,
        }
    }

    #[test]
    fn normalize_rounds() {
        assert_eq!(normalize(49.4), 49);
        assert_eq!(normalize(49.5), 50);
    }

    #[test]
    fn normalize_clamps() {
        assert_eq!(normalize(-5.0), 0);
        assert_eq!(normalize(250.0), 100);
    }

    #[test]
    fn mature_active_wallet_weights_stabilize() {
        // 2 years old, 1000+ txs: weights settle at 0.5/0.5 with no damping.
        let m = make_metrics(730, 1200);
        let overall = blend_overall(60.0, 40.0, &m);
        assert!((overall - 50.0).abs() < 1e-9);
    }

    #[test]
    fn brand_new_wallet_is_damped() {
        // Age 0, single tx: 0.4/0.6 weights, 0.7003 multiplier.
        let m = make_metrics(0, 1);
        let overall = blend_overall(100.0, 100.0, &m);
        assert!((overall - 70.03).abs() < 0.01);
    }

    #[test]
    fn age_shifts_weight_toward_transactions() {
        let young = make_metrics(0, 1000);
        let old = make_metrics(365, 1000);
        // With only transaction risk present, maturity raises the blend.
        assert!(blend_overall(80.0, 0.0, &old) > blend_overall(80.0, 0.0, &young));
        // With only contract risk present, maturity lowers it.
        assert!(blend_overall(0.0, 80.0, &old) < blend_overall(0.0, 80.0, &young));
    }

    #[test]
    fn capped_inputs_never_exceed_one_hundred() {
        let m = make_metrics(10_000, 1_000_000);
        assert_eq!(normalize(blend_overall(100.0, 100.0, &m)), 100);
    }
}
