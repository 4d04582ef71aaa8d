use crate::signals::ScoringContext;

/// Which sub-score a term contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermGroup {
    Transaction,
    SmartContract,
}

/// A risk term evaluating a single behavioral aspect of the wallet.
/// Returns a value between 0.0 and its cap; term caps within a group sum
/// to 100.
pub trait RiskTerm {
    fn name(&self) -> &str;
    fn cap(&self) -> f64;
    fn group(&self) -> TermGroup;
    fn evaluate(&self, ctx: &ScoringContext) -> f64;
}

/// Return all risk terms in evaluation order.
pub fn default_terms() -> Vec<Box<dyn RiskTerm + Send + Sync>> {
    vec![
        Box::new(ActivityTerm),
        Box::new(ValueTerm),
        Box::new(AgeTerm),
        Box::new(LastActivityTerm),
        Box::new(ContactTerm),
        Box::new(InteractionTerm),
        Box::new(GasTerm),
        Box::new(ContractDiversityTerm),
    ]
}

/// Linear ramp: full cap at ratio 1.0, saturating above.
fn linear(ratio: f64, cap: f64) -> f64 {
    (ratio * cap).min(cap)
}

// --- Transaction terms ---

struct ActivityTerm;
impl RiskTerm for ActivityTerm {
    fn name(&self) -> &str { "activity" }
    fn cap(&self) -> f64 { 30.0 }
    fn group(&self) -> TermGroup { TermGroup::Transaction }
    fn evaluate(&self, ctx: &ScoringContext) -> f64 {
        // Saturates at 5 tx/day.
        linear(ctx.metrics.tx_frequency / 5.0, self.cap())
    }
}

struct ValueTerm;
impl RiskTerm for ValueTerm {
    fn name(&self) -> &str { "value" }
    fn cap(&self) -> f64 { 25.0 }
    fn group(&self) -> TermGroup { TermGroup::Transaction }
    fn evaluate(&self, ctx: &ScoringContext) -> f64 {
        // Saturates at 50 ETH average.
        linear(ctx.metrics.avg_transaction_value / 50.0, self.cap())
    }
}

/// Young wallets score high; the term decays to 0 at 600 days.
struct AgeTerm;
impl RiskTerm for AgeTerm {
    fn name(&self) -> &str { "age" }
    fn cap(&self) -> f64 { 20.0 }
    fn group(&self) -> TermGroup { TermGroup::Transaction }
    fn evaluate(&self, ctx: &ScoringContext) -> f64 {
        (self.cap() - ctx.metrics.wallet_age_days as f64 / 30.0).max(0.0)
    }
}

/// Recent activity scores high; the term decays to 0 after 30 quiet days.
struct LastActivityTerm;
impl RiskTerm for LastActivityTerm {
    fn name(&self) -> &str { "last_activity" }
    fn cap(&self) -> f64 { 15.0 }
    fn group(&self) -> TermGroup { TermGroup::Transaction }
    fn evaluate(&self, ctx: &ScoringContext) -> f64 {
        (self.cap() - ctx.metrics.days_since_last_activity as f64 / 2.0).max(0.0)
    }
}

struct ContactTerm;
impl RiskTerm for ContactTerm {
    fn name(&self) -> &str { "contacts" }
    fn cap(&self) -> f64 { 10.0 }
    fn group(&self) -> TermGroup { TermGroup::Transaction }
    fn evaluate(&self, ctx: &ScoringContext) -> f64 {
        // Saturates at 100 distinct counterparties.
        linear(ctx.metrics.unique_contacts as f64 / 100.0, self.cap())
    }
}

// --- Smart contract terms ---

struct InteractionTerm;
impl RiskTerm for InteractionTerm {
    fn name(&self) -> &str { "contract_interaction" }
    fn cap(&self) -> f64 { 40.0 }
    fn group(&self) -> TermGroup { TermGroup::SmartContract }
    fn evaluate(&self, ctx: &ScoringContext) -> f64 {
        linear(ctx.metrics.contract_interaction_rate, self.cap())
    }
}

struct GasTerm;
impl RiskTerm for GasTerm {
    fn name(&self) -> &str { "gas_cost" }
    fn cap(&self) -> f64 { 30.0 }
    fn group(&self) -> TermGroup { TermGroup::SmartContract }
    fn evaluate(&self, ctx: &ScoringContext) -> f64 {
        // Saturates at 1e15 wei (0.001 ETH) average gas spend.
        linear(ctx.metrics.avg_gas_cost / 1e15, self.cap())
    }
}

struct ContractDiversityTerm;
impl RiskTerm for ContractDiversityTerm {
    fn name(&self) -> &str { "contract_diversity" }
    fn cap(&self) -> f64 { 30.0 }
    fn group(&self) -> TermGroup { TermGroup::SmartContract }
    fn evaluate(&self, ctx: &ScoringContext) -> f64 {
        // Saturates at 20 distinct contracts called.
        linear(ctx.distinct_contracts as f64 / 20.0, self.cap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WalletMetrics;

    fn make_metrics() -> WalletMetrics {
        WalletMetrics {
            total_transactions: 1,
            unique_contacts: 0,
            avg_transaction_value: 0.0,
            avg_gas_cost: 0.0,
            contract_interaction_rate: 0.0,
            wallet_age_days: 0,
            days_since_last_activity: 0,
            tx_frequency: 0.0,
        }
    }

    fn ctx(metrics: &WalletMetrics) -> ScoringContext {
        ScoringContext {
            metrics,
            distinct_contracts: 0,
        }
    }

    #[test]
    fn activity_zero() {
        let m = make_metrics();
        assert_eq!(ActivityTerm.evaluate(&ctx(&m)), 0.0);
    }

    #[test]
    fn activity_midpoint() {
        let mut m = make_metrics();
        m.tx_frequency = 2.5;
        assert!((ActivityTerm.evaluate(&ctx(&m)) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn activity_saturates() {
        let mut m = make_metrics();
        m.tx_frequency = 10_000.0;
        assert_eq!(ActivityTerm.evaluate(&ctx(&m)), 30.0);
    }

    #[test]
    fn value_midpoint() {
        let mut m = make_metrics();
        m.avg_transaction_value = 25.0;
        assert!((ValueTerm.evaluate(&ctx(&m)) - 12.5).abs() < 1e-9);
    }

    #[test]
    fn value_saturates() {
        let mut m = make_metrics();
        m.avg_transaction_value = 1e9;
        assert_eq!(ValueTerm.evaluate(&ctx(&m)), 25.0);
    }

    #[test]
    fn age_fresh_wallet_maxes() {
        let m = make_metrics();
        assert_eq!(AgeTerm.evaluate(&ctx(&m)), 20.0);
    }

    #[test]
    fn age_decreases_with_maturity() {
        let mut m = make_metrics();
        m.wallet_age_days = 300;
        assert!((AgeTerm.evaluate(&ctx(&m)) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn age_floors_at_zero() {
        let mut m = make_metrics();
        m.wallet_age_days = 6_000;
        assert_eq!(AgeTerm.evaluate(&ctx(&m)), 0.0);
    }

    #[test]
    fn last_activity_today_maxes() {
        let m = make_metrics();
        assert_eq!(LastActivityTerm.evaluate(&ctx(&m)), 15.0);
    }

    #[test]
    fn last_activity_decreases_when_quiet() {
        let mut m = make_metrics();
        m.days_since_last_activity = 10;
        assert!((LastActivityTerm.evaluate(&ctx(&m)) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn last_activity_floors_at_zero() {
        let mut m = make_metrics();
        m.days_since_last_activity = 365;
        assert_eq!(LastActivityTerm.evaluate(&ctx(&m)), 0.0);
    }

    #[test]
    fn contacts_midpoint() {
        let mut m = make_metrics();
        m.unique_contacts = 50;
        assert!((ContactTerm.evaluate(&ctx(&m)) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn contacts_saturate() {
        let mut m = make_metrics();
        m.unique_contacts = 1_000_000;
        assert_eq!(ContactTerm.evaluate(&ctx(&m)), 10.0);
    }

    #[test]
    fn interaction_scales_with_rate() {
        let mut m = make_metrics();
        m.contract_interaction_rate = 0.25;
        assert!((InteractionTerm.evaluate(&ctx(&m)) - 10.0).abs() < 1e-9);
        m.contract_interaction_rate = 1.0;
        assert_eq!(InteractionTerm.evaluate(&ctx(&m)), 40.0);
    }

    #[test]
    fn gas_midpoint() {
        let mut m = make_metrics();
        m.avg_gas_cost = 5e14;
        assert!((GasTerm.evaluate(&ctx(&m)) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn gas_saturates() {
        let mut m = make_metrics();
        m.avg_gas_cost = 1e30;
        assert_eq!(GasTerm.evaluate(&ctx(&m)), 30.0);
    }

    #[test]
    fn diversity_counts_distinct_contracts() {
        let m = make_metrics();
        let context = ScoringContext {
            metrics: &m,
            distinct_contracts: 10,
        };
        assert!((ContractDiversityTerm.evaluate(&context) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn diversity_saturates() {
        let m = make_metrics();
        let context = ScoringContext {
            metrics: &m,
            distinct_contracts: 500,
        };
        assert_eq!(ContractDiversityTerm.evaluate(&context), 30.0);
    }

    #[test]
    fn default_terms_count() {
        assert_eq!(default_terms().len(), 8);
    }

    #[test]
    fn term_names_unique() {
        let terms = default_terms();
        let mut names: Vec<&str> = terms.iter().map(|t| t.name()).collect();
        let len = names.len();
        names.sort();
        names.dedup();
        assert_eq!(len, names.len());
    }

    #[test]
    fn group_caps_sum_to_one_hundred() {
        let terms = default_terms();
        for group in [TermGroup::Transaction, TermGroup::SmartContract] {
            let sum: f64 = terms
                .iter()
                .filter(|t| t.group() == group)
                .map(|t| t.cap())
                .sum();
            assert_eq!(sum, 100.0);
        }
    }
}
