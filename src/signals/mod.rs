pub mod factors;
pub mod score;
pub mod terms;

use std::collections::HashSet;

use crate::core::{
    RawTransaction, RiskLevel, RiskScore, TermScore, WalletAssessment, WalletMetrics,
};
use terms::{RiskTerm, TermGroup};

/// Everything a risk term may look at.
pub struct ScoringContext<'a> {
    pub metrics: &'a WalletMetrics,
    /// Distinct contract addresses the wallet has called.
    pub distinct_contracts: usize,
}

/// The scorer applies all risk terms and combines them into the three
/// normalized scores. Pure function of its inputs.
pub struct RiskScorer {
    terms: Vec<Box<dyn RiskTerm + Send + Sync>>,
}

impl RiskScorer {
    pub fn new() -> Self {
        Self {
            terms: terms::default_terms(),
        }
    }

    pub fn score(
        &self,
        transactions: &[RawTransaction],
        metrics: &WalletMetrics,
    ) -> WalletAssessment {
        let ctx = ScoringContext {
            metrics,
            distinct_contracts: distinct_contracts(transactions),
        };

        let term_scores: Vec<TermScore> = self
            .terms
            .iter()
            .map(|term| TermScore {
                name: term.name().to_string(),
                value: term.evaluate(&ctx),
                cap: term.cap(),
            })
            .collect();

        let transaction_risk = group_sum(&self.terms, &term_scores, TermGroup::Transaction);
        let contract_risk = group_sum(&self.terms, &term_scores, TermGroup::SmartContract);
        let overall = score::blend_overall(transaction_risk, contract_risk, metrics);

        let risk_score = RiskScore {
            overall: score::normalize(overall),
            transaction: score::normalize(transaction_risk),
            smart_contract: score::normalize(contract_risk),
        };

        WalletAssessment {
            score: risk_score,
            risk_level: RiskLevel::from_score(risk_score.overall),
            risk_factors: factors::collect(metrics),
            term_scores,
        }
    }
}

fn group_sum(
    terms: &[Box<dyn RiskTerm + Send + Sync>],
    scores: &[TermScore],
    group: TermGroup,
) -> f64 {
    terms
        .iter()
        .zip(scores)
        .filter(|(term, _)| term.group() == group)
        .map(|(_, score)| score.value)
        .sum()
}

fn distinct_contracts(transactions: &[RawTransaction]) -> usize {
    transactions
        .iter()
        .filter(|tx| tx.is_contract_call() && !tx.to.is_empty())
        .map(|tx| tx.to.to_ascii_lowercase())
        .collect::<HashSet<_>>()
        .len()
}
