pub mod analyzer;
pub mod metrics;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wei per whole ETH, the chain's unit scale.
pub const WEI_PER_ETH: f64 = 1e18;

/// A single on-chain transaction as reported by the explorer API.
///
/// Lists are ordered newest first; the scoring pipeline relies on the first
/// element being the most recent transaction and the last the oldest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    pub hash: String,
    pub from: String,
    /// Empty for contract-creation transactions.
    pub to: String,
    /// Transferred value in wei.
    pub value: u128,
    pub timestamp: DateTime<Utc>,
    pub gas_price: u128,
    pub gas_used: u64,
    /// Call data. "" or "0x" means a plain value transfer.
    pub input: String,
}

impl RawTransaction {
    /// Whether this transaction calls into contract code rather than
    /// transferring value.
    pub fn is_contract_call(&self) -> bool {
        !(self.input.is_empty() || self.input == "0x")
    }
}

/// Summary statistics derived from a wallet's transaction window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletMetrics {
    pub total_transactions: usize,
    /// Distinct counterparty addresses, the queried wallet excluded.
    pub unique_contacts: usize,
    /// Average transferred value in ETH.
    pub avg_transaction_value: f64,
    /// Average gas cost (gas_used × gas_price) in wei.
    pub avg_gas_cost: f64,
    /// Fraction of transactions carrying call data, 0.0-1.0.
    pub contract_interaction_rate: f64,
    /// Days since the oldest transaction in the window, never negative.
    pub wallet_age_days: i64,
    /// Days since the newest transaction in the window, never negative.
    pub days_since_last_activity: i64,
    /// Transactions per day over the observed window.
    pub tx_frequency: f64,
}

/// The three normalized risk scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskScore {
    pub overall: u8,
    pub transaction: u8,
    pub smart_contract: u8,
}

/// Contribution of a single risk term, kept for the report breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermScore {
    pub name: String,
    pub value: f64,
    pub cap: f64,
}

/// A scored wallet ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletAssessment {
    pub score: RiskScore,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub term_scores: Vec<TermScore>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Critical, // ≥80
    High,     // ≥60
    Medium,   // ≥40
    Low,      // <40
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            RiskLevel::Critical
        } else if score >= 60 {
            RiskLevel::High
        } else if score >= 40 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Per-transaction level from the transferred value in ETH.
    pub fn from_tx_value(eth: f64) -> Self {
        if eth > 10.0 {
            RiskLevel::High
        } else if eth > 1.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "🔴",
            RiskLevel::High => "🟠",
            RiskLevel::Medium => "🟡",
            RiskLevel::Low => "⚪",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxKind {
    Transfer,
    ContractCall,
}

/// One row of the analyzed window, as shown in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxSummary {
    pub hash: String,
    pub kind: TxKind,
    pub value_eth: f64,
    pub timestamp: DateTime<Utc>,
    pub risk_level: RiskLevel,
}

impl TxSummary {
    pub fn from_raw(tx: &RawTransaction) -> Self {
        let value_eth = tx.value as f64 / WEI_PER_ETH;
        Self {
            hash: tx.hash.clone(),
            kind: if tx.is_contract_call() {
                TxKind::ContractCall
            } else {
                TxKind::Transfer
            },
            value_eth,
            timestamp: tx.timestamp,
            risk_level: RiskLevel::from_tx_value(value_eth),
        }
    }
}

/// Full analysis result for one wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletReport {
    pub address: String,
    pub metrics: WalletMetrics,
    pub assessment: WalletAssessment,
    pub transactions: Vec<TxSummary>,
}
