use chrono::{DateTime, Utc};
use tracing::info;

use crate::core::metrics::{self, EmptyHistory};
use crate::core::{RawTransaction, TxSummary, WalletReport};
use crate::rpc::{EtherscanClient, ProviderError};
use crate::signals::RiskScorer;

/// Fetch a wallet's history and produce a scored report.
///
/// The fetch is the only await point; everything downstream is synchronous
/// and side-effect free, so concurrent analyses need no coordination.
pub async fn analyze(
    client: &EtherscanClient,
    scorer: &RiskScorer,
    address: &str,
    window: usize,
) -> Result<WalletReport, AnalyzeError> {
    let mut transactions = client.fetch_transactions(address).await?;
    info!("Fetched {} transactions for {address}", transactions.len());

    // Score over the fixed window of most recent transactions.
    transactions.truncate(window);

    let report = build_report(address, &transactions, scorer, Utc::now())?;
    info!(
        "Scored {address}: overall {} ({:?})",
        report.assessment.score.overall, report.assessment.risk_level
    );
    Ok(report)
}

/// Assemble a report from an already-fetched window.
pub fn build_report(
    address: &str,
    transactions: &[RawTransaction],
    scorer: &RiskScorer,
    now: DateTime<Utc>,
) -> Result<WalletReport, EmptyHistory> {
    let metrics = metrics::extract(address, transactions, now)?;
    let assessment = scorer.score(transactions, &metrics);
    Ok(WalletReport {
        address: address.to_string(),
        metrics,
        assessment,
        transactions: transactions.iter().map(TxSummary::from_raw).collect(),
    })
}

#[derive(Debug)]
pub enum AnalyzeError {
    Provider(ProviderError),
    EmptyHistory,
}

impl std::fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyzeError::Provider(e) => write!(f, "{e}"),
            AnalyzeError::EmptyHistory => write!(f, "no transactions to analyze"),
        }
    }
}

impl std::error::Error for AnalyzeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalyzeError::Provider(e) => Some(e),
            AnalyzeError::EmptyHistory => None,
        }
    }
}

impl From<ProviderError> for AnalyzeError {
    fn from(e: ProviderError) -> Self {
        AnalyzeError::Provider(e)
    }
}

impl From<EmptyHistory> for AnalyzeError {
    fn from(_: EmptyHistory) -> Self {
        AnalyzeError::EmptyHistory
    }
}
