mod config;
mod core;
mod rpc;
mod signals;

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::core::analyzer::{self, AnalyzeError};
use crate::core::WalletReport;
use crate::rpc::{EtherscanClient, ProviderError};
use crate::signals::RiskScorer;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("walletscope=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let address = match args.iter().find(|a| !a.starts_with("--")) {
        Some(a) => a.clone(),
        None => {
            eprintln!("Usage: walletscope <address> [--json]");
            std::process::exit(2);
        }
    };

    let config = Config::load("config.toml");
    tracing::info!(
        "Analyzing {address} (window: {} txs)",
        config.analysis.tx_window
    );

    let client = EtherscanClient::new(
        &config.etherscan.api_url,
        config.etherscan.api_key.clone(),
        Duration::from_secs(config.etherscan.timeout_seconds),
    );
    let scorer = RiskScorer::new();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let result = rt.block_on(analyzer::analyze(
        &client,
        &scorer,
        &address,
        config.analysis.tx_window,
    ));

    match result {
        Ok(report) => {
            if as_json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).expect("report serializes")
                );
            } else {
                print_report(&report);
            }
        }
        Err(AnalyzeError::Provider(ProviderError::NoTransactions))
        | Err(AnalyzeError::EmptyHistory) => {
            eprintln!("No transactions found for {address}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Analysis failed: {e}");
            std::process::exit(1);
        }
    }
}

fn print_report(report: &WalletReport) {
    let assessment = &report.assessment;
    let m = &report.metrics;

    println!();
    println!("{} {}", assessment.risk_level.emoji(), report.address);
    println!(
        "  Overall risk:        {:>3}/100 ({:?})",
        assessment.score.overall, assessment.risk_level
    );
    println!("  Transaction risk:    {:>3}/100", assessment.score.transaction);
    println!("  Smart contract risk: {:>3}/100", assessment.score.smart_contract);
    println!();
    println!(
        "  {} txs | {} contacts | {:.4} ETH avg | {:.0}% contract calls",
        m.total_transactions,
        m.unique_contacts,
        m.avg_transaction_value,
        m.contract_interaction_rate * 100.0
    );
    println!(
        "  age {}d | last activity {}d ago | {:.2} tx/day",
        m.wallet_age_days, m.days_since_last_activity, m.tx_frequency
    );

    if !assessment.risk_factors.is_empty() {
        println!();
        println!("  Risk factors:");
        for factor in &assessment.risk_factors {
            println!("    - {factor}");
        }
    }

    println!();
    println!("  Term breakdown:");
    for term in &assessment.term_scores {
        println!("    {:<22} {:>5.1} / {:.0}", term.name, term.value, term.cap);
    }

    println!();
    println!("  Recent transactions:");
    for tx in report.transactions.iter().take(10) {
        let hash_short = &tx.hash[..10.min(tx.hash.len())];
        println!(
            "    {} {} {:?} {:>10.4} ETH ({:?})",
            tx.timestamp.format("%Y-%m-%d"),
            hash_short,
            tx.kind,
            tx.value_eth,
            tx.risk_level
        );
    }
}
