use std::str::FromStr;
use std::time::Duration;

use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::core::RawTransaction;

/// Etherscan-style account API client.
///
/// The API key is injected through configuration; the client never carries
/// a built-in default.
pub struct EtherscanClient {
    url: String,
    api_key: Option<String>,
    timeout: Duration,
    client: Client,
}

impl EtherscanClient {
    pub fn new(url: &str, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            url: url.to_string(),
            api_key,
            timeout,
            client: Client::new(),
        }
    }

    /// Fetch the transaction list for `address`, newest first.
    pub async fn fetch_transactions(
        &self,
        address: &str,
    ) -> Result<Vec<RawTransaction>, ProviderError> {
        let mut request = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .query(&[
                ("module", "account"),
                ("action", "txlist"),
                ("address", address),
                ("startblock", "0"),
                ("endblock", "99999999"),
                ("sort", "desc"),
            ]);
        if let Some(ref key) = self.api_key {
            request = request.query(&[("apikey", key.as_str())]);
        }

        let resp = request.send().await.map_err(ProviderError::Http)?;
        let body: TxListResponse = resp.json().await.map_err(ProviderError::Http)?;
        interpret_response(body)
    }
}

/// The API envelope. `result` is a transaction array on success but a plain
/// string on auth and rate-limit errors, so it stays untyped here.
#[derive(Debug, Deserialize)]
struct TxListResponse {
    status: String,
    message: String,
    result: Value,
}

fn interpret_response(resp: TxListResponse) -> Result<Vec<RawTransaction>, ProviderError> {
    if resp.status != "1" {
        if resp.message.contains("No transactions found") {
            return Err(ProviderError::NoTransactions);
        }
        let detail = match resp.result {
            Value::String(s) if !s.is_empty() => s,
            _ => resp.message,
        };
        return Err(ProviderError::Api(detail));
    }

    let rows: Vec<TxRow> = serde_json::from_value(resp.result)
        .map_err(|e| ProviderError::Api(format!("unexpected result payload: {e}")))?;
    Ok(rows.into_iter().map(TxRow::into_raw).collect())
}

/// One row of the `account.txlist` result. Every numeric field arrives as a
/// decimal string.
#[derive(Debug, Deserialize)]
struct TxRow {
    #[serde(default)]
    hash: String,
    #[serde(default)]
    from: String,
    #[serde(default)]
    to: String,
    #[serde(default)]
    value: String,
    #[serde(rename = "timeStamp", default)]
    time_stamp: String,
    #[serde(rename = "gasPrice", default)]
    gas_price: String,
    #[serde(rename = "gasUsed", default)]
    gas_used: String,
    #[serde(default)]
    input: String,
}

impl TxRow {
    fn into_raw(self) -> RawTransaction {
        RawTransaction {
            hash: self.hash,
            from: self.from,
            to: self.to,
            value: parse_or_zero(&self.value),
            timestamp: DateTime::from_timestamp(parse_or_zero(&self.time_stamp), 0)
                .unwrap_or(DateTime::UNIX_EPOCH),
            gas_price: parse_or_zero(&self.gas_price),
            gas_used: parse_or_zero(&self.gas_used),
            input: self.input,
        }
    }
}

/// Malformed numerics degrade to 0 so one bad row never aborts the batch.
fn parse_or_zero<T: FromStr + Default>(s: &str) -> T {
    s.trim().parse().unwrap_or_default()
}

#[derive(Debug)]
pub enum ProviderError {
    /// Transport or decode failure talking to the API.
    Http(reqwest::Error),
    /// The API answered with an error status (invalid key, rate limit).
    Api(String),
    /// The address has no transaction history.
    NoTransactions,
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::Http(e) => write!(f, "HTTP error: {e}"),
            ProviderError::Api(msg) => write!(f, "API error: {msg}"),
            ProviderError::NoTransactions => write!(f, "no transactions found"),
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Http(e) => Some(e),
            _ => None,
        }
    }
}
