//! HTTP client for the Airtable REST API.

use serde_json::json;

use crate::records::{CalendarRow, NamedRecord, Record, RecordPage};
use crate::AirtableError;

/// The calendar table maintained in the external base.
const CALENDAR_TABLE: &str = "Calendar";

/// The lookup table behind the calendar's linked Truck field.
const TRUCKS_TABLE: &str = "Trucks";

/// Checkbox field set once a row has been imported locally.
const SYNCED_FIELD: &str = "Synced";

/// Airtable caps batched updates at 10 records per call.
const UPDATE_BATCH_SIZE: usize = 10;

/// Configuration for the Airtable client.
#[derive(Debug, Clone)]
pub struct AirtableConfig {
    /// API base URL (default: `https://api.airtable.com/v0`).
    pub base_url: String,
    /// Personal access token.
    pub api_key: String,
    /// The base holding the Calendar and Trucks tables.
    pub base_id: String,
}

impl AirtableConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var             | Required | Default                        |
    /// |---------------------|----------|--------------------------------|
    /// | `AIRTABLE_API_KEY`  | **yes**  | --                             |
    /// | `AIRTABLE_BASE_ID`  | **yes**  | --                             |
    /// | `AIRTABLE_BASE_URL` | no       | `https://api.airtable.com/v0`  |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing, which is the desired
    /// fail-fast behaviour at startup.
    pub fn from_env() -> Self {
        let api_key =
            std::env::var("AIRTABLE_API_KEY").expect("AIRTABLE_API_KEY must be set");
        let base_id =
            std::env::var("AIRTABLE_BASE_ID").expect("AIRTABLE_BASE_ID must be set");
        let base_url = std::env::var("AIRTABLE_BASE_URL")
            .unwrap_or_else(|_| "https://api.airtable.com/v0".to_string());

        Self {
            base_url,
            api_key,
            base_id,
        }
    }
}

/// Client for the external calendar base.
#[derive(Debug, Clone)]
pub struct AirtableClient {
    config: AirtableConfig,
    client: reqwest::Client,
}

impl AirtableClient {
    pub fn new(config: AirtableConfig) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        Self { config, client }
    }

    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.base_id,
            table
        )
    }

    /// Fetch every record in a table, following pagination offsets,
    /// optionally restricted by a filter formula.
    async fn list_records(
        &self,
        table: &str,
        filter_formula: Option<&str>,
    ) -> Result<Vec<Record>, AirtableError> {
        let url = self.table_url(table);
        let mut all = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let mut request = self.client.get(&url).bearer_auth(&self.config.api_key);
            if let Some(ref off) = offset {
                request = request.query(&[("offset", off.as_str())]);
            }
            if let Some(formula) = filter_formula {
                request = request.query(&[("filterByFormula", formula)]);
            }

            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(AirtableError::Api {
                    status: status.as_u16(),
                    body,
                });
            }

            let page: RecordPage = response.json().await?;
            all.extend(page.records);

            match page.offset {
                Some(next) => offset = Some(next),
                None => break,
            }
        }

        Ok(all)
    }

    /// Fetch calendar rows, optionally only those not yet synced, with
    /// linked truck ids resolved to display names via the Trucks table.
    pub async fn fetch_calendar(
        &self,
        unsynced_only: bool,
    ) -> Result<Vec<CalendarRow>, AirtableError> {
        let filter = unsynced_only.then_some("NOT({Synced})");
        let records = self.list_records(CALENDAR_TABLE, filter).await?;
        let trucks = self.fetch_trucks().await?;

        let mut rows: Vec<CalendarRow> = records.iter().map(CalendarRow::from_record).collect();
        for row in &mut rows {
            row.resolve_truck_link(&trucks);
        }

        tracing::debug!(count = rows.len(), unsynced_only, "Fetched calendar rows");
        Ok(rows)
    }

    /// Fetch the Trucks lookup table as id + name pairs.
    pub async fn fetch_trucks(&self) -> Result<Vec<NamedRecord>, AirtableError> {
        let records = self.list_records(TRUCKS_TABLE, None).await?;
        Ok(records
            .iter()
            .map(|r| NamedRecord {
                id: r.id.clone(),
                name: r
                    .fields
                    .get("Name")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect())
    }

    /// Mark calendar rows as synced, in batches of at most 10 records
    /// per call (the API's batch-update cap).
    pub async fn mark_synced(&self, record_ids: &[String]) -> Result<(), AirtableError> {
        let url = self.table_url(CALENDAR_TABLE);

        for batch in record_ids.chunks(UPDATE_BATCH_SIZE) {
            let body = json!({
                "records": batch
                    .iter()
                    .map(|id| json!({ "id": id, "fields": { SYNCED_FIELD: true } }))
                    .collect::<Vec<_>>(),
            });

            let response = self
                .client
                .patch(&url)
                .bearer_auth(&self.config.api_key)
                .json(&body)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let text = response.text().await.unwrap_or_default();
                return Err(AirtableError::Api {
                    status: status.as_u16(),
                    body: text,
                });
            }
        }

        tracing::info!(count = record_ids.len(), "Marked calendar rows as synced");
        Ok(())
    }
}
