use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::types::BackendConfig;
use crate::domain::quote::{QuoteRequest, QuoteResult};
use crate::domain::rates::WeeklyRateBucket;
use crate::domain::reservation::ReservedInterval;
use crate::domain::unit::RentalUnit;
use crate::error::{QuoteError, Result};
use crate::ports::backend::BookingBackend;

use super::rows::{DateBlockRow, InsertedRow, RateBucketRow, ReservationRow, UnitRow};

/// Backend client speaking the managed store's auto-generated REST protocol
/// (PostgREST-style filter operators, `apikey` + bearer auth headers).
pub struct RestBackend {
    http: Client,
    base_url: String,
    api_key: String,
}

impl RestBackend {
    pub fn new(config: &BackendConfig) -> std::result::Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn table_url(&self, table: &str, filters: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/rest/v1/{table}", self.base_url))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", "*");
            for (key, value) in filters {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn get_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let url = self.table_url(table, filters)?;
        debug!(%url, "backend GET");

        let response = self
            .http
            .get(url.as_str())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(QuoteError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::BackendQuery {
                reason: format!("{table} query returned HTTP {status}"),
            });
        }

        let body = response.text().await.map_err(QuoteError::Http)?;
        serde_json::from_str(&body).map_err(|e| QuoteError::BackendQuery {
            reason: format!("{table} response parse error: {e}"),
        })
    }
}

#[async_trait]
impl BookingBackend for RestBackend {
    async fn fetch_unit(&self, unit_id: &str) -> Result<RentalUnit> {
        let rows: Vec<UnitRow> = self
            .get_rows(
                "units",
                &[("id", format!("eq.{unit_id}")), ("limit", "1".into())],
            )
            .await?;
        rows.into_iter()
            .next()
            .map(Into::into)
            .ok_or_else(|| QuoteError::UnitNotFound {
                id: unit_id.to_string(),
            })
    }

    async fn fetch_rate_buckets(
        &self,
        unit_id: &str,
        years: &[i32],
    ) -> Result<Vec<WeeklyRateBucket>> {
        let (Some(&first), Some(&last)) = (years.iter().min(), years.iter().max()) else {
            return Ok(vec![]);
        };
        // Span the full calendar years; the resolver walks nights itself.
        let lo = NaiveDate::from_ymd_opt(first, 1, 1).ok_or_else(|| {
            QuoteError::InvalidParams {
                reason: format!("year {first} out of range"),
            }
        })?;
        let hi = NaiveDate::from_ymd_opt(last, 12, 31).ok_or_else(|| {
            QuoteError::InvalidParams {
                reason: format!("year {last} out of range"),
            }
        })?;

        let rows: Vec<RateBucketRow> = self
            .get_rows(
                "rate_buckets",
                &[
                    ("unit_id", format!("eq.{unit_id}")),
                    ("start_date", format!("lte.{hi}")),
                    ("end_date", format!("gte.{lo}")),
                    ("order", "start_date.asc".into()),
                ],
            )
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn fetch_conflicting_intervals(
        &self,
        unit_id: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Vec<ReservedInterval>> {
        // Bookings carry an array of unit ids; `cs` is the array-contains
        // filter. Blocks are unit-specific or global (null unit id).
        let reservations: Vec<ReservationRow> = self
            .get_rows(
                "reservations",
                &[
                    ("unit_ids", format!("cs.{{{unit_id}}}")),
                    ("arrival", format!("lt.{check_out}")),
                    ("departure", format!("gt.{check_in}")),
                ],
            )
            .await?;
        let blocks: Vec<DateBlockRow> = self
            .get_rows(
                "date_blocks",
                &[
                    ("or", format!("(unit_id.eq.{unit_id},unit_id.is.null)")),
                    ("start_date", format!("lt.{check_out}")),
                    ("end_date", format!("gt.{check_in}")),
                ],
            )
            .await?;

        let mut intervals: Vec<ReservedInterval> =
            reservations.into_iter().map(Into::into).collect();
        intervals.extend(blocks.into_iter().map(Into::into));
        Ok(intervals)
    }

    async fn save_quote_request(
        &self,
        request: &QuoteRequest,
        result: &QuoteResult,
    ) -> Result<String> {
        let url = Url::parse(&format!("{}/rest/v1/quote_requests", self.base_url))?;
        let body = serde_json::json!({
            "unit_ids": request.unit_ids,
            "check_in": request.check_in,
            "check_out": request.check_out,
            "adults": request.adults,
            "children": request.children,
            "children_no_bed": request.children_no_bed,
            "pet": request.pet,
            "linen_service": request.linen_service,
            "final_total": result.final_total,
            "deposit": result.deposit,
            "result": result,
        });
        debug!(%url, "backend POST quote request");

        let response = self
            .http
            .post(url.as_str())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await
            .map_err(QuoteError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::BackendQuery {
                reason: format!("quote_requests insert returned HTTP {status}"),
            });
        }

        let rows: Vec<InsertedRow> = response.json().await.map_err(QuoteError::Http)?;
        rows.into_iter()
            .next()
            .map(|row| row.id.to_string())
            .ok_or_else(|| QuoteError::BackendQuery {
                reason: "quote_requests insert returned no row".into(),
            })
    }
}
