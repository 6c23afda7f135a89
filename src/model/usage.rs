//! Usage and quota reporting types.

use serde::{Deserialize, Serialize};

/// Screenshot count quota for the current billing period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuotaDetailResponse {
    pub limit: Option<u64>,
    pub used: Option<u64>,
    pub remaining: Option<u64>,
    pub percent_used: Option<u32>,
}

/// Bandwidth quota for the current billing period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BandwidthQuotaResponse {
    pub limit_bytes: Option<u64>,
    pub limit_formatted: Option<String>,
    pub used_bytes: Option<u64>,
    pub used_formatted: Option<String>,
    pub remaining_bytes: Option<u64>,
    pub remaining_formatted: Option<String>,
    pub percent_used: Option<u32>,
}

/// Combined quota snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuotaResponse {
    pub screenshots: Option<QuotaDetailResponse>,
    pub bandwidth: Option<BandwidthQuotaResponse>,
}

/// Quota status for the account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuotaStatusResponse {
    pub tier: Option<String>,
    pub screenshots: Option<QuotaDetailResponse>,
    pub bandwidth: Option<BandwidthQuotaResponse>,
    pub period_ends: Option<String>,
}

/// Usage within one billing period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PeriodUsageResponse {
    pub period_start: Option<String>,
    pub period_end: Option<String>,
    pub screenshots_count: Option<u64>,
    pub bandwidth_bytes: Option<u64>,
    pub bandwidth_formatted: Option<String>,
}

/// All-time usage totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TotalsResponse {
    pub screenshots_count: Option<u64>,
    pub bandwidth_bytes: Option<u64>,
    pub bandwidth_formatted: Option<String>,
}

/// Account usage statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsageResponse {
    pub tier: Option<String>,
    pub current_period: Option<PeriodUsageResponse>,
    pub quota: Option<QuotaResponse>,
    pub history: Option<Vec<PeriodUsageResponse>>,
    pub totals: Option<TotalsResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_status_deserializes() {
        let json = r#"{
            "tier": "PRO",
            "screenshots": {
                "limit": 10000,
                "used": 500,
                "remaining": 9500,
                "percentUsed": 5
            },
            "bandwidth": {
                "limitBytes": 107374182400,
                "usedBytes": 1073741824,
                "percentUsed": 1
            },
            "periodEnds": "2024-02-01"
        }"#;

        let response: QuotaStatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.tier.as_deref(), Some("PRO"));

        let screenshots = response.screenshots.unwrap();
        assert_eq!(screenshots.limit, Some(10000));
        assert_eq!(screenshots.used, Some(500));
        assert_eq!(screenshots.remaining, Some(9500));

        let bandwidth = response.bandwidth.unwrap();
        assert_eq!(bandwidth.limit_bytes, Some(107374182400));
    }

    #[test]
    fn usage_response_tolerates_missing_sections() {
        let response: UsageResponse = serde_json::from_str(r#"{"tier": "FREE"}"#).unwrap();
        assert_eq!(response.tier.as_deref(), Some("FREE"));
        assert!(response.current_period.is_none());
        assert!(response.history.is_none());
    }
}
