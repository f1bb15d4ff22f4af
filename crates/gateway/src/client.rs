//! Typed client for the tracking API.

use std::path::Path;
use std::time::Duration;

use reqwest::multipart;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use domain::filters::ReportFilters;
use domain::models::{
    ChangeRequest, DashboardData, LifecycleUpdate, ManHourActualEntry, ManHourBreakdownEntry,
    MutationAck, ReportRow, RequestDetail, RequestPayload, Role, Stakeholder, StakeholderPayload,
};

use crate::error::{GatewayError, GENERIC_ERROR};

/// Shape of a non-2xx rejection body.
#[derive(Deserialize)]
struct RejectionBody {
    error: String,
}

/// One gateway per configured API origin. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiGateway {
    http: reqwest::Client,
    base: Url,
}

impl ApiGateway {
    /// Builds a gateway against `base` with the configured request timeout.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(path);
        url.set_query(None);
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, GatewayError> {
        let response = self.http_get(url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Rejected {
                status,
                message: Self::rejection_message(response).await,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn send_mutation(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<MutationAck, GatewayError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Rejected {
                status,
                message: Self::rejection_message(response).await,
            });
        }
        response
            .json::<MutationAck>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }

    pub(crate) async fn http_get(&self, url: Url) -> Result<reqwest::Response, GatewayError> {
        debug!(url = %url, "GET");
        Ok(self.http.get(url).send().await?)
    }

    async fn rejection_message(response: reqwest::Response) -> String {
        match response.json::<RejectionBody>().await {
            Ok(body) => body.error,
            Err(_) => GENERIC_ERROR.to_string(),
        }
    }

    async fn upload(&self, url: Url, file: &Path) -> Result<MutationAck, GatewayError> {
        let bytes = tokio::fs::read(file).await?;
        let file_name = file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.xlsx")
            .to_string();
        debug!(url = %url, file = %file_name, bytes = bytes.len(), "multipart upload");
        let part = multipart::Part::bytes(bytes).file_name(file_name);
        let form = multipart::Form::new().part("file", part);
        self.send_mutation(self.http.post(url).multipart(form)).await
    }

    // --- Change requests ---

    pub async fn list_requests(&self) -> Result<Vec<ChangeRequest>, GatewayError> {
        self.get_json(self.endpoint("/api/requests")).await
    }

    pub async fn create_request(&self, payload: &RequestPayload) -> Result<MutationAck, GatewayError> {
        self.send_mutation(self.http.post(self.endpoint("/api/requests")).json(payload))
            .await
    }

    pub async fn update_request(
        &self,
        id: i64,
        payload: &RequestPayload,
    ) -> Result<MutationAck, GatewayError> {
        let url = self.endpoint(&format!("/api/requests/{id}"));
        self.send_mutation(self.http.put(url).json(payload)).await
    }

    pub async fn delete_request(&self, id: i64) -> Result<MutationAck, GatewayError> {
        let url = self.endpoint(&format!("/api/requests/{id}"));
        self.send_mutation(self.http.delete(url)).await
    }

    pub async fn upload_requests(&self, file: &Path) -> Result<MutationAck, GatewayError> {
        self.upload(self.endpoint("/api/requests/upload"), file).await
    }

    pub fn requests_download_url(&self) -> Url {
        self.endpoint("/api/requests/download")
    }

    pub fn requests_template_url(&self) -> Url {
        self.endpoint("/api/requests/template")
    }

    // --- Stakeholders ---

    pub async fn list_stakeholders(&self) -> Result<Vec<Stakeholder>, GatewayError> {
        self.get_json(self.endpoint("/api/stakeholders")).await
    }

    pub async fn create_stakeholder(
        &self,
        payload: &StakeholderPayload,
    ) -> Result<MutationAck, GatewayError> {
        self.send_mutation(self.http.post(self.endpoint("/api/stakeholders")).json(payload))
            .await
    }

    pub async fn update_stakeholder(
        &self,
        id: i64,
        payload: &StakeholderPayload,
    ) -> Result<MutationAck, GatewayError> {
        let url = self.endpoint(&format!("/api/stakeholders/{id}"));
        self.send_mutation(self.http.put(url).json(payload)).await
    }

    pub async fn delete_stakeholder(&self, id: i64) -> Result<MutationAck, GatewayError> {
        let url = self.endpoint(&format!("/api/stakeholders/{id}"));
        self.send_mutation(self.http.delete(url)).await
    }

    // --- Report ---

    pub async fn fetch_report(&self, filters: &ReportFilters) -> Result<Vec<ReportRow>, GatewayError> {
        let mut url = self.endpoint("/api/report");
        filters.query_pairs().apply_to(&mut url);
        self.get_json(url).await
    }

    /// Export URL for the filtered report. Built from the same query pairs
    /// as [`fetch_report`](Self::fetch_report), so the exported file always
    /// matches the on-screen rows.
    pub fn report_download_url(&self, filters: &ReportFilters) -> Url {
        let mut url = self.endpoint("/api/report/download");
        filters.query_pairs().apply_to(&mut url);
        url
    }

    pub async fn manhours_breakup(
        &self,
        request_id: i64,
        role: Role,
    ) -> Result<Vec<ManHourBreakdownEntry>, GatewayError> {
        let mut url = self.endpoint(&format!("/api/report/manhours-breakup/{request_id}"));
        url.query_pairs_mut().append_pair("role", role.as_str());
        self.get_json(url).await
    }

    // --- Actual man-hours ---

    pub async fn list_actual_manhours(&self) -> Result<Vec<ManHourActualEntry>, GatewayError> {
        self.get_json(self.endpoint("/api/actual-manhours")).await
    }

    pub async fn upload_actual_manhours(&self, file: &Path) -> Result<MutationAck, GatewayError> {
        self.upload(self.endpoint("/api/actual-manhours/upload"), file)
            .await
    }

    pub fn actual_manhours_download_url(&self) -> Url {
        self.endpoint("/api/actual-manhours/download")
    }

    pub fn actual_manhours_template_url(&self) -> Url {
        self.endpoint("/api/actual-manhours/template")
    }

    // --- Request lifecycle updates ---

    pub async fn request_details(&self, id: i64) -> Result<RequestDetail, GatewayError> {
        self.get_json(self.endpoint(&format!("/api/request-details/{id}")))
            .await
    }

    pub async fn update_request_details(
        &self,
        id: i64,
        update: &LifecycleUpdate,
    ) -> Result<MutationAck, GatewayError> {
        let url = self.endpoint(&format!("/api/update-request/{id}"));
        self.send_mutation(self.http.put(url).json(update)).await
    }

    pub async fn bulk_upload_request_updates(&self, file: &Path) -> Result<MutationAck, GatewayError> {
        self.upload(self.endpoint("/api/update-request/bulk-upload"), file)
            .await
    }

    pub fn update_request_download_url(&self) -> Url {
        self.endpoint("/api/update-request/download")
    }

    pub fn update_request_template_url(&self) -> Url {
        self.endpoint("/api/update-request/template")
    }

    // --- Dashboard ---

    pub async fn dashboard_data(&self) -> Result<DashboardData, GatewayError> {
        self.get_json(self.endpoint("/api/dashboard/data")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn gateway() -> ApiGateway {
        ApiGateway::new(
            Url::parse("http://tracker.local:5000").unwrap(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_endpoint_construction() {
        let gw = gateway();
        assert_eq!(
            gw.endpoint("/api/requests").as_str(),
            "http://tracker.local:5000/api/requests"
        );
        assert_eq!(
            gw.endpoint("/api/requests/18").as_str(),
            "http://tracker.local:5000/api/requests/18"
        );
    }

    #[test]
    fn test_report_fetch_and_download_share_query_semantics() {
        let gw = gateway();
        let filters = ReportFilters {
            department: "Cards".to_string(),
            statuses: vec!["Open".to_string(), "In UAT".to_string()],
            ..Default::default()
        };

        let download = gw.report_download_url(&filters);
        assert_eq!(
            download.as_str(),
            "http://tracker.local:5000/api/report/download?department=Cards&current_status=Open&current_status=In+UAT"
        );

        let mut fetch = gw.endpoint("/api/report");
        filters.query_pairs().apply_to(&mut fetch);
        assert_eq!(fetch.query(), download.query());
    }

    #[test]
    fn test_unfiltered_download_url_has_no_query() {
        let gw = gateway();
        let url = gw.report_download_url(&ReportFilters::default());
        assert_eq!(url.as_str(), "http://tracker.local:5000/api/report/download");
    }

    #[test]
    fn test_date_filter_in_download_url() {
        let gw = gateway();
        let filters = ReportFilters {
            request_date: NaiveDate::from_ymd_opt(2024, 6, 3),
            ..Default::default()
        };
        assert_eq!(
            gw.report_download_url(&filters).as_str(),
            "http://tracker.local:5000/api/report/download?request_date=2024-06-03"
        );
    }

    #[test]
    fn test_template_urls() {
        let gw = gateway();
        assert_eq!(
            gw.requests_template_url().as_str(),
            "http://tracker.local:5000/api/requests/template"
        );
        assert_eq!(
            gw.update_request_download_url().as_str(),
            "http://tracker.local:5000/api/update-request/download"
        );
    }
}
