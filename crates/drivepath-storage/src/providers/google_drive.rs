//! Google Drive v3 REST store.
//!
//! Auth: `Authorization: Bearer {token}`. Pagination: `pageToken` /
//! `nextPageToken`. The HTTP client is built once, on the first request,
//! with whichever token is in effect at that moment.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use tokio::sync::{OnceCell, RwLock};
use tracing::{debug, info, warn};

use drivepath_core::config::drive::DriveConfig;
use drivepath_core::error::{AppError, ErrorKind};
use drivepath_core::result::AppResult;
use drivepath_core::traits::store::RemoteStore;
use drivepath_core::types::record::FOLDER_MIME_TYPE;
use drivepath_core::types::{DirectoryRecord, DriveEntry, LeafQuery, ObjectId, Page};

const FOLDER_FIELDS: &str = "nextPageToken, files(id, name, parents)";
const ENTRY_FIELDS: &str =
    "nextPageToken, files(id, name, mimeType, fileExtension, parents, modifiedTime)";

/// Longest response body excerpt carried into an error message.
const ERROR_BODY_LIMIT: usize = 512;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileList {
    #[serde(default)]
    next_page_token: Option<String>,
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DriveFile {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    mime_type: Option<String>,
    #[serde(default)]
    file_extension: Option<String>,
    #[serde(default)]
    parents: Option<Vec<String>>,
    #[serde(default)]
    modified_time: Option<DateTime<Utc>>,
}

impl DriveFile {
    fn parent_ids(&mut self) -> Vec<ObjectId> {
        self.parents
            .take()
            .unwrap_or_default()
            .into_iter()
            .map(ObjectId::from)
            .collect()
    }

    fn into_directory(mut self) -> DirectoryRecord {
        let parent_ids = self.parent_ids();
        DirectoryRecord::new(self.id, self.name, parent_ids)
    }

    fn into_entry(mut self) -> DriveEntry {
        let parent_ids = self.parent_ids();
        DriveEntry {
            id: ObjectId::from(self.id),
            name: self.name,
            mime_type: self.mime_type,
            file_extension: self.file_extension,
            parent_ids,
            modified_time: self.modified_time,
        }
    }
}

/// Remote store speaking the Drive v3 `files` API.
#[derive(Debug)]
pub struct GoogleDriveStore {
    config: DriveConfig,
    /// Token set at runtime; falls back to the configured token.
    authorization_token: RwLock<Option<String>>,
    /// Authenticated client, created on first use and reused afterwards.
    client: OnceCell<reqwest::Client>,
}

impl GoogleDriveStore {
    /// Create a store. No network activity happens until the first call.
    pub fn new(config: DriveConfig) -> Self {
        info!(
            api_base_url = %config.api_base_url,
            page_size = config.effective_page_size(),
            "Initializing Google Drive store"
        );
        Self {
            config,
            authorization_token: RwLock::new(None),
            client: OnceCell::new(),
        }
    }

    /// Supply the bearer token for this session.
    ///
    /// Only takes effect if no request has been made yet.
    pub async fn set_authorization_token(&self, token: impl Into<String>) {
        if self.client.initialized() {
            warn!("Authorization token changed after the client was created; keeping the existing client");
        }
        *self.authorization_token.write().await = Some(token.into());
    }

    async fn client(&self) -> AppResult<&reqwest::Client> {
        self.client.get_or_try_init(|| self.build_client()).await
    }

    async fn build_client(&self) -> AppResult<reqwest::Client> {
        let token = match self.authorization_token.read().await.clone() {
            Some(token) if !token.is_empty() => token,
            _ => self
                .config
                .authorization_token
                .clone()
                .filter(|t| !t.is_empty())
                .ok_or_else(|| AppError::authentication("No authorization token configured"))?,
        };

        let mut auth = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
            AppError::authentication(format!("Invalid characters in authorization token: {e}"))
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, auth);

        debug!("Building Drive HTTP client");
        reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(self.config.request_timeout_seconds))
            .connect_timeout(Duration::from_secs(self.config.connect_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build HTTP client", e)
            })
    }

    fn files_url(&self) -> String {
        format!("{}/files", self.config.api_base_url.trim_end_matches('/'))
    }

    fn common_params(&self, fields: &'static str, page_token: Option<&str>) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("fields", fields.to_string()),
            ("pageSize", self.config.effective_page_size().to_string()),
        ];
        if self.config.include_all_drives {
            params.push(("supportsAllDrives", "true".to_string()));
            params.push(("includeItemsFromAllDrives", "true".to_string()));
        }
        if let Some(token) = page_token.filter(|t| !t.is_empty()) {
            params.push(("pageToken", token.to_string()));
        }
        params
    }

    async fn list_files(&self, params: &[(&'static str, String)]) -> AppResult<FileList> {
        let client = self.client().await?;
        let url = reqwest::Url::parse_with_params(&self.files_url(), params)
            .map_err(|e| AppError::configuration(format!("Invalid Drive API URL: {e}")))?;
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Transport, "Drive list request failed", e))?;

        let response = check_status(response, "list").await?;
        response.json::<FileList>().await.map_err(|e| {
            AppError::with_source(ErrorKind::Serialization, "Failed to parse Drive file list", e)
        })
    }
}

/// Map a non-success response to an error, keeping a short body excerpt.
async fn check_status(response: reqwest::Response, operation: &str) -> AppResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let excerpt: String = body.chars().take(ERROR_BODY_LIMIT).collect();
    let message = format!("Drive {operation} failed ({status}): {excerpt}");

    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::authentication(message),
        _ => AppError::transport(message),
    })
}

/// Escape a value for use inside a single-quoted Drive query literal.
pub fn escape_query_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Build the `q` expression for a name search.
pub fn entry_query(query: &LeafQuery) -> String {
    let mut q = format!("name = '{}'", escape_query_literal(&query.name));
    if let Some(parent) = &query.parent_id {
        q.push_str(&format!(" and '{}' in parents", escape_query_literal(parent.as_str())));
    }
    q
}

/// The `q` expression selecting every live folder.
pub fn folder_query() -> String {
    format!("mimeType = '{FOLDER_MIME_TYPE}' and trashed != true")
}

#[async_trait]
impl RemoteStore for GoogleDriveStore {
    fn provider_type(&self) -> &str {
        "google-drive"
    }

    async fn list_folders(&self, page_token: Option<&str>) -> AppResult<Page<DirectoryRecord>> {
        let mut params = self.common_params(FOLDER_FIELDS, page_token);
        params.push(("q", folder_query()));

        let list = self.list_files(&params).await?;
        debug!(returned = list.files.len(), "Fetched Drive folder page");
        Ok(Page::new(
            list.files.into_iter().map(DriveFile::into_directory).collect(),
            list.next_page_token,
        ))
    }

    async fn list_entries(
        &self,
        query: &LeafQuery,
        page_token: Option<&str>,
    ) -> AppResult<Page<DriveEntry>> {
        let mut params = self.common_params(ENTRY_FIELDS, page_token);
        params.push(("q", entry_query(query)));

        let list = self.list_files(&params).await?;
        debug!(name = %query.name, returned = list.files.len(), "Fetched Drive entry page");
        Ok(Page::new(
            list.files.into_iter().map(DriveFile::into_entry).collect(),
            list.next_page_token,
        ))
    }

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<()> {
        let client = self.client().await?;
        let mut url = reqwest::Url::parse(&self.files_url())
            .map_err(|e| AppError::configuration(format!("Invalid Drive API URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| AppError::configuration("Drive API URL cannot take a path"))?
            .push(id.as_str());
        url.query_pairs_mut()
            .append_pair("supportsAllDrives", &self.config.include_all_drives.to_string());
        let response = client
            .delete(url)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Transport, "Drive delete request failed", e)
            })?;

        check_status(response, "delete").await?;
        debug!(%id, "Deleted Drive object");
        Ok(())
    }
}
