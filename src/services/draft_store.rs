use reqwest::header::HeaderMap;
use reqwest::Client;

use crate::config::{Credentials, DraftStoreSettings};
use crate::deadline::with_deadline;
use crate::error::AppError;
use crate::models::{RequestContext, StoredDraftDocument};

const DOCUMENT_HASH_HEADER: &str = "Document-Hash";
const PREVIOUS_HASH_HEADER: &str = "Previous-Document-Hash";
const SCHEMA_VERSION_HEADER: &str = "X-Schema-Version";

/// Reads and writes persisted drafts, enforcing optimistic concurrency via
/// content-hash tokens. Never retries on a hash mismatch — the caller is
/// responsible for re-reading and resubmitting.
pub struct DraftStoreClient {
    client: Client,
    root_url: String,
    credentials: Option<Credentials>,
}

impl DraftStoreClient {
    pub fn new(client: Client, settings: &DraftStoreSettings) -> Self {
        Self {
            client,
            root_url: settings.root_url.trim_end_matches('/').to_string(),
            credentials: settings.credentials.clone(),
        }
    }

    fn url(&self, content_id: &str) -> String {
        format!("{}/draft-annotations/{content_id}", self.root_url)
    }

    /// `200` returns the document and its hash; `404` returns `(None, None)`;
    /// anything else surfaces `UnexpectedReadStatus`.
    pub async fn read(
        &self,
        content_id: &str,
        ctx: &RequestContext,
    ) -> Result<(Option<StoredDraftDocument>, Option<String>), AppError> {
        let mut builder = self.client.get(self.url(content_id));
        if let Some(creds) = &self.credentials {
            builder = builder.basic_auth(&creds.username, Some(&creds.password));
        }

        let response =
            with_deadline(ctx.remaining(), async { Ok(builder.send().await?) }).await?;
        let status = response.status();

        match status.as_u16() {
            200 => {
                let hash = header_string(response.headers(), DOCUMENT_HASH_HEADER);
                let document: StoredDraftDocument = response.json().await?;
                Ok((Some(document), hash))
            }
            404 => Ok((None, None)),
            other => Err(AppError::UnexpectedReadStatus(other)),
        }
    }

    /// POSTs `document` with the previous hash and schema version as
    /// headers. `200`/`201` return the new hash; any other status surfaces
    /// `UnexpectedWriteStatus`, carrying the store's status verbatim — this
    /// is how an optimistic-concurrency conflict reaches the caller.
    pub async fn write(
        &self,
        content_id: &str,
        document: &StoredDraftDocument,
        previous_hash: &str,
        ctx: &RequestContext,
    ) -> Result<String, AppError> {
        let mut builder = self
            .client
            .post(self.url(content_id))
            .header(PREVIOUS_HASH_HEADER, previous_hash)
            .header(SCHEMA_VERSION_HEADER, &ctx.schema_version)
            .json(document);

        if let Some(creds) = &self.credentials {
            builder = builder.basic_auth(&creds.username, Some(&creds.password));
        }

        let response =
            with_deadline(ctx.remaining(), async { Ok(builder.send().await?) }).await?;
        let status = response.status();

        match status.as_u16() {
            200 | 201 => header_string(response.headers(), DOCUMENT_HASH_HEADER).ok_or_else(|| {
                AppError::UnexpectedWriteStatus {
                    status: status.as_u16(),
                    body: Some("draft store did not return a Document-Hash header".to_string()),
                }
            }),
            other => Err(AppError::UnexpectedWriteStatus {
                status: other,
                body: response.text().await.ok(),
            }),
        }
    }
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned)
}
