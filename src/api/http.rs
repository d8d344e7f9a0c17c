use crate::{
    api::{ApiOperation, StudentApi},
    config::ApiConfig,
    data::student::{StudentDraft, StudentId, StudentRecord},
    error::{
        BuildClientSnafu, DecodeSnafu, InvalidApiUrlSnafu, RejectedSnafu, RequestSnafu,
        RosterResult,
    },
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use secrecy::ExposeSecret;
use snafu::{OptionExt, ResultExt};
use std::sync::Arc;

/// `StudentApi` over JSON/HTTP: `{base}/students` for the collection, `{base}/students/{id}` per record.
#[derive(Debug, Clone)]
pub struct HttpStudentApi {
    client: Client,
    config: Arc<ApiConfig>,
}

impl HttpStudentApi {
    pub fn new(config: Arc<ApiConfig>) -> RosterResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().context(BuildClientSnafu)?,
            config,
        })
    }

    fn endpoint(&self, id: Option<&StudentId>) -> RosterResult<Url> {
        let mut url = self.config.base_url().clone();
        {
            let mut segments = url.path_segments_mut().ok().context(InvalidApiUrlSnafu {
                url: self.config.base_url().to_string(),
                reason: "url cannot be a base",
            })?;
            segments.pop_if_empty().push("students");
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }

    fn authorised(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.token() {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, operation: ApiOperation) -> RosterResult<Response> {
        let response = self
            .authorised(request)
            .send()
            .await
            .context(RequestSnafu { operation })?;

        let status = response.status();
        snafu::ensure!(status.is_success(), RejectedSnafu { operation, status });
        debug!(%operation, %status, "students API call succeeded");

        Ok(response)
    }
}

#[async_trait]
impl StudentApi for HttpStudentApi {
    async fn list(&self) -> RosterResult<Vec<StudentRecord>> {
        let operation = ApiOperation::List;
        let request = self.client.get(self.endpoint(None)?);
        self.send(request, operation)
            .await?
            .json()
            .await
            .context(DecodeSnafu { operation })
    }

    async fn create(&self, draft: &StudentDraft) -> RosterResult<()> {
        let request = self.client.post(self.endpoint(None)?).json(draft);
        self.send(request, ApiOperation::Create).await?;
        Ok(())
    }

    async fn update(&self, id: &StudentId, draft: &StudentDraft) -> RosterResult<()> {
        let request = self.client.put(self.endpoint(Some(id))?).json(draft);
        self.send(request, ApiOperation::Update).await?;
        Ok(())
    }

    async fn delete(&self, id: &StudentId) -> RosterResult<()> {
        let request = self.client.delete(self.endpoint(Some(id))?);
        self.send(request, ApiOperation::Delete).await?;
        Ok(())
    }
}
