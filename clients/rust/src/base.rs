use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug)]
pub enum APIErrorVariant {
    /// The request never reached the server
    Network,
    MalformedResponse,
    BadClientData,
    NotFound,
    ServiceUnavailable,
    UnexpectedStatusCode,
}

#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub message: String,
}

pub type APIResponse<T> = Result<T, APIError>;

pub(crate) struct BaseClient {
    address: String,
    client: Client,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            address: format!("{}/api/v1", address),
            client: Client::new(),
        }
    }

    fn network_error(e: reqwest::Error) -> APIError {
        APIError {
            variant: APIErrorVariant::Network,
            message: e.to_string(),
        }
    }

    async fn handle_response<T: DeserializeOwned>(
        res: reqwest::Response,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let status = res.status();
        if status != expected_status_code {
            let variant = match status {
                StatusCode::BAD_REQUEST => APIErrorVariant::BadClientData,
                StatusCode::NOT_FOUND => APIErrorVariant::NotFound,
                StatusCode::SERVICE_UNAVAILABLE => APIErrorVariant::ServiceUnavailable,
                _ => APIErrorVariant::UnexpectedStatusCode,
            };
            let message = res.text().await.unwrap_or_default();
            return Err(APIError { variant, message });
        }

        res.json::<T>().await.map_err(|e| APIError {
            variant: APIErrorVariant::MalformedResponse,
            message: e.to_string(),
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .client
            .get(format!("{}/{}", self.address, path))
            .send()
            .await
            .map_err(Self::network_error)?;
        Self::handle_response(res, expected_status_code).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .client
            .delete(format!("{}/{}", self.address, path))
            .send()
            .await
            .map_err(Self::network_error)?;
        Self::handle_response(res, expected_status_code).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        body: B,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .client
            .post(format!("{}/{}", self.address, path))
            .json(&body)
            .send()
            .await
            .map_err(Self::network_error)?;
        Self::handle_response(res, expected_status_code).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        body: B,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .client
            .put(format!("{}/{}", self.address, path))
            .json(&body)
            .send()
            .await
            .map_err(Self::network_error)?;
        Self::handle_response(res, expected_status_code).await
    }
}
