use reqwest::multipart::Form;

/// Thin relay in front of the image host's upload endpoint. The host's
/// response body and status pass through untouched.
#[derive(Clone)]
pub struct ImgbbClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ImgbbClient {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        ImgbbClient {
            http: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Forwards the form, injecting the configured API key when the caller
    /// did not supply a `key` field of their own.
    pub async fn forward(
        &self,
        mut form: Form,
        caller_supplied_key: bool,
    ) -> Result<(u16, Vec<u8>), reqwest::Error> {
        if !caller_supplied_key {
            if let Some(key) = &self.api_key {
                form = form.text("key", key.clone());
            }
        }

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok((status, body))
    }
}
