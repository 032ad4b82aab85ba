//! File upload endpoints

use std::path::Path;

use reqwest::multipart;
use tracing::{debug, info};

use crate::OpenAiClient;
use crate::error::Result;
use scribe_core::domain::file::FileHandle;
use scribe_core::dto::assistant::AttachFile;

impl OpenAiClient {
    /// Upload a local file to the vendor
    ///
    /// # Arguments
    /// * `path` - Path to the file on disk
    /// * `purpose` - Vendor-defined purpose tag ("assistants" for retrieval)
    ///
    /// # Returns
    /// A handle to the uploaded file
    pub async fn upload_file(&self, path: &Path, purpose: &str) -> Result<FileHandle> {
        let file_name = path
            .file_name()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("path has no file name: {}", path.display()),
                )
            })?
            .to_string_lossy()
            .to_string();

        debug!("Reading {} for upload", path.display());
        let contents = tokio::fs::read(path).await?;

        let form = multipart::Form::new().text("purpose", purpose.to_string()).part(
            "file",
            multipart::Part::bytes(contents).file_name(file_name.clone()),
        );

        let response = self.post("/files").multipart(form).send().await?;
        let file: FileHandle = self.handle_response(response).await?;

        info!("Uploaded {} as {} ({} bytes)", file_name, file.id, file.bytes);
        Ok(file)
    }

    /// Attach an uploaded file to an assistant
    ///
    /// The assistant's retrieval tool can only see files attached this way.
    ///
    /// # Arguments
    /// * `assistant_id` - The assistant to attach to
    /// * `file_id` - Id returned by [`upload_file`](Self::upload_file)
    pub async fn attach_file_to_assistant(&self, assistant_id: &str, file_id: &str) -> Result<()> {
        debug!("Attaching file {} to assistant {}", file_id, assistant_id);

        let response = Self::beta(self.post(&format!("/assistants/{}/files", assistant_id)))
            .json(&AttachFile {
                file_id: file_id.to_string(),
            })
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
