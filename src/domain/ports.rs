use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Destination for a rendered document (file, stdout, clipboard).
#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// Delivers the document and returns a short description of where it went.
    async fn deliver(&self, document: &str) -> Result<String>;
}
