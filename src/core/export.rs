use crate::core::{ExportRequest, ExportSource, Storage};
use crate::utils::error::Result;

/// 下載匯出文件並存到 storage
pub struct ExportService<E: ExportSource, S: Storage> {
    source: E,
    storage: S,
}

impl<E: ExportSource, S: Storage> ExportService<E, S> {
    pub fn new(source: E, storage: S) -> Self {
        Self { source, storage }
    }

    pub async fn run(&self, request: &ExportRequest) -> Result<String> {
        tracing::info!(
            "📥 Getting export for jaar {} and klas {} ({})",
            request.jaar,
            request.klas.id(),
            request.klas
        );

        let document = self.source.fetch(request).await?;
        tracing::debug!(
            "Received {} bytes ({})",
            document.bytes.len(),
            document.content_type.as_deref().unwrap_or("unknown content type")
        );

        let output_path = self
            .storage
            .write_file(&document.filename, &document.bytes)
            .await?;

        tracing::info!("📁 Export saved to: {}", output_path);
        Ok(output_path)
    }
}
