use crate::domain::model::{ExportDocument, ExportRequest, FractionTable};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 唯讀的分數表來源，可在多個呼叫間共用
pub trait FractionSource: Send + Sync {
    fn entry(&self, index: usize) -> Option<&str>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FractionSource for FractionTable {
    fn entry(&self, index: usize) -> Option<&str> {
        self.entries().get(index).map(String::as_str)
    }

    fn len(&self) -> usize {
        self.entries().len()
    }
}

impl FractionSource for Vec<String> {
    fn entry(&self, index: usize) -> Option<&str> {
        self.get(index).map(String::as_str)
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

#[async_trait]
pub trait ExportSource: Send + Sync {
    async fn fetch(&self, request: &ExportRequest) -> Result<ExportDocument>;
}
