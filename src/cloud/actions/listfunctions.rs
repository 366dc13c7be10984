use crate::cloud::{FunctionService, Result};

#[derive(Debug, Default)]
pub struct ListFunctions {}

impl ListFunctions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Will return `Err` if can not make the request
    pub async fn request<F: FunctionService + ?Sized>(&self, service: &F) -> Result<Vec<String>> {
        let functions = service.list_functions().await?;
        log::info!("found {} functions", functions.len());
        Ok(functions)
    }
}
