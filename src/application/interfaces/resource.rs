use crate::error::AppError;
use crate::model::http::FormData;
use async_trait::async_trait;
use reqwest::Response;
use serde_json::Value;

/// Conventional REST access to a collection
///
/// Paths are `/<collection>/` for list and create, `/<collection>/<id>/` for
/// read, update and delete. Responses are returned unread.
#[async_trait]
pub trait ResourceService: Send + Sync {
    /// Lists a collection, or reads one record when `id` is given
    async fn get_resource(
        &self,
        collection: &str,
        id: Option<&str>,
        params: &[(&str, &str)],
    ) -> Result<Response, AppError>;

    /// Creates a record from a JSON body
    async fn create_resource(&self, collection: &str, body: &Value) -> Result<Response, AppError>;

    /// Creates a record from a multipart form, e.g. a product with its image
    async fn create_resource_form(
        &self,
        collection: &str,
        form: FormData,
    ) -> Result<Response, AppError>;

    /// Replaces a record
    async fn update_resource(
        &self,
        collection: &str,
        id: &str,
        body: &Value,
    ) -> Result<Response, AppError>;

    /// Partially updates a record
    async fn patch_resource(
        &self,
        collection: &str,
        id: &str,
        body: &Value,
    ) -> Result<Response, AppError>;

    /// Deletes a record
    async fn delete_resource(&self, collection: &str, id: &str) -> Result<Response, AppError>;
}
