/******************************************************************************
   Author: Dashboard Platform Team
   Date: 18/10/26
******************************************************************************/

//! Named endpoints of the dashboard API
//!
//! Each dashboard screen refers to backend calls by name (`get_orders`,
//! `create_supplier`, ...). Rather than one method per call, the names live in
//! [`ENDPOINTS`] and are dispatched by
//! [`HttpClient::call_endpoint`](crate::application::client::HttpClient::call_endpoint).
//! Path templates use `{id}` for the record identifier.

use crate::error::AppError;
use crate::model::http::RequestBody;
use once_cell::sync::Lazy;
use reqwest::Method;
use std::collections::HashMap;

const ID_PLACEHOLDER: &str = "{id}";

/// HTTP verb of a table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl From<EndpointMethod> for Method {
    fn from(method: EndpointMethod) -> Self {
        match method {
            EndpointMethod::Get => Method::GET,
            EndpointMethod::Post => Method::POST,
            EndpointMethod::Put => Method::PUT,
            EndpointMethod::Patch => Method::PATCH,
            EndpointMethod::Delete => Method::DELETE,
        }
    }
}

/// One named backend call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Name used by callers, `<verb>_<resource>`
    pub name: &'static str,
    /// HTTP verb
    pub method: EndpointMethod,
    /// Path template relative to the base URL
    pub path: &'static str,
}

impl Endpoint {
    /// True when the template needs a record id
    #[must_use]
    pub fn requires_id(&self) -> bool {
        self.path.contains(ID_PLACEHOLDER)
    }

    /// Fills the template
    ///
    /// Fails when the template needs an id that was not given, or when an id
    /// is given to a template that has no place for it.
    pub fn resolve(&self, id: Option<&str>) -> Result<String, AppError> {
        match (self.requires_id(), id) {
            (true, Some(id)) if !id.is_empty() && !id.contains('/') => {
                Ok(self.path.replace(ID_PLACEHOLDER, id))
            }
            (true, Some(id)) => Err(AppError::InvalidInput(format!(
                "invalid id {id:?} for endpoint {}",
                self.name
            ))),
            (true, None) => Err(AppError::InvalidInput(format!(
                "endpoint {} requires an id",
                self.name
            ))),
            (false, Some(_)) => Err(AppError::InvalidInput(format!(
                "endpoint {} does not take an id",
                self.name
            ))),
            (false, None) => Ok(self.path.to_string()),
        }
    }
}

macro_rules! endpoint {
    ($name:literal, $method:ident, $path:literal) => {
        Endpoint {
            name: $name,
            method: EndpointMethod::$method,
            path: $path,
        }
    };
}

/// Every named call of the dashboard API
pub static ENDPOINTS: &[Endpoint] = &[
    // dashboard
    endpoint!("get_dashboard", Get, "/dashboard/"),
    endpoint!("get_stock_overview", Get, "/stock-overview/"),
    // categories
    endpoint!("get_categories", Get, "/categories/"),
    endpoint!("get_category", Get, "/categories/{id}/"),
    endpoint!("create_category", Post, "/categories/"),
    endpoint!("update_category", Put, "/categories/{id}/"),
    endpoint!("delete_category", Delete, "/categories/{id}/"),
    // suppliers
    endpoint!("get_suppliers", Get, "/suppliers/"),
    endpoint!("get_supplier", Get, "/suppliers/{id}/"),
    endpoint!("create_supplier", Post, "/suppliers/"),
    endpoint!("update_supplier", Put, "/suppliers/{id}/"),
    endpoint!("delete_supplier", Delete, "/suppliers/{id}/"),
    // points of sale
    endpoint!("get_points_vente", Get, "/points-vente/"),
    endpoint!("get_point_vente", Get, "/points-vente/{id}/"),
    endpoint!("create_point_vente", Post, "/points-vente/"),
    endpoint!("update_point_vente", Put, "/points-vente/{id}/"),
    endpoint!("patch_point_vente", Patch, "/points-vente/{id}/"),
    endpoint!("delete_point_vente", Delete, "/points-vente/{id}/"),
    // users
    endpoint!("get_users", Get, "/users/"),
    endpoint!("get_user", Get, "/users/{id}/"),
    endpoint!("create_user", Post, "/users/"),
    endpoint!("update_user", Put, "/users/{id}/"),
    endpoint!("patch_user", Patch, "/users/{id}/"),
    endpoint!("delete_user", Delete, "/users/{id}/"),
    // products
    endpoint!("get_products", Get, "/products/"),
    endpoint!("get_product", Get, "/products/{id}/"),
    endpoint!("create_product", Post, "/products/"),
    endpoint!("update_product", Put, "/products/{id}/"),
    endpoint!("patch_product", Patch, "/products/{id}/"),
    endpoint!("delete_product", Delete, "/products/{id}/"),
    // product variants
    endpoint!("get_product_variants", Get, "/product-variants/"),
    endpoint!("get_product_variant", Get, "/product-variants/{id}/"),
    endpoint!("create_product_variant", Post, "/product-variants/"),
    endpoint!("update_product_variant", Put, "/product-variants/{id}/"),
    endpoint!("delete_product_variant", Delete, "/product-variants/{id}/"),
    // stock movements
    endpoint!("get_stock_movements", Get, "/stock-movements/"),
    endpoint!("get_stock_movement", Get, "/stock-movements/{id}/"),
    endpoint!("create_stock_movement", Post, "/stock-movements/"),
    // orders
    endpoint!("get_orders", Get, "/orders/"),
    endpoint!("get_order", Get, "/orders/{id}/"),
    endpoint!("create_order", Post, "/orders/"),
    endpoint!("update_order", Put, "/orders/{id}/"),
    endpoint!("patch_order", Patch, "/orders/{id}/"),
    endpoint!("delete_order", Delete, "/orders/{id}/"),
    // disputes
    endpoint!("get_disputes", Get, "/disputes/"),
    endpoint!("get_dispute", Get, "/disputes/{id}/"),
    endpoint!("create_dispute", Post, "/disputes/"),
    endpoint!("update_dispute", Put, "/disputes/{id}/"),
    endpoint!("patch_dispute", Patch, "/disputes/{id}/"),
    // vendor tokens
    endpoint!("get_tokens", Get, "/tokens/"),
    endpoint!("get_token", Get, "/tokens/{id}/"),
    endpoint!("create_token", Post, "/tokens/"),
    endpoint!("get_token_transactions", Get, "/token-transactions/"),
    endpoint!("create_token_transaction", Post, "/token-transactions/"),
    // roles and permissions
    endpoint!("get_roles", Get, "/roles/"),
    endpoint!("get_role", Get, "/roles/{id}/"),
    endpoint!("create_role", Post, "/roles/"),
    endpoint!("update_role", Put, "/roles/{id}/"),
    endpoint!("delete_role", Delete, "/roles/{id}/"),
    endpoint!("get_permissions", Get, "/permissions/"),
    // notifications
    endpoint!("get_notifications", Get, "/notifications/"),
    endpoint!("patch_notification", Patch, "/notifications/{id}/"),
    endpoint!("delete_notification", Delete, "/notifications/{id}/"),
];

static ENDPOINT_INDEX: Lazy<HashMap<&'static str, &'static Endpoint>> =
    Lazy::new(|| ENDPOINTS.iter().map(|e| (e.name, e)).collect());

/// Looks an endpoint up by name
#[must_use]
pub fn find_endpoint(name: &str) -> Option<&'static Endpoint> {
    ENDPOINT_INDEX.get(name).copied()
}

/// Arguments of a named call
#[derive(Debug, Clone, Default)]
pub struct EndpointArgs {
    /// Record id for `{id}` templates
    pub id: Option<String>,
    /// Query parameters
    pub query: Vec<(String, String)>,
    /// Request body
    pub body: Option<RequestBody>,
}

impl EndpointArgs {
    /// No id, query or body
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the record id
    #[must_use]
    pub fn id(mut self, id: impl ToString) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Adds a query parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Sets the body
    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }
}

/// REST path of a collection (`/<collection>/`) or of one record (`/<collection>/<id>/`)
///
/// ```
/// use dashboard_client::model::endpoints::resource_path;
/// assert_eq!(resource_path("orders", None), "/orders/");
/// assert_eq!(resource_path("/orders/", Some("42")), "/orders/42/");
/// ```
#[must_use]
pub fn resource_path(collection: &str, id: Option<&str>) -> String {
    let collection = collection.trim_matches('/');
    match id {
        Some(id) => format!("/{collection}/{id}/"),
        None => format!("/{collection}/"),
    }
}
