pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest};
use crate::storage::Storage;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_users(
        &self,
        request: &HttpRequest,
        params: HashMap<String, String>,
    ) -> ActixResult<HttpResponse> {
        list::list_users(self, request, params).await
    }

    pub async fn create_user(
        &self,
        request: &HttpRequest,
        data: CreateUserRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_user(self, request, data).await
    }

    pub async fn get_user(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_user(self, request, id).await
    }

    pub async fn update_user(
        &self,
        request: &HttpRequest,
        id: i64,
        data: UpdateUserRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_user(self, request, id, data).await
    }

    pub async fn delete_user(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_user(self, request, id).await
    }
}
