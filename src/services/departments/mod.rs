pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::departments::requests::{CreateDepartmentRequest, UpdateDepartmentRequest};
use crate::storage::Storage;

pub struct DepartmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl DepartmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_departments(
        &self,
        request: &HttpRequest,
        params: HashMap<String, String>,
    ) -> ActixResult<HttpResponse> {
        list::list_departments(self, request, params).await
    }

    pub async fn create_department(
        &self,
        request: &HttpRequest,
        data: CreateDepartmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_department(self, request, data).await
    }

    pub async fn get_department(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_department(self, request, id).await
    }

    pub async fn update_department(
        &self,
        request: &HttpRequest,
        id: i64,
        data: UpdateDepartmentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_department(self, request, id, data).await
    }

    pub async fn delete_department(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_department(self, request, id).await
    }
}
