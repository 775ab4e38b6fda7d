//! 院系存储操作

use super::{SeaOrmStorage, write_error};
use crate::entity::departments::{ActiveModel, Column, Entity as Departments};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    ListQuery, PaginatedResponse,
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, UpdateDepartmentRequest},
        responses::DepartmentListResponse,
    },
};
use crate::query::{DepartmentFilterField, build_filter};
use crate::utils::timestamp::now_millis;
use sea_orm::{
    ActiveModelTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建院系
    pub async fn create_department_impl(&self, req: CreateDepartmentRequest) -> Result<Department> {
        let now = now_millis();

        let model = ActiveModel {
            code: Set(req.code),
            name: Set(req.name),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error("创建院系失败", e, ClassroomError::CreationFailure))?;

        Ok(result.into_department())
    }

    /// 通过 ID 获取院系
    pub async fn get_department_by_id_impl(&self, id: i64) -> Result<Option<Department>> {
        let result = Departments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询院系失败: {e}")))?;

        Ok(result.map(|m| m.into_department()))
    }

    /// 分页列出院系
    pub async fn list_departments_with_pagination_impl(
        &self,
        query: ListQuery,
    ) -> Result<DepartmentListResponse> {
        let pagination = query.pagination;

        let mut select = Departments::find();
        if let Some(condition) = build_filter::<DepartmentFilterField>(&query.params) {
            select = select.filter(condition);
        }

        let total = select
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| ClassroomError::query_failure(format!("查询院系总数失败: {e}")))?;

        let departments = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(pagination.limit.min(i64::MAX as u64))
            .offset(pagination.offset().min(i64::MAX as u64))
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::query_failure(format!("查询院系列表失败: {e}")))?;

        Ok(PaginatedResponse {
            data: departments.into_iter().map(|m| m.into_department()).collect(),
            pagination: pagination.info(total),
        })
    }

    /// 更新院系信息
    pub async fn update_department_impl(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        if self.get_department_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now_millis()),
            ..Default::default()
        };

        if let Some(code) = update.code {
            model.code = Set(code);
        }
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| write_error("更新院系失败", e, ClassroomError::DatabaseOperation))?;

        Ok(Some(updated.into_department()))
    }

    /// 删除院系，仍有课程引用时返回冲突
    pub async fn delete_department_impl(&self, id: i64) -> Result<bool> {
        let result = Departments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| write_error("删除院系失败", e, ClassroomError::DatabaseOperation))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::subjects::requests::CreateSubjectRequest;
    use crate::storage::sea_orm_storage::test_support::memory_storage;

    fn department(code: &str, name: &str) -> CreateDepartmentRequest {
        CreateDepartmentRequest {
            code: code.to_string(),
            name: name.to_string(),
            description: Some("desc".to_string()),
        }
    }

    #[tokio::test]
    async fn test_pagination_window() {
        let storage = memory_storage().await;
        for i in 0..5 {
            storage
                .create_department_impl(department(&format!("D{i}"), &format!("Dept {i}")))
                .await
                .unwrap();
        }

        let mut query = ListQuery::default();
        query.pagination = crate::models::Pagination::new(2, 2);
        let response = storage
            .list_departments_with_pagination_impl(query)
            .await
            .unwrap();

        assert_eq!(response.pagination.total, 5);
        assert_eq!(response.pagination.total_pages, 3);
        let codes: Vec<_> = response.data.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(codes, vec!["D2", "D1"]);
    }

    #[tokio::test]
    async fn test_search_by_code() {
        let storage = memory_storage().await;
        storage
            .create_department_impl(department("MATH", "Mathematics"))
            .await
            .unwrap();
        storage
            .create_department_impl(department("HIST", "History"))
            .await
            .unwrap();

        let query = ListQuery::default().with_param("search", "hist");
        let response = storage
            .list_departments_with_pagination_impl(query)
            .await
            .unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].name, "History");
    }

    #[tokio::test]
    async fn test_delete_is_restricted_by_subjects() {
        let storage = memory_storage().await;
        let dept = storage
            .create_department_impl(department("SCI", "Science"))
            .await
            .unwrap();
        let subject = storage
            .create_subject_impl(CreateSubjectRequest {
                department_id: dept.id,
                name: "Chemistry".to_string(),
                code: "CHEM".to_string(),
                description: None,
            })
            .await
            .unwrap();

        let err = storage.delete_department_impl(dept.id).await.unwrap_err();
        assert!(err.is_conflict(), "{err}");

        assert!(storage.delete_subject_impl(subject.id).await.unwrap());
        assert!(storage.delete_department_impl(dept.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_missing_department() {
        let storage = memory_storage().await;
        let result = storage
            .update_department_impl(7, UpdateDepartmentRequest::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
