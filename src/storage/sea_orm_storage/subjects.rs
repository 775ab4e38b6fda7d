//! 课程存储操作

use super::{SeaOrmStorage, write_error};
use crate::entity::departments::{self, Entity as Departments};
use crate::entity::subjects::{self, ActiveModel, Column, Entity as Subjects};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    ListQuery, PaginatedResponse,
    subjects::{
        entities::{Subject, SubjectListItem},
        requests::{CreateSubjectRequest, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
};
use crate::query::{SubjectFilterField, build_filter};
use crate::utils::timestamp::now_millis;
use sea_orm::{
    ActiveModelTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建课程，院系不存在时返回冲突
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = now_millis();

        let model = ActiveModel {
            department_id: Set(req.department_id),
            name: Set(req.name),
            code: Set(req.code),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error("创建课程失败", e, ClassroomError::CreationFailure))?;

        Ok(result.into_subject())
    }

    /// 通过 ID 获取课程（附带院系）
    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<SubjectListItem>> {
        let result = Subjects::find_by_id(id)
            .find_also_related(Departments)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(into_list_item))
    }

    /// 分页列出课程
    pub async fn list_subjects_with_pagination_impl(
        &self,
        query: ListQuery,
    ) -> Result<SubjectListResponse> {
        let pagination = query.pagination;

        let mut select = Subjects::find().find_also_related(Departments);
        if let Some(condition) = build_filter::<SubjectFilterField>(&query.params) {
            select = select.filter(condition);
        }

        let total = select
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| ClassroomError::query_failure(format!("查询课程总数失败: {e}")))?;

        let rows = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(pagination.limit.min(i64::MAX as u64))
            .offset(pagination.offset().min(i64::MAX as u64))
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::query_failure(format!("查询课程列表失败: {e}")))?;

        Ok(PaginatedResponse {
            data: rows.into_iter().map(into_list_item).collect(),
            pagination: pagination.info(total),
        })
    }

    /// 更新课程信息
    pub async fn update_subject_impl(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let existing = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询课程失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now_millis()),
            ..Default::default()
        };

        if let Some(department_id) = update.department_id {
            model.department_id = Set(department_id);
        }
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(code) = update.code {
            model.code = Set(code);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| write_error("更新课程失败", e, ClassroomError::DatabaseOperation))?;

        Ok(Some(updated.into_subject()))
    }

    /// 删除课程，关联班级的课程字段置空
    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| write_error("删除课程失败", e, ClassroomError::DatabaseOperation))?;

        Ok(result.rows_affected > 0)
    }
}

fn into_list_item(
    (subject, department): (subjects::Model, Option<departments::Model>),
) -> SubjectListItem {
    SubjectListItem {
        subject: subject.into_subject(),
        department: department.map(departments::Model::into_department),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::departments::requests::CreateDepartmentRequest;
    use crate::storage::sea_orm_storage::test_support::memory_storage;

    fn subject(department_id: i64, name: &str, code: &str) -> CreateSubjectRequest {
        CreateSubjectRequest {
            department_id,
            name: name.to_string(),
            code: code.to_string(),
            description: None,
        }
    }

    fn query(pairs: &[(&str, &str)]) -> ListQuery {
        ListQuery::from_params(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    async fn seeded() -> SeaOrmStorage {
        let storage = memory_storage().await;
        let science = storage
            .create_department_impl(CreateDepartmentRequest {
                code: "SCI".to_string(),
                name: "Science".to_string(),
                description: None,
            })
            .await
            .unwrap();
        let arts = storage
            .create_department_impl(CreateDepartmentRequest {
                code: "ART".to_string(),
                name: "Arts".to_string(),
                description: None,
            })
            .await
            .unwrap();
        storage
            .create_subject_impl(subject(science.id, "Chemistry", "CHEM-1"))
            .await
            .unwrap();
        storage
            .create_subject_impl(subject(arts.id, "Painting", "ART-1"))
            .await
            .unwrap();
        storage
    }

    #[tokio::test]
    async fn test_department_filter_and_nesting() {
        let storage = seeded().await;
        let response = storage
            .list_subjects_with_pagination_impl(query(&[("department", "sci")]))
            .await
            .unwrap();

        assert_eq!(response.pagination.total, 1);
        let item = &response.data[0];
        assert_eq!(item.subject.name, "Chemistry");
        assert_eq!(item.department.as_ref().map(|d| d.code.as_str()), Some("SCI"));
    }

    #[tokio::test]
    async fn test_search_matches_code() {
        let storage = seeded().await;
        let response = storage
            .list_subjects_with_pagination_impl(query(&[("search", "art-")]))
            .await
            .unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].subject.name, "Painting");
    }

    #[tokio::test]
    async fn test_unknown_department_conflicts() {
        let storage = memory_storage().await;
        let err = storage
            .create_subject_impl(subject(42, "Orphan", "ORP-1"))
            .await
            .unwrap_err();
        assert!(err.is_conflict(), "{err}");
    }

    #[tokio::test]
    async fn test_duplicate_code_conflicts() {
        let storage = seeded().await;
        let response = storage
            .list_subjects_with_pagination_impl(query(&[]))
            .await
            .unwrap();
        let department_id = response.data[0].subject.department_id;
        let err = storage
            .create_subject_impl(subject(department_id, "Again", "CHEM-1"))
            .await
            .unwrap_err();
        assert!(err.is_conflict(), "{err}");
    }
}
