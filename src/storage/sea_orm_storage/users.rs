//! 用户存储操作

use super::{SeaOrmStorage, write_error};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    ListQuery, PaginatedResponse,
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UpdateUserRequest},
        responses::UserListResponse,
    },
};
use crate::query::{UserFilterField, build_filter};
use crate::utils::timestamp::now_millis;
use sea_orm::{
    ActiveModelTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = now_millis();

        let model = ActiveModel {
            name: Set(req.name),
            email: Set(req.email),
            role: Set(req.role.unwrap_or(UserRole::Student).to_string()),
            image: Set(req.image),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error("创建用户失败", e, ClassroomError::CreationFailure))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 分页列出用户
    pub async fn list_users_with_pagination_impl(
        &self,
        query: ListQuery,
    ) -> Result<UserListResponse> {
        let pagination = query.pagination;

        let mut select = Users::find();
        if let Some(condition) = build_filter::<UserFilterField>(&query.params) {
            select = select.filter(condition);
        }

        let total = select
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| ClassroomError::query_failure(format!("查询用户总数失败: {e}")))?;

        let users = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(pagination.limit.min(i64::MAX as u64))
            .offset(pagination.offset().min(i64::MAX as u64))
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::query_failure(format!("查询用户列表失败: {e}")))?;

        Ok(PaginatedResponse {
            data: users.into_iter().map(|m| m.into_user()).collect(),
            pagination: pagination.info(total),
        })
    }

    /// 更新用户信息
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        // 先检查用户是否存在
        if self.get_user_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now_millis()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(role) = update.role {
            model.role = Set(role.to_string());
        }
        if let Some(image) = update.image {
            model.image = Set(Some(image));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| write_error("更新用户失败", e, ClassroomError::DatabaseOperation))?;

        Ok(Some(updated.into_user()))
    }

    /// 删除用户，其负责的班级教师字段置空
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| write_error("删除用户失败", e, ClassroomError::DatabaseOperation))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::classes::requests::CreateClassRequest;
    use crate::storage::sea_orm_storage::test_support::memory_storage;

    fn user(name: &str, email: &str, role: UserRole) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            role: Some(role),
            image: None,
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
        for (name, email, role) in [
            ("Ada Lovelace", "ada@example.com", UserRole::Teacher),
            ("Alan Turing", "alan@uni.edu", UserRole::Admin),
            ("Grace Hopper", "grace@example.com", UserRole::Student),
        ] {
            storage.create_user_impl(user(name, email, role)).await.unwrap();
        }
        storage
    }

    #[tokio::test]
    async fn test_search_matches_name_or_email() {
        let storage = seeded().await;

        let by_email = storage
            .list_users_with_pagination_impl(query(&[("search", "EXAMPLE.com")]))
            .await
            .unwrap();
        assert_eq!(by_email.pagination.total, 2);

        let by_name = storage
            .list_users_with_pagination_impl(query(&[("search", "turing")]))
            .await
            .unwrap();
        assert_eq!(by_name.data.len(), 1);
        assert_eq!(by_name.data[0].role, UserRole::Admin);
    }

    #[tokio::test]
    async fn test_role_filter_both_shapes() {
        let storage = seeded().await;

        let flat = storage
            .list_users_with_pagination_impl(query(&[("role", "student")]))
            .await
            .unwrap();
        assert_eq!(flat.data.len(), 1);
        assert_eq!(flat.data[0].name, "Grace Hopper");

        let indexed = storage
            .list_users_with_pagination_impl(query(&[
                ("filters[0][field]", "role"),
                ("filters[0][operator]", "eq"),
                ("filters[0][value]", "teacher"),
            ]))
            .await
            .unwrap();
        assert_eq!(indexed.data.len(), 1);
        assert_eq!(indexed.data[0].name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let storage = seeded().await;
        let err = storage
            .create_user_impl(user("Ada Again", "ada@example.com", UserRole::Student))
            .await
            .unwrap_err();
        assert!(err.is_conflict(), "{err}");
    }

    #[tokio::test]
    async fn test_default_role_is_student() {
        let storage = memory_storage().await;
        let created = storage
            .create_user_impl(CreateUserRequest {
                name: "New".to_string(),
                email: "new@example.com".to_string(),
                role: None,
                image: None,
            })
            .await
            .unwrap();
        assert_eq!(created.role, UserRole::Student);
    }

    #[tokio::test]
    async fn test_deleting_teacher_keeps_class() {
        let storage = memory_storage().await;
        let teacher = storage
            .create_user_impl(user("Ada", "ada@example.com", UserRole::Teacher))
            .await
            .unwrap();
        let class = storage
            .create_class_impl(CreateClassRequest {
                name: "Algebra".to_string(),
                description: None,
                subject_id: None,
                teacher_id: Some(teacher.id),
                capacity: None,
                status: None,
                banner_url: None,
                schedules: None,
            })
            .await
            .unwrap();

        assert!(storage.delete_user_impl(teacher.id).await.unwrap());
        let remaining = storage
            .get_class_by_id_impl(class.id)
            .await
            .unwrap()
            .unwrap();
        assert!(remaining.teacher.is_none());
        assert_eq!(remaining.class.teacher_id, None);
    }
}
