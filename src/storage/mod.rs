use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::models::{
    ListQuery,
    classes::{
        entities::{Class, ClassListItem},
        requests::{CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, UpdateDepartmentRequest},
        responses::DepartmentListResponse,
    },
    subjects::{
        entities::{Subject, SubjectListItem},
        requests::{CreateSubjectRequest, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 班级管理方法
    // 创建班级（邀请码由存储层生成）
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级，附带课程与教师
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<ClassListItem>>;
    // 列出班级
    async fn list_classes_with_pagination(&self, query: ListQuery) -> Result<ClassListResponse>;
    // 更新班级信息
    async fn update_class(&self, class_id: i64, update: UpdateClassRequest)
    -> Result<Option<Class>>;
    // 删除班级
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 用户管理方法
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn list_users_with_pagination(&self, query: ListQuery) -> Result<UserListResponse>;
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    async fn delete_user(&self, id: i64) -> Result<bool>;

    /// 课程管理方法
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    // 通过ID获取课程，附带院系
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<SubjectListItem>>;
    async fn list_subjects_with_pagination(&self, query: ListQuery)
    -> Result<SubjectListResponse>;
    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    async fn delete_subject(&self, id: i64) -> Result<bool>;

    /// 院系管理方法
    async fn create_department(&self, department: CreateDepartmentRequest) -> Result<Department>;
    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>>;
    async fn list_departments_with_pagination(
        &self,
        query: ListQuery,
    ) -> Result<DepartmentListResponse>;
    async fn update_department(
        &self,
        id: i64,
        update: UpdateDepartmentRequest,
    ) -> Result<Option<Department>>;
    // 存在关联课程时返回冲突错误
    async fn delete_department(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(config).await?;
    Ok(Arc::new(storage))
}
