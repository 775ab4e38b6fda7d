//! 班级存储操作

use super::{SeaOrmStorage, write_error};
use crate::entity::classes::{self, ActiveModel, Column, Entity as Classes};
use crate::entity::subjects::{self, Entity as Subjects};
use crate::entity::users::{self, Entity as Users};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    ListQuery, PaginatedResponse,
    classes::{
        entities::{Class, ClassListItem},
        requests::{CreateClassRequest, DEFAULT_CAPACITY, UpdateClassRequest},
        responses::ClassListResponse,
    },
};
use crate::query::{ClassFilterField, build_filter};
use crate::utils::random_code::generate_invite_code;
use crate::utils::timestamp::now_millis;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, SelectThree, Set, TopologyStar,
};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let now = now_millis();
        let invite_code = generate_invite_code(); // 总是由服务端生成
        let schedules = req.schedules.unwrap_or_default();

        let model = ActiveModel {
            subject_id: Set(req.subject_id),
            teacher_id: Set(req.teacher_id),
            name: Set(req.name),
            description: Set(req.description),
            invite_code: Set(invite_code),
            capacity: Set(req.capacity.unwrap_or(DEFAULT_CAPACITY)),
            status: Set(req.status.unwrap_or_default().to_string()),
            banner_url: Set(req.banner_url),
            schedules: Set(serde_json::to_string(&schedules)?),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error("创建班级失败", e, ClassroomError::CreationFailure))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级（附带课程与教师）
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<ClassListItem>> {
        let result = with_relations()
            .filter(Column::Id.eq(class_id))
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(into_list_item))
    }

    /// 分页列出班级
    ///
    /// 左连接课程与教师，过滤条件可以引用任一连接表的列；
    /// 没有关联行的班级仍会返回，对应字段为 null。
    /// 嵌套的课程与教师和班级行来自同一次数据查询。
    pub async fn list_classes_with_pagination_impl(
        &self,
        query: ListQuery,
    ) -> Result<ClassListResponse> {
        let pagination = query.pagination;

        let mut select = with_relations();
        if let Some(condition) = build_filter::<ClassFilterField>(&query.params) {
            select = select.filter(condition);
        }

        // 总数与数据分两次查询，不在同一事务内
        let total = select
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| ClassroomError::query_failure(format!("查询班级总数失败: {e}")))?;

        let rows = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(pagination.limit.min(i64::MAX as u64))
            .offset(pagination.offset().min(i64::MAX as u64))
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::query_failure(format!("查询班级列表失败: {e}")))?;

        Ok(PaginatedResponse {
            data: rows.into_iter().map(into_list_item).collect(),
            pagination: pagination.info(total),
        })
    }

    /// 更新班级信息，邀请码保持不变
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        // 先检查班级是否存在
        let existing = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询班级失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(class_id),
            updated_at: Set(now_millis()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(subject_id) = update.subject_id {
            model.subject_id = Set(subject_id);
        }
        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(teacher_id);
        }
        if let Some(capacity) = update.capacity {
            model.capacity = Set(capacity);
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(banner_url) = update.banner_url {
            model.banner_url = Set(Some(banner_url));
        }
        if let Some(schedules) = update.schedules {
            model.schedules = Set(serde_json::to_string(&schedules)?);
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| write_error("更新班级失败", e, ClassroomError::DatabaseOperation))?;

        Ok(Some(updated.into_class()))
    }

    /// 删除班级
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

type ClassRow = (classes::Model, Option<subjects::Model>, Option<users::Model>);

// classes LEFT JOIN subjects LEFT JOIN users(teacher)
fn with_relations() -> SelectThree<Classes, Subjects, Users, TopologyStar> {
    Classes::find()
        .find_also_related(Subjects)
        .find_also_related(Users)
}

fn into_list_item((class, subject, teacher): ClassRow) -> ClassListItem {
    ClassListItem {
        class: class.into_class(),
        subject: subject.map(subjects::Model::into_subject),
        teacher: teacher.map(users::Model::into_user),
    }
}
