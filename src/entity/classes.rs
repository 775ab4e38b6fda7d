//! 班级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub subject_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    #[sea_orm(unique)]
    pub invite_code: String,
    pub capacity: i32,
    pub status: String,
    pub banner_url: Option<String>,
    // JSON 文本，查询层不解析
    pub schedules: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TeacherId",
        to = "super::users::Column::Id"
    )]
    Teacher,
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_class(self) -> crate::models::classes::entities::Class {
        use crate::models::classes::entities::{Class, ClassStatus};
        use crate::utils::timestamp::from_millis;

        Class {
            id: self.id,
            subject_id: self.subject_id,
            teacher_id: self.teacher_id,
            name: self.name,
            description: self.description,
            invite_code: self.invite_code,
            capacity: self.capacity,
            status: self
                .status
                .parse::<ClassStatus>()
                .unwrap_or(ClassStatus::Active),
            banner_url: self.banner_url,
            schedules: serde_json::from_str(&self.schedules).unwrap_or_default(),
            created_at: from_millis(self.created_at),
            updated_at: from_millis(self.updated_at),
        }
    }
}
