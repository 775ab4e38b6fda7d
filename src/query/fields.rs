//! 各实体的过滤字段白名单

use std::collections::HashMap;

use sea_orm::Condition;

use super::{FilterField, FilterOperator, contains_any, contains_ci, equals, flat_value};
use crate::entity::{classes, departments, subjects, users};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassFilterField {
    Name,
    Subject,
    Teacher,
    Status,
}

impl FilterField for ClassFilterField {
    fn parse(field: &str) -> Option<Self> {
        match field {
            "name" => Some(Self::Name),
            "subject" => Some(Self::Subject),
            "teacher" => Some(Self::Teacher),
            "status" => Some(Self::Status),
            _ => None,
        }
    }

    fn predicate(self, operator: FilterOperator, value: &str) -> Option<Condition> {
        match (self, operator) {
            (Self::Name, FilterOperator::Contains) => Some(contains_ci(classes::Column::Name, value)),
            (Self::Name, FilterOperator::Eq) => Some(equals(classes::Column::Name, value)),
            (Self::Subject, FilterOperator::Contains) => Some(contains_ci(subjects::Column::Name, value)),
            (Self::Subject, FilterOperator::Eq) => Some(equals(subjects::Column::Name, value)),
            (Self::Teacher, FilterOperator::Contains) => Some(contains_ci(users::Column::Name, value)),
            (Self::Teacher, FilterOperator::Eq) => Some(equals(users::Column::Name, value)),
            (Self::Status, FilterOperator::Eq) => Some(equals(classes::Column::Status, value)),
            (Self::Status, FilterOperator::Contains) => None,
        }
    }

    fn flat_predicates(params: &HashMap<String, String>) -> Vec<Condition> {
        let mut predicates = Vec::new();
        if let Some(search) = flat_value(params, "search") {
            predicates.push(contains_any(
                &[classes::Column::Name, classes::Column::InviteCode],
                search,
            ));
        }
        if let Some(subject) = flat_value(params, "subject") {
            predicates.push(contains_ci(subjects::Column::Name, subject));
        }
        if let Some(teacher) = flat_value(params, "teacher") {
            predicates.push(contains_ci(users::Column::Name, teacher));
        }
        if let Some(status) = flat_value(params, "status") {
            predicates.push(equals(classes::Column::Status, status));
        }
        predicates
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserFilterField {
    Name,
    Email,
    Role,
}

impl FilterField for UserFilterField {
    fn parse(field: &str) -> Option<Self> {
        match field {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "role" => Some(Self::Role),
            _ => None,
        }
    }

    fn predicate(self, operator: FilterOperator, value: &str) -> Option<Condition> {
        match (self, operator) {
            (Self::Name, FilterOperator::Contains) => Some(contains_ci(users::Column::Name, value)),
            (Self::Name, FilterOperator::Eq) => Some(equals(users::Column::Name, value)),
            (Self::Email, FilterOperator::Contains) => Some(contains_ci(users::Column::Email, value)),
            (Self::Email, FilterOperator::Eq) => Some(equals(users::Column::Email, value)),
            (Self::Role, FilterOperator::Eq) => Some(equals(users::Column::Role, value)),
            (Self::Role, FilterOperator::Contains) => None,
        }
    }

    fn flat_predicates(params: &HashMap<String, String>) -> Vec<Condition> {
        let mut predicates = Vec::new();
        if let Some(search) = flat_value(params, "search") {
            predicates.push(contains_any(
                &[users::Column::Name, users::Column::Email],
                search,
            ));
        }
        if let Some(role) = flat_value(params, "role") {
            predicates.push(equals(users::Column::Role, role));
        }
        predicates
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectFilterField {
    Name,
    Code,
    Department,
}

impl FilterField for SubjectFilterField {
    fn parse(field: &str) -> Option<Self> {
        match field {
            "name" => Some(Self::Name),
            "code" => Some(Self::Code),
            "department" => Some(Self::Department),
            _ => None,
        }
    }

    fn predicate(self, operator: FilterOperator, value: &str) -> Option<Condition> {
        let condition = match (self, operator) {
            (Self::Name, FilterOperator::Contains) => contains_ci(subjects::Column::Name, value),
            (Self::Name, FilterOperator::Eq) => equals(subjects::Column::Name, value),
            (Self::Code, FilterOperator::Contains) => contains_ci(subjects::Column::Code, value),
            (Self::Code, FilterOperator::Eq) => equals(subjects::Column::Code, value),
            (Self::Department, FilterOperator::Contains) => contains_ci(departments::Column::Name, value),
            (Self::Department, FilterOperator::Eq) => equals(departments::Column::Name, value),
        };
        Some(condition)
    }

    fn flat_predicates(params: &HashMap<String, String>) -> Vec<Condition> {
        let mut predicates = Vec::new();
        if let Some(search) = flat_value(params, "search") {
            predicates.push(contains_any(
                &[subjects::Column::Name, subjects::Column::Code],
                search,
            ));
        }
        if let Some(department) = flat_value(params, "department") {
            predicates.push(contains_ci(departments::Column::Name, department));
        }
        predicates
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentFilterField {
    Name,
    Code,
}

impl FilterField for DepartmentFilterField {
    fn parse(field: &str) -> Option<Self> {
        match field {
            "name" => Some(Self::Name),
            "code" => Some(Self::Code),
            _ => None,
        }
    }

    fn predicate(self, operator: FilterOperator, value: &str) -> Option<Condition> {
        let condition = match (self, operator) {
            (Self::Name, FilterOperator::Contains) => contains_ci(departments::Column::Name, value),
            (Self::Name, FilterOperator::Eq) => equals(departments::Column::Name, value),
            (Self::Code, FilterOperator::Contains) => contains_ci(departments::Column::Code, value),
            (Self::Code, FilterOperator::Eq) => equals(departments::Column::Code, value),
        };
        Some(condition)
    }

    fn flat_predicates(params: &HashMap<String, String>) -> Vec<Condition> {
        flat_value(params, "search")
            .map(|search| {
                contains_any(
                    &[departments::Column::Name, departments::Column::Code],
                    search,
                )
            })
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_closed() {
        assert_eq!(ClassFilterField::parse("subject"), Some(ClassFilterField::Subject));
        assert_eq!(ClassFilterField::parse("inviteCode"), None);
        assert_eq!(UserFilterField::parse("password"), None);
        assert_eq!(SubjectFilterField::parse("department"), Some(SubjectFilterField::Department));
        assert_eq!(DepartmentFilterField::parse("description"), None);
    }

    #[test]
    fn test_unsupported_operator_pairs() {
        assert!(ClassFilterField::Status.predicate(FilterOperator::Contains, "act").is_none());
        assert!(ClassFilterField::Status.predicate(FilterOperator::Eq, "active").is_some());
        assert!(UserFilterField::Role.predicate(FilterOperator::Contains, "adm").is_none());
        assert!(UserFilterField::Role.predicate(FilterOperator::Eq, "admin").is_some());
    }

    #[test]
    fn test_flat_user_filters() {
        let params = HashMap::from([
            ("search".to_string(), "ada".to_string()),
            ("role".to_string(), "teacher".to_string()),
        ]);
        assert_eq!(UserFilterField::flat_predicates(&params).len(), 2);
    }
}
