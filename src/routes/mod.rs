pub mod classes;

pub mod departments;

pub mod root;

pub mod subjects;

pub mod users;

pub use classes::configure_classes_routes;
pub use departments::configure_departments_routes;
pub use root::configure_root_routes;
pub use subjects::configure_subjects_routes;
pub use users::configure_user_routes;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use actix_web::web;

    use crate::config::DatabaseConfig;
    use crate::storage::{Storage, create_storage};
    use crate::utils::jwt::JwtUtils;

    pub struct TestState {
        pub storage: Arc<dyn Storage>,
        pub jwt: JwtUtils,
    }

    impl TestState {
        pub async fn new() -> Self {
            let config = DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                pool_size: 1,
                timeout: 5,
            };
            Self {
                storage: create_storage(&config).await.expect("in-memory storage"),
                jwt: JwtUtils::new("route-test-secret", 60),
            }
        }

        pub fn storage_data(&self) -> web::Data<Arc<dyn Storage>> {
            web::Data::new(self.storage.clone())
        }

        pub fn jwt_data(&self) -> web::Data<JwtUtils> {
            web::Data::new(self.jwt.clone())
        }

        pub fn bearer(&self, user_id: i64, role: &str) -> (&'static str, String) {
            let token = self
                .jwt
                .generate_access_token(user_id, role)
                .expect("token");
            ("Authorization", format!("Bearer {token}"))
        }
    }
}
