//! Classroom API - 课堂管理后端服务
//!
//! 基于 Actix Web 与 SeaORM 构建，提供院系、学科、班级与用户的 REST 接口。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证、授权与限流中间件
//! - `models`: 数据模型定义
//! - `query`: 列表筛选条件构建
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod query;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
