//! 数据模型模块
//! 车源、审计记录与共享分页契约

pub mod audit;
pub mod listing;
pub mod pagination;
