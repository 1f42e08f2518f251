//! 认证模块
//! 令牌由外部身份服务签发，本服务只做验证与上下文提取

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, JwtService};
pub use middleware::{extract_token, jwt_auth_middleware, AuthContext};
