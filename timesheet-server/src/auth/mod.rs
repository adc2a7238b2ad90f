//! 认证授权模块
//!
//! - [`JwtService`] - JWT 令牌服务
//! - [`Identity`] - 当前调用者 (由令牌解析，只读)
//! - [`require_auth`] - 认证中间件
//! - [`scope::authorize`] - 作用域检查 (纯函数)
//! - [`password`] - Argon2 密码哈希

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod scope;

pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
pub use scope::{Decision, Operation, Owner, authorize};

use shared::models::{Role, UserInfo};

/// 当前调用者
///
/// 由认证中间件从 JWT Claims 构建，之后不再修改。
/// Claims 中的 `0` 映射为 `None`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i64,
    pub office_id: i64,
    pub workplace_id: Option<i64>,
    pub employee_id: Option<i64>,
    pub name: String,
    pub role: Role,
}

fn non_zero(id: i64) -> Option<i64> {
    (id != 0).then_some(id)
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            office_id: claims.office_id,
            workplace_id: non_zero(claims.workplace_id),
            employee_id: non_zero(claims.employee_id),
            name: claims.name,
            role: claims.role,
        }
    }
}

impl From<UserInfo> for Identity {
    fn from(user: UserInfo) -> Self {
        Self {
            user_id: user.user_id,
            office_id: user.office_id,
            workplace_id: user.workplace_id,
            employee_id: user.employee_id,
            name: user.name,
            role: user.role,
        }
    }
}
