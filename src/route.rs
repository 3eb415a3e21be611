//! 路由定义模块 - 领域模型
//!
//! Pure route table; no DOM access.

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Public game list (default route)
    #[default]
    Games,
    /// Admin area (requires auth)
    Admin,
    Login,
    Register,
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        match path {
            "/" => Self::Games,
            "/admin" => Self::Admin,
            "/login" => Self::Login,
            "/register" => Self::Register,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Games => "/",
            Self::Admin => "/admin",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::NotFound => "/404",
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Routes an authenticated user is sent away from.
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// Where a successful login lands.
    pub fn auth_success_redirect() -> Self {
        Self::Admin
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
