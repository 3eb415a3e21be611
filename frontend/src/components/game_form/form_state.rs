//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有与重置
//! - 从已有游戏回填（编辑模式）
//! - 到请求对象的转换

use gameshelf::shared::{Game, GameUpdate, NewGame};
use leptos::prelude::*;

/// (value, label) pairs for the platform checkboxes.
pub const PLATFORM_OPTIONS: [(&str, &str); 4] = [
    ("pc", "PC"),
    ("ps", "PlayStation"),
    ("xbox", "Xbox"),
    ("switch", "Switch"),
];

/// 使用 `RwSignal` 因为它实现了 `Copy`，适合作为 Props 在组件间传递。
/// 数字字段保留原始输入文本，提交时再解析。
#[derive(Clone, Copy)]
pub struct FormState {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub image_url: RwSignal<String>,
    pub price: RwSignal<String>,
    pub rating: RwSignal<String>,
    pub genre: RwSignal<String>,
    pub release_date: RwSignal<String>,
    pub platforms: RwSignal<Vec<String>>,
}

fn parse_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

impl FormState {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            image_url: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            rating: RwSignal::new(String::new()),
            genre: RwSignal::new(String::new()),
            release_date: RwSignal::new(String::new()),
            platforms: RwSignal::new(Vec::new()),
        }
    }

    pub fn reset(&self) {
        self.title.set(String::new());
        self.description.set(String::new());
        self.image_url.set(String::new());
        self.price.set(String::new());
        self.rating.set(String::new());
        self.genre.set(String::new());
        self.release_date.set(String::new());
        self.platforms.set(Vec::new());
    }

    /// 编辑模式：用已有记录回填，平台字符串拆回复选项
    pub fn fill_from(&self, game: &Game) {
        self.title.set(game.title.clone());
        self.description.set(game.description.clone());
        self.image_url.set(game.image_url.clone());
        self.price.set(game.price.to_string());
        self.rating.set(game.rating.to_string());
        self.genre.set(game.genre.clone());
        self.release_date.set(game.release_date.clone());
        self.platforms
            .set(game.platforms().into_iter().map(str::to_string).collect());
    }

    pub fn has_platform(&self, value: &str) -> bool {
        self.platforms.with(|p| p.iter().any(|v| v == value))
    }

    pub fn set_platform(&self, value: &str, checked: bool) {
        self.platforms.update(|p| {
            p.retain(|v| v != value);
            if checked {
                p.push(value.to_string());
            }
        });
    }

    /// Checkbox order, independent of click order.
    pub fn selected_platforms(&self) -> Vec<String> {
        let chosen = self.platforms.get_untracked();
        let is_option = |v: &str| PLATFORM_OPTIONS.iter().any(|(value, _)| *value == v);

        let mut ordered: Vec<String> = PLATFORM_OPTIONS
            .iter()
            .filter(|(value, _)| chosen.iter().any(|c| c == value))
            .map(|(value, _)| value.to_string())
            .collect();
        // 回填时可能出现不在选项里的平台，原样保留
        ordered.extend(chosen.into_iter().filter(|c| !is_option(c)));
        ordered
    }

    /// 平台与创建者由核心层在发送前填入
    pub fn to_new_game(&self) -> NewGame {
        NewGame {
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            image_url: self.image_url.get_untracked(),
            price: parse_number(&self.price.get_untracked()),
            rating: parse_number(&self.rating.get_untracked()),
            genre: self.genre.get_untracked(),
            release_date: self.release_date.get_untracked(),
            ..Default::default()
        }
    }

    pub fn to_update(&self) -> GameUpdate {
        GameUpdate {
            title: Some(self.title.get_untracked()),
            description: Some(self.description.get_untracked()),
            image_url: Some(self.image_url.get_untracked()),
            price: Some(parse_number(&self.price.get_untracked())),
            rating: Some(parse_number(&self.rating.get_untracked())),
            platform: None,
            genre: Some(self.genre.get_untracked()),
            release_date: Some(self.release_date.get_untracked()),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
