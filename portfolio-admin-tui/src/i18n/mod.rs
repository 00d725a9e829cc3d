//! 国际化（i18n）模块
//!
//! 纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 默认西班牙语，与 API 返回的消息保持一致。

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
mod es_es;
pub mod keys;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 西班牙语（西班牙）
    #[default]
    EsEs,
    /// 英语（美国）
    EnUs,
}

impl Language {
    /// 获取所有支持的语言
    pub fn all() -> &'static [Language] {
        &[Language::EsEs, Language::EnUs]
    }

    /// 语言代码（BCP 47）
    pub fn code(self) -> &'static str {
        match self {
            Language::EsEs => "es-ES",
            Language::EnUs => "en-US",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim() {
            "es-ES" | "es" => Some(Language::EsEs),
            "en-US" | "en" => Some(Language::EnUs),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Language::EsEs => 0,
            Language::EnUs => 1,
        }
    }
}

/// 当前语言索引
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0);

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &en_us::TRANSLATIONS,
        _ => &es_es::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang.index(), Ordering::Relaxed);
}

/// 获取当前语言
pub fn current_language() -> Language {
    Language::all()
        .get(CURRENT_LANGUAGE.load(Ordering::Relaxed))
        .copied()
        .unwrap_or_default()
}
