//! 表单页面状态
//!
//! 表单的值、校验和提交状态在 [`FormController`] 中；
//! 这里只记录光标所在的字段。

use portfolio_admin_core::controllers::{FormController, FormEntity};
use portfolio_admin_core::types::{Url, UrlGrp};

/// 表单字段类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Link,
    /// 分组选择器（← → 切换）
    Group,
    /// 启用开关（空格切换）
    Enabled,
}

impl FieldKind {
    /// 是否是文本输入框
    pub fn is_text(self) -> bool {
        matches!(self, FieldKind::Name | FieldKind::Link)
    }
}

/// 可在终端表单中编辑的实体
pub trait FormFields {
    /// 字段顺序
    const FIELDS: &'static [FieldKind];

    /// 文本字段的可变引用；非文本字段返回 `None`
    fn text_mut(&mut self, field: FieldKind) -> Option<&mut String>;

    /// 文本字段的当前值
    fn text(&self, field: FieldKind) -> Option<&str>;

    fn enabled(&self) -> bool;

    fn enabled_mut(&mut self) -> &mut bool;
}

impl FormFields for UrlGrp {
    const FIELDS: &'static [FieldKind] = &[FieldKind::Name, FieldKind::Enabled];

    fn text_mut(&mut self, field: FieldKind) -> Option<&mut String> {
        match field {
            FieldKind::Name => Some(&mut self.name),
            _ => None,
        }
    }

    fn text(&self, field: FieldKind) -> Option<&str> {
        match field {
            FieldKind::Name => Some(&self.name),
            _ => None,
        }
    }

    fn enabled(&self) -> bool {
        self.is_enable
    }

    fn enabled_mut(&mut self) -> &mut bool {
        &mut self.is_enable
    }
}

impl FormFields for Url {
    const FIELDS: &'static [FieldKind] = &[
        FieldKind::Name,
        FieldKind::Link,
        FieldKind::Group,
        FieldKind::Enabled,
    ];

    fn text_mut(&mut self, field: FieldKind) -> Option<&mut String> {
        match field {
            FieldKind::Name => Some(&mut self.name),
            FieldKind::Link => Some(&mut self.link),
            _ => None,
        }
    }

    fn text(&self, field: FieldKind) -> Option<&str> {
        match field {
            FieldKind::Name => Some(&self.name),
            FieldKind::Link => Some(&self.link),
            _ => None,
        }
    }

    fn enabled(&self) -> bool {
        self.is_enable
    }

    fn enabled_mut(&mut self) -> &mut bool {
        &mut self.is_enable
    }
}

/// 表单页面状态
#[derive(Debug)]
pub struct FormState<T> {
    pub controller: FormController<T>,
    /// 当前焦点字段索引
    pub focus: usize,
}

impl<T: FormEntity + FormFields> FormState<T> {
    /// 有实体时为编辑模式，否则为新建模式
    pub fn new(entity: Option<T>) -> Self {
        Self {
            controller: FormController::from_entity(entity),
            focus: 0,
        }
    }

    /// 当前焦点字段
    pub fn focused_field(&self) -> FieldKind {
        T::FIELDS.get(self.focus).copied().unwrap_or(FieldKind::Name)
    }

    /// 下一个字段（循环）
    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % T::FIELDS.len();
    }

    /// 上一个字段（循环）
    pub fn prev_field(&mut self) {
        let len = T::FIELDS.len();
        self.focus = (self.focus + len - 1) % len;
    }

    /// 在焦点文本字段末尾追加字符
    pub fn input(&mut self, ch: char) {
        let field = self.focused_field();
        if field.is_text() {
            self.controller.update_field(|value| {
                if let Some(text) = value.text_mut(field) {
                    text.push(ch);
                }
            });
        }
    }

    /// 删除焦点文本字段的最后一个字符
    pub fn backspace(&mut self) {
        let field = self.focused_field();
        let has_text = self
            .controller
            .value()
            .text(field)
            .is_some_and(|text| !text.is_empty());
        if has_text {
            self.controller.update_field(|value| {
                if let Some(text) = value.text_mut(field) {
                    text.pop();
                }
            });
        }
    }

    /// 切换启用开关
    pub fn toggle_enabled(&mut self) {
        self.controller.update_field(|value| {
            let enabled = value.enabled_mut();
            *enabled = !*enabled;
        });
    }
}

impl<T: FormEntity + FormFields> Default for FormState<T> {
    fn default() -> Self {
        Self::new(None)
    }
}
