//! 表单状态管理
//!
//! 管理创建短链接时的表单输入和验证。每次输入都会重新验证所有字段，
//! 但只有被编辑过的字段才显示错误。

use std::collections::{HashMap, HashSet};

use crate::structs::ShortenRequest;
use crate::utils::{validate_custom_alias, validate_original_url, validate_required};

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    #[default]
    OriginalUrl,
    CustomAlias,
}

impl FormField {
    /// 所有字段的顺序
    pub const ALL: [Self; 2] = [Self::OriginalUrl, Self::CustomAlias];

    /// 获取字段名称（用于验证错误的 key）
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::OriginalUrl => "original_url",
            Self::CustomAlias => "custom_alias",
        }
    }

    /// 获取字段显示标题
    pub fn display_title(&self) -> &'static str {
        match self {
            Self::OriginalUrl => "Original URL *",
            Self::CustomAlias => "Custom Alias (optional)",
        }
    }
}

/// 表单状态
#[derive(Debug, Default)]
pub struct FormState {
    /// 原始 URL 输入
    pub original_url: String,
    /// 自定义别名输入
    pub custom_alias: String,
    /// 验证错误 (field_name -> error_message)
    pub validation_errors: HashMap<String, String>,
    /// 已编辑过的字段
    touched: HashSet<FormField>,
}

impl FormState {
    /// 创建新的表单状态
    pub fn new() -> Self {
        let mut form = Self::default();
        form.validate();
        form
    }

    /// 清空所有输入
    pub fn reset(&mut self) {
        self.original_url.clear();
        self.custom_alias.clear();
        self.touched.clear();
        self.validate();
    }

    pub fn input(&self, field: FormField) -> &str {
        match field {
            FormField::OriginalUrl => &self.original_url,
            FormField::CustomAlias => &self.custom_alias,
        }
    }

    fn input_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::OriginalUrl => &mut self.original_url,
            FormField::CustomAlias => &mut self.custom_alias,
        }
    }

    /// 向字段添加字符
    pub fn push_char(&mut self, field: FormField, c: char) {
        self.input_mut(field).push(c);
        self.touched.insert(field);
        self.validate();
    }

    /// 从字段删除最后一个字符
    pub fn pop_char(&mut self, field: FormField) {
        self.input_mut(field).pop();
        self.touched.insert(field);
        self.validate();
    }

    /// Recompute the errors of every field
    pub fn validate(&mut self) {
        self.validation_errors.clear();

        if let Err(e) = validate_required(&self.original_url)
            .and_then(|_| validate_original_url(&self.original_url))
        {
            self.set_error(FormField::OriginalUrl, e.to_string());
        }

        if let Err(e) = validate_custom_alias(Some(&self.custom_alias)) {
            self.set_error(FormField::CustomAlias, e.to_string());
        }
    }

    fn set_error(&mut self, field: FormField, error: String) {
        self.validation_errors
            .insert(field.field_name().to_string(), error);
    }

    /// 获取指定字段的验证错误（不论是否编辑过）
    pub fn get_error(&self, field: FormField) -> Option<&String> {
        self.validation_errors.get(field.field_name())
    }

    /// 获取需要显示的验证错误，未编辑过的字段不显示
    pub fn visible_error(&self, field: FormField) -> Option<&String> {
        if self.is_touched(field) {
            self.get_error(field)
        } else {
            None
        }
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.touched.contains(&field)
    }

    /// 所有字段（包括未编辑的必填字段）都通过验证
    pub fn is_valid(&self) -> bool {
        self.validation_errors.is_empty()
    }

    /// Trimmed request; a blank alias becomes absent
    pub fn to_request(&self) -> ShortenRequest {
        ShortenRequest::from_input(&self.original_url, Some(&self.custom_alias))
    }
}
