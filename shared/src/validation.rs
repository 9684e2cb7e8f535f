//! 客户端表单校验
//!
//! 校验在任何网络请求之前执行，失败时返回字段级错误。
//! 错误的 `Display` 即展示给用户的文案。

use crate::{CATEGORY_NAME_MIN_CHARS, CategoryPayload, Credentials};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@ ]+@[^@ ]+\.[^@ .]{2,}$").expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email address")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Category name is required")]
    NameRequired,
    #[error("Category name must be at least {min} characters")]
    NameTooShort { min: usize },
}

/// 登录表单的字段错误集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialErrors {
    pub email: Option<ValidationError>,
    pub password: Option<ValidationError>,
}

impl CredentialErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    Ok(())
}

pub fn validate_category_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if name.chars().count() < CATEGORY_NAME_MIN_CHARS {
        return Err(ValidationError::NameTooShort {
            min: CATEGORY_NAME_MIN_CHARS,
        });
    }
    Ok(())
}

impl Credentials {
    /// 校验全部字段，收集每个字段的第一个错误
    pub fn validate(&self) -> Result<(), CredentialErrors> {
        let errors = CredentialErrors {
            email: validate_email(&self.email).err(),
            password: validate_password(&self.password).err(),
        };
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl CategoryPayload {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_category_name(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(validate_email("admin@shop.com").is_ok());
        assert!(validate_email("a.b@mail.example.org").is_ok());

        assert_eq!(validate_email(""), Err(ValidationError::EmailRequired));
        for bad in ["admin", "admin@shop", "admin@shop.c", "ad min@shop.com", "a@@b.com"] {
            assert_eq!(validate_email(bad), Err(ValidationError::EmailInvalid), "{bad}");
        }
    }

    #[test]
    fn test_credentials_collect_all_field_errors() {
        let errors = Credentials::new("nope", "").validate().unwrap_err();
        assert_eq!(errors.email, Some(ValidationError::EmailInvalid));
        assert_eq!(errors.password, Some(ValidationError::PasswordRequired));

        assert!(Credentials::new("user@mail.com", "secret").validate().is_ok());
    }

    #[test]
    fn test_category_name_counts_chars() {
        assert_eq!(
            validate_category_name(""),
            Err(ValidationError::NameRequired)
        );
        assert_eq!(
            validate_category_name("ab").unwrap_err().to_string(),
            "Category name must be at least 3 characters"
        );
        // 多字节字符按字符计数
        assert!(validate_category_name("茶饮料").is_ok());
        assert!(validate_category_name("Tea").is_ok());
    }
}
