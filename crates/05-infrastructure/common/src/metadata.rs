//! 元数据定义
//!
//! 提供依赖查找使用的类型标识

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 类型信息
///
/// 以 [`TypeId`] 作为唯一标识，类型名称仅用于日志和错误信息。
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    /// 类型ID
    pub id: TypeId,
    /// 完整类型名称
    pub name: &'static str,
}

impl TypeInfo {
    /// 从类型获取类型信息
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        match base.rfind("::") {
            Some(idx) => &self.name[idx + 2..],
            None => self.name,
        }
    }

    /// 是否为指定类型
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Presenter;

    #[test]
    fn test_identity_ignores_name() {
        let a = TypeInfo::of::<String>();
        let b = TypeInfo::of::<String>();
        assert_eq!(a, b);
        assert_ne!(a, TypeInfo::of::<i64>());
        assert!(a.is::<String>());
    }

    #[test]
    fn test_short_name() {
        assert_eq!(TypeInfo::of::<Presenter>().short_name(), "Presenter");
        assert_eq!(TypeInfo::of::<i64>().short_name(), "i64");
        assert_eq!(
            TypeInfo::of::<Option<String>>().short_name(),
            "Option<alloc::string::String>"
        );
    }
}
