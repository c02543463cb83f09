#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 键不存在
    ///
    /// 携带查找时传入的键(`Debug`形式)
    #[error("key not found: {0}")]
    KeyNotFound(String),
    /// 底层存储不满足可变字典的要求
    #[error("not a mapping type: {0}")]
    InvalidBackingStore(String),
    /// 未知的折叠规则
    #[error("unknown fold rule: {0}")]
    InvalidFold(String),
    /// 表示形式解析失败
    #[error("{0}")]
    Parse(String)
}

pub type Result<T> = std::result::Result<T, Error>;
