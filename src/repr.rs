use crate::{map::CiMap, parser, prelude::*};
#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 字典`Debug`输出的语法结构
///
/// # Syntax
///
/// ```txt
/// CiMap({"Hello": 1, "world": "text"})
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Repr<'a> {
    /// 类型名
    pub name: &'a str,
    /// 键值对,保持书写顺序
    #[cfg_attr(feature = "serde_support", serde(borrow))]
    pub pairs: Vec<(String, Value<'a>)>
}

/// 值
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum Value<'a> {
    /// 双引号字符串(已处理转义)
    ///
    /// ```txt
    /// "text\n"
    /// ```
    String(String),
    /// 单引号字符
    ///
    /// ```txt
    /// 'c'
    /// ```
    Char(char),
    /// 其它原样保留的文本
    ///
    /// ```txt
    /// 123
    /// Some([1, 2])
    /// ```
    Raw(&'a str)
}

impl<'a> Repr<'a> {
    /// 解析语法
    pub fn parse(input: &'a str) -> Result<Self> { parser::parse(input) }

    /// 转换为指定配置的字典
    ///
    /// 类型名必须与配置的类型名一致,折叠后相同的键以最后一个为准
    pub fn into_map<V, S, F>(self) -> Result<CiMap<String, V, S, F>>
    where
        V: FromStr,
        V::Err: Display,
        S: Backing,
        F: Fold
    {
        let expected = CiMap::<String, V, S, F>::variant().name();
        if self.name != expected {
            return Err(Error::Parse(format!("expected `{expected}`, found `{}`", self.name)));
        }
        let mut map = CiMap::with_capacity(self.pairs.len());
        for (key, value) in self.pairs {
            let parsed = value
                .as_text()
                .parse()
                .map_err(|e| Error::Parse(format!("invalid value for key {key:?}: {e}")))?;
            map.insert(key, parsed);
        }
        Ok(map)
    }
}

impl<'a> Display for Repr<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({{", self.name)?;
        let mut first = true;
        for (key, value) in &self.pairs {
            if first {
                write!(f, "{key:?}: {value:#}")?;
            } else {
                write!(f, ", {key:?}: {value:#}")?;
            }
            first = false;
        }
        f.write_str("})")
    }
}

impl<'a> Value<'a> {
    /// 去掉引号后的文本
    pub fn as_text(&self) -> Cow<'a, str> {
        match self {
            Value::String(v) => Cow::Owned(v.clone()),
            Value::Char(v) => Cow::Owned(v.to_string()),
            Value::Raw(v) => Cow::Borrowed(*v)
        }
    }
}

impl<'a> Display for Value<'a> {
    /// `{:#}`时保留引号
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(v) if f.alternate() => write!(f, "{v:?}"),
            Value::String(v) => f.write_str(v),
            Value::Char(v) if f.alternate() => write!(f, "{v:?}"),
            Value::Char(v) => write!(f, "{v}"),
            Value::Raw(v) => f.write_str(v)
        }
    }
}

impl<V, S, F> FromStr for CiMap<String, V, S, F>
where
    V: FromStr,
    V::Err: Display,
    S: Backing,
    F: Fold
{
    type Err = Error;

    /// 解析`Debug`输出
    fn from_str(s: &str) -> Result<Self> { Repr::parse(s)?.into_map() }
}
