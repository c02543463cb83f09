use crate::{
    fold::{AsciiLowercase, Casefold}, prelude::*, store::Sorted
};
use lazy_static::lazy_static;
use log::{debug, trace};
use std::{
    any::TypeId, sync::{Mutex, MutexGuard, PoisonError}
};

/// 大小写不敏感字典的具体配置
///
/// 同一配置(底层存储类型+折叠规则)在进程内只有一个实例,可以用`std::ptr::eq`比较
#[derive(Debug, PartialEq, Eq)]
pub struct Variant {
    name: String,
    store: &'static str,
    fold: &'static str,
    ordered: bool
}

impl Variant {
    /// 类型名,用于`Debug`输出和解析
    pub fn name(&self) -> &str { &self.name }

    /// 底层原生字典类型名
    pub fn store(&self) -> &'static str { self.store }

    /// 折叠规则名
    pub fn fold(&self) -> &'static str { self.fold }

    /// 原生比较是否区分顺序
    pub fn is_ordered(&self) -> bool { self.ordered }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.name) }
}

lazy_static! {
    //(底层存储类型, 折叠规则) => 类型
    static ref REGISTRY: Mutex<HashMap<(TypeId, TypeId), &'static Variant>> = Mutex::new(HashMap::new());
}

fn register<S: Backing, F: Fold>(name: impl FnOnce() -> String) -> &'static Variant {
    let key = (TypeId::of::<S>(), TypeId::of::<F>());
    if let Some(variant) = lock().get(&key).copied() {
        return variant;
    }
    //类型名在锁外生成,`name`内部可以再次调用`build`
    let name = name();
    *lock().entry(key).or_insert_with(|| {
        let variant = Variant {
            name,
            store: S::NAME,
            fold: F::NAME,
            ordered: S::ORDER_SENSITIVE
        };
        debug!("register `{}` over `{}` with `{}` fold", variant.name, variant.store, variant.fold);
        Box::leak(Box::new(variant))
    })
}

fn lock() -> MutexGuard<'static, HashMap<(TypeId, TypeId), &'static Variant>> {
    REGISTRY.lock().unwrap_or_else(PoisonError::into_inner)
}

/// 获取指定配置的大小写不敏感字典类型
///
/// 首次调用时创建,之后返回同一个实例
pub fn build<S: Backing, F: Fold>() -> &'static Variant { register::<S, F>(|| format!("{}{}", F::PREFIX, S::VARIANT)) }

/// 获取指定配置的大小写不敏感字典类型并指定类型名
///
/// 类型名只在首次创建时生效
pub fn build_with_name<S: Backing, F: Fold>(name: impl Into<String>) -> &'static Variant {
    register::<S, F>(|| name.into())
}

/// 按名称获取大小写不敏感字典类型
///
/// - `store`: 原生字典类型名(`HashMap`/`IndexMap`/`BTreeMap`)
/// - `fold`: 折叠规则名(`lowercase`/`ascii`/`casefold`)
pub fn build_named(store: &str, fold: &str) -> Result<&'static Variant> {
    fn with_fold<S: Backing>(fold: &str) -> Result<&'static Variant> {
        if fold.eq_ignore_ascii_case(Lowercase::NAME) {
            Ok(build::<S, Lowercase>())
        } else if fold.eq_ignore_ascii_case(AsciiLowercase::NAME) {
            Ok(build::<S, AsciiLowercase>())
        } else if fold.eq_ignore_ascii_case(Casefold::NAME) {
            Ok(build::<S, Casefold>())
        } else {
            trace!("unknown fold rule `{fold}`");
            Err(Error::InvalidFold(fold.to_owned()))
        }
    }
    if store == Unordered::NAME {
        return with_fold::<Unordered>(fold);
    }
    #[cfg(feature = "preserve_order")]
    if store == Ordered::NAME {
        return with_fold::<Ordered>(fold);
    }
    if store == Sorted::NAME {
        return with_fold::<Sorted>(fold);
    }
    trace!("`{store}` is not a mapping type");
    Err(Error::InvalidBackingStore(store.to_owned()))
}
