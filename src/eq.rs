use crate::{map::CiMap, prelude::*, store::Sorted};

/// 比较两个字典折叠后的键值投影
///
/// 双方底层存储都区分顺序时按位置比较,否则按键比较.
/// 相同配置时即为底层存储的原生比较.
fn projection_eq<K1, V1, S1, F1, K2, V2, S2, F2>(
    lhs: &CiMap<K1, V1, S1, F1>,
    rhs: &CiMap<K2, V2, S2, F2>,
    eq: impl Fn(&V1, &V2) -> bool
) -> bool
where
    K1: CaseFold,
    K2: CaseFold<Folded = K1::Folded>,
    S1: Backing,
    S2: Backing,
    F1: Fold,
    F2: Fold
{
    if lhs.len() != rhs.len() {
        return false;
    }
    if S1::ORDER_SENSITIVE && S2::ORDER_SENSITIVE {
        lhs.folded_iter().zip(rhs.folded_iter()).all(|((k1, v1), (k2, v2))| k1 == k2 && eq(v1, v2))
    } else {
        lhs.folded_iter().all(|(key, v1)| rhs.get_folded(key).map_or(false, |v2| eq(v1, v2)))
    }
}

impl<K1, V1, S1, F1, K2, V2, S2, F2> PartialEq<CiMap<K2, V2, S2, F2>> for CiMap<K1, V1, S1, F1>
where
    K1: CaseFold,
    K2: CaseFold<Folded = K1::Folded>,
    V1: PartialEq<V2>,
    S1: Backing,
    S2: Backing,
    F1: Fold,
    F2: Fold
{
    fn eq(&self, other: &CiMap<K2, V2, S2, F2>) -> bool { projection_eq(self, other, |v1, v2| v1 == v2) }
}

/// 原生字典先转换为对应存储类型的大小写不敏感字典(借用键值),再按投影比较
macro_rules! impl_native_eq {
    ($backing:ty, $native:ident<$($param:ident),*>) => {
        impl<K1, V1, S1, F1, $($param),*> PartialEq<$native<$($param),*>> for CiMap<K1, V1, S1, F1>
        where
            K1: CaseFold,
            K2: CaseFold<Folded = K1::Folded>,
            V1: PartialEq<V2>,
            S1: Backing,
            F1: Fold
        {
            fn eq(&self, other: &$native<$($param),*>) -> bool {
                let other: CiMap<&K2, &V2, $backing, F1> = other.iter().collect();
                projection_eq(self, &other, |v1, v2| v1 == *v2)
            }
        }

        impl<K1, V1, S1, F1, $($param),*> PartialEq<CiMap<K1, V1, S1, F1>> for $native<$($param),*>
        where
            K1: CaseFold,
            K2: CaseFold<Folded = K1::Folded>,
            V1: PartialEq<V2>,
            S1: Backing,
            F1: Fold
        {
            fn eq(&self, other: &CiMap<K1, V1, S1, F1>) -> bool { other == self }
        }
    };
}

impl_native_eq!(Unordered, HashMap<K2, V2, H>);
impl_native_eq!(Sorted, BTreeMap<K2, V2>);
#[cfg(feature = "preserve_order")]
impl_native_eq!(Ordered, IndexMap<K2, V2, H>);
