use crate::{
    prelude::*, registry::{self, Variant}, store::Sorted
};
use std::{marker::PhantomData, ops::Index};

type Entries<K, V, S> = <S as Backing>::Map<<K as CaseFold>::Folded, (K, V)>;

/// 大小写不敏感,保留原始大小写的字典
///
/// 查找/删除/比较都使用折叠后的键,遍历时返回最近一次写入的原始键.
///
/// - `S`: 底层存储类型,默认为无序的`HashMap`
/// - `F`: 折叠规则,默认为Unicode小写
///
/// # Equality
///
/// 比较的是折叠后的键值投影.两个相同配置的字典使用底层存储的原生比较(`Ordered`区分顺序);
/// 不同配置之间只有双方都区分顺序时才比较顺序.因此比较满足自反和对称,**但不满足传递性**:
/// `ordered == unordered`且`unordered == reversed_ordered`时`ordered != reversed_ordered`.
/// 所以没有实现`Eq`.
pub struct CiMap<K: CaseFold, V, S: Backing = Unordered, F: Fold = Lowercase> {
    entries: Entries<K, V, S>,
    fold: PhantomData<F>
}

/// 保持插入顺序的大小写不敏感字典
#[cfg(feature = "preserve_order")]
pub type OrderedCiMap<K, V, F = Lowercase> = CiMap<K, V, Ordered, F>;

/// 按折叠后的键排序的大小写不敏感字典
pub type SortedCiMap<K, V, F = Lowercase> = CiMap<K, V, Sorted, F>;

impl<K: CaseFold, V, S: Backing, F: Fold> CiMap<K, V, S, F> {
    pub fn new() -> Self {
        CiMap {
            entries: <Entries<K, V, S> as Store<_, _>>::new(),
            fold: PhantomData
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        CiMap {
            entries: <Entries<K, V, S> as Store<_, _>>::with_capacity(capacity),
            fold: PhantomData
        }
    }

    /// 当前配置对应的类型
    pub fn variant() -> &'static Variant { registry::build::<S, F>() }

    #[inline]
    fn fold_key<Q: CaseFold<Folded = K::Folded> + ?Sized>(key: &Q) -> K::Folded { key.case_fold::<F>() }

    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.len() == 0 }

    /// 插入或更新
    ///
    /// 键已存在时替换为新的原始键和值,且不改变遍历位置
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let folded = key.case_fold::<F>();
        self.entries.insert(folded, (key, value)).map(|(_, v)| v)
    }

    /// 依次插入所有键值对,折叠后相同的键以最后一个为准
    pub fn update<I: IntoIterator<Item = (K, V)>>(&mut self, pairs: I) {
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }

    pub fn get<Q: CaseFold<Folded = K::Folded> + ?Sized>(&self, key: &Q) -> Option<&V> {
        self.entries.get(&Self::fold_key(key)).map(|(_, v)| v)
    }

    /// 获取值,不存在时返回`KeyNotFound`
    pub fn try_get<Q: CaseFold<Folded = K::Folded> + Debug + ?Sized>(&self, key: &Q) -> Result<&V> {
        self.get(key).ok_or_else(|| not_found(key))
    }

    /// 获取值,不存在时返回`default`
    pub fn get_or<'a, Q: CaseFold<Folded = K::Folded> + ?Sized>(&'a self, key: &Q, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    /// 获取原始键和值
    pub fn get_key_value<Q: CaseFold<Folded = K::Folded> + ?Sized>(&self, key: &Q) -> Option<(&K, &V)> {
        self.entries.get(&Self::fold_key(key)).map(|(k, v)| (k, v))
    }

    #[inline]
    pub(crate) fn get_folded(&self, folded: &K::Folded) -> Option<&V> { self.entries.get(folded).map(|(_, v)| v) }

    pub fn get_mut<Q: CaseFold<Folded = K::Folded> + ?Sized>(&mut self, key: &Q) -> Option<&mut V> {
        self.entries.get_mut(&Self::fold_key(key)).map(|(_, v)| v)
    }

    /// 不存在时插入`default`,存在时保留原始键和值
    pub fn get_or_insert(&mut self, key: K, default: V) -> &mut V { self.get_or_insert_with(key, || default) }

    pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let folded = key.case_fold::<F>();
        let (_, value) = self.entries.get_or_insert_with(folded, move || (key, default()));
        value
    }

    pub fn contains_key<Q: CaseFold<Folded = K::Folded> + ?Sized>(&self, key: &Q) -> bool {
        self.entries.get(&Self::fold_key(key)).is_some()
    }

    pub fn remove<Q: CaseFold<Folded = K::Folded> + ?Sized>(&mut self, key: &Q) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// 删除并返回原始键和值
    pub fn remove_entry<Q: CaseFold<Folded = K::Folded> + ?Sized>(&mut self, key: &Q) -> Option<(K, V)> {
        self.entries.remove(&Self::fold_key(key))
    }

    /// 删除,不存在时返回`KeyNotFound`
    pub fn delete<Q: CaseFold<Folded = K::Folded> + Debug + ?Sized>(&mut self, key: &Q) -> Result<()> {
        self.pop(key).map(drop)
    }

    /// 删除并返回值,不存在时返回`KeyNotFound`
    pub fn pop<Q: CaseFold<Folded = K::Folded> + Debug + ?Sized>(&mut self, key: &Q) -> Result<V> {
        match self.remove(key) {
            Some(value) => Ok(value),
            None => Err(not_found(key))
        }
    }

    /// 删除并返回值,不存在时返回`default`
    pub fn pop_or<Q: CaseFold<Folded = K::Folded> + ?Sized>(&mut self, key: &Q, default: V) -> V {
        self.remove(key).unwrap_or(default)
    }

    /// 删除最后一项
    ///
    /// 无序存储时删除任意一项
    pub fn pop_item(&mut self) -> Option<(K, V)> { self.entries.pop_last().map(|(_, entry)| entry) }

    pub fn clear(&mut self) { self.entries.clear() }

    /// 按底层存储的顺序遍历原始键和值
    pub fn iter(&self) -> Iter<'_, K, V, S> {
        Iter {
            inner: self.entries.iter()
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V, S> {
        IterMut {
            inner: self.entries.iter_mut()
        }
    }

    pub fn keys(&self) -> Keys<'_, K, V, S> { Keys { inner: self.iter() } }

    pub fn values(&self) -> Values<'_, K, V, S> { Values { inner: self.iter() } }

    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V, S> {
        ValuesMut {
            inner: self.iter_mut()
        }
    }

    /// 遍历折叠后的键和值
    pub fn folded_iter(&self) -> FoldedIter<'_, K, V, S> {
        FoldedIter {
            inner: self.entries.iter()
        }
    }

    /// 转换为以折叠后的键为键的底层存储
    pub fn to_folded(&self) -> S::Map<K::Folded, V>
    where
        V: Clone
    {
        let mut folded = <S::Map<K::Folded, V> as Store<_, _>>::with_capacity(self.len());
        for (key, value) in self.folded_iter() {
            folded.insert(key.clone(), value.clone());
        }
        folded
    }

    /// 导出键值对
    pub fn to_pairs(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    pub fn into_pairs(self) -> Vec<(K, V)> { self.into_iter().collect() }
}

//错误信息使用调用者传入的键,而不是折叠后的键
fn not_found<Q: Debug + ?Sized>(key: &Q) -> Error { Error::KeyNotFound(format!("{key:?}")) }

impl<K: CaseFold, V, S: Backing, F: Fold> Default for CiMap<K, V, S, F> {
    fn default() -> Self { Self::new() }
}

impl<K: CaseFold + Clone, V: Clone, S: Backing, F: Fold> Clone for CiMap<K, V, S, F> {
    /// 浅拷贝:值按其`Clone`语义复制,`Rc`/`Arc`等共享同一份数据
    fn clone(&self) -> Self {
        let mut entries = <Entries<K, V, S> as Store<_, _>>::with_capacity(self.len());
        for (folded, (key, value)) in self.entries.iter() {
            entries.insert(folded.clone(), (key.clone(), value.clone()));
        }
        CiMap {
            entries,
            fold: PhantomData
        }
    }
}

impl<K: CaseFold + Debug, V: Debug, S: Backing, F: Fold> Debug for CiMap<K, V, S, F> {
    /// `CiMap({"Hello": 1, "world": 2})`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", Self::variant().name())?;
        f.debug_map().entries(self.iter()).finish()?;
        f.write_str(")")
    }
}

impl<K: CaseFold + Display, V: Display, S: Backing, F: Fold> Display for CiMap<K, V, S, F> {
    /// `{Hello: 1, world: 2}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if first {
                write!(f, "{key}: {value}")?;
            } else {
                write!(f, ", {key}: {value}")?;
            }
            first = false;
        }
        f.write_str("}")
    }
}

impl<K, V, S, F, Q> Index<&Q> for CiMap<K, V, S, F>
where
    K: CaseFold,
    S: Backing,
    F: Fold,
    Q: CaseFold<Folded = K::Folded> + Debug + ?Sized
{
    type Output = V;

    /// # Panics
    ///
    /// 键不存在时panic
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("{}", not_found(key))
        }
    }
}

impl<K: CaseFold, V, S: Backing, F: Fold> FromIterator<(K, V)> for CiMap<K, V, S, F> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        map.update(iter);
        map
    }
}

impl<K: CaseFold, V, S: Backing, F: Fold> Extend<(K, V)> for CiMap<K, V, S, F> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) { self.update(iter) }
}

impl<K: CaseFold, V, S: Backing, F: Fold, const N: usize> From<[(K, V); N]> for CiMap<K, V, S, F> {
    fn from(pairs: [(K, V); N]) -> Self { pairs.into_iter().collect() }
}

impl<K: CaseFold, V, H, S: Backing, F: Fold> From<HashMap<K, V, H>> for CiMap<K, V, S, F> {
    fn from(map: HashMap<K, V, H>) -> Self { map.into_iter().collect() }
}

impl<K: CaseFold, V, S: Backing, F: Fold> From<BTreeMap<K, V>> for CiMap<K, V, S, F> {
    fn from(map: BTreeMap<K, V>) -> Self { map.into_iter().collect() }
}

#[cfg(feature = "preserve_order")]
impl<K: CaseFold, V, H, S: Backing, F: Fold> From<IndexMap<K, V, H>> for CiMap<K, V, S, F> {
    fn from(map: IndexMap<K, V, H>) -> Self { map.into_iter().collect() }
}

/// 原生字典转换为对应底层存储类型的大小写不敏感字典
///
/// - `HashMap` => `CiMap`
/// - `IndexMap` => `OrderedCiMap`
/// - `BTreeMap` => `SortedCiMap`
pub trait IntoCaseInsensitive {
    type Output;

    fn into_case_insensitive(self) -> Self::Output;
}

impl<K: CaseFold, V, H> IntoCaseInsensitive for HashMap<K, V, H> {
    type Output = CiMap<K, V, Unordered>;

    fn into_case_insensitive(self) -> Self::Output { self.into() }
}

impl<K: CaseFold, V> IntoCaseInsensitive for BTreeMap<K, V> {
    type Output = CiMap<K, V, Sorted>;

    fn into_case_insensitive(self) -> Self::Output { self.into() }
}

#[cfg(feature = "preserve_order")]
impl<K: CaseFold, V, H> IntoCaseInsensitive for IndexMap<K, V, H> {
    type Output = CiMap<K, V, Ordered>;

    fn into_case_insensitive(self) -> Self::Output { self.into() }
}

/// 以`map`的类型作为底层存储类型创建大小写不敏感字典
pub fn case_insensitive<M: IntoCaseInsensitive>(map: M) -> M::Output { map.into_case_insensitive() }

pub struct Iter<'a, K: CaseFold + 'a, V: 'a, S: Backing> {
    inner: <Entries<K, V, S> as Store<K::Folded, (K, V)>>::Iter<'a>
}

impl<'a, K: CaseFold + 'a, V: 'a, S: Backing> Iterator for Iter<'a, K, V, S> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> { self.inner.next().map(|(_, (k, v))| (k, v)) }

    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

pub struct IterMut<'a, K: CaseFold + 'a, V: 'a, S: Backing> {
    inner: <Entries<K, V, S> as Store<K::Folded, (K, V)>>::IterMut<'a>
}

impl<'a, K: CaseFold + 'a, V: 'a, S: Backing> Iterator for IterMut<'a, K, V, S> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> { self.inner.next().map(|(_, (k, v))| (&*k, v)) }

    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

pub struct Keys<'a, K: CaseFold + 'a, V: 'a, S: Backing> {
    inner: Iter<'a, K, V, S>
}

impl<'a, K: CaseFold + 'a, V: 'a, S: Backing> Iterator for Keys<'a, K, V, S> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<&'a K> { self.inner.next().map(|(k, _)| k) }

    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

pub struct Values<'a, K: CaseFold + 'a, V: 'a, S: Backing> {
    inner: Iter<'a, K, V, S>
}

impl<'a, K: CaseFold + 'a, V: 'a, S: Backing> Iterator for Values<'a, K, V, S> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<&'a V> { self.inner.next().map(|(_, v)| v) }

    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

pub struct ValuesMut<'a, K: CaseFold + 'a, V: 'a, S: Backing> {
    inner: IterMut<'a, K, V, S>
}

impl<'a, K: CaseFold + 'a, V: 'a, S: Backing> Iterator for ValuesMut<'a, K, V, S> {
    type Item = &'a mut V;

    #[inline]
    fn next(&mut self) -> Option<&'a mut V> { self.inner.next().map(|(_, v)| v) }

    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

pub struct FoldedIter<'a, K: CaseFold + 'a, V: 'a, S: Backing> {
    inner: <Entries<K, V, S> as Store<K::Folded, (K, V)>>::Iter<'a>
}

impl<'a, K: CaseFold + 'a, V: 'a, S: Backing> Iterator for FoldedIter<'a, K, V, S> {
    type Item = (&'a K::Folded, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> { self.inner.next().map(|(q, (_, v))| (q, v)) }

    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

pub struct IntoIter<K: CaseFold, V, S: Backing> {
    inner: <Entries<K, V, S> as Store<K::Folded, (K, V)>>::IntoIter
}

impl<K: CaseFold, V, S: Backing> Iterator for IntoIter<K, V, S> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<(K, V)> { self.inner.next().map(|(_, entry)| entry) }

    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

impl<'a, K: CaseFold, V, S: Backing, F: Fold> IntoIterator for &'a CiMap<K, V, S, F> {
    type IntoIter = Iter<'a, K, V, S>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, K: CaseFold, V, S: Backing, F: Fold> IntoIterator for &'a mut CiMap<K, V, S, F> {
    type IntoIter = IterMut<'a, K, V, S>;
    type Item = (&'a K, &'a mut V);

    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<K: CaseFold, V, S: Backing, F: Fold> IntoIterator for CiMap<K, V, S, F> {
    type IntoIter = IntoIter<K, V, S>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_entries()
        }
    }
}

/// 创建`CiMap`
///
/// ```
/// let d = dicti::cimap! { "Hello" => 1, "world" => 2 };
/// assert_eq!(d["HELLO"], 1);
/// ```
#[macro_export]
macro_rules! cimap {
    () => {
        <$crate::CiMap<_, _>>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        <$crate::CiMap<_, _>>::from([$(($key, $value)),+])
    };
}

/// 创建`OrderedCiMap`
#[cfg(feature = "preserve_order")]
#[macro_export]
macro_rules! ordered_cimap {
    () => {
        <$crate::OrderedCiMap<_, _>>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        <$crate::OrderedCiMap<_, _>>::from([$(($key, $value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario() {
        let mut d: CiMap<&str, i32> = CiMap::new();
        d.insert("Hello", 1);
        d.insert("world", 2);
        assert!(d.contains_key("WORLD"));
        let mut keys: Vec<_> = d.keys().copied().collect();
        keys.sort();
        assert_eq!(keys, ["Hello", "world"]);
        assert_eq!(d.insert("HELLO", 3), Some(1));
        assert_eq!(d["hello"], 3);
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn last_write_wins_casing() {
        let mut d: CiMap<String, i32> = CiMap::new();
        d.insert("Hello".to_owned(), 1);
        d.insert("HELLO".to_owned(), 2);
        assert_eq!(d.len(), 1);
        assert_eq!(d.get_key_value("hello"), Some((&"HELLO".to_owned(), &2)));
        assert_eq!(d.to_pairs(), [("HELLO".to_owned(), 2)]);
    }

    #[test]
    fn pop() {
        let mut d = CiMap::<&str, i32>::from([("A", 0)]);
        assert_eq!(d.pop("a"), Ok(0));
        assert_eq!(d.pop("a"), Err(Error::KeyNotFound("\"a\"".to_owned())));
        assert_eq!(d.pop("MiSSing"), Err(Error::KeyNotFound("\"MiSSing\"".to_owned())));
        assert_eq!(d.pop_or("a", 9), 9);
    }

    #[test]
    fn get_variants() {
        let d = CiMap::<&str, i32>::from([("Key", 1)]);
        assert_eq!(d.get("KEY"), Some(&1));
        assert_eq!(d.get("other"), None);
        assert_eq!(d.try_get("kEy"), Ok(&1));
        assert!(matches!(d.try_get("other"), Err(Error::KeyNotFound(_))));
        assert_eq!(*d.get_or("other", &7), 7);
        assert_eq!(*d.get_or("key", &7), 1);
    }

    #[test]
    #[should_panic(expected = "key not found: \"MiSSing\"")]
    fn index_missing() {
        let d = CiMap::<&str, i32>::new();
        let _ = d["MiSSing"];
    }

    #[test]
    fn delete_and_contains() {
        let mut d = CiMap::<&str, i32>::from([("One", 1), ("Two", 2)]);
        assert!(d.contains_key("ONE"));
        assert_eq!(d.delete("one"), Ok(()));
        assert!(!d.contains_key("One"));
        assert!(d.try_get("one").is_err());
        assert_eq!(d.delete("ONE"), Err(Error::KeyNotFound("\"ONE\"".to_owned())));
        assert_eq!(d.remove_entry("TWO"), Some(("Two", 2)));
        assert!(d.is_empty());
    }

    #[test]
    fn get_or_insert_keeps_existing() {
        let mut d = CiMap::<&str, i32>::from([("Name", 1)]);
        *d.get_or_insert("NAME", 5) += 1;
        assert_eq!(d.get_key_value("name"), Some((&"Name", &2)));
        assert_eq!(*d.get_or_insert_with("new", || 3), 3);
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn mutate_values() {
        let mut d = CiMap::<&str, i32>::from([("a", 1), ("B", 2)]);
        for value in d.values_mut() {
            *value *= 10;
        }
        if let Some(value) = d.get_mut("b") {
            *value += 1;
        }
        for (_, value) in &mut d {
            *value += 1;
        }
        assert_eq!(d["A"], 11);
        assert_eq!(d["b"], 22);
        let mut values: Vec<_> = d.values().copied().collect();
        values.sort();
        assert_eq!(values, [11, 22]);
    }

    #[test]
    fn clear() {
        let mut d = CiMap::<&str, i32>::from([("a", 1), ("B", 2)]);
        d.clear();
        assert_eq!(d.len(), 0);
        assert_eq!(d.iter().count(), 0);
        d.clear();
        assert!(d.is_empty());
    }

    #[test]
    fn non_text_keys() {
        let mut d = CiMap::<Option<i32>, &str>::new();
        d.insert(Some(2), "two");
        d.insert(None, "none");
        assert_eq!(d.get(&Some(2)), Some(&"two"));
        assert_eq!(d.get(&None::<i32>), Some(&"none"));
        assert!(!d.contains_key(&Some(3)));
    }

    #[test]
    fn folded_views() {
        let d = SortedCiMap::<&str, i32>::from([("B", 2), ("a", 1)]);
        let folded: Vec<_> = d.folded_iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(folded, [("a", 1), ("b", 2)]);
        assert_eq!(d.to_folded(), BTreeMap::from([("a".to_owned(), 1), ("b".to_owned(), 2)]));
        let keys: Vec<_> = d.keys().copied().collect();
        assert_eq!(keys, ["a", "B"]);
    }

    #[test]
    fn pop_item() {
        let mut d = SortedCiMap::<&str, i32>::from([("B", 2), ("a", 1)]);
        assert_eq!(d.pop_item(), Some(("B", 2)));
        assert_eq!(d.pop_item(), Some(("a", 1)));
        assert_eq!(d.pop_item(), None);
    }

    #[test]
    fn clone_is_independent() {
        let mut d = CiMap::<String, Vec<i32>>::from([("K".to_owned(), vec![1])]);
        let copy = d.clone();
        d.get_mut("k").unwrap().push(2);
        d.insert("other".to_owned(), vec![]);
        assert_eq!(copy.len(), 1);
        assert_eq!(copy["K"], [1]);
    }

    #[test]
    fn debug_and_display() {
        let d = SortedCiMap::<&str, i32>::from([("World", 2), ("hello", 1)]);
        assert_eq!(format!("{d:?}"), r#"SortedCiMap({"hello": 1, "World": 2})"#);
        assert_eq!(d.to_string(), "{hello: 1, World: 2}");
        assert_eq!(format!("{:?}", CiMap::<&str, i32>::new()), "CiMap({})");
    }

    #[test]
    fn from_native_maps() {
        let d = case_insensitive(HashMap::from([("X", 1)]));
        assert_eq!(CiMap::<&str, i32>::variant().name(), "CiMap");
        assert_eq!(d["x"], 1);
        let d = case_insensitive(BTreeMap::from([("b", 1), ("A", 2)]));
        assert_eq!(d.keys().copied().collect::<Vec<_>>(), ["A", "b"]);
    }

    #[test]
    fn macros() {
        let d = crate::cimap! { "Hello" => 1, "world" => 2, };
        assert_eq!(d["HELLO"], 1);
        let e: CiMap<&str, i32> = crate::cimap! {};
        assert!(e.is_empty());
    }

    #[cfg(feature = "preserve_order")]
    #[test]
    fn ordered_updates_keep_position() {
        let mut d = OrderedCiMap::<&str, i32>::from([("a", 1), ("b", 2), ("c", 3)]);
        d.insert("A", 10);
        assert_eq!(d.keys().copied().collect::<Vec<_>>(), ["A", "b", "c"]);
        d.remove("b");
        d.insert("B", 20);
        assert_eq!(d.keys().copied().collect::<Vec<_>>(), ["A", "c", "B"]);
        assert_eq!(d.pop_item(), Some(("B", 20)));
        let d = crate::ordered_cimap! { "z" => 1, "y" => 2 };
        assert_eq!(d.into_pairs(), [("z", 1), ("y", 2)]);
    }
}
