use std::{
    collections::{btree_map, hash_map, BTreeMap, HashMap}, hash::Hash
};

/// 底层存储
///
/// 可变字典的最小能力集合,键为折叠后的键
pub trait Store<Q, E> {
    type Iter<'a>: Iterator<Item = (&'a Q, &'a E)>
    where
        Self: 'a,
        Q: 'a,
        E: 'a;
    type IterMut<'a>: Iterator<Item = (&'a Q, &'a mut E)>
    where
        Self: 'a,
        Q: 'a,
        E: 'a;
    type IntoIter: Iterator<Item = (Q, E)>;

    fn new() -> Self
    where
        Self: Sized
    {
        Self::with_capacity(0)
    }
    fn with_capacity(capacity: usize) -> Self;
    fn len(&self) -> usize;
    fn get(&self, key: &Q) -> Option<&E>;
    fn get_mut(&mut self, key: &Q) -> Option<&mut E>;
    /// 插入或替换
    ///
    /// 已存在的键必须保持原位置
    fn insert(&mut self, key: Q, entry: E) -> Option<E>;
    /// 不存在时插入,返回可变引用
    fn get_or_insert_with(&mut self, key: Q, entry: impl FnOnce() -> E) -> &mut E;
    /// 删除
    ///
    /// 其余项的相对顺序保持不变
    fn remove(&mut self, key: &Q) -> Option<E>;
    /// 删除最后一项,无序存储删除任意一项
    fn pop_last(&mut self) -> Option<(Q, E)>;
    fn clear(&mut self);
    fn iter(&self) -> Self::Iter<'_>;
    fn iter_mut(&mut self) -> Self::IterMut<'_>;
    fn into_entries(self) -> Self::IntoIter;
}

/// 底层存储类型
pub trait Backing: 'static {
    /// 原生字典类型名
    const NAME: &'static str;
    /// 大小写不敏感字典类型名
    const VARIANT: &'static str;
    /// 原生比较是否区分顺序
    const ORDER_SENSITIVE: bool;

    type Map<Q: Hash + Ord + Clone, E>: Store<Q, E>;
}

/// 无序存储(`HashMap`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unordered;

impl Backing for Unordered {
    const NAME: &'static str = "HashMap";
    const VARIANT: &'static str = "CiMap";
    const ORDER_SENSITIVE: bool = false;

    type Map<Q: Hash + Ord + Clone, E> = HashMap<Q, E>;
}

impl<Q: Hash + Eq + Clone, E> Store<Q, E> for HashMap<Q, E> {
    type Iter<'a> = hash_map::Iter<'a, Q, E>
    where
        Self: 'a,
        Q: 'a,
        E: 'a;
    type IterMut<'a> = hash_map::IterMut<'a, Q, E>
    where
        Self: 'a,
        Q: 'a,
        E: 'a;
    type IntoIter = hash_map::IntoIter<Q, E>;

    fn with_capacity(capacity: usize) -> Self { HashMap::with_capacity(capacity) }
    fn len(&self) -> usize { HashMap::len(self) }
    fn get(&self, key: &Q) -> Option<&E> { HashMap::get(self, key) }
    fn get_mut(&mut self, key: &Q) -> Option<&mut E> { HashMap::get_mut(self, key) }
    fn insert(&mut self, key: Q, entry: E) -> Option<E> { HashMap::insert(self, key, entry) }
    fn get_or_insert_with(&mut self, key: Q, entry: impl FnOnce() -> E) -> &mut E {
        self.entry(key).or_insert_with(entry)
    }
    fn remove(&mut self, key: &Q) -> Option<E> { HashMap::remove(self, key) }
    fn pop_last(&mut self) -> Option<(Q, E)> {
        let key = self.keys().next()?.clone();
        self.remove_entry(&key)
    }
    fn clear(&mut self) { HashMap::clear(self) }
    fn iter(&self) -> Self::Iter<'_> { HashMap::iter(self) }
    fn iter_mut(&mut self) -> Self::IterMut<'_> { HashMap::iter_mut(self) }
    fn into_entries(self) -> Self::IntoIter { IntoIterator::into_iter(self) }
}

/// 保持插入顺序的存储(`IndexMap`)
///
/// 更新已存在的键不改变其位置,删除后重新插入的键追加到末尾
#[cfg(feature = "preserve_order")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ordered;

#[cfg(feature = "preserve_order")]
impl Backing for Ordered {
    const NAME: &'static str = "IndexMap";
    const VARIANT: &'static str = "OrderedCiMap";
    const ORDER_SENSITIVE: bool = true;

    type Map<Q: Hash + Ord + Clone, E> = indexmap::IndexMap<Q, E>;
}

#[cfg(feature = "preserve_order")]
impl<Q: Hash + Eq + Clone, E> Store<Q, E> for indexmap::IndexMap<Q, E> {
    type Iter<'a> = indexmap::map::Iter<'a, Q, E>
    where
        Self: 'a,
        Q: 'a,
        E: 'a;
    type IterMut<'a> = indexmap::map::IterMut<'a, Q, E>
    where
        Self: 'a,
        Q: 'a,
        E: 'a;
    type IntoIter = indexmap::map::IntoIter<Q, E>;

    fn with_capacity(capacity: usize) -> Self { indexmap::IndexMap::with_capacity(capacity) }
    fn len(&self) -> usize { indexmap::IndexMap::len(self) }
    fn get(&self, key: &Q) -> Option<&E> { indexmap::IndexMap::get(self, key) }
    fn get_mut(&mut self, key: &Q) -> Option<&mut E> { indexmap::IndexMap::get_mut(self, key) }
    fn insert(&mut self, key: Q, entry: E) -> Option<E> { indexmap::IndexMap::insert(self, key, entry) }
    fn get_or_insert_with(&mut self, key: Q, entry: impl FnOnce() -> E) -> &mut E {
        self.entry(key).or_insert_with(entry)
    }
    fn remove(&mut self, key: &Q) -> Option<E> { self.shift_remove(key) }
    fn pop_last(&mut self) -> Option<(Q, E)> { self.pop() }
    fn clear(&mut self) { indexmap::IndexMap::clear(self) }
    fn iter(&self) -> Self::Iter<'_> { indexmap::IndexMap::iter(self) }
    fn iter_mut(&mut self) -> Self::IterMut<'_> { indexmap::IndexMap::iter_mut(self) }
    fn into_entries(self) -> Self::IntoIter { IntoIterator::into_iter(self) }
}

/// 按折叠后的键排序的存储(`BTreeMap`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sorted;

impl Backing for Sorted {
    const NAME: &'static str = "BTreeMap";
    const VARIANT: &'static str = "SortedCiMap";
    const ORDER_SENSITIVE: bool = false;

    type Map<Q: Hash + Ord + Clone, E> = BTreeMap<Q, E>;
}

impl<Q: Ord, E> Store<Q, E> for BTreeMap<Q, E> {
    type Iter<'a> = btree_map::Iter<'a, Q, E>
    where
        Self: 'a,
        Q: 'a,
        E: 'a;
    type IterMut<'a> = btree_map::IterMut<'a, Q, E>
    where
        Self: 'a,
        Q: 'a,
        E: 'a;
    type IntoIter = btree_map::IntoIter<Q, E>;

    fn with_capacity(_capacity: usize) -> Self { BTreeMap::new() }
    fn len(&self) -> usize { BTreeMap::len(self) }
    fn get(&self, key: &Q) -> Option<&E> { BTreeMap::get(self, key) }
    fn get_mut(&mut self, key: &Q) -> Option<&mut E> { BTreeMap::get_mut(self, key) }
    fn insert(&mut self, key: Q, entry: E) -> Option<E> { BTreeMap::insert(self, key, entry) }
    fn get_or_insert_with(&mut self, key: Q, entry: impl FnOnce() -> E) -> &mut E {
        self.entry(key).or_insert_with(entry)
    }
    fn remove(&mut self, key: &Q) -> Option<E> { BTreeMap::remove(self, key) }
    fn pop_last(&mut self) -> Option<(Q, E)> { BTreeMap::pop_last(self) }
    fn clear(&mut self) { BTreeMap::clear(self) }
    fn iter(&self) -> Self::Iter<'_> { BTreeMap::iter(self) }
    fn iter_mut(&mut self) -> Self::IterMut<'_> { BTreeMap::iter_mut(self) }
    fn into_entries(self) -> Self::IntoIter { IntoIterator::into_iter(self) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<S: Store<String, u32>>() -> S {
        let mut store = S::new();
        assert_eq!(store.insert("b".to_owned(), 1), None);
        assert_eq!(store.insert("a".to_owned(), 2), None);
        assert_eq!(store.insert("c".to_owned(), 3), None);
        assert_eq!(store.insert("b".to_owned(), 4), Some(1));
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(&"b".to_owned()), Some(&4));
        *store.get_mut(&"c".to_owned()).unwrap() += 10;
        assert_eq!(store.get(&"c".to_owned()), Some(&13));
        assert_eq!(*store.get_or_insert_with("c".to_owned(), || 0), 13);
        store
    }

    #[test]
    fn hash_map() {
        let mut store = exercise::<HashMap<String, u32>>();
        assert_eq!(store.remove(&"a".to_owned()), Some(2));
        assert_eq!(store.remove(&"a".to_owned()), None);
        assert!(store.pop_last().is_some());
        assert_eq!(store.len(), 1);
        store.clear();
        assert_eq!(store.iter().count(), 0);
    }

    #[cfg(feature = "preserve_order")]
    #[test]
    fn index_map_keeps_positions() {
        let mut store = exercise::<indexmap::IndexMap<String, u32>>();
        let keys: Vec<_> = store.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["b", "a", "c"]);
        Store::remove(&mut store, &"b".to_owned());
        let keys: Vec<_> = store.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["a", "c"]);
        store.insert("b".to_owned(), 0);
        assert_eq!(store.pop_last(), Some(("b".to_owned(), 0)));
        let entries: Vec<_> = store.into_entries().collect();
        assert_eq!(entries, [("a".to_owned(), 2), ("c".to_owned(), 13)]);
    }

    #[test]
    fn btree_map_sorts() {
        let mut store = exercise::<BTreeMap<String, u32>>();
        for (_, v) in store.iter_mut() {
            *v = 0;
        }
        let keys: Vec<_> = store.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["a", "b", "c"]);
        assert_eq!(store.pop_last(), Some(("c".to_owned(), 0)));
    }
}
