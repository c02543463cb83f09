use crate::{map::CiMap, prelude::*};

/// 可变字典
///
/// 供序列化等通用代码使用,不需要知道字典是否大小写敏感
pub trait Mapping<K, V> {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool { self.len() == 0 }
    fn get(&self, key: &K) -> Option<&V>;
    fn contains_key(&self, key: &K) -> bool { self.get(key).is_some() }
    fn insert(&mut self, key: K, value: V) -> Option<V>;
    fn remove(&mut self, key: &K) -> Option<V>;
    /// 按字典自身的顺序遍历键值对
    fn pairs(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_>;
}

impl<K: CaseFold, V, S: Backing, F: Fold> Mapping<K, V> for CiMap<K, V, S, F> {
    fn len(&self) -> usize { CiMap::len(self) }
    fn get(&self, key: &K) -> Option<&V> { CiMap::get(self, key) }
    fn contains_key(&self, key: &K) -> bool { CiMap::contains_key(self, key) }
    fn insert(&mut self, key: K, value: V) -> Option<V> { CiMap::insert(self, key, value) }
    fn remove(&mut self, key: &K) -> Option<V> { CiMap::remove(self, key) }
    fn pairs(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> { Box::new(self.iter()) }
}

impl<K: Hash + Eq, V, H: BuildHasher> Mapping<K, V> for HashMap<K, V, H> {
    fn len(&self) -> usize { HashMap::len(self) }
    fn get(&self, key: &K) -> Option<&V> { HashMap::get(self, key) }
    fn insert(&mut self, key: K, value: V) -> Option<V> { HashMap::insert(self, key, value) }
    fn remove(&mut self, key: &K) -> Option<V> { HashMap::remove(self, key) }
    fn pairs(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> { Box::new(self.iter()) }
}

impl<K: Ord, V> Mapping<K, V> for BTreeMap<K, V> {
    fn len(&self) -> usize { BTreeMap::len(self) }
    fn get(&self, key: &K) -> Option<&V> { BTreeMap::get(self, key) }
    fn insert(&mut self, key: K, value: V) -> Option<V> { BTreeMap::insert(self, key, value) }
    fn remove(&mut self, key: &K) -> Option<V> { BTreeMap::remove(self, key) }
    fn pairs(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> { Box::new(self.iter()) }
}

#[cfg(feature = "preserve_order")]
impl<K: Hash + Eq, V, H: BuildHasher> Mapping<K, V> for IndexMap<K, V, H> {
    fn len(&self) -> usize { IndexMap::len(self) }
    fn get(&self, key: &K) -> Option<&V> { IndexMap::get(self, key) }
    fn insert(&mut self, key: K, value: V) -> Option<V> { IndexMap::insert(self, key, value) }
    fn remove(&mut self, key: &K) -> Option<V> { IndexMap::shift_remove(self, key) }
    fn pairs(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> { Box::new(self.iter()) }
}
