use crate::{map::CiMap, mapping::Mapping, prelude::*};
use serde::{
    de::{MapAccess, Visitor}, ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer
};
use std::marker::PhantomData;

/// 按普通字典序列化,保留原始键
pub fn serialize_mapping<K, V, M, S>(map: &M, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    K: Serialize,
    V: Serialize,
    M: Mapping<K, V> + ?Sized,
    S: Serializer
{
    let mut state = serializer.serialize_map(Some(map.len()))?;
    for (key, value) in map.pairs() {
        state.serialize_entry(key, value)?;
    }
    state.end()
}

impl<K, V, S, F> Serialize for CiMap<K, V, S, F>
where
    K: CaseFold + Serialize,
    V: Serialize,
    S: Backing,
    F: Fold
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error> {
        serialize_mapping(self, serializer)
    }
}

struct CiMapVisitor<K: CaseFold, V, S: Backing, F: Fold> {
    marker: PhantomData<fn() -> CiMap<K, V, S, F>>
}

impl<'de, K, V, S, F> Visitor<'de> for CiMapVisitor<K, V, S, F>
where
    K: CaseFold + Deserialize<'de>,
    V: Deserialize<'de>,
    S: Backing,
    F: Fold
{
    type Value = CiMap<K, V, S, F>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result { formatter.write_str("a map") }

    /// 折叠后相同的键以最后一个为准
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut map = CiMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, K, V, S, F> Deserialize<'de> for CiMap<K, V, S, F>
where
    K: CaseFold + Deserialize<'de>,
    V: Deserialize<'de>,
    S: Backing,
    F: Fold
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(CiMapVisitor {
            marker: PhantomData
        })
    }
}
