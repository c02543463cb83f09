use crate::{map::CiMap, prelude::*};
use std::{
    cell::{Cell, RefCell}, rc::Rc, sync::Arc
};

/// 深拷贝
///
/// 与`Clone`不同,`Rc`/`Arc`指向的值也会被复制,结果不与原值共享任何数据
pub trait DeepCopy {
    fn deep_copy(&self) -> Self;
}

macro_rules! impl_by_clone {
    ($($ty:ty),*) => {
        $(
            impl DeepCopy for $ty {
                #[inline]
                fn deep_copy(&self) -> Self { self.clone() }
            }
        )*
    };
}

impl_by_clone!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (), String
);

/// 引用本身不拥有数据,复制引用
impl<T: ?Sized> DeepCopy for &T {
    #[inline]
    fn deep_copy(&self) -> Self { *self }
}

impl<T: DeepCopy> DeepCopy for Box<T> {
    fn deep_copy(&self) -> Self { Box::new((**self).deep_copy()) }
}

impl<T: DeepCopy> DeepCopy for Rc<T> {
    fn deep_copy(&self) -> Self { Rc::new((**self).deep_copy()) }
}

impl<T: DeepCopy> DeepCopy for Arc<T> {
    fn deep_copy(&self) -> Self { Arc::new((**self).deep_copy()) }
}

impl<T: DeepCopy> DeepCopy for RefCell<T> {
    /// # Panics
    ///
    /// 值正在被可变借用时panic
    fn deep_copy(&self) -> Self { RefCell::new(self.borrow().deep_copy()) }
}

impl<T: Copy> DeepCopy for Cell<T> {
    fn deep_copy(&self) -> Self { Cell::new(self.get()) }
}

impl<T: DeepCopy> DeepCopy for Option<T> {
    fn deep_copy(&self) -> Self { self.as_ref().map(DeepCopy::deep_copy) }
}

impl<T: DeepCopy> DeepCopy for Vec<T> {
    fn deep_copy(&self) -> Self { self.iter().map(DeepCopy::deep_copy).collect() }
}

impl<A: DeepCopy, B: DeepCopy> DeepCopy for (A, B) {
    fn deep_copy(&self) -> Self { (self.0.deep_copy(), self.1.deep_copy()) }
}

impl<K: Clone + Hash + Eq, V: DeepCopy, H: BuildHasher + Clone> DeepCopy for HashMap<K, V, H> {
    fn deep_copy(&self) -> Self {
        let mut map = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        map.extend(self.iter().map(|(k, v)| (k.clone(), v.deep_copy())));
        map
    }
}

#[cfg(feature = "preserve_order")]
impl<K: Clone + Hash + Eq, V: DeepCopy, H: BuildHasher + Clone> DeepCopy for IndexMap<K, V, H> {
    fn deep_copy(&self) -> Self {
        let mut map = IndexMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        map.extend(self.iter().map(|(k, v)| (k.clone(), v.deep_copy())));
        map
    }
}

impl<K: Clone + Ord, V: DeepCopy> DeepCopy for BTreeMap<K, V> {
    fn deep_copy(&self) -> Self { self.iter().map(|(k, v)| (k.clone(), v.deep_copy())).collect() }
}

impl<K: CaseFold + Clone, V: DeepCopy, S: Backing, F: Fold> DeepCopy for CiMap<K, V, S, F> {
    fn deep_copy(&self) -> Self { self.iter().map(|(k, v)| (k.clone(), v.deep_copy())).collect() }
}
