use std::{
    borrow::Cow, fmt::Debug, hash::Hash, rc::Rc, sync::Arc
};

/// 键折叠规则
///
/// 折叠结果相同的键视为同一个键
pub trait Fold: 'static {
    /// 规则名称
    const NAME: &'static str;
    /// 类型名前缀
    const PREFIX: &'static str;

    /// 折叠字符串
    fn fold_str(s: &str) -> String;
}

/// Unicode小写
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Lowercase;

impl Fold for Lowercase {
    const NAME: &'static str = "lowercase";
    const PREFIX: &'static str = "";

    #[inline]
    fn fold_str(s: &str) -> String { s.to_lowercase() }
}

/// ASCII小写
///
/// 非ASCII字符保持原样
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AsciiLowercase;

impl Fold for AsciiLowercase {
    const NAME: &'static str = "ascii";
    const PREFIX: &'static str = "Ascii";

    #[inline]
    fn fold_str(s: &str) -> String { s.to_ascii_lowercase() }
}

/// Unicode完整大小写折叠
///
/// `ß`折叠为`ss`,多字符展开后比较
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Casefold;

impl Fold for Casefold {
    const NAME: &'static str = "casefold";
    const PREFIX: &'static str = "Casefold";

    #[inline]
    fn fold_str(s: &str) -> String { caseless::default_case_fold_str(s) }
}

/// 可折叠的键
///
/// 文本类型的键按规则折叠,其它类型原样比较
pub trait CaseFold {
    /// 折叠后的比较形式
    type Folded: Hash + Ord + Clone + Debug;

    fn case_fold<F: Fold>(&self) -> Self::Folded;
}

/// 使用默认规则(`Lowercase`)折叠键
#[inline]
pub fn fold<K: CaseFold + ?Sized>(key: &K) -> K::Folded { key.case_fold::<Lowercase>() }

impl CaseFold for str {
    type Folded = String;

    #[inline]
    fn case_fold<F: Fold>(&self) -> String { F::fold_str(self) }
}

impl CaseFold for char {
    type Folded = String;

    #[inline]
    fn case_fold<F: Fold>(&self) -> String { F::fold_str(self.encode_utf8(&mut [0; 4])) }
}

macro_rules! impl_text {
    ($($ty:ty),*) => {
        $(
            impl CaseFold for $ty {
                type Folded = String;

                #[inline]
                fn case_fold<F: Fold>(&self) -> String { F::fold_str(self.as_ref()) }
            }
        )*
    };
}

impl_text!(String, Cow<'_, str>, Box<str>, Rc<str>, Arc<str>);

macro_rules! impl_identity {
    ($($ty:ty),*) => {
        $(
            impl CaseFold for $ty {
                type Folded = $ty;

                #[inline]
                fn case_fold<F: Fold>(&self) -> $ty { *self }
            }
        )*
    };
}

impl_identity!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, ());

impl<T: CaseFold + ?Sized> CaseFold for &T {
    type Folded = T::Folded;

    #[inline]
    fn case_fold<F: Fold>(&self) -> T::Folded { (**self).case_fold::<F>() }
}

impl<T: CaseFold> CaseFold for Option<T> {
    type Folded = Option<T::Folded>;

    fn case_fold<F: Fold>(&self) -> Self::Folded { self.as_ref().map(|v| v.case_fold::<F>()) }
}

impl<A: CaseFold, B: CaseFold> CaseFold for (A, B) {
    type Folded = (A::Folded, B::Folded);

    fn case_fold<F: Fold>(&self) -> Self::Folded { (self.0.case_fold::<F>(), self.1.case_fold::<F>()) }
}

impl<A: CaseFold, B: CaseFold, C: CaseFold> CaseFold for (A, B, C) {
    type Folded = (A::Folded, B::Folded, C::Folded);

    fn case_fold<F: Fold>(&self) -> Self::Folded {
        (self.0.case_fold::<F>(), self.1.case_fold::<F>(), self.2.case_fold::<F>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text() {
        assert_eq!(fold("Hello"), "hello");
        assert_eq!(fold(&String::from("WORLD!")), "world!");
        assert_eq!(fold(&Cow::Borrowed("ÄÖÜ")), "äöü");
        assert_eq!(fold(&'Q'), "q");
        assert_eq!("ÄBC".case_fold::<AsciiLowercase>(), "Äbc");
        assert_eq!("Straße".case_fold::<Casefold>(), "strasse");
        assert_eq!("STRASSE".case_fold::<Casefold>(), "strasse");
        assert_ne!(fold("straße"), fold("STRASSE"));
    }

    #[test]
    fn identity() {
        assert_eq!(fold(&2), 2);
        assert_eq!(fold(&true), true);
        assert_eq!(fold(&()), ());
        assert_eq!(fold(&None::<&str>), None);
        assert_eq!(fold(&(1u8, "Ab")), (1u8, "ab".to_owned()));
    }

    #[test]
    fn idempotent() {
        for key in ["Hello", "ÄÖÜ", "İstanbul", "ΣΊΣΥΦΟΣ", "straße", ""] {
            let once = fold(key);
            assert_eq!(fold(&once), once);
            let once = key.case_fold::<AsciiLowercase>();
            assert_eq!(once.case_fold::<AsciiLowercase>(), once);
            let once = key.case_fold::<Casefold>();
            assert_eq!(once.case_fold::<Casefold>(), once);
        }
    }

    #[test]
    fn borrowed_and_owned_agree() {
        let owned: Box<str> = "MiXeD".into();
        assert_eq!(fold(&owned), fold("mixed"));
        assert_eq!(fold(&Rc::<str>::from("A")), fold(&Arc::<str>::from("a")));
    }
}
