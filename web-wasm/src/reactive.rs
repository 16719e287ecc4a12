//! シグナル更新の補助

use leptos::prelude::{Notify, UpdateUntracked};

/// 更新が `Ok` を返したときだけ購読者に通知する
///
/// 拒否された操作（未知のパス・不正なファイル）では状態が変わらないので再描画もしない。
/// シグナルが破棄済みなら `None`。
pub fn update_on_success<S, R, E>(
    signal: &S,
    fun: impl FnOnce(&mut <S as UpdateUntracked>::Value) -> Result<R, E>,
) -> Option<Result<R, E>>
where
    S: UpdateUntracked + Notify,
{
    let result = signal.try_update_untracked(fun);
    if matches!(result, Some(Ok(_))) {
        signal.notify();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use leaf_nutrition_common::{ClientConfig, Navigator, Pipeline, SelectedFile, View};
    use leptos::prelude::{DefinedAt, GetUntracked, Owner, RwSignal, WithUntracked};
    use std::cell::{Cell, RefCell};
    use std::panic::Location;

    /// 通知回数を数えるだけのシグナル
    struct Counted<T> {
        value: RefCell<T>,
        notified: Cell<usize>,
    }

    impl<T> Counted<T> {
        fn new(value: T) -> Self {
            Self { value: RefCell::new(value), notified: Cell::new(0) }
        }
    }

    impl<T> DefinedAt for Counted<T> {
        fn defined_at(&self) -> Option<&'static Location<'static>> {
            None
        }
    }

    impl<T> UpdateUntracked for Counted<T> {
        type Value = T;

        fn try_update_untracked<U>(&self, fun: impl FnOnce(&mut T) -> U) -> Option<U> {
            Some(fun(&mut self.value.borrow_mut()))
        }
    }

    impl<T> Notify for Counted<T> {
        fn notify(&self) {
            self.notified.set(self.notified.get() + 1);
        }
    }

    #[test]
    fn test_unknown_route_does_not_notify() {
        let navigator = Counted::new(Navigator::new("/home"));

        let result = update_on_success(&navigator, |n| n.navigate("/missing").ok_or(()));
        assert_eq!(result, Some(Err(())));
        assert_eq!(navigator.notified.get(), 0);
        assert_eq!(navigator.value.borrow().view(), View::Home);

        let route = update_on_success(&navigator, |n| n.navigate("/prediction").ok_or(()));
        assert!(matches!(route, Some(Ok(_))));
        assert_eq!(navigator.notified.get(), 1);
        assert_eq!(navigator.value.borrow().view(), View::Analysis);
    }

    #[test]
    fn test_rejected_file_does_not_notify() {
        let pipeline = Counted::new(Pipeline::<()>::new(ClientConfig::default()));

        let rejected = update_on_success(&pipeline, |p| p.select(SelectedFile::new("leaf.gif", "image/gif", 10, ())));
        assert!(matches!(rejected, Some(Err(_))));
        assert_eq!(pipeline.notified.get(), 0);
        assert!(!pipeline.value.borrow().analyze_enabled());

        let accepted = update_on_success(&pipeline, |p| p.select(SelectedFile::new("leaf.png", "image/png", 10, ())));
        assert!(matches!(accepted, Some(Ok(_))));
        assert_eq!(pipeline.notified.get(), 1);
        assert!(pipeline.value.borrow().analyze_enabled());
    }

    #[test]
    fn test_signal_keeps_value_on_error() {
        let owner = Owner::new();
        owner.set();

        let navigator = RwSignal::new(Navigator::new("/team"));
        assert_eq!(update_on_success(&navigator, |n| n.navigate("/nowhere").ok_or(())), Some(Err(())));
        assert_eq!(navigator.with_untracked(|n| n.view()), View::Team);

        let count = RwSignal::new(0u32);
        let _ = update_on_success(&count, |c| {
            *c += 1;
            Ok::<_, ()>(())
        });
        assert_eq!(count.get_untracked(), 1);
    }
}
