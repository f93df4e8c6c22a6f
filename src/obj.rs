use std::{
    panic::Location,
    sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak},
};

/// Storage behind an `Obj`: the value plus the call site of its latest borrow.
pub struct Shared<T: ?Sized> {
    borrowed_at: Mutex<Option<&'static Location<'static>>>,
    value: RwLock<T>,
}

impl<T: ?Sized> Shared<T> {
    fn record(&self, location: &'static Location<'static>) {
        if let Ok(mut borrowed_at) = self.borrowed_at.lock() {
            *borrowed_at = Some(location);
        }
    }

    #[track_caller]
    fn conflict(&self) -> ! {
        let type_name = std::any::type_name::<T>();
        let previous = self.borrowed_at.lock().ok().and_then(|site| *site);
        let here = Location::caller();
        match previous {
            Some(site) => {
                log::error!("Obj<{type_name}> borrowed at {here}, already borrowed at {site}");
                panic!("Obj<{type_name}> already borrowed at {site}");
            }
            None => panic!("Obj<{type_name}> already borrowed"),
        }
    }
}

/// Shared handle to a scene object. Borrows are checked at runtime and a
/// conflicting borrow panics, naming where the object was last borrowed.
pub struct Obj<T: ?Sized>(Arc<Shared<T>>);

/// Non-owning handle, used by action targets so a control never keeps its
/// receiver alive.
pub struct WeakObj<T: ?Sized>(Weak<Shared<T>>);

impl<T> Obj<T> {
    pub fn new(value: T) -> Self {
        Obj(Arc::new(Shared {
            borrowed_at: Mutex::new(None),
            value: RwLock::new(value),
        }))
    }
}

impl<T: ?Sized> Obj<T> {
    /// Wraps existing storage. Together with `shared` this lets
    /// `obj_upcast!` turn an `Obj<W>` into an `Obj<dyn Trait>`.
    pub fn from_shared(shared: Arc<Shared<T>>) -> Self {
        Obj(shared)
    }
    pub fn shared(&self) -> Arc<Shared<T>> {
        self.0.clone()
    }
    pub fn downgrade(&self) -> WeakObj<T> {
        WeakObj(Arc::downgrade(&self.0))
    }

    #[track_caller]
    pub fn get(&self) -> RwLockReadGuard<'_, T> {
        let Ok(guard) = self.0.value.try_read() else {
            self.0.conflict()
        };
        self.0.record(Location::caller());
        guard
    }
    #[track_caller]
    pub fn get_mut(&self) -> RwLockWriteGuard<'_, T> {
        let Ok(guard) = self.0.value.try_write() else {
            self.0.conflict()
        };
        self.0.record(Location::caller());
        guard
    }
}

impl<T: ?Sized> Clone for Obj<T> {
    fn clone(&self) -> Self {
        Obj(self.0.clone())
    }
}

impl<T: ?Sized> WeakObj<T> {
    pub fn try_upgrade(&self) -> Option<Obj<T>> {
        self.0.upgrade().map(Obj)
    }
}
