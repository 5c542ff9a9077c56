#[cfg(feature = "loom")]
mod imp {
    pub(crate) use loom::{
        sync::{
            atomic::{AtomicI64, Ordering},
            Condvar, Mutex, MutexGuard,
        },
        thread,
    };
}

#[cfg(not(feature = "loom"))]
mod imp {
    pub(crate) use std::{
        sync::{
            atomic::{AtomicI64, Ordering},
            Condvar, Mutex, MutexGuard,
        },
        thread,
    };
}

pub(crate) use imp::*;
