use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use error_stack::Report;
use rust_decimal::Decimal;
use tokio::sync::OwnedMutexGuard;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::prelude::entity::{
    Cart, Item, ItemDescription, ItemId, ItemName, ItemPrice, User, UserId, UserName, UserOrder,
};
use kernel::KernelError;

pub use self::{cart::*, item::*, order::*, user::*};

mod cart;
mod item;
mod order;
mod user;

const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// Process-local store. Cloning shares the same tables.
#[derive(Clone)]
pub struct InMemoryDatabase {
    store: Arc<Store>,
    lock_timeout: Duration,
}

impl Default for InMemoryDatabase {
    fn default() -> Self {
        Self::with_catalog(default_catalog())
    }
}

impl InMemoryDatabase {
    pub fn with_catalog(items: impl IntoIterator<Item = Item>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (*item.id(), item))
            .collect::<BTreeMap<_, _>>();
        Self {
            store: Arc::new(Store {
                users: RwLock::new(UserTable::default()),
                items,
                carts: RwLock::new(HashMap::new()),
                orders: RwLock::new(HashMap::new()),
                locks: Mutex::new(HashMap::new()),
            }),
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }

    /// Upper bound on how long [`DatabaseConnection::transact_for`] waits for a busy user.
    pub fn lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }
}

fn default_catalog() -> Vec<Item> {
    vec![
        Item::new(
            ItemId::new(1),
            ItemName::new("Round Widget"),
            ItemPrice::new(Decimal::new(299, 2)),
            ItemDescription::new("A widget that is round"),
        ),
        Item::new(
            ItemId::new(2),
            ItemName::new("Square Widget"),
            ItemPrice::new(Decimal::new(199, 2)),
            ItemDescription::new("A widget that is square"),
        ),
    ]
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;

    async fn transact(&self) -> error_stack::Result<InMemoryTransaction, KernelError> {
        Ok(InMemoryTransaction::new(Arc::clone(&self.store), None))
    }

    async fn transact_for(
        &self,
        user: &UserId,
    ) -> error_stack::Result<InMemoryTransaction, KernelError> {
        let user_lock = {
            let mut locks = lock(&self.store.locks)?;
            Arc::clone(locks.entry(*user).or_default())
        };
        let guard = tokio::time::timeout(self.lock_timeout, user_lock.lock_owned())
            .await
            .map_err(|_| {
                Report::new(KernelError::Timeout)
                    .attach_printable(format!("User {:?} is busy", user))
            })?;
        Ok(InMemoryTransaction::new(
            Arc::clone(&self.store),
            Some(guard),
        ))
    }
}

pub(in crate::database) struct Store {
    users: RwLock<UserTable>,
    items: BTreeMap<ItemId, Item>,
    carts: RwLock<HashMap<UserId, Cart>>,
    orders: RwLock<HashMap<UserId, Vec<UserOrder>>>,
    locks: Mutex<HashMap<UserId, Arc<tokio::sync::Mutex<()>>>>,
}

pub(in crate::database) struct UserTable {
    by_id: BTreeMap<UserId, User>,
    by_name: HashMap<UserName, UserId>,
    next_id: i64,
}

impl Default for UserTable {
    fn default() -> Self {
        Self {
            by_id: BTreeMap::new(),
            by_name: HashMap::new(),
            next_id: 1,
        }
    }
}

/// Inverse of a single write, applied newest first on rollback.
enum Undo {
    CreateUser(UserId),
    WriteCart { user_id: UserId, previous: Option<Cart> },
    AppendOrder(UserId),
}

/// Unit of work against [`InMemoryDatabase`]. Writes apply immediately and are
/// rewound on [`Transaction::roll_back`] or when dropped without a commit.
pub struct InMemoryTransaction {
    store: Arc<Store>,
    undo: Vec<Undo>,
    _guard: Option<OwnedMutexGuard<()>>,
}

impl InMemoryTransaction {
    fn new(store: Arc<Store>, guard: Option<OwnedMutexGuard<()>>) -> Self {
        Self {
            store,
            undo: Vec::new(),
            _guard: guard,
        }
    }

    pub(in crate::database) fn store(&self) -> &Store {
        &self.store
    }

    fn record(&mut self, undo: Undo) {
        self.undo.push(undo);
    }

    fn rewind(&mut self) -> error_stack::Result<(), KernelError> {
        while let Some(undo) = self.undo.pop() {
            match undo {
                Undo::CreateUser(id) => {
                    let mut users = write(&self.store.users)?;
                    if let Some(user) = users.by_id.remove(&id) {
                        users.by_name.remove(user.name());
                    }
                }
                Undo::WriteCart { user_id, previous } => {
                    let mut carts = write(&self.store.carts)?;
                    match previous {
                        Some(cart) => carts.insert(user_id, cart),
                        None => carts.remove(&user_id),
                    };
                }
                Undo::AppendOrder(user_id) => {
                    let mut orders = write(&self.store.orders)?;
                    if let Some(history) = orders.get_mut(&user_id) {
                        history.pop();
                    }
                }
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(mut self) -> error_stack::Result<(), KernelError> {
        self.undo.clear();
        Ok(())
    }

    async fn roll_back(mut self) -> error_stack::Result<(), KernelError> {
        self.rewind()
    }
}

impl Drop for InMemoryTransaction {
    fn drop(&mut self) {
        if self.undo.is_empty() {
            return;
        }
        tracing::debug!("Rolling back {} uncommitted write(s)", self.undo.len());
        if let Err(report) = self.rewind() {
            tracing::error!("Failed to roll back transaction: {report:?}");
        }
    }
}

fn poisoned() -> Report<KernelError> {
    Report::new(KernelError::Internal).attach_printable("In-memory store lock poisoned")
}

pub(in crate::database) fn read<T>(
    lock: &RwLock<T>,
) -> error_stack::Result<RwLockReadGuard<'_, T>, KernelError> {
    lock.read().map_err(|_| poisoned())
}

pub(in crate::database) fn write<T>(
    lock: &RwLock<T>,
) -> error_stack::Result<RwLockWriteGuard<'_, T>, KernelError> {
    lock.write().map_err(|_| poisoned())
}

fn lock<T>(mutex: &Mutex<T>) -> error_stack::Result<MutexGuard<'_, T>, KernelError> {
    mutex.lock().map_err(|_| poisoned())
}
