use std::path::Path;

use anyhow::Result;
use bincode::{
    config::{BigEndian, WithOtherEndian},
    DefaultOptions, Options,
};
use serde::{de::DeserializeOwned, Serialize};
use sled::{
    transaction::{ConflictableTransactionError, TransactionError},
    Db as Sled, Tree,
};

type Encoder = WithOtherEndian<DefaultOptions, BigEndian>;

pub struct Db {
    handle: Sled,
    encoder: Encoder,
}
impl Db {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let handle = sled::open(path)?;
        let encoder = bincode::options().with_big_endian();
        Ok(Self { handle, encoder })
    }
    // removed from disk once dropped
    pub fn temporary() -> Result<Self> {
        let handle = sled::Config::new().temporary(true).open()?;
        let encoder = bincode::options().with_big_endian();
        Ok(Self { handle, encoder })
    }

    pub fn table(&self, name: &str) -> Result<Table> {
        let tree = self.handle.open_tree(name)?;
        Ok(Table {
            handle: self.handle.clone(),
            tree,
            encoder: self.encoder,
        })
    }

    pub async fn flush(&self) -> Result<usize> {
        let flushed = self.handle.flush_async().await?;
        Ok(flushed)
    }
}

/// A named tree of bincode-encoded rows keyed by big-endian `u64` ids,
/// so iteration yields rows in ascending id order.
#[derive(Clone)]
pub struct Table {
    handle: Sled,
    tree: Tree,
    encoder: Encoder,
}
impl Table {
    pub fn next_id(&self) -> Result<u64> {
        let id = self.handle.generate_id()?;
        Ok(id)
    }

    // CRUD
    pub fn insert<T: Serialize>(&self, id: u64, value: &T) -> Result<()> {
        let value = self.encoder.serialize(value)?;
        self.tree.insert(id.to_be_bytes(), value)?;
        Ok(())
    }
    pub fn get<T: DeserializeOwned>(&self, id: u64) -> Result<Option<T>> {
        let value = match self.tree.get(id.to_be_bytes())? {
            Some(value) => value,
            None => return Ok(None),
        };
        let value = self.encoder.deserialize(&value)?;
        Ok(Some(value))
    }
    /// Returns whether a row was present.
    pub fn remove(&self, id: u64) -> Result<bool> {
        let previous = self.tree.remove(id.to_be_bytes())?;
        Ok(previous.is_some())
    }

    /// Reads the row, applies `f` and writes the result back in one
    /// transaction. `f` may run more than once when the transaction retries.
    pub fn update<T, F>(&self, id: u64, f: F) -> Result<Option<T>>
    where
        T: Serialize + DeserializeOwned,
        F: Fn(T) -> T,
    {
        let key = id.to_be_bytes();
        let encoder = self.encoder;
        let updated = self.tree.transaction(|tx| {
            let current = match tx.get(key)? {
                Some(current) => current,
                None => return Ok(None),
            };
            let value: T = encoder
                .deserialize(&current)
                .map_err(ConflictableTransactionError::Abort)?;
            let value = f(value);
            let bytes = encoder
                .serialize(&value)
                .map_err(ConflictableTransactionError::Abort)?;
            tx.insert(&key[..], bytes)?;
            Ok(Some(value))
        });
        match updated {
            Ok(value) => Ok(value),
            Err(TransactionError::Abort(err)) => Err(err.into()),
            Err(TransactionError::Storage(err)) => Err(err.into()),
        }
    }

    // Iterators
    pub fn iter<'a, T: DeserializeOwned + 'a>(
        &'a self,
    ) -> impl Iterator<Item = Result<(u64, T)>> + 'a {
        self.tree.iter().map(move |item| {
            let (key, value) = item?;
            let key: [u8; 8] = key.as_ref().try_into()?;
            let value = self.encoder.deserialize(&value)?;
            Ok((u64::from_be_bytes(key), value))
        })
    }
}

// Required Debug implementations, the sled handles carry no useful state
impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db").finish()
    }
}
impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("name", &String::from_utf8_lossy(&self.tree.name()))
            .finish()
    }
}
