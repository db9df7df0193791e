use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::marker::PhantomData;

use time::OffsetDateTime;

/// Creation instant of an entity of type `T`, stored in UTC.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreatedAt<T>(OffsetDateTime, PhantomData<T>);

impl<T> CreatedAt<T> {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into(), PhantomData)
    }

    pub fn now() -> Self {
        Self::new(OffsetDateTime::now_utc())
    }
}

impl<T> From<CreatedAt<T>> for OffsetDateTime {
    fn from(value: CreatedAt<T>) -> Self {
        value.0
    }
}

impl<T> AsRef<OffsetDateTime> for CreatedAt<T> {
    fn as_ref(&self) -> &OffsetDateTime {
        &self.0
    }
}

impl<T> Serialize for CreatedAt<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        time::serde::rfc3339::serialize(&self.0, serializer)
    }
}

impl<'de, T> Deserialize<'de> for CreatedAt<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        time::serde::rfc3339::deserialize(deserializer).map(|time| Self(time, PhantomData))
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use crate::entity::{CreatedAt, UserOrder};

    #[test]
    fn serializes_as_rfc3339() -> Result<(), serde_json::Error> {
        let created_at = CreatedAt::<UserOrder>::new(datetime!(2024-03-01 12:30:00 UTC));
        let json = serde_json::to_string(&created_at)?;
        assert_eq!(json, "\"2024-03-01T12:30:00Z\"");
        let back: CreatedAt<UserOrder> = serde_json::from_str(&json)?;
        assert_eq!(back, created_at);
        Ok(())
    }
}
