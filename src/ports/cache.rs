use std::time::Duration;

pub trait QuoteCache: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str, ttl: Duration);

    /// Drop entries whose key contains `substring`; with `None`, drop
    /// everything. Used when an administrator edits prices so quotes never
    /// serve stale data for the affected unit.
    fn invalidate(&self, substring: Option<&str>);
}
