use std::future::Future;
use std::pin::Pin;

/// A pinned, boxed future that is required to be Send.
pub type BoxFutureSend<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
