//! Callable targets bound to prototypes

use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Body of a callable: positional arguments and keyword arguments in, value out
pub type FunctionBody = dyn Fn(&[Value], &Map<String, Value>) -> Value + Send + Sync;

/// A named callable with its declared parameter names
///
/// Parameter names are only used for rendering signatures. Cloning is cheap
/// and clones compare equal, since identity is the shared body.
#[derive(Clone)]
pub struct Function {
    name: String,
    params: Vec<String>,
    body: Arc<FunctionBody>,
}

impl Function {
    pub fn new<N, I, P, F>(name: N, params: I, body: F) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = P>,
        P: Into<String>,
        F: Fn(&[Value], &Map<String, Value>) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            body: Arc::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter names, positional first
    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn call(&self, args: &[Value], kwargs: &Map<String, Value>) -> Value {
        (self.body)(args, kwargs)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl Eq for Function {}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
